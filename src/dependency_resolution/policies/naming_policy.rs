use crate::dependency_resolution::domain::{
    ExternalDependency, ModuleResolution, ResolvedArtifact, VersionlessDependency,
};
use crate::shared::Result;
use std::collections::{HashMap, HashSet};

/// NamingPolicy for deciding how external dependency targets are named
///
/// Rules, in order:
/// 1. Identities listed as versioned exceptions always keep their version
/// 2. With versionless naming off, every target keeps its version
/// 3. Otherwise the version is dropped when only one version of the
///    identity exists anywhere in the build
///
/// Padding applies to every versioned target alike.
#[derive(Debug, Clone, Default)]
pub struct NamingPolicy {
    versionless: bool,
    pad_versions: bool,
    versioned_exceptions: HashSet<String>,
    version_counts: HashMap<VersionlessDependency, usize>,
}

impl NamingPolicy {
    pub fn new(versionless: bool, pad_versions: bool, versioned_exceptions: Vec<String>) -> Self {
        Self {
            versionless,
            pad_versions,
            versioned_exceptions: versioned_exceptions.into_iter().collect(),
            version_counts: HashMap::new(),
        }
    }

    /// Counts distinct versions per identity across every module of the build
    ///
    /// Must run over the whole build before any target is named, since a
    /// single extra version anywhere changes every module's target names.
    pub fn with_version_counts(mut self, modules: &[ModuleResolution]) -> Result<Self> {
        let mut versions: HashMap<VersionlessDependency, HashSet<&str>> = HashMap::new();
        for artifact in modules.iter().flat_map(ModuleResolution::artifacts) {
            versions
                .entry(artifact.versionless()?)
                .or_default()
                .insert(artifact.version.as_str());
        }

        self.version_counts = versions
            .into_iter()
            .map(|(dependency, versions)| (dependency, versions.len()))
            .collect();
        Ok(self)
    }

    pub fn is_versioned(&self, dependency: &VersionlessDependency) -> bool {
        if self.is_exception(dependency) || !self.versionless {
            return true;
        }
        self.version_counts.get(dependency).copied().unwrap_or(0) > 1
    }

    pub fn use_padded_version(&self) -> bool {
        self.pad_versions
    }

    /// Builds the external dependency for a resolved artifact under this policy
    pub fn external_dependency(&self, artifact: &ResolvedArtifact) -> Result<ExternalDependency> {
        let versionless = artifact.versionless()?;
        let is_versioned = self.is_versioned(&versionless);

        ExternalDependency::builder()
            .versionless(versionless)
            .version(artifact.version.as_str())
            .real_file(artifact.file.clone())
            .real_source_file(artifact.sources.clone())
            .is_versioned(is_versioned)
            .use_padded_version(self.pad_versions)
            .build()
    }

    fn is_exception(&self, dependency: &VersionlessDependency) -> bool {
        self.versioned_exceptions.contains(&dependency.coords())
            || self
                .versioned_exceptions
                .contains(&dependency.without_classifier().coords())
    }
}
