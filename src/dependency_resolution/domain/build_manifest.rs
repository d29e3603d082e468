use super::project::ProjectTree;
use super::VersionlessDependency;
use crate::shared::Result;
use std::path::PathBuf;

/// An external artifact the host build already resolved to a local file
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedArtifact {
    pub group: String,
    pub name: String,
    pub version: String,
    pub classifier: Option<String>,
    pub file: PathBuf,
    pub sources: Option<PathBuf>,
}

impl ResolvedArtifact {
    pub fn versionless(&self) -> Result<VersionlessDependency> {
        VersionlessDependency::new(self.group.as_str(), self.name.as_str(), self.classifier.clone())
    }
}

/// Everything one configuration (e.g. `compileClasspath`) resolved to
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationResolution {
    pub name: String,
    pub artifacts: Vec<ResolvedArtifact>,
}

/// Resolution results for one module of the build
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleResolution {
    pub project_path: String,
    pub configurations: Vec<ConfigurationResolution>,
}

impl ModuleResolution {
    pub fn artifacts(&self) -> impl Iterator<Item = &ResolvedArtifact> {
        self.configurations.iter().flat_map(|c| c.artifacts.iter())
    }
}

/// BuildManifest - the host build's project tree plus per-module resolution
#[derive(Debug, Clone)]
pub struct BuildManifest {
    tree: ProjectTree,
    modules: Vec<ModuleResolution>,
}

impl BuildManifest {
    pub fn new(tree: ProjectTree, modules: Vec<ModuleResolution>) -> Self {
        Self { tree, modules }
    }

    pub fn tree(&self) -> &ProjectTree {
        &self.tree
    }

    pub fn modules(&self) -> &[ModuleResolution] {
        &self.modules
    }

    pub fn into_parts(self) -> (ProjectTree, Vec<ModuleResolution>) {
        (self.tree, self.modules)
    }

    pub fn artifact_count(&self) -> usize {
        self.modules.iter().map(|m| m.artifacts().count()).sum()
    }
}
