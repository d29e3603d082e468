use super::versionless_dependency::{VersionlessDependency, COORD_DELIMITER};
use crate::shared::error::BuckDepsError;
use crate::shared::Result;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

const NAME_DELIMITER: &str = "-";

/// ExternalDependency value object - one resolved artifact of one library version
///
/// All derived strings are computed once at construction; the value is
/// immutable afterwards. Identity (equality, hashing, ordering) is the
/// maven coordinate string, so two artifacts that differ only in their
/// resolved file location are the same dependency.
#[derive(Debug, Clone)]
pub struct ExternalDependency {
    versionless: VersionlessDependency,
    version: String,
    real_file: PathBuf,
    real_source_file: Option<PathBuf>,
    is_versioned: bool,
    use_padded_version: bool,
    packaging: String,
    maven_coords: String,
    target_name: String,
}

impl ExternalDependency {
    pub fn builder() -> ExternalDependencyBuilder {
        ExternalDependencyBuilder::default()
    }

    pub fn versionless(&self) -> &VersionlessDependency {
        &self.versionless
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn real_file(&self) -> &Path {
        &self.real_file
    }

    pub fn real_source_file(&self) -> Option<&Path> {
        self.real_source_file.as_deref()
    }

    pub fn is_versioned(&self) -> bool {
        self.is_versioned
    }

    pub fn use_padded_version(&self) -> bool {
        self.use_padded_version
    }

    /// Extension of the resolved file, e.g. `jar` or `aar`
    pub fn packaging(&self) -> &str {
        &self.packaging
    }

    /// `group:name:packaging[:classifier]:version`
    pub fn maven_coords(&self) -> &str {
        &self.maven_coords
    }

    /// `group:name:version`, blind to packaging and classifier
    pub fn maven_coords_for_validation(&self) -> String {
        [
            self.versionless.group(),
            self.versionless.name(),
            self.version.as_str(),
        ]
        .join(COORD_DELIMITER)
    }

    /// Everything in the maven coordinates before the version
    pub fn versionless_coords(&self) -> &str {
        match self.maven_coords.rfind(COORD_DELIMITER) {
            Some(index) => &self.maven_coords[..index],
            None => &self.maven_coords,
        }
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    /// `name[-classifier]`
    pub fn versionless_target_name(&self) -> String {
        let mut name = self.versionless.name().to_string();
        if let Some(classifier) = self.versionless.classifier() {
            name.push_str(NAME_DELIMITER);
            name.push_str(classifier);
        }
        name
    }

    /// Directory of the group inside the external dependency tree, `com/google/guava`
    pub fn base_path(&self) -> PathBuf {
        self.versionless.group().split('.').collect()
    }

    fn compute_maven_coords(versionless: &VersionlessDependency, packaging: &str, version: &str) -> String {
        let mut parts = vec![versionless.group(), versionless.name(), packaging];
        if let Some(classifier) = versionless.classifier() {
            parts.push(classifier);
        }
        parts.push(version);
        parts.join(COORD_DELIMITER)
    }

    fn compute_target_name(
        versionless: &VersionlessDependency,
        version: &str,
        is_versioned: bool,
        use_padded_version: bool,
    ) -> String {
        let mut target_name = versionless.name().to_string();
        if is_versioned {
            target_name.push_str(NAME_DELIMITER);
            if use_padded_version {
                target_name.push_str(&pad_version(version));
            } else {
                target_name.push_str(version);
            }
        }
        if let Some(classifier) = versionless.classifier() {
            target_name.push_str(NAME_DELIMITER);
            target_name.push_str(classifier);
        }
        target_name
    }
}

/// Zero-pads every dotted segment of a version: `1.2` becomes `001.0002`,
/// `1.10` becomes `001.0010`.
///
/// Segments are split right after each dot and keep it. A segment
/// shorter than three characters is padded to four; longer segments
/// still get a single leading zero. String order follows numeric order
/// only while every segment before the last has at most two digits and
/// the last has at most three: `1.100.0` sorts before `1.99.0`.
pub fn pad_version(version: &str) -> String {
    version
        .split_inclusive('.')
        .map(|part| {
            let padding = 4 - part.chars().count().min(3);
            format!("{}{}", "0".repeat(padding), part)
        })
        .collect()
}

fn packaging_of(file: &Path) -> String {
    file.extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_string()
}

impl PartialEq for ExternalDependency {
    fn eq(&self, other: &Self) -> bool {
        self.maven_coords == other.maven_coords
    }
}

impl Eq for ExternalDependency {}

impl Hash for ExternalDependency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.maven_coords.hash(state);
    }
}

impl PartialOrd for ExternalDependency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExternalDependency {
    fn cmp(&self, other: &Self) -> Ordering {
        self.maven_coords.cmp(&other.maven_coords)
    }
}

impl fmt::Display for ExternalDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.maven_coords, self.real_file.display())
    }
}

/// Builder for [`ExternalDependency`]
#[derive(Debug, Default)]
pub struct ExternalDependencyBuilder {
    versionless: Option<VersionlessDependency>,
    version: Option<String>,
    real_file: Option<PathBuf>,
    real_source_file: Option<PathBuf>,
    is_versioned: bool,
    use_padded_version: bool,
}

impl ExternalDependencyBuilder {
    pub fn versionless(mut self, value: VersionlessDependency) -> Self {
        self.versionless = Some(value);
        self
    }

    pub fn version(mut self, value: impl Into<String>) -> Self {
        self.version = Some(value.into());
        self
    }

    pub fn real_file(mut self, value: impl Into<PathBuf>) -> Self {
        self.real_file = Some(value.into());
        self
    }

    pub fn real_source_file(mut self, value: Option<PathBuf>) -> Self {
        self.real_source_file = value;
        self
    }

    pub fn is_versioned(mut self, value: bool) -> Self {
        self.is_versioned = value;
        self
    }

    pub fn use_padded_version(mut self, value: bool) -> Self {
        self.use_padded_version = value;
        self
    }

    pub fn build(self) -> Result<ExternalDependency> {
        let versionless = self.versionless.ok_or_else(|| BuckDepsError::Validation {
            message: "versionless identity is required".to_string(),
        })?;
        let version = self.version.unwrap_or_default();
        if version.is_empty() {
            return Err(BuckDepsError::InvalidCoordinate {
                field: "version",
                value: version,
            }
            .into());
        }
        let real_file = self.real_file.ok_or_else(|| BuckDepsError::Validation {
            message: format!("resolved file is required for {}", versionless),
        })?;

        let packaging = packaging_of(&real_file);
        let maven_coords =
            ExternalDependency::compute_maven_coords(&versionless, &packaging, &version);
        let target_name = ExternalDependency::compute_target_name(
            &versionless,
            &version,
            self.is_versioned,
            self.use_padded_version,
        );

        Ok(ExternalDependency {
            versionless,
            version,
            real_file,
            real_source_file: self.real_source_file,
            is_versioned: self.is_versioned,
            use_padded_version: self.use_padded_version,
            packaging,
            maven_coords,
            target_name,
        })
    }
}
