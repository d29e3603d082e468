use crate::dependency_resolution::domain::DEFAULT_EXTERNAL_ROOT;
use crate::dependency_resolution::policies::ReportThreshold;
use std::path::PathBuf;

/// ResolutionRequest - Internal request DTO for one dependency resolution pass
#[derive(Debug, Clone)]
pub struct ResolutionRequest {
    /// Resolution manifest file, or a directory containing one
    pub manifest_path: PathBuf,
    /// Which version groups the conflict report keeps
    pub threshold: ReportThreshold,
    /// Drop the version from target names of single-version identities
    pub versionless: bool,
    /// Zero-pad version parts in versioned target names
    pub pad_versions: bool,
    /// Coordinates (`group:name[:classifier]`) that always keep their version
    pub versioned_exceptions: Vec<String>,
    /// Replace in-repo coordinates with project targets
    pub substitution_enabled: bool,
    /// Directory external dependency targets are generated under
    pub external_root: String,
}

impl ResolutionRequest {
    pub fn new(manifest_path: PathBuf) -> Self {
        Self {
            manifest_path,
            threshold: ReportThreshold::default(),
            versionless: true,
            pad_versions: false,
            versioned_exceptions: Vec::new(),
            substitution_enabled: true,
            external_root: DEFAULT_EXTERNAL_ROOT.to_string(),
        }
    }
}
