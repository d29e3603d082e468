use crate::dependency_resolution::domain::{ConflictReport, ReportMetadata, SubstitutionReport};
use crate::shared::Result;
use serde::Serialize;

/// One external dependency target a module references
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalTarget {
    pub maven_coords: String,
    pub target_name: String,
    pub versionless_target_name: String,
    pub target_path: String,
}

/// What one configuration of a module depends on, as target paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigurationTargets {
    pub configuration: String,
    /// External dependency targets, in maven coordinate order
    pub external_targets: Vec<String>,
    /// In-repo projects that replaced an external coordinate
    pub target_dependencies: Vec<String>,
}

/// The external targets of one module, sorted by maven coordinates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleTargets {
    pub module: String,
    pub targets: Vec<ExternalTarget>,
    /// Per-configuration scopes, sorted by configuration name
    pub configurations: Vec<ConfigurationTargets>,
}

/// ReportFormatter port for rendering the end-of-pass reports
pub trait ReportFormatter {
    /// Formats the conflict and substitution reports into a single document
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(
        &self,
        conflicts: &ConflictReport,
        substitutions: &SubstitutionReport,
        modules: &[ModuleTargets],
        metadata: &ReportMetadata,
    ) -> Result<String>;
}
