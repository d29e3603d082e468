use crate::dependency_resolution::domain::{ConflictReport, ReportMetadata, SubstitutionReport};
use crate::dependency_resolution::services::ModuleRegistration;
use crate::ports::outbound::ModuleTargets;

/// ResolutionResponse - Internal response DTO of one resolution pass
///
/// Everything here is a snapshot; the caches it was built from are
/// already reset when the response is returned.
#[derive(Debug, Clone)]
pub struct ResolutionResponse {
    pub conflict_report: ConflictReport,
    pub substitution_report: SubstitutionReport,
    /// External targets per module, in module path order
    pub module_targets: Vec<ModuleTargets>,
    pub metadata: ReportMetadata,
    /// What each module contributed, in module path order
    pub registrations: Vec<ModuleRegistration>,
}

impl ResolutionResponse {
    /// True when the report should fail a `--fail-on-conflict` run
    pub fn has_conflicts(&self) -> bool {
        self.conflict_report.has_conflicts() || !self.substitution_report.conflicts.is_empty()
    }
}
