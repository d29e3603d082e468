pub mod build_manifest;
pub mod conflict_report;
pub mod external_dependency;
pub mod project;
pub mod report_metadata;
pub mod scope;
pub mod substitution_report;
pub mod target_cache;
pub mod versionless_dependency;

pub use build_manifest::{BuildManifest, ConfigurationResolution, ModuleResolution, ResolvedArtifact};
pub use conflict_report::{ConflictGroup, ConflictReport, ModuleListing, PackagingAnomaly, VersionCount};
pub use external_dependency::{pad_version, ExternalDependency};
pub use project::{Project, ProjectTree, ROOT_PATH};
pub use report_metadata::ReportMetadata;
pub use scope::Scope;
pub use substitution_report::{
    ModuleSubstitutions, SubstitutionConflict, SubstitutionDirective, SubstitutionReport,
};
pub use target_cache::{TargetCache, DEFAULT_EXTERNAL_ROOT};
pub use versionless_dependency::{VersionlessDependency, COORD_DELIMITER};
