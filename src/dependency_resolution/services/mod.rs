pub mod conflict_reporter;
pub mod dependency_registrar;
pub mod project_cache;
pub mod report_generator;
pub mod substitution_reporter;

pub use conflict_reporter::ConflictReporter;
pub use dependency_registrar::{DependencyRegistrar, ModuleRegistration};
pub use project_cache::{DependencyCache, InfoCache, ProjectCache, ScopeCache, SubstitutionCache};
pub use report_generator::ReportGenerator;
pub use substitution_reporter::SubstitutionReporter;
