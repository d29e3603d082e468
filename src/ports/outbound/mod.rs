/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, formatting).
pub mod build_manifest_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use build_manifest_reader::BuildManifestReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::{ConfigurationTargets, ExternalTarget, ModuleTargets, ReportFormatter};
