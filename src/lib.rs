//! buckdeps - dependency identity, caching and versioning for multi-module builds
//!
//! Turns the resolved dependencies of every module of a build into external
//! dependency targets, caches them per build pass, and reports version
//! conflicts and in-repo substitutions.
//!
//! # Architecture
//!
//! - **Domain Layer** (`dependency_resolution`): identities, caches, naming and reports
//! - **Application Layer** (`application`): the resolution use case, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use buckdeps::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<()> {
//! let use_case = ResolveDependenciesUseCase::new(
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ResolutionRequest::new(PathBuf::from("buckdeps.manifest.yml"));
//! let response = use_case.execute(request).await?;
//!
//! let output = TextReportFormatter::new().format(
//!     &response.conflict_report,
//!     &response.substitution_report,
//!     &response.module_targets,
//!     &response.metadata,
//! )?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod dependency_resolution;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter, MANIFEST_FILENAME,
    };
    pub use crate::adapters::outbound::formatters::{JsonReportFormatter, TextReportFormatter};
    pub use crate::application::dto::{OutputFormat, ResolutionRequest, ResolutionResponse};
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::use_cases::ResolveDependenciesUseCase;
    pub use crate::dependency_resolution::domain::{
        BuildManifest, ConflictReport, ExternalDependency, ModuleResolution, Project,
        ProjectTree, ReportMetadata, ResolvedArtifact, SubstitutionReport,
        VersionlessDependency,
    };
    pub use crate::dependency_resolution::policies::{NamingPolicy, ReportThreshold};
    pub use crate::dependency_resolution::services::{
        ConflictReporter, DependencyRegistrar, ProjectCache, ReportGenerator,
        SubstitutionReporter,
    };
    pub use crate::ports::outbound::{
        BuildManifestReader, ConfigurationTargets, ExternalTarget, ModuleTargets, OutputPresenter,
        ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
}
