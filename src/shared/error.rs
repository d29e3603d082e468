use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a clean run from one
/// that surfaced version conflicts or failed outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - reports written, no blocking conflicts
    Success = 0,
    /// Version conflicts were found and `--fail-on-conflict` was given
    ConflictsDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (manifest, configuration, cache lifecycle, file I/O)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ConflictsDetected => write!(f, "Conflicts Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// The cache families held by the project cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKind {
    Scope,
    Target,
    Info,
    Substitution,
    Dependency,
}

impl CacheKind {
    /// Prefix used when building the per-project cache key
    pub fn key_prefix(self) -> &'static str {
        match self {
            CacheKind::Scope => "scopeCache",
            CacheKind::Target => "targetCache",
            CacheKind::Info => "infoCache",
            CacheKind::Substitution => "substitutionCache",
            CacheKind::Dependency => "dependencyCache",
        }
    }
}

impl fmt::Display for CacheKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CacheKind::Scope => "Scope",
            CacheKind::Target => "Target",
            CacheKind::Info => "Info",
            CacheKind::Substitution => "Substitution",
            CacheKind::Dependency => "Dependency",
        };
        write!(f, "{}", name)
    }
}

/// Application-specific errors for dependency resolution and reporting.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum BuckDepsError {
    #[error("{cache} cache '{key}' is not set\n\n💡 Hint: the cache must be initialized before it is read in a build pass")]
    CacheNotInitialized { cache: CacheKind, key: String },

    #[error("Invalid coordinate: {field} must not be empty (got '{value}')")]
    InvalidCoordinate { field: &'static str, value: String },

    #[error("Resolution manifest not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse resolution manifest: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the manifest is valid YAML or JSON")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}")]
    InvalidProjectPath { path: String, reason: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}
