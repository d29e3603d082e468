use crate::dependency_resolution::domain::BuildManifest;
use crate::shared::Result;
use std::path::Path;

/// BuildManifestReader port for loading the host build's resolution results
///
/// The host build tool exports its project tree and the artifacts each
/// module resolved; this port turns that export into domain values.
pub trait BuildManifestReader {
    /// Reads and parses the manifest at the given path
    ///
    /// # Errors
    /// Returns an error if:
    /// - The manifest does not exist or cannot be read
    /// - The manifest is not valid YAML/JSON
    /// - A project path or coordinate in it is invalid
    fn read_manifest(&self, manifest_path: &Path) -> Result<BuildManifest>;
}
