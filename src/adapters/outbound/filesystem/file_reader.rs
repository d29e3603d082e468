use crate::dependency_resolution::domain::{
    BuildManifest, ConfigurationResolution, ModuleResolution, Project, ProjectTree,
    ResolvedArtifact, ROOT_PATH,
};
use crate::ports::outbound::BuildManifestReader;
use crate::shared::error::BuckDepsError;
use crate::shared::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum file size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Manifest file looked up when a directory is given
pub const MANIFEST_FILENAME: &str = "buckdeps.manifest.yml";

#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    root: Option<RawProject>,
    #[serde(default)]
    projects: Vec<RawProject>,
}

#[derive(Debug, Deserialize)]
struct RawProject {
    #[serde(default = "default_root_path")]
    path: String,
    name: String,
    #[serde(default)]
    group: Option<String>,
    #[serde(default)]
    configurations: Vec<RawConfiguration>,
}

#[derive(Debug, Deserialize)]
struct RawConfiguration {
    name: String,
    #[serde(default)]
    artifacts: Vec<RawArtifact>,
}

#[derive(Debug, Deserialize)]
struct RawArtifact {
    group: String,
    name: String,
    version: String,
    #[serde(default)]
    classifier: Option<String>,
    file: PathBuf,
    #[serde(default)]
    sources: Option<PathBuf>,
}

fn default_root_path() -> String {
    ROOT_PATH.to_string()
}

impl RawProject {
    fn to_project(&self) -> Result<Project> {
        Project::new(self.path.as_str(), self.name.as_str(), self.group.clone())
    }

    fn into_module(self, project: &Project) -> ModuleResolution {
        ModuleResolution {
            project_path: project.path().to_string(),
            configurations: self
                .configurations
                .into_iter()
                .map(|configuration| ConfigurationResolution {
                    name: configuration.name,
                    artifacts: configuration
                        .artifacts
                        .into_iter()
                        .map(|artifact| ResolvedArtifact {
                            group: artifact.group,
                            name: artifact.name,
                            version: artifact.version,
                            classifier: artifact.classifier,
                            file: artifact.file,
                            sources: artifact.sources,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// FileSystemReader adapter for reading resolution manifests from disk
///
/// Accepts YAML or JSON (YAML is a superset) and maps the raw document
/// onto the domain project tree and module resolutions.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_type, e))?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                file_size,
                MAX_FILE_SIZE
            );
        }

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }

    fn parse_manifest(content: &str, path: &Path) -> Result<BuildManifest> {
        let raw: RawManifest =
            serde_yaml_ng::from_str(content).map_err(|e| BuckDepsError::ManifestParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let root = match raw.root {
            Some(root) => root,
            None => RawProject {
                path: default_root_path(),
                name: path
                    .parent()
                    .and_then(|p| p.file_name())
                    .and_then(|n| n.to_str())
                    .unwrap_or("root")
                    .to_string(),
                group: None,
                configurations: Vec::new(),
            },
        };

        let root_project = root.to_project()?;
        let mut subprojects = Vec::with_capacity(raw.projects.len());
        let mut modules = Vec::with_capacity(raw.projects.len() + 1);
        modules.push(root.into_module(&root_project));

        for raw_project in raw.projects {
            let project = raw_project.to_project()?;
            modules.push(raw_project.into_module(&project));
            subprojects.push(project);
        }

        let tree = ProjectTree::new(root_project, subprojects)?;
        Ok(BuildManifest::new(tree, modules))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildManifestReader for FileSystemReader {
    fn read_manifest(&self, manifest_path: &Path) -> Result<BuildManifest> {
        let manifest_path = if manifest_path.is_dir() {
            manifest_path.join(MANIFEST_FILENAME)
        } else {
            manifest_path.to_path_buf()
        };

        if !manifest_path.exists() {
            return Err(BuckDepsError::ManifestNotFound {
                path: manifest_path.clone(),
                suggestion: format!(
                    "Export the resolved dependencies of the build to \"{}\", or pass its location with --manifest.",
                    manifest_path.display()
                ),
            }
            .into());
        }

        let content = self
            .safe_read_file(&manifest_path, "resolution manifest")
            .map_err(|e| BuckDepsError::FileReadError {
                path: manifest_path.clone(),
                details: e.to_string(),
            })?;

        Self::parse_manifest(&content, &manifest_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"
root:
  name: sample
projects:
  - path: ":app"
    name: app
    group: com.example
    configurations:
      - name: compileClasspath
        artifacts:
          - group: com.squareup.okio
            name: okio
            version: "2.10.0"
            file: /cache/okio-2.10.0.jar
            sources: /cache/okio-2.10.0-sources.jar
          - group: com.example
            name: core
            version: "1.0"
            file: /cache/core-1.0.aar
  - path: ":core"
    name: core
    group: com.example
"#;

    #[test]
    fn test_read_manifest_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(MANIFEST_FILENAME);
        fs::write(&path, MANIFEST).unwrap();

        let manifest = FileSystemReader::new().read_manifest(&path).unwrap();

        assert_eq!(manifest.tree().root().name(), "sample");
        assert_eq!(manifest.tree().subprojects().len(), 2);
        assert_eq!(manifest.modules().len(), 3);
        assert_eq!(manifest.artifact_count(), 2);

        let app = &manifest.modules()[1];
        assert_eq!(app.project_path, ":app");
        let okio = &app.configurations[0].artifacts[0];
        assert_eq!(okio.version, "2.10.0");
        assert_eq!(
            okio.sources.as_deref(),
            Some(Path::new("/cache/okio-2.10.0-sources.jar"))
        );
    }

    #[test]
    fn test_read_manifest_from_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(MANIFEST_FILENAME), MANIFEST).unwrap();

        let manifest = FileSystemReader::new().read_manifest(temp_dir.path()).unwrap();
        assert_eq!(manifest.tree().len(), 3);
    }

    #[test]
    fn test_read_manifest_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("manifest.json");
        fs::write(
            &path,
            r#"{"root": {"name": "r"}, "projects": [{"path": ":a", "name": "a"}]}"#,
        )
        .unwrap();

        let manifest = FileSystemReader::new().read_manifest(&path).unwrap();
        assert!(manifest.tree().find(":a").is_some());
    }

    #[test]
    fn test_read_manifest_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_manifest(temp_dir.path());

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Resolution manifest not found"));
    }

    #[test]
    fn test_read_manifest_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.yml");
        fs::write(&path, "projects: [[[broken").unwrap();

        let result = FileSystemReader::new().read_manifest(&path);
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to parse resolution manifest"));
    }

    #[test]
    fn test_read_manifest_duplicate_projects() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dup.yml");
        fs::write(
            &path,
            "projects:\n  - { path: \":a\", name: a }\n  - { path: \":a\", name: a }\n",
        )
        .unwrap();

        let result = FileSystemReader::new().read_manifest(&path);
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("declared more than once"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_manifest_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.yml");
        fs::write(&target, MANIFEST).unwrap();
        let link = temp_dir.path().join("link.yml");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = FileSystemReader::new().read_manifest(&link);
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("symbolic link"));
    }
}
