use buckdeps::dependency_resolution::domain::ConfigurationResolution;
use buckdeps::prelude::*;
use std::path::{Path, PathBuf};

/// Mock BuildManifestReader serving an in-memory build
///
/// Every module is a subproject in group `com.example` named after the
/// last segment of its path.
pub struct MockManifestReader {
    modules: Vec<(String, Vec<ResolvedArtifact>)>,
    should_fail: bool,
}

impl MockManifestReader {
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
            should_fail: false,
        }
    }

    #[allow(dead_code)]
    pub fn with_failure() -> Self {
        Self {
            modules: Vec::new(),
            should_fail: true,
        }
    }

    /// Adds a module resolving `group:name:version` coordinates
    pub fn with_module(mut self, path: &str, coords: &[&str]) -> Self {
        let artifacts = coords.iter().map(|c| artifact(c)).collect();
        self.modules.push((path.to_string(), artifacts));
        self
    }
}

fn artifact(coords: &str) -> ResolvedArtifact {
    let parts: Vec<&str> = coords.split(':').collect();
    let (group, name, version) = (parts[0], parts[1], parts[2]);
    ResolvedArtifact {
        group: group.to_string(),
        name: name.to_string(),
        version: version.to_string(),
        classifier: parts.get(3).map(|c| c.to_string()),
        file: PathBuf::from(format!("/cache/{}-{}.jar", name, version)),
        sources: None,
    }
}

impl BuildManifestReader for MockManifestReader {
    fn read_manifest(&self, _path: &Path) -> Result<BuildManifest> {
        if self.should_fail {
            anyhow::bail!("Mock manifest read failure");
        }

        let root = Project::new(":", "sample", None)?;
        let mut subprojects = Vec::new();
        let mut modules = vec![ModuleResolution {
            project_path: ":".to_string(),
            configurations: Vec::new(),
        }];

        for (path, artifacts) in &self.modules {
            let name = path.rsplit(':').next().unwrap_or(path.as_str());
            subprojects.push(Project::new(path.as_str(), name, Some("com.example".to_string()))?);
            modules.push(ModuleResolution {
                project_path: path.clone(),
                configurations: vec![ConfigurationResolution {
                    name: "compileClasspath".to_string(),
                    artifacts: artifacts.clone(),
                }],
            });
        }

        Ok(BuildManifest::new(ProjectTree::new(root, subprojects)?, modules))
    }
}
