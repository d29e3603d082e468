use super::project_cache::ProjectCache;
use crate::dependency_resolution::domain::{ModuleResolution, Project, Scope};
use crate::dependency_resolution::policies::NamingPolicy;
use crate::shared::error::BuckDepsError;
use crate::shared::Result;
use std::sync::Arc;
use tracing::debug;

/// Counts of what one module contributed to the shared caches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRegistration {
    pub project_path: String,
    pub external_count: usize,
    pub substitution_count: usize,
}

/// DependencyRegistrar service for feeding one module's resolution into the caches
///
/// Cheap to clone; every clone shares the same cache and policy, so
/// modules can register from separate workers.
#[derive(Clone)]
pub struct DependencyRegistrar {
    cache: Arc<ProjectCache>,
    policy: Arc<NamingPolicy>,
    substitution_enabled: bool,
}

impl DependencyRegistrar {
    pub fn new(cache: Arc<ProjectCache>, policy: Arc<NamingPolicy>, substitution_enabled: bool) -> Self {
        Self {
            cache,
            policy,
            substitution_enabled,
        }
    }

    /// Registers every artifact of every configuration of the module
    ///
    /// An artifact whose identity is another in-repo project becomes a
    /// substitution when substitution is enabled. Everything else becomes
    /// an external dependency in the dependency cache, the module's target
    /// cache and the configuration's scope.
    pub fn register_module(&self, module: &ModuleResolution) -> Result<ModuleRegistration> {
        let project = self.project(&module.project_path)?;
        let scopes = self.cache.scope_cache(&project)?;
        let targets = self.cache.target_cache(&project)?;
        let projects = if self.substitution_enabled {
            Some(self.cache.info_cache()?)
        } else {
            None
        };

        let mut registration = ModuleRegistration {
            project_path: project.path().to_string(),
            external_count: 0,
            substitution_count: 0,
        };

        for configuration in &module.configurations {
            let mut scope = Scope::new(configuration.name.as_str());

            for artifact in &configuration.artifacts {
                let versionless = artifact.versionless()?;

                let substitute = projects
                    .as_ref()
                    .and_then(|projects| projects.get(&versionless))
                    .filter(|target| target.as_str() != project.path())
                    .cloned();
                if let Some(target) = substitute {
                    debug!("{}: substituting {} with {}", project.path(), versionless, target);
                    scope.add_target(target.as_str());
                    self.cache.register_substitution(&project, versionless, target)?;
                    registration.substitution_count += 1;
                    continue;
                }

                let dependency = self.policy.external_dependency(artifact)?;
                targets.target_for(&dependency);
                scope.add_external(dependency.clone());
                self.cache.register_dependency(&project, dependency)?;
                registration.external_count += 1;
            }

            scopes.insert(configuration.name.clone(), scope);
        }

        debug!(
            "Registered {}: {} external, {} substituted",
            registration.project_path, registration.external_count, registration.substitution_count
        );
        Ok(registration)
    }

    fn project(&self, path: &str) -> Result<Project> {
        self.cache.tree().find(path).cloned().ok_or_else(|| {
            BuckDepsError::InvalidProjectPath {
                path: path.to_string(),
                reason: "module is not part of the project tree".to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_resolution::domain::{
        ConfigurationResolution, ProjectTree, ResolvedArtifact, VersionlessDependency,
    };
    use std::path::PathBuf;

    fn tree() -> Arc<ProjectTree> {
        Arc::new(
            ProjectTree::new(
                Project::new(":", "sample", None).unwrap(),
                vec![
                    Project::new(":app", "app", Some("com.example".to_string())).unwrap(),
                    Project::new(":core", "core", Some("com.example".to_string())).unwrap(),
                ],
            )
            .unwrap(),
        )
    }

    fn artifact(group: &str, name: &str, version: &str) -> ResolvedArtifact {
        ResolvedArtifact {
            group: group.to_string(),
            name: name.to_string(),
            version: version.to_string(),
            classifier: None,
            file: PathBuf::from(format!("/cache/{}-{}.jar", name, version)),
            sources: None,
        }
    }

    fn module(path: &str, artifacts: Vec<ResolvedArtifact>) -> ModuleResolution {
        ModuleResolution {
            project_path: path.to_string(),
            configurations: vec![ConfigurationResolution {
                name: "compileClasspath".to_string(),
                artifacts,
            }],
        }
    }

    fn registrar(substitution: bool, modules: &[ModuleResolution]) -> DependencyRegistrar {
        let cache = Arc::new(ProjectCache::new(tree()));
        cache.init_all();
        let policy = NamingPolicy::new(true, false, vec![])
            .with_version_counts(modules)
            .unwrap();
        DependencyRegistrar::new(cache, Arc::new(policy), substitution)
    }

    #[test]
    fn test_register_external_dependencies() {
        let modules = vec![module(
            ":app",
            vec![
                artifact("com.squareup.okio", "okio", "2.10.0"),
                artifact("com.google.guava", "guava", "31.1-jre"),
            ],
        )];
        let registrar = registrar(true, &modules);
        let registration = registrar.register_module(&modules[0]).unwrap();

        assert_eq!(registration.external_count, 2);
        assert_eq!(registration.substitution_count, 0);

        let app = registrar.cache.tree().find(":app").unwrap().clone();
        let deps = registrar.cache.external_dependencies(&app).unwrap();
        assert_eq!(deps.len(), 2);
        assert_eq!(deps[1].target_name(), "okio");

        let scopes = registrar.cache.scope_cache(&app).unwrap();
        let scope = scopes.get("compileClasspath").unwrap();
        assert_eq!(scope.external_dependencies().count(), 2);

        assert_eq!(registrar.cache.target_cache(&app).unwrap().len(), 2);
    }

    #[test]
    fn test_register_substitutes_in_repo_project() {
        let modules = vec![module(
            ":app",
            vec![
                artifact("com.example", "core", "1.0"),
                artifact("com.squareup.okio", "okio", "2.10.0"),
            ],
        )];
        let registrar = registrar(true, &modules);
        let registration = registrar.register_module(&modules[0]).unwrap();

        assert_eq!(registration.external_count, 1);
        assert_eq!(registration.substitution_count, 1);

        let subs = registrar.cache.substitution_cache().unwrap();
        let core = VersionlessDependency::new("com.example", "core", None).unwrap();
        assert_eq!(
            subs.get(":app").unwrap().get(&core).map(String::as_str),
            Some(":core")
        );

        let app = registrar.cache.tree().find(":app").unwrap().clone();
        let scopes = registrar.cache.scope_cache(&app).unwrap();
        let scope = scopes.get("compileClasspath").unwrap();
        assert_eq!(scope.target_dependencies().collect::<Vec<_>>(), vec![":core"]);
    }

    #[test]
    fn test_substitution_disabled_keeps_external() {
        let modules = vec![module(":app", vec![artifact("com.example", "core", "1.0")])];
        let registrar = registrar(false, &modules);
        let registration = registrar.register_module(&modules[0]).unwrap();

        assert_eq!(registration.external_count, 1);
        assert_eq!(registration.substitution_count, 0);
        assert!(registrar.cache.substitution_cache().unwrap().is_empty());
    }

    #[test]
    fn test_module_never_substitutes_itself() {
        let modules = vec![module(":core", vec![artifact("com.example", "core", "0.9")])];
        let registrar = registrar(true, &modules);
        let registration = registrar.register_module(&modules[0]).unwrap();
        assert_eq!(registration.substitution_count, 0);
        assert_eq!(registration.external_count, 1);
    }

    #[test]
    fn test_unknown_module_rejected() {
        let modules = vec![module(":missing", vec![])];
        let registrar = registrar(true, &modules);
        assert!(registrar.register_module(&modules[0]).is_err());
    }

    #[test]
    fn test_register_after_reset_fails() {
        let modules = vec![module(":app", vec![artifact("org.a", "a", "1.0")])];
        let registrar = registrar(true, &modules);
        registrar.cache.reset_all();

        let err = registrar.register_module(&modules[0]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BuckDepsError>(),
            Some(BuckDepsError::CacheNotInitialized { .. })
        ));
    }
}
