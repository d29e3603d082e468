use crate::dependency_resolution::domain::{
    ExternalDependency, Project, ProjectTree, Scope, TargetCache, VersionlessDependency,
    DEFAULT_EXTERNAL_ROOT,
};
use crate::shared::error::{BuckDepsError, CacheKind};
use crate::shared::Result;
use dashmap::DashMap;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

/// Configuration name -> scope, for one module
pub type ScopeCache = DashMap<String, Scope>;

/// In-repo project identity -> project path
pub type InfoCache = HashMap<VersionlessDependency, String>;

/// Module path -> (external identity -> in-repo project path)
pub type SubstitutionCache = DashMap<String, HashMap<VersionlessDependency, String>>;

/// Module path -> external dependencies it registered
pub type DependencyCache = DashMap<String, HashSet<ExternalDependency>>;

/// ProjectCache - the typed cache manager for one build pass
///
/// Holds five cache families. Scope and target caches live per module.
/// Info, substitution and dependency caches live once at the root project
/// and are reached through any module by resolving its root first.
///
/// Every cache follows the same lifecycle: `init_*` stores a fresh empty
/// value, the accessor returns it, and `reset_*` removes it so that a
/// later read without a new `init_*` fails with
/// [`BuckDepsError::CacheNotInitialized`].
pub struct ProjectCache {
    tree: Arc<ProjectTree>,
    external_root: String,
    scope_caches: DashMap<String, Arc<ScopeCache>>,
    target_caches: DashMap<String, Arc<TargetCache>>,
    info_caches: DashMap<String, Arc<InfoCache>>,
    substitution_caches: DashMap<String, Arc<SubstitutionCache>>,
    dependency_caches: DashMap<String, Arc<DependencyCache>>,
}

impl ProjectCache {
    pub fn new(tree: Arc<ProjectTree>) -> Self {
        Self::with_external_root(tree, DEFAULT_EXTERNAL_ROOT)
    }

    pub fn with_external_root(tree: Arc<ProjectTree>, external_root: impl Into<String>) -> Self {
        Self {
            tree,
            external_root: external_root.into(),
            scope_caches: DashMap::new(),
            target_caches: DashMap::new(),
            info_caches: DashMap::new(),
            substitution_caches: DashMap::new(),
            dependency_caches: DashMap::new(),
        }
    }

    pub fn tree(&self) -> &ProjectTree {
        &self.tree
    }

    /// `<prefix><project path>`, e.g. `scopeCache:app`
    pub fn cache_key(project: &Project, kind: CacheKind) -> String {
        format!("{}{}", kind.key_prefix(), project.path())
    }

    /// Key of a root-level cache, whichever module the lookup started from
    fn root_key(&self, kind: CacheKind) -> String {
        Self::cache_key(self.tree.root(), kind)
    }

    fn lookup<T>(map: &DashMap<String, Arc<T>>, kind: CacheKind, key: String) -> Result<Arc<T>> {
        match map.get(&key) {
            Some(value) => Ok(Arc::clone(value.value())),
            None => Err(BuckDepsError::CacheNotInitialized { cache: kind, key }.into()),
        }
    }

    // Scope cache

    pub fn init_scope_cache(&self, project: &Project) {
        let key = Self::cache_key(project, CacheKind::Scope);
        debug!("Initializing {}", key);
        self.scope_caches.insert(key, Arc::new(ScopeCache::new()));
    }

    pub fn scope_cache(&self, project: &Project) -> Result<Arc<ScopeCache>> {
        Self::lookup(
            &self.scope_caches,
            CacheKind::Scope,
            Self::cache_key(project, CacheKind::Scope),
        )
    }

    pub fn reset_scope_cache(&self, project: &Project) {
        let key = Self::cache_key(project, CacheKind::Scope);
        debug!("Resetting {}", key);
        self.scope_caches.remove(&key);
    }

    // Target cache

    pub fn init_target_cache_for_all(&self) {
        for project in self.tree.all_projects() {
            self.init_target_cache(project);
        }
    }

    pub fn reset_target_cache_for_all(&self) {
        for project in self.tree.all_projects() {
            self.reset_target_cache(project);
        }
    }

    fn init_target_cache(&self, project: &Project) {
        let key = Self::cache_key(project, CacheKind::Target);
        debug!("Initializing {}", key);
        self.target_caches.insert(
            key,
            Arc::new(TargetCache::new(self.external_root.as_str())),
        );
    }

    fn reset_target_cache(&self, project: &Project) {
        self.target_caches
            .remove(&Self::cache_key(project, CacheKind::Target));
    }

    pub fn target_cache(&self, project: &Project) -> Result<Arc<TargetCache>> {
        Self::lookup(
            &self.target_caches,
            CacheKind::Target,
            Self::cache_key(project, CacheKind::Target),
        )
    }

    // Info cache

    /// Indexes every subproject with a group as a substitution candidate
    pub fn init_info_cache(&self) {
        let mut projects = InfoCache::new();
        for project in self.tree.subprojects() {
            let Some(group) = project.group() else {
                debug!("Skipping {} in info cache: no group", project.path());
                continue;
            };
            match VersionlessDependency::new(group, project.name(), None) {
                Ok(dependency) => {
                    projects.insert(dependency, project.path().to_string());
                }
                Err(e) => debug!("Skipping {} in info cache: {}", project.path(), e),
            }
        }

        let key = self.root_key(CacheKind::Info);
        debug!("Initializing {} with {} project(s)", key, projects.len());
        self.info_caches.insert(key, Arc::new(projects));
    }

    pub fn info_cache(&self) -> Result<Arc<InfoCache>> {
        Self::lookup(&self.info_caches, CacheKind::Info, self.root_key(CacheKind::Info))
    }

    pub fn reset_info_cache(&self) {
        let key = self.root_key(CacheKind::Info);
        debug!("Resetting {}", key);
        self.info_caches.remove(&key);
    }

    // Substitution cache

    pub fn init_substitution_cache(&self) {
        let key = self.root_key(CacheKind::Substitution);
        debug!("Initializing {}", key);
        self.substitution_caches
            .insert(key, Arc::new(SubstitutionCache::new()));
    }

    pub fn substitution_cache(&self) -> Result<Arc<SubstitutionCache>> {
        Self::lookup(
            &self.substitution_caches,
            CacheKind::Substitution,
            self.root_key(CacheKind::Substitution),
        )
    }

    pub fn reset_substitution_cache(&self) {
        let key = self.root_key(CacheKind::Substitution);
        debug!("Resetting {}", key);
        self.substitution_caches.remove(&key);
    }

    /// Records that `project` uses `target` in place of `dependency`
    pub fn register_substitution(
        &self,
        project: &Project,
        dependency: VersionlessDependency,
        target: impl Into<String>,
    ) -> Result<()> {
        let cache = self.substitution_cache()?;
        cache
            .entry(project.path().to_string())
            .or_default()
            .insert(dependency, target.into());
        Ok(())
    }

    // Dependency cache

    pub fn init_dependency_cache(&self) {
        let key = self.root_key(CacheKind::Dependency);
        debug!("Initializing {}", key);
        self.dependency_caches
            .insert(key, Arc::new(DependencyCache::new()));
    }

    pub fn dependency_cache(&self) -> Result<Arc<DependencyCache>> {
        Self::lookup(
            &self.dependency_caches,
            CacheKind::Dependency,
            self.root_key(CacheKind::Dependency),
        )
    }

    pub fn reset_dependency_cache(&self) {
        let key = self.root_key(CacheKind::Dependency);
        debug!("Resetting {}", key);
        self.dependency_caches.remove(&key);
    }

    pub fn register_dependency(&self, project: &Project, dependency: ExternalDependency) -> Result<()> {
        let cache = self.dependency_cache()?;
        cache
            .entry(project.path().to_string())
            .or_default()
            .insert(dependency);
        Ok(())
    }

    /// Distinct external dependencies `project` registered, sorted by maven coordinates
    pub fn external_dependencies(&self, project: &Project) -> Result<Vec<ExternalDependency>> {
        let cache = self.dependency_cache()?;
        let mut dependencies: Vec<ExternalDependency> = cache
            .get(project.path())
            .map(|deps| deps.iter().cloned().collect())
            .unwrap_or_default();
        dependencies.sort();
        Ok(dependencies)
    }

    // Whole pass

    /// Initializes every cache for a new build pass
    pub fn init_all(&self) {
        self.init_info_cache();
        self.init_substitution_cache();
        self.init_dependency_cache();
        self.init_target_cache_for_all();
        for project in self.tree.all_projects() {
            self.init_scope_cache(project);
        }
    }

    /// Tears down every cache at the end of a build pass
    pub fn reset_all(&self) {
        for project in self.tree.all_projects() {
            self.reset_scope_cache(project);
        }
        self.reset_target_cache_for_all();
        self.reset_dependency_cache();
        self.reset_substitution_cache();
        self.reset_info_cache();
    }
}
