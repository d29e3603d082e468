use super::ExternalDependency;
use dashmap::DashMap;

/// Default directory under which external dependency targets are generated
pub const DEFAULT_EXTERNAL_ROOT: &str = ".okbuck/ext";

/// TargetCache - one module's memo of external dependency target paths
///
/// Keys are maven coordinates; values are fully qualified target paths
/// such as `//.okbuck/ext/com/squareup/okio:okio-2.10.0`.
#[derive(Debug)]
pub struct TargetCache {
    external_root: String,
    targets: DashMap<String, String>,
}

impl TargetCache {
    pub fn new(external_root: impl Into<String>) -> Self {
        Self {
            external_root: external_root.into().trim_matches('/').to_string(),
            targets: DashMap::new(),
        }
    }

    /// Returns the target path for the dependency, computing it on first use
    pub fn target_for(&self, dependency: &ExternalDependency) -> String {
        self.targets
            .entry(dependency.maven_coords().to_string())
            .or_insert_with(|| {
                let base_path = dependency.base_path();
                let segments: Vec<_> = base_path
                    .iter()
                    .filter_map(|s| s.to_str())
                    .collect();
                format!(
                    "//{}/{}:{}",
                    self.external_root,
                    segments.join("/"),
                    dependency.target_name()
                )
            })
            .clone()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
