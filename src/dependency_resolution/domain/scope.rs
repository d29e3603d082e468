use super::ExternalDependency;
use std::collections::BTreeSet;

/// Scope - what one configuration of a module depends on
///
/// External dependencies come from the dependency cache; target
/// dependencies are in-repo projects that replaced an external coordinate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    configuration: String,
    external_dependencies: BTreeSet<ExternalDependency>,
    target_dependencies: BTreeSet<String>,
}

impl Scope {
    pub fn new(configuration: impl Into<String>) -> Self {
        Self {
            configuration: configuration.into(),
            ..Self::default()
        }
    }

    pub fn configuration(&self) -> &str {
        &self.configuration
    }

    pub fn add_external(&mut self, dependency: ExternalDependency) {
        self.external_dependencies.insert(dependency);
    }

    pub fn add_target(&mut self, project_path: impl Into<String>) {
        self.target_dependencies.insert(project_path.into());
    }

    /// Sorted by maven coordinates
    pub fn external_dependencies(&self) -> impl Iterator<Item = &ExternalDependency> {
        self.external_dependencies.iter()
    }

    pub fn target_dependencies(&self) -> impl Iterator<Item = &str> {
        self.target_dependencies.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.external_dependencies.is_empty() && self.target_dependencies.is_empty()
    }
}
