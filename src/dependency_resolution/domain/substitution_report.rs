use serde::Serialize;

/// Replace `dependency` with the in-repo project `target`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubstitutionDirective {
    pub dependency: String,
    pub target: String,
    /// Number of (module, dependency) registrations behind this directive
    pub count: usize,
}

/// One identity mapped to different in-repo targets by different modules
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubstitutionConflict {
    pub dependency: String,
    pub targets: Vec<String>,
}

/// The in-repo targets one module's substitutions resolved to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleSubstitutions {
    pub module: String,
    pub targets: Vec<String>,
}

/// SubstitutionReport - aggregated view of the substitution cache at teardown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubstitutionReport {
    pub directives: Vec<SubstitutionDirective>,
    pub conflicts: Vec<SubstitutionConflict>,
    pub modules: Vec<ModuleSubstitutions>,
}

impl SubstitutionReport {
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}
