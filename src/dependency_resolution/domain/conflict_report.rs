use serde::Serialize;

/// How often one version of a library was registered across modules
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionCount {
    pub version: String,
    pub count: usize,
}

/// All versions found for one `group:name:packaging[:classifier]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictGroup {
    pub coordinates: String,
    pub versions: Vec<VersionCount>,
}

impl ConflictGroup {
    pub fn is_conflict(&self) -> bool {
        self.versions.len() > 1
    }
}

/// One `group:name:version` resolved with more than one packaging
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackagingAnomaly {
    pub coordinates: String,
    pub packagings: Vec<String>,
}

/// Every maven coordinate one module registered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleListing {
    pub module: String,
    pub coordinates: Vec<String>,
}

/// ConflictReport - aggregated view of the dependency cache at teardown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConflictReport {
    /// Groups with more distinct versions than this are reported
    pub threshold: usize,
    pub groups: Vec<ConflictGroup>,
    pub packaging_anomalies: Vec<PackagingAnomaly>,
    pub modules: Vec<ModuleListing>,
}

impl ConflictReport {
    pub fn has_conflicts(&self) -> bool {
        self.groups.iter().any(ConflictGroup::is_conflict)
    }

    pub fn conflict_count(&self) -> usize {
        self.groups.iter().filter(|g| g.is_conflict()).count()
    }
}
