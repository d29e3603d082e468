use super::project_cache::SubstitutionCache;
use crate::dependency_resolution::domain::{
    ModuleSubstitutions, SubstitutionConflict, SubstitutionDirective, SubstitutionReport,
    VersionlessDependency,
};
use std::collections::{BTreeMap, BTreeSet};

/// SubstitutionReporter service for summarizing external-to-project substitutions
///
/// Modules are folded in ascending path order. When two modules map the
/// same identity to different projects the later module wins the
/// directive, and the identity is also listed as a conflict.
pub struct SubstitutionReporter;

impl SubstitutionReporter {
    pub fn report(cache: &SubstitutionCache) -> SubstitutionReport {
        let modules: BTreeMap<String, BTreeMap<VersionlessDependency, String>> = cache
            .iter()
            .map(|entry| {
                let substitutions = entry
                    .value()
                    .iter()
                    .map(|(dependency, target)| (dependency.clone(), target.clone()))
                    .collect();
                (entry.key().clone(), substitutions)
            })
            .collect();

        let mut merged: BTreeMap<&VersionlessDependency, &str> = BTreeMap::new();
        let mut counts: BTreeMap<&VersionlessDependency, usize> = BTreeMap::new();
        let mut targets: BTreeMap<&VersionlessDependency, BTreeSet<&str>> = BTreeMap::new();

        for substitutions in modules.values() {
            for (dependency, target) in substitutions {
                merged.insert(dependency, target);
                *counts.entry(dependency).or_insert(0) += 1;
                targets.entry(dependency).or_default().insert(target);
            }
        }

        let directives = merged
            .iter()
            .map(|(dependency, target)| SubstitutionDirective {
                dependency: dependency.coords(),
                target: target.to_string(),
                count: counts.get(dependency).copied().unwrap_or_default(),
            })
            .collect();

        let conflicts = targets
            .iter()
            .filter(|(_, targets)| targets.len() > 1)
            .map(|(dependency, targets)| SubstitutionConflict {
                dependency: dependency.coords(),
                targets: targets.iter().map(|t| t.to_string()).collect(),
            })
            .collect();

        let module_listings = modules
            .iter()
            .map(|(module, substitutions)| ModuleSubstitutions {
                module: module.clone(),
                targets: substitutions
                    .values()
                    .cloned()
                    .collect::<BTreeSet<_>>()
                    .into_iter()
                    .collect(),
            })
            .collect();

        SubstitutionReport {
            directives,
            conflicts,
            modules: module_listings,
        }
    }
}
