use super::project_cache::DependencyCache;
use crate::dependency_resolution::domain::{
    ConflictGroup, ConflictReport, ExternalDependency, ModuleListing, PackagingAnomaly,
    VersionCount,
};
use crate::dependency_resolution::policies::ReportThreshold;
use std::collections::{BTreeMap, BTreeSet};

/// ConflictReporter service for summarizing version conflicts across modules
///
/// Runs after every module finished registering, so it only reads the
/// dependency cache.
pub struct ConflictReporter {
    threshold: ReportThreshold,
}

impl ConflictReporter {
    pub fn new(threshold: ReportThreshold) -> Self {
        Self { threshold }
    }

    pub fn report(&self, cache: &DependencyCache) -> ConflictReport {
        let counts = Self::count_registrations(cache);

        ConflictReport {
            threshold: self.threshold.value(),
            groups: self.group_versions(&counts),
            packaging_anomalies: Self::find_packaging_anomalies(counts.keys().map(|(_, d)| d)),
            modules: Self::list_modules(cache),
        }
    }

    /// Counts how many modules registered each distinct dependency
    ///
    /// Keyed by (versionless coordinates, dependency) so every version of
    /// one artifact is contiguous and in maven coordinate order.
    fn count_registrations(cache: &DependencyCache) -> BTreeMap<(String, ExternalDependency), usize> {
        let mut counts = BTreeMap::new();
        for entry in cache.iter() {
            for dependency in entry.value() {
                let key = (dependency.versionless_coords().to_string(), dependency.clone());
                *counts.entry(key).or_insert(0) += 1;
            }
        }
        counts
    }

    fn group_versions(&self, counts: &BTreeMap<(String, ExternalDependency), usize>) -> Vec<ConflictGroup> {
        counts
            .iter()
            .fold(GroupAccumulator::new(self.threshold), |acc, ((coords, dep), count)| {
                acc.push(coords, dep.version(), *count)
            })
            .finish()
    }

    fn find_packaging_anomalies<'a>(
        dependencies: impl Iterator<Item = &'a ExternalDependency>,
    ) -> Vec<PackagingAnomaly> {
        let mut packagings: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for dependency in dependencies {
            packagings
                .entry(dependency.maven_coords_for_validation())
                .or_default()
                .insert(dependency.packaging().to_string());
        }

        packagings
            .into_iter()
            .filter(|(_, packagings)| packagings.len() > 1)
            .map(|(coordinates, packagings)| PackagingAnomaly {
                coordinates,
                packagings: packagings.into_iter().collect(),
            })
            .collect()
    }

    fn list_modules(cache: &DependencyCache) -> Vec<ModuleListing> {
        let mut modules: Vec<ModuleListing> = cache
            .iter()
            .map(|entry| {
                let mut coordinates: Vec<String> = entry
                    .value()
                    .iter()
                    .map(|d| d.maven_coords().to_string())
                    .collect();
                coordinates.sort();
                ModuleListing {
                    module: entry.key().clone(),
                    coordinates,
                }
            })
            .collect();
        modules.sort_by(|a, b| a.module.cmp(&b.module));
        modules
    }
}

/// Running state of the grouping fold: the group being built and the
/// groups already accepted by the threshold
struct GroupAccumulator {
    threshold: ReportThreshold,
    current: Option<ConflictGroup>,
    groups: Vec<ConflictGroup>,
}

impl GroupAccumulator {
    fn new(threshold: ReportThreshold) -> Self {
        Self {
            threshold,
            current: None,
            groups: Vec::new(),
        }
    }

    fn push(mut self, coordinates: &str, version: &str, count: usize) -> Self {
        let same_group = self
            .current
            .as_ref()
            .is_some_and(|group| group.coordinates == coordinates);
        if !same_group {
            self.flush();
            self.current = Some(ConflictGroup {
                coordinates: coordinates.to_string(),
                versions: Vec::new(),
            });
        }
        if let Some(group) = self.current.as_mut() {
            group.versions.push(VersionCount {
                version: version.to_string(),
                count,
            });
        }
        self
    }

    fn flush(&mut self) {
        if let Some(group) = self.current.take() {
            if self.threshold.is_reportable(group.versions.len()) {
                self.groups.push(group);
            }
        }
    }

    fn finish(mut self) -> Vec<ConflictGroup> {
        self.flush();
        self.groups
    }
}
