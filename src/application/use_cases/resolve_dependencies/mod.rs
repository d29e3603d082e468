use crate::application::dto::{ResolutionRequest, ResolutionResponse};
use crate::dependency_resolution::domain::{BuildManifest, ModuleResolution};
use crate::dependency_resolution::policies::NamingPolicy;
use crate::dependency_resolution::services::{
    ConflictReporter, DependencyRegistrar, ModuleRegistration, ProjectCache, ReportGenerator,
    SubstitutionReporter,
};
use crate::ports::outbound::{
    BuildManifestReader, ConfigurationTargets, ExternalTarget, ModuleTargets, ProgressReporter,
};
use crate::shared::Result;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, info};

/// Upper bound on modules registering at the same time
const MAX_CONCURRENT_MODULES: usize = 8;

/// ResolveDependenciesUseCase - Core use case for one resolution pass
///
/// Reads the manifest, feeds every module into a fresh [`ProjectCache`],
/// snapshots the reports and tears the caches down again.
///
/// # Type Parameters
/// * `MR` - BuildManifestReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolveDependenciesUseCase<MR, PR> {
    manifest_reader: MR,
    progress_reporter: PR,
}

impl<MR, PR> ResolveDependenciesUseCase<MR, PR>
where
    MR: BuildManifestReader,
    PR: ProgressReporter,
{
    pub fn new(manifest_reader: MR, progress_reporter: PR) -> Self {
        Self {
            manifest_reader,
            progress_reporter,
        }
    }

    /// Executes one resolution pass
    ///
    /// The caches are reset before returning, on success and on failure.
    pub async fn execute(&self, request: ResolutionRequest) -> Result<ResolutionResponse> {
        // Step 1: Read the resolution manifest
        let manifest = self.read_manifest(&request)?;

        // Step 2: Count versions over the whole build before naming anything
        let policy = NamingPolicy::new(
            request.versionless,
            request.pad_versions,
            request.versioned_exceptions.clone(),
        )
        .with_version_counts(manifest.modules())?;

        // Step 3: Fresh caches for this pass
        let (tree, modules) = manifest.into_parts();
        let cache = Arc::new(ProjectCache::with_external_root(
            Arc::new(tree),
            request.external_root.as_str(),
        ));
        cache.init_all();

        let registrar = DependencyRegistrar::new(
            Arc::clone(&cache),
            Arc::new(policy),
            request.substitution_enabled,
        );

        // Step 4: Register modules, then snapshot the reports
        let outcome = match self.register_modules(&registrar, modules).await {
            Ok(registrations) => self.build_response(&cache, &request, registrations),
            Err(e) => Err(e),
        };

        // Step 5: Tear down regardless of outcome
        cache.reset_all();
        debug!("Caches reset");

        let response = outcome?;
        self.report_findings(&response);
        Ok(response)
    }

    fn read_manifest(&self, request: &ResolutionRequest) -> Result<BuildManifest> {
        self.progress_reporter.report(&format!(
            "📖 Loading resolution manifest from: {}",
            request.manifest_path.display()
        ));

        let manifest = self.manifest_reader.read_manifest(&request.manifest_path)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} project(s) with {} resolved artifact(s)",
            manifest.tree().len(),
            manifest.artifact_count()
        ));
        Ok(manifest)
    }

    /// Registers every module on the blocking pool, reporting each completion
    ///
    /// Registrations come back in module path order whatever order the
    /// workers finished in.
    async fn register_modules(
        &self,
        registrar: &DependencyRegistrar,
        modules: Vec<ModuleResolution>,
    ) -> Result<Vec<ModuleRegistration>> {
        let total = modules.len();
        self.progress_reporter
            .report(&format!("🔗 Registering {} module(s)...", total));

        let mut pending = stream::iter(modules)
            .map(|module| {
                let registrar = registrar.clone();
                tokio::task::spawn_blocking(move || registrar.register_module(&module))
            })
            .buffer_unordered(MAX_CONCURRENT_MODULES);

        let mut registrations = Vec::with_capacity(total);
        while let Some(joined) = pending.next().await {
            let registration = joined
                .map_err(|e| anyhow::anyhow!("Module registration task failed: {}", e))??;
            self.progress_reporter.report_progress(
                registrations.len() + 1,
                total,
                Some(registration.project_path.as_str()),
            );
            registrations.push(registration);
        }

        registrations.sort_by(|a, b| a.project_path.cmp(&b.project_path));
        info!("Registered {} module(s)", registrations.len());
        Ok(registrations)
    }

    fn build_response(
        &self,
        cache: &ProjectCache,
        request: &ResolutionRequest,
        registrations: Vec<ModuleRegistration>,
    ) -> Result<ResolutionResponse> {
        let dependency_cache = cache.dependency_cache()?;
        let conflict_report = ConflictReporter::new(request.threshold).report(&dependency_cache);

        let substitution_report = if request.substitution_enabled {
            let substitutions = cache.substitution_cache()?;
            SubstitutionReporter::report(&substitutions)
        } else {
            Default::default()
        };

        Ok(ResolutionResponse {
            conflict_report,
            substitution_report,
            module_targets: Self::collect_module_targets(cache)?,
            metadata: ReportGenerator::generate_default_metadata(),
            registrations,
        })
    }

    /// Snapshots every module's external targets and configuration scopes
    ///
    /// Must run before the caches are reset.
    fn collect_module_targets(cache: &ProjectCache) -> Result<Vec<ModuleTargets>> {
        let mut modules = Vec::with_capacity(cache.tree().len());
        for project in cache.tree().all_projects() {
            let targets = cache.target_cache(project)?;
            let mut configurations: Vec<ConfigurationTargets> = cache
                .scope_cache(project)?
                .iter()
                .map(|entry| {
                    let scope = entry.value();
                    ConfigurationTargets {
                        configuration: scope.configuration().to_string(),
                        external_targets: scope
                            .external_dependencies()
                            .map(|dependency| targets.target_for(dependency))
                            .collect(),
                        target_dependencies: scope.target_dependencies().map(String::from).collect(),
                    }
                })
                .collect();
            configurations.sort_by(|a, b| a.configuration.cmp(&b.configuration));

            let externals = cache
                .external_dependencies(project)?
                .into_iter()
                .map(|dependency| ExternalTarget {
                    maven_coords: dependency.maven_coords().to_string(),
                    target_name: dependency.target_name().to_string(),
                    versionless_target_name: dependency.versionless_target_name(),
                    target_path: targets.target_for(&dependency),
                })
                .collect();
            modules.push(ModuleTargets {
                module: project.path().to_string(),
                targets: externals,
                configurations,
            });
        }
        modules.sort_by(|a, b| a.module.cmp(&b.module));
        Ok(modules)
    }

    fn report_findings(&self, response: &ResolutionResponse) {
        let conflicts = &response.conflict_report;
        if conflicts.has_conflicts() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} dependency resolved to more than one version across modules.",
                conflicts.conflict_count()
            ));
        }
        for anomaly in &conflicts.packaging_anomalies {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} resolved with more than one packaging ({}).",
                anomaly.coordinates,
                anomaly.packagings.join(", ")
            ));
        }
        for conflict in &response.substitution_report.conflicts {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} is substituted by more than one project ({}).",
                conflict.dependency,
                conflict.targets.join(", ")
            ));
        }

        let externals: usize = response.registrations.iter().map(|r| r.external_count).sum();
        let substituted: usize = response
            .registrations
            .iter()
            .map(|r| r.substitution_count)
            .sum();
        self.progress_reporter.report_completion(&format!(
            "✅ Resolved {} module(s): {} external, {} substituted",
            response.registrations.len(),
            externals,
            substituted
        ));
    }
}
