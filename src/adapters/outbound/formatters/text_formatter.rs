use crate::dependency_resolution::domain::{ConflictReport, ReportMetadata, SubstitutionReport};
use crate::ports::outbound::{ModuleTargets, ReportFormatter};
use crate::shared::Result;
use std::fmt::Write;

/// TextReportFormatter adapter for the plain line-per-entry reports
///
/// Conflict lines read `group:name:packaging[:classifier],version,count`
/// and substitution lines read `"group:name", "target", count`, ready to
/// paste into build configuration.
pub struct TextReportFormatter;

impl TextReportFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write_conflicts(out: &mut String, conflicts: &ConflictReport) -> std::fmt::Result {
        writeln!(
            out,
            "# Dependency versions (groups with more than {} version(s))",
            conflicts.threshold
        )?;
        for group in &conflicts.groups {
            for version in &group.versions {
                writeln!(out, "{},{},{}", group.coordinates, version.version, version.count)?;
            }
            writeln!(out)?;
        }

        if !conflicts.packaging_anomalies.is_empty() {
            writeln!(out, "# Packaging anomalies")?;
            for anomaly in &conflicts.packaging_anomalies {
                writeln!(
                    out,
                    "{} resolved as {}",
                    anomaly.coordinates,
                    anomaly.packagings.join(", ")
                )?;
            }
            writeln!(out)?;
        }

        writeln!(out, "# Resolved dependencies per module")?;
        for module in &conflicts.modules {
            writeln!(out)?;
            writeln!(out, "{}", module.module)?;
            for coords in &module.coordinates {
                writeln!(out, "{}", coords)?;
            }
        }
        Ok(())
    }

    fn write_substitutions(out: &mut String, substitutions: &SubstitutionReport) -> std::fmt::Result {
        writeln!(out)?;
        writeln!(out, "# Substitutions")?;
        for directive in &substitutions.directives {
            writeln!(
                out,
                "\"{}\", \"{}\", {}",
                directive.dependency, directive.target, directive.count
            )?;
        }
        for conflict in &substitutions.conflicts {
            writeln!(
                out,
                "# conflict: \"{}\" maps to {}",
                conflict.dependency,
                conflict.targets.join(", ")
            )?;
        }
        for module in &substitutions.modules {
            writeln!(out)?;
            writeln!(out, "{}", module.module)?;
            for target in &module.targets {
                writeln!(out, "implementation project(\"{}\")", target)?;
            }
        }
        Ok(())
    }
}

impl Default for TextReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextReportFormatter {
    fn format(
        &self,
        conflicts: &ConflictReport,
        substitutions: &SubstitutionReport,
        _modules: &[ModuleTargets],
        _metadata: &ReportMetadata,
    ) -> Result<String> {
        let mut out = String::new();
        Self::write_conflicts(&mut out, conflicts)?;
        if !substitutions.is_empty() {
            Self::write_substitutions(&mut out, substitutions)?;
        }
        Ok(out)
    }
}
