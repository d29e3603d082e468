use crate::dependency_resolution::domain::{ConflictReport, ReportMetadata, SubstitutionReport};
use crate::ports::outbound::{ModuleTargets, ReportFormatter};
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Document<'a> {
    metadata: Metadata<'a>,
    conflicts: &'a ConflictReport,
    substitutions: &'a SubstitutionReport,
    modules: &'a [ModuleTargets],
}

#[derive(Debug, Serialize)]
struct Metadata<'a> {
    timestamp: &'a str,
    tool: Tool<'a>,
    #[serde(rename = "serialNumber")]
    serial_number: &'a str,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

/// JsonReportFormatter adapter for machine-readable report output
///
/// Besides the two reports it carries every module's external targets.
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(
        &self,
        conflicts: &ConflictReport,
        substitutions: &SubstitutionReport,
        modules: &[ModuleTargets],
        metadata: &ReportMetadata,
    ) -> Result<String> {
        let document = Document {
            metadata: Metadata {
                timestamp: metadata.timestamp(),
                tool: Tool {
                    name: metadata.tool_name(),
                    version: metadata.tool_version(),
                },
                serial_number: metadata.serial_number(),
            },
            conflicts,
            substitutions,
            modules,
        };

        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}
