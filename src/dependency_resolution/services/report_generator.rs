use crate::dependency_resolution::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// ReportGenerator service for stamping each report run
pub struct ReportGenerator;

impl ReportGenerator {
    /// Generates metadata with the current timestamp and a fresh serial number
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let serial_number = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            serial_number,
        )
    }

    /// Uses the package name and compile-time version
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_metadata() {
        let metadata = ReportGenerator::generate_metadata("test-tool", "1.0.0");

        assert_eq!(metadata.tool_name(), "test-tool");
        assert_eq!(metadata.tool_version(), "1.0.0");
        assert!(metadata.serial_number().starts_with("urn:uuid:"));
        assert!(metadata.timestamp().contains('T'));
    }

    #[test]
    fn test_generate_default_metadata() {
        let metadata = ReportGenerator::generate_default_metadata();
        assert_eq!(metadata.tool_name(), "buckdeps");
        assert_eq!(metadata.tool_version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_serial_numbers_are_unique() {
        let first = ReportGenerator::generate_default_metadata();
        let second = ReportGenerator::generate_default_metadata();
        assert_ne!(first.serial_number(), second.serial_number());

        let uuid_part = first.serial_number().strip_prefix("urn:uuid:").unwrap();
        assert_eq!(uuid_part.len(), 36);
    }
}
