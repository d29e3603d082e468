use crate::adapters::outbound::formatters::{JsonReportFormatter, TextReportFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use buckdeps::application::dto::OutputFormat;
    /// use buckdeps::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Text);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextReportFormatter::new()),
            OutputFormat::Json => Box::new(JsonReportFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use buckdeps::application::dto::OutputFormat;
    /// use buckdeps::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Text => "📝 Generating text report...",
            OutputFormat::Json => "📝 Generating JSON report...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_resolution::domain::{ConflictReport, SubstitutionReport};
    use crate::dependency_resolution::services::ReportGenerator;

    #[test]
    fn test_created_formatters_match_format() {
        let metadata = ReportGenerator::generate_default_metadata();
        let conflicts = ConflictReport::default();
        let substitutions = SubstitutionReport::default();

        let text = FormatterFactory::create(OutputFormat::Text)
            .format(&conflicts, &substitutions, &[], &metadata)
            .unwrap();
        assert!(text.starts_with("# Dependency versions"));

        let json = FormatterFactory::create(OutputFormat::Json)
            .format(&conflicts, &substitutions, &[], &metadata)
            .unwrap();
        assert!(json.starts_with('{'));
    }

    #[test]
    fn test_progress_messages() {
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Text),
            "📝 Generating text report..."
        );
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Json),
            "📝 Generating JSON report..."
        );
    }
}
