//! Human-readable report formatter.
//!
//! Formats a validation result for terminal display with optional color
//! support.

use std::io::Write;

use super::ReportFormatter;
use crate::ui::PrLintTheme;
use crate::validate::ValidationResult;

/// Formats reports for human consumption.
pub struct HumanFormatter {
    theme: PrLintTheme,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self {
            theme: PrLintTheme::for_color(use_color),
        }
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, result: &ValidationResult, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "{}", self.theme.format_header("PR validation result"))?;
        if let Some(template) = &result.template {
            let value = self.theme.template.apply_to(template).to_string();
            writeln!(
                writer,
                "{}",
                self.theme.format_key_value("Detected template", &value)
            )?;
        }
        writeln!(writer)?;

        if result.valid {
            writeln!(writer, "{}", self.theme.format_success("PR body is valid"))?;
        } else {
            writeln!(
                writer,
                "{}",
                self.theme.format_error("PR body validation failed")
            )?;
            for error in &result.errors {
                writeln!(writer, "  - {}", error)?;
            }
        }

        if !result.warnings.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "{}", self.theme.warning.apply_to("Warnings:"))?;
            for warning in &result.warnings {
                writeln!(writer, "  - {}", warning)?;
            }
        }

        Ok(())
    }
}
