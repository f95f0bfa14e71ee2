//! JSON report formatter.
//!
//! Formats a validation result as machine-readable JSON for tooling
//! integration.

use serde::Serialize;
use std::io::Write;

use super::ReportFormatter;
use crate::diagnostic::Diagnostic;
use crate::validate::ValidationResult;

/// Formats reports as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    valid: bool,
    template: Option<&'a str>,
    errors: Vec<String>,
    warnings: Vec<String>,
    diagnostics: Vec<&'a Diagnostic>,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, result: &ValidationResult, writer: &mut W) -> std::io::Result<()> {
        let output = JsonOutput {
            valid: result.valid,
            template: result.template.as_deref(),
            errors: result.error_messages(),
            warnings: result.warning_messages(),
            diagnostics: result.errors.iter().chain(&result.warnings).collect(),
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
