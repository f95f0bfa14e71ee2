//! GitHub Actions report formatter.
//!
//! Emits one `::error::` or `::warning::` workflow command per diagnostic so
//! findings show up as annotations on the pull request, and publishes the
//! step outputs `valid`, `template` and `errors`.
//!
//! Step outputs go to the file named by `$GITHUB_OUTPUT` when the runner
//! provides one ([`append_step_outputs`]). Otherwise the formatter prints
//! them as legacy `::set-output` commands.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use super::ReportFormatter;
use crate::validate::ValidationResult;

/// Formats reports as GitHub Actions workflow commands.
pub struct GithubFormatter {
    legacy_outputs: bool,
}

impl GithubFormatter {
    /// Create a formatter that prints only annotations.
    pub fn new() -> Self {
        Self {
            legacy_outputs: false,
        }
    }

    /// Create a formatter that also prints `::set-output` commands.
    pub fn with_legacy_outputs() -> Self {
        Self {
            legacy_outputs: true,
        }
    }
}

impl Default for GithubFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape a workflow command message.
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Step outputs for a result, as (name, value) pairs.
///
/// `template` is `unknown` when nothing was detected. `errors` joins every
/// error message with newlines.
pub fn step_outputs(result: &ValidationResult) -> Vec<(&'static str, String)> {
    vec![
        ("valid", result.valid.to_string()),
        (
            "template",
            result
                .template
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
        ),
        ("errors", result.error_messages().join("\n")),
    ]
}

/// Pick a heredoc delimiter that does not occur in `value`.
fn delimiter_for(value: &str) -> String {
    let mut delimiter = String::from("PR_LINT_EOF");
    while value.contains(&delimiter) {
        delimiter.push('_');
    }
    delimiter
}

/// Write step outputs in the `$GITHUB_OUTPUT` file format.
pub fn write_step_outputs<W: Write>(result: &ValidationResult, writer: &mut W) -> std::io::Result<()> {
    for (name, value) in step_outputs(result) {
        if value.contains('\n') {
            let delimiter = delimiter_for(&value);
            writeln!(writer, "{}<<{}", name, delimiter)?;
            writeln!(writer, "{}", value)?;
            writeln!(writer, "{}", delimiter)?;
        } else {
            writeln!(writer, "{}={}", name, value)?;
        }
    }
    Ok(())
}

/// Append step outputs to the file at `path`, creating it if needed.
pub fn append_step_outputs(path: &Path, result: &ValidationResult) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write_step_outputs(result, &mut file)?;
    tracing::debug!("Wrote step outputs to {}", path.display());
    Ok(())
}

impl ReportFormatter for GithubFormatter {
    fn format<W: Write>(&self, result: &ValidationResult, writer: &mut W) -> std::io::Result<()> {
        for error in &result.errors {
            writeln!(writer, "::error::{}", escape_data(&error.to_string()))?;
        }
        for warning in &result.warnings {
            writeln!(writer, "::warning::{}", escape_data(&warning.to_string()))?;
        }

        if self.legacy_outputs {
            for (name, value) in step_outputs(result) {
                writeln!(writer, "::set-output name={}::{}", name, escape_data(&value))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::{Diagnostic, IssueCode};
    use crate::report::render;
    use std::fs;
    use tempfile::TempDir;

    fn failing_result() -> ValidationResult {
        ValidationResult {
            valid: false,
            template: Some("hotfix-main".to_string()),
            errors: vec![
                Diagnostic::error(IssueCode::MissingField, "Missing required field: 장애 발생 시각:")
                    .in_section("긴급 이슈"),
                Diagnostic::error(IssueCode::BodyTooShort, "100% too short"),
            ],
            warnings: vec![Diagnostic::warning(IssueCode::ForbiddenWord, "PR body contains 'WIP'.")],
        }
    }

    #[test]
    fn annotations_per_diagnostic() {
        let output = render(&GithubFormatter::new(), &failing_result());
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(
            lines,
            [
                "::error::[긴급 이슈] Missing required field: 장애 발생 시각:",
                "::error::100%25 too short",
                "::warning::PR body contains 'WIP'.",
            ]
        );
    }

    #[test]
    fn legacy_outputs_escape_newlines() {
        let output = render(&GithubFormatter::with_legacy_outputs(), &failing_result());

        assert!(output.contains("::set-output name=valid::false"));
        assert!(output.contains("::set-output name=template::hotfix-main"));
        assert!(output.contains(
            "::set-output name=errors::[긴급 이슈] Missing required field: 장애 발생 시각:%0A100%25 too short"
        ));
    }

    #[test]
    fn template_output_is_unknown_when_undetected() {
        let outputs = step_outputs(&ValidationResult::default());
        assert_eq!(outputs[1], ("template", "unknown".to_string()));
        assert_eq!(outputs[2], ("errors", String::new()));
    }

    #[test]
    fn output_file_uses_heredoc_for_multiline_values() {
        let mut buf = Vec::new();
        write_step_outputs(&failing_result(), &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.starts_with("valid=false\ntemplate=hotfix-main\n"));
        assert!(output.contains(
            "errors<<PR_LINT_EOF\n[긴급 이슈] Missing required field: 장애 발생 시각:\n100% too short\nPR_LINT_EOF\n"
        ));
    }

    #[test]
    fn delimiter_avoids_collisions() {
        assert_eq!(delimiter_for("plain"), "PR_LINT_EOF");
        assert_eq!(delimiter_for("a\nPR_LINT_EOF\nb"), "PR_LINT_EOF_");
    }

    #[test]
    fn appends_to_existing_output_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output");
        fs::write(&path, "previous=1\n").unwrap();

        append_step_outputs(&path, &ValidationResult::default()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("previous=1\nvalid=false\n"));
        assert!(content.contains("template=unknown\n"));
        assert!(content.ends_with("errors=\n"));
    }
}
