//! Validation diagnostics.
//!
//! A [`Diagnostic`] is one problem found in a pull request: an
//! [`IssueCode`] naming the kind of problem, a [`Severity`], the section it
//! belongs to (if any) and a human-readable message.

use serde::Serialize;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Advisory only, never affects the verdict.
    Warning,
    /// Fails the validation.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// The kind of problem a diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueCode {
    /// Body shorter than the global minimum.
    BodyTooShort,
    /// Body contains a forbidden word.
    ForbiddenWord,
    /// Neither the title nor the body identifies a template.
    TemplateUndetected,
    /// Detected template has no rules.
    UnknownTemplate,
    /// Title does not match the template's title pattern.
    TitleFormat,
    /// Required section is absent or empty.
    MissingSection,
    /// Section content is shorter than its minimum.
    SectionTooShort,
    /// Required checklist item is not checked.
    MissingCheckbox,
    /// Required literal field is absent from a section.
    MissingField,
}

impl IssueCode {
    /// Stable identifier used in machine-readable output.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::BodyTooShort => "body-too-short",
            IssueCode::ForbiddenWord => "forbidden-word",
            IssueCode::TemplateUndetected => "template-undetected",
            IssueCode::UnknownTemplate => "unknown-template",
            IssueCode::TitleFormat => "title-format",
            IssueCode::MissingSection => "missing-section",
            IssueCode::SectionTooShort => "section-too-short",
            IssueCode::MissingCheckbox => "missing-checkbox",
            IssueCode::MissingField => "missing-field",
        }
    }
}

impl std::fmt::Display for IssueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A problem found during validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// What kind of problem this is.
    pub code: IssueCode,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Section the problem was found in, if it is section-scoped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Human-readable message, without the section prefix.
    pub message: String,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: Severity::Error,
            section: None,
            message: message.into(),
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: Severity::Warning,
            section: None,
            message: message.into(),
        }
    }

    /// Scope this diagnostic to a section.
    pub fn in_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }
}

/// Renders `[section] message` for section-scoped diagnostics.
impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.section {
            Some(section) => write!(f, "[{}] {}", section, self.message),
            None => f.write_str(&self.message),
        }
    }
}
