//! Validation orchestration.
//!
//! [`Validator::validate`] runs every check against one pull request and
//! folds the findings into an immutable [`ValidationResult`]. Problems are
//! accumulated so the author sees all of them at once. Only two situations
//! end validation early: no template could be detected, or the detected
//! template has no rules.

use serde::Serialize;

use crate::classify::TemplateClassifier;
use crate::diagnostic::{Diagnostic, IssueCode};
use crate::extract::{extract_section, heading_count};
use crate::rules::{RuleSet, TemplateRule};

/// Outcome of validating one pull request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationResult {
    /// Whether no errors were found.
    pub valid: bool,
    /// Detected template id, if any.
    pub template: Option<String>,
    /// Errors in discovery order.
    pub errors: Vec<Diagnostic>,
    /// Warnings in discovery order.
    pub warnings: Vec<Diagnostic>,
}

impl ValidationResult {
    fn with_error(mut self, diagnostic: Diagnostic) -> Self {
        self.errors.push(diagnostic);
        self
    }

    fn with_errors(self, diagnostics: impl IntoIterator<Item = Diagnostic>) -> Self {
        diagnostics.into_iter().fold(self, Self::with_error)
    }

    fn with_warning(mut self, diagnostic: Diagnostic) -> Self {
        self.warnings.push(diagnostic);
        self
    }

    fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Seal the result. The verdict depends only on the errors.
    fn finish(mut self) -> Self {
        self.valid = self.errors.is_empty();
        self
    }

    /// Errors rendered as strings, section-prefixed where scoped.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Warnings rendered as strings.
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }

    /// Whether any warnings were found.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Validates pull requests against a rule set.
///
/// # Example
///
/// ```
/// use pr_lint::rules::default_rules;
/// use pr_lint::validate::Validator;
///
/// let rules = default_rules().unwrap();
/// let validator = Validator::new(&rules);
///
/// let result = validator.validate("short", "");
/// assert!(!result.valid);
/// assert_eq!(result.template, None);
/// ```
#[derive(Debug)]
pub struct Validator<'a> {
    rules: &'a RuleSet,
    classifier: TemplateClassifier,
}

impl<'a> Validator<'a> {
    /// A validator using the built-in detection patterns.
    pub fn new(rules: &'a RuleSet) -> Self {
        Self::with_classifier(rules, TemplateClassifier::new())
    }

    /// A validator using a custom classifier.
    pub fn with_classifier(rules: &'a RuleSet, classifier: TemplateClassifier) -> Self {
        Self { rules, classifier }
    }

    /// Validate a pull request body and title.
    ///
    /// Pass an empty title when none is available.
    pub fn validate(&self, body: &str, title: &str) -> ValidationResult {
        let result = self.check_global(body, ValidationResult::default());

        let Some(detection) = self.classifier.detect(title, body) else {
            return result
                .with_error(Diagnostic::error(
                    IssueCode::TemplateUndetected,
                    "Cannot detect the PR template. Use one of the PR templates or a conventional title such as 'feat: ...' or 'fix: ...'.",
                ))
                .finish();
        };
        tracing::debug!(
            "Detected template '{}' from {}",
            detection.template,
            detection.source
        );

        let result = result.with_template(&detection.template);
        let Some(template) = self.rules.template(&detection.template) else {
            return result
                .with_error(Diagnostic::error(
                    IssueCode::UnknownTemplate,
                    format!("Unknown template: {}", detection.template),
                ))
                .finish();
        };

        let result = check_title(&detection.template, template, title, result);
        check_sections(template, body, result).finish()
    }

    fn check_global(&self, body: &str, result: ValidationResult) -> ValidationResult {
        let global = self.rules.global();
        let length = body.chars().count();

        let result = if length < global.min_body_length {
            result.with_error(Diagnostic::error(
                IssueCode::BodyTooShort,
                format!(
                    "PR body is too short. Write at least {} characters (currently {}).",
                    global.min_body_length, length
                ),
            ))
        } else {
            result
        };

        global
            .forbidden_words
            .iter()
            .filter(|word| body.contains(word.as_str()))
            .fold(result, |result, word| {
                result.with_warning(Diagnostic::warning(
                    IssueCode::ForbiddenWord,
                    format!("PR body contains '{}'.", word),
                ))
            })
    }
}

fn check_title(
    id: &str,
    template: &TemplateRule,
    title: &str,
    result: ValidationResult,
) -> ValidationResult {
    match &template.title_pattern {
        Some(pattern) if !title.is_empty() && !pattern.is_match(title) => {
            result.with_error(Diagnostic::error(
                IssueCode::TitleFormat,
                format!(
                    "PR title does not match the '{}' title format. Expected pattern: {}",
                    id,
                    pattern.as_str()
                ),
            ))
        }
        _ => result,
    }
}

fn check_sections(template: &TemplateRule, body: &str, result: ValidationResult) -> ValidationResult {
    template
        .required_sections
        .iter()
        .fold(result, |result, section| {
            if heading_count(body, section) > 1 {
                tracing::warn!(
                    "Section '{}' appears more than once; only the first is checked",
                    section
                );
            }

            let content = extract_section(body, section);
            if content.is_empty() {
                tracing::debug!("Section '{}' is missing or empty", section);
                return result.with_error(
                    Diagnostic::error(
                        IssueCode::MissingSection,
                        "Required section is missing or empty.",
                    )
                    .in_section(section),
                );
            }

            let Some(rule) = template.section_rule(section) else {
                return result;
            };

            let diagnostics = rule.checks().flat_map(|check| {
                let code = check.code();
                check
                    .evaluate(&content)
                    .errors
                    .into_iter()
                    .map(move |message| Diagnostic::error(code, message).in_section(section))
            });
            result.with_errors(diagnostics.collect::<Vec<_>>())
        })
}
