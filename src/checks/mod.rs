//! Section content checks.
//!
//! Each check inspects the extracted content of one section against a
//! single kind of constraint:
//!
//! - [`LengthCheck`] - minimum visible length, comments excluded
//! - [`CheckboxCheck`] - checklist items that must be ticked
//! - [`RequiredFieldsCheck`] - literal text that must appear
//!
//! Checks are pure and independent of each other. The validator decides
//! the order they run in.
//!
//! # Example
//!
//! ```
//! use pr_lint::checks::{LengthCheck, SectionCheck};
//!
//! let check = LengthCheck::new(10);
//! assert!(check.evaluate("long enough text").valid);
//! assert!(!check.evaluate("<!-- hint -->short").valid);
//! ```

pub mod checkbox;
pub mod length;
pub mod required_fields;

pub use checkbox::CheckboxCheck;
pub use length::LengthCheck;
pub use required_fields::RequiredFieldsCheck;

use crate::diagnostic::IssueCode;

/// Outcome of evaluating one check against section content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Evaluation {
    /// Whether the content satisfied the check.
    pub valid: bool,
    /// One message per violation, in discovery order.
    pub errors: Vec<String>,
}

impl Evaluation {
    /// Build an evaluation from the violations found.
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// A passing evaluation.
    pub fn pass() -> Self {
        Self::from_errors(Vec::new())
    }
}

/// A constraint on the content of a section.
pub trait SectionCheck: std::fmt::Debug + Send + Sync {
    /// Issue code reported for violations of this check.
    fn code(&self) -> IssueCode;

    /// Evaluate the check against a section's extracted content.
    fn evaluate(&self, content: &str) -> Evaluation;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_from_no_errors_is_valid() {
        let eval = Evaluation::from_errors(vec![]);
        assert!(eval.valid);
        assert_eq!(eval, Evaluation::pass());
    }

    #[test]
    fn evaluation_with_errors_is_invalid() {
        let eval = Evaluation::from_errors(vec!["missing".to_string()]);
        assert!(!eval.valid);
        assert_eq!(eval.errors.len(), 1);
    }

    #[test]
    fn checks_are_object_safe() {
        let checks: Vec<Box<dyn SectionCheck>> = vec![
            Box::new(LengthCheck::new(1)),
            Box::new(RequiredFieldsCheck::new(vec!["Jira".to_string()])),
        ];
        let codes: Vec<_> = checks.iter().map(|c| c.code()).collect();
        assert_eq!(codes, [IssueCode::SectionTooShort, IssueCode::MissingField]);
    }
}
