//! Required literal fields.

use super::{Evaluation, SectionCheck};
use crate::diagnostic::IssueCode;

/// Requires each field to appear verbatim (case-sensitive) in the section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredFieldsCheck {
    fields: Vec<String>,
}

impl RequiredFieldsCheck {
    /// Create a check for the given literals.
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// The literals this check requires, in order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl SectionCheck for RequiredFieldsCheck {
    fn code(&self) -> IssueCode {
        IssueCode::MissingField
    }

    fn evaluate(&self, content: &str) -> Evaluation {
        let errors = self
            .fields
            .iter()
            .filter(|field| !content.contains(field.as_str()))
            .map(|field| format!("Missing required field: {}", field))
            .collect();
        Evaluation::from_errors(errors)
    }
}
