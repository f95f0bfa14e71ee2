//! Minimum section length.

use super::{Evaluation, SectionCheck};
use crate::diagnostic::IssueCode;
use crate::patterns::strip_comments;

/// Requires a minimum number of characters of visible content.
///
/// HTML comments (template hints such as `<!-- describe the change -->`)
/// and surrounding whitespace are removed before measuring. Length counts
/// characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthCheck {
    min_length: usize,
}

impl LengthCheck {
    /// Create a check requiring at least `min_length` characters.
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// The required minimum.
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl SectionCheck for LengthCheck {
    fn code(&self) -> IssueCode {
        IssueCode::SectionTooShort
    }

    fn evaluate(&self, content: &str) -> Evaluation {
        let visible = strip_comments(content);
        if visible.trim().chars().count() >= self.min_length {
            return Evaluation::pass();
        }
        Evaluation::from_errors(vec![format!(
            "Section content is too short. Write at least {} characters.",
            self.min_length
        )])
    }
}
