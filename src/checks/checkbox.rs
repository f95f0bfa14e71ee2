//! Required checklist items.

use regex::Regex;

use super::{Evaluation, SectionCheck};
use crate::diagnostic::IssueCode;
use crate::patterns::checked_item;

/// A label and its compiled checked-item pattern.
#[derive(Debug, Clone)]
struct RequiredItem {
    label: String,
    pattern: Regex,
}

/// Requires each label to appear as a checked item (`- [x] <label>`).
///
/// Unchecked items (`- [ ] <label>`) do not count. Matching is
/// case-insensitive and the label may be followed by more text on the line.
#[derive(Debug, Clone)]
pub struct CheckboxCheck {
    items: Vec<RequiredItem>,
}

impl CheckboxCheck {
    /// Compile a check for the given labels.
    pub fn new(labels: Vec<String>) -> Result<Self, regex::Error> {
        let items = labels
            .into_iter()
            .map(|label| {
                let pattern = checked_item(&label)?;
                Ok(RequiredItem { label, pattern })
            })
            .collect::<Result<_, regex::Error>>()?;
        Ok(Self { items })
    }

    /// The labels this check requires, in order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|i| i.label.as_str())
    }
}

impl SectionCheck for CheckboxCheck {
    fn code(&self) -> IssueCode {
        IssueCode::MissingCheckbox
    }

    fn evaluate(&self, content: &str) -> Evaluation {
        let errors = self
            .items
            .iter()
            .filter(|item| !item.pattern.is_match(content))
            .map(|item| format!("Required checkbox not checked: {}", item.label))
            .collect();
        Evaluation::from_errors(errors)
    }
}
