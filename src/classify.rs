//! Template classification.
//!
//! The title is authoritative: the body is only consulted when the title
//! matches no pattern.

use serde::Serialize;

use crate::patterns::PatternLibrary;

/// Where a template id was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionSource {
    /// The title matched a title pattern.
    Title,
    /// The body matched a body pattern.
    Body,
}

impl std::fmt::Display for DetectionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectionSource::Title => write!(f, "title"),
            DetectionSource::Body => write!(f, "body"),
        }
    }
}

/// A detected template id and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub template: String,
    pub source: DetectionSource,
}

/// Detects the template a pull request follows.
///
/// # Example
///
/// ```
/// use pr_lint::classify::{DetectionSource, TemplateClassifier};
///
/// let classifier = TemplateClassifier::new();
///
/// let detection = classifier.detect("feat: add login", "# 버그 수정").unwrap();
/// assert_eq!(detection.template, "feature");
/// assert_eq!(detection.source, DetectionSource::Title);
///
/// let detection = classifier.detect("", "# 버그 수정").unwrap();
/// assert_eq!(detection.template, "fix");
/// assert_eq!(detection.source, DetectionSource::Body);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemplateClassifier {
    library: PatternLibrary,
}

impl TemplateClassifier {
    /// A classifier using the built-in patterns.
    pub fn new() -> Self {
        Self::default()
    }

    /// A classifier using a custom pattern library.
    pub fn with_library(library: PatternLibrary) -> Self {
        Self { library }
    }

    /// The pattern library in use.
    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    /// Detect the template, title first, then body.
    pub fn detect(&self, title: &str, body: &str) -> Option<Detection> {
        if let Some(template) = self.library.match_title(title) {
            return Some(Detection {
                template,
                source: DetectionSource::Title,
            });
        }

        let detection = self.library.match_body(body).map(|template| Detection {
            template,
            source: DetectionSource::Body,
        });
        if detection.is_none() {
            tracing::debug!("No template detected from title or body");
        }
        detection
    }

    /// Detect the template id only.
    pub fn detect_template(&self, title: &str, body: &str) -> Option<String> {
        self.detect(title, body).map(|d| d.template)
    }
}
