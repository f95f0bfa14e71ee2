//! Template detection patterns.
//!
//! Two ordered cascades decide which template a pull request follows:
//!
//! - **Title patterns** are tried first, most specific first. Each entry
//!   carries a [`Resolution`] that turns a matching title into a template id.
//! - **Body patterns** are the fallback. Each entry maps a template id to a
//!   pattern matching the template's characteristic heading text.
//!
//! Precedence is data: the order of [`BUILTIN_TITLE_PATTERNS`] and
//! [`BUILTIN_BODY_PATTERNS`] is the order of evaluation, and the first
//! match wins.

use regex::Regex;
use std::sync::LazyLock;

/// Template id for feature work (and other conventional-commit types).
pub const FEATURE: &str = "feature";
/// Template id for bug fixes.
pub const FIX: &str = "fix";
/// Template id for hot fixes merged straight into main.
pub const HOTFIX_MAIN: &str = "hotfix-main";
/// Template id for releases into main.
pub const RELEASE_MAIN: &str = "release-main";
/// Template id for merging a release back into the development branch.
pub const RELEASE_BACKMERGE: &str = "release-backmerge";

/// How a matching title turns into a template id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Always resolves to the given template.
    Template(&'static str),
    /// `fix...` resolves to [`FIX`], everything else to [`FEATURE`].
    ConventionalCommit,
}

impl Resolution {
    /// Resolve a title that already matched the owning pattern.
    pub fn resolve(&self, title: &str) -> String {
        match self {
            Resolution::Template(id) => (*id).to_string(),
            Resolution::ConventionalCommit => {
                if title.starts_with("fix") {
                    FIX.to_string()
                } else {
                    FEATURE.to_string()
                }
            }
        }
    }
}

/// Built-in title patterns as (name, regex, resolution), in precedence order.
pub const BUILTIN_TITLE_PATTERNS: &[(&str, &str, Resolution)] = &[
    (
        "hotfix",
        r"^hotfix:\s.+$",
        Resolution::Template(HOTFIX_MAIN),
    ),
    (
        "release",
        r"^release:\sv?[0-9]+\.[0-9]+\.[0-9]+(-[A-Za-z0-9_.+]+)?$",
        Resolution::Template(RELEASE_MAIN),
    ),
    (
        "backmerge",
        r"^chore\(backmerge\):\sv?[0-9]+\.[0-9]+\.[0-9]+(-[A-Za-z0-9_.+]+)?$",
        Resolution::Template(RELEASE_BACKMERGE),
    ),
    (
        "conventional-commit",
        r"^(feat|fix|refactor|perf|test|docs|chore)(\([A-Za-z0-9_\-/]+\))?:\s.+$",
        Resolution::ConventionalCommit,
    ),
];

/// Built-in body patterns as (template id, regex), in precedence order.
pub const BUILTIN_BODY_PATTERNS: &[(&str, &str)] = &[
    (FEATURE, r"새로운 기능 추가|# 새로운 기능"),
    (FIX, r"버그 수정|# 버그 수정"),
    (HOTFIX_MAIN, r"긴급 핫픽스|# 긴급 핫픽스"),
    (RELEASE_MAIN, r"릴리스 \(Main\)|# 릴리스 \(Main\)"),
    (RELEASE_BACKMERGE, r"릴리스 백머지|# 릴리스 백머지"),
];

static BUILTIN: LazyLock<PatternLibrary> = LazyLock::new(|| {
    let title = BUILTIN_TITLE_PATTERNS
        .iter()
        .map(|(name, pattern, resolution)| TitlePattern {
            name: (*name).to_string(),
            regex: Regex::new(pattern).unwrap(),
            resolution: *resolution,
        })
        .collect();
    let body = BUILTIN_BODY_PATTERNS
        .iter()
        .map(|(template, pattern)| BodyPattern {
            template: (*template).to_string(),
            regex: Regex::new(pattern).unwrap(),
        })
        .collect();
    PatternLibrary { title, body }
});

/// A title pattern and the template it resolves to.
#[derive(Debug, Clone)]
pub struct TitlePattern {
    /// Pattern name (for logging).
    pub name: String,
    /// Regex the whole title must match.
    pub regex: Regex,
    /// How a match becomes a template id.
    pub resolution: Resolution,
}

/// A body pattern for one template.
#[derive(Debug, Clone)]
pub struct BodyPattern {
    /// Template id this pattern identifies.
    pub template: String,
    /// Regex searched anywhere in the body.
    pub regex: Regex,
}

/// Ordered title and body cascades.
///
/// # Example
///
/// ```
/// use pr_lint::patterns::PatternLibrary;
///
/// let library = PatternLibrary::builtin();
/// assert_eq!(library.match_title("hotfix: patch login"), Some("hotfix-main".to_string()));
/// assert_eq!(library.match_title("fix(auth): null check"), Some("fix".to_string()));
/// assert_eq!(library.match_title("Update README"), None);
/// ```
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    title: Vec<TitlePattern>,
    body: Vec<BodyPattern>,
}

impl PatternLibrary {
    /// The built-in cascades.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// A library with no patterns; nothing is ever detected.
    pub fn empty() -> Self {
        Self {
            title: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Append a title pattern after the existing ones.
    pub fn with_title_pattern(
        mut self,
        name: impl Into<String>,
        pattern: &str,
        resolution: Resolution,
    ) -> Result<Self, regex::Error> {
        self.title.push(TitlePattern {
            name: name.into(),
            regex: Regex::new(pattern)?,
            resolution,
        });
        Ok(self)
    }

    /// Append a body pattern after the existing ones.
    pub fn with_body_pattern(
        mut self,
        template: impl Into<String>,
        pattern: &str,
    ) -> Result<Self, regex::Error> {
        self.body.push(BodyPattern {
            template: template.into(),
            regex: Regex::new(pattern)?,
        });
        Ok(self)
    }

    /// Title patterns in evaluation order.
    pub fn title_patterns(&self) -> &[TitlePattern] {
        &self.title
    }

    /// Body patterns in evaluation order.
    pub fn body_patterns(&self) -> &[BodyPattern] {
        &self.body
    }

    /// Run the title cascade. The first matching pattern wins.
    pub fn match_title(&self, title: &str) -> Option<String> {
        self.title
            .iter()
            .find(|p| p.regex.is_match(title))
            .map(|p| {
                tracing::debug!("Title matched pattern '{}'", p.name);
                p.resolution.resolve(title)
            })
    }

    /// Run the body cascade. The first matching pattern wins.
    pub fn match_body(&self, body: &str) -> Option<String> {
        self.body
            .iter()
            .find(|p| p.regex.is_match(body))
            .map(|p| p.template.clone())
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

/// Remove `<!-- ... -->` comments, including ones spanning several lines.
pub fn strip_comments(text: &str) -> String {
    COMMENT.replace_all(text, "").into_owned()
}

/// Build the pattern for a checked list item carrying `label`.
///
/// Matches `- [x] <label>` anywhere in the text. The marker and the label
/// are case-insensitive, and the label is matched literally.
pub fn checked_item(label: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)-\s*\[x\]\s*{}", regex::escape(label)))
}
