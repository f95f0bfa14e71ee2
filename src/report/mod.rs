//! Report formatters.
//!
//! Render a [`ValidationResult`] for people (`human`), for tooling
//! (`json`), or as GitHub Actions workflow commands (`github`).

pub mod github;
pub mod human;
pub mod json;

use std::io::Write;
use std::str::FromStr;

use crate::validate::ValidationResult;

pub use github::{append_step_outputs, step_outputs, write_step_outputs, GithubFormatter};
pub use human::HumanFormatter;
pub use json::JsonFormatter;

/// Output format for validation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Human,
    Json,
    Github,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "github" => Ok(Self::Github),
            _ => Err(format!("unknown report format: {}", s)),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
            Self::Github => write!(f, "github"),
        }
    }
}

/// Trait for formatting validation reports.
pub trait ReportFormatter {
    /// Format a result to the given writer.
    fn format<W: Write>(&self, result: &ValidationResult, writer: &mut W) -> std::io::Result<()>;
}

/// Format a result into a string.
pub fn render<F: ReportFormatter>(formatter: &F, result: &ValidationResult) -> String {
    let mut output = Vec::new();
    formatter.format(result, &mut output).ok();
    String::from_utf8(output).unwrap_or_default()
}
