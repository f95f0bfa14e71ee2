//! Shared loading for commands: pull request text and rules.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::cli::args::InputArgs;
use crate::error::{PrLintError, Result};
use crate::rules::{default_rules_path, discover_rules, load_rules, RuleSet};
use crate::ui::UserInterface;

use super::dispatcher::CommandResult;

/// Pull request text to validate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrInput {
    pub title: String,
    pub body: String,
}

impl InputArgs {
    /// Read `PR_BODY` and `PR_TITLE` from the environment.
    ///
    /// clap applies these fallbacks when a subcommand is parsed; this covers
    /// a bare `pr-lint` invocation.
    pub fn from_env() -> Self {
        Self {
            body: std::env::var("PR_BODY").ok(),
            body_file: None,
            title: std::env::var("PR_TITLE").ok(),
        }
    }

    /// Resolve the title and body. A missing value is empty.
    pub fn read(&self) -> Result<PrInput> {
        let body = match &self.body_file {
            Some(path) if path.as_os_str() == "-" => {
                let mut body = String::new();
                std::io::stdin()
                    .read_to_string(&mut body)
                    .map_err(|e| PrLintError::InvalidInput {
                        message: format!("cannot read body from stdin: {}", e),
                    })?;
                body
            }
            Some(path) => {
                std::fs::read_to_string(path).map_err(|e| PrLintError::InvalidInput {
                    message: format!("cannot read body file {}: {}", path.display(), e),
                })?
            }
            None => self.body.clone().unwrap_or_default(),
        };

        Ok(PrInput {
            title: self.title.clone().unwrap_or_default(),
            body,
        })
    }
}

/// Where the rules for a project live.
///
/// An explicit path wins. Otherwise discovery runs, and the default
/// location is reported when nothing is found.
pub fn rules_location(project_root: &Path, rules_override: Option<&Path>) -> PathBuf {
    rules_override
        .map(Path::to_path_buf)
        .or_else(|| discover_rules(project_root))
        .unwrap_or_else(|| default_rules_path(project_root))
}

/// Load the rule set, or report why it cannot be used.
///
/// Configuration problems are shown through the UI and turned into a
/// failed [`CommandResult`]: exit code 2 when the file is missing, 1 when it
/// is malformed. Other errors propagate.
pub fn load_rule_set(
    path: &Path,
    ui: &mut dyn UserInterface,
) -> Result<std::result::Result<RuleSet, CommandResult>> {
    match load_rules(path) {
        Ok(rules) => Ok(Ok(rules)),
        Err(PrLintError::RulesNotFound { path }) => {
            ui.error(&format!(
                "No rules found at {}. Run 'pr-lint init' to create one.",
                path.display()
            ));
            Ok(Err(CommandResult::failure(2)))
        }
        Err(e @ (PrLintError::RulesParseError { .. } | PrLintError::InvalidRules { .. })) => {
            ui.error(&e.to_string());
            Ok(Err(CommandResult::failure(1)))
        }
        Err(e) => Err(e),
    }
}
