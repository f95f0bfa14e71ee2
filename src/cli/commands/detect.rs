//! Detect command implementation.
//!
//! The `pr-lint detect` command prints which template a pull request
//! follows and whether the title or the body gave it away. It needs no
//! rules file.

use crate::classify::TemplateClassifier;
use crate::cli::args::DetectArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The detect command implementation.
pub struct DetectCommand {
    args: DetectArgs,
}

impl DetectCommand {
    /// Create a new detect command.
    pub fn new(args: DetectArgs) -> Self {
        Self { args }
    }
}

impl Command for DetectCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let input = self.args.input.read()?;

        match TemplateClassifier::new().detect(&input.title, &input.body) {
            Some(detection) => {
                ui.message(&format!("{} ({})", detection.template, detection.source));
                Ok(CommandResult::success())
            }
            None => {
                ui.message("unknown");
                Ok(CommandResult::failure(1))
            }
        }
    }
}
