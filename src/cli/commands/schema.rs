//! Schema command implementation.
//!
//! The `pr-lint schema` command prints the JSON Schema of the rules file,
//! for editor completion and validation.

use crate::error::Result;
use crate::rules::rules_json_schema;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
pub struct SchemaCommand;

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema =
            serde_json::to_string_pretty(&rules_json_schema()).map_err(anyhow::Error::from)?;
        ui.message(&schema);
        Ok(CommandResult::success())
    }
}
