//! Init command implementation.
//!
//! The `pr-lint init` command writes the default rules file so a project
//! can start from the built-in templates and adjust from there.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::InitArgs;
use crate::error::Result;
use crate::rules::{default_rules_path, DEFAULT_RULES};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
pub struct InitCommand {
    project_root: PathBuf,
    rules_override: Option<PathBuf>,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(project_root: &Path, rules_override: Option<PathBuf>, args: InitArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            rules_override,
            args,
        }
    }

    /// Where the rules file will be written.
    pub fn target(&self) -> PathBuf {
        self.rules_override
            .clone()
            .unwrap_or_else(|| default_rules_path(&self.project_root))
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let target = self.target();

        if target.exists() && !self.args.force {
            ui.error(&format!(
                "Rules already exist at {}. Use --force to overwrite.",
                target.display()
            ));
            return Ok(CommandResult::failure(1));
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, DEFAULT_RULES)?;

        ui.success(&format!("Created {}", target.display()));
        if ui.output_mode().shows_details() {
            ui.message("Edit the templates to match your pull request templates.");
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::load_rules;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn writes_default_rules() {
        let temp = TempDir::new().unwrap();
        let cmd = InitCommand::new(temp.path(), None, InitArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        let path = default_rules_path(temp.path());
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_RULES);
        assert_eq!(load_rules(&path).unwrap().len(), 5);
        assert!(ui.has_success("Created"));
    }

    #[test]
    fn refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = default_rules_path(temp.path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{}").unwrap();
        let cmd = InitCommand::new(temp.path(), None, InitArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("--force"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn force_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = default_rules_path(temp.path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{}").unwrap();
        let cmd = InitCommand::new(temp.path(), None, InitArgs { force: true });
        let mut ui = MockUI::new();

        assert!(cmd.execute(&mut ui).unwrap().success);
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_RULES);
    }

    #[test]
    fn honors_rules_override() {
        let temp = TempDir::new().unwrap();
        let custom = temp.path().join("config/pr-rules.json");
        let cmd = InitCommand::new(temp.path(), Some(custom.clone()), InitArgs::default());
        let mut ui = MockUI::new();

        assert!(cmd.execute(&mut ui).unwrap().success);
        assert!(custom.exists());
        assert_eq!(cmd.target(), custom);
    }
}
