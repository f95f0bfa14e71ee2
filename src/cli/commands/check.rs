//! Check command implementation.
//!
//! The `pr-lint check` command validates a pull request body and title
//! against the project's rules and exits non-zero when validation fails.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::report::{
    append_step_outputs, render, GithubFormatter, HumanFormatter, JsonFormatter, ReportFormat,
};
use crate::ui::{is_github_actions, UserInterface};
use crate::validate::{ValidationResult, Validator};

use super::dispatcher::{Command, CommandResult};
use super::input::{load_rule_set, rules_location};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    rules_override: Option<PathBuf>,
    args: CheckArgs,
    github_actions: bool,
    github_output: Option<PathBuf>,
}

impl CheckCommand {
    /// Create a new check command.
    ///
    /// The GitHub Actions environment (`GITHUB_ACTIONS`, `GITHUB_OUTPUT`) is
    /// read here.
    pub fn new(project_root: &Path, rules_override: Option<PathBuf>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            rules_override,
            args,
            github_actions: is_github_actions(),
            github_output: std::env::var_os("GITHUB_OUTPUT").map(PathBuf::from),
        }
    }

    /// Override the detected GitHub Actions environment.
    pub fn with_github_env(mut self, github_actions: bool, github_output: Option<PathBuf>) -> Self {
        self.github_actions = github_actions;
        self.github_output = github_output;
        self
    }

    fn format(&self) -> ReportFormat {
        self.args
            .format
            .as_deref()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    }

    fn report_github(&self, result: &ValidationResult, ui: &mut dyn UserInterface) -> Result<()> {
        match &self.github_output {
            Some(path) => {
                let annotations = render(&GithubFormatter::new(), result);
                if !annotations.is_empty() {
                    ui.message(annotations.trim_end());
                }
                append_step_outputs(path, result)?;
            }
            None => {
                let output = render(&GithubFormatter::with_legacy_outputs(), result);
                ui.message(output.trim_end());
            }
        }
        Ok(())
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let input = self.args.input.read()?;

        let rules_path = rules_location(&self.project_root, self.rules_override.as_deref());
        let rules = match load_rule_set(&rules_path, ui)? {
            Ok(rules) => rules,
            Err(failure) => return Ok(failure),
        };
        ui.note(&format!("Using rules from {}", rules_path.display()));

        let result = Validator::new(&rules).validate(&input.body, &input.title);
        tracing::debug!(
            "Validation finished: valid={}, {} error(s), {} warning(s)",
            result.valid,
            result.errors.len(),
            result.warnings.len()
        );

        let should_fail = !result.valid || (self.args.strict && result.has_warnings());

        match self.format() {
            ReportFormat::Json => {
                ui.message(render(&JsonFormatter::new(), &result).trim_end());
            }
            ReportFormat::Github => self.report_github(&result, ui)?,
            ReportFormat::Human => {
                if should_fail || ui.output_mode().shows_success() {
                    let formatter = HumanFormatter::new(ui.supports_color());
                    ui.message(render(&formatter, &result).trim_end());
                }
                if self.args.format.is_none() && self.github_actions {
                    self.report_github(&result, ui)?;
                }
            }
        }

        if result.valid && should_fail {
            ui.warning("Warnings are treated as errors (--strict)");
        }

        if should_fail {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::InputArgs;
    use crate::rules::{DEFAULT_RULES, RULES_DIR};
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    const RULES: &str = r#"{
        "global_rules": { "min_body_length": 10, "forbidden_words": ["WIP"] },
        "templates": {
            "fix": {
                "title": "^fix(\\(.+\\))?: .+$",
                "required_sections": ["원인"],
                "validation_rules": { "원인": { "min_length": 5 } }
            }
        }
    }"#;

    const GOOD_BODY: &str = "## 원인\n캐시 키가 잘못 생성되었습니다.\n";

    fn setup_project(rules: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(RULES_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("rules.json"), rules).unwrap();
        temp
    }

    fn args(title: &str, body: &str) -> CheckArgs {
        CheckArgs {
            input: InputArgs {
                body: Some(body.to_string()),
                body_file: None,
                title: Some(title.to_string()),
            },
            ..Default::default()
        }
    }

    fn command(temp: &TempDir, args: CheckArgs) -> CheckCommand {
        CheckCommand::new(temp.path(), None, args).with_github_env(false, None)
    }

    #[test]
    fn check_no_rules() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = command(&temp, args("fix: x", GOOD_BODY)).execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("No rules found"));
    }

    #[test]
    fn check_valid_pr() {
        let temp = setup_project(RULES);
        let mut ui = MockUI::new();

        let result = command(&temp, args("fix: cache key", GOOD_BODY))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_message("Detected template: fix"));
        assert!(ui.has_message("PR body is valid"));
    }

    #[test]
    fn check_invalid_pr() {
        let temp = setup_project(RULES);
        let mut ui = MockUI::new();

        let result = command(&temp, args("fix: cache key", "## 다른 섹션\n충분히 긴 본문입니다."))
            .execute(&mut ui)
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_message("[원인] Required section is missing or empty."));
    }

    #[test]
    fn check_quiet_hides_passing_report() {
        let temp = setup_project(RULES);
        let mut ui = MockUI::with_mode(OutputMode::Quiet);

        let result = command(&temp, args("fix: cache key", GOOD_BODY))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn check_verbose_names_rules_file() {
        let temp = setup_project(RULES);
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        command(&temp, args("fix: cache key", GOOD_BODY))
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_note("Using rules from"));
        assert!(!ui.has_message("Using rules from"));
    }

    #[test]
    fn check_verbose_json_keeps_stdout_parseable() {
        let temp = setup_project(RULES);
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        let mut check_args = args("fix: x", "short");
        check_args.format = Some("json".to_string());

        command(&temp, check_args).execute(&mut ui).unwrap();

        let report: serde_json::Value = serde_json::from_str(&ui.output()).unwrap();
        assert_eq!(report["valid"], false);
        assert!(ui.has_note("Using rules from"));
    }

    #[test]
    fn check_json_output() {
        let temp = setup_project(RULES);
        let mut ui = MockUI::new();
        let mut check_args = args("", "short");
        check_args.format = Some("json".to_string());

        let result = command(&temp, check_args).execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        let parsed: serde_json::Value = serde_json::from_str(&ui.output()).unwrap();
        assert_eq!(parsed["valid"], false);
        assert_eq!(parsed["errors"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn check_strict_fails_on_warnings() {
        let temp = setup_project(RULES);
        let body = format!("{}\nWIP", GOOD_BODY);

        let mut ui = MockUI::new();
        let lenient = command(&temp, args("fix: cache key", &body))
            .execute(&mut ui)
            .unwrap();
        assert!(lenient.success);

        let mut ui = MockUI::new();
        let mut strict_args = args("fix: cache key", &body);
        strict_args.strict = true;
        let strict = command(&temp, strict_args).execute(&mut ui).unwrap();
        assert_eq!(strict.exit_code, 1);
        assert!(ui.has_warning("--strict"));
    }

    #[test]
    fn check_github_format_writes_output_file() {
        let temp = setup_project(RULES);
        let output_file = temp.path().join("github_output");
        let mut ui = MockUI::new();
        let mut check_args = args("fix: cache key", GOOD_BODY);
        check_args.format = Some("github".to_string());

        let result = CheckCommand::new(temp.path(), None, check_args)
            .with_github_env(true, Some(output_file.clone()))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.messages().is_empty());
        let outputs = fs::read_to_string(output_file).unwrap();
        assert!(outputs.contains("valid=true\n"));
        assert!(outputs.contains("template=fix\n"));
    }

    #[test]
    fn check_github_format_falls_back_to_set_output() {
        let temp = setup_project(RULES);
        let mut ui = MockUI::new();
        let mut check_args = args("", "short");
        check_args.format = Some("github".to_string());

        command(&temp, check_args).execute(&mut ui).unwrap();

        assert!(ui.has_message("::error::"));
        assert!(ui.has_message("::set-output name=valid::false"));
        assert!(ui.has_message("::set-output name=template::unknown"));
    }

    #[test]
    fn check_in_actions_appends_github_output_to_human_report() {
        let temp = setup_project(RULES);
        let mut ui = MockUI::new();

        CheckCommand::new(temp.path(), None, args("", "short"))
            .with_github_env(true, None)
            .execute(&mut ui)
            .unwrap();

        let output = ui.output();
        let report = output.find("PR validation result").unwrap();
        let annotation = output.find("::error::").unwrap();
        assert!(report < annotation);
    }

    #[test]
    fn check_rules_override() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.json");
        fs::write(&path, DEFAULT_RULES).unwrap();
        let mut ui = MockUI::new();

        let result = CheckCommand::new(temp.path(), Some(path), args("hotfix: x", "short"))
            .with_github_env(false, None)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_message("Detected template: hotfix-main"));
    }
}
