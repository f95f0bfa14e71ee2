//! Templates command implementation.
//!
//! The `pr-lint templates` command lists the templates defined in the
//! rules file.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cli::args::TemplatesArgs;
use crate::error::Result;
use crate::rules::{RuleSet, TemplateRule};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::input::{load_rule_set, rules_location};

/// The templates command implementation.
pub struct TemplatesCommand {
    project_root: PathBuf,
    rules_override: Option<PathBuf>,
    args: TemplatesArgs,
}

#[derive(Serialize)]
struct TemplateSummary<'a> {
    id: &'a str,
    description: Option<&'a str>,
    title: Option<&'a str>,
    required_sections: &'a [String],
    validated_sections: Vec<&'a str>,
}

impl<'a> TemplateSummary<'a> {
    fn new(id: &'a str, template: &'a TemplateRule) -> Self {
        let mut validated_sections: Vec<&str> = template
            .validation_rules
            .keys()
            .map(String::as_str)
            .collect();
        validated_sections.sort_unstable();

        Self {
            id,
            description: template.description.as_deref(),
            title: template.title_pattern.as_ref().map(|p| p.as_str()),
            required_sections: &template.required_sections,
            validated_sections,
        }
    }
}

impl TemplatesCommand {
    /// Create a new templates command.
    pub fn new(project_root: &Path, rules_override: Option<PathBuf>, args: TemplatesArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            rules_override,
            args,
        }
    }

    fn show_human(&self, rules: &RuleSet, ui: &mut dyn UserInterface) {
        if rules.is_empty() {
            ui.warning("No templates defined.");
            return;
        }

        for (id, template) in rules.templates() {
            let summary = TemplateSummary::new(id, template);
            match summary.description {
                Some(description) => ui.message(&format!("{} - {}", id, description)),
                None => ui.message(id),
            }
            if let Some(title) = summary.title {
                ui.message(&format!("  title:    {}", title));
            }
            if !summary.required_sections.is_empty() {
                ui.message(&format!(
                    "  sections: {}",
                    summary.required_sections.join(", ")
                ));
            }
        }
    }
}

impl Command for TemplatesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = rules_location(&self.project_root, self.rules_override.as_deref());
        let rules = match load_rule_set(&path, ui)? {
            Ok(rules) => rules,
            Err(failure) => return Ok(failure),
        };

        if self.args.json {
            let summaries: Vec<_> = rules
                .templates()
                .map(|(id, template)| TemplateSummary::new(id, template))
                .collect();
            let json = serde_json::to_string_pretty(&summaries).map_err(anyhow::Error::from)?;
            ui.message(&json);
        } else {
            self.show_human(&rules, ui);
        }

        Ok(CommandResult::success())
    }
}
