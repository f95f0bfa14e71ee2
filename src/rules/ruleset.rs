//! Validated, immutable rule set.
//!
//! [`RuleSet::from_config`] checks a parsed [`RulesFile`] once, up front,
//! and compiles every pattern it contains. A malformed rules file is
//! rejected here so the validator never sees one.

use regex::Regex;
use std::collections::{BTreeMap, HashMap, HashSet};

use super::schema::{RulesFile, SectionRuleConfig, TemplateConfig};
use crate::checks::{CheckboxCheck, LengthCheck, RequiredFieldsCheck, SectionCheck};
use crate::error::{PrLintError, Result};

/// Rules applied to every pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalRules {
    /// Minimum body length in characters.
    pub min_body_length: usize,
    /// Words that trigger a warning, without duplicates.
    pub forbidden_words: Vec<String>,
}

/// Content rules for one section, compiled into checks.
#[derive(Debug, Clone, Default)]
pub struct SectionRule {
    /// Minimum visible length.
    pub min_length: Option<LengthCheck>,
    /// Checklist items that must be ticked.
    pub required_checkboxes: Option<CheckboxCheck>,
    /// Literals that must appear.
    pub required_fields: Option<RequiredFieldsCheck>,
}

impl SectionRule {
    fn from_config(template: &str, section: &str, config: &SectionRuleConfig) -> Result<Self> {
        let required_checkboxes = config
            .required_checkboxes
            .as_ref()
            .map(|labels| {
                CheckboxCheck::new(dedup(labels)).map_err(|e| PrLintError::InvalidRules {
                    message: format!(
                        "template '{}' section '{}' has an unusable checkbox label: {}",
                        template, section, e
                    ),
                })
            })
            .transpose()?;

        Ok(Self {
            min_length: config.min_length.map(LengthCheck::new),
            required_checkboxes,
            required_fields: config
                .required_fields
                .as_ref()
                .map(|fields| RequiredFieldsCheck::new(dedup(fields))),
        })
    }

    /// Configured checks in evaluation order: length, checkboxes, fields.
    pub fn checks(&self) -> impl Iterator<Item = &dyn SectionCheck> {
        let length = self.min_length.iter().map(|c| c as &dyn SectionCheck);
        let checkboxes = self
            .required_checkboxes
            .iter()
            .map(|c| c as &dyn SectionCheck);
        let fields = self.required_fields.iter().map(|c| c as &dyn SectionCheck);
        length.chain(checkboxes).chain(fields)
    }
}

/// Rules for one template.
#[derive(Debug, Clone)]
pub struct TemplateRule {
    /// Short description for listings.
    pub description: Option<String>,
    /// Pattern a conforming title must match.
    pub title_pattern: Option<Regex>,
    /// Sections the body must contain, in report order, without duplicates.
    pub required_sections: Vec<String>,
    /// Content rules keyed by section name.
    pub validation_rules: HashMap<String, SectionRule>,
}

impl TemplateRule {
    fn from_config(id: &str, config: &TemplateConfig) -> Result<Self> {
        let title_pattern = config
            .title
            .as_deref()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| PrLintError::InvalidRules {
                    message: format!("template '{}' has an invalid title pattern: {}", id, e),
                })
            })
            .transpose()?;

        let mut seen = HashSet::new();
        for section in &config.required_sections {
            if section.trim().is_empty() {
                return Err(PrLintError::InvalidRules {
                    message: format!("template '{}' has an empty required section name", id),
                });
            }
            if !seen.insert(section.as_str()) {
                return Err(PrLintError::InvalidRules {
                    message: format!("template '{}' lists section '{}' twice", id, section),
                });
            }
        }

        let mut validation_rules = HashMap::new();
        for (section, rule) in &config.validation_rules {
            if !seen.contains(section.as_str()) {
                tracing::warn!(
                    "Template '{}' has validation rules for '{}', which is not a required section; they will never run",
                    id,
                    section
                );
            }
            validation_rules.insert(section.clone(), SectionRule::from_config(id, section, rule)?);
        }

        Ok(Self {
            description: config.description.clone(),
            title_pattern,
            required_sections: config.required_sections.clone(),
            validation_rules,
        })
    }

    /// The section rule for `section`, if any.
    pub fn section_rule(&self, section: &str) -> Option<&SectionRule> {
        self.validation_rules.get(section)
    }
}

/// The complete, validated rule configuration.
///
/// # Example
///
/// ```
/// use pr_lint::rules::{RuleSet, RulesFile};
///
/// let file: RulesFile = serde_json::from_str(r#"{
///     "global_rules": { "min_body_length": 10, "forbidden_words": [] },
///     "templates": { "fix": { "required_sections": ["원인"] } }
/// }"#).unwrap();
///
/// let rules = RuleSet::from_config(file).unwrap();
/// assert!(rules.template("fix").is_some());
/// assert!(rules.template("feature").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    global: GlobalRules,
    templates: BTreeMap<String, TemplateRule>,
}

impl RuleSet {
    /// Validate a parsed rules file and compile its patterns.
    pub fn from_config(config: RulesFile) -> Result<Self> {
        if config
            .global_rules
            .forbidden_words
            .iter()
            .any(|w| w.is_empty())
        {
            return Err(PrLintError::InvalidRules {
                message: "global_rules.forbidden_words contains an empty word".to_string(),
            });
        }

        let global = GlobalRules {
            min_body_length: config.global_rules.min_body_length,
            forbidden_words: dedup(&config.global_rules.forbidden_words),
        };

        let templates = config
            .templates
            .iter()
            .map(|(id, template)| Ok((id.clone(), TemplateRule::from_config(id, template)?)))
            .collect::<Result<BTreeMap<_, _>>>()?;

        tracing::debug!("Loaded rules for {} template(s)", templates.len());

        Ok(Self { global, templates })
    }

    /// Rules applied to every pull request.
    pub fn global(&self) -> &GlobalRules {
        &self.global
    }

    /// Rules for a template id.
    pub fn template(&self, id: &str) -> Option<&TemplateRule> {
        self.templates.get(id)
    }

    /// All templates, ordered by id.
    pub fn templates(&self) -> impl Iterator<Item = (&str, &TemplateRule)> {
        self.templates.iter().map(|(id, t)| (id.as_str(), t))
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether no templates are configured.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Drop repeated entries, keeping the first occurrence.
fn dedup(items: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(item.as_str()))
        .cloned()
        .collect()
}
