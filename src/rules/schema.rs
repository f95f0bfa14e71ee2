//! Rules file schema.
//!
//! These types mirror the on-disk rules file exactly. They are plain data:
//! nothing here is validated beyond what serde enforces. Use
//! [`RuleSet::from_config`](super::RuleSet::from_config) to turn a
//! [`RulesFile`] into a checked, immutable rule set.
//!
//! ```json
//! {
//!   "global_rules": { "min_body_length": 50, "forbidden_words": ["WIP"] },
//!   "templates": {
//!     "fix": {
//!       "title": "^fix(\\(.+\\))?: .+$",
//!       "required_sections": ["원인", "테스트"],
//!       "validation_rules": {
//!         "원인": { "min_length": 10 },
//!         "테스트": { "required_checkboxes": ["로컬에서 확인했습니다"] }
//!       }
//!     }
//!   }
//! }
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root of a rules file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RulesFile {
    /// Optional JSON Schema reference, ignored by pr-lint.
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Rules applied to every pull request.
    #[serde(default)]
    pub global_rules: GlobalRulesConfig,

    /// Per-template rules keyed by template id.
    #[serde(default)]
    pub templates: BTreeMap<String, TemplateConfig>,
}

/// Rules applied regardless of template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GlobalRulesConfig {
    /// Minimum body length in characters.
    #[serde(default)]
    pub min_body_length: usize,

    /// Words that produce a warning when present in the body.
    #[serde(default)]
    pub forbidden_words: Vec<String>,
}

/// Rules for one template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TemplateConfig {
    /// Short description shown by `pr-lint templates`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Regular expression a conforming title must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// `##` sections the body must contain, in report order.
    #[serde(default)]
    pub required_sections: Vec<String>,

    /// Content rules keyed by section name.
    #[serde(default)]
    pub validation_rules: BTreeMap<String, SectionRuleConfig>,
}

/// Content rules for one section. Absent fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SectionRuleConfig {
    /// Minimum length of the section content, comments excluded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Labels that must appear as checked items (`- [x] label`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_checkboxes: Option<Vec<String>>,

    /// Literals that must appear verbatim in the section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_fields: Option<Vec<String>>,
}

/// Generate the JSON Schema of the rules file.
pub fn rules_json_schema() -> serde_json::Value {
    let schema = schemars::schema_for!(RulesFile);
    serde_json::to_value(&schema).unwrap_or_default()
}
