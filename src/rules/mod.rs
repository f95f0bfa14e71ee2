//! Rule configuration.
//!
//! - [`schema`] - serde types mirroring the rules file
//! - [`ruleset`] - eager validation into an immutable [`RuleSet`]
//! - [`loader`] - discovery, parsing and the embedded default rules
//!
//! # Example
//!
//! ```
//! use pr_lint::rules::{load_rules, RULES_DIR};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(RULES_DIR);
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("rules.json"), r#"{ "templates": { "fix": {} } }"#).unwrap();
//!
//! let rules = load_rules(&dir.join("rules.json")).unwrap();
//! assert_eq!(rules.len(), 1);
//! ```

pub mod loader;
pub mod ruleset;
pub mod schema;

pub use loader::{
    default_rules, default_rules_path, discover_rules, load_rules, parse_rules, parse_rules_file,
    DEFAULT_RULES, RULES_DIR, RULES_FILE_NAMES,
};
pub use ruleset::{GlobalRules, RuleSet, SectionRule, TemplateRule};
pub use schema::{rules_json_schema, GlobalRulesConfig, RulesFile, SectionRuleConfig, TemplateConfig};
