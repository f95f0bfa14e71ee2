//! Rules file discovery and loading.
//!
//! Rules live next to the workflow that runs pr-lint, at
//! `.github/pr-lint/rules.json` by default. YAML (`rules.yml`,
//! `rules.yaml`) is accepted too; the format follows the file extension.

use std::fs;
use std::path::{Path, PathBuf};

use super::ruleset::RuleSet;
use super::schema::RulesFile;
use crate::error::{PrLintError, Result};

/// Directory holding the rules file, relative to the project root.
pub const RULES_DIR: &str = ".github/pr-lint";

/// Rules file names tried during discovery, in order.
pub const RULES_FILE_NAMES: &[&str] = &["rules.json", "rules.yml", "rules.yaml"];

/// Rules covering the built-in templates, written by `pr-lint init`.
pub const DEFAULT_RULES: &str = include_str!("default_rules.json");

/// Where `pr-lint init` writes rules and where discovery looks first.
pub fn default_rules_path(project_root: &Path) -> PathBuf {
    project_root.join(RULES_DIR).join(RULES_FILE_NAMES[0])
}

/// Find the rules file for a project.
///
/// # Returns
///
/// The first existing file from [`RULES_FILE_NAMES`] inside [`RULES_DIR`],
/// or None if there is none.
pub fn discover_rules(project_root: &Path) -> Option<PathBuf> {
    let dir = project_root.join(RULES_DIR);
    RULES_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml") | Some("yaml")
    )
}

/// Parse rules file content without validating it.
///
/// # Arguments
///
/// * `content` - The JSON or YAML content to parse
/// * `source_path` - Path used to pick the format and for error reporting
pub fn parse_rules_file(content: &str, source_path: &Path) -> Result<RulesFile> {
    let parsed = if is_yaml(source_path) {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(content).map_err(|e| e.to_string())
    };

    parsed.map_err(|message| PrLintError::RulesParseError {
        path: source_path.to_path_buf(),
        message,
    })
}

/// Parse and validate rules file content.
pub fn parse_rules(content: &str, source_path: &Path) -> Result<RuleSet> {
    RuleSet::from_config(parse_rules_file(content, source_path)?)
}

/// Load, parse and validate a rules file.
///
/// # Errors
///
/// Returns `RulesNotFound` if the file doesn't exist.
/// Returns `RulesParseError` if the content is not valid JSON/YAML for the schema.
/// Returns `InvalidRules` if the rules violate their contract.
pub fn load_rules(path: &Path) -> Result<RuleSet> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PrLintError::RulesNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PrLintError::Io(e)
        }
    })?;

    tracing::debug!("Loading rules from {}", path.display());
    parse_rules(&content, path)
}

/// The embedded default rules.
pub fn default_rules() -> Result<RuleSet> {
    parse_rules(DEFAULT_RULES, Path::new("default_rules.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{FEATURE, FIX, HOTFIX_MAIN, RELEASE_BACKMERGE, RELEASE_MAIN};
    use tempfile::TempDir;

    fn write_rules(temp: &TempDir, name: &str, content: &str) -> PathBuf {
        let dir = temp.path().join(RULES_DIR);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn discovers_json_first() {
        let temp = TempDir::new().unwrap();
        write_rules(&temp, "rules.yml", "{}");
        let json = write_rules(&temp, "rules.json", "{}");

        assert_eq!(discover_rules(temp.path()), Some(json));
    }

    #[test]
    fn discovers_yaml_fallback() {
        let temp = TempDir::new().unwrap();
        let yaml = write_rules(&temp, "rules.yaml", "{}");

        assert_eq!(discover_rules(temp.path()), Some(yaml));
    }

    #[test]
    fn discovery_finds_nothing_in_empty_project() {
        let temp = TempDir::new().unwrap();
        assert_eq!(discover_rules(temp.path()), None);
    }

    #[test]
    fn default_path_is_rules_json() {
        let path = default_rules_path(Path::new("/repo"));
        assert_eq!(path, PathBuf::from("/repo/.github/pr-lint/rules.json"));
    }

    #[test]
    fn loads_yaml_rules() {
        let temp = TempDir::new().unwrap();
        let path = write_rules(
            &temp,
            "rules.yml",
            "global_rules:\n  min_body_length: 7\ntemplates:\n  fix:\n    required_sections: [원인]\n",
        );

        let rules = load_rules(&path).unwrap();
        assert_eq!(rules.global().min_body_length, 7);
        assert!(rules.template("fix").is_some());
    }

    #[test]
    fn missing_file_is_rules_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_rules(&temp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, PrLintError::RulesNotFound { .. }));
    }

    #[test]
    fn malformed_json_is_parse_error_with_path() {
        let temp = TempDir::new().unwrap();
        let path = write_rules(&temp, "rules.json", "{ not json");

        let err = load_rules(&path).unwrap_err();
        assert!(matches!(err, PrLintError::RulesParseError { .. }));
        assert!(err.to_string().contains("rules.json"));
    }

    #[test]
    fn wrong_shape_is_parse_error() {
        let err = parse_rules(
            r#"{ "global_rules": { "min_body_length": "long" } }"#,
            Path::new("rules.json"),
        )
        .unwrap_err();
        assert!(matches!(err, PrLintError::RulesParseError { .. }));
    }

    #[test]
    fn invalid_rules_surface_after_parsing() {
        let err = parse_rules(
            r#"{ "templates": { "fix": { "title": "(" } } }"#,
            Path::new("rules.json"),
        )
        .unwrap_err();
        assert!(matches!(err, PrLintError::InvalidRules { .. }));
    }

    #[test]
    fn default_rules_cover_every_builtin_template() {
        let rules = default_rules().unwrap();
        for id in [FEATURE, FIX, HOTFIX_MAIN, RELEASE_MAIN, RELEASE_BACKMERGE] {
            assert!(rules.template(id).is_some(), "missing template {id}");
        }
    }

    #[test]
    fn default_title_patterns_accept_builtin_titles() {
        let rules = default_rules().unwrap();
        let cases = [
            (FEATURE, "feat(login): 소셜 로그인 추가"),
            (FIX, "fix: 결제 금액 반올림 오류"),
            (HOTFIX_MAIN, "hotfix: 결제 장애 긴급 수정"),
            (RELEASE_MAIN, "release: v1.4.0"),
            (RELEASE_BACKMERGE, "chore(backmerge): v1.4.0"),
        ];
        for (id, title) in cases {
            let pattern = rules.template(id).unwrap().title_pattern.as_ref().unwrap();
            assert!(pattern.is_match(title), "{id} should accept {title}");
        }
    }
}
