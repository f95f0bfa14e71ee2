//! pr-lint - Template-aware pull request body validation.
//!
//! pr-lint decides which template a pull request follows (from its title,
//! falling back to its body), extracts the body's `##` sections and checks
//! each one against configurable rules: minimum length, ticked checklist
//! items and required literal fields. The result is a pass/fail verdict
//! with every error and warning found in one pass.
//!
//! # Modules
//!
//! - [`patterns`] - Title and body detection cascades, shared regex helpers
//! - [`extract`] - Section extraction from markdown bodies
//! - [`checks`] - Per-section content checks
//! - [`classify`] - Template detection
//! - [`rules`] - Rules file schema, loading and validation
//! - [`validate`] - Validation orchestration
//! - [`diagnostic`] - Error and warning model
//! - [`report`] - Human, JSON and GitHub Actions output
//! - [`cli`] - Command-line interface and argument parsing
//! - [`ui`] - Terminal output
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use pr_lint::rules::default_rules;
//! use pr_lint::validate::Validator;
//!
//! let rules = default_rules().unwrap();
//! let body = "# 릴리스 백머지\n\n## 백머지 정보\n버전: v1.4.0\n\
//!             main 브랜치의 릴리스 변경 사항을 develop 브랜치에 반영합니다.\n";
//!
//! let result = Validator::new(&rules).validate(body, "chore(backmerge): v1.4.0");
//! assert_eq!(result.template.as_deref(), Some("release-backmerge"));
//! assert!(result.valid, "{:?}", result.error_messages());
//! ```

pub mod checks;
pub mod classify;
pub mod cli;
pub mod diagnostic;
pub mod error;
pub mod extract;
pub mod patterns;
pub mod report;
pub mod rules;
pub mod ui;
pub mod validate;

pub use error::{PrLintError, Result};
