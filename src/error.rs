//! Error types for pr-lint operations.
//!
//! This module defines [`PrLintError`], the error type used for everything
//! that can stop a run before a verdict exists, and a [`Result`] alias.
//!
//! # Error Handling Strategy
//!
//! - Validation failures are not errors. They are reported as data in
//!   [`ValidationResult`](crate::validate::ValidationResult).
//! - `PrLintError` covers configuration problems (missing, unparsable or
//!   invalid rules files) and input/IO failures in the CLI.
//! - Use `anyhow::Error` (via `PrLintError::Other`) for unexpected errors.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pr-lint operations.
#[derive(Debug, Error)]
pub enum PrLintError {
    /// Rules file not found at the expected location.
    #[error("Rules file not found: {path}")]
    RulesNotFound { path: PathBuf },

    /// Failed to parse the rules file.
    #[error("Failed to parse rules at {path}: {message}")]
    RulesParseError { path: PathBuf, message: String },

    /// Rules file parsed but violates its contract.
    #[error("Invalid rules: {message}")]
    InvalidRules { message: String },

    /// The PR body or title could not be read.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pr-lint operations.
pub type Result<T> = std::result::Result<T, PrLintError>;
