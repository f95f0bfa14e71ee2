//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// pr-lint - Validate pull request descriptions against template rules.
#[derive(Debug, Parser)]
#[command(name = "pr-lint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to rules file (overrides .github/pr-lint/rules.json)
    #[arg(short, long, global = true)]
    pub rules: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a pull request body (default if no command specified)
    Check(CheckArgs),

    /// Print the template a pull request follows
    Detect(DetectArgs),

    /// List templates defined in the rules file
    Templates(TemplatesArgs),

    /// Write the default rules file
    Init(InitArgs),

    /// Print the JSON Schema of the rules file
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Pull request text, shared by `check` and `detect`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InputArgs {
    /// Pull request body
    #[arg(long, env = "PR_BODY", hide_env_values = true)]
    pub body: Option<String>,

    /// Read the pull request body from a file ("-" for stdin); wins over --body
    #[arg(long, value_name = "PATH")]
    pub body_file: Option<PathBuf>,

    /// Pull request title
    #[arg(long, env = "PR_TITLE", hide_env_values = true)]
    pub title: Option<String>,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format: human, json, github
    #[arg(long, value_parser = ["human", "json", "github"])]
    pub format: Option<String>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `detect` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DetectArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the `templates` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TemplatesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Overwrite an existing rules file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
