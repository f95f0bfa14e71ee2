//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`pr-lint check`, `pr-lint detect`)
//! - Shared rules loading and input handling ([`input`])
//! - Consistent global flag handling

pub mod check;
pub mod completions;
pub mod detect;
pub mod dispatcher;
pub mod init;
pub mod input;
pub mod schema;
pub mod templates;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use input::PrInput;
