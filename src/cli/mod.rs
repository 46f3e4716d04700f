//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod repl;

pub use commands::{Cli, Commands};
pub use repl::{run_session, SessionCommand};
