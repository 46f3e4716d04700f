//! Error types for innercompass

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the innercompass application
#[derive(Debug, Error)]
pub enum CompassError {
    #[error("Journal file not found: {0}")]
    JournalNotFound(PathBuf),

    #[error("Invalid journal file {path}: {message}")]
    InvalidJournal { path: PathBuf, message: String },

    #[error("Unknown session command: {0}")]
    UnknownCommand(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl CompassError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CompassError::JournalNotFound(_) => 2,
            CompassError::InvalidJournal { .. } => 3,
            CompassError::InvalidArgument(_) | CompassError::UnknownCommand(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            CompassError::JournalNotFound(path) => {
                format!(
                    "Journal file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path passed to --journal\n\
                    • Create one with 'innercompass session' and the 'export toml' command",
                    path.display()
                )
            }
            CompassError::InvalidJournal { path, message } => {
                format!(
                    "Invalid journal file {}: {}\n\n\
                    A journal file is TOML with one [[entry]] table per reflection:\n\
                    [[entry]]\n\
                    text = \"Walked by the river\"\n\
                    tone = \"Gentle\"\n\
                    theme = \"Healing\"\n\
                    mood = \"Calm\"\n\
                    timestamp = \"2025-01-17T08:30:00\"",
                    path.display(),
                    message
                )
            }
            CompassError::UnknownCommand(command) => {
                format!(
                    "Unknown session command: '{}'\n\n\
                    Type 'help' to list the available commands.",
                    command
                )
            }
            CompassError::Config(msg) => {
                if msg.contains("Invalid mode") {
                    format!(
                        "{}\n\n\
                        Valid modes: conversational, guided\n\
                        Example: compose_mode = \"guided\"",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using CompassError
pub type Result<T> = std::result::Result<T, CompassError>;
