//! Infrastructure layer - Configuration, journal files and logging

pub mod config;
pub mod logging;
pub mod repository;

pub use config::Config;
pub use repository::{EntrySource, JournalFile};
