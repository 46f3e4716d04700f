//! innercompass - Reflection journaling companion
//!
//! Classifies free-text reflections into a tone and a theme, composes
//! templated replies, and aggregates an in-memory journal into summaries,
//! frequency tables and milestones.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::CompassError;
