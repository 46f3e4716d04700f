//! Domain layer - Classification, aggregation and journal models

pub mod affirmation;
pub mod classifier;
pub mod composer;
pub mod entry;
pub mod flows;
pub mod journal;
pub mod labels;
pub mod milestones;
pub mod sentiment;
pub mod summary;

pub use composer::{ComposeMode, Composition};
pub use entry::JournalEntry;
pub use flows::{FlowKind, FlowStep, GuidedFlow};
pub use journal::Journal;
pub use labels::{Label, Mood, Theme, Tone};
pub use milestones::{MilestoneThresholds, ProgressMilestone};
pub use summary::SummaryEngine;
