//! Journey report use case

use crate::domain::milestones::{
    detect_progress_milestones, detect_reflection_milestones, progress_caption, theme_depth,
};
use crate::domain::affirmation::affirmation;
use crate::domain::flows::weekly_chain_prompts;
use crate::domain::summary::{recent_themes, tones_for_theme};
use crate::domain::{
    JournalEntry, MilestoneThresholds, ProgressMilestone, SummaryEngine, Theme, Tone,
};
use chrono::NaiveDateTime;

/// Days looked back over when chaining weekly reflections
pub const WEEKLY_WINDOW_DAYS: i64 = 7;

/// Everything the summary views show about a journal
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyReport {
    pub total: usize,
    pub summary: String,
    pub advice: &'static str,
    pub timeline: String,
    pub reflection_milestones: Vec<String>,
    pub progress: Vec<ProgressMilestone>,
    pub progress_caption: Option<String>,
    pub theme_depth: Option<String>,
}

impl JourneyReport {
    pub fn build(entries: &[JournalEntry], thresholds: MilestoneThresholds) -> Self {
        let engine = SummaryEngine::new(entries);
        let progress = detect_progress_milestones(entries);
        let caption = if progress.is_empty() {
            None
        } else {
            Some(progress_caption(entries))
        };

        JourneyReport {
            total: engine.total(),
            summary: engine.generate_summary(),
            advice: engine.generate_advice(),
            timeline: engine.timeline(),
            reflection_milestones: detect_reflection_milestones(entries, thresholds),
            progress,
            progress_caption: caption,
            theme_depth: theme_depth(entries),
        }
    }
}

/// Continuation of the week's dominant theme
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyChain {
    pub theme: Theme,
    /// Entries with this theme across the whole journal
    pub count: usize,
    pub affirmation: &'static str,
    pub prompts: [String; 3],
    pub tones: Vec<Tone>,
}

impl WeeklyChain {
    /// `None` when nothing was written in the last week
    pub fn build(entries: &[JournalEntry], now: NaiveDateTime) -> Option<Self> {
        let theme = *recent_themes(entries, now, WEEKLY_WINDOW_DAYS).first()?;
        Some(WeeklyChain {
            theme,
            count: entries.iter().filter(|e| e.theme == theme).count(),
            affirmation: affirmation(Tone::Gentle),
            prompts: weekly_chain_prompts(theme),
            tones: tones_for_theme(entries, theme),
        })
    }
}
