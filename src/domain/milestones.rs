//! Milestone detection
//!
//! Two independent detectors live here. `detect_reflection_milestones`
//! reports per-label frequency thresholds; `detect_progress_milestones`
//! raises coarse journaling badges. They use different criteria and are
//! kept apart on purpose.

use crate::domain::summary::Tally;
use crate::domain::{JournalEntry, Label};
use std::fmt;

/// Default number of entries a theme needs to become a milestone
pub const THEME_THRESHOLD: usize = 5;
/// Default number of entries a tone needs to become a milestone
pub const TONE_THRESHOLD: usize = 7;

/// Entries needed for `ProgressMilestone::FirstReflection`
pub const FIRST_REFLECTION_MIN: usize = 1;
/// Distinct tones needed for `ProgressMilestone::ToneShift`
pub const TONE_SHIFT_MIN_DISTINCT: usize = 2;
/// Entries one theme needs for `ProgressMilestone::ThemeCluster`
pub const THEME_CLUSTER_MIN: usize = 3;
/// Entries needed for `ProgressMilestone::ExportReady`
pub const EXPORT_READY_MIN: usize = 10;

/// Thresholds for the frequency detector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestoneThresholds {
    pub theme: usize,
    pub tone: usize,
}

impl Default for MilestoneThresholds {
    fn default() -> Self {
        MilestoneThresholds {
            theme: THEME_THRESHOLD,
            tone: TONE_THRESHOLD,
        }
    }
}

/// Frequency milestones: every theme at or above `thresholds.theme`, then
/// every tone at or above `thresholds.tone`, each group in first-seen order.
pub fn detect_reflection_milestones(
    entries: &[JournalEntry],
    thresholds: MilestoneThresholds,
) -> Vec<String> {
    let themes = Tally::from_labels(entries.iter().map(|e| e.theme));
    let tones = Tally::from_labels(entries.iter().map(|e| e.tone));

    let theme_milestones = themes
        .iter()
        .filter(|(_, count)| *count >= thresholds.theme)
        .map(|(theme, count)| format!("Theme {} reached in {} reflections", theme, count));

    let tone_milestones = tones
        .iter()
        .filter(|(_, count)| *count >= thresholds.tone)
        .map(|(tone, count)| format!("Tone {} appears {} times", tone, count));

    theme_milestones.chain(tone_milestones).collect()
}

/// Coarse journaling badges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMilestone {
    FirstReflection,
    ToneShift,
    ThemeCluster,
    ExportReady,
}

impl ProgressMilestone {
    pub fn label(&self) -> &'static str {
        match self {
            ProgressMilestone::FirstReflection => "First Reflection",
            ProgressMilestone::ToneShift => "Tone Shift",
            ProgressMilestone::ThemeCluster => "Theme Cluster",
            ProgressMilestone::ExportReady => "Export Ready",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ProgressMilestone::FirstReflection => "📝",
            ProgressMilestone::ToneShift => "🎭",
            ProgressMilestone::ThemeCluster => "🌿",
            ProgressMilestone::ExportReady => "📦",
        }
    }
}

impl fmt::Display for ProgressMilestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Badges earned by the journal, in fixed order
pub fn detect_progress_milestones(entries: &[JournalEntry]) -> Vec<ProgressMilestone> {
    let mut milestones = Vec::new();
    if entries.is_empty() {
        return milestones;
    }

    if entries.len() >= FIRST_REFLECTION_MIN {
        milestones.push(ProgressMilestone::FirstReflection);
    }

    let tones = Tally::from_labels(entries.iter().map(|e| e.tone));
    if tones.distinct() >= TONE_SHIFT_MIN_DISTINCT {
        milestones.push(ProgressMilestone::ToneShift);
    }

    let themes = Tally::from_labels(entries.iter().map(|e| e.theme));
    if themes.iter().any(|(_, count)| count >= THEME_CLUSTER_MIN) {
        milestones.push(ProgressMilestone::ThemeCluster);
    }

    if entries.len() >= EXPORT_READY_MIN {
        milestones.push(ProgressMilestone::ExportReady);
    }

    milestones
}

/// Short line describing what triggered the badges
pub fn progress_caption(entries: &[JournalEntry]) -> String {
    let tones = Tally::from_labels(entries.iter().map(|e| e.tone));
    format!(
        "Milestone triggered by {} reflections across {} tones.",
        entries.len(),
        tones.distinct()
    )
}

/// Most explored theme, with icon, for display under the badges
pub fn theme_depth(entries: &[JournalEntry]) -> Option<String> {
    let themes = Tally::from_labels(entries.iter().map(|e| e.theme));
    let top = themes.top()?;
    Some(format!(
        "{} You've explored {} in {} reflections.",
        top.icon(),
        top,
        themes.count(top)
    ))
}
