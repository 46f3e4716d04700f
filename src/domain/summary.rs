//! Journal aggregation: frequency counts, summary and advice
//!
//! Counts keep first-seen order, so ties between equally frequent labels go
//! to whichever appeared first in the journal.

use crate::domain::{JournalEntry, Label, Mood, Theme, Tone};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Text returned by `timeline` for an empty journal
pub const NO_ENTRIES: &str = "No entries yet.";

const DEFAULT_ADVICE: &str = "Embrace the journey of self-discovery with an open heart.";

/// Advice for the dominant tone; tones without advice get the default
pub fn tone_advice(tone: Tone) -> &'static str {
    match tone {
        Tone::Gentle => "Consider embracing moments of stillness and self-compassion.",
        Tone::Empowering => "Channel your inner strength to overcome challenges.",
        _ => DEFAULT_ADVICE,
    }
}

/// Occurrence counts in first-seen order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally<L: Label> {
    counts: IndexMap<L, usize>,
}

impl<L: Label> Default for Tally<L> {
    fn default() -> Self {
        Tally {
            counts: IndexMap::new(),
        }
    }
}

impl<L: Label> Tally<L> {
    pub fn from_labels(labels: impl IntoIterator<Item = L>) -> Self {
        let mut tally = Tally::default();
        for label in labels {
            *tally.counts.entry(label).or_insert(0) += 1;
        }
        tally
    }

    pub fn count(&self, label: L) -> usize {
        self.counts.get(&label).copied().unwrap_or(0)
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Labels with their counts, in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (L, usize)> + '_ {
        self.counts.iter().map(|(label, count)| (*label, *count))
    }

    /// Most frequent label; the earliest one wins a tie
    pub fn top(&self) -> Option<L> {
        let mut best: Option<(L, usize)> = None;
        for (label, count) in self.iter() {
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((label, count));
            }
        }
        best.map(|(label, _)| label)
    }

    /// Counts sorted by descending frequency, ties kept in first-seen order
    pub fn ranked(&self) -> Vec<(L, usize)> {
        let mut ranked: Vec<(L, usize)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// Aggregates over a borrowed list of entries
#[derive(Debug, Clone)]
pub struct SummaryEngine {
    tones: Tally<Tone>,
    themes: Tally<Theme>,
    moods: Tally<Mood>,
    first: Option<NaiveDateTime>,
    last: Option<NaiveDateTime>,
    per_day: BTreeMap<NaiveDate, usize>,
    total: usize,
}

impl SummaryEngine {
    pub fn new(entries: &[JournalEntry]) -> Self {
        let mut per_day = BTreeMap::new();
        for entry in entries {
            *per_day.entry(entry.timestamp.date()).or_insert(0) += 1;
        }

        SummaryEngine {
            tones: Tally::from_labels(entries.iter().map(|e| e.tone)),
            themes: Tally::from_labels(entries.iter().map(|e| e.theme)),
            moods: Tally::from_labels(entries.iter().map(|e| e.mood)),
            first: entries.iter().map(|e| e.timestamp).min(),
            last: entries.iter().map(|e| e.timestamp).max(),
            per_day,
            total: entries.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn tones(&self) -> &Tally<Tone> {
        &self.tones
    }

    pub fn themes(&self) -> &Tally<Theme> {
        &self.themes
    }

    pub fn moods(&self) -> &Tally<Mood> {
        &self.moods
    }

    /// Number of entries per calendar day, oldest first
    pub fn entries_per_day(&self) -> &BTreeMap<NaiveDate, usize> {
        &self.per_day
    }

    pub fn top_tone(&self) -> Tone {
        self.tones.top().unwrap_or(Tone::Unspecified)
    }

    pub fn top_theme(&self) -> Theme {
        self.themes.top().unwrap_or(Theme::Unspecified)
    }

    pub fn top_mood(&self) -> Mood {
        self.moods.top().unwrap_or(Mood::Unspecified)
    }

    pub fn generate_summary(&self) -> String {
        let tone = self.top_tone();
        let theme = self.top_theme();
        let mood = self.top_mood();

        format!(
            "{} Your reflections often carry a {} tone, with themes like {} {} appearing most frequently. \
            {} You've expressed a mood of {}, suggesting a season of emotional depth.\n\n\
            🧭 You might consider exploring a guided journey on {}, \
            or reflecting on how your tone of {} has shaped your recent entries.",
            tone.icon(),
            tone,
            theme.icon(),
            theme,
            mood.icon(),
            mood,
            theme,
            tone
        )
    }

    pub fn generate_advice(&self) -> &'static str {
        tone_advice(self.top_tone())
    }

    pub fn timeline(&self) -> String {
        match (self.first, self.last) {
            (Some(first), Some(last)) => format!(
                "Entries from {} to {}",
                first.format("%Y-%m-%d"),
                last.format("%Y-%m-%d")
            ),
            _ => NO_ENTRIES.to_string(),
        }
    }
}

/// Themes of entries from the last `days` days before `now`, most frequent
/// first.
pub fn recent_themes(entries: &[JournalEntry], now: NaiveDateTime, days: i64) -> Vec<Theme> {
    let cutoff = now - Duration::days(days);
    let recent = entries
        .iter()
        .filter(|e| e.timestamp >= cutoff)
        .map(|e| e.theme);
    Tally::from_labels(recent)
        .ranked()
        .into_iter()
        .map(|(theme, _)| theme)
        .collect()
}

/// Distinct tones used with `theme`, sorted by name
pub fn tones_for_theme(entries: &[JournalEntry], theme: Theme) -> Vec<Tone> {
    let mut tones: Vec<Tone> = Tally::from_labels(
        entries
            .iter()
            .filter(|e| e.theme == theme)
            .map(|e| e.tone),
    )
    .iter()
    .map(|(tone, _)| tone)
    .collect();
    tones.sort_by_key(|tone| tone.label());
    tones
}
