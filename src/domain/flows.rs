//! Multi-step reflection flows
//!
//! A flow is a named family of prompt sequences (guided, daily, evening,
//! weekly), each keyed by theme. `GuidedFlow` walks one sequence, collects
//! the answers and yields a single journal entry when the last prompt has
//! been answered.

use crate::domain::composer::GENERIC_PROMPT;
use crate::domain::entry::{SOURCE_GUIDED, TYPE_GUIDED_JOURNEY};
use crate::domain::{JournalEntry, Label, Mood, Theme, Tone};
use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Families of prompt sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FlowKind {
    #[default]
    Guided,
    /// Morning intentions
    Daily,
    /// Evening wind-down
    Evening,
    /// Weekly review
    Weekly,
}

impl FlowKind {
    pub const ALL: [FlowKind; 4] = [
        FlowKind::Guided,
        FlowKind::Daily,
        FlowKind::Evening,
        FlowKind::Weekly,
    ];

    /// Pick the flow for the hour of `now`
    pub fn for_time(now: NaiveDateTime) -> Self {
        match now.hour() {
            5..=11 => FlowKind::Daily,
            12..=17 => FlowKind::Guided,
            18..=21 => FlowKind::Evening,
            _ => FlowKind::Weekly,
        }
    }

    /// Source label recorded on entries written by this flow
    pub fn source(&self) -> &'static str {
        match self {
            FlowKind::Guided => SOURCE_GUIDED,
            FlowKind::Daily => "Daily",
            FlowKind::Evening => "Evening",
            FlowKind::Weekly => "Weekly",
        }
    }

    /// Reflection type recorded on entries written by this flow
    pub fn reflection_type(&self) -> &'static str {
        match self {
            FlowKind::Guided => TYPE_GUIDED_JOURNEY,
            FlowKind::Daily => "Daily Intention",
            FlowKind::Evening => "Evening Reflection",
            FlowKind::Weekly => "Weekly Summary",
        }
    }

    fn sequences(&self) -> &'static [(Theme, [&'static str; 3])] {
        match self {
            FlowKind::Guided => GUIDED_SEQUENCES,
            FlowKind::Daily => DAILY_SEQUENCES,
            FlowKind::Evening => EVENING_SEQUENCES,
            FlowKind::Weekly => WEEKLY_SEQUENCES,
        }
    }

    /// Themes offered by this flow, sorted by name
    pub fn themes(&self) -> Vec<Theme> {
        let mut themes: Vec<Theme> = self.sequences().iter().map(|(theme, _)| *theme).collect();
        themes.sort_by_key(|theme| theme.label());
        themes
    }

    /// Prompt sequence for `theme`; the generic prompt alone when the flow
    /// has no sequence for it.
    pub fn prompts(&self, theme: Theme) -> Vec<&'static str> {
        self.sequences()
            .iter()
            .find(|(candidate, _)| *candidate == theme)
            .map(|(_, prompts)| prompts.to_vec())
            .unwrap_or_else(|| vec![GENERIC_PROMPT])
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlowKind::Guided => "guided",
            FlowKind::Daily => "daily",
            FlowKind::Evening => "evening",
            FlowKind::Weekly => "weekly",
        };
        f.write_str(name)
    }
}

impl FromStr for FlowKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "guided" => Ok(FlowKind::Guided),
            "daily" => Ok(FlowKind::Daily),
            "evening" => Ok(FlowKind::Evening),
            "weekly" => Ok(FlowKind::Weekly),
            _ => Err(format!(
                "Invalid flow: '{}'. Valid flows are: guided, daily, evening, weekly",
                s
            )),
        }
    }
}

const GUIDED_SEQUENCES: &[(Theme, [&str; 3])] = &[
    (
        Theme::Forgiveness,
        [
            "Is there someone you're ready to forgive today?",
            "What emotions arise when you think about that person or situation?",
            "How might forgiveness free you emotionally?",
        ],
    ),
    (
        Theme::Resilience,
        [
            "What challenge are you facing right now?",
            "What inner strength are you drawing on?",
            "How can you support yourself through this moment?",
        ],
    ),
    (
        Theme::Healing,
        [
            "What part of you feels tender today?",
            "Is there something you're ready to release?",
            "What does emotional healing look like for you right now?",
        ],
    ),
    (
        Theme::Identity,
        [
            "What part of your identity feels most alive today?",
            "Are there roles or labels you're questioning?",
            "How do you define yourself beyond external expectations?",
        ],
    ),
];

const DAILY_SEQUENCES: &[(Theme, [&str; 3])] = &[
    (
        Theme::Spirituality,
        [
            "What truth feels alive in you this morning?",
            "Is there a ritual or prayer you'd like to begin your day with?",
            "How does this connect to your deeper sense of purpose?",
        ],
    ),
    (
        Theme::Growth,
        [
            "What intention would you like to carry today?",
            "Is there a small step you feel ready to take?",
            "What might support you in staying committed to that step?",
        ],
    ),
    (
        Theme::Resilience,
        [
            "What strength are you drawing on today?",
            "How will you care for yourself if challenges arise?",
            "What does resilience look like in your daily rhythm?",
        ],
    ),
    (
        Theme::Healing,
        [
            "What does emotional healing look like for you today?",
            "Is there something you're ready to release?",
            "What gentle action could support your healing today?",
        ],
    ),
];

const EVENING_SEQUENCES: &[(Theme, [&str; 3])] = &[
    (
        Theme::Gratitude,
        [
            "What are three things you're grateful for today?",
            "Was there a moment that brought you unexpected joy?",
            "How might you carry this gratitude into tomorrow?",
        ],
    ),
    (
        Theme::Release,
        [
            "Is there anything you'd like to let go of from today?",
            "What emotions surfaced that you didn't fully process?",
            "How can you offer yourself closure tonight?",
        ],
    ),
    (
        Theme::Rest,
        [
            "What does rest mean to you right now?",
            "Is there a ritual that helps you transition into sleep?",
            "What intention would you like to set for your dreams?",
        ],
    ),
    (
        Theme::Reflection,
        [
            "What did today teach you?",
            "Were there any moments that felt especially meaningful?",
            "How has this day shaped your emotional landscape?",
        ],
    ),
];

const WEEKLY_SEQUENCES: &[(Theme, [&str; 3])] = &[
    (
        Theme::Growth,
        [
            "What personal growth did you notice this week?",
            "Was there a challenge that helped you evolve?",
            "What intention will guide your growth next week?",
        ],
    ),
    (
        Theme::Connection,
        [
            "Who did you feel most connected to this week?",
            "Was there a moment of emotional resonance with someone?",
            "How might you deepen those connections moving forward?",
        ],
    ),
    (
        Theme::Purpose,
        [
            "Did your actions this week align with your deeper purpose?",
            "What felt meaningful or fulfilling?",
            "Is there a purpose you'd like to recommit to next week?",
        ],
    ),
    (
        Theme::Balance,
        [
            "How well did you balance work, rest, and reflection?",
            "Was there a moment you felt truly centered?",
            "What adjustments could help you feel more balanced next week?",
        ],
    ),
];

/// Prompts that continue the week's dominant theme
pub fn weekly_chain_prompts(theme: Theme) -> [String; 3] {
    let name = theme.label().to_lowercase();
    [
        format!("What has {} meant to you this week?", name),
        format!("Is there a moment that deepened your sense of {}?", name),
        format!("What intention will guide your {} next week?", name),
    ]
}

/// What a flow step produced
#[derive(Debug, Clone, PartialEq)]
pub enum FlowStep {
    /// Another prompt to answer; `step` is 1-based
    Prompt {
        step: usize,
        total: usize,
        prompt: &'static str,
    },
    /// All prompts answered
    Complete(JournalEntry),
}

/// In-progress walk through one prompt sequence
#[derive(Debug, Clone)]
pub struct GuidedFlow {
    kind: FlowKind,
    theme: Theme,
    tone: Tone,
    mood: Mood,
    prompts: Vec<&'static str>,
    answers: Vec<String>,
}

impl GuidedFlow {
    pub fn start(kind: FlowKind, theme: Theme, tone: Tone, mood: Mood) -> Self {
        GuidedFlow {
            kind,
            theme,
            tone,
            mood,
            prompts: kind.prompts(theme),
            answers: Vec::new(),
        }
    }

    pub fn kind(&self) -> FlowKind {
        self.kind
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// The prompt currently awaiting an answer
    pub fn current(&self) -> FlowStep {
        FlowStep::Prompt {
            step: self.answers.len() + 1,
            total: self.prompts.len(),
            prompt: self.prompts[self.answers.len()],
        }
    }

    /// Record an answer. Blank answers are ignored and the same prompt is
    /// returned again.
    pub fn answer(&mut self, text: &str, now: NaiveDateTime) -> FlowStep {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            self.answers.push(trimmed.to_string());
        }

        if self.answers.len() < self.prompts.len() {
            return self.current();
        }

        let entry = JournalEntry::new(self.answers.join("\n\n"), self.tone, self.theme, self.mood)
            .with_provenance(self.kind.source(), self.kind.reflection_type())
            .at(now);
        tracing::info!(flow = %self.kind, theme = %self.theme, "reflection flow complete");
        self.answers.clear();
        FlowStep::Complete(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at_hour(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_flow_for_time() {
        assert_eq!(FlowKind::for_time(at_hour(5)), FlowKind::Daily);
        assert_eq!(FlowKind::for_time(at_hour(11)), FlowKind::Daily);
        assert_eq!(FlowKind::for_time(at_hour(12)), FlowKind::Guided);
        assert_eq!(FlowKind::for_time(at_hour(18)), FlowKind::Evening);
        assert_eq!(FlowKind::for_time(at_hour(22)), FlowKind::Weekly);
        assert_eq!(FlowKind::for_time(at_hour(3)), FlowKind::Weekly);
    }

    #[test]
    fn test_themes_are_sorted() {
        assert_eq!(
            FlowKind::Guided.themes(),
            vec![
                Theme::Forgiveness,
                Theme::Healing,
                Theme::Identity,
                Theme::Resilience
            ]
        );
        assert_eq!(
            FlowKind::Evening.themes(),
            vec![Theme::Gratitude, Theme::Reflection, Theme::Release, Theme::Rest]
        );
    }

    #[test]
    fn test_missing_sequence_uses_generic_prompt() {
        assert_eq!(FlowKind::Guided.prompts(Theme::Gratitude), vec![GENERIC_PROMPT]);
        assert_eq!(FlowKind::Weekly.prompts(Theme::Balance).len(), 3);
    }

    #[test]
    fn test_flow_collects_answers_into_one_entry() {
        let mut flow = GuidedFlow::start(
            FlowKind::Guided,
            Theme::Healing,
            Tone::Gentle,
            Mood::Tender,
        );
        assert!(matches!(flow.current(), FlowStep::Prompt { step: 1, total: 3, .. }));

        let now = at_hour(20);
        assert!(matches!(flow.answer("my shoulders", now), FlowStep::Prompt { step: 2, .. }));
        // Blank answers do not advance
        assert!(matches!(flow.answer("   ", now), FlowStep::Prompt { step: 2, .. }));
        assert!(matches!(flow.answer("old anger", now), FlowStep::Prompt { step: 3, .. }));

        match flow.answer("more sleep", now) {
            FlowStep::Complete(entry) => {
                assert_eq!(entry.text, "my shoulders\n\nold anger\n\nmore sleep");
                assert_eq!(entry.theme, Theme::Healing);
                assert_eq!(entry.tone, Tone::Gentle);
                assert_eq!(entry.mood, Mood::Tender);
                assert_eq!(entry.source, "Guided");
                assert_eq!(entry.reflection_type, "Guided Journey");
                assert_eq!(entry.timestamp, now);
            }
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn test_single_prompt_flow_completes_after_one_answer() {
        let mut flow = GuidedFlow::start(
            FlowKind::Evening,
            Theme::Courage,
            Tone::Neutral,
            Mood::Unspecified,
        );
        let step = flow.answer("I spoke up", at_hour(19));
        assert!(matches!(step, FlowStep::Complete(ref e) if e.source == "Evening"));
    }

    #[test]
    fn test_weekly_chain_prompts() {
        let prompts = weekly_chain_prompts(Theme::Resilience);
        assert_eq!(prompts[0], "What has resilience meant to you this week?");
        assert!(prompts[2].contains("your resilience next week"));
    }
}
