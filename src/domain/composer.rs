//! Reply composition for the chat companion

use crate::domain::classifier::{detect_tone, infer_theme};
use crate::domain::{Theme, Tone};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prompt used whenever no theme-specific prompt exists
pub const GENERIC_PROMPT: &str = "What would you like to reflect on today?";

/// How a reply is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComposeMode {
    /// Tone template plus a follow-up question
    #[default]
    Conversational,
    /// A single theme-driven prompt
    Guided,
}

impl fmt::Display for ComposeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeMode::Conversational => f.write_str("conversational"),
            ComposeMode::Guided => f.write_str("guided"),
        }
    }
}

impl FromStr for ComposeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "conversational" | "chat" => Ok(ComposeMode::Conversational),
            "guided" => Ok(ComposeMode::Guided),
            _ => Err(format!(
                "Invalid mode: '{}'. Valid modes are: conversational, guided",
                s
            )),
        }
    }
}

/// Classified input together with the reply shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub tone: Tone,
    pub theme: Theme,
    pub response: String,
}

/// Opening lines, indexed by tone. Tones without their own list use `Neutral`.
pub fn tone_templates(tone: Tone) -> &'static [&'static str] {
    match tone {
        Tone::Gentle => &[
            "That sounds tender. Would you like to explore that feeling together?",
            "I'm here with you. What's been weighing on your heart?",
            "It's okay to feel this way. Let's unpack it gently.",
        ],
        Tone::Empowering => &[
            "You're sensing a shift. What's one bold step you feel ready to take?",
            "That's a powerful realization. What strength are you drawing on right now?",
            "You've come far. What's the next move that excites you?",
        ],
        Tone::Philosophical => &[
            "That's a deep reflection. What does this moment reveal about your values?",
            "A beautiful question. What meaning do you find in this experience?",
            "Let's sit with that thought. What truth is emerging for you?",
        ],
        _ => &[
            "Tell me more. What's been on your mind?",
            "I'm listening. What's been unfolding for you lately?",
            "Let's explore this together. Where would you like to begin?",
        ],
    }
}

/// Follow-up questions keyed by tone; empty for tones without any
pub fn tone_follow_ups(tone: Tone) -> &'static [&'static str] {
    match tone {
        Tone::Gentle => &[
            "Would you like to sit with that feeling a bit longer?",
            "It's okay to pause here. What's coming up for you?",
            "Would you like to write about this feeling in your journal?",
        ],
        Tone::Empowering => &[
            "Is there a step you feel ready to take?",
            "What's one small move that feels doable today?",
            "Would you like to name the strength you're drawing on?",
        ],
        Tone::Philosophical => &[
            "What meaning do you find in this moment?",
            "Does this reflection connect to a deeper truth for you?",
            "Would you like to explore the values behind this feeling?",
        ],
        _ => &[],
    }
}

/// Follow-up questions keyed by theme; empty for themes without any
pub fn theme_follow_ups(theme: Theme) -> &'static [&'static str] {
    match theme {
        Theme::Forgiveness => &[
            "Is there someone, or yourself, you're ready to forgive?",
            "Would you like to reflect on what release might feel like?",
            "Is there a moment you'd like to let go of?",
        ],
        Theme::Resilience => &[
            "What's helped you bounce back before?",
            "Is there a strength you've leaned on in the past?",
            "Would you like to reflect on how you've grown through adversity?",
        ],
        Theme::Spirituality => &[
            "Would you like to reflect on your spiritual practice today?",
            "Is there a prayer, meditation, or ritual that brings you peace?",
            "Would you like to write about your connection to something greater?",
        ],
        Theme::Healing => &[
            "Would you like to reflect on what healing means to you?",
            "Is there something you're ready to release or let go of?",
            "Would writing about this help you process it gently?",
        ],
        Theme::Identity => &[
            "What truth is emerging for you in this moment?",
            "Would you like to explore who you're becoming?",
            "Is there a value or belief you're reconnecting with?",
        ],
        _ => &[],
    }
}

/// Single prompts used in guided mode
pub fn guided_prompts(theme: Theme) -> &'static [&'static str] {
    match theme {
        Theme::Forgiveness => &[
            "Is there someone you're ready to forgive?",
            "What would compassion toward yourself look like today?",
        ],
        Theme::Resilience => &[
            "What's helped you bounce back before?",
            "Is there a strength you've rediscovered recently?",
        ],
        Theme::Spirituality => &[
            "Would you like to reflect on your spiritual practice?",
            "Is there a prayer or ritual that brings you peace?",
        ],
        Theme::Healing => &[
            "What does healing mean to you right now?",
            "Is there something you're ready to release?",
        ],
        Theme::Identity => &["Who are you becoming?", "What truth feels alive in you today?"],
        _ => &[],
    }
}

/// Pick a follow-up: the tone list wins, the theme list is only consulted
/// when the tone has none.
pub fn follow_up<R: Rng + ?Sized>(tone: Tone, theme: Theme, rng: &mut R) -> Option<&'static str> {
    let by_tone = tone_follow_ups(tone);
    let pool = if by_tone.is_empty() {
        theme_follow_ups(theme)
    } else {
        by_tone
    };
    pool.choose(rng).copied()
}

/// Guided prompt for `theme`, or the generic prompt
pub fn guided_prompt<R: Rng + ?Sized>(theme: Theme, rng: &mut R) -> &'static str {
    guided_prompts(theme)
        .choose(rng)
        .copied()
        .unwrap_or(GENERIC_PROMPT)
}

/// Classify `text` and build the reply for `mode`.
pub fn compose<R: Rng + ?Sized>(text: &str, mode: ComposeMode, rng: &mut R) -> Composition {
    let tone = detect_tone(text);
    let theme = infer_theme(text);

    let response = match mode {
        ComposeMode::Guided => guided_prompt(theme, rng).to_string(),
        ComposeMode::Conversational => {
            let opening = tone_templates(tone)
                .choose(rng)
                .copied()
                .unwrap_or(GENERIC_PROMPT);
            match follow_up(tone, theme, rng) {
                Some(line) => format!("{}\n\n{}", opening, line),
                None => opening.to_string(),
            }
        }
    };

    tracing::debug!(%tone, %theme, %mode, "composed reply");

    Composition {
        tone,
        theme,
        response,
    }
}
