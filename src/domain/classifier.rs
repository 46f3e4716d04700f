//! Tone and theme inference
//!
//! Both classifiers are ordered keyword cascades: the first rule whose
//! keyword list hits the lower-cased text decides the label. Keywords match
//! as substrings, so "reflect" also fires on "reflection". Tone falls back to
//! the sentiment score when no rule matches; theme falls back to
//! `Theme::Unspecified`.

use crate::domain::sentiment::compound_score;
use crate::domain::{Theme, Tone};

/// Compound score below which unmatched text reads as `Gentle`
pub const NEGATIVE_CUTOFF: f64 = -0.3;
/// Compound score above which unmatched text reads as `Empowering`
pub const POSITIVE_CUTOFF: f64 = 0.3;

/// One step of a keyword cascade
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<L: 'static> {
    pub label: L,
    pub keywords: &'static [&'static str],
}

impl<L: Copy> KeywordRule<L> {
    pub const fn new(label: L, keywords: &'static [&'static str]) -> Self {
        KeywordRule { label, keywords }
    }

    /// True when any keyword occurs in the already lower-cased text
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Evaluate `rules` in order and return the first matching label.
pub fn first_match<L: Copy>(rules: &[KeywordRule<L>], text: &str) -> Option<L> {
    let lowered = text.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.label)
}

pub const TONE_RULES: &[KeywordRule<Tone>] = &[
    KeywordRule::new(
        Tone::Gentle,
        &[
            "lost",
            "sad",
            "heavy",
            "tired",
            "lonely",
            "afraid",
            "uncertain",
            "depressed",
            "hopeless",
            "anxious",
            "overwhelmed",
            "stressed",
            "confused",
            "disappointed",
            "hurt",
            "frustrated",
            "spiritual",
            "reflective",
            "reflect",
            "reflecting",
            "reflection",
            "introspection",
            "introspective",
            "faith",
            "spirituality",
            "soul",
            "soulful",
            "soul-searching",
        ],
    ),
    KeywordRule::new(
        Tone::Empowering,
        &["change", "breakthrough", "ready", "strong", "bold", "shift"],
    ),
    KeywordRule::new(
        Tone::Philosophical,
        &["meaning", "purpose", "identity", "truth", "values"],
    ),
];

pub const THEME_RULES: &[KeywordRule<Theme>] = &[
    KeywordRule::new(Theme::Forgiveness, &["forgive", "regret", "sorry", "apologize"]),
    KeywordRule::new(Theme::Growth, &["grow", "evolve", "transform", "change"]),
    KeywordRule::new(
        Theme::Resilience,
        &[
            "strong",
            "bounce back",
            "bounced back",
            "cope",
            "coping",
            "recover",
            "resilient",
        ],
    ),
    KeywordRule::new(Theme::Courage, &["fear", "brave", "face", "confront"]),
    KeywordRule::new(
        Theme::Spirituality,
        &[
            "pray", "meditate", "reflect", "faith", "spiritual", "divine", "grace", "sacred",
        ],
    ),
    KeywordRule::new(
        Theme::Healing,
        &["heal", "healing", "recover", "release", "let go", "grieve"],
    ),
    KeywordRule::new(
        Theme::Identity,
        &["purpose", "meaning", "who i am", "identity", "truth", "values"],
    ),
];

/// Map a compound sentiment score onto a tone
pub fn tone_from_score(score: f64) -> Tone {
    if score < NEGATIVE_CUTOFF {
        Tone::Gentle
    } else if score > POSITIVE_CUTOFF {
        Tone::Empowering
    } else {
        Tone::Neutral
    }
}

/// Infer the emotional register of `text`
pub fn detect_tone(text: &str) -> Tone {
    first_match(TONE_RULES, text).unwrap_or_else(|| tone_from_score(compound_score(text)))
}

/// Infer the subject matter of `text`
pub fn infer_theme(text: &str) -> Theme {
    first_match(THEME_RULES, text).unwrap_or(Theme::Unspecified)
}
