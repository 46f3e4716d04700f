//! Generated reflections and short affirmations

use crate::domain::{Theme, Tone};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// How many tone/theme segment pairs a generated reflection draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReflectionLength {
    #[default]
    Short,
    Medium,
    Long,
}

impl ReflectionLength {
    pub fn multiplier(&self) -> usize {
        match self {
            ReflectionLength::Short => 1,
            ReflectionLength::Medium => 2,
            ReflectionLength::Long => 3,
        }
    }
}

impl fmt::Display for ReflectionLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReflectionLength::Short => "short",
            ReflectionLength::Medium => "medium",
            ReflectionLength::Long => "long",
        };
        f.write_str(name)
    }
}

impl FromStr for ReflectionLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" => Ok(ReflectionLength::Short),
            "medium" => Ok(ReflectionLength::Medium),
            "long" => Ok(ReflectionLength::Long),
            _ => Err(format!(
                "Invalid length: '{}'. Valid lengths are: short, medium, long",
                s
            )),
        }
    }
}

fn tone_variants(tone: Tone) -> &'static [&'static str] {
    match tone {
        Tone::Gentle => &[
            "You are allowed to feel deeply and heal slowly.",
            "Gentleness is a strength, not a weakness.",
            "Your emotions are valid, and your pace is sacred.",
        ],
        Tone::Empowering => &[
            "You have the strength to rise and reshape your path.",
            "Your courage is the foundation of your transformation.",
            "You are capable of rewriting your story.",
        ],
        Tone::Philosophical => &[
            "This moment holds meaning; let it unfold with grace.",
            "Existence is layered, each breath a quiet revelation.",
            "Time is a mirror; growth reflects inward and outward.",
        ],
        Tone::Neutral => &[
            "You are present, and that is enough.",
            "This moment simply is; there is no need to change it.",
            "Stillness is a valid state of being.",
        ],
        _ => &[],
    }
}

fn theme_variants(theme: Theme) -> &'static [&'static str] {
    match theme {
        Theme::Growth => &[
            "Each step forward is part of your evolution.",
            "Growth is quiet, steady, and deeply personal.",
            "You are becoming more of who you truly are.",
        ],
        Theme::Forgiveness => &[
            "Letting go is a gift you give yourself.",
            "Forgiveness is a bridge to inner peace.",
            "Release is not weakness; it is wisdom.",
        ],
        Theme::Resilience => &[
            "You've weathered storms; your roots run deep.",
            "Resilience is built in the quiet moments.",
            "You are still standing, and that is powerful.",
        ],
        Theme::Courage => &[
            "Bravery is choosing to show up, even when it's hard.",
            "Courage is not loud; it is persistent.",
            "You face the unknown with open eyes.",
        ],
        _ => &[],
    }
}

/// One-line affirmation for a tone
pub fn affirmation(tone: Tone) -> &'static str {
    match tone {
        Tone::Gentle => "You are allowed to feel deeply and heal slowly.",
        Tone::Empowering => "You have the strength to rise and reshape your path.",
        Tone::Philosophical => "This moment holds meaning; let it unfold with grace.",
        _ => "You are present, and that is enough.",
    }
}

/// Build a reflection from `length.multiplier()` rounds of one tone segment
/// and one theme segment. Empty and repeated segments are dropped; the
/// affirmation for `tone` stands in when nothing remains.
pub fn generate_reflection<R: Rng + ?Sized>(
    tone: Tone,
    theme: Theme,
    length: ReflectionLength,
    rng: &mut R,
) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for _ in 0..length.multiplier() {
        let picks = [
            tone_variants(tone).choose(rng).copied(),
            theme_variants(theme).choose(rng).copied(),
        ];
        for segment in picks.into_iter().flatten() {
            if !segment.is_empty() && !segments.contains(&segment) {
                segments.push(segment);
            }
        }
    }

    if segments.is_empty() {
        return affirmation(tone).to_string();
    }

    segments.join(" ")
}
