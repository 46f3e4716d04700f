//! Category labels attached to journal entries
//!
//! Tone, theme and mood are closed sets. Parsing never fails: anything that is
//! not a known label resolves to the `Unspecified` sentinel so that icon and
//! template lookups always land on a real variant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shared behaviour of the closed label sets.
pub trait Label: Copy + Eq + std::hash::Hash + fmt::Display + 'static {
    /// Every variant, `Unspecified` last.
    const ALL: &'static [Self];

    /// Sentinel used for unknown or missing values.
    const UNSPECIFIED: Self;

    /// Display name (e.g. "Gentle")
    fn label(&self) -> &'static str;

    /// Emoji shown next to the label
    fn icon(&self) -> &'static str;

    /// Resolve a label case-insensitively, falling back to `UNSPECIFIED`.
    fn from_label(value: &str) -> Self {
        let wanted = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.label().eq_ignore_ascii_case(wanted))
            .unwrap_or(Self::UNSPECIFIED)
    }

    /// Label prefixed with its icon, as used in listings
    fn decorated(&self) -> String {
        format!("{} {}", self.icon(), self.label())
    }
}

/// Emotional register of a reflection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tone {
    Gentle,
    Empowering,
    Philosophical,
    Neutral,
    Reflective,
    Still,
    #[default]
    Unspecified,
}

impl Label for Tone {
    const ALL: &'static [Self] = &[
        Tone::Gentle,
        Tone::Empowering,
        Tone::Philosophical,
        Tone::Neutral,
        Tone::Reflective,
        Tone::Still,
        Tone::Unspecified,
    ];
    const UNSPECIFIED: Self = Tone::Unspecified;

    fn label(&self) -> &'static str {
        match self {
            Tone::Gentle => "Gentle",
            Tone::Empowering => "Empowering",
            Tone::Philosophical => "Philosophical",
            Tone::Neutral => "Neutral",
            Tone::Reflective => "Reflective",
            Tone::Still => "Still",
            Tone::Unspecified => "Unspecified",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Tone::Gentle => "🍃",
            Tone::Empowering => "⚡",
            Tone::Philosophical => "🧠",
            Tone::Neutral => "🌿",
            Tone::Reflective => "🪞",
            Tone::Still => "🕯️",
            Tone::Unspecified => "❔",
        }
    }
}

/// Subject matter of a reflection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Theme {
    Growth,
    Forgiveness,
    Resilience,
    Courage,
    Spirituality,
    Healing,
    Identity,
    Gratitude,
    Release,
    Rest,
    Reflection,
    Connection,
    Purpose,
    Balance,
    #[default]
    Unspecified,
}

impl Label for Theme {
    const ALL: &'static [Self] = &[
        Theme::Growth,
        Theme::Forgiveness,
        Theme::Resilience,
        Theme::Courage,
        Theme::Spirituality,
        Theme::Healing,
        Theme::Identity,
        Theme::Gratitude,
        Theme::Release,
        Theme::Rest,
        Theme::Reflection,
        Theme::Connection,
        Theme::Purpose,
        Theme::Balance,
        Theme::Unspecified,
    ];
    const UNSPECIFIED: Self = Theme::Unspecified;

    fn label(&self) -> &'static str {
        match self {
            Theme::Growth => "Growth",
            Theme::Forgiveness => "Forgiveness",
            Theme::Resilience => "Resilience",
            Theme::Courage => "Courage",
            Theme::Spirituality => "Spirituality",
            Theme::Healing => "Healing",
            Theme::Identity => "Identity",
            Theme::Gratitude => "Gratitude",
            Theme::Release => "Release",
            Theme::Rest => "Rest",
            Theme::Reflection => "Reflection",
            Theme::Connection => "Connection",
            Theme::Purpose => "Purpose",
            Theme::Balance => "Balance",
            Theme::Unspecified => "Unspecified",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Theme::Growth => "🌱",
            Theme::Forgiveness => "🕊️",
            Theme::Resilience => "🛡️",
            Theme::Courage => "🦁",
            Theme::Spirituality => "✨",
            Theme::Healing => "💗",
            Theme::Identity => "🧬",
            Theme::Gratitude => "🙏",
            Theme::Release => "🌬️",
            Theme::Rest => "😴",
            Theme::Reflection => "🪞",
            Theme::Connection => "🤝",
            Theme::Purpose => "🎯",
            Theme::Balance => "⚖️",
            Theme::Unspecified => "❔",
        }
    }
}

/// User-selected mood, independent of tone and theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mood {
    Calm,
    Anxious,
    Grateful,
    Peaceful,
    Joyful,
    Sad,
    Angry,
    Confused,
    Hopeful,
    Reflective,
    Tender,
    Resilient,
    Centered,
    Neutral,
    #[default]
    Unspecified,
}

impl Label for Mood {
    const ALL: &'static [Self] = &[
        Mood::Calm,
        Mood::Anxious,
        Mood::Grateful,
        Mood::Peaceful,
        Mood::Joyful,
        Mood::Sad,
        Mood::Angry,
        Mood::Confused,
        Mood::Hopeful,
        Mood::Reflective,
        Mood::Tender,
        Mood::Resilient,
        Mood::Centered,
        Mood::Neutral,
        Mood::Unspecified,
    ];
    const UNSPECIFIED: Self = Mood::Unspecified;

    fn label(&self) -> &'static str {
        match self {
            Mood::Calm => "Calm",
            Mood::Anxious => "Anxious",
            Mood::Grateful => "Grateful",
            Mood::Peaceful => "Peaceful",
            Mood::Joyful => "Joyful",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
            Mood::Confused => "Confused",
            Mood::Hopeful => "Hopeful",
            Mood::Reflective => "Reflective",
            Mood::Tender => "Tender",
            Mood::Resilient => "Resilient",
            Mood::Centered => "Centered",
            Mood::Neutral => "Neutral",
            Mood::Unspecified => "Unspecified",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Mood::Calm => "🌊",
            Mood::Anxious => "😰",
            Mood::Grateful => "🙏",
            Mood::Peaceful => "🕊️",
            Mood::Joyful => "😊",
            Mood::Sad => "😢",
            Mood::Angry => "🔥",
            Mood::Confused => "❓",
            Mood::Hopeful => "🌅",
            Mood::Reflective => "🪞",
            Mood::Tender => "💗",
            Mood::Resilient => "🛡️",
            Mood::Centered => "🧘",
            Mood::Neutral => "🌿",
            Mood::Unspecified => "❔",
        }
    }
}

macro_rules! label_conversions {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }

            impl FromStr for $ty {
                type Err = std::convert::Infallible;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Ok(<$ty as Label>::from_label(s))
                }
            }

            impl From<String> for $ty {
                fn from(value: String) -> Self {
                    <$ty as Label>::from_label(&value)
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.label().to_string()
                }
            }
        )*
    };
}

label_conversions!(Tone, Theme, Mood);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_is_case_insensitive() {
        assert_eq!(Tone::from_label("gentle"), Tone::Gentle);
        assert_eq!(Theme::from_label("  RESILIENCE "), Theme::Resilience);
        assert_eq!(Mood::from_label("Calm"), Mood::Calm);
    }

    #[test]
    fn test_unknown_labels_fall_back_to_unspecified() {
        assert_eq!(Tone::from_label("Furious"), Tone::Unspecified);
        assert_eq!(Theme::from_label(""), Theme::Unspecified);
        assert_eq!(Mood::from_label("Default"), Mood::Unspecified);
        assert_eq!("whatever".parse::<Tone>().unwrap(), Tone::Unspecified);
    }

    #[test]
    fn test_unspecified_is_last() {
        assert_eq!(Tone::ALL.last(), Some(&Tone::Unspecified));
        assert_eq!(Theme::ALL.last(), Some(&Theme::Unspecified));
        assert_eq!(Mood::ALL.last(), Some(&Mood::Unspecified));
    }

    #[test]
    fn test_label_round_trips_through_display() {
        for tone in Tone::ALL {
            assert_eq!(Tone::from_label(&tone.to_string()), *tone);
        }
        for theme in Theme::ALL {
            assert_eq!(Theme::from_label(&theme.to_string()), *theme);
        }
        for mood in Mood::ALL {
            assert_eq!(Mood::from_label(&mood.to_string()), *mood);
        }
    }

    #[test]
    fn test_every_label_has_an_icon() {
        assert!(Tone::ALL.iter().all(|t| !t.icon().is_empty()));
        assert!(Theme::ALL.iter().all(|t| !t.icon().is_empty()));
        assert!(Mood::ALL.iter().all(|m| !m.icon().is_empty()));
    }

    #[test]
    fn test_decorated() {
        assert_eq!(Theme::Growth.decorated(), "🌱 Growth");
    }
}
