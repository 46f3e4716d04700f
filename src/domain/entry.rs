//! Journal entry record

use crate::domain::{Mood, Theme, Tone};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Source recorded for entries produced by the chat companion
pub const SOURCE_CHAT: &str = "Chat";
/// Source recorded for entries produced by a guided flow
pub const SOURCE_GUIDED: &str = "Guided";
/// Source recorded for entries typed in directly
pub const SOURCE_REFLECTION: &str = "Reflection";

/// Reflection type of a classified chat message
pub const TYPE_CONVERSATIONAL: &str = "Conversational Insight";
/// Reflection type of a completed guided flow
pub const TYPE_GUIDED_JOURNEY: &str = "Guided Journey";
/// Reflection type of a direct submission
pub const TYPE_FREEFORM: &str = "Freeform";

/// One saved reflection with its classification metadata.
///
/// Entries are immutable once built; the journal only appends them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub text: String,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_reflection_type")]
    pub reflection_type: String,
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
}

fn default_source() -> String {
    "Unspecified".to_string()
}

fn default_reflection_type() -> String {
    "Unspecified".to_string()
}

impl JournalEntry {
    /// Create an entry stamped with the current local time
    pub fn new(text: impl Into<String>, tone: Tone, theme: Theme, mood: Mood) -> Self {
        JournalEntry {
            text: text.into(),
            tone,
            theme,
            mood,
            source: SOURCE_REFLECTION.to_string(),
            reflection_type: TYPE_FREEFORM.to_string(),
            timestamp: Local::now().naive_local(),
        }
    }

    /// Set the producing flow and reflection type
    pub fn with_provenance(
        mut self,
        source: impl Into<String>,
        reflection_type: impl Into<String>,
    ) -> Self {
        self.source = source.into();
        self.reflection_type = reflection_type.into();
        self
    }

    /// Override the creation time
    pub fn at(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Timestamps are written as `YYYY-MM-DDTHH:MM:SS[.fff]` and read leniently.
/// Fractional seconds are written only when present.
pub mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const WRITE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
    const READ_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    pub fn serialize<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&timestamp.format(WRITE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid timestamp '{}'", raw))
        })
    }

    /// Parse any of the accepted timestamp layouts. A bare date means midnight.
    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        READ_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .or_else(|| {
                chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        entry: Vec<JournalEntry>,
    }

    #[test]
    fn test_parse_accepts_iso_and_space_separated() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 4)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(timestamp_format::parse("2025-03-04T09:30:00"), Some(expected));
        assert_eq!(timestamp_format::parse("2025-03-04 09:30:00"), Some(expected));
        assert_eq!(
            timestamp_format::parse("2025-03-04T09:30:00.123456").map(|t| t.date()),
            Some(expected.date())
        );
        assert_eq!(
            timestamp_format::parse("2025-03-04"),
            NaiveDate::from_ymd_opt(2025, 3, 4).unwrap().and_hms_opt(0, 0, 0)
        );
        assert_eq!(timestamp_format::parse("yesterday"), None);
    }

    #[test]
    fn test_deserialize_unknown_labels_as_unspecified() {
        let toml_src = r#"
            [[entry]]
            text = "quiet evening"
            tone = "Mellow"
            theme = "Gardening"
            timestamp = "2025-03-04 21:00:00"
        "#;
        let parsed: Wrapper = toml::from_str(toml_src).unwrap();
        let entry = &parsed.entry[0];
        assert_eq!(entry.tone, Tone::Unspecified);
        assert_eq!(entry.theme, Theme::Unspecified);
        assert_eq!(entry.mood, Mood::Unspecified);
        assert_eq!(entry.source, "Unspecified");
    }

    #[test]
    fn test_builder_sets_provenance() {
        let entry = JournalEntry::new("hello", Tone::Gentle, Theme::Healing, Mood::Calm)
            .with_provenance(SOURCE_CHAT, TYPE_CONVERSATIONAL);
        assert_eq!(entry.source, "Chat");
        assert_eq!(entry.reflection_type, "Conversational Insight");
    }
}
