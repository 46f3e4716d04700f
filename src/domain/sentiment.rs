//! Sentiment polarity
//!
//! Wraps the VADER analyser and exposes its compound score in `[-1.0, 1.0]`.

use vader_sentiment::SentimentIntensityAnalyzer;

/// Typographic quotes the analyser's negation rules do not recognise
const CURLY_APOSTROPHES: [char; 3] = ['\u{2018}', '\u{2019}', '\u{02BC}'];

/// Rewrite typographic apostrophes as `'` so "don’t" negates like "don't".
fn normalize_apostrophes(text: &str) -> String {
    text.replace(CURLY_APOSTROPHES, "'")
}

/// Compound polarity of `text`; `0.0` for text with no sentiment words.
pub fn compound_score(text: &str) -> f64 {
    let normalized = normalize_apostrophes(text);
    let analyzer = SentimentIntensityAnalyzer::new();
    let scores = analyzer.polarity_scores(&normalized);
    scores
        .get("compound")
        .copied()
        .unwrap_or(0.0)
        .clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_text_scores_zero() {
        assert_eq!(compound_score("I walked to the shop today"), 0.0);
        assert_eq!(compound_score(""), 0.0);
    }

    #[test]
    fn test_positive_text() {
        assert!(compound_score("What a wonderful, happy day") > 0.3);
        assert!(compound_score("What a terrific, delightful day") > 0.3);
        assert!(compound_score("Such a lovely, pleasant, cheerful afternoon") > 0.3);
    }

    #[test]
    fn test_negative_text() {
        assert!(compound_score("This was an awful, horrible week") < -0.3);
        assert!(compound_score("A dreadful, gloomy, miserable commute") < -0.3);
    }

    #[test]
    fn test_negation_flips_polarity() {
        assert!(compound_score("I am happy") > 0.0);
        assert!(compound_score("I am not happy") < 0.0);
        assert!(compound_score("I don't feel good") < 0.0);
    }

    #[test]
    fn test_curly_apostrophe_negates() {
        let straight = compound_score("I don't feel good");
        assert_eq!(compound_score("I don\u{2019}t feel good"), straight);
        assert_eq!(compound_score("I don\u{2018}t feel good"), straight);
    }

    #[test]
    fn test_booster_and_exclamation_increase_magnitude() {
        let plain = compound_score("good");
        assert!(compound_score("very good") > plain);
        assert!(compound_score("good!!") > plain);
    }

    #[test]
    fn test_score_stays_in_range() {
        let text = "love love love great best amazing wonderful!!!!!!";
        let score = compound_score(text);
        assert!(score <= 1.0 && score > 0.9);
    }

    #[test]
    fn test_normalize_apostrophes() {
        assert_eq!(normalize_apostrophes("it\u{2019}s \u{2018}fine\u{2019}"), "it's 'fine'");
    }
}
