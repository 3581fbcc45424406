//! Analysis result module - the artifact produced per analyzed text

use crate::label::EmotionLabel;
use crate::tier::SessionTier;

/// Per-emotion aggregate produced by one scoring pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionScore {
    /// Signed accumulated score; negated matches subtract from it
    pub raw_score: f64,

    /// Number of keyword occurrences that matched this emotion
    pub match_count: u32,

    /// Per-occurrence intensity, normalized into [0, 10]
    pub normalized_intensity: f64,
}

/// The result of analyzing a single text.
///
/// Results are transient: one is constructed fresh for every call and
/// carries no identity beyond it. Persisting any of its fields is the
/// caller's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Emotion with the highest absolute raw score; `None` means neutral
    /// (empty input, or no keyword matched)
    pub dominant: Option<EmotionLabel>,

    /// Scores for every matched emotion, in canonical label order.
    /// Emotions with no matches are absent.
    pub scores: Vec<(EmotionLabel, EmotionScore)>,

    /// Overall stress level in [0, 10]
    pub stress_level: f64,

    /// Analysis confidence in [0, 100]
    pub confidence: f64,

    /// Intensity of the dominant emotion in [0, 10]
    pub intensity: f64,

    /// Localized advice for the (dominant emotion, stress tier) pair
    pub recommendation: String,

    /// Support-session classification for the stress level
    pub session: SessionTier,

    /// Display glyph of the dominant emotion
    pub glyph: &'static str,
}

impl AnalysisResult {
    /// The dominant label's string form, with the neutral sentinel for
    /// texts where nothing matched.
    pub fn dominant_str(&self) -> &'static str {
        match self.dominant {
            Some(label) => label.as_str(),
            None => "neutral",
        }
    }

    /// Look up the score entry for a label, if it matched.
    pub fn score_for(&self, label: EmotionLabel) -> Option<&EmotionScore> {
        self.scores
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, s)| s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neutral_result() -> AnalysisResult {
        AnalysisResult {
            dominant: None,
            scores: Vec::new(),
            stress_level: 0.0,
            confidence: 30.0,
            intensity: 0.0,
            recommendation: String::new(),
            session: SessionTier::Preventive,
            glyph: "⚪",
        }
    }

    #[test]
    fn test_dominant_str_neutral_sentinel() {
        assert_eq!(neutral_result().dominant_str(), "neutral");
    }

    #[test]
    fn test_dominant_str_label() {
        let mut result = neutral_result();
        result.dominant = Some(EmotionLabel::Joy);
        assert_eq!(result.dominant_str(), "alegría");
    }

    #[test]
    fn test_score_for_missing_label() {
        let result = neutral_result();
        assert!(result.score_for(EmotionLabel::Fear).is_none());
    }

    #[test]
    fn test_score_for_present_label() {
        let mut result = neutral_result();
        result.scores.push((
            EmotionLabel::Fear,
            EmotionScore {
                raw_score: 4.0,
                match_count: 2,
                normalized_intensity: 2.4,
            },
        ));
        let score = result.score_for(EmotionLabel::Fear).unwrap();
        assert_eq!(score.match_count, 2);
    }
}
