//! # Diary text analysis
//!
//! Pure functions over a single entry's text. Nothing here does I/O or holds
//! state; the only collaborator is the [`PolarityScorer`] that supplies the
//! compound score. Every step reads the input text independently, so the
//! sub-functions can be called on their own by endpoints that need only part
//! of the result.

pub mod emotion;
pub mod highlights;
pub mod sentiment;
pub mod suggestions;
pub mod tags;

use serde::Serialize;

pub use emotion::{estimate_emotions, Emotion, EmotionDistribution};
pub use highlights::extract_highlights;
pub use sentiment::{
    categorize, intensity, Intensity, PolarityScorer, PolarityScores, SentimentCategory,
    VaderScorer,
};
pub use suggestions::{generate_suggestions, generate_summary};
pub use tags::{identify_mental_patterns, identify_strengths};

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub polarity_scores: PolarityScores,
    pub category: SentimentCategory,
    pub intensity: Intensity,
    pub emotion_distribution: EmotionDistribution,
    pub highlights: Vec<String>,
    pub mental_patterns: Vec<String>,
    pub strengths: Vec<String>,
    pub suggestions: Vec<String>,
    pub summary: String,
}

/// Runs the full pipeline. Never fails, including for the empty string.
pub fn analyze(scorer: &dyn PolarityScorer, text: &str) -> AnalysisResult {
    let polarity_scores = scorer.score(text);
    let compound = polarity_scores.compound;

    let emotion_distribution = estimate_emotions(text);
    let mental_patterns = identify_mental_patterns(text);
    let suggestions = generate_suggestions(compound, &emotion_distribution, &mental_patterns);
    let summary = generate_summary(compound, &emotion_distribution);

    AnalysisResult {
        polarity_scores,
        category: categorize(compound),
        intensity: intensity(compound),
        emotion_distribution,
        highlights: extract_highlights(text),
        mental_patterns,
        strengths: identify_strengths(text),
        suggestions,
        summary,
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{PolarityScorer, PolarityScores};

    /// Returns the same compound score for any text.
    pub struct FixedScorer(pub f64);

    impl PolarityScorer for FixedScorer {
        fn score(&self, _text: &str) -> PolarityScores {
            PolarityScores {
                compound: self.0,
                neu: 1.0,
                ..Default::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FixedScorer;
    use super::*;

    #[test]
    fn test_happy_entry_end_to_end() {
        let text = "I am so happy and excited today, I love my friends!";
        let result = analyze(&VaderScorer, text);

        assert_eq!(result.category, SentimentCategory::Positive);
        assert_eq!(result.emotion_distribution.get(Emotion::Happy), 100);
        assert!(result
            .mental_patterns
            .iter()
            .any(|p| p == "Relationship concerns"));
        assert!(result.strengths.is_empty());
        assert!(result.highlights.is_empty());
        assert_eq!(
            result.summary,
            "A positive entry dominated by happy emotions."
        );
    }

    #[test]
    fn test_empty_text_degrades_gracefully() {
        let result = analyze(&FixedScorer(0.0), "");
        assert_eq!(result.category, SentimentCategory::Neutral);
        assert_eq!(result.intensity, Intensity::Mild);
        assert!(result.emotion_distribution.is_empty());
        assert!(result.highlights.is_empty());
        assert!(result.mental_patterns.is_empty());
        assert!(result.strengths.is_empty());
        assert_eq!(result.suggestions.len(), 1);
        assert!(result.suggestions[0].starts_with("You're in a balanced state"));
        assert_eq!(
            result.summary,
            "A generally neutral entry with mixed emotional tones."
        );
    }

    #[test]
    fn test_category_and_intensity_follow_compound() {
        for (compound, category, level) in [
            (0.7, SentimentCategory::Positive, Intensity::Strong),
            (-0.2, SentimentCategory::Negative, Intensity::Moderate),
            (0.01, SentimentCategory::Neutral, Intensity::Mild),
        ] {
            let result = analyze(&FixedScorer(compound), "whatever the text says");
            assert_eq!(result.category, category);
            assert_eq!(result.intensity, level);
        }
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let text = "I keep thinking about the deadline. Work is stressful. \
                    I tried my best and I am proud of the effort.";
        let a = serde_json::to_value(analyze(&FixedScorer(-0.4), text)).unwrap();
        let b = serde_json::to_value(analyze(&FixedScorer(-0.4), text)).unwrap();
        assert_eq!(a, b);
    }
}
