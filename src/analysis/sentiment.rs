use serde::{Deserialize, Serialize};
use vader_sentiment::SentimentIntensityAnalyzer;

/// Lexicon polarity scores for a span of text.
///
/// Field names follow the VADER convention so the JSON shape matches what
/// clients of the diary API already consume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// Anything that can turn text into polarity scores.
pub trait PolarityScorer: Send + Sync {
    fn score(&self, text: &str) -> PolarityScores;
}

/// VADER lexicon scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderScorer;

impl PolarityScorer for VaderScorer {
    fn score(&self, text: &str) -> PolarityScores {
        // The analyzer only borrows the crate's static lexicons.
        let analyzer = SentimentIntensityAnalyzer::new();
        let scores = analyzer.polarity_scores(text);
        let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);

        let mut compound = get("compound");
        if compound < 0.0 && zero_lexical_sum(&analyzer, text) {
            compound = 0.0;
        }

        PolarityScores {
            neg: get("neg"),
            neu: get("neu"),
            pos: get("pos"),
            compound,
        }
    }
}

/// `vader_sentiment` subtracts the `!`/`?` emphasis when the word valences
/// sum to exactly zero, so `"?!?!"` or a plain question comes out negative.
/// VADER leaves a zero sum at zero. The emphasis is the only thing those marks
/// feed, so scoring the text without them exposes the raw sum.
fn zero_lexical_sum(analyzer: &SentimentIntensityAnalyzer, text: &str) -> bool {
    if !text.contains(['!', '?']) {
        return false;
    }
    let plain: String = text.chars().filter(|c| !matches!(c, '!' | '?')).collect();
    analyzer
        .polarity_scores(&plain)
        .get("compound")
        .is_some_and(|c| *c == 0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentCategory {
    Positive,
    Negative,
    Neutral,
}

impl SentimentCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intensity {
    Strong,
    Moderate,
    Mild,
}

/// Thresholds are inclusive on the non-neutral side.
pub fn categorize(compound: f64) -> SentimentCategory {
    if compound >= 0.05 {
        SentimentCategory::Positive
    } else if compound <= -0.05 {
        SentimentCategory::Negative
    } else {
        SentimentCategory::Neutral
    }
}

pub fn intensity(compound: f64) -> Intensity {
    let magnitude = compound.abs();
    if magnitude >= 0.5 {
        Intensity::Strong
    } else if magnitude >= 0.1 {
        Intensity::Moderate
    } else {
        Intensity::Mild
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_boundaries_are_inclusive() {
        assert_eq!(categorize(0.05), SentimentCategory::Positive);
        assert_eq!(categorize(-0.05), SentimentCategory::Negative);
        assert_eq!(categorize(0.0499), SentimentCategory::Neutral);
        assert_eq!(categorize(-0.0499), SentimentCategory::Neutral);
        assert_eq!(categorize(1.0), SentimentCategory::Positive);
        assert_eq!(categorize(-1.0), SentimentCategory::Negative);
    }

    #[test]
    fn test_intensity_uses_magnitude() {
        assert_eq!(intensity(0.5), Intensity::Strong);
        assert_eq!(intensity(-0.5), Intensity::Strong);
        assert_eq!(intensity(0.1), Intensity::Moderate);
        assert_eq!(intensity(-0.3), Intensity::Moderate);
        assert_eq!(intensity(0.099), Intensity::Mild);
        assert_eq!(intensity(0.0), Intensity::Mild);
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_value(SentimentCategory::Neutral).unwrap();
        assert_eq!(json, "Neutral");
        let json = serde_json::to_value(Intensity::Moderate).unwrap();
        assert_eq!(json, "Moderate");
    }

    #[test]
    fn test_vader_scores_clear_cases() {
        let scorer = VaderScorer;
        let happy = scorer.score("I am so happy and excited today, I love my friends!");
        assert!(happy.compound >= 0.05, "compound was {}", happy.compound);

        let sad = scorer.score("This is a terrible, awful, miserable day.");
        assert!(sad.compound <= -0.05, "compound was {}", sad.compound);
    }

    #[test]
    fn test_emphasis_without_sentiment_words_stays_neutral() {
        let scorer = VaderScorer;
        assert_eq!(scorer.score("?!?!").compound, 0.0);
        assert_eq!(scorer.score("Where are we going tomorrow?").compound, 0.0);

        let sad = scorer.score("This is a terrible day!!");
        assert!(sad.compound <= -0.05, "compound was {}", sad.compound);
        let happy = scorer.score("What a wonderful day!!");
        assert!(happy.compound >= 0.05, "compound was {}", happy.compound);
    }
}
