use super::emotion::EmotionDistribution;
use super::sentiment::categorize;
use super::tags::{AVOIDANCE, MOTIVATION, OVERTHINKING, STRESS};

const TOUGH_TIME: &str = "It seems like you're going through a tough time. Remember that difficult moments are temporary, and you've overcome challenges before.";
const POSITIVE_HEADSPACE: &str = "You're in a positive headspace right now - that's wonderful! Consider what's contributing to this positivity and how you can cultivate more of it.";
const BALANCED: &str = "You're in a balanced state of mind. This stability can be a great foundation for growth and self-reflection.";
const GENERIC_ENCOURAGEMENT: &str =
    "You're doing great. Keep taking care of yourself and your emotional well-being.";

const DOMINANT_EMOTION_THRESHOLD: u32 = 30;
const SUMMARY_DOMINANCE_THRESHOLD: u32 = 50;

fn tone_sentence(compound: f64) -> &'static str {
    if compound < -0.3 {
        TOUGH_TIME
    } else if compound > 0.3 {
        POSITIVE_HEADSPACE
    } else {
        BALANCED
    }
}

// Keyed on "Anger", which no distribution label produces: Angry-dominant
// entries get no emotion sentence.
fn emotion_sentence(label: &str) -> Option<&'static str> {
    match label {
        "Happy" => Some("Your joy is contagious! Share this positive energy with someone you care about today."),
        "Sad" => Some("It's okay to feel sad sometimes. Be gentle with yourself and engage in activities that bring you comfort."),
        "Anger" => Some("Anger is a natural emotion. Try channeling this energy into something constructive, like exercise or creative expression."),
        "Fear" => Some("Fear can be protective, but don't let it hold you back. Take small steps toward what scares you."),
        "Surprise" => Some("Life's surprises can be challenging to process. Give yourself time to adjust to new information or changes."),
        _ => None,
    }
}

fn pattern_sentence(pattern: &str) -> Option<&'static str> {
    match pattern {
        STRESS => Some("You're experiencing stress. Try some deep breathing exercises or a short walk to help center yourself."),
        OVERTHINKING => Some("It seems like your mind is busy. Consider journaling your thoughts to help sort through them, or try mindfulness to stay present."),
        MOTIVATION => Some("Your motivation is a powerful force. Channel it toward a goal you've been putting off."),
        AVOIDANCE => Some("Avoidance is a common coping mechanism. Try breaking overwhelming tasks into smaller, manageable steps."),
        _ => None,
    }
}

/// Tone sentence first, then an emotion sentence when one emotion clearly
/// leads, then one sentence per supported mental pattern.
pub fn generate_suggestions(
    compound: f64,
    emotions: &EmotionDistribution,
    mental_patterns: &[String],
) -> Vec<String> {
    let mut suggestions = vec![tone_sentence(compound).to_string()];

    let (dominant, pct) = emotions.dominant();
    if pct > DOMINANT_EMOTION_THRESHOLD {
        if let Some(sentence) = emotion_sentence(dominant.label()) {
            suggestions.push(sentence.to_string());
        }
    }

    for key in [STRESS, OVERTHINKING, MOTIVATION, AVOIDANCE] {
        if mental_patterns.iter().any(|p| p == key) {
            if let Some(sentence) = pattern_sentence(key) {
                suggestions.push(sentence.to_string());
            }
        }
    }

    if suggestions.is_empty() {
        suggestions.push(GENERIC_ENCOURAGEMENT.to_string());
    }
    suggestions
}

pub fn generate_summary(compound: f64, emotions: &EmotionDistribution) -> String {
    let sentiment = categorize(compound).as_str().to_lowercase();
    let (dominant, pct) = emotions.dominant();

    if pct > SUMMARY_DOMINANCE_THRESHOLD {
        format!(
            "A {} entry dominated by {} emotions.",
            sentiment,
            dominant.label().to_lowercase()
        )
    } else {
        format!("A generally {} entry with mixed emotional tones.", sentiment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::emotion::estimate_emotions;

    fn patterns(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tone_sentence_thresholds() {
        let none = EmotionDistribution::default();
        assert_eq!(generate_suggestions(-0.31, &none, &[])[0], TOUGH_TIME);
        assert_eq!(generate_suggestions(-0.3, &none, &[])[0], BALANCED);
        assert_eq!(generate_suggestions(0.3, &none, &[])[0], BALANCED);
        assert_eq!(generate_suggestions(0.31, &none, &[])[0], POSITIVE_HEADSPACE);
    }

    #[test]
    fn test_exactly_one_tone_sentence_when_nothing_else_applies() {
        let none = EmotionDistribution::default();
        assert_eq!(generate_suggestions(0.0, &none, &[]), vec![BALANCED]);
    }

    #[test]
    fn test_dominant_emotion_sentence() {
        let happy = estimate_emotions("so happy");
        let suggestions = generate_suggestions(0.6, &happy, &[]);
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions[1].starts_with("Your joy is contagious"));

        let sad = estimate_emotions("feeling sad");
        let suggestions = generate_suggestions(-0.6, &sad, &[]);
        assert!(suggestions[1].starts_with("It's okay to feel sad"));
    }

    #[test]
    fn test_angry_dominant_gets_no_emotion_sentence() {
        // Known discrepancy: the emotion sentence table is keyed on "Anger"
        // while the distribution label is "Angry".
        let angry = estimate_emotions("I am furious");
        assert_eq!(angry.dominant().1, 100);
        assert_eq!(generate_suggestions(-0.6, &angry, &[]), vec![TOUGH_TIME]);
    }

    #[test]
    fn test_emotion_at_threshold_is_ignored() {
        // One keyword per emotion: every bucket is 20.
        let mixed = estimate_emotions("happy angry surprise sad fear");
        assert_eq!(mixed.dominant().1, 20);
        assert_eq!(generate_suggestions(0.0, &mixed, &[]).len(), 1);
    }

    #[test]
    fn test_pattern_sentences_in_fixed_order() {
        let none = EmotionDistribution::default();
        let found = patterns(&["Avoidance", "Fatigue", "Stress", "Motivation"]);
        let suggestions = generate_suggestions(0.0, &none, &found);
        assert_eq!(suggestions.len(), 4);
        assert!(suggestions[1].starts_with("You're experiencing stress"));
        assert!(suggestions[2].starts_with("Your motivation"));
        assert!(suggestions[3].starts_with("Avoidance is"));
    }

    #[test]
    fn test_summary_wording() {
        let happy = estimate_emotions("happy");
        assert_eq!(
            generate_summary(0.8, &happy),
            "A positive entry dominated by happy emotions."
        );

        let split = estimate_emotions("happy sad");
        assert_eq!(
            generate_summary(-0.2, &split),
            "A generally negative entry with mixed emotional tones."
        );

        let none = EmotionDistribution::default();
        assert_eq!(
            generate_summary(0.0, &none),
            "A generally neutral entry with mixed emotional tones."
        );
    }
}
