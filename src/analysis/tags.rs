//! Keyword taggers for mental patterns and strengths.
//!
//! Each tag is a label plus a fixed keyword list. A tag fires when any of its
//! keywords occurs as a substring of the lower-cased text. Tables are walked
//! in order, so output order is the table order and no tag repeats.

struct TagRule {
    label: &'static str,
    keywords: &'static [&'static str],
}

pub const STRESS: &str = "Stress";
pub const OVERTHINKING: &str = "Overthinking";
pub const MOTIVATION: &str = "Motivation";
pub const AVOIDANCE: &str = "Avoidance";

/// "think" appearing more than this many times is overthinking on its own.
const OVERTHINKING_REPEAT_THRESHOLD: usize = 3;

const MENTAL_PATTERNS: &[TagRule] = &[
    TagRule {
        label: STRESS,
        keywords: &["stress", "stressed", "pressure", "overwhelm", "anxious", "anxiety"],
    },
    TagRule {
        label: OVERTHINKING,
        keywords: &["think", "thinking", "thought", "wonder", "wondering", "contemplate"],
    },
    TagRule {
        label: MOTIVATION,
        keywords: &["motivat", "inspir", "excit", "enthusias", "eager", "drive"],
    },
    TagRule {
        label: AVOIDANCE,
        keywords: &["avoid", "procrastin", "delay", "postpone"],
    },
    TagRule {
        label: "Self-criticism",
        keywords: &["should have", "could have", "would have", "mistake", "wrong", "fail"],
    },
    TagRule {
        label: "Confidence",
        keywords: &["confident", "proud", "accomplish", "success", "achiev"],
    },
    TagRule {
        label: "Relationship concerns",
        keywords: &["friend", "family", "relationship", "partner", "love", "alone"],
    },
    TagRule {
        label: "Fatigue",
        keywords: &["tired", "exhaust", "fatigue", "sleepy", "drain"],
    },
    TagRule {
        label: "Productivity",
        keywords: &["productiv", "efficien", "focus", "concentrat", "work"],
    },
];

const STRENGTHS: &[TagRule] = &[
    TagRule {
        label: "Effort",
        keywords: &["try", "attempt", "work", "effort", "strive"],
    },
    TagRule {
        label: "Honesty",
        keywords: &["honest", "truth", "admit", "confess"],
    },
    TagRule {
        label: "Resilience",
        keywords: &["persever", "persist", "resilien", "bounc", "recover"],
    },
    TagRule {
        label: "Discipline",
        keywords: &["disciplin", "routine", "habit", "schedule", "plan"],
    },
    TagRule {
        label: "Responsibility",
        keywords: &["responsib", "duty", "obligat", "accountab"],
    },
    TagRule {
        label: "Empathy",
        keywords: &["empath", "understand", "feel for", "compassion"],
    },
    TagRule {
        label: "Self-awareness",
        keywords: &["realize", "recognize", "aware", "understand myself"],
    },
];

fn matches_any(lowered: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| lowered.contains(kw))
}

pub fn identify_mental_patterns(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    MENTAL_PATTERNS
        .iter()
        .filter(|rule| {
            if rule.label == OVERTHINKING
                && lowered.matches("think").count() > OVERTHINKING_REPEAT_THRESHOLD
            {
                return true;
            }
            matches_any(&lowered, rule.keywords)
        })
        .map(|rule| rule.label.to_string())
        .collect()
}

pub fn identify_strengths(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    STRENGTHS
        .iter()
        .filter(|rule| matches_any(&lowered, rule.keywords))
        .map(|rule| rule.label.to_string())
        .collect()
}
