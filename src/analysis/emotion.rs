use serde::ser::{Serialize, SerializeMap, Serializer};

/// The five emotion buckets, in arg-max tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emotion {
    Happy,
    Angry,
    Surprise,
    Sad,
    Fear,
}

impl Emotion {
    pub const ALL: [Emotion; 5] = [
        Emotion::Happy,
        Emotion::Angry,
        Emotion::Surprise,
        Emotion::Sad,
        Emotion::Fear,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Angry => "Angry",
            Self::Surprise => "Surprise",
            Self::Sad => "Sad",
            Self::Fear => "Fear",
        }
    }

    fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Happy => &[
                "happy", "joy", "glad", "pleased", "delighted", "cheerful", "content",
                "satisfied", "excited", "love", "enjoy", "fun", "celebrate",
            ],
            Self::Angry => &[
                "angry", "mad", "furious", "annoyed", "frustrated", "irritated", "hate",
                "dislike", "rage",
            ],
            Self::Surprise => &[
                "surprise", "amazed", "astonished", "shocked", "stunned", "startled",
                "unexpected", "incredible",
            ],
            Self::Sad => &[
                "sad", "unhappy", "depressed", "gloomy", "melancholy", "down", "blue",
                "upset", "disappointed", "lonely",
            ],
            Self::Fear => &[
                "fear", "afraid", "scared", "frightened", "anxious", "worried", "nervous",
                "panic", "dread",
            ],
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Integer percentages per emotion. All zero when nothing matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmotionDistribution {
    percentages: [u32; 5],
}

impl EmotionDistribution {
    pub fn get(&self, emotion: Emotion) -> u32 {
        self.percentages[emotion.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Emotion, u32)> + '_ {
        Emotion::ALL.iter().map(|&e| (e, self.get(e)))
    }

    pub fn is_empty(&self) -> bool {
        self.percentages.iter().all(|&p| p == 0)
    }

    /// Highest percentage; the first emotion in fixed order wins ties, so an
    /// all-zero distribution resolves to `Happy`.
    pub fn dominant(&self) -> (Emotion, u32) {
        let mut best = (Emotion::Happy, self.get(Emotion::Happy));
        for (emotion, pct) in self.iter().skip(1) {
            if pct > best.1 {
                best = (emotion, pct);
            }
        }
        best
    }
}

impl Serialize for EmotionDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Emotion::ALL.len()))?;
        for (emotion, pct) in self.iter() {
            map.serialize_entry(emotion.label(), &pct)?;
        }
        map.end()
    }
}

/// Counts how many distinct keywords of each emotion occur in the text and
/// converts the counts into independently rounded percentages.
pub fn estimate_emotions(text: &str) -> EmotionDistribution {
    let lowered = text.to_lowercase();

    let mut counts = [0u32; 5];
    for emotion in Emotion::ALL {
        counts[emotion.index()] = emotion
            .keywords()
            .iter()
            .filter(|kw| lowered.contains(*kw))
            .count() as u32;
    }

    let total: u32 = counts.iter().sum();
    if total == 0 {
        return EmotionDistribution::default();
    }

    let mut percentages = [0u32; 5];
    for (pct, count) in percentages.iter_mut().zip(counts) {
        // Half-to-even, so 12.5 rounds to 12 and 37.5 to 38.
        *pct = (f64::from(count) / f64::from(total) * 100.0).round_ties_even() as u32;
    }

    EmotionDistribution { percentages }
}
