//! Static trait and weight tables
//!
//! One trait table covers all twelve reachable numbers (1-9 and the three
//! masters) and serves both the Pythagorean and the Planes systems. Strengths
//! run 2-5. The weight tables differ per system: the core numbers carry more
//! influence than the planes.

/// Positive and negative trait strengths for one numerology number.
pub struct NumberTraits {
    pub positive: &'static [(&'static str, u32)],
    pub negative: &'static [(&'static str, u32)],
}

/// Per-number-type weights for the four core Pythagorean numbers.
pub const PYTHAGOREAN_WEIGHTS: &[(&str, u32)] = &[
    ("life_path", 4),   // primary life direction
    ("expression", 3),  // natural abilities
    ("soul_urge", 3),   // inner desires
    ("personality", 2), // outer appearance
];

/// Per-number-type weights for the four Planes of Expression.
pub const PLANE_WEIGHTS: &[(&str, u32)] = &[
    ("physical_plane", 2),
    ("mental_plane", 2),
    ("emotional_plane", 2),
    ("intuitive_plane", 2),
];

/// Trait table lookup. Numbers outside the twelve keys (notably a plane
/// value of 0) return None and contribute nothing to aggregation.
pub fn traits_for(number: u32) -> Option<&'static NumberTraits> {
    match number {
        1 => Some(&ONE),
        2 => Some(&TWO),
        3 => Some(&THREE),
        4 => Some(&FOUR),
        5 => Some(&FIVE),
        6 => Some(&SIX),
        7 => Some(&SEVEN),
        8 => Some(&EIGHT),
        9 => Some(&NINE),
        11 => Some(&ELEVEN),
        22 => Some(&TWENTY_TWO),
        33 => Some(&THIRTY_THREE),
        _ => None,
    }
}

static ONE: NumberTraits = NumberTraits {
    positive: &[
        ("leadership", 5),
        ("independence", 5),
        ("pioneering", 4),
        ("confidence", 4),
        ("determination", 4),
        ("innovation", 3),
        ("ambition", 3),
    ],
    negative: &[
        ("impatience", 4),
        ("stubbornness", 4),
        ("selfishness", 3),
        ("domineering", 3),
        ("impulsiveness", 3),
        ("intolerance", 2),
    ],
};

static TWO: NumberTraits = NumberTraits {
    positive: &[
        ("cooperation", 5),
        ("diplomacy", 5),
        ("sensitivity", 4),
        ("peacemaking", 4),
        ("supportiveness", 4),
        ("intuition", 3),
        ("gentleness", 3),
    ],
    negative: &[
        ("oversensitivity", 4),
        ("indecisiveness", 4),
        ("dependency", 3),
        ("moodiness", 3),
        ("passive-aggressiveness", 3),
        ("insecurity", 2),
    ],
};

static THREE: NumberTraits = NumberTraits {
    positive: &[
        ("creativity", 5),
        ("expressiveness", 5),
        ("optimism", 4),
        ("charm", 4),
        ("communication", 4),
        ("enthusiasm", 3),
        ("inspiration", 3),
    ],
    negative: &[
        ("scatteredness", 4),
        ("superficiality", 4),
        ("moodiness", 3),
        ("gossip", 3),
        ("extravagance", 3),
        ("criticism", 2),
    ],
};

static FOUR: NumberTraits = NumberTraits {
    positive: &[
        ("reliability", 5),
        ("practicality", 5),
        ("organization", 4),
        ("hard work", 4),
        ("loyalty", 4),
        ("honesty", 3),
        ("methodical", 3),
    ],
    negative: &[
        ("rigidity", 4),
        ("narrow-mindedness", 4),
        ("pessimism", 3),
        ("stubbornness", 3),
        ("overly serious", 3),
        ("resistance to change", 2),
    ],
};

static FIVE: NumberTraits = NumberTraits {
    positive: &[
        ("freedom-loving", 5),
        ("versatility", 5),
        ("adaptability", 4),
        ("curiosity", 4),
        ("progressive", 4),
        ("dynamic", 3),
        ("quick-witted", 3),
    ],
    negative: &[
        ("restlessness", 4),
        ("irresponsibility", 4),
        ("impulsiveness", 3),
        ("unreliability", 3),
        ("carelessness", 3),
        ("addiction prone", 2),
    ],
};

static SIX: NumberTraits = NumberTraits {
    positive: &[
        ("nurturing", 5),
        ("responsibility", 5),
        ("compassion", 4),
        ("healing", 4),
        ("family-oriented", 4),
        ("harmony", 3),
        ("service", 3),
    ],
    negative: &[
        ("interference", 4),
        ("worry", 4),
        ("controlling", 3),
        ("jealousy", 3),
        ("anxiety", 3),
        ("self-righteousness", 2),
    ],
};

static SEVEN: NumberTraits = NumberTraits {
    positive: &[
        ("analytical", 5),
        ("spiritual", 5),
        ("wisdom", 4),
        ("introspection", 4),
        ("intuition", 4),
        ("perfectionism", 3),
        ("mystery", 3),
    ],
    negative: &[
        ("aloofness", 4),
        ("pessimism", 4),
        ("secretiveness", 3),
        ("isolation", 3),
        ("sarcasm", 3),
        ("fault-finding", 2),
    ],
};

static EIGHT: NumberTraits = NumberTraits {
    positive: &[
        ("ambition", 5),
        ("business acumen", 5),
        ("authority", 4),
        ("efficiency", 4),
        ("material success", 4),
        ("organization", 3),
        ("goal-oriented", 3),
    ],
    negative: &[
        ("materialism", 4),
        ("workaholism", 4),
        ("demanding", 3),
        ("ruthlessness", 3),
        ("status-conscious", 3),
        ("stress", 2),
    ],
};

static NINE: NumberTraits = NumberTraits {
    positive: &[
        ("humanitarianism", 5),
        ("generosity", 5),
        ("wisdom", 4),
        ("compassion", 4),
        ("tolerance", 4),
        ("artistic", 3),
        ("global thinking", 3),
    ],
    negative: &[
        ("impracticality", 4),
        ("emotional distance", 4),
        ("moodiness", 3),
        ("resentment", 3),
        ("superiority", 3),
        ("financial carelessness", 2),
    ],
};

static ELEVEN: NumberTraits = NumberTraits {
    positive: &[
        ("intuition", 5),
        ("inspiration", 5),
        ("spirituality", 4),
        ("idealism", 4),
        ("vision", 4),
        ("sensitivity", 3),
        ("psychic ability", 3),
    ],
    negative: &[
        ("oversensitivity", 4),
        ("impracticality", 4),
        ("nervousness", 3),
        ("extremism", 3),
        ("unrealistic", 3),
        ("fanaticism", 2),
    ],
};

static TWENTY_TWO: NumberTraits = NumberTraits {
    positive: &[
        ("master builder", 5),
        ("practical vision", 5),
        ("transformation", 4),
        ("capability", 4),
        ("organization", 4),
        ("inspiration", 3),
        ("dedication", 3),
    ],
    negative: &[
        ("demanding", 4),
        ("controlling", 4),
        ("impatience", 3),
        ("stress", 3),
        ("domineering", 3),
        ("nervous energy", 2),
    ],
};

static THIRTY_THREE: NumberTraits = NumberTraits {
    positive: &[
        ("master teacher", 5),
        ("healing", 5),
        ("spiritual service", 4),
        ("altruism", 4),
        ("devotion", 4),
        ("compassion", 3),
        ("inspiration", 3),
    ],
    negative: &[
        ("martyrdom", 4),
        ("over-sacrificing", 4),
        ("superiority", 3),
        ("controlling", 3),
        ("burn-out", 3),
        ("emotional demands", 2),
    ],
};
