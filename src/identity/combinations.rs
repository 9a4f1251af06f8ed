//! Ordered identity combination tables
//!
//! Declaration order is load-bearing: synthesis scans each slice top to
//! bottom and the first entry whose traits are all present wins. Keep these
//! as const slices so iteration order is exactly the order written here.

/// Two-trait combinations for the positive polarity.
pub const POSITIVE_PAIRS: &[((&str, &str), &str)] = &[
    (("leadership", "creativity"), "Visionary Leader"),
    (("leadership", "ambition"), "Driven Achiever"),
    (("leadership", "independence"), "Self-Made Trailblazer"),
    (("intuition", "wisdom"), "Insightful Sage"),
    (("intuition", "inspiration"), "Illuminated Guide"),
    (("cooperation", "diplomacy"), "Natural Diplomat"),
    (("creativity", "expressiveness"), "Creative Communicator"),
    (("nurturing", "compassion"), "Devoted Caregiver"),
    (("nurturing", "responsibility"), "Steadfast Protector"),
    (("analytical", "wisdom"), "Deep Thinker"),
    (("analytical", "spiritual"), "Contemplative Scholar"),
    (("ambition", "business acumen"), "Born Executive"),
    (("humanitarianism", "generosity"), "Compassionate Humanitarian"),
    (("independence", "freedom-loving"), "Free Spirit"),
    (("reliability", "practicality"), "Steadfast Builder"),
    (("versatility", "adaptability"), "Versatile Adventurer"),
    (("master builder", "practical vision"), "Grand Architect"),
    (("master teacher", "healing"), "Guiding Light"),
];

/// Single-trait fallbacks for the positive polarity, keyed by the top trait.
pub const POSITIVE_SINGLES: &[(&str, &str)] = &[
    ("leadership", "Natural Leader"),
    ("creativity", "Creative Soul"),
    ("intuition", "Intuitive Spirit"),
    ("cooperation", "Harmonious Partner"),
    ("nurturing", "Caring Guardian"),
    ("analytical", "Analytical Mind"),
    ("ambition", "Ambitious Achiever"),
    ("humanitarianism", "Generous Heart"),
    ("reliability", "Dependable Anchor"),
    ("freedom-loving", "Restless Explorer"),
    ("expressiveness", "Gifted Storyteller"),
    ("wisdom", "Quiet Sage"),
];

/// Two-trait combinations for the negative polarity.
pub const NEGATIVE_PAIRS: &[((&str, &str), &str)] = &[
    (("impatience", "stubbornness"), "Headstrong Contender"),
    (("impatience", "impulsiveness"), "Hasty Reactor"),
    (("oversensitivity", "indecisiveness"), "Hesitant Worrier"),
    (("oversensitivity", "impracticality"), "Fragile Dreamer"),
    (("moodiness", "scatteredness"), "Scattered Dreamer"),
    (("scatteredness", "superficiality"), "Distracted Dabbler"),
    (("restlessness", "impulsiveness"), "Restless Wanderer"),
    (("restlessness", "irresponsibility"), "Unsettled Drifter"),
    (("materialism", "workaholism"), "Driven Workaholic"),
    (("aloofness", "isolation"), "Guarded Loner"),
    (("aloofness", "pessimism"), "Cynical Observer"),
    (("rigidity", "narrow-mindedness"), "Inflexible Traditionalist"),
    (("worry", "controlling"), "Anxious Controller"),
    (("interference", "controlling"), "Overbearing Fixer"),
    (("demanding", "controlling"), "Exacting Taskmaster"),
    (("impracticality", "emotional distance"), "Detached Idealist"),
    (("martyrdom", "over-sacrificing"), "Depleted Martyr"),
];

/// Single-trait fallbacks for the negative polarity.
pub const NEGATIVE_SINGLES: &[(&str, &str)] = &[
    ("impatience", "Impatient Spirit"),
    ("stubbornness", "Immovable Will"),
    ("oversensitivity", "Tender Heart"),
    ("moodiness", "Mercurial Temperament"),
    ("restlessness", "Restless Soul"),
    ("materialism", "Material Seeker"),
    ("aloofness", "Distant Observer"),
    ("worry", "Chronic Worrier"),
    ("pessimism", "Doubtful Mind"),
    ("interference", "Meddling Helper"),
    ("controlling", "Firm Hand"),
    ("demanding", "Hard Taskmaster"),
];

/// Fixed titles for an empty dominant trait list.
pub const DEFAULT_POSITIVE: &str = "Balanced Individual";
pub const DEFAULT_NEGATIVE: &str = "Internally Conflicted";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::tables::traits_for;

    // Every trait named in a combination entry must exist in the trait
    // table, otherwise the entry can never match.
    #[test]
    fn test_combination_traits_exist_in_trait_table() {
        let known: Vec<&str> = (1..=9)
            .chain([11, 22, 33])
            .flat_map(|n| {
                let entry = traits_for(n).unwrap();
                entry
                    .positive
                    .iter()
                    .chain(entry.negative)
                    .map(|(name, _)| *name)
            })
            .collect();

        let mut referenced: Vec<&str> = Vec::new();
        referenced.extend(POSITIVE_PAIRS.iter().flat_map(|((a, b), _)| [*a, *b]));
        referenced.extend(NEGATIVE_PAIRS.iter().flat_map(|((a, b), _)| [*a, *b]));
        referenced.extend(POSITIVE_SINGLES.iter().map(|(name, _)| *name));
        referenced.extend(NEGATIVE_SINGLES.iter().map(|(name, _)| *name));

        for name in referenced {
            assert!(known.contains(&name), "unknown trait in combination table: {name}");
        }
    }
}
