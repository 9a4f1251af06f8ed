//! Weighted trait scoring
//!
//! Turns computed numbers into two trait score maps (positive and negative)
//! per system, then filters and ranks them. Score maps keep insertion order
//! so that ties rank deterministically.

pub mod tables;

use serde::Serialize;
use tracing::trace;

pub use tables::{traits_for, NumberTraits, PLANE_WEIGHTS, PYTHAGOREAN_WEIGHTS};

/// Minimum accumulated score for a trait to count as significant.
pub const SIGNIFICANCE_THRESHOLD: u32 = 4;

/// Cap on the number of dominant traits reported per polarity.
pub const DOMINANT_LIMIT: usize = 10;

/// Which weighting system produced a score. Confidence thresholds differ
/// because the two systems carry different weight magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum System {
    Pythagorean,
    Planes,
}

/// Confidence label for one dominant trait's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Confidence {
    High,
    Moderate,
    Low,
    VeryLow,
}

impl System {
    pub fn confidence(self, score: u32) -> Confidence {
        let (high, moderate, low) = match self {
            System::Pythagorean => (15, 10, 6),
            System::Planes => (10, 7, 4),
        };
        if score >= high {
            Confidence::High
        } else if score >= moderate {
            Confidence::Moderate
        } else if score >= low {
            Confidence::Low
        } else {
            Confidence::VeryLow
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Confidence::High => "High Confidence",
            Confidence::Moderate => "Moderate Confidence",
            Confidence::Low => "Low Confidence",
            Confidence::VeryLow => "Very Low Confidence",
        };
        write!(f, "{label}")
    }
}

/// Trait name to accumulated score, in first-insertion order.
///
/// A plain vector stands in for an ordered map: the trait vocabulary is small
/// and fixed, and ranking needs the insertion order that a hash map would
/// discard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TraitScores {
    entries: Vec<(&'static str, u32)>,
}

impl TraitScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to a trait's score, inserting at the back on first sight.
    pub fn add(&mut self, trait_name: &'static str, amount: u32) {
        match self.entries.iter_mut().find(|(name, _)| *name == trait_name) {
            Some(entry) => entry.1 += amount,
            None => self.entries.push((trait_name, amount)),
        }
    }

    pub fn get(&self, trait_name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(name, _)| *name == trait_name)
            .map(|(_, score)| *score)
    }

    pub fn contains(&self, trait_name: &str) -> bool {
        self.get(trait_name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        self.entries.iter().copied()
    }

    /// Keep only traits whose score meets `min_score` (inclusive).
    pub fn significant(&self, min_score: u32) -> TraitScores {
        TraitScores {
            entries: self
                .entries
                .iter()
                .filter(|(_, score)| *score >= min_score)
                .copied()
                .collect(),
        }
    }

    /// Top `limit` traits by descending score. The sort is stable, so equal
    /// scores keep their first-insertion order.
    pub fn dominant(&self, limit: usize) -> Vec<(&'static str, u32)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }

    /// Union of two score maps, summing scores of shared traits. Entries of
    /// `self` keep their positions; traits only in `other` append in order.
    pub fn merged(&self, other: &TraitScores) -> TraitScores {
        let mut merged = self.clone();
        for (trait_name, score) in other.iter() {
            merged.add(trait_name, score);
        }
        merged
    }
}

/// Accumulate weighted trait scores for a set of computed numbers.
///
/// `numbers` pairs each number-type label with its value; `weights` maps
/// labels to influence weights. Numbers without a trait table entry are
/// skipped outright, which is how plane value 0 stays out of the maps.
pub fn aggregate(
    numbers: &[(&'static str, u32)],
    weights: &[(&'static str, u32)],
) -> (TraitScores, TraitScores) {
    let mut positive = TraitScores::new();
    let mut negative = TraitScores::new();

    for &(label, number) in numbers {
        let Some(number_traits) = traits_for(number) else {
            trace!(label, number, "no trait entry, skipping");
            continue;
        };
        let weight = weights
            .iter()
            .find(|(weight_label, _)| *weight_label == label)
            .map(|(_, weight)| *weight)
            .unwrap_or(0);

        for &(trait_name, strength) in number_traits.positive {
            positive.add(trait_name, strength * weight);
        }
        for &(trait_name, strength) in number_traits.negative {
            negative.add(trait_name, strength * weight);
        }
    }

    (positive, negative)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_applies_weights() {
        let (positive, negative) = aggregate(&[("life_path", 1)], &[("life_path", 4)]);
        // leadership strength 5 at weight 4
        assert_eq!(positive.get("leadership"), Some(20));
        assert_eq!(negative.get("impatience"), Some(16));
    }

    #[test]
    fn test_aggregate_accumulates_across_numbers() {
        // moodiness appears under both 2 (strength 3) and 3 (strength 3)
        let (_, negative) = aggregate(
            &[("expression", 3), ("soul_urge", 2)],
            &[("expression", 3), ("soul_urge", 3)],
        );
        assert_eq!(negative.get("moodiness"), Some(18));
    }

    #[test]
    fn test_aggregate_order_does_not_change_scores() {
        let numbers = [("life_path", 6), ("expression", 3), ("soul_urge", 2)];
        let weights = [("life_path", 4), ("expression", 3), ("soul_urge", 3)];
        let mut reversed = numbers;
        reversed.reverse();

        let (forward_pos, forward_neg) = aggregate(&numbers, &weights);
        let (backward_pos, backward_neg) = aggregate(&reversed, &weights);
        for (trait_name, score) in forward_pos.iter() {
            assert_eq!(backward_pos.get(trait_name), Some(score));
        }
        for (trait_name, score) in forward_neg.iter() {
            assert_eq!(backward_neg.get(trait_name), Some(score));
        }
    }

    #[test]
    fn test_aggregate_skips_numbers_without_traits() {
        let (positive, negative) = aggregate(&[("physical_plane", 0)], &[("physical_plane", 2)]);
        assert!(positive.is_empty());
        assert!(negative.is_empty());
    }

    #[test]
    fn test_significant_threshold_is_inclusive() {
        let mut scores = TraitScores::new();
        scores.add("at threshold", SIGNIFICANCE_THRESHOLD);
        scores.add("below", SIGNIFICANCE_THRESHOLD - 1);

        let significant = scores.significant(SIGNIFICANCE_THRESHOLD);
        assert!(significant.contains("at threshold"));
        assert!(!significant.contains("below"));
    }

    #[test]
    fn test_dominant_truncates_and_sorts_descending() {
        let mut scores = TraitScores::new();
        for (name, score) in [("a", 5), ("b", 12), ("c", 9), ("d", 7)] {
            scores.add(name, score);
        }
        let top = scores.dominant(3);
        assert_eq!(top, vec![("b", 12), ("c", 9), ("d", 7)]);
    }

    #[test]
    fn test_dominant_breaks_ties_by_insertion_order() {
        let mut scores = TraitScores::new();
        scores.add("first", 8);
        scores.add("second", 8);
        scores.add("third", 10);

        let top = scores.dominant(10);
        assert_eq!(top, vec![("third", 10), ("first", 8), ("second", 8)]);
    }

    #[test]
    fn test_merged_sums_shared_traits_and_appends_new_ones() {
        let mut left = TraitScores::new();
        left.add("shared", 10);
        left.add("left only", 4);
        let mut right = TraitScores::new();
        right.add("shared", 6);
        right.add("right only", 5);

        let merged = left.merged(&right);
        assert_eq!(merged.get("shared"), Some(16));
        assert_eq!(merged.get("left only"), Some(4));
        assert_eq!(merged.get("right only"), Some(5));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_confidence_boundaries() {
        assert_eq!(System::Pythagorean.confidence(15), Confidence::High);
        assert_eq!(System::Pythagorean.confidence(14), Confidence::Moderate);
        assert_eq!(System::Pythagorean.confidence(10), Confidence::Moderate);
        assert_eq!(System::Pythagorean.confidence(6), Confidence::Low);
        assert_eq!(System::Pythagorean.confidence(5), Confidence::VeryLow);

        assert_eq!(System::Planes.confidence(10), Confidence::High);
        assert_eq!(System::Planes.confidence(7), Confidence::Moderate);
        assert_eq!(System::Planes.confidence(4), Confidence::Low);
        assert_eq!(System::Planes.confidence(3), Confidence::VeryLow);
    }
}
