//! Identity title synthesis
//!
//! Collapses the top merged traits of one polarity into a single descriptive
//! title via ordered pattern matching: two-trait combinations first, then
//! single-trait entries, then a generic formatted fallback.

pub mod combinations;

use tracing::debug;

use combinations::{
    DEFAULT_NEGATIVE, DEFAULT_POSITIVE, NEGATIVE_PAIRS, NEGATIVE_SINGLES, POSITIVE_PAIRS,
    POSITIVE_SINGLES,
};

/// How many merged traits feed the combination search.
pub const TOP_TRAITS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

/// Human formatting for a trait name: hyphens and underscores become spaces,
/// each word is title-cased.
pub fn display_trait(trait_name: &str) -> String {
    trait_name
        .replace(['-', '_'], " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().to_string() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Synthesize one identity title from a polarity's top traits.
///
/// `top` is the merged, descending-ranked trait list, already truncated to
/// [`TOP_TRAITS`]. The pair table is scanned in declaration order and the
/// first entry whose both traits appear wins; a leftover third trait becomes
/// a suffix. Otherwise the highest trait keys into the single-entry table,
/// and failing that, a generic title forms from the highest trait alone.
pub fn synthesize(top: &[(&'static str, u32)], polarity: Polarity) -> String {
    let (pairs, singles, pair_suffix, single_suffix, fallback) = match polarity {
        Polarity::Positive => (POSITIVE_PAIRS, POSITIVE_SINGLES, "Drive", "Qualities", "Focused"),
        Polarity::Negative => (NEGATIVE_PAIRS, NEGATIVE_SINGLES, "Issues", "Tendencies", "Challenged"),
    };

    if top.is_empty() {
        return match polarity {
            Polarity::Positive => DEFAULT_POSITIVE.to_string(),
            Polarity::Negative => DEFAULT_NEGATIVE.to_string(),
        };
    }
    let names: Vec<&str> = top.iter().map(|(name, _)| *name).collect();

    for &((first, second), title) in pairs {
        if names.contains(&first) && names.contains(&second) {
            debug!(first, second, title, "matched trait pair");
            let mut title = title.to_string();
            if let Some(other) = names.iter().find(|name| **name != first && **name != second) {
                title.push_str(&format!(" with {} {pair_suffix}", display_trait(other)));
            }
            return title;
        }
    }

    for &(single, title) in singles {
        if single == names[0] {
            debug!(single, title, "matched single trait");
            let mut title = title.to_string();
            if let Some(second) = names.get(1) {
                title.push_str(&format!(" with {} {single_suffix}", display_trait(second)));
            }
            return title;
        }
    }

    format!("{} {fallback} Individual", display_trait(names[0]))
}
