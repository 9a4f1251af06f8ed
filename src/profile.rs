//! Full profile computation
//!
//! One call runs the whole pipeline: numbers from the name and birth date,
//! weighted trait aggregation per system, significance filtering and ranking,
//! and identity title synthesis. Everything is pure; the only failure mode is
//! a malformed birth date.

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::identity::{self, Polarity};
use crate::name;
use crate::numbers::{self, CoreNumbers, GroupTotals, PlaneNumbers};
use crate::scoring::{
    aggregate, Confidence, System, TraitScores, DOMINANT_LIMIT, PLANE_WEIGHTS,
    PYTHAGOREAN_WEIGHTS, SIGNIFICANCE_THRESHOLD,
};

/// One dominant trait with its accumulated score and confidence label.
#[derive(Debug, Clone, Serialize)]
pub struct RankedTrait {
    pub name: &'static str,
    pub score: u32,
    pub confidence: Confidence,
}

/// Dominant positive and negative traits for one weighting system.
#[derive(Debug, Clone, Serialize)]
pub struct TraitReadout {
    pub positive: Vec<RankedTrait>,
    pub negative: Vec<RankedTrait>,
}

/// The two synthesized identity titles.
#[derive(Debug, Clone, Serialize)]
pub struct Identity {
    pub positive: String,
    pub negative: String,
}

/// A complete numerology profile for one name and birth date.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: String,
    pub core: CoreNumbers,
    pub planes: PlaneNumbers,
    pub groups: GroupTotals,
    pub pythagorean_traits: TraitReadout,
    pub plane_traits: TraitReadout,
    pub identity: Identity,
}

fn readout(positive: &TraitScores, negative: &TraitScores, system: System) -> TraitReadout {
    let rank = |scores: &TraitScores| {
        scores
            .significant(SIGNIFICANCE_THRESHOLD)
            .dominant(DOMINANT_LIMIT)
            .into_iter()
            .map(|(name, score)| RankedTrait {
                name,
                score,
                confidence: system.confidence(score),
            })
            .collect()
    };
    TraitReadout {
        positive: rank(positive),
        negative: rank(negative),
    }
}

/// Merge the two systems' dominant lists for one polarity and hand the top
/// traits to the identity synthesizer.
fn identity_title(
    pythagorean: &[RankedTrait],
    planes: &[RankedTrait],
    polarity: Polarity,
) -> String {
    let mut merged = TraitScores::new();
    for ranked in pythagorean.iter().chain(planes) {
        merged.add(ranked.name, ranked.score);
    }
    let top = merged.dominant(identity::TOP_TRAITS);
    identity::synthesize(&top, polarity)
}

impl Profile {
    /// Compute the full profile. Deterministic for any given input pair;
    /// fails only when `birth_date` is not a recognizable date string.
    pub fn compute(name: &str, birth_date: &str) -> Result<Self> {
        let normalized = name::normalize(name);
        debug!(%normalized, "computing profile");

        let core = CoreNumbers {
            life_path: numbers::life_path(birth_date)?,
            expression: numbers::expression(&normalized),
            soul_urge: numbers::soul_urge(&normalized),
            personality: numbers::personality(&normalized),
        };
        let planes = numbers::planes(&normalized);
        let groups = numbers::group_totals(&normalized);
        debug!(?core, ?planes, ?groups, "numbers computed");

        let core_numbers = [
            ("life_path", core.life_path),
            ("expression", core.expression),
            ("soul_urge", core.soul_urge),
            ("personality", core.personality),
        ];
        let (core_positive, core_negative) = aggregate(&core_numbers, PYTHAGOREAN_WEIGHTS);

        // A plane without letters is 0 and has no trait entry anyway, but
        // filtering keeps the aggregation input honest.
        let plane_numbers: Vec<(&'static str, u32)> = [
            ("physical_plane", planes.physical),
            ("mental_plane", planes.mental),
            ("emotional_plane", planes.emotional),
            ("intuitive_plane", planes.intuitive),
        ]
        .into_iter()
        .filter(|(_, number)| *number != 0)
        .collect();
        let (plane_positive, plane_negative) = aggregate(&plane_numbers, PLANE_WEIGHTS);

        let pythagorean_traits = readout(&core_positive, &core_negative, System::Pythagorean);
        let plane_traits = readout(&plane_positive, &plane_negative, System::Planes);

        let identity = Identity {
            positive: identity_title(
                &pythagorean_traits.positive,
                &plane_traits.positive,
                Polarity::Positive,
            ),
            negative: identity_title(
                &pythagorean_traits.negative,
                &plane_traits.negative,
                Polarity::Negative,
            ),
        };

        Ok(Profile {
            name: name.to_string(),
            core,
            planes,
            groups,
            pythagorean_traits,
            plane_traits,
            identity,
        })
    }
}
