//! Core number calculators
//!
//! Each calculator composes the letter tables, the name classifier and the
//! digit reducer into one of the named numerology numbers. Everything here is
//! a pure function; `life_path` is the only fallible operation in the crate.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::letters::{self, letter_value, vowel_value};
use crate::name;
use crate::reduce::{digit_sum, reduce};

/// The four core Pythagorean numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoreNumbers {
    pub life_path: u32,
    pub expression: u32,
    pub soul_urge: u32,
    pub personality: u32,
}

/// The four Planes of Expression numbers. 0 means the name contains no
/// letters of that plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlaneNumbers {
    pub physical: u32,
    pub mental: u32,
    pub emotional: u32,
    pub intuitive: u32,
}

/// Reduced totals for the Creative/Vacillating/Grounded letter groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupTotals {
    pub creative: u32,
    pub vacillating: u32,
    pub grounded: u32,
}

/// Life Path number from a birth date in MM-DD-YYYY or MM/DD/YYYY form.
///
/// Month and day reduce on their own; the year first collapses to its digit
/// sum and that sum reduces. The three reduced parts then sum and reduce once
/// more. The two-stage year handling preserves master numbers reached by the
/// year's digit sum.
pub fn life_path(birth_date: &str) -> Result<u32> {
    let separator = if birth_date.contains('-') {
        '-'
    } else if birth_date.contains('/') {
        '/'
    } else {
        return Err(Error::InvalidDate(birth_date.to_string()));
    };

    let parts: Vec<&str> = birth_date.split(separator).collect();
    if parts.len() != 3 {
        return Err(Error::InvalidDate(birth_date.to_string()));
    }

    let mut fields = [0u32; 3];
    for (field, part) in fields.iter_mut().zip(&parts) {
        *field = part
            .trim()
            .parse()
            .map_err(|_| Error::InvalidDate(birth_date.to_string()))?;
    }
    let [month, day, year] = fields;

    let reduced_month = reduce(month);
    let reduced_day = reduce(day);
    let reduced_year = reduce(digit_sum(year));

    let total = reduced_month + reduced_day + reduced_year;
    debug!(month = reduced_month, day = reduced_day, year = reduced_year, total, "life path parts");
    Ok(reduce(total))
}

/// Expression number: Pythagorean values of every letter in the name.
pub fn expression(normalized: &str) -> u32 {
    let total = normalized
        .chars()
        .filter(|ch| ch.is_alphabetic())
        .map(letter_value)
        .sum();
    reduce(total)
}

/// Soul Urge number: special vowel values of the name's vowels.
pub fn soul_urge(normalized: &str) -> u32 {
    let total = name::vowels(normalized).into_iter().map(vowel_value).sum();
    reduce(total)
}

/// Personality number: Pythagorean values of the name's consonants.
pub fn personality(normalized: &str) -> u32 {
    let total = name::consonants(normalized).into_iter().map(letter_value).sum();
    reduce(total)
}

/// One plane number: Pythagorean values of the plane's letters in the name,
/// or 0 when the name contains none of them. The 0 case never reaches the
/// reducer.
fn plane_number(normalized: &str, plane_set: &str) -> u32 {
    let plane_letters = name::plane_letters(normalized, plane_set);
    if plane_letters.is_empty() {
        return 0;
    }
    reduce(plane_letters.into_iter().map(letter_value).sum())
}

/// All four plane numbers for a normalized name.
pub fn planes(normalized: &str) -> PlaneNumbers {
    PlaneNumbers {
        physical: plane_number(normalized, letters::PHYSICAL_PLANE),
        mental: plane_number(normalized, letters::MENTAL_PLANE),
        emotional: plane_number(normalized, letters::EMOTIONAL_PLANE),
        intuitive: plane_number(normalized, letters::INTUITIVE_PLANE),
    }
}

/// Reduced Creative/Vacillating/Grounded totals, summed straight off the
/// normalized name rather than from pre-extracted letter lists.
pub fn group_totals(normalized: &str) -> GroupTotals {
    let total_for = |group: &str| {
        reduce(
            normalized
                .chars()
                .filter(|ch| group.contains(*ch))
                .map(letter_value)
                .sum(),
        )
    };
    GroupTotals {
        creative: total_for(letters::CREATIVE),
        vacillating: total_for(letters::VACILLATING),
        grounded: total_for(letters::GROUNDED),
    }
}
