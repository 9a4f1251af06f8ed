//! # Numerist
//!
//! Pythagorean numerology profiles from a name and a birth date.
//!
//! The pipeline is a sequence of pure functions over static tables: letters
//! map to numbers, numbers reduce to single digits (master numbers 11/22/33
//! excepted), the reduced numbers fan out into weighted personality trait
//! scores, and the dominant traits collapse into a pair of identity titles.
//!
//! ## Modules
//!
//! - `letters` - Static letter value tables and category letter sets
//! - `reduce` - Digit reduction with master number preservation
//! - `name` - Name normalization and vowel/consonant/plane classification
//! - `numbers` - The named number calculators (Life Path, Expression, ...)
//! - `scoring` - Trait tables, weighted aggregation, filtering and ranking
//! - `identity` - Ordered combination tables and title synthesis
//! - `profile` - One-call orchestration of the whole pipeline
//! - `report` - Terminal report rendering
pub mod error;
pub mod identity;
pub mod letters;
pub mod name;
pub mod numbers;
pub mod profile;
pub mod reduce;
pub mod report;
pub mod scoring;

pub use error::{Error, Result};
pub use profile::Profile;
