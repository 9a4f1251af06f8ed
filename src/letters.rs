//! Static letter tables for the Pythagorean system
//!
//! Every table here is a process-wide constant. The core pipeline never
//! mutates them, so they are safe to share across any number of profile
//! computations.

/// Pythagorean cipher: A-Z map onto 1-9, repeating every nine letters.
const PYTHAGOREAN: [u32; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, // A-I
    1, 2, 3, 4, 5, 6, 7, 8, 9, // J-R
    1, 2, 3, 4, 5, 6, 7, 8, // S-Z
];

/// Numerological value of a single letter.
///
/// Non-alphabetic characters map to 0 so they drop out of any sum. Callers
/// additionally filter to alphabetic characters, but the 0 default keeps the
/// lookup total over all of `char`.
pub fn letter_value(ch: char) -> u32 {
    let upper = ch.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        PYTHAGOREAN[(upper as u8 - b'A') as usize]
    } else {
        0
    }
}

/// Special vowel values used only for the Soul Urge number.
pub fn vowel_value(ch: char) -> u32 {
    match ch.to_ascii_uppercase() {
        'A' => 1,
        'E' => 5,
        'I' => 9,
        'O' => 6,
        'U' => 3,
        'Y' => 7,
        _ => 0,
    }
}

/// The plain vowels. Y is handled positionally by the classifier.
pub const VOWELS: &str = "AEIOU";

/// Planes of Expression letter sets.
pub const PHYSICAL_PLANE: &str = "EWDM";
pub const MENTAL_PLANE: &str = "AHJNPGL";
pub const EMOTIONAL_PLANE: &str = "IORZSTXB";
pub const INTUITIVE_PLANE: &str = "KFQUYCV";

/// Creative/Vacillating/Grounded groups, the second classification axis.
/// Together the three sets partition A-Z.
pub const CREATIVE: &str = "EAIORZK";
pub const VACILLATING: &str = "WHJNPBSTXFQUY";
pub const GROUNDED: &str = "DMGLCV";
