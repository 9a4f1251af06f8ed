//! Name normalization and letter classification
//!
//! Splits a name's letters along two independent axes: vowel/consonant (with
//! a position-dependent rule for Y) and the four Planes of Expression.

use crate::letters;

/// Uppercase the name and strip spaces. Other punctuation is kept here and
/// excluded later by the alphabetic filters in the calculators.
pub fn normalize(name: &str) -> String {
    name.to_uppercase().replace(' ', "")
}

fn is_plain_vowel(ch: char) -> bool {
    letters::VOWELS.contains(ch)
}

/// Extract the vowels of a normalized name, in order.
///
/// Y counts as a vowel when it is not the first character and the preceding
/// character is not itself a plain vowel, i.e. Y after a consonant.
pub fn vowels(normalized: &str) -> Vec<char> {
    let chars: Vec<char> = normalized.chars().collect();
    let mut out = Vec::new();
    for (i, &ch) in chars.iter().enumerate() {
        if is_plain_vowel(ch) {
            out.push(ch);
        } else if ch == 'Y' && i > 0 && !is_plain_vowel(chars[i - 1]) {
            out.push(ch);
        }
    }
    out
}

/// Extract the consonants of a normalized name, in order.
///
/// The Y rule is the complement of the vowel rule: Y is a consonant at the
/// start of the name or directly after a plain vowel.
pub fn consonants(normalized: &str) -> Vec<char> {
    let chars: Vec<char> = normalized.chars().collect();
    let mut out = Vec::new();
    for (i, &ch) in chars.iter().enumerate() {
        if !ch.is_alphabetic() || is_plain_vowel(ch) {
            continue;
        }
        if ch == 'Y' {
            if i == 0 || is_plain_vowel(chars[i - 1]) {
                out.push(ch);
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Letters of a normalized name that belong to one plane's letter set,
/// duplicates included. Position never matters for planes.
pub fn plane_letters(normalized: &str, plane_set: &str) -> Vec<char> {
    normalized.chars().filter(|ch| plane_set.contains(*ch)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_uppercases_and_strips_spaces() {
        assert_eq!(normalize("John Michael Smith"), "JOHNMICHAELSMITH");
        assert_eq!(normalize("mary-ann"), "MARY-ANN");
    }

    #[test]
    fn test_vowel_extraction() {
        assert_eq!(vowels("MARIA"), vec!['A', 'I', 'A']);
        assert_eq!(vowels("BCDF"), Vec::<char>::new());
    }

    #[test]
    fn test_y_after_consonant_is_a_vowel() {
        // Y in MARY follows R
        assert_eq!(vowels("MARY"), vec!['A', 'Y']);
        assert!(consonants("MARY") == vec!['M', 'R']);
    }

    #[test]
    fn test_y_at_start_is_a_consonant() {
        assert_eq!(vowels("YOLANDA"), vec!['O', 'A', 'A']);
        assert_eq!(consonants("YOLANDA"), vec!['Y', 'L', 'N', 'D']);
    }

    #[test]
    fn test_y_after_vowel_is_a_consonant() {
        // Y in MAYA follows A
        assert_eq!(vowels("MAYA"), vec!['A', 'A']);
        assert_eq!(consonants("MAYA"), vec!['M', 'Y']);
    }

    #[test]
    fn test_vowels_and_consonants_partition_the_letters() {
        for name in ["JOHNSMITH", "YOLANDA", "MARYANN", "KYLY", "AEIOU", "Y"] {
            let alphabetic = name.chars().filter(|c| c.is_alphabetic()).count();
            assert_eq!(
                vowels(name).len() + consonants(name).len(),
                alphabetic,
                "every letter of {name} must be exactly one of vowel/consonant"
            );
        }
    }

    #[test]
    fn test_non_alphabetic_characters_are_skipped() {
        assert_eq!(consonants("O'BRIEN"), vec!['B', 'R', 'N']);
        assert_eq!(vowels("O'BRIEN"), vec!['O', 'I', 'E']);
    }

    #[test]
    fn test_plane_letters_keep_duplicates() {
        use crate::letters::PHYSICAL_PLANE;
        assert_eq!(plane_letters("EMMDEW", PHYSICAL_PLANE), vec!['E', 'M', 'M', 'D', 'E', 'W']);
        assert_eq!(plane_letters("AIK", PHYSICAL_PLANE), Vec::<char>::new());
    }
}
