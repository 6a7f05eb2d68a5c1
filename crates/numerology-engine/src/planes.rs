//! Planes of expression, special letters and the dominant element.

use crate::reduce::is_vowel;
use crate::tables::{letter_value, DEFAULT_VOWEL, ELEMENT_SYMBOLISM};
use crate::types::{Elements, Plane, PlanesOfExpression, SpecialLetters};

/// Count letter-value occurrences per plane.
pub fn planes_of_expression(values: &[u32]) -> PlanesOfExpression {
    values
        .iter()
        .fold(PlanesOfExpression::default(), |mut planes, &v| {
            match Plane::classify(v) {
                Plane::Physical => planes.physical += 1,
                Plane::Mental => planes.mental += 1,
                Plane::Emotional => planes.emotional += 1,
                Plane::Intuitive => planes.intuitive += 1,
            }
            planes
        })
}

/// Cornerstone (first character), first vowel and the cornerstone's plane.
///
/// The cornerstone is the first character as typed, so a leading space or
/// apostrophe is reported as is and classifies as Intuitive.
pub fn special_letters(full_name: &str) -> SpecialLetters {
    let first = full_name.chars().next();
    let first_letter = first
        .map(|c| c.to_uppercase().collect::<String>())
        .unwrap_or_default();
    let first_vowel = full_name
        .to_lowercase()
        .chars()
        .find(|c| is_vowel(*c))
        .unwrap_or(DEFAULT_VOWEL)
        .to_ascii_uppercase();
    let cornerstone_plane = Plane::classify(first.map(letter_value).unwrap_or(0));

    SpecialLetters {
        first_letter,
        first_vowel,
        cornerstone_plane,
    }
}

/// Dominant element keyed on the life path.
pub fn elements(life_path: u32) -> Elements {
    Elements {
        dominant: Plane::classify(life_path),
        key_number: life_path,
        symbolism: ELEMENT_SYMBOLISM.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduce::letter_values;

    #[test]
    fn john_smith_planes() {
        // 1 6 8 5 1 4 9 2 8
        let values: Vec<u32> = letter_values("John Smith").collect();
        let planes = planes_of_expression(&values);
        assert_eq!(
            planes,
            PlanesOfExpression {
                physical: 2,
                mental: 4,
                emotional: 2,
                intuitive: 1,
            }
        );
        let total = planes.physical + planes.mental + planes.emotional + planes.intuitive;
        assert_eq!(total as usize, values.len());
    }

    #[test]
    fn cornerstone_and_first_vowel() {
        let letters = special_letters("john smith");
        assert_eq!(letters.first_letter, "J");
        assert_eq!(letters.first_vowel, 'O');
        assert_eq!(letters.cornerstone_plane, Plane::Mental);
    }

    #[test]
    fn vowelless_name_defaults() {
        let letters = special_letters("Wynn Glyph");
        assert_eq!(letters.first_vowel, 'A');
        // W = 5
        assert_eq!(letters.cornerstone_plane, Plane::Physical);
    }

    #[test]
    fn non_letter_cornerstone_is_intuitive() {
        let letters = special_letters("'Ann");
        assert_eq!(letters.first_letter, "'");
        assert_eq!(letters.cornerstone_plane, Plane::Intuitive);
    }

    #[test]
    fn element_follows_life_path() {
        assert_eq!(elements(3).dominant, Plane::Emotional);
        assert_eq!(elements(22).dominant, Plane::Intuitive);
        assert_eq!(elements(8).key_number, 8);
    }
}
