//! Letter transits.
//!
//! Each name token is read as a repeating cycle in which every letter stays
//! active for as many years as its value. The physical transit walks the
//! first name, the mental transit the middle name (the first name again when
//! there is no middle name), the spiritual transit the last name.

use crate::reduce::{name_tokens, reduce_master};
use crate::tables::{
    letter_value, ESSENCE_DESCRIPTION, MENTAL_TRANSIT_DESCRIPTION, PHYSICAL_TRANSIT_DESCRIPTION,
    SPIRITUAL_TRANSIT_DESCRIPTION,
};
use crate::types::{TransitAtAge, TransitLetter, Transits};

/// Years covered by the transit timeline, starting at the current age.
pub const TIMELINE_YEARS: usize = 10;

/// Placeholder letter for a token without Latin letters.
const NO_LETTER: char = '-';

/// The three tokens walked for transits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitTokens<'a> {
    pub physical: &'a str,
    pub mental: &'a str,
    pub spiritual: &'a str,
}

impl<'a> TransitTokens<'a> {
    pub fn from_name(full_name: &'a str) -> Self {
        let tokens = name_tokens(full_name);
        let first = tokens.first().copied().unwrap_or("");
        let last = tokens.last().copied().unwrap_or("");
        let middle = if tokens.len() > 2 { tokens[1] } else { first };
        Self {
            physical: first,
            mental: middle,
            spiritual: last,
        }
    }
}

/// Letter and value active in `token` at `age`.
///
/// The offset is `age % cycle_length` with a truncating remainder; a negative
/// age matches no letter and falls back to the token's first letter.
pub fn letter_at_age(token: &str, age: i32) -> (char, u32) {
    let letters: Vec<(char, u32)> = token
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| (c.to_ascii_uppercase(), letter_value(c)))
        .collect();
    let Some(&first) = letters.first() else {
        return (NO_LETTER, 0);
    };

    let cycle: i64 = letters.iter().map(|&(_, v)| i64::from(v)).sum();
    let offset = i64::from(age) % cycle;
    let mut start = 0i64;
    for &(letter, value) in &letters {
        let end = start + i64::from(value);
        if offset >= start && offset < end {
            return (letter, value);
        }
        start = end;
    }
    first
}

fn transit_letter(token: &str, age: i32, description: &str) -> TransitLetter {
    let (letter, value) = letter_at_age(token, age);
    TransitLetter {
        letter,
        value,
        description: description.to_string(),
    }
}

pub fn transit_at_age(tokens: TransitTokens<'_>, age: i32) -> TransitAtAge {
    let physical = transit_letter(tokens.physical, age, PHYSICAL_TRANSIT_DESCRIPTION);
    let mental = transit_letter(tokens.mental, age, MENTAL_TRANSIT_DESCRIPTION);
    let spiritual = transit_letter(tokens.spiritual, age, SPIRITUAL_TRANSIT_DESCRIPTION);
    let essence = reduce_master(physical.value + mental.value + spiritual.value);
    TransitAtAge {
        age,
        physical,
        mental,
        spiritual,
        essence,
        essence_description: ESSENCE_DESCRIPTION.to_string(),
    }
}

/// Transit at the current age plus the ten-year timeline starting there.
pub fn transits(full_name: &str, current_age: i32) -> Transits {
    let tokens = TransitTokens::from_name(full_name);
    Transits {
        current: transit_at_age(tokens, current_age),
        timeline: std::array::from_fn(|i| transit_at_age(tokens, current_age + i as i32)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_selection() {
        let t = TransitTokens::from_name("John Smith");
        assert_eq!((t.physical, t.mental, t.spiritual), ("John", "John", "Smith"));

        let t = TransitTokens::from_name("Mary Ann Jane Lee");
        assert_eq!((t.physical, t.mental, t.spiritual), ("Mary", "Ann", "Lee"));

        let t = TransitTokens::from_name("Cher");
        assert_eq!((t.physical, t.mental, t.spiritual), ("Cher", "Cher", "Cher"));
    }

    #[test]
    fn cycle_walk() {
        // J=1 covers offset 0, O=6 covers 1..7, H=8 covers 7..15, N=5 covers 15..20
        assert_eq!(letter_at_age("John", 0), ('J', 1));
        assert_eq!(letter_at_age("John", 1), ('O', 6));
        assert_eq!(letter_at_age("John", 6), ('O', 6));
        assert_eq!(letter_at_age("John", 7), ('H', 8));
        assert_eq!(letter_at_age("John", 19), ('N', 5));
        // cycle length 20 wraps
        assert_eq!(letter_at_age("John", 20), ('J', 1));
        assert_eq!(letter_at_age("John", 36), ('N', 5));
    }

    #[test]
    fn punctuation_is_skipped() {
        assert_eq!(letter_at_age("O'Neil", 0), ('O', 6));
        assert_eq!(letter_at_age("O'Neil", 6), ('N', 5));
    }

    #[test]
    fn letterless_token() {
        assert_eq!(letter_at_age("--", 12), ('-', 0));
    }

    #[test]
    fn negative_age_falls_back_to_first_letter() {
        assert_eq!(letter_at_age("Smith", -3), ('S', 1));
    }

    #[test]
    fn essence_and_timeline() {
        let t = transits("John Smith", 36);
        // Smith: S1 M4 I9 T2 H8, cycle 24, offset 12 -> I
        assert_eq!(t.current.physical.letter, 'N');
        assert_eq!(t.current.mental.letter, 'N');
        assert_eq!(t.current.spiritual.letter, 'I');
        // 5 + 5 + 9 = 19 -> 1
        assert_eq!(t.current.essence, 1);
        assert_eq!(t.timeline.len(), TIMELINE_YEARS);
        assert_eq!(t.timeline[0], t.current);
        assert_eq!(t.timeline[9].age, 45);
    }
}
