//! Digit reduction and letter arithmetic.
//!
//! Two reductions coexist and both are used deliberately:
//! [`reduce_master`] stops at 11, 22 or 33, [`reduce_plain`] always collapses
//! to a single digit. Call sites pick one explicitly.

use crate::tables::{letter_value, MASTER_NUMBERS, VOWELS};

pub fn is_master(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Repeated digit-summing down to a single digit.
///
/// With `keep_master`, the running value is checked against the master
/// numbers before every step, so 29 stops at 11 while 1990 (19, 10, 1) never
/// passes through one.
pub fn reduce(n: u32, keep_master: bool) -> u32 {
    let mut n = n;
    loop {
        if keep_master && is_master(n) {
            return n;
        }
        if n < 10 {
            return n;
        }
        n = digit_sum(n);
    }
}

/// Master-preserving reduction.
pub fn reduce_master(n: u32) -> u32 {
    reduce(n, true)
}

/// Plain reduction to a single digit.
pub fn reduce_plain(n: u32) -> u32 {
    reduce(n, false)
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

/// Values of every Latin letter in `text`, in order.
pub fn letter_values(text: &str) -> impl Iterator<Item = u32> + '_ {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(letter_value)
}

/// Saturating total, so arbitrarily long input stays in range.
pub fn total(values: impl Iterator<Item = u32>) -> u32 {
    values.fold(0u32, u32::saturating_add)
}

/// Unreduced letter total of `text`.
pub fn sum_letters(text: &str) -> u32 {
    total(letter_values(text))
}

/// Unreduced letter total of the vowels in `text`.
pub fn sum_vowels(text: &str) -> u32 {
    total(
        text.chars()
            .filter(|c| c.is_ascii_alphabetic() && is_vowel(*c))
            .map(letter_value),
    )
}

/// Unreduced letter total of the consonants in `text`.
pub fn sum_consonants(text: &str) -> u32 {
    total(
        text.chars()
            .filter(|c| c.is_ascii_alphabetic() && !is_vowel(*c))
            .map(letter_value),
    )
}

/// Whitespace-separated name tokens, ignoring leading and trailing space.
pub fn name_tokens(full_name: &str) -> Vec<&str> {
    full_name.split_whitespace().collect()
}
