//! Shadow and karmic derivations: lessons, hidden passion, subconscious self,
//! balance, karmic debts and challenges.

use crate::numbers::DateParts;
use crate::reduce::{name_tokens, reduce_master, total};
use crate::tables::{letter_value, KARMIC_DEBT_NUMBERS};

/// Occurrences of each value 1..=9 in a letter-value multiset, indexed by value.
fn frequencies(values: &[u32]) -> [u32; 10] {
    let mut counts = [0u32; 10];
    for &v in values {
        if (1..=9).contains(&v) {
            counts[v as usize] += 1;
        }
    }
    counts
}

/// Values 1..=9 absent from the name, ascending.
pub fn karmic_lessons(values: &[u32]) -> Vec<u32> {
    let counts = frequencies(values);
    (1..=9).filter(|&n| counts[n as usize] == 0).collect()
}

/// Most frequent letter value. Ties go to the smallest value; a name without
/// letters has no passion and yields 0.
pub fn hidden_passion(values: &[u32]) -> u32 {
    let counts = frequencies(values);
    let max = counts[1..].iter().copied().max().unwrap_or(0);
    if max == 0 {
        return 0;
    }
    (1..=9).find(|&n| counts[n as usize] == max).unwrap_or(0)
}

pub fn subconscious_self(karmic_lessons: &[u32]) -> u32 {
    9u32.saturating_sub(karmic_lessons.len() as u32)
}

/// Reduced total of the first letter of every name token.
pub fn balance(full_name: &str) -> u32 {
    let initials = total(
        name_tokens(full_name)
            .iter()
            .filter_map(|token| token.chars().next())
            .map(letter_value),
    );
    reduce_master(initials)
}

/// Debt numbers found among `candidates`, in debt-table order.
///
/// Candidates are compared as given. Reduced core numbers never exceed 33 and
/// are never 13, 14, 16 or 19, so in practice only an unreduced day of month
/// can match.
pub fn karmic_debts(candidates: &[u32]) -> Vec<u32> {
    KARMIC_DEBT_NUMBERS
        .iter()
        .copied()
        .filter(|debt| candidates.contains(debt))
        .collect()
}

/// Month/day, day/year and the difference between those two.
pub fn challenges(parts: DateParts) -> [u32; 3] {
    let (day, month, year) = parts.plain();
    let first = month.abs_diff(day);
    let second = day.abs_diff(year);
    [first, second, first.abs_diff(second)]
}
