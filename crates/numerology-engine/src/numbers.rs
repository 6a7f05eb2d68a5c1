//! Core numbers derived from the birth date and the full name.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::reduce::{name_tokens, reduce_master, reduce_plain, sum_consonants, sum_letters, sum_vowels};

/// Raw day, month and year of a date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateParts {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

impl DateParts {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            day: date.day(),
            month: date.month(),
            year: date.year().unsigned_abs(),
        }
    }

    /// Day, month and year each collapsed to one digit, masters not kept.
    pub fn plain(&self) -> (u32, u32, u32) {
        (
            reduce_plain(self.day),
            reduce_plain(self.month),
            reduce_plain(self.year),
        )
    }
}

/// The eight core numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoreNumbers {
    pub life_path: u32,
    pub birth_day: u32,
    pub attitude: u32,
    pub expression: u32,
    pub soul_urge: u32,
    pub personality: u32,
    pub maturity: u32,
    pub rational_thought: u32,
}

/// Each date component is reduced (keeping masters) before summing.
pub fn life_path(parts: DateParts) -> u32 {
    reduce_master(reduce_master(parts.day) + reduce_master(parts.month) + reduce_master(parts.year))
}

pub fn core_numbers(full_name: &str, parts: DateParts) -> CoreNumbers {
    let life_path = life_path(parts);
    let expression = reduce_master(sum_letters(full_name));
    let first_name_sum = name_tokens(full_name)
        .first()
        .map(|first| sum_letters(first))
        .unwrap_or(0);

    CoreNumbers {
        life_path,
        birth_day: reduce_master(parts.day),
        attitude: reduce_master(parts.day + parts.month),
        expression,
        soul_urge: reduce_master(sum_vowels(full_name)),
        personality: reduce_master(sum_consonants(full_name)),
        maturity: reduce_master(life_path + expression),
        rational_thought: reduce_master(reduce_master(first_name_sum) + parts.day),
    }
}
