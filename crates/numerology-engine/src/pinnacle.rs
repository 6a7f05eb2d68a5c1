//! The four pinnacles and their age bands.
//!
//! ```text
//!   age 0 ──── end1 ──── end1+9 ──── end1+18 ────────▶
//!   │ First    │ Second   │ Third      │ Fourth (open)
//! ```
//!
//! `end1 = 36 - life_path`, using the master-preserving life path.

use crate::numbers::DateParts;
use crate::reduce::reduce_master;
use crate::tables::pinnacle_meaning;
use crate::types::{Pinnacle, PinnacleStage};

/// Length of the second and third pinnacles, in years.
pub const PINNACLE_SPAN: i32 = 9;

const PINNACLE_BASE_AGE: i32 = 36;

/// Age at which the first pinnacle ends.
pub fn first_pinnacle_end(life_path: u32) -> i32 {
    PINNACLE_BASE_AGE - life_path as i32
}

/// Pinnacle numbers. Date parts are collapsed to single digits first; the
/// sums themselves keep master numbers.
pub fn pinnacle_numbers(parts: DateParts) -> [u32; 4] {
    let (day, month, year) = parts.plain();
    let first = reduce_master(day + month);
    let second = reduce_master(day + year);
    let third = reduce_master(first + second);
    let fourth = reduce_master(month + year);
    [first, second, third, fourth]
}

pub fn pinnacles(parts: DateParts, life_path: u32, current_age: i32) -> [Pinnacle; 4] {
    let numbers = pinnacle_numbers(parts);
    let end1 = first_pinnacle_end(life_path);
    let bands: [(&str, PinnacleStage, i32, Option<i32>); 4] = [
        ("First Pinnacle", PinnacleStage::First, 0, Some(end1)),
        (
            "Second Pinnacle",
            PinnacleStage::SecondThird,
            end1,
            Some(end1 + PINNACLE_SPAN),
        ),
        (
            "Third Pinnacle",
            PinnacleStage::SecondThird,
            end1 + PINNACLE_SPAN,
            Some(end1 + 2 * PINNACLE_SPAN),
        ),
        (
            "Fourth Pinnacle",
            PinnacleStage::Fourth,
            end1 + 2 * PINNACLE_SPAN,
            None,
        ),
    ];

    std::array::from_fn(|i| {
        let (title, stage, start_age, end_age) = bands[i];
        let mut pinnacle = Pinnacle {
            title: title.to_string(),
            number: numbers[i],
            start_age,
            end_age,
            stage,
            base_meaning: pinnacle_meaning(numbers[i]).to_string(),
            is_current: false,
        };
        pinnacle.is_current = pinnacle.contains_age(current_age);
        pinnacle
    })
}
