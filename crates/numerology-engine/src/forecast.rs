//! Personal cycle forecasts anchored on the evaluation date.
//!
//! All four series use the personal year of the evaluation date's calendar
//! year, including day and week samples that spill into the next year.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::numbers::DateParts;
use crate::reduce::reduce_master;
use crate::tables::cycle_description;
use crate::types::{PersonalYearInfo, VibrationalCycle};

pub const DAY_FORECAST_LEN: usize = 7;
pub const WEEK_FORECAST_LEN: usize = 4;
pub const MONTH_FORECAST_LEN: usize = 6;
pub const YEAR_FORECAST_LEN: usize = 5;

/// Birth day and month (each reduced) plus the reduced calendar year.
pub fn personal_year(birth: DateParts, year: i32) -> u32 {
    reduce_master(
        reduce_master(birth.day) + reduce_master(birth.month) + reduce_master(year.unsigned_abs()),
    )
}

/// Week of the month, 1 for days 1-7, 5 for days 29-31.
pub fn week_of_month(day: u32) -> u32 {
    day.div_ceil(7)
}

fn days_after(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}

fn cycle(label: String, number: u32) -> VibrationalCycle {
    VibrationalCycle {
        label,
        number,
        description: cycle_description(number).to_string(),
    }
}

/// Seven consecutive days starting at `today`, labelled like `"Sat 17"`.
pub fn day_forecast(personal_year: u32, today: NaiveDate) -> [VibrationalCycle; DAY_FORECAST_LEN] {
    std::array::from_fn(|i| {
        let date = days_after(today, i as u64);
        let number = reduce_master(personal_year + date.month() + date.day());
        cycle(date.format("%a %-d").to_string(), number)
    })
}

/// Four samples a week apart starting at `today`, labelled like `"Week 3 of Oct"`.
pub fn week_forecast(personal_year: u32, today: NaiveDate) -> [VibrationalCycle; WEEK_FORECAST_LEN] {
    std::array::from_fn(|i| {
        let date = days_after(today, 7 * i as u64);
        let week = week_of_month(date.day());
        let number = reduce_master(personal_year + date.month() + week);
        cycle(format!("Week {} of {}", week, date.format("%b")), number)
    })
}

/// Six calendar months starting with the current one, labelled by month name.
pub fn month_forecast(
    personal_year: u32,
    today: NaiveDate,
) -> [VibrationalCycle; MONTH_FORECAST_LEN] {
    let first_of_month = today.with_day(1).unwrap_or(today);
    std::array::from_fn(|i| {
        let date = first_of_month
            .checked_add_months(Months::new(i as u32))
            .unwrap_or(first_of_month);
        let number = reduce_master(personal_year + date.month());
        cycle(date.format("%B").to_string(), number)
    })
}

/// Five consecutive personal years starting with the current calendar year.
pub fn year_forecast(birth: DateParts, today: NaiveDate) -> [PersonalYearInfo; YEAR_FORECAST_LEN] {
    std::array::from_fn(|i| {
        let year = today.year() + i as i32;
        let number = personal_year(birth, year);
        PersonalYearInfo {
            year,
            number,
            description: cycle_description(number).to_string(),
        }
    })
}
