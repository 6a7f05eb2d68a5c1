//! Assembly of the full numerology result.
//!
//! [`compute`] is pure: the evaluation date is passed in and read exactly
//! once, so age, transits and every forecast series agree with each other.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::bridge::bridge_numbers;
use crate::numbers::{core_numbers, DateParts};
use crate::forecast::{day_forecast, month_forecast, personal_year, week_forecast, year_forecast};
use crate::karmic::{balance, challenges, hidden_passion, karmic_debts, karmic_lessons, subconscious_self};
use crate::pinnacle::pinnacles;
use crate::planes::{elements, planes_of_expression, special_letters};
use crate::reduce::{is_master, letter_values};
use crate::tables::color_entry;
use crate::transit::transits;
use crate::types::{ColorAnalysis, ColorAssociation, NumerologyResult, Profile, RepeatedNumber};

/// Whole years lived at `today`; negative when the birth date is in the future.
pub fn current_age(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

pub fn color_association(number: u32) -> ColorAssociation {
    let entry = color_entry(number);
    ColorAssociation {
        number,
        color_name: entry.name.to_string(),
        hex: entry.hex.to_string(),
        meaning: entry.meaning.to_string(),
    }
}

/// Values occurring more than once, ascending.
pub fn repeated_core(values: &[u32]) -> Vec<RepeatedNumber> {
    let mut counts: BTreeMap<u32, u32> = BTreeMap::new();
    for &v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .filter(|&(_, frequency)| frequency > 1)
        .map(|(number, frequency)| RepeatedNumber { number, frequency })
        .collect()
}

/// Compute the complete profile. Returns `None` for a blank name.
pub fn compute(profile: &Profile, today: NaiveDate) -> Option<NumerologyResult> {
    let name = profile.full_name.as_str();
    if name.trim().is_empty() {
        warn!("numerology profile requested for a blank name");
        return None;
    }

    let birth = DateParts::from_date(profile.birth_date);
    let age = current_age(profile.birth_date, today);
    let core = core_numbers(name, birth);

    let values: Vec<u32> = letter_values(name).collect();
    let lessons = karmic_lessons(&values);
    let passion = hidden_passion(&values);
    let subconscious = subconscious_self(&lessons);
    let balance = balance(name);
    // The raw day of month is the only candidate that can reach the debt range.
    let debts = karmic_debts(&[
        core.life_path,
        core.expression,
        core.soul_urge,
        core.personality,
        birth.day,
    ]);

    // Like the debt check, the repeated set reads the raw day of month.
    let repeated = repeated_core(&[
        core.life_path,
        birth.day,
        core.expression,
        core.soul_urge,
        core.personality,
        balance,
        passion,
        subconscious,
    ]);

    let year_number = personal_year(birth, today.year());
    let year_forecast = year_forecast(birth, today);

    let result = NumerologyResult {
        life_path: core.life_path,
        birth_day: core.birth_day,
        attitude: core.attitude,
        expression: core.expression,
        soul_urge: core.soul_urge,
        personality: core.personality,
        maturity: core.maturity,
        rational_thought: core.rational_thought,
        challenges: challenges(birth),
        karmic_lessons: lessons,
        karmic_debts: debts,
        hidden_passion: passion,
        subconscious_self: subconscious,
        balance,
        bridge_numbers: bridge_numbers(
            core.life_path,
            core.expression,
            core.soul_urge,
            core.personality,
        ),
        planes_of_expression: planes_of_expression(&values),
        pinnacles: pinnacles(birth, core.life_path, age),
        repeated_core: repeated,
        current_age: age,
        special_letters: special_letters(name),
        elements: elements(core.life_path),
        color_analysis: ColorAnalysis {
            life_path_color: color_association(core.life_path),
            expression_color: color_association(core.expression),
            soul_urge_color: color_association(core.soul_urge),
        },
        transits: transits(name, age),
        personal_year: year_forecast[0].clone(),
        personal_year_forecast: year_forecast,
        personal_month_forecast: month_forecast(year_number, today),
        personal_week_forecast: week_forecast(year_number, today),
        personal_day_forecast: day_forecast(year_number, today),
        has_master_numbers: is_master(core.life_path) || is_master(core.expression),
    };

    debug!(
        life_path = result.life_path,
        expression = result.expression,
        current_age = result.current_age,
        %today,
        "numerology profile computed"
    );
    Some(result)
}

/// Compute from raw form input. Blank or malformed input yields `None`.
pub fn calculate_profile(
    full_name: &str,
    birth_date: &str,
    today: NaiveDate,
) -> Option<NumerologyResult> {
    match Profile::parse(full_name, birth_date) {
        Ok(profile) => compute(&profile, today),
        Err(e) => {
            warn!(error = %e, "profile input rejected");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PinnacleStage;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn age_counts_completed_years() {
        let birth = date(1990, 5, 15);
        assert_eq!(current_age(birth, date(2026, 5, 14)), 35);
        assert_eq!(current_age(birth, date(2026, 5, 15)), 36);
        assert_eq!(current_age(birth, date(2026, 10, 17)), 36);
        assert_eq!(current_age(birth, date(1990, 5, 15)), 0);
        assert_eq!(current_age(birth, date(1989, 1, 1)), -2);
    }

    #[test]
    fn leap_day_birthday_counts_on_march_first() {
        let birth = date(2000, 2, 29);
        assert_eq!(current_age(birth, date(2025, 2, 28)), 24);
        assert_eq!(current_age(birth, date(2025, 3, 1)), 25);
    }

    #[test]
    fn repeated_values_are_sorted() {
        let repeated = repeated_core(&[3, 6, 8, 6, 11, 2, 1, 7]);
        assert_eq!(repeated, vec![RepeatedNumber { number: 6, frequency: 2 }]);
        let repeated = repeated_core(&[9, 1, 9, 1, 1]);
        assert_eq!(
            repeated,
            vec![
                RepeatedNumber { number: 1, frequency: 3 },
                RepeatedNumber { number: 9, frequency: 2 },
            ]
        );
    }

    #[test]
    fn blank_inputs_are_absent() {
        let today = date(2026, 10, 17);
        assert!(calculate_profile("", "1990-05-15", today).is_none());
        assert!(calculate_profile("   ", "1990-05-15", today).is_none());
        assert!(calculate_profile("John Smith", "", today).is_none());
        assert!(calculate_profile("John Smith", "not a date", today).is_none());
        let blank = Profile::new(" ", date(1990, 5, 15));
        assert!(compute(&blank, today).is_none());
    }

    #[test]
    fn john_smith_assembled() {
        let result = calculate_profile("John Smith", "1990-05-15", date(2026, 10, 17)).unwrap();
        assert_eq!(result.life_path, 3);
        assert_eq!(result.current_age, 36);
        assert_eq!(result.karmic_lessons, vec![3, 7]);
        assert!(result.karmic_debts.is_empty());
        assert_eq!(result.hidden_passion, 1);
        assert_eq!(result.subconscious_self, 7);
        assert_eq!(result.balance, 2);
        assert_eq!(result.personal_year, result.personal_year_forecast[0]);
        assert_eq!(result.personal_year.year, 2026);
        assert_eq!(
            result.current_pinnacle().map(|p| p.stage),
            Some(PinnacleStage::SecondThird)
        );
        assert_eq!(result.color_analysis.life_path_color.color_name, "Yellow");
        assert!(!result.has_master_numbers);
    }

    #[test]
    fn repeated_core_reads_raw_day_of_month() {
        let today = date(2026, 10, 17);
        // day 15 stays 15, so it does not pair with soul urge 6
        let result = calculate_profile("John Smith", "1990-05-15", today).unwrap();
        assert_eq!(result.birth_day, 6);
        assert!(result.repeated_core.is_empty());
        // day 6 pairs with soul urge 6; life path is 3 either way
        let result = calculate_profile("John Smith", "1990-05-06", today).unwrap();
        assert_eq!(result.life_path, 3);
        assert_eq!(result.repeated_core, vec![RepeatedNumber { number: 6, frequency: 2 }]);
    }

    #[test]
    fn debt_day_of_month_is_reported() {
        let result = calculate_profile("Ann Lee", "1985-07-16", date(2026, 10, 17)).unwrap();
        assert_eq!(result.karmic_debts, vec![16]);
    }

    #[test]
    fn evaluation_date_is_the_only_clock() {
        let profile = Profile::new("Mary Ann Lee", date(1981, 5, 5));
        let a = compute(&profile, date(2026, 10, 17)).unwrap();
        let b = compute(&profile, date(2026, 10, 17)).unwrap();
        assert_eq!(a, b);
        let later = compute(&profile, date(2027, 10, 17)).unwrap();
        assert_eq!(later.current_age, a.current_age + 1);
        assert_eq!(later.life_path, a.life_path);
    }
}
