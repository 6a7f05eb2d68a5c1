//! Property tests over arbitrary names, birth dates and evaluation dates.

use chrono::NaiveDate;
use numerology_engine::numbers::DateParts;
use numerology_engine::pinnacle::pinnacles;
use numerology_engine::reduce::letter_values;
use numerology_engine::{compute, reduce_master, reduce_plain, sum_letters, NumerologyResult, Profile};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2100, 1u32..=12, 1u32..=31).prop_map(|(y, m, d)| {
        (1..=d)
            .rev()
            .find_map(|day| NaiveDate::from_ymd_opt(y, m, day))
            .unwrap()
    })
}

fn arb_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z'-]{0,9}( [A-Za-z][A-Za-z'-]{0,9}){0,3}"
}

fn arb_result() -> impl Strategy<Value = NumerologyResult> {
    (arb_name(), arb_date(), arb_date()).prop_map(|(name, birth, today)| {
        compute(&Profile::new(name, birth), today).expect("non-blank name computes")
    })
}

fn is_core_value(n: u32) -> bool {
    (1..=9).contains(&n) || [11, 22, 33].contains(&n)
}

// ---------------------------------------------------------------------------
// Reduction
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn reduction_is_idempotent(n in any::<u32>()) {
        prop_assert_eq!(reduce_master(reduce_master(n)), reduce_master(n));
        prop_assert_eq!(reduce_plain(reduce_plain(n)), reduce_plain(n));
    }

    #[test]
    fn small_numbers_reduce_to_core_values(n in 1u32..100) {
        prop_assert!(is_core_value(reduce_master(n)));
        prop_assert!((1..=9).contains(&reduce_plain(n)));
    }

    #[test]
    fn plain_reduction_is_the_digital_root(n in 1u32..1_000_000) {
        prop_assert_eq!(reduce_plain(n), 1 + (n - 1) % 9);
    }

    #[test]
    fn expression_total_agrees_with_plain_reduction(name in arb_name()) {
        let total = sum_letters(&name);
        prop_assert_eq!(reduce_plain(reduce_master(total)), reduce_plain(total));
    }
}

// ---------------------------------------------------------------------------
// Result invariants
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn core_numbers_are_digits_or_masters(result in arb_result()) {
        prop_assert!(is_core_value(result.life_path));
        prop_assert!(is_core_value(result.birth_day));
        prop_assert!(is_core_value(result.attitude));
        prop_assert!(is_core_value(result.expression));
        prop_assert!(is_core_value(result.personality) || result.personality == 0);
        prop_assert!(is_core_value(result.soul_urge) || result.soul_urge == 0);
        for c in result.challenges {
            prop_assert!(c <= 8);
        }
        for b in &result.bridge_numbers {
            prop_assert!(b.value <= 9);
        }
    }

    #[test]
    fn lessons_complement_present_values(name in arb_name(), birth in arb_date()) {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let result = compute(&Profile::new(name.clone(), birth), today).unwrap();
        let present: Vec<u32> = letter_values(&name).collect();
        for n in 1..=9u32 {
            prop_assert_ne!(result.karmic_lessons.contains(&n), present.contains(&n));
        }
        prop_assert_eq!(result.subconscious_self as usize, 9 - result.karmic_lessons.len());
    }

    #[test]
    fn planes_count_every_letter(name in arb_name()) {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let birth = NaiveDate::from_ymd_opt(1990, 5, 15).unwrap();
        let result = compute(&Profile::new(name.clone(), birth), today).unwrap();
        let p = result.planes_of_expression;
        prop_assert_eq!(
            (p.physical + p.mental + p.emotional + p.intuitive) as usize,
            letter_values(&name).count()
        );
    }

    #[test]
    fn pinnacle_bands_are_contiguous(birth in arb_date(), age in 0i32..150) {
        let parts = DateParts::from_date(birth);
        let life_path = numerology_engine::numbers::life_path(parts);
        let ps = pinnacles(parts, life_path, age);
        prop_assert_eq!(ps[0].start_age, 0);
        for i in 0..3 {
            prop_assert_eq!(ps[i].end_age, Some(ps[i + 1].start_age));
        }
        prop_assert_eq!(ps[3].end_age, None);
        prop_assert_eq!(ps.iter().filter(|p| p.is_current).count(), 1);
    }

    #[test]
    fn forecast_series_have_fixed_lengths(result in arb_result()) {
        prop_assert_eq!(result.personal_day_forecast.len(), 7);
        prop_assert_eq!(result.personal_week_forecast.len(), 4);
        prop_assert_eq!(result.personal_month_forecast.len(), 6);
        prop_assert_eq!(result.personal_year_forecast.len(), 5);
        prop_assert_eq!(result.transits.timeline.len(), 10);
        prop_assert_eq!(&result.personal_year, &result.personal_year_forecast[0]);
        prop_assert_eq!(&result.transits.timeline[0], &result.transits.current);
    }

    #[test]
    fn results_round_trip_through_json(result in arb_result()) {
        let json = serde_json::to_string(&result).unwrap();
        let restored: NumerologyResult = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(restored, result);
    }

    #[test]
    fn compute_is_deterministic(name in arb_name(), birth in arb_date(), today in arb_date()) {
        let profile = Profile::new(name, birth);
        prop_assert_eq!(compute(&profile, today), compute(&profile, today));
    }
}
