//! Input profile and the result record produced by the engine.
//!
//! The result is a plain data record: every field is derived once from a
//! [`Profile`] and an evaluation date, and nothing in it is recomputed on
//! read. All types serialize with serde so that a JSON round trip yields an
//! identical record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Birth dates are accepted in ISO form.
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

// ── Profile ─────────────────────────────────────────────────────────────

/// A person as submitted by the caller. The engine never mutates it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub full_name: String,
    pub birth_date: NaiveDate,
}

impl Profile {
    pub fn new(full_name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            full_name: full_name.into(),
            birth_date,
        }
    }

    /// Build a profile from raw form input.
    pub fn parse(full_name: &str, birth_date: &str) -> EngineResult<Self> {
        if full_name.trim().is_empty() {
            return Err(EngineError::EmptyName);
        }
        let raw_date = birth_date.trim();
        if raw_date.is_empty() {
            return Err(EngineError::EmptyBirthDate);
        }
        let birth_date = NaiveDate::parse_from_str(raw_date, BIRTH_DATE_FORMAT).map_err(|e| {
            EngineError::InvalidBirthDate {
                input: raw_date.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self::new(full_name, birth_date))
    }
}

// ── Planes ──────────────────────────────────────────────────────────────

/// The four planes letter values (and single numbers) classify into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Plane {
    Physical,
    Mental,
    Emotional,
    Intuitive,
}

impl Plane {
    /// Physical {4,5}, Mental {1,8}, Emotional {2,3,6}; everything else,
    /// including 7, 9, master numbers and 0, is Intuitive.
    pub fn classify(value: u32) -> Self {
        match value {
            4 | 5 => Self::Physical,
            1 | 8 => Self::Mental,
            2 | 3 | 6 => Self::Emotional,
            _ => Self::Intuitive,
        }
    }
}

impl std::fmt::Display for Plane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Physical => write!(f, "Physical"),
            Self::Mental => write!(f, "Mental"),
            Self::Emotional => write!(f, "Emotional"),
            Self::Intuitive => write!(f, "Intuitive"),
        }
    }
}

/// Letter-value occurrences per plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanesOfExpression {
    pub physical: u32,
    pub mental: u32,
    pub emotional: u32,
    pub intuitive: u32,
}

// ── Result components ───────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeNumber {
    pub title: String,
    pub value: u32,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorAssociation {
    pub number: u32,
    pub color_name: String,
    pub hex: String,
    pub meaning: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorAnalysis {
    pub life_path_color: ColorAssociation,
    pub expression_color: ColorAssociation,
    pub soul_urge_color: ColorAssociation,
}

/// A core value that occurs more than once among the core numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatedNumber {
    pub number: u32,
    pub frequency: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialLetters {
    pub first_letter: String,
    pub first_vowel: char,
    pub cornerstone_plane: Plane,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elements {
    pub dominant: Plane,
    pub key_number: u32,
    pub symbolism: String,
}

/// Which life stage a pinnacle covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PinnacleStage {
    First,
    #[serde(rename = "Second/Third")]
    SecondThird,
    Fourth,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pinnacle {
    pub title: String,
    pub number: u32,
    pub start_age: i32,
    /// Exclusive upper bound; `None` for the open-ended fourth pinnacle.
    pub end_age: Option<i32>,
    pub stage: PinnacleStage,
    pub base_meaning: String,
    pub is_current: bool,
}

impl Pinnacle {
    pub fn contains_age(&self, age: i32) -> bool {
        age >= self.start_age && self.end_age.map_or(true, |end| age < end)
    }
}

/// The letter active in one name token at a given age.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitLetter {
    /// Uppercase letter, or `-` when the token has no letters.
    pub letter: char,
    pub value: u32,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitAtAge {
    pub age: i32,
    pub physical: TransitLetter,
    pub mental: TransitLetter,
    pub spiritual: TransitLetter,
    pub essence: u32,
    pub essence_description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transits {
    pub current: TransitAtAge,
    pub timeline: [TransitAtAge; 10],
}

/// One labelled entry of a day, week or month forecast.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VibrationalCycle {
    pub label: String,
    pub number: u32,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalYearInfo {
    pub year: i32,
    pub number: u32,
    pub description: String,
}

// ── Result ──────────────────────────────────────────────────────────────

/// Complete numerology profile for one (profile, evaluation date) pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyResult {
    // Core numbers
    pub life_path: u32,
    pub birth_day: u32,
    pub attitude: u32,
    pub expression: u32,
    pub soul_urge: u32,
    pub personality: u32,
    pub maturity: u32,
    pub rational_thought: u32,

    // Lessons and shadow self
    pub challenges: [u32; 3],
    pub karmic_lessons: Vec<u32>,
    pub karmic_debts: Vec<u32>,
    pub hidden_passion: u32,
    pub subconscious_self: u32,
    pub balance: u32,

    pub bridge_numbers: Vec<BridgeNumber>,
    pub planes_of_expression: PlanesOfExpression,
    pub pinnacles: [Pinnacle; 4],
    pub repeated_core: Vec<RepeatedNumber>,
    pub current_age: i32,
    pub special_letters: SpecialLetters,
    pub elements: Elements,
    pub color_analysis: ColorAnalysis,
    pub transits: Transits,

    // Personal cycles
    pub personal_year: PersonalYearInfo,
    pub personal_year_forecast: [PersonalYearInfo; 5],
    pub personal_month_forecast: [VibrationalCycle; 6],
    pub personal_week_forecast: [VibrationalCycle; 4],
    pub personal_day_forecast: [VibrationalCycle; 7],

    pub has_master_numbers: bool,
}

impl NumerologyResult {
    /// The pinnacle whose age range holds the current age, if any.
    pub fn current_pinnacle(&self) -> Option<&Pinnacle> {
        self.pinnacles.iter().find(|p| p.is_current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_profile() {
        let profile = Profile::parse("John Smith", "1990-05-15").unwrap();
        assert_eq!(profile.full_name, "John Smith");
        assert_eq!(
            profile.birth_date,
            NaiveDate::from_ymd_opt(1990, 5, 15).unwrap()
        );
    }

    #[test]
    fn parse_rejects_blank_inputs() {
        assert!(matches!(
            Profile::parse("   ", "1990-05-15"),
            Err(EngineError::EmptyName)
        ));
        assert!(matches!(
            Profile::parse("John", ""),
            Err(EngineError::EmptyBirthDate)
        ));
    }

    #[test]
    fn parse_rejects_malformed_dates() {
        let err = Profile::parse("John", "1990-13-40").unwrap_err();
        assert!(matches!(err, EngineError::InvalidBirthDate { .. }));
        assert!(err.to_string().contains("1990-13-40"));
    }

    #[test]
    fn plane_buckets() {
        assert_eq!(Plane::classify(4), Plane::Physical);
        assert_eq!(Plane::classify(5), Plane::Physical);
        assert_eq!(Plane::classify(1), Plane::Mental);
        assert_eq!(Plane::classify(8), Plane::Mental);
        assert_eq!(Plane::classify(2), Plane::Emotional);
        assert_eq!(Plane::classify(3), Plane::Emotional);
        assert_eq!(Plane::classify(6), Plane::Emotional);
        assert_eq!(Plane::classify(7), Plane::Intuitive);
        assert_eq!(Plane::classify(9), Plane::Intuitive);
        assert_eq!(Plane::classify(11), Plane::Intuitive);
        assert_eq!(Plane::classify(0), Plane::Intuitive);
    }

    #[test]
    fn stage_serializes_with_slash() {
        let json = serde_json::to_string(&PinnacleStage::SecondThird).unwrap();
        assert_eq!(json, "\"Second/Third\"");
    }

    #[test]
    fn open_ended_pinnacle_contains_every_later_age() {
        let p = Pinnacle {
            title: "Fourth Pinnacle".into(),
            number: 5,
            start_age: 45,
            end_age: None,
            stage: PinnacleStage::Fourth,
            base_meaning: String::new(),
            is_current: false,
        };
        assert!(!p.contains_age(44));
        assert!(p.contains_age(45));
        assert!(p.contains_age(120));
    }
}
