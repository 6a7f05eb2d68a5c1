//! Fixed lookup tables: the Pythagorean square, color associations, and the
//! meaning sentences attached to pinnacles, bridges and personal cycles.
//!
//! Every lookup is total: keys outside a table resolve to a defined default.

use crate::reduce::reduce_plain;

/// Numbers left unreduced wherever master preservation applies.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Unreduced values that mark a karmic debt.
pub const KARMIC_DEBT_NUMBERS: [u32; 4] = [13, 14, 16, 19];

/// Vowels used for the soul urge and first-vowel derivations.
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Vowel reported when a name contains none.
pub const DEFAULT_VOWEL: char = 'a';

/// Letter values `a..=z` on the Pythagorean square.
///
/// ```text
///   1 2 3 4 5 6 7 8 9
///   A B C D E F G H I
///   J K L M N O P Q R
///   S T U V W X Y Z
/// ```
const PYTHAGOREAN_SQUARE: [u32; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, // a..i
    1, 2, 3, 4, 5, 6, 7, 8, 9, // j..r
    1, 2, 3, 4, 5, 6, 7, 8, // s..z
];

/// Value of a Latin letter (case-insensitive). Anything else is worth 0.
pub fn letter_value(c: char) -> u32 {
    if c.is_ascii_alphabetic() {
        PYTHAGOREAN_SQUARE[(c.to_ascii_lowercase() as u8 - b'a') as usize]
    } else {
        0
    }
}

// ── Colors ──────────────────────────────────────────────────────────────

/// One row of the color table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorEntry {
    pub name: &'static str,
    pub hex: &'static str,
    pub meaning: &'static str,
}

const COLORS: [(u32, ColorEntry); 11] = [
    (1, ColorEntry { name: "Red", hex: "#ef4444", meaning: "Pioneering energy, courage, and physical vitality." }),
    (2, ColorEntry { name: "Orange", hex: "#f97316", meaning: "Sensitivity, partnership, and emotional balance." }),
    (3, ColorEntry { name: "Yellow", hex: "#eab308", meaning: "Joy, creative expression, and social sunshine." }),
    (4, ColorEntry { name: "Green", hex: "#22c55e", meaning: "Stability, growth, and practical foundations." }),
    (5, ColorEntry { name: "Blue", hex: "#3b82f6", meaning: "Freedom, curiosity, and versatile communication." }),
    (6, ColorEntry { name: "Indigo", hex: "#6366f1", meaning: "Service, domestic harmony, and nurturing love." }),
    (7, ColorEntry { name: "Violet", hex: "#a855f7", meaning: "Spiritual depth, analysis, and inner wisdom." }),
    (8, ColorEntry { name: "Rose/Beige", hex: "#ec4899", meaning: "Material power, efficiency, and manifestation." }),
    (9, ColorEntry { name: "Gold/White", hex: "#fbbf24", meaning: "Universal love, compassion, and completion." }),
    (11, ColorEntry { name: "Silver", hex: "#cbd5e1", meaning: "Intuitive illumination and visionary reach." }),
    (22, ColorEntry { name: "Deep Gold", hex: "#d97706", meaning: "Master architectural manifesting power." }),
];

/// Neutral color for numbers without an entry (33, 0, ...).
pub const DEFAULT_COLOR: ColorEntry = ColorEntry {
    name: "Clear",
    hex: "#ffffff",
    meaning: "Pure potential.",
};

pub fn color_entry(number: u32) -> ColorEntry {
    COLORS
        .iter()
        .find(|(key, _)| *key == number)
        .map(|(_, entry)| *entry)
        .unwrap_or(DEFAULT_COLOR)
}

// ── Personal cycles ─────────────────────────────────────────────────────

const CYCLE_DESCRIPTIONS: [&str; 9] = [
    "New beginnings, seeds of action.",
    "Cooperation, waiting, and tact.",
    "Creative joy and social flow.",
    "Discipline, work, and foundations.",
    "Change, freedom, and motion.",
    "Duty, family, and responsibility.",
    "Refinement, study, and solitude.",
    "Harvest, power, and organization.",
    "Release, endings, and completion.",
];

const RESTING_CYCLE: &str = "A pause between cycles.";

/// Description of a day/week/month/year cycle number.
///
/// The table only covers 1–9; a master number reads as its root digit.
pub fn cycle_description(number: u32) -> &'static str {
    match number {
        1..=9 => CYCLE_DESCRIPTIONS[(number - 1) as usize],
        0 => RESTING_CYCLE,
        _ => cycle_description(reduce_plain(number)),
    }
}

// ── Pinnacles ───────────────────────────────────────────────────────────

const PINNACLE_MEANINGS: [(u32, &str); 11] = [
    (1, "A time of leadership and independence. Standing on your own."),
    (2, "Harmony through partnership and diplomacy. Slow progress."),
    (3, "Creative expansion and social popularity. Joyful expression."),
    (4, "Hard work, system, and building solid foundations."),
    (5, "A whirlwind of change, freedom, and travel."),
    (6, "Focus on family, home, and community responsibility."),
    (7, "Introspection, study, and spiritual refinement."),
    (8, "Material success, power, and professional achievement."),
    (9, "Humanitarianism, compassion, and universal wisdom."),
    (11, "Spiritual illumination and intuitive breakthroughs."),
    (22, "Master building and manifesting large-scale projects."),
];

pub const DEFAULT_PINNACLE_MEANING: &str = "Peak achievement.";

pub fn pinnacle_meaning(number: u32) -> &'static str {
    PINNACLE_MEANINGS
        .iter()
        .find(|(key, _)| *key == number)
        .map(|(_, meaning)| *meaning)
        .unwrap_or(DEFAULT_PINNACLE_MEANING)
}

// ── Bridges ─────────────────────────────────────────────────────────────

const BRIDGE_DESCRIPTIONS: [&str; 10] = [
    "Natural alignment; no bridge needed.",
    "Bridge by being more independent and decisive.",
    "Bridge by using tact, diplomacy, and cooperation.",
    "Bridge through creative joy and social interaction.",
    "Bridge through discipline and a practical approach.",
    "Bridge by embracing change and versatility.",
    "Bridge through responsibility and nurturing love.",
    "Bridge through introspection and spiritual seeking.",
    "Bridge by focusing on efficiency and material goals.",
    "Bridge through compassion and humanitarianism.",
];

pub const DEFAULT_BRIDGE_DESCRIPTION: &str = "Harmonize these energies with conscious effort.";

pub fn bridge_description(value: u32) -> &'static str {
    BRIDGE_DESCRIPTIONS
        .get(value as usize)
        .copied()
        .unwrap_or(DEFAULT_BRIDGE_DESCRIPTION)
}

// ── Fixed captions ──────────────────────────────────────────────────────

pub const PHYSICAL_TRANSIT_DESCRIPTION: &str = "Physical movement.";
pub const MENTAL_TRANSIT_DESCRIPTION: &str = "Mental focus.";
pub const SPIRITUAL_TRANSIT_DESCRIPTION: &str = "Spiritual resonance.";
pub const ESSENCE_DESCRIPTION: &str = "The overarching theme of your year.";
pub const ELEMENT_SYMBOLISM: &str = "Manifesting reality.";
