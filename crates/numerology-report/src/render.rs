//! Layout of the manuscript pages.

use numerology_engine::types::BIRTH_DATE_FORMAT;
use numerology_engine::{ColorAssociation, NumerologyResult, Pinnacle, Profile};

use crate::manuscript::{Manuscript, Page};

const NONE: &str = "None";

/// Build the manuscript for a computed profile. Inputs are only read.
pub fn render_manuscript(result: &NumerologyResult, profile: &Profile) -> Manuscript {
    Manuscript {
        cover: cover(profile),
        pages: vec![
            archetypes(result),
            potential(result),
            chromatic(result),
            architecture(result),
            seasons(result),
            oracle(result),
        ],
    }
}

/// `First_Last_Soul_Manuscript.md`
pub fn file_name(profile: &Profile) -> String {
    let stem = profile.full_name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{stem}_Soul_Manuscript.md")
}

fn cover(profile: &Profile) -> Page {
    Page::new("Soul Manuscript")
        .subheading("Established in the sacred geometry of numbers")
        .row("Vibrational analysis of", profile.full_name.trim().to_uppercase())
        .row(
            "Arrival frequency",
            profile.birth_date.format(BIRTH_DATE_FORMAT),
        )
        .paragraph("Following the Pythagorean lineage.")
}

fn archetypes(r: &NumerologyResult) -> Page {
    Page::new("I. Universal Archetypes")
        .subheading("Philosophical Foundations")
        .row("1. Numerology Intro", "The bridge between the seen and the unseen.")
        .row(
            "2. Number Symbolism",
            "Numbers as qualities of energy, not just quantities.",
        )
        .row(
            "3. Pythagorean Wisdom",
            "Universal principles of harmony and the Monad.",
        )
        .row_with_note(
            "4. Soul Key",
            r.elements.key_number,
            "The primary root of your specific frequency.",
        )
        .subheading("The Core Signature")
        .row_with_note(
            "5. Life Path",
            r.life_path,
            "The road you travel and your ultimate destiny.",
        )
        .row_with_note(
            "8. Expression",
            r.expression,
            "The signature of your outward presence and natural capabilities.",
        )
        .row_with_note(
            "9. Soul Urge",
            r.soul_urge,
            "The inner motivation that satisfies your heart.",
        )
        .row_with_note(
            "10. Personality",
            r.personality,
            "The outer persona and social vibration.",
        )
}

fn potential(r: &NumerologyResult) -> Page {
    Page::new("II. Manifested Potential")
        .subheading("Individual Capabilities")
        .row_with_note(
            "6. Birth Day talent",
            r.birth_day,
            "A specific innate tool given at birth.",
        )
        .row_with_note(
            "7. Attitude",
            r.attitude,
            "How you instinctively approach the world.",
        )
        .row_with_note(
            "17. Maturity",
            r.maturity,
            "The focus of your later life fulfillment.",
        )
        .row_with_note(
            "18. Rational Thought",
            r.rational_thought,
            "How you process data and reach logic.",
        )
        .row_with_note(
            "15. Balance",
            r.balance,
            "Your stability during emotional crises.",
        )
        .subheading("Evolutionary Hurdles")
        .row_with_note(
            "11. Challenges",
            join(&r.challenges),
            "Specific obstacles for ego refinement.",
        )
        .row_with_note(
            "12. Karmic Lessons",
            join_or_none(&r.karmic_lessons),
            "Missing frequencies requiring integration.",
        )
        .row_with_note(
            "16. Karmic Debt",
            join_or_none(&r.karmic_debts),
            "Historical vibrational obligations.",
        )
        .row_with_note(
            "13. Hidden Passion",
            r.hidden_passion,
            "A concentrated talent pushing you to excel.",
        )
        .row_with_note(
            "14. Subconscious Self",
            r.subconscious_self,
            "Instinctual response to sudden changes.",
        )
}

fn color_value(color: &ColorAssociation) -> String {
    format!("{} ({})", color.color_name.to_uppercase(), color.hex)
}

fn chromatic(r: &NumerologyResult) -> Page {
    let colors = &r.color_analysis;
    Page::new("III. Chromatic Resonance")
        .row_with_note(
            "25. Life Path Color",
            color_value(&colors.life_path_color),
            colors.life_path_color.meaning.as_str(),
        )
        .row_with_note(
            "26. Expression Color",
            color_value(&colors.expression_color),
            colors.expression_color.meaning.as_str(),
        )
        .row_with_note(
            "27. Soul Urge Color",
            color_value(&colors.soul_urge_color),
            colors.soul_urge_color.meaning.as_str(),
        )
}

fn architecture(r: &NumerologyResult) -> Page {
    let repeated = if r.repeated_core.is_empty() {
        NONE.to_string()
    } else {
        r.repeated_core
            .iter()
            .map(|rep| format!("{}(x{})", rep.number, rep.frequency))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let planes = r.planes_of_expression;
    let letters = &r.special_letters;

    let mut page = Page::new("IV. Internal Architecture")
        .subheading("Vibrational Harmonics")
        .row_with_note(
            "19. Elements",
            r.elements.dominant,
            "Your primary plane of manifestation.",
        )
        .row_with_note(
            "20. The Cipher",
            "Infinite Potential",
            "The Zero acts as an amplifier of your core.",
        )
        .row_with_note(
            "24. Repeated Freq",
            repeated,
            "Intense focal points in your profile.",
        );
    for bridge in &r.bridge_numbers {
        page = page.row_with_note(
            format!("21. {}", bridge.title),
            bridge.value,
            bridge.description.as_str(),
        );
    }
    page.subheading("Planes of Expression")
        .row("Physical Plane", planes.physical)
        .row("Mental Plane", planes.mental)
        .row("Emotional Plane", planes.emotional)
        .row("Intuitive Plane", planes.intuitive)
        .subheading("Special Triggers")
        .row_with_note(
            "23. Cornerstone",
            letters.first_letter.as_str(),
            format!(
                "How you start projects and handle opportunities ({} plane).",
                letters.cornerstone_plane
            ),
        )
        .row_with_note(
            "23. First Vowel",
            letters.first_vowel,
            "Your first emotional reaction to life events.",
        )
}

fn pinnacle_label(p: &Pinnacle) -> String {
    let marker = if p.is_current { " [current]" } else { "" };
    match p.end_age {
        Some(end) => format!("{} ({}-{}){marker}", p.title, p.start_age, end),
        None => format!("{} ({}+){marker}", p.title, p.start_age),
    }
}

fn seasons(r: &NumerologyResult) -> Page {
    let mut page = Page::new("V. Prophetic Seasons").subheading("Pinnacle Peaks");
    for p in &r.pinnacles {
        page = page.row_with_note(
            pinnacle_label(p),
            format!("Frequency: {}", p.number),
            p.base_meaning.as_str(),
        );
    }

    let current = &r.transits.current;
    page.subheading("Temporal Transits (Current Essence)")
        .row_with_note(
            "Physical Transit",
            current.physical.letter,
            current.physical.description.as_str(),
        )
        .row_with_note(
            "Mental Transit",
            current.mental.letter,
            current.mental.description.as_str(),
        )
        .row_with_note(
            "Spiritual Transit",
            current.spiritual.letter,
            current.spiritual.description.as_str(),
        )
        .row_with_note(
            "Year Essence",
            current.essence,
            "The collective vibration currently governing your path.",
        )
}

fn oracle(r: &NumerologyResult) -> Page {
    let mut page = Page::new("VI. The Oracle Scroll").subheading("Visionary 5-Year Forecast");
    for year in &r.personal_year_forecast {
        page = page.row_with_note(
            format!("Year {}", year.year),
            format!("Personal Year {}", year.number),
            year.description.as_str(),
        );
    }
    page = page.subheading("Personal Month Cycles (6-Month Horizon)");
    for month in &r.personal_month_forecast {
        page = page.row_with_note(month.label.as_str(), month.number, month.description.as_str());
    }
    page
}

fn join(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_or_none(values: &[u32]) -> String {
    if values.is_empty() {
        NONE.to_string()
    } else {
        join(values)
    }
}
