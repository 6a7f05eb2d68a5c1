//! Bridge numbers between pairs of core numbers.

use crate::reduce::reduce_plain;
use crate::tables::bridge_description;
use crate::types::BridgeNumber;

/// Distance between two numbers once both are collapsed to a single digit.
pub fn bridge(a: u32, b: u32) -> u32 {
    reduce_plain(a).abs_diff(reduce_plain(b))
}

fn bridge_number(title: &str, a: u32, b: u32) -> BridgeNumber {
    let value = bridge(a, b);
    BridgeNumber {
        title: title.to_string(),
        value,
        description: bridge_description(value).to_string(),
    }
}

/// Life Path to Expression, then Soul Urge to Personality.
pub fn bridge_numbers(
    life_path: u32,
    expression: u32,
    soul_urge: u32,
    personality: u32,
) -> Vec<BridgeNumber> {
    vec![
        bridge_number("Life Path - Expression Bridge", life_path, expression),
        bridge_number("Soul Urge - Personality Bridge", soul_urge, personality),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridge_uses_single_digits() {
        assert_eq!(bridge(3, 8), 5);
        assert_eq!(bridge(8, 3), 5);
        // 11 -> 2
        assert_eq!(bridge(6, 11), 4);
        // 22 -> 4, 33 -> 6
        assert_eq!(bridge(22, 33), 2);
        assert_eq!(bridge(7, 7), 0);
    }

    #[test]
    fn two_titled_bridges() {
        let bridges = bridge_numbers(3, 8, 6, 11);
        assert_eq!(bridges.len(), 2);
        assert_eq!(bridges[0].title, "Life Path - Expression Bridge");
        assert_eq!(bridges[0].value, 5);
        assert_eq!(bridges[0].description, bridge_description(5));
        assert_eq!(bridges[1].title, "Soul Urge - Personality Bridge");
        assert_eq!(bridges[1].value, 4);
    }

    #[test]
    fn aligned_numbers_need_no_bridge() {
        let bridges = bridge_numbers(11, 2, 5, 5);
        assert_eq!(bridges[0].value, 0);
        assert!(bridges[0].description.contains("no bridge needed"));
    }
}
