//! # Validator Tests
//!
//! This module contains unit tests for the food-relevance gate, covering the
//! permissive default, the keyword precedence rules, and the exception table.

use labelscan::validator::validate;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_realistic_label_text() {
        let inputs = [
            "Enriched wheat flour, water, yeast, salt, soybean oil",
            "Skim milk, cream, sugar, carrageenan",
            "Rolled oats, honey, almonds, dried cranberries",
        ];
        for input in inputs {
            let result = validate(input);
            assert!(result.is_valid, "expected {:?} to validate", input);
            assert!(result.reason.is_none());
        }
    }

    #[test]
    fn test_additive_heavy_list_is_still_food() {
        // Reads like a chemistry set, but every name is a food additive.
        let result = validate(
            "aspartame, acesulfame potassium, sodium nitrite, bht, polysorbate 80",
        );
        assert!(result.is_valid);
    }

    #[test]
    fn test_rejects_cleaning_product() {
        let result = validate("bleach concentrate, use in well-ventilated area");
        assert!(!result.is_valid);
        let reason = result.reason.unwrap();
        assert!(reason.contains("bleach"));
        assert!(reason.contains("non-food item"));
    }

    #[test]
    fn test_rejects_cosmetics_and_automotive() {
        for (input, keyword) in [
            ("long-wear lipstick, matte finish", "lipstick"),
            ("nail polish remover pads", "nail polish"),
            ("engine antifreeze, ethylene glycol", "antifreeze"),
        ] {
            let result = validate(input);
            assert!(!result.is_valid, "expected {:?} to be rejected", input);
            assert!(result.reason.unwrap().contains(keyword));
        }
    }

    #[test]
    fn test_motor_oil_slips_past_the_gate() {
        // "oil" is a food keyword, so motor oil validates. The gate is
        // deliberately permissive; downstream classification still treats
        // unfamiliar tokens conservatively.
        assert!(validate("synthetic motor oil 5w-30").is_valid);
    }

    #[test]
    fn test_minimum_length_guard() {
        for input in ["", "hi", "\t\n "] {
            let result = validate(input);
            assert!(!result.is_valid);
            assert_eq!(
                result.reason.as_deref(),
                Some("Input too short. Please enter a valid ingredient list.")
            );
        }

        // Three characters is enough to reach the keyword checks.
        assert!(validate("soy").is_valid);
    }

    #[test]
    fn test_length_guard_counts_characters_not_bytes() {
        // Two characters even though the UTF-8 encoding is longer.
        let result = validate("œu");
        assert!(!result.is_valid);
    }

    #[test]
    fn test_food_keyword_beats_non_food_keyword() {
        // "toothpaste" would reject, but "baking soda, vinegar" leads with a
        // food keyword and short-circuits first.
        let result = validate("baking soda, vinegar, toothpaste whitener");
        assert!(result.is_valid);
    }

    #[test]
    fn test_exception_table_rescues_battery_acid() {
        assert!(!validate("rechargeable battery cells").is_valid);
        assert!(validate("battery acid electrolyte").is_valid);
    }

    #[test]
    fn test_unfamiliar_ingredients_default_to_food() {
        // Neither keyword set knows these, so the gate stays open.
        let result = validate("jackfruit, lucuma, camu camu");
        assert!(result.is_valid);
    }

    #[test]
    fn test_case_insensitive_matching() {
        assert!(!validate("LAUNDRY DETERGENT PODS").is_valid);
        assert!(validate("SUGAR, COCOA, MILK SOLIDS").is_valid);
    }
}
