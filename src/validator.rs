//! # Food Input Validation
//!
//! This module decides whether free text looks like a food ingredient list
//! before any parsing happens. The policy is deliberately permissive: unknown
//! input is treated as food, and only text that explicitly mentions a
//! non-edible product category (cleaning agents, cosmetics, electronics,
//! tools, and so on) is rejected.
//!
//! ## Features
//!
//! - Food keyword short-circuit: chemical additive names count as food, so
//!   "monosodium glutamate" is never mistaken for a non-food item
//! - Explicit non-food keyword scan with a per-keyword exception table
//! - Minimum length guard for junk input
//! - Pure and deterministic; never panics
//!
//! ## Usage
//!
//! ```rust
//! use labelscan::validator::validate;
//!
//! assert!(validate("sugar, water, citric acid").is_valid);
//! assert!(!validate("laundry detergent").is_valid);
//! ```

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

lazy_static! {
    /// Keywords that explicitly mark non-edible products
    ///
    /// Only unambiguous matches belong here; chemical names, additives, and
    /// preservatives are food ingredients and must never be listed.
    static ref NON_FOOD_KEYWORDS: Vec<&'static str> = vec![
        // Household cleaning products
        "detergent", "bleach", "disinfectant", "sanitizer", "floor cleaner", "toilet cleaner",
        // Personal care (non-edible)
        "shampoo", "conditioner", "body wash", "hand soap", "face wash",
        "lipstick", "mascara", "foundation", "nail polish", "perfume", "cologne",
        "deodorant", "antiperspirant", "toothpaste", "mouthwash", "dental floss",
        // Electronics
        "battery", "lithium-ion", "rechargeable battery", "charger", "power adapter",
        "electronic device", "computer", "laptop", "smartphone", "tablet device",
        // Textiles and clothing
        "polyester fabric", "cotton fabric", "textile", "machine washable", "tumble dry",
        "clothing item", "garment",
        // Tools and hardware
        "screwdriver", "wrench", "hammer", "power tool", "drill bit",
        // Automotive
        "motor oil", "engine oil", "gasoline", "diesel fuel", "antifreeze", "brake fluid",
        // Office and stationery
        "printer paper", "copy paper", "stapler", "paper clip",
        // Prescription medicine
        "prescription drug", "pharmaceutical", "medication tablet",
    ];

    /// Words that always identify text as food-related
    ///
    /// Includes chemical additives and preservatives on purpose: ingredient
    /// lists full of E-numbers and lab names are still food.
    static ref FOOD_KEYWORDS: Vec<&'static str> = vec![
        // Basic ingredients
        "flour", "sugar", "salt", "water", "oil", "butter", "milk", "egg",
        "wheat", "corn", "rice", "oat", "barley", "soy", "protein",
        // Additives and preservatives
        "vitamin", "mineral", "preservative", "flavor", "color", "starch",
        "yeast", "baking", "spice", "herb", "extract", "acid", "syrup",
        "sweetener", "emulsifier", "thickener", "stabilizer", "lecithin",
        "gelatin", "pectin", "agar", "carrageenan", "gum", "fiber",
        // Chemical additives
        "monosodium glutamate", "msg", "sodium benzoate", "potassium sorbate",
        "calcium propionate", "ascorbic acid", "citric acid", "malic acid",
        "xanthan gum", "guar gum", "modified starch", "maltodextrin",
        "high fructose corn syrup", "hfcs", "dextrose", "fructose", "glucose",
        "aspartame", "sucralose", "stevia", "erythritol", "sorbitol",
        "caramel color", "annatto", "turmeric", "paprika extract",
        "natural flavor", "artificial flavor", "flavoring",
        "monoglyceride", "diglyceride", "polysorbate",
        "sodium nitrite", "sodium nitrate", "bht", "bha",
        "phosphoric acid", "lactic acid", "acetic acid",
        // Food categories
        "ingredient", "nutrition", "calories", "carbohydrate", "fat", "sodium",
        "edible", "food", "beverage", "drink", "snack", "meal",
    ];

    /// Phrases that neutralize a non-food keyword hit
    ///
    /// Keyed by the non-food keyword; an empty list means no exceptions.
    static ref NON_FOOD_EXCEPTIONS: HashMap<&'static str, Vec<&'static str>> = {
        let mut map = HashMap::new();
        map.insert("battery", vec!["battery acid"]);
        map.insert("tablet device", vec![]);
        map.insert("machine washable", vec![]);
        map
    };
}

/// Outcome of the food-relevance gate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validation {
    /// Whether the text may proceed to parsing
    pub is_valid: bool,
    /// Human-readable rejection reason; None when valid
    pub reason: Option<String>,
}

impl Validation {
    fn valid() -> Self {
        Self {
            is_valid: true,
            reason: None,
        }
    }

    fn rejected(reason: String) -> Self {
        Self {
            is_valid: false,
            reason: Some(reason),
        }
    }
}

/// Decide whether text looks like a food ingredient list
///
/// Checks run in a fixed order: length guard, food keyword short-circuit,
/// and only then the non-food scan. Text matching neither keyword set is
/// accepted, so unfamiliar ingredients default to food.
pub fn validate(text: &str) -> Validation {
    let normalized = text.to_lowercase();

    if text.trim().chars().count() < 3 {
        debug!("Input rejected: too short ({:?})", text.trim());
        return Validation::rejected(
            "Input too short. Please enter a valid ingredient list.".to_string(),
        );
    }

    // Any food keyword wins immediately, even if a non-food keyword is also
    // present somewhere in the text.
    if FOOD_KEYWORDS
        .iter()
        .any(|keyword| normalized.contains(keyword))
    {
        return Validation::valid();
    }

    for keyword in NON_FOOD_KEYWORDS.iter() {
        if !normalized.contains(keyword) {
            continue;
        }

        let is_exception = NON_FOOD_EXCEPTIONS
            .get(keyword)
            .map(|exceptions| {
                exceptions
                    .iter()
                    .any(|exception| normalized.contains(exception))
            })
            .unwrap_or(false);
        if is_exception {
            continue;
        }

        debug!("Input rejected: non-food keyword {:?}", keyword);
        return Validation::rejected(format!(
            "This appears to be a non-food item (detected: \"{}\"). Please scan or enter food product ingredients only.",
            keyword
        ));
    }

    // Neither set matched: assume food with unfamiliar ingredients.
    Validation::valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_ingredient_list() {
        let result = validate("wheat flour, sugar, salt, yeast");
        assert!(result.is_valid);
        assert!(result.reason.is_none());
    }

    #[test]
    fn test_accepts_chemical_additives_as_food() {
        let cases = [
            "monosodium glutamate, disodium inosinate",
            "sodium benzoate, potassium sorbate",
            "e330 citric acid solution",
        ];
        for input in cases {
            let result = validate(input);
            assert!(result.is_valid, "expected {:?} to validate as food", input);
        }
    }

    #[test]
    fn test_rejects_short_input() {
        for input in ["", "  ", "ab", " a "] {
            let result = validate(input);
            assert!(!result.is_valid);
            assert_eq!(
                result.reason.as_deref(),
                Some("Input too short. Please enter a valid ingredient list.")
            );
        }
    }

    #[test]
    fn test_rejects_non_food_with_keyword_in_reason() {
        let result = validate("laundry detergent, fragrance");
        assert!(!result.is_valid);
        let reason = result.reason.unwrap();
        assert!(reason.contains("detergent"), "reason was: {}", reason);
        assert!(reason.contains("non-food item"));
    }

    #[test]
    fn test_rejects_across_categories() {
        let cases = [
            ("lithium-ion cell pack", "lithium-ion"),
            ("mascara and eyeliner set", "mascara"),
            ("brake fluid reservoir", "brake fluid"),
        ];
        for (input, keyword) in cases {
            let result = validate(input);
            assert!(!result.is_valid, "expected {:?} to be rejected", input);
            assert!(result.reason.unwrap().contains(keyword));
        }
    }

    #[test]
    fn test_food_keyword_overrides_non_food() {
        // "detergent" appears, but "sugar" marks the text as food first.
        let result = validate("sugar detergent");
        assert!(result.is_valid);

        // "waterproof mascara" contains "water", so the short-circuit wins
        // over the cosmetics keyword.
        let result = validate("waterproof mascara");
        assert!(result.is_valid);
    }

    #[test]
    fn test_battery_inputs() {
        // Plain "battery" is non-food; "battery acid" validates because
        // "acid" is a food keyword (and it is also the recorded exception
        // for "battery", so both layers agree).
        let result = validate("battery pack cell");
        assert!(!result.is_valid);

        let result = validate("battery acid brine");
        assert!(result.is_valid);
    }

    #[test]
    fn test_unknown_input_defaults_to_food() {
        let result = validate("quinoa, amaranth, teff");
        assert!(result.is_valid);
    }

    #[test]
    fn test_deterministic() {
        let first = validate("toilet cleaner concentrate");
        let second = validate("toilet cleaner concentrate");
        assert_eq!(first, second);
        assert!(!first.is_valid);
    }
}
