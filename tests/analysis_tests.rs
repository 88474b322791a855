//! # End-to-End Analysis Tests
//!
//! These tests run realistic label text through the full pipeline (validate,
//! parse, classify, aggregate, verdict, personalize) and pin the outcomes a
//! consumer would actually see.

use labelscan::analysis::{analyze, VerdictKind};
use labelscan::analysis_errors::AnalysisError;
use labelscan::knowledge_base::Classification;
use labelscan::personalization::{UserGoal, UserPreferences};
use labelscan::sample_data;

#[test]
fn test_packaged_bread_label() {
    let result = analyze(
        "Wheat flour, water, sugar, yeast, salt, vegetable oil, preservatives (calcium propionate)",
        &UserPreferences::default(),
    )
    .unwrap();

    // One ingredient per top-level comma; the parenthetical stays attached.
    assert_eq!(result.ingredients.len(), 7);
    let names: Vec<&str> = result
        .ingredients
        .iter()
        .map(|ingredient| ingredient.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "Wheat flour",
            "Water",
            "Sugar",
            "Yeast",
            "Salt",
            "Vegetable oil",
            "Preservatives (calcium propionate)",
        ]
    );

    let classifications: Vec<Classification> = result
        .ingredients
        .iter()
        .map(|ingredient| ingredient.classification)
        .collect();
    assert_eq!(
        classifications,
        vec![
            Classification::Processed,
            Classification::Natural,
            Classification::Processed,
            Classification::Natural,
            Classification::Natural,
            Classification::Processed,
            Classification::Synthetic,
        ]
    );

    assert_eq!(result.summary.total_count, 7);
    assert_eq!(result.summary.natural_count, 3);
    assert_eq!(result.summary.processed_count, 3);
    assert_eq!(result.summary.synthetic_count, 1);

    // A 3/3/1 mix crosses neither verdict threshold.
    assert_eq!(result.verdict.kind, VerdictKind::OccasionalChoice);

    // The preservative token resolved to the full curated record.
    let preservative = &result.ingredients[6];
    assert_eq!(
        preservative.chemical_name.as_deref(),
        Some("Calcium Propionate (E282)")
    );
    assert!(preservative.considerations.is_some());

    // Wheat flour's allergens reach the aggregated union.
    assert!(result.summary.allergens.contains(&"Wheat".to_string()));
    assert!(result.summary.allergens.contains(&"Gluten".to_string()));

    assert!(!result.opening_statement.is_empty());
    assert!(!result.personalized_insight.is_empty());
    assert_eq!(result.sources.len(), 6);
}

#[test]
fn test_soft_drink_label_lands_not_ideal() {
    let result = analyze(
        "Carbonated water, high fructose corn syrup, caramel color, phosphoric acid, natural flavors, caffeine, sodium benzoate",
        &UserPreferences::default(),
    )
    .unwrap();

    // Natural: carbonated water, caffeine. Processed: HFCS, caramel color,
    // natural flavors. Synthetic: phosphoric acid, sodium benzoate.
    assert_eq!(result.summary.natural_count, 2);
    assert_eq!(result.summary.processed_count, 3);
    assert_eq!(result.summary.synthetic_count, 2);

    // 2 of 7 synthetic stays under the 30% trigger, but processed
    // outnumbering natural still lands the lowest tier.
    assert_eq!(result.verdict.kind, VerdictKind::NotIdeal);
    assert!(result.verdict.explanation.contains("not ideal"));

    // Sodium benzoate has no curated record; the heuristic classifies it
    // without inventing metadata.
    let benzoate = &result.ingredients[6];
    assert_eq!(benzoate.name, "Sodium benzoate");
    assert_eq!(benzoate.classification, Classification::Synthetic);
    assert!(benzoate.chemical_name.is_none());
    assert_eq!(benzoate.description, "A synthetically produced ingredient.");
}

#[test]
fn test_household_product_is_rejected() {
    let error = analyze(
        "detergent, surfactants, enzymes, fragrance",
        &UserPreferences::default(),
    )
    .unwrap_err();

    match error {
        AnalysisError::Validation(reason) => {
            assert!(reason.contains("detergent"), "reason was: {}", reason);
            assert!(reason.contains("non-food item"));
        }
        other => panic!("expected a validation error, got {:?}", other),
    }
}

#[test]
fn test_empty_input_is_rejected() {
    let error = analyze("", &UserPreferences::default()).unwrap_err();
    assert_eq!(
        error,
        AnalysisError::Validation(
            "Input too short. Please enter a valid ingredient list.".to_string()
        )
    );
}

#[test]
fn test_allergen_flag_surfaces_soy_lecithin() {
    let preferences = UserPreferences::default().with_flag_allergens(true);
    let result = analyze("cocoa butter, soy lecithin, sugar", &preferences).unwrap();

    assert_eq!(result.summary.allergens, vec!["Soy"]);

    // The allergen carrier is the top callout at full priority.
    let highlight = result
        .what_matters_most
        .iter()
        .find(|highlight| highlight.name == "Soy lecithin")
        .expect("soy lecithin should be highlighted");
    assert_eq!(highlight.priority, 10);
    assert!(highlight.reason.contains("Soy"));
    assert!(highlight.reason.contains("allergen"));
}

#[test]
fn test_allergen_union_is_sorted_and_deduplicated() {
    // Whey and milk protein isolates overlap on Milk and Dairy; soy
    // lecithin adds Soy; milk protein isolate alone carries Lactose.
    let result = analyze(
        "whey protein isolate, soy lecithin, milk protein isolate",
        &UserPreferences::default(),
    )
    .unwrap();

    assert_eq!(
        result.summary.allergens,
        vec!["Dairy", "Lactose", "Milk", "Soy"]
    );
}

#[test]
fn test_single_unknown_token_defaults_to_processed() {
    let result = analyze("Quinoa", &UserPreferences::default()).unwrap();

    assert_eq!(result.ingredients.len(), 1);
    assert_eq!(result.ingredients[0].name, "Quinoa");
    assert_eq!(
        result.ingredients[0].classification,
        Classification::Processed
    );
    // One processed token against zero natural ones is a processed majority.
    assert_eq!(result.verdict.kind, VerdictKind::NotIdeal);
}

#[test]
fn test_parenthetical_sublist_stays_grouped() {
    let result = analyze(
        "Enriched wheat flour (wheat flour, niacin, iron), water, salt",
        &UserPreferences::default(),
    )
    .unwrap();

    assert_eq!(result.ingredients.len(), 3);
    assert_eq!(
        result.ingredients[0].name,
        "Enriched wheat flour (wheat flour, niacin, iron)"
    );
    // The grouped token still resolves to the enriched-flour record, which
    // beats plain "wheat flour" on key length.
    assert_eq!(
        result.ingredients[0].chemical_name.as_deref(),
        Some("Enriched Refined Wheat Flour")
    );
    assert_eq!(result.summary.natural_count, 2);
    assert_eq!(result.summary.processed_count, 1);
}

#[test]
fn test_preferences_change_narrative_not_verdict() {
    let list = "Carbonated water, high fructose corn syrup, caramel color, phosphoric acid, natural flavors, caffeine, sodium benzoate";

    let default_result = analyze(list, &UserPreferences::default()).unwrap();
    let fitness_result = analyze(
        list,
        &UserPreferences::default().with_goal(UserGoal::FitnessFocused),
    )
    .unwrap();

    // Same facts, different reader.
    assert_eq!(default_result.summary, fitness_result.summary);
    assert_eq!(default_result.verdict, fitness_result.verdict);
    assert_eq!(default_result.ingredients, fitness_result.ingredients);
    assert_ne!(
        default_result.personalized_insight,
        fitness_result.personalized_insight
    );
}

#[test]
fn test_all_sample_products_analyze_cleanly() {
    let preferences = UserPreferences::default();

    for product in sample_data::sample_products() {
        let result = analyze(&product.ingredient_list, &preferences)
            .unwrap_or_else(|error| panic!("{} failed: {}", product.id, error));

        assert!(result.summary.total_count > 0, "{}", product.id);
        assert_eq!(
            result.summary.natural_count
                + result.summary.processed_count
                + result.summary.synthetic_count,
            result.summary.total_count,
            "{}",
            product.id
        );
    }
}

#[test]
fn test_sample_soft_drink_verdict() {
    let product = sample_data::sample_product("soft-drink").unwrap();
    let result = analyze(&product.ingredient_list, &UserPreferences::default()).unwrap();

    // The built-in soft drink swaps sodium benzoate for citric acid, which
    // classifies processed; processed still outnumbers natural.
    assert_eq!(result.summary.natural_count, 2);
    assert_eq!(result.summary.processed_count, 4);
    assert_eq!(result.summary.synthetic_count, 1);
    assert_eq!(result.verdict.kind, VerdictKind::NotIdeal);
}
