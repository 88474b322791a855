//! # Label Analysis Example
//!
//! This example walks the bundled sample products through the full analysis
//! pipeline, shows how user preferences change the guidance, and demonstrates
//! the capture-side signal fusion plus best-effort product enrichment.
//!
//! Run with `RUST_LOG=info cargo run --example analyze_label` to see the
//! pipeline logging alongside the output.

use labelscan::analysis::analyze;
use labelscan::food_data::FoodDataClient;
use labelscan::fusion::{self, OcrSignal};
use labelscan::fusion_config::FusionConfig;
use labelscan::personalization::{TonePreference, UserGoal, UserPreferences};
use labelscan::sample_data;
use labelscan::validator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    // Load environment variables from .env file (FDA_API_KEY, if present)
    dotenv::dotenv().ok();

    println!("🥫 Ingredient Label Analysis Example");
    println!("=====================================\n");

    // Example 1: Sample products through the default pipeline
    println!("📋 Example 1: Sample Products");
    println!("-----------------------------");

    let defaults = UserPreferences::default();
    for product in sample_data::sample_products() {
        let result = analyze(&product.ingredient_list, &defaults)?;
        println!(
            "  {} ({}) → {}",
            product.name,
            product.category,
            result.verdict.kind.display_name()
        );
        println!(
            "      natural {}, processed {}, synthetic {} of {} ingredients",
            result.summary.natural_count,
            result.summary.processed_count,
            result.summary.synthetic_count,
            result.summary.total_count
        );
    }

    println!("\n");

    // Example 2: The same product through different user profiles
    println!("🎯 Example 2: Personalized Guidance");
    println!("-----------------------------------");

    let soft_drink = sample_data::sample_product("soft-drink")
        .ok_or_else(|| anyhow::anyhow!("soft-drink sample should exist"))?;

    let profiles = [
        ("Default", UserPreferences::default()),
        (
            "Fitness focused",
            UserPreferences::new()
                .with_goal(UserGoal::FitnessFocused)
                .with_tone(TonePreference::Detailed)
                .with_flag_high_sugar(true),
        ),
        (
            "Sensitive to additives",
            UserPreferences::new()
                .with_goal(UserGoal::MedicalSensitivity)
                .with_flag_artificial_additives(true)
                .with_flag_preservatives(true),
        ),
    ];

    for (label, preferences) in &profiles {
        let result = analyze(&soft_drink.ingredient_list, preferences)?;
        println!("  Profile: {} ({})", label, preferences.goal.display_name());
        println!("    {}", result.opening_statement);
        for highlight in &result.what_matters_most {
            println!(
                "    ⚠️  {} (priority {}): {}",
                highlight.name, highlight.priority, highlight.reason
            );
        }
        println!();
    }

    // Example 3: The food gate at work
    println!("🚨 Example 3: Non-Food Rejection");
    println!("--------------------------------");

    let junk_inputs = [
        "Lithium battery pack, rechargeable, 3.7V",
        "machine washable polyester fabric",
        "ab",
    ];
    for input in junk_inputs {
        let validation = validator::validate(input);
        match validation.reason {
            Some(reason) => println!("  {:?} → rejected: {}", input, reason),
            None => println!("  {:?} → accepted", input),
        }
    }

    match analyze("Lithium battery pack, rechargeable, 3.7V", &defaults) {
        Ok(_) => println!("  Unexpected success for non-food input"),
        Err(e) => println!("  analyze() propagates the rejection: {}", e),
    }

    println!("\n");

    // Example 4: Fusing capture-side signals
    println!("🔍 Example 4: Signal Fusion");
    println!("---------------------------");

    let config = FusionConfig::default();

    // A recognized product replaces the OCR text with curated ingredients
    let branded = OcrSignal {
        text: "COCA COLA Classic - 330 ml".to_string(),
        confidence: 41.0,
    };
    if let Ok(fused) = fusion::resolve(&branded, None, &config) {
        println!("  Branded label → {:?}", fused.origin);
        println!("    {}", fused.text);
    }

    // Confident OCR keeps only the ingredient segment of the label
    let ocr_task = async {
        Ok(OcrSignal {
            text: "FIZZY ORANGE\nINGREDIENTS: Carbonated water, sugar, citric acid, natural flavors."
                .to_string(),
            confidence: 88.0,
        })
    };
    match fusion::fuse_signals(ocr_task, None, &config).await {
        Ok(fused) => println!("  Confident OCR → {:?}: {}", fused.origin, fused.text),
        Err(e) => println!("  Fusion failed: {}", e),
    }

    // A weak signal with no image to fall back on is an error
    let weak = OcrSignal {
        text: "sug".to_string(),
        confidence: 12.0,
    };
    match fusion::resolve(&weak, None, &config) {
        Ok(_) => println!("  Unexpected success for weak signal"),
        Err(e) => println!("  Weak OCR without visual fallback → {}", e),
    }

    println!("\n");

    // Example 5: Best-effort enrichment from public databases
    println!("🌐 Example 5: Product Enrichment");
    println!("--------------------------------");

    let label_text = "8901058851298\nMaggi 2-Minute Noodles\nIngredients: wheat flour, palm oil, salt";
    if let Some(product_name) = fusion::extract_product_name(label_text) {
        println!("  Product name from label: {}", product_name);

        let client = FoodDataClient::from_env()?;
        match fusion::enrich_with_product_data(&product_name, &client, &config).await {
            Some(product) => {
                println!("  Found: {} ({})", product.name, product.source);
                if let Some(calories) = product.nutrition.calories {
                    println!("    Calories: {}", calories);
                }
            }
            None => println!("  No product data available (offline, timeout, or no match)"),
        }
    }

    println!("\n✨ Label analysis examples completed!");

    Ok(())
}
