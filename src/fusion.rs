//! # Signal Fusion
//!
//! This module turns messy capture-side signals into the single ingredient
//! string the analysis pipeline consumes. Three signals compete: a known
//! product recognized in the raw text (which wins outright and swaps in its
//! curated ingredient list), the OCR text itself when it is confident and
//! long enough, and a coarse visual color guess as the last resort.
//!
//! ## Features
//!
//! - Product keyword override against the knowledge base
//! - Food gate on OCR text; non-food labels are rejected without fallback
//! - Confidence and length thresholds before OCR text is trusted
//! - Ingredient-segment and product-name extraction from raw label text
//! - Concurrent OCR and visual analysis with best-effort enrichment
//!
//! ## Usage
//!
//! ```rust
//! use labelscan::fusion::{resolve, OcrSignal, TextOrigin};
//! use labelscan::fusion_config::FusionConfig;
//!
//! let ocr = OcrSignal {
//!     text: "INGREDIENTS: Wheat flour, water, sugar, yeast, salt.".to_string(),
//!     confidence: 87.5,
//! };
//! let fused = resolve(&ocr, None, &FusionConfig::default()).unwrap();
//!
//! assert_eq!(fused.origin, TextOrigin::Ocr);
//! assert!(fused.text.starts_with("Wheat flour"));
//! ```

use crate::food_data::{FoodDataClient, FoodProduct};
use crate::fusion_config::FusionConfig;
use crate::knowledge_base;
use crate::validator;
use crate::visual::{self, VisualAnalysis};
use anyhow::Result;
use lazy_static::lazy_static;
use log::{debug, info, warn};
use regex::Regex;
use std::future::Future;
use std::time::Duration;

// Regex patterns for pulling the ingredient segment out of full label text
pub const INGREDIENTS_PATTERN: &str = r"(?i)ingredients?\s*:?\s*([^.]+(?:\.[^.]+)*)";
pub const CONTAINS_PATTERN: &str = r"(?i)(?:contains|made with)\s*:?\s*([^.]+)";

lazy_static! {
    static ref INGREDIENTS_REGEX: Regex =
        Regex::new(INGREDIENTS_PATTERN).expect("Ingredients pattern should be valid");
    static ref CONTAINS_REGEX: Regex =
        Regex::new(CONTAINS_PATTERN).expect("Contains pattern should be valid");
}

/// Raw OCR output from an external text-extraction provider
#[derive(Debug, Clone, PartialEq)]
pub struct OcrSignal {
    /// Extracted text, possibly empty or garbled
    pub text: String,
    /// Provider confidence on a 0-100 scale
    pub confidence: f32,
}

/// Where the resolved ingredient text came from
#[derive(Debug, Clone, PartialEq)]
pub enum TextOrigin {
    /// A known product alias matched; its curated list replaced the OCR text
    ProductOverride { product: String, category: String },
    /// OCR text was confident and long enough to stand on its own
    Ocr,
    /// Color-heuristic guess used because OCR produced nothing trustworthy
    VisualGuess,
}

/// The single resolved string handed to the analysis pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct FusedText {
    pub text: String,
    pub origin: TextOrigin,
}

/// Errors from resolving upstream signals
#[derive(Debug, Clone, PartialEq)]
pub enum SignalError {
    /// The captured text reads as a non-food label; carries the validator's
    /// reason
    NonFood(String),
    /// Neither OCR nor the visual fallback produced usable text
    InsufficientSignal,
}

impl std::fmt::Display for SignalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignalError::NonFood(reason) => write!(f, "{reason}"),
            SignalError::InsufficientSignal => {
                write!(f, "Could not extract a usable ingredient list from the image.")
            }
        }
    }
}

impl std::error::Error for SignalError {}

/// Pull the ingredient segment out of full label text
///
/// Tries the `ingredients:` pattern first, then `contains:`/`made with:`,
/// then falls back to the first line with at least three comma-separated
/// parts.
pub fn extract_ingredient_segment(text: &str) -> Option<String> {
    if let Some(m) = INGREDIENTS_REGEX.captures(text).and_then(|c| c.get(1)) {
        return Some(m.as_str().trim().to_string());
    }

    if let Some(m) = CONTAINS_REGEX.captures(text).and_then(|c| c.get(1)) {
        return Some(m.as_str().trim().to_string());
    }

    text.lines()
        .find(|line| line.split(',').count() >= 3)
        .map(|line| line.trim().to_string())
}

/// Guess the product name from label text
///
/// The first non-empty line usually names the product; very short lines and
/// bare digit runs (barcodes) defer to the next line.
pub fn extract_product_name(text: &str) -> Option<String> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let first = *lines.first()?;
    if first.chars().count() < 3 || first.chars().all(|c| c.is_ascii_digit()) {
        return Some(
            lines
                .get(1)
                .map(|line| line.to_string())
                .unwrap_or_else(|| first.to_string()),
        );
    }

    Some(first.to_string())
}

/// Resolve competing signals into one ingredient string
///
/// Decision order:
/// 1. A known product alias in the raw text wins outright.
/// 2. Text long enough to judge goes through the food gate; a non-food
///    verdict is final, the visual guess cannot rehabilitate a shampoo
///    label.
/// 3. Confident, long-enough OCR text is trusted, reduced to its ingredient
///    segment when one is recognizable.
/// 4. Otherwise the visual color guess fills in when it exists.
/// 5. Nothing usable means an insufficient signal.
pub fn resolve(
    ocr: &OcrSignal,
    visual: Option<&VisualAnalysis>,
    config: &FusionConfig,
) -> Result<FusedText, SignalError> {
    if let Some(product) = knowledge_base::find_product(&ocr.text) {
        info!(
            "Known product recognized, using curated ingredients: {}",
            product.product_name
        );
        return Ok(FusedText {
            text: product.ingredients.to_string(),
            origin: TextOrigin::ProductOverride {
                product: product.product_name.to_string(),
                category: product.category.to_string(),
            },
        });
    }

    // An almost-empty read is a weak signal, not a non-food verdict, so the
    // gate only runs on text long enough to judge.
    let trimmed_len = ocr.text.trim().chars().count();
    if trimmed_len >= 3 {
        let validation = validator::validate(&ocr.text);
        if !validation.is_valid {
            let reason = validation
                .reason
                .unwrap_or_else(|| "This does not appear to be a food label.".to_string());
            return Err(SignalError::NonFood(reason));
        }
    }

    if ocr.confidence >= config.min_ocr_confidence && trimmed_len >= config.min_ocr_text_len {
        let text = extract_ingredient_segment(&ocr.text)
            .unwrap_or_else(|| ocr.text.trim().to_string());
        return Ok(FusedText {
            text,
            origin: TextOrigin::Ocr,
        });
    }

    if let Some(visual) = visual {
        if !visual.predicted_ingredients.is_empty() {
            debug!(
                "OCR signal too weak (confidence {:.1}, {} chars), using visual guess: {}",
                ocr.confidence,
                trimmed_len,
                visual.food_category.display_name()
            );
            return Ok(FusedText {
                text: visual.ingredient_list(),
                origin: TextOrigin::VisualGuess,
            });
        }
    }

    Err(SignalError::InsufficientSignal)
}

/// Await OCR and visual analysis together, then resolve them
///
/// Either collaborator failing degrades to an absent signal; only the final
/// resolution decides whether the combination was usable.
pub async fn fuse_signals<F>(
    ocr: F,
    image_path: Option<&str>,
    config: &FusionConfig,
) -> Result<FusedText, SignalError>
where
    F: Future<Output = Result<OcrSignal>>,
{
    let visual_task = async {
        match image_path {
            Some(path) => match visual::analyze_image(path) {
                Ok(analysis) => Some(analysis),
                Err(e) => {
                    warn!("Visual analysis failed, continuing without it: {}", e);
                    None
                }
            },
            None => None,
        }
    };

    let (ocr_result, visual) = tokio::join!(ocr, visual_task);

    let ocr_signal = match ocr_result {
        Ok(signal) => signal,
        Err(e) => {
            warn!("OCR extraction failed, treating as an empty signal: {}", e);
            OcrSignal {
                text: String::new(),
                confidence: 0.0,
            }
        }
    };

    resolve(&ocr_signal, visual.as_ref(), config)
}

/// Look up the scanned product in the public food databases, best effort
///
/// Bounded by the configured timeout; lookup errors and timeouts degrade to
/// `None` with a warning, never a hard failure.
pub async fn enrich_with_product_data(
    product_name: &str,
    client: &FoodDataClient,
    config: &FusionConfig,
) -> Option<FoodProduct> {
    let timeout = Duration::from_secs(config.enrichment_timeout_secs);

    match tokio::time::timeout(timeout, client.search_product(product_name)).await {
        Ok(Ok(Some(product))) => {
            info!("Enriched analysis with product data for {:?}", product_name);
            Some(product)
        }
        Ok(Ok(None)) => {
            debug!("No product data found for {:?}", product_name);
            None
        }
        Ok(Err(e)) => {
            warn!("Product data lookup failed for {:?}: {}", product_name, e);
            None
        }
        Err(_) => {
            warn!(
                "Product data lookup timed out after {}s for {:?}",
                config.enrichment_timeout_secs, product_name
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visual::FoodCategory;

    fn ocr(text: &str, confidence: f32) -> OcrSignal {
        OcrSignal {
            text: text.to_string(),
            confidence,
        }
    }

    fn beverage_guess() -> VisualAnalysis {
        VisualAnalysis {
            dominant_colors: vec![],
            food_category: FoodCategory::Beverage,
            predicted_ingredients: vec![
                "Water".to_string(),
                "Sugar".to_string(),
                "Flavoring".to_string(),
            ],
            confidence: 0.7,
        }
    }

    #[test]
    fn test_product_override_wins_over_confident_ocr() {
        let signal = ocr("COCA COLA CLASSIC 330ml, best served chilled", 95.0);
        let fused = resolve(&signal, None, &FusionConfig::default()).unwrap();

        assert!(fused.text.starts_with("Carbonated Water"));
        assert_eq!(
            fused.origin,
            TextOrigin::ProductOverride {
                product: "Coca-Cola".to_string(),
                category: "Beverage".to_string(),
            }
        );
    }

    #[test]
    fn test_confident_ocr_yields_ingredient_segment() {
        let signal = ocr(
            "ACME WHEAT CRACKERS\nINGREDIENTS: Wheat flour, palm oil, salt, yeast.",
            82.0,
        );
        let fused = resolve(&signal, None, &FusionConfig::default()).unwrap();

        assert_eq!(fused.origin, TextOrigin::Ocr);
        assert_eq!(fused.text, "Wheat flour, palm oil, salt, yeast");
    }

    #[test]
    fn test_non_food_text_is_rejected_even_with_visual_fallback() {
        let signal = ocr("laundry detergent with optical brighteners", 95.0);
        let visual = beverage_guess();
        let err = resolve(&signal, Some(&visual), &FusionConfig::default()).unwrap_err();

        match err {
            SignalError::NonFood(reason) => assert!(reason.contains("detergent")),
            other => panic!("expected NonFood, got {other:?}"),
        }
    }

    #[test]
    fn test_weak_ocr_falls_back_to_visual_guess() {
        let signal = ocr("salt", 20.0);
        let visual = beverage_guess();
        let fused = resolve(&signal, Some(&visual), &FusionConfig::default()).unwrap();

        assert_eq!(fused.origin, TextOrigin::VisualGuess);
        assert_eq!(fused.text, "Water, Sugar, Flavoring");
    }

    #[test]
    fn test_near_empty_ocr_is_weak_not_non_food() {
        // Two characters would fail the validator's length guard; fusion
        // treats that as a weak signal and still uses the visual guess.
        let signal = ocr("ab", 90.0);
        let visual = beverage_guess();
        let fused = resolve(&signal, Some(&visual), &FusionConfig::default()).unwrap();

        assert_eq!(fused.origin, TextOrigin::VisualGuess);
    }

    #[test]
    fn test_nothing_usable_is_insufficient_signal() {
        let signal = ocr("", 0.0);
        let err = resolve(&signal, None, &FusionConfig::default()).unwrap_err();
        assert_eq!(err, SignalError::InsufficientSignal);

        let display = format!("{err}");
        assert!(display.contains("usable ingredient list"));
    }

    #[test]
    fn test_confident_but_short_text_uses_fallback() {
        // Valid food text below the length threshold is not trusted alone
        let signal = ocr("sugar", 99.0);
        let visual = beverage_guess();
        let fused = resolve(&signal, Some(&visual), &FusionConfig::default()).unwrap();

        assert_eq!(fused.origin, TextOrigin::VisualGuess);
    }

    #[test]
    fn test_extract_ingredient_segment_patterns() {
        let labeled = "BEST BISCUITS\nIngredients: wheat flour, sugar, palm oil.";
        assert_eq!(
            extract_ingredient_segment(labeled).as_deref(),
            Some("wheat flour, sugar, palm oil")
        );

        // Mid-list periods ride along; downstream lookups degrade gracefully
        // on the trailing prose.
        let with_trailer = "Ingredients: wheat flour, sugar. Store in a cool place";
        assert_eq!(
            extract_ingredient_segment(with_trailer).as_deref(),
            Some("wheat flour, sugar. Store in a cool place")
        );

        let contains = "Made with: oats, honey and sea salt";
        assert_eq!(
            extract_ingredient_segment(contains).as_deref(),
            Some("oats, honey and sea salt")
        );

        let bare_list = "Some header\nwater, sugar, citric acid, flavoring\nfooter";
        assert_eq!(
            extract_ingredient_segment(bare_list).as_deref(),
            Some("water, sugar, citric acid, flavoring")
        );

        assert_eq!(extract_ingredient_segment("just a sentence"), None);
    }

    #[test]
    fn test_extract_product_name_skips_barcodes() {
        let text = "8901058851298\nMaggi 2-Minute Noodles\nNet wt 70g";
        assert_eq!(
            extract_product_name(text).as_deref(),
            Some("Maggi 2-Minute Noodles")
        );

        let plain = "Acme Crackers\nIngredients: wheat flour";
        assert_eq!(extract_product_name(plain).as_deref(), Some("Acme Crackers"));

        assert_eq!(extract_product_name("\n  \n"), None);
    }

    #[test]
    fn test_extract_product_name_short_first_line_without_second() {
        // A lone short line still comes back rather than nothing
        assert_eq!(extract_product_name("42").as_deref(), Some("42"));
    }

    #[tokio::test]
    async fn test_fuse_signals_with_successful_ocr() {
        let ocr_task = async {
            Ok(OcrSignal {
                text: "Ingredients: carbonated water, sugar, phosphoric acid, caffeine".to_string(),
                confidence: 88.0,
            })
        };

        let fused = fuse_signals(ocr_task, None, &FusionConfig::default())
            .await
            .unwrap();
        assert_eq!(fused.origin, TextOrigin::Ocr);
        assert_eq!(
            fused.text,
            "carbonated water, sugar, phosphoric acid, caffeine"
        );
    }

    #[tokio::test]
    async fn test_fuse_signals_ocr_failure_without_image() {
        let ocr_task = async { Err(anyhow::anyhow!("provider unavailable")) };

        let err = fuse_signals(ocr_task, None, &FusionConfig::default())
            .await
            .unwrap_err();
        assert_eq!(err, SignalError::InsufficientSignal);
    }
}
