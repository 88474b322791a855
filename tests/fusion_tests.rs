//! # Fusion and Visual Analysis Tests
//!
//! Test suite for the capture-side signal path: color analysis on real image
//! files, signal resolution precedence, and the handoff into the analysis
//! pipeline.

#[cfg(test)]
mod tests {
    use labelscan::analysis::analyze;
    use labelscan::fusion::{
        extract_ingredient_segment, extract_product_name, fuse_signals, resolve, OcrSignal,
        SignalError, TextOrigin,
    };
    use labelscan::fusion_config::FusionConfig;
    use labelscan::personalization::UserPreferences;
    use labelscan::visual::{analyze_image, FoodCategory};
    use tempfile::NamedTempFile;

    /// Write a solid-color PNG and return the handle that keeps it alive
    fn solid_color_png(rgba: [u8; 4]) -> NamedTempFile {
        let file = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .expect("Failed to create temp image file");
        let img = image::RgbaImage::from_pixel(40, 40, image::Rgba(rgba));
        img.save(file.path()).expect("Failed to write test PNG");
        file
    }

    /// Test fusion configuration defaults
    #[test]
    fn test_fusion_config_defaults() {
        let config = FusionConfig::default();

        assert_eq!(config.min_ocr_confidence, 60.0);
        assert_eq!(config.min_ocr_text_len, 10);
        assert_eq!(config.enrichment_timeout_secs, 5);
    }

    /// Test color analysis on a brown image file
    #[test]
    fn test_analyze_image_brown_label() {
        let file = solid_color_png([150, 100, 60, 255]);
        let analysis = analyze_image(file.path().to_str().unwrap()).unwrap();

        assert_eq!(analysis.food_category, FoodCategory::BakedGoods);
        assert_eq!(analysis.confidence, 0.7);

        // Every sample quantizes to the same color, so there is exactly one.
        assert_eq!(analysis.dominant_colors.len(), 1);
        assert_eq!(analysis.dominant_colors[0].hex(), "#a06040");

        assert!(analysis
            .predicted_ingredients
            .contains(&"Wheat Flour".to_string()));
    }

    /// Test that inputs larger than the sampling bound are downscaled
    #[test]
    fn test_analyze_image_downscales_large_input() {
        let file = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .expect("Failed to create temp image file");
        let img = image::RgbaImage::from_pixel(400, 400, image::Rgba([150, 100, 60, 255]));
        img.save(file.path()).expect("Failed to write test PNG");

        let analysis = analyze_image(file.path().to_str().unwrap()).unwrap();

        // Same verdict as the small brown label; the thumbnail step only
        // reduces how many pixels feed the color counts.
        assert_eq!(analysis.food_category, FoodCategory::BakedGoods);
        assert_eq!(analysis.dominant_colors[0].hex(), "#a06040");
    }

    /// Test color analysis on a near-white image file
    #[test]
    fn test_analyze_image_white_label() {
        let file = solid_color_png([245, 245, 240, 255]);
        let analysis = analyze_image(file.path().to_str().unwrap()).unwrap();

        assert_eq!(analysis.food_category, FoodCategory::DairyFlour);
        assert!(analysis.predicted_ingredients.contains(&"Milk".to_string()));
    }

    /// Test that a missing image path fails without panicking
    #[test]
    fn test_analyze_image_missing_file() {
        let result = analyze_image("/nonexistent/label.png");
        assert!(result.is_err());
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("/nonexistent/label.png"));
    }

    /// Test the full weak-OCR path: visual guess feeds the analysis pipeline
    #[tokio::test]
    async fn test_weak_ocr_visual_guess_reaches_analysis() {
        let file = solid_color_png([150, 100, 60, 255]);
        let ocr_task = async {
            Ok(OcrSignal {
                text: "bread".to_string(),
                confidence: 30.0,
            })
        };

        let fused = fuse_signals(
            ocr_task,
            Some(file.path().to_str().unwrap()),
            &FusionConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(fused.origin, TextOrigin::VisualGuess);
        assert_eq!(
            fused.text,
            "Wheat Flour, Sugar, Yeast, Salt, Water, Vegetable Oil"
        );

        // The guessed list analyzes like any other label text.
        let result = analyze(&fused.text, &UserPreferences::default()).unwrap();
        assert_eq!(result.summary.total_count, 6);
    }

    /// Test that confident OCR wins even when an image is available
    #[tokio::test]
    async fn test_confident_ocr_ignores_visual_guess() {
        let file = solid_color_png([150, 100, 60, 255]);
        let ocr_task = async {
            Ok(OcrSignal {
                text: "INGREDIENTS: Oats, honey, almonds, sea salt.".to_string(),
                confidence: 91.0,
            })
        };

        let fused = fuse_signals(
            ocr_task,
            Some(file.path().to_str().unwrap()),
            &FusionConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(fused.origin, TextOrigin::Ocr);
        assert_eq!(fused.text, "Oats, honey, almonds, sea salt");
    }

    /// Test that an unreadable image degrades to the OCR signal alone
    #[tokio::test]
    async fn test_unreadable_image_degrades_gracefully() {
        let ocr_task = async {
            Ok(OcrSignal {
                text: "Ingredients: water, sugar, citric acid, flavoring".to_string(),
                confidence: 75.0,
            })
        };

        let fused = fuse_signals(
            ocr_task,
            Some("/nonexistent/label.png"),
            &FusionConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(fused.origin, TextOrigin::Ocr);
    }

    /// Test that OCR failure plus an unreadable image is an insufficient signal
    #[tokio::test]
    async fn test_all_signals_failing_is_insufficient() {
        let ocr_task = async { Err(anyhow::anyhow!("provider unavailable")) };

        let err = fuse_signals(
            ocr_task,
            Some("/nonexistent/label.png"),
            &FusionConfig::default(),
        )
        .await
        .unwrap_err();

        assert_eq!(err, SignalError::InsufficientSignal);
    }

    /// Test the branded-product override through a garbled OCR read
    #[test]
    fn test_branded_noodles_override() {
        // Misspelled brand alias in low-confidence text still matches.
        let signal = OcrSignal {
            text: "maggie 2 minute noodles pack".to_string(),
            confidence: 41.0,
        };
        let fused = resolve(&signal, None, &FusionConfig::default()).unwrap();

        match fused.origin {
            TextOrigin::ProductOverride { product, category } => {
                assert_eq!(product, "Maggi Noodles");
                assert_eq!(category, "Instant Noodles");
            }
            other => panic!("expected a product override, got {:?}", other),
        }
        assert!(fused.text.contains("Wheat Flour"));

        // The curated list runs through the pipeline end to end.
        let result = analyze(&fused.text, &UserPreferences::default()).unwrap();
        assert!(result.summary.total_count > 5);
    }

    /// Test product name and ingredient segment extraction on one label
    #[test]
    fn test_label_text_extraction_roundtrip() {
        let label = "8901491101837\nACME MASALA CRISPS\nIngredients: potatoes, vegetable oil, spices, salt.";

        assert_eq!(
            extract_product_name(label).as_deref(),
            Some("ACME MASALA CRISPS")
        );
        assert_eq!(
            extract_ingredient_segment(label).as_deref(),
            Some("potatoes, vegetable oil, spices, salt")
        );
    }
}
