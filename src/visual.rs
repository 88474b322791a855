//! # Visual Color Analysis
//!
//! This module provides a coarse, color-based guess at what kind of food a
//! label photo shows. It is deliberately crude: it samples pixels, buckets
//! them into quantized colors and maps the dominant hue to a food category
//! with a canned ingredient guess. The fusion layer only reaches for it when
//! OCR produced nothing trustworthy.
//!
//! ## Features
//!
//! - Dominant-color extraction with 32-step quantization and alpha masking
//! - Hue-based food category prediction with a fixed predicate order
//! - Canned ingredient guesses per category, usable as a last-resort
//!   ingredient list
//! - Image decoding via the `image` crate with thumbnailing for speed
//!
//! ## Usage
//!
//! ```rust
//! use labelscan::visual::{category_for_colors, dominant_colors, FoodCategory};
//!
//! // A uniform brown RGBA strip quantizes to a single dominant color
//! let pixels = [150u8, 100, 60, 255].repeat(40);
//! let colors = dominant_colors(&pixels);
//!
//! assert_eq!(colors[0].hex(), "#a06040");
//! assert_eq!(category_for_colors(&colors), FoodCategory::BakedGoods);
//! ```

use crate::fusion_config::MAX_IMAGE_DIMENSION;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// One quantized color extracted from a label photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorInfo {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorInfo {
    /// CSS-style lowercase hex representation, e.g. `#a06040`
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    // Hue predicates, checked in the order listed in category_for_colors.
    // The ranges are tuned for packaged-food photography, not general art.

    fn is_brownish(&self) -> bool {
        self.r > 100 && self.r < 200 && self.g > 60 && self.g < 150 && self.b > 30 && self.b < 100
    }

    fn is_whitish(&self) -> bool {
        self.r > 200 && self.g > 200 && self.b > 200
    }

    fn is_yellowish(&self) -> bool {
        self.r > 180 && self.g > 150 && self.b < 100
    }

    fn is_reddish(&self) -> bool {
        self.r > 150 && self.g < 100 && self.b < 100
    }

    fn is_greenish(&self) -> bool {
        self.g > self.r && self.g > self.b && self.g > 100
    }

    fn is_dark_brown(&self) -> bool {
        self.r < 80 && self.g < 60 && self.b < 50
    }

    fn is_transparent_ish(&self) -> bool {
        let avg = (u16::from(self.r) + u16::from(self.g) + u16::from(self.b)) / 3;
        avg > 220 || avg < 30
    }
}

/// Coarse food category predicted from dominant label colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FoodCategory {
    BakedGoods,
    DairyFlour,
    CheeseSnack,
    MeatTomato,
    VegetableHerb,
    ChocolateCoffee,
    Beverage,
    ProcessedFood,
    Unknown,
}

impl FoodCategory {
    /// Human-readable category label
    pub fn display_name(&self) -> &'static str {
        match self {
            FoodCategory::BakedGoods => "Baked Goods / Grains",
            FoodCategory::DairyFlour => "Dairy / Flour Product",
            FoodCategory::CheeseSnack => "Cheese / Snack / Oil",
            FoodCategory::MeatTomato => "Meat / Tomato Product",
            FoodCategory::VegetableHerb => "Vegetable / Herb Product",
            FoodCategory::ChocolateCoffee => "Chocolate / Coffee / Dark Sauce",
            FoodCategory::Beverage => "Beverage / Liquid",
            FoodCategory::ProcessedFood => "Processed Food Product",
            FoodCategory::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Result of analyzing a label photo by color alone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualAnalysis {
    /// Up to five dominant quantized colors, most frequent first
    pub dominant_colors: Vec<ColorInfo>,
    /// Category guessed from the single most dominant color
    pub food_category: FoodCategory,
    /// Canned ingredient guess for the category
    pub predicted_ingredients: Vec<String>,
    /// Fixed heuristic confidence: 0.7 for any decoded image
    pub confidence: f32,
}

impl VisualAnalysis {
    /// Predicted ingredients joined into a single parseable list
    pub fn ingredient_list(&self) -> String {
        self.predicted_ingredients.join(", ")
    }
}

/// Extract up to five dominant colors from raw RGBA bytes
///
/// Samples every 10th pixel, skips pixels with alpha below 128 and quantizes
/// each channel to steps of 32 (clamped to 255 so near-white stays a valid
/// channel value). Ties in frequency keep first-seen order.
pub fn dominant_colors(rgba: &[u8]) -> Vec<ColorInfo> {
    let mut counts: Vec<(ColorInfo, usize)> = Vec::new();

    let mut i = 0;
    while i + 3 < rgba.len() {
        let alpha = rgba[i + 3];
        if alpha >= 128 {
            let color = ColorInfo {
                r: quantize(rgba[i]),
                g: quantize(rgba[i + 1]),
                b: quantize(rgba[i + 2]),
            };
            match counts.iter_mut().find(|(c, _)| *c == color) {
                Some((_, n)) => *n += 1,
                None => counts.push((color, 1)),
            }
        }
        i += 40; // every 10th RGBA pixel
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(5).map(|(color, _)| color).collect()
}

fn quantize(channel: u8) -> u8 {
    let stepped = (f32::from(channel) / 32.0).round() as u32 * 32;
    stepped.min(255) as u8
}

/// Map dominant colors to a food category
///
/// Only the most frequent color is consulted. The predicate order matters:
/// bright white is dairy/flour before it is "transparent", and mid browns are
/// baked goods before dark browns are chocolate.
pub fn category_for_colors(colors: &[ColorInfo]) -> FoodCategory {
    let Some(primary) = colors.first() else {
        return FoodCategory::Unknown;
    };

    if primary.is_brownish() {
        FoodCategory::BakedGoods
    } else if primary.is_whitish() {
        FoodCategory::DairyFlour
    } else if primary.is_yellowish() {
        FoodCategory::CheeseSnack
    } else if primary.is_reddish() {
        FoodCategory::MeatTomato
    } else if primary.is_greenish() {
        FoodCategory::VegetableHerb
    } else if primary.is_dark_brown() {
        FoodCategory::ChocolateCoffee
    } else if primary.is_transparent_ish() {
        FoodCategory::Beverage
    } else {
        FoodCategory::ProcessedFood
    }
}

/// Canned ingredient guess for a predicted category
pub fn predicted_ingredients(category: FoodCategory) -> &'static [&'static str] {
    match category {
        FoodCategory::BakedGoods => &[
            "Wheat Flour",
            "Sugar",
            "Yeast",
            "Salt",
            "Water",
            "Vegetable Oil",
        ],
        FoodCategory::DairyFlour => &["Milk", "Flour", "Sugar", "Salt", "Butter", "Cream"],
        FoodCategory::CheeseSnack => &[
            "Corn",
            "Vegetable Oil",
            "Salt",
            "Cheese Powder",
            "Flavor Enhancers",
        ],
        FoodCategory::MeatTomato => &["Tomato Paste", "Salt", "Sugar", "Spices", "Preservatives"],
        FoodCategory::VegetableHerb => &["Vegetables", "Herbs", "Salt", "Oil", "Vinegar"],
        FoodCategory::ChocolateCoffee => &["Cocoa", "Sugar", "Milk", "Soy Sauce", "Caramel Color"],
        FoodCategory::Beverage => &[
            "Water",
            "Sugar",
            "Flavoring",
            "Preservatives",
            "Citric Acid",
        ],
        FoodCategory::ProcessedFood | FoodCategory::Unknown => {
            &["Various Ingredients", "Preservatives", "Flavor Enhancers"]
        }
    }
}

/// Analyze a label photo by color and guess its food category
///
/// Decodes the image, thumbnails it to at most
/// [`MAX_IMAGE_DIMENSION`] pixels per side and runs the dominant-color
/// heuristics on the result.
pub fn analyze_image(image_path: &str) -> Result<VisualAnalysis> {
    info!("Starting visual color analysis for image: {}", image_path);

    let img = image::open(image_path)
        .with_context(|| format!("Failed to decode image for visual analysis: {image_path}"))?;

    let thumbnail = img.thumbnail(MAX_IMAGE_DIMENSION, MAX_IMAGE_DIMENSION);
    let rgba = thumbnail.to_rgba8();

    let colors = dominant_colors(rgba.as_raw());
    let category = category_for_colors(&colors);
    let predicted = predicted_ingredients(category)
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<String>>();

    debug!(
        "Visual analysis found {} dominant colors, primary {:?}",
        colors.len(),
        colors.first().map(ColorInfo::hex)
    );
    info!(
        "Visual analysis predicted category: {}",
        category.display_name()
    );

    Ok(VisualAnalysis {
        dominant_colors: colors,
        food_category: category,
        predicted_ingredients: predicted,
        confidence: 0.7,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build an RGBA buffer of 10-pixel blocks so each block contributes
    /// exactly one sample (every 10th pixel is read).
    fn sampled_blocks(samples: &[[u8; 4]]) -> Vec<u8> {
        let mut buf = Vec::new();
        for px in samples {
            for _ in 0..10 {
                buf.extend_from_slice(px);
            }
        }
        buf
    }

    #[test]
    fn test_dominant_colors_rank_by_frequency() {
        // Three brown samples, one white sample
        let buf = sampled_blocks(&[
            [150, 100, 60, 255],
            [150, 100, 60, 255],
            [150, 100, 60, 255],
            [250, 250, 250, 255],
        ]);

        let colors = dominant_colors(&buf);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0].hex(), "#a06040");
        assert_eq!(colors[1].hex(), "#ffffff");
    }

    #[test]
    fn test_quantize_clamps_high_channels() {
        // 250 would quantize to 256 without the clamp
        assert_eq!(quantize(250), 255);
        assert_eq!(quantize(255), 255);
        assert_eq!(quantize(0), 0);
        assert_eq!(quantize(100), 96);
        assert_eq!(quantize(60), 64);
    }

    #[test]
    fn test_transparent_pixels_are_skipped() {
        let buf = sampled_blocks(&[[150, 100, 60, 0], [150, 100, 60, 127]]);

        let colors = dominant_colors(&buf);
        assert!(colors.is_empty());
        assert_eq!(category_for_colors(&colors), FoodCategory::Unknown);
    }

    #[test]
    fn test_dominant_colors_caps_at_five() {
        let buf = sampled_blocks(&[
            [0, 0, 0, 255],
            [64, 0, 0, 255],
            [0, 64, 0, 255],
            [0, 0, 64, 255],
            [64, 64, 0, 255],
            [64, 0, 64, 255],
            [0, 64, 64, 255],
        ]);

        assert_eq!(dominant_colors(&buf).len(), 5);
    }

    #[test]
    fn test_hex_is_zero_padded() {
        let color = ColorInfo { r: 0, g: 32, b: 255 };
        assert_eq!(color.hex(), "#0020ff");
    }

    #[test]
    fn test_category_mapping_across_hues() {
        let cases = [
            ([160u8, 96u8, 64u8], FoodCategory::BakedGoods),
            ([224, 224, 224], FoodCategory::DairyFlour),
            ([224, 192, 32], FoodCategory::CheeseSnack),
            ([224, 64, 64], FoodCategory::MeatTomato),
            ([96, 160, 64], FoodCategory::VegetableHerb),
            ([64, 32, 32], FoodCategory::ChocolateCoffee),
            ([128, 128, 160], FoodCategory::ProcessedFood),
        ];

        for (rgb, expected) in cases {
            let colors = vec![ColorInfo {
                r: rgb[0],
                g: rgb[1],
                b: rgb[2],
            }];
            assert_eq!(
                category_for_colors(&colors),
                expected,
                "rgb {:?} should map to {:?}",
                rgb,
                expected
            );
        }
    }

    #[test]
    fn test_bright_white_is_dairy_before_beverage() {
        // (250,250,250) satisfies both the whitish and transparent-ish
        // predicates; the whitish check runs first.
        let colors = vec![ColorInfo {
            r: 250,
            g: 250,
            b: 250,
        }];
        assert_eq!(category_for_colors(&colors), FoodCategory::DairyFlour);
    }

    #[test]
    fn test_near_black_reads_as_beverage() {
        // Blue channel is too high for the chocolate range, average under 30
        let colors = vec![ColorInfo { r: 0, g: 0, b: 64 }];
        assert_eq!(category_for_colors(&colors), FoodCategory::Beverage);
    }

    #[test]
    fn test_predicted_ingredients_never_empty() {
        let categories = [
            FoodCategory::BakedGoods,
            FoodCategory::DairyFlour,
            FoodCategory::CheeseSnack,
            FoodCategory::MeatTomato,
            FoodCategory::VegetableHerb,
            FoodCategory::ChocolateCoffee,
            FoodCategory::Beverage,
            FoodCategory::ProcessedFood,
            FoodCategory::Unknown,
        ];
        for category in categories {
            assert!(
                !predicted_ingredients(category).is_empty(),
                "{} should carry an ingredient guess",
                category.display_name()
            );
        }
    }

    #[test]
    fn test_ingredient_list_joins_with_commas() {
        let analysis = VisualAnalysis {
            dominant_colors: vec![],
            food_category: FoodCategory::Beverage,
            predicted_ingredients: vec!["Water".to_string(), "Sugar".to_string()],
            confidence: 0.7,
        };
        assert_eq!(analysis.ingredient_list(), "Water, Sugar");
    }
}
