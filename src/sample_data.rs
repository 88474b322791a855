//! # Sample Products and Citation Sources
//!
//! Curated demo content: four realistic packaged products for trying the
//! pipeline without a scanner, and the reference sources cited alongside
//! every analysis result.

use serde::{Deserialize, Serialize};

/// A ready-made product for demos and tests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleProduct {
    /// Stable identifier, e.g. "soft-drink"
    pub id: String,
    /// Display name
    pub name: String,
    /// Product category
    pub category: String,
    /// Full ingredient list as printed on the label
    pub ingredient_list: String,
}

/// A reference source backing the editorial ingredient content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceCitation {
    /// Organization or database name
    pub name: String,
    /// What this source contributes
    pub description: String,
    /// Landing page
    pub url: String,
}

fn product(id: &str, name: &str, category: &str, ingredient_list: &str) -> SampleProduct {
    SampleProduct {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        ingredient_list: ingredient_list.to_string(),
    }
}

fn citation(name: &str, description: &str, url: &str) -> SourceCitation {
    SourceCitation {
        name: name.to_string(),
        description: description.to_string(),
        url: url.to_string(),
    }
}

/// The four built-in sample products
pub fn sample_products() -> Vec<SampleProduct> {
    vec![
        product(
            "packaged-bread",
            "Packaged Bread",
            "Bakery",
            "Enriched wheat flour (wheat flour, malted barley flour, niacin, reduced iron, thiamine mononitrate, riboflavin, folic acid), water, high fructose corn syrup, yeast, soybean oil, salt, calcium propionate (preservative), monoglycerides, datem, calcium sulfate, soy lecithin",
        ),
        product(
            "instant-noodles",
            "Instant Noodles",
            "Packaged Food",
            "Maida (all-purpose flour), palm oil, salt, wheat gluten, onion (spice), garlic (spice), turmeric (spice), coriander (spice), chili (spice), flavor enhancers (monosodium glutamate, disodium inosinate, disodium guanylate), thickeners (modified starch, xanthan gum)",
        ),
        product(
            "protein-bar",
            "Protein Bar",
            "Nutrition",
            "Protein blend (whey protein isolate, milk protein isolate), soluble corn fiber, almonds, water, erythritol, natural flavors, cocoa butter, sea salt, sunflower lecithin, sucralose, steviol glycosides",
        ),
        product(
            "soft-drink",
            "Soft Drink",
            "Beverage",
            "Carbonated water, high fructose corn syrup, caramel color, phosphoric acid, natural flavors, caffeine, citric acid",
        ),
    ]
}

/// Look up a sample product by its identifier
pub fn sample_product(id: &str) -> Option<SampleProduct> {
    sample_products()
        .into_iter()
        .find(|product| product.id == id)
}

/// The reference sources cited with every analysis result
pub fn citation_sources() -> Vec<SourceCitation> {
    vec![
        citation(
            "FDA (Food & Drug Administration)",
            "United States regulator for food safety and additive approvals.",
            "https://www.fda.gov/food",
        ),
        citation(
            "Nutrition.gov",
            "United States government portal for evidence-based nutrition guidance.",
            "https://www.nutrition.gov/",
        ),
        citation(
            "EFSA (European Food Safety Authority)",
            "European Union risk assessments for food ingredients and additives.",
            "https://www.efsa.europa.eu/",
        ),
        citation(
            "WHO (World Health Organization)",
            "Global guidance on diet, nutrition, and food safety.",
            "https://www.who.int/health-topics/food-safety",
        ),
        citation(
            "PubChem",
            "Open chemistry database describing food compounds and additives.",
            "https://pubchem.ncbi.nlm.nih.gov/",
        ),
        citation(
            "NIH / NCBI",
            "Biomedical literature behind the health considerations.",
            "https://www.ncbi.nlm.nih.gov/",
        ),
    ]
}
