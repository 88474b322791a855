//! # Ingredient Knowledge Base
//!
//! This module holds the curated ingredient records and the known-product
//! keyword table that back classification and analysis. Records are keyed by
//! canonical lowercase substrings and matched by containment, so a token like
//! "organic wheat flour" resolves to the "wheat flour" record.
//!
//! ## Features
//!
//! - Curated records with classification, chemistry, benefits, considerations,
//!   and allergen data
//! - Containment lookup ordered longest-key-first so specific entries such as
//!   "enriched wheat flour" always win over "wheat flour"
//! - Known-product keyword table mapping brand aliases to full ingredient
//!   lists (used to override weak OCR text)
//! - Category accessors over the product table
//!
//! ## Usage
//!
//! ```rust
//! use labelscan::knowledge_base::{lookup, Classification};
//!
//! let record = lookup("organic wheat flour").unwrap();
//! assert_eq!(record.classification, Classification::Processed);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Origin taxonomy for a food ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Occurs in nature and is used close to its original form
    Natural,
    /// Derived from natural sources but industrially transformed
    Processed,
    /// Manufactured through chemical synthesis
    Synthetic,
}

impl Classification {
    /// Lowercase name as used in summaries and serialized output
    pub fn display_name(&self) -> &'static str {
        match self {
            Classification::Natural => "natural",
            Classification::Processed => "processed",
            Classification::Synthetic => "synthetic",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Curated knowledge about a single ingredient
///
/// All text is fixed editorial content; the table below is the single source
/// of truth for it. Optional fields stay `None` when the record has nothing
/// to say, and empty slices mean "reviewed, nothing notable".
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientRecord {
    /// Origin classification
    pub classification: Classification,
    /// Formal or label name, e.g. "Monosodium Glutamate (MSG)"
    pub chemical_name: Option<&'static str>,
    /// Why manufacturers put it in products
    pub why_used: Option<&'static str>,
    /// Upsides worth knowing about
    pub benefits: &'static [&'static str],
    /// Caveats and documented concerns
    pub considerations: &'static [&'static str],
    /// Which consumers should pay attention
    pub who_should_care: Option<&'static str>,
    /// Where research is still unsettled
    pub evolving_science: Option<&'static str>,
    /// Allergen labels this ingredient carries
    pub allergens: &'static [&'static str],
}

impl IngredientRecord {
    fn new(classification: Classification) -> Self {
        Self {
            classification,
            chemical_name: None,
            why_used: None,
            benefits: &[],
            considerations: &[],
            who_should_care: None,
            evolving_science: None,
            allergens: &[],
        }
    }

    fn with_chemical_name(mut self, name: &'static str) -> Self {
        self.chemical_name = Some(name);
        self
    }

    fn with_why_used(mut self, why: &'static str) -> Self {
        self.why_used = Some(why);
        self
    }

    fn with_benefits(mut self, benefits: &'static [&'static str]) -> Self {
        self.benefits = benefits;
        self
    }

    fn with_considerations(mut self, considerations: &'static [&'static str]) -> Self {
        self.considerations = considerations;
        self
    }

    fn with_who_should_care(mut self, who: &'static str) -> Self {
        self.who_should_care = Some(who);
        self
    }

    fn with_evolving_science(mut self, science: &'static str) -> Self {
        self.evolving_science = Some(science);
        self
    }

    fn with_allergens(mut self, allergens: &'static [&'static str]) -> Self {
        self.allergens = allergens;
        self
    }
}

/// Known product with a precomposed ingredient list
///
/// When OCR text mentions one of the `keywords`, the whole list replaces the
/// scanned text, which is far more reliable than OCR on curved packaging.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductKeywordRecord {
    /// Lowercase aliases that identify the product in free text
    pub keywords: &'static [&'static str],
    /// Canonical display name
    pub product_name: &'static str,
    /// Full ingredient list as printed on the label
    pub ingredients: &'static str,
    /// Product category, e.g. "Beverage"
    pub category: &'static str,
}

/// Ingredient records keyed by lowercase substring
///
/// Sorted longest-key-first at init so containment lookup hits the most
/// specific entry; ties keep declaration order (stable sort).
static INGREDIENT_RECORDS: LazyLock<Vec<(&'static str, IngredientRecord)>> = LazyLock::new(|| {
    let mut entries: Vec<(&'static str, IngredientRecord)> = vec![
        // Flours and grains
        (
            "wheat flour",
            IngredientRecord::new(Classification::Processed)
                .with_chemical_name("Refined Wheat Flour")
                .with_why_used("It's inexpensive, creates a desirable texture (chewy and soft), and is easy to process.")
                .with_benefits(&[
                    "Provides carbohydrates for energy",
                    "Source of some B vitamins and iron (when enriched)",
                    "Easy to digest for most people",
                ])
                .with_considerations(&[
                    "Low in fiber compared to whole wheat",
                    "Stripped of many vitamins and minerals during refining",
                    "High glycemic index may cause blood sugar spikes",
                    "Contains gluten which some people cannot tolerate",
                ])
                .with_who_should_care("Individuals managing blood sugar levels, those looking for higher fiber intake, people with celiac disease or gluten sensitivity, or anyone prioritizing nutrient-dense foods.")
                .with_allergens(&["Wheat", "Gluten"]),
        ),
        (
            "enriched wheat flour",
            IngredientRecord::new(Classification::Processed)
                .with_chemical_name("Enriched Refined Wheat Flour")
                .with_why_used("Refined flour with added vitamins and minerals to replace nutrients lost during processing.")
                .with_benefits(&[
                    "Provides carbohydrates for energy",
                    "Fortified with B vitamins (niacin, thiamine, riboflavin, folic acid) and iron",
                    "Helps prevent nutrient deficiencies",
                ])
                .with_considerations(&[
                    "Still low in fiber compared to whole wheat",
                    "High glycemic index may cause blood sugar spikes",
                    "Contains gluten",
                    "Enrichment doesn't replace all lost nutrients from refining",
                ])
                .with_who_should_care("Individuals managing blood sugar levels, those looking for higher fiber intake, people with celiac disease or gluten sensitivity.")
                .with_allergens(&["Wheat", "Gluten"]),
        ),
        (
            "maida",
            IngredientRecord::new(Classification::Processed)
                .with_chemical_name("Refined All-Purpose Flour (Maida)")
                .with_why_used("Creates desirable texture, inexpensive, easy to process.")
                .with_benefits(&[
                    "Provides carbohydrates for energy",
                    "Creates soft, chewy texture",
                ])
                .with_considerations(&[
                    "Highly refined with almost no fiber",
                    "Stripped of all nutrients during processing",
                    "Very high glycemic index (causes rapid blood sugar spikes)",
                    "May contribute to weight gain",
                    "Linked to increased risk of diabetes and heart disease",
                    "Can cause digestive issues",
                    "Contains gluten",
                ])
                .with_who_should_care("People with diabetes or prediabetes, those managing weight, individuals with celiac disease or gluten sensitivity, anyone prioritizing nutrient-dense foods."),
        ),
        (
            "wheat gluten",
            IngredientRecord::new(Classification::Processed)
                .with_chemical_name("Vital Wheat Gluten")
                .with_why_used("Provides elasticity and chewiness to noodles.")
                .with_benefits(&[
                    "High in protein",
                    "Improves texture and chewiness",
                    "Helps dough hold together",
                ])
                .with_considerations(&[
                    "Problematic for people with celiac disease",
                    "Can trigger gluten sensitivity",
                    "May cause digestive issues",
                    "Highly processed protein isolate",
                ])
                .with_who_should_care("People with celiac disease, those with gluten sensitivity or intolerance, individuals with wheat allergies.")
                .with_allergens(&["Wheat", "Gluten"]),
        ),
        // Water and carbonation
        (
            "water",
            IngredientRecord::new(Classification::Natural)
                .with_why_used("Essential for hydration and as a base for mixing ingredients.")
                .with_benefits(&[
                    "Essential for life and bodily functions",
                    "Zero calories",
                    "Helps with hydration",
                    "No additives or processing",
                ]),
        ),
        (
            "carbonated water",
            IngredientRecord::new(Classification::Natural)
                .with_why_used("Provides fizz and refreshing sensation.")
                .with_benefits(&[
                    "Hydration",
                    "Zero calories",
                    "No sugar",
                    "May help with digestion",
                    "Satisfying alternative to sugary sodas",
                ])
                .with_considerations(&[
                    "May cause bloating or gas in some people",
                    "Can erode tooth enamel if consumed in large amounts (due to carbonic acid)",
                    "May trigger IBS symptoms in sensitive individuals",
                ])
                .with_who_should_care("People with IBS or digestive sensitivities, those concerned about dental health."),
        ),
        // Sweeteners
        (
            "high fructose corn syrup",
            IngredientRecord::new(Classification::Processed)
                .with_chemical_name("High Fructose Corn Syrup (HFCS)")
                .with_why_used("Sweetener that is cheaper than sugar and extends shelf life.")
                .with_benefits(&[
                    "Provides sweetness and energy",
                    "Cost-effective for manufacturers",
                    "Extends product shelf life",
                ])
                .with_considerations(&[
                    "High in calories with no nutritional value",
                    "May contribute to weight gain and obesity according to FDA studies",
                    "Linked to increased risk of type 2 diabetes per American Diabetes Association",
                    "Associated with non-alcoholic fatty liver disease when consumed in excess",
                    "Can increase triglyceride levels",
                    "May promote insulin resistance",
                    "Dietary Guidelines for Americans recommend limiting added sugars to less than 10% of daily calories",
                    "No fiber, vitamins, or minerals",
                ])
                .with_who_should_care("Anyone watching their sugar intake, managing weight, people with diabetes or prediabetes, those concerned about metabolic health, individuals with fatty liver disease, people following Dietary Guidelines for Americans."),
        ),
        (
            "sugar",
            IngredientRecord::new(Classification::Processed)
                .with_chemical_name("Sucrose")
                .with_why_used("Provides sweetness and enhances flavor.")
                .with_benefits(&[
                    "Quick source of energy",
                    "Enhances taste and palatability",
                ])
                .with_considerations(&[
                    "High in calories with no nutritional value (empty calories)",
                    "Can cause blood sugar spikes",
                    "Linked to tooth decay and cavities",
                    "Excessive consumption associated with obesity, type 2 diabetes, and heart disease per FDA",
                    "May be addictive according to research",
                    "American Heart Association recommends limiting added sugars to 25g/day for women and 36g/day for men",
                    "Contributes to inflammation when consumed in excess",
                    "No vitamins, minerals, or fiber",
                ])
                .with_who_should_care("People with diabetes, those managing weight, individuals concerned about dental health, anyone trying to reduce sugar intake, people following American Heart Association guidelines."),
        ),
        (
            "erythritol",
            IngredientRecord::new(Classification::Processed)
                .with_chemical_name("Erythritol")
                .with_why_used("Sugar alcohol used as a low-calorie sweetener.")
                .with_benefits(&[
                    "Very low calorie (0.2 calories per gram)",
                    "Does not spike blood sugar or insulin",
                    "Tooth-friendly (doesn't cause cavities)",
                    "About 70% as sweet as sugar",
                    "Generally well-tolerated",
                ])
                .with_considerations(&[
                    "May cause digestive discomfort (bloating, gas) in large amounts",
                    "Can have a cooling aftertaste",
                    "Laxative effect if consumed in excess",
                    "Recent studies suggest possible link to cardiovascular events (ongoing research)",
                ])
                .with_who_should_care("Individuals managing blood sugar (positive), those sensitive to sugar alcohols, people with digestive issues.")
                .with_evolving_science("Recent research has raised questions about potential cardiovascular effects of erythritol, though more studies are needed to confirm these findings. Most health authorities still consider it safe at typical consumption levels."),
        ),
        (
            "sucralose",
            IngredientRecord::new(Classification::Synthetic)
                .with_chemical_name("Sucralose")
                .with_why_used("Artificial sweetener that is 600 times sweeter than sugar with no calories.")
                .with_benefits(&[
                    "Zero calories",
                    "Does not affect blood sugar or insulin levels",
                    "Heat-stable for cooking",
                    "No bitter aftertaste",
                ])
                .with_considerations(&[
                    "Artificial sweetener some prefer to avoid",
                    "May alter gut bacteria composition",
                    "Possible effects on glucose metabolism with regular use",
                    "May increase cravings for sweet foods",
                    "Not metabolized by the body",
                ])
                .with_who_should_care("Those avoiding artificial ingredients, people concerned about gut health, individuals preferring natural alternatives.")
                .with_evolving_science("Emerging research suggests sucralose may affect gut microbiome and glucose metabolism, though it's still approved as safe by regulatory agencies. Long-term effects are still being studied."),
        ),
        (
            "steviol glycosides",
            IngredientRecord::new(Classification::Processed)
                .with_chemical_name("Steviol Glycosides (from Stevia)")
                .with_why_used("Natural-origin sweetener extracted from stevia plant.")
                .with_benefits(&[
                    "Zero calories",
                    "Does not affect blood sugar",
                    "Derived from natural plant source",
                    "200-300 times sweeter than sugar",
                    "May have antioxidant properties",
                ])
                .with_considerations(&[
                    "Can have a bitter or licorice-like aftertaste",
                    "Highly processed despite natural origin",
                    "May cause digestive issues in some people",
                    "Possible effects on blood pressure (may lower it)",
                ])
                .with_who_should_care("People with low blood pressure, those sensitive to stevia, individuals preferring less processed sweeteners."),
        ),
        // Leavening and fermentation
        (
            "yeast",
            IngredientRecord::new(Classification::Natural)
                .with_why_used("Leavening agent that helps dough rise through natural fermentation.")
                .with_benefits(&[
                    "Natural fermentation process",
                    "Provides B vitamins (especially B12 in nutritional yeast)",
                    "Source of protein and minerals",
                    "Improves digestibility of grains",
                    "Contains beneficial compounds",
                ])
                .with_considerations(&[
                    "May cause issues for people with yeast allergies",
                    "Can trigger symptoms in those with candida overgrowth",
                ])
                .with_who_should_care("Individuals with yeast allergies or sensitivities, people managing candida issues."),
        ),
        // Salts
        (
            "salt",
            IngredientRecord::new(Classification::Natural)
                .with_why_used("Enhances flavor and acts as a preservative.")
                .with_benefits(&[
                    "Essential mineral (sodium) needed for nerve and muscle function",
                    "Helps maintain fluid balance",
                    "Flavor enhancement",
                    "Natural preservative",
                ])
                .with_considerations(&[
                    "Excessive intake can lead to high blood pressure",
                    "May increase risk of heart disease and stroke per American Heart Association",
                    "Can cause water retention",
                    "Linked to kidney problems in excess",
                    "FDA recommends limiting sodium to less than 2,300mg per day (about 1 teaspoon of salt)",
                    "Average American consumes 3,400mg daily, exceeding recommendations",
                    "May contribute to stomach cancer risk when consumed in very high amounts",
                ])
                .with_who_should_care("Individuals with hypertension, heart conditions, kidney disease, or those on sodium-restricted diets, people following FDA dietary guidelines."),
        ),
        (
            "sea salt",
            IngredientRecord::new(Classification::Natural)
                .with_why_used("Enhances flavor, contains trace minerals.")
                .with_benefits(&[
                    "Contains trace minerals (magnesium, calcium, potassium)",
                    "Less processed than table salt",
                    "Natural flavor enhancement",
                ])
                .with_considerations(&[
                    "Still high in sodium",
                    "Excessive intake can lead to high blood pressure",
                    "Trace minerals present in very small amounts",
                    "May contain microplastics from ocean pollution",
                ])
                .with_who_should_care("Individuals with hypertension, heart conditions, or on sodium-restricted diets."),
        ),
        // Preservatives and flavor enhancers
        (
            "calcium propionate",
            IngredientRecord::new(Classification::Synthetic)
                .with_chemical_name("Calcium Propionate (E282)")
                .with_why_used("Preservative that prevents mold and bacterial growth.")
                .with_benefits(&[
                    "Extends shelf life significantly",
                    "Generally recognized as safe by FDA",
                    "Prevents food waste",
                    "Effective at low concentrations",
                ])
                .with_considerations(&[
                    "Some individuals report headaches or migraines",
                    "May cause digestive issues in sensitive people",
                    "Possible link to behavioral changes in children (limited evidence)",
                    "Synthetic additive some prefer to avoid",
                ])
                .with_who_should_care("Individuals who report sensitivity to preservatives, parents of children with behavioral concerns, those preferring to avoid synthetic additives."),
        ),
        (
            "monosodium glutamate",
            IngredientRecord::new(Classification::Synthetic)
                .with_chemical_name("Monosodium Glutamate (MSG)")
                .with_why_used("Flavor enhancer that intensifies savory (umami) taste, allowing manufacturers to use less natural ingredients.")
                .with_benefits(&[
                    "Enhances savory flavor significantly",
                    "Allows for reduced sodium in some products",
                    "Generally recognized as safe by FDA",
                ])
                .with_considerations(&[
                    "Some individuals report sensitivity symptoms (headaches, flushing, sweating)",
                    "May increase appetite and food intake",
                    "Can mask poor quality ingredients",
                    "Concerns about potential effects on brain health (ongoing research)",
                    "May cause allergic-like reactions in sensitive individuals",
                ])
                .with_who_should_care("Individuals who report sensitivity to MSG, those trying to control appetite, people preferring whole food ingredients, anyone avoiding synthetic additives.")
                .with_evolving_science("Research on MSG sensitivity is mixed: while some individuals report symptoms, large-scale studies haven't consistently linked it to adverse reactions in the general population when consumed at typical levels. However, some studies suggest potential concerns with high doses."),
        ),
        (
            "disodium inosinate",
            IngredientRecord::new(Classification::Synthetic)
                .with_chemical_name("Disodium Inosinate (E631)")
                .with_why_used("Flavor enhancer that works synergistically with MSG to boost savory taste.")
                .with_benefits(&[
                    "Enhances umami flavor",
                    "Allows for reduced use of other flavor enhancers",
                ])
                .with_considerations(&[
                    "Often used alongside MSG",
                    "May cause reactions in people sensitive to flavor enhancers",
                    "Derived from animal or fish sources (concern for vegetarians)",
                    "Synthetic additive",
                ])
                .with_who_should_care("Vegetarians and vegans, people sensitive to flavor enhancers, those avoiding synthetic additives."),
        ),
        (
            "disodium guanylate",
            IngredientRecord::new(Classification::Synthetic)
                .with_chemical_name("Disodium Guanylate (E627)")
                .with_why_used("Flavor enhancer that amplifies savory taste, often used with MSG.")
                .with_benefits(&[
                    "Enhances umami flavor",
                    "Effective at low concentrations",
                ])
                .with_considerations(&[
                    "Often combined with MSG",
                    "May cause reactions in sensitive individuals",
                    "Not recommended for people with gout (contains purines)",
                    "Derived from yeast or fish",
                    "Synthetic additive",
                ])
                .with_who_should_care("People with gout or high uric acid levels, those sensitive to flavor enhancers, individuals avoiding synthetic additives."),
        ),
        // Oils and fats
        (
            "palm oil",
            IngredientRecord::new(Classification::Processed)
                .with_why_used("Used for frying and adding texture; stable at high temperatures with long shelf life.")
                .with_benefits(&[
                    "Stable at high temperatures for cooking",
                    "Long shelf life reduces food waste",
                    "Source of vitamin E (tocotrienols and tocopherols)",
                    "Contains beta-carotene (provitamin A)",
                    "Semi-solid at room temperature (good for texture)",
                    "Does not require hydrogenation (no trans fats)",
                ])
                .with_considerations(&[
                    "High in saturated fat (approximately 50% of total fat content)",
                    "May raise LDL (bad) cholesterol levels according to FDA studies",
                    "Environmental concerns (deforestation, habitat destruction for orangutans)",
                    "Linked to increased cardiovascular disease risk when consumed in excess",
                    "American Heart Association recommends limiting saturated fat intake",
                    "May contribute to inflammation when consumed regularly",
                ])
                .with_who_should_care("Those monitoring saturated fat intake, people with high cholesterol or heart disease, individuals following American Heart Association guidelines, environmentally conscious consumers."),
        ),
        (
            "soybean oil",
            IngredientRecord::new(Classification::Processed)
                .with_chemical_name("Refined Soybean Oil")
                .with_why_used("Inexpensive cooking oil that adds moisture and extends shelf life.")
                .with_benefits(&[
                    "Source of polyunsaturated fats",
                    "Contains vitamin E",
                    "Neutral flavor",
                    "Cost-effective",
                ])
                .with_considerations(&[
                    "Highly processed and refined",
                    "High in omega-6 fatty acids (may promote inflammation when ratio to omega-3 is imbalanced)",
                    "Often genetically modified",
                    "May contain trans fats if partially hydrogenated",
                ])
                .with_who_should_care("People concerned about omega-6 to omega-3 ratio, those avoiding GMOs, individuals with soy allergies.")
                .with_allergens(&["Soy"]),
        ),
        (
            "cocoa butter",
            IngredientRecord::new(Classification::Natural)
                .with_chemical_name("Theobroma Cacao Seed Butter")
                .with_why_used("Provides creamy texture and chocolate flavor.")
                .with_benefits(&[
                    "Contains healthy fats",
                    "Rich in antioxidants",
                    "May support heart health",
                    "Natural source of polyphenols",
                    "Stable fat that doesn't require hydrogenation",
                ])
                .with_considerations(&[
                    "High in calories and saturated fat",
                    "Can contribute to weight gain if consumed in excess",
                ])
                .with_who_should_care("Those managing weight or saturated fat intake."),
        ),
        // Protein isolates
        (
            "whey protein isolate",
            IngredientRecord::new(Classification::Processed)
                .with_why_used("High-quality protein source for muscle building and recovery.")
                .with_benefits(&[
                    "High protein content (90%+ protein)",
                    "Complete amino acid profile",
                    "Fast absorption for muscle recovery",
                    "Supports muscle growth and repair",
                    "May aid in weight management",
                    "Low in lactose",
                ])
                .with_considerations(&[
                    "May cause digestive issues for some people",
                    "Can trigger acne in sensitive individuals",
                    "Processed dairy product",
                    "May contain artificial sweeteners",
                    "Not suitable for vegans",
                ])
                .with_who_should_care("Athletes and fitness enthusiasts (positive), people with dairy sensitivities, those with acne-prone skin, vegans.")
                .with_allergens(&["Milk", "Dairy"]),
        ),
        (
            "milk protein isolate",
            IngredientRecord::new(Classification::Processed)
                .with_chemical_name("Milk Protein Isolate")
                .with_why_used("Concentrated protein source with slow and fast-digesting proteins.")
                .with_benefits(&[
                    "High protein content",
                    "Contains both whey and casein proteins",
                    "Supports muscle growth",
                    "Provides sustained amino acid release",
                ])
                .with_considerations(&[
                    "Contains lactose (may cause issues for lactose-intolerant individuals)",
                    "Processed dairy product",
                    "Not suitable for vegans",
                    "May cause digestive discomfort",
                ])
                .with_who_should_care("People with lactose intolerance, those with dairy allergies, vegans.")
                .with_allergens(&["Milk", "Dairy", "Lactose"]),
        ),
        // Colors and acids
        (
            "caramel color",
            IngredientRecord::new(Classification::Processed)
                .with_chemical_name("Caramel Color (E150)")
                .with_why_used("Provides brown color to beverages and foods.")
                .with_benefits(&[
                    "Aesthetic appeal",
                    "Consistent color",
                    "Cost-effective",
                ])
                .with_considerations(&[
                    "Some types (Class III and IV) may contain 4-methylimidazole (4-MEI), a potential carcinogen",
                    "Purely cosmetic with no nutritional value",
                    "May mask poor quality ingredients",
                    "Highly processed",
                ])
                .with_who_should_care("Those preferring to minimize processed additives, people concerned about potential carcinogens, anyone prioritizing whole foods."),
        ),
        (
            "phosphoric acid",
            IngredientRecord::new(Classification::Synthetic)
                .with_chemical_name("Phosphoric Acid (E338)")
                .with_why_used("Provides tangy flavor and acts as a preservative and acidulant.")
                .with_benefits(&[
                    "Flavor enhancement",
                    "Preservative properties",
                    "Prevents bacterial growth",
                ])
                .with_considerations(&[
                    "May interfere with calcium absorption",
                    "Linked to lower bone mineral density",
                    "Can contribute to kidney problems with excessive consumption",
                    "May erode tooth enamel",
                    "Associated with increased risk of chronic kidney disease",
                ])
                .with_who_should_care("Individuals concerned about bone health, people with kidney disease or at risk, those with osteoporosis, children and adolescents building bone mass."),
        ),
        (
            "citric acid",
            IngredientRecord::new(Classification::Processed)
                .with_chemical_name("Citric Acid (E330)")
                .with_why_used("Provides tartness, acts as preservative, and enhances flavor.")
                .with_benefits(&[
                    "Natural preservative",
                    "Enhances flavor",
                    "May improve mineral absorption",
                    "Antioxidant properties",
                ])
                .with_considerations(&[
                    "Usually manufactured from mold (Aspergillus niger) rather than citrus fruits",
                    "May cause tooth enamel erosion in high concentrations",
                    "Can trigger allergic reactions in sensitive individuals",
                    "May cause digestive upset in large amounts",
                ])
                .with_who_should_care("People with citrus allergies, those with sensitive teeth, individuals with digestive sensitivities."),
        ),
        // Stimulants
        (
            "caffeine",
            IngredientRecord::new(Classification::Natural)
                .with_why_used("Stimulant that provides energy boost and enhances alertness.")
                .with_benefits(&[
                    "Increased alertness and focus",
                    "Improved physical performance",
                    "May boost metabolism",
                    "Contains antioxidants",
                    "May reduce risk of certain diseases (Parkinson's, Alzheimer's)",
                    "Enhances mood",
                ])
                .with_considerations(&[
                    "Can cause jitters, anxiety, and restlessness",
                    "May disrupt sleep patterns",
                    "Can lead to dependency and withdrawal symptoms",
                    "May increase heart rate and blood pressure",
                    "Can cause digestive issues",
                    "May worsen anxiety disorders",
                ])
                .with_who_should_care("Those sensitive to caffeine, people with anxiety disorders, individuals with heart conditions, pregnant women, those managing sleep issues."),
        ),
        // Flavorings
        (
            "natural flavors",
            IngredientRecord::new(Classification::Processed)
                .with_chemical_name("Natural Flavoring Substances")
                .with_why_used("Enhances or adds specific flavors to products.")
                .with_benefits(&[
                    "Derived from natural sources (plants, animals)",
                    "Enhances taste without adding calories",
                    "Allows for consistent flavor",
                ])
                .with_considerations(&[
                    "Highly processed despite \"natural\" label",
                    "Can contain dozens of chemical compounds",
                    "May include solvents and preservatives",
                    "Vague term that doesn't specify exact ingredients",
                    "May trigger allergies in sensitive individuals",
                ])
                .with_who_should_care("People with food allergies, those preferring whole foods, individuals sensitive to additives."),
        ),
        (
            "artificial flavors",
            IngredientRecord::new(Classification::Synthetic)
                .with_chemical_name("Artificial Flavoring Substances")
                .with_why_used("Provides specific flavors at lower cost than natural alternatives.")
                .with_benefits(&[
                    "Cost-effective",
                    "Consistent flavor",
                    "Stable shelf life",
                ])
                .with_considerations(&[
                    "Synthetic chemicals created in laboratories",
                    "May contain petroleum-derived compounds",
                    "Possible allergic reactions",
                    "No nutritional value",
                    "May mask poor quality ingredients",
                    "Long-term health effects not fully understood",
                ])
                .with_who_should_care("Those avoiding synthetic additives, people with chemical sensitivities, anyone preferring natural ingredients."),
        ),
        // Thickeners and emulsifiers
        (
            "modified starch",
            IngredientRecord::new(Classification::Processed)
                .with_chemical_name("Modified Food Starch")
                .with_why_used("Thickening agent that improves texture and stability.")
                .with_benefits(&[
                    "Improves texture and consistency",
                    "Prevents separation",
                    "Extends shelf life",
                    "Gluten-free",
                ])
                .with_considerations(&[
                    "Highly processed",
                    "May be derived from GMO corn",
                    "Can cause blood sugar spikes",
                    "May cause digestive issues in some people",
                    "Nutritionally empty",
                ])
                .with_who_should_care("People managing blood sugar, those avoiding GMOs, individuals with digestive sensitivities."),
        ),
        (
            "xanthan gum",
            IngredientRecord::new(Classification::Processed)
                .with_chemical_name("Xanthan Gum (E415)")
                .with_why_used("Thickening and stabilizing agent.")
                .with_benefits(&[
                    "Effective thickener at low concentrations",
                    "Gluten-free",
                    "May help lower blood sugar and cholesterol",
                    "Provides fiber",
                ])
                .with_considerations(&[
                    "May cause digestive issues (bloating, gas, diarrhea) in large amounts",
                    "Produced by bacterial fermentation",
                    "Can be a laxative in high doses",
                    "May be derived from corn, wheat, soy, or dairy (allergen concerns)",
                ])
                .with_who_should_care("People with digestive sensitivities, those with allergies to source ingredients, individuals with IBS."),
        ),
        (
            "monoglycerides",
            IngredientRecord::new(Classification::Processed)
                .with_chemical_name("Monoglycerides and Diglycerides")
                .with_why_used("Emulsifiers that help mix oil and water, improve texture.")
                .with_benefits(&[
                    "Improves texture and consistency",
                    "Extends shelf life",
                    "Prevents separation",
                ])
                .with_considerations(&[
                    "Highly processed",
                    "May contain trans fats",
                    "Can be derived from animal or plant sources (concern for vegetarians)",
                    "May affect gut health",
                    "Nutritionally empty",
                ])
                .with_who_should_care("Vegetarians and vegans (if animal-derived), people avoiding trans fats, those concerned about processed additives."),
        ),
        (
            "soy lecithin",
            IngredientRecord::new(Classification::Processed)
                .with_chemical_name("Soy Lecithin (E322)")
                .with_why_used("Emulsifier that helps ingredients blend together.")
                .with_benefits(&[
                    "Effective emulsifier",
                    "May support brain health (contains choline)",
                    "Generally well-tolerated",
                    "Helps improve texture",
                ])
                .with_considerations(&[
                    "Often derived from GMO soybeans",
                    "May cause allergic reactions in people with soy allergies",
                    "Extracted using chemical solvents (hexane)",
                    "Highly processed",
                ])
                .with_who_should_care("People with soy allergies, those avoiding GMOs, individuals concerned about chemical extraction processes.")
                .with_allergens(&["Soy"]),
        ),
        (
            "sunflower lecithin",
            IngredientRecord::new(Classification::Processed)
                .with_chemical_name("Sunflower Lecithin")
                .with_why_used("Emulsifier that helps ingredients blend, alternative to soy lecithin.")
                .with_benefits(&[
                    "Effective emulsifier",
                    "Soy-free alternative",
                    "Contains choline",
                    "Generally well-tolerated",
                    "Often non-GMO",
                ])
                .with_considerations(&[
                    "Highly processed",
                    "May be extracted using chemical solvents",
                    "Can cause allergic reactions in people with sunflower seed allergies",
                ])
                .with_who_should_care("People with sunflower seed allergies, those concerned about processing methods."),
        ),
        // Whole foods
        (
            "almonds",
            IngredientRecord::new(Classification::Natural)
                .with_why_used("Provides protein, healthy fats, and nutrients.")
                .with_benefits(&[
                    "High in healthy monounsaturated fats",
                    "Good source of protein and fiber",
                    "Rich in vitamin E, magnesium, and antioxidants",
                    "May help lower cholesterol",
                    "Supports heart health",
                    "May aid in weight management",
                ])
                .with_considerations(&[
                    "High in calories",
                    "Common allergen",
                    "May contain phytic acid (reduces mineral absorption)",
                    "Can cause digestive issues if consumed in large amounts",
                ])
                .with_who_should_care("People with tree nut allergies, those managing calorie intake.")
                .with_allergens(&["Tree Nuts", "Almonds"]),
        ),
        (
            "soluble corn fiber",
            IngredientRecord::new(Classification::Processed)
                .with_chemical_name("Soluble Corn Fiber")
                .with_why_used("Adds fiber and sweetness while reducing calories.")
                .with_benefits(&[
                    "Provides dietary fiber",
                    "Low glycemic impact",
                    "Prebiotic properties (feeds beneficial gut bacteria)",
                    "Helps with satiety",
                ])
                .with_considerations(&[
                    "Highly processed",
                    "May cause digestive issues (gas, bloating) in some people",
                    "Often derived from GMO corn",
                    "Not the same as natural fiber from whole foods",
                ])
                .with_who_should_care("People with digestive sensitivities, those avoiding GMOs, individuals preferring whole food fiber sources."),
        ),
        // Aromatics and spices
        (
            "onion",
            IngredientRecord::new(Classification::Natural)
                .with_why_used("Provides savory and aromatic flavor.")
                .with_benefits(&[
                    "Rich in antioxidants and vitamin C",
                    "Contains anti-inflammatory compounds",
                    "May support heart health",
                    "Natural flavor enhancer",
                    "Contains prebiotic fiber",
                ])
                .with_considerations(&[
                    "May cause digestive discomfort or gas in some people",
                    "Can trigger heartburn or acid reflux",
                ])
                .with_who_should_care("People with IBS or digestive sensitivities, those prone to heartburn."),
        ),
        (
            "garlic",
            IngredientRecord::new(Classification::Natural)
                .with_why_used("Provides pungent, savory, and aromatic flavor.")
                .with_benefits(&[
                    "Contains allicin (powerful antioxidant)",
                    "May boost immune system",
                    "Anti-inflammatory and antimicrobial properties",
                    "May help lower blood pressure and cholesterol",
                    "Supports heart health",
                ])
                .with_considerations(&[
                    "May cause digestive upset in some people",
                    "Can interact with blood thinners",
                    "May cause bad breath and body odor",
                ])
                .with_who_should_care("People on blood-thinning medications, those with digestive sensitivities."),
        ),
        (
            "turmeric",
            IngredientRecord::new(Classification::Natural)
                .with_why_used("Adds color and a distinct earthy, slightly bitter flavor.")
                .with_benefits(&[
                    "Contains curcumin (powerful anti-inflammatory)",
                    "Rich in antioxidants",
                    "May support brain health",
                    "May help with arthritis and joint pain",
                    "Supports digestive health",
                ])
                .with_considerations(&[
                    "May interact with blood thinners",
                    "Can cause digestive upset in large amounts",
                    "May lower blood sugar (concern for diabetics on medication)",
                ])
                .with_who_should_care("People on blood-thinning medications, those with gallbladder issues, individuals taking diabetes medications."),
        ),
        (
            "coriander",
            IngredientRecord::new(Classification::Natural)
                .with_why_used("Contributes a warm, nutty, and citrusy flavor.")
                .with_benefits(&[
                    "Rich in antioxidants",
                    "May help lower blood sugar",
                    "Supports digestive health",
                    "Anti-inflammatory properties",
                    "May promote heart health",
                ])
                .with_considerations(&[
                    "May cause allergic reactions in some people",
                    "Can interact with diabetes medications",
                ])
                .with_who_should_care("People with spice allergies, those taking diabetes medications."),
        ),
        (
            "chili",
            IngredientRecord::new(Classification::Natural)
                .with_why_used("Provides heat and a pungent flavor.")
                .with_benefits(&[
                    "Contains capsaicin (may boost metabolism)",
                    "Rich in vitamins A and C",
                    "May help with pain relief",
                    "Anti-inflammatory properties",
                    "May support heart health",
                ])
                .with_considerations(&[
                    "Can cause digestive upset or heartburn",
                    "May irritate stomach lining in sensitive individuals",
                    "Can trigger IBS symptoms",
                ])
                .with_who_should_care("People with IBS, those with sensitive stomachs, individuals prone to heartburn or acid reflux."),
        ),
    ];

    // Longest keys first so "enriched wheat flour" beats "wheat flour";
    // sort is stable, so equal lengths keep declaration order.
    entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    entries
});

/// Known products keyed by brand aliases
static PRODUCT_KEYWORDS: LazyLock<Vec<ProductKeywordRecord>> = LazyLock::new(|| {
    vec![
        // Chocolates
        ProductKeywordRecord {
            keywords: &["dairy milk", "cadbury"],
            product_name: "Dairy Milk Chocolate",
            ingredients: "Sugar, Milk Solids, Cocoa Butter, Cocoa Solids, Emulsifiers (E442, E476), Flavoring",
            category: "Chocolate",
        },
        ProductKeywordRecord {
            keywords: &["kit kat", "kitkat"],
            product_name: "Kit Kat",
            ingredients: "Sugar, Wheat Flour, Milk Solids, Cocoa Butter, Cocoa Mass, Vegetable Fat, Yeast, Emulsifier (Soya Lecithin), Raising Agent (Sodium Bicarbonate), Salt, Natural Vanilla Flavoring",
            category: "Chocolate",
        },
        ProductKeywordRecord {
            keywords: &["snickers"],
            product_name: "Snickers",
            ingredients: "Milk Chocolate (Sugar, Cocoa Butter, Chocolate, Skim Milk, Lactose, Milkfat, Soy Lecithin), Peanuts, Corn Syrup, Sugar, Palm Oil, Skim Milk, Lactose, Salt, Egg Whites, Artificial Flavor",
            category: "Chocolate",
        },
        // Beverages
        ProductKeywordRecord {
            keywords: &["coca cola", "coke", "coca-cola"],
            product_name: "Coca-Cola",
            ingredients: "Carbonated Water, Sugar, Caramel Color (E150d), Phosphoric Acid, Natural Flavors, Caffeine",
            category: "Beverage",
        },
        ProductKeywordRecord {
            keywords: &["pepsi"],
            product_name: "Pepsi",
            ingredients: "Carbonated Water, High Fructose Corn Syrup, Caramel Color, Sugar, Phosphoric Acid, Caffeine, Citric Acid, Natural Flavor",
            category: "Beverage",
        },
        ProductKeywordRecord {
            keywords: &["sprite"],
            product_name: "Sprite",
            ingredients: "Carbonated Water, Sugar, Citric Acid, Natural Lemon and Lime Flavors, Sodium Citrate, Sodium Benzoate (Preservative)",
            category: "Beverage",
        },
        ProductKeywordRecord {
            keywords: &["mountain dew"],
            product_name: "Mountain Dew",
            ingredients: "Carbonated Water, High Fructose Corn Syrup, Concentrated Orange Juice, Citric Acid, Natural Flavor, Sodium Benzoate, Caffeine, Sodium Citrate, Gum Arabic, Calcium Disodium EDTA, Brominated Vegetable Oil, Yellow 5",
            category: "Beverage",
        },
        // Chips and snacks
        ProductKeywordRecord {
            keywords: &["lays", "lay's"],
            product_name: "Lay's Chips",
            ingredients: "Potatoes, Vegetable Oil (Sunflower, Corn, and/or Canola Oil), Salt",
            category: "Snack",
        },
        ProductKeywordRecord {
            keywords: &["doritos"],
            product_name: "Doritos",
            ingredients: "Corn, Vegetable Oil (Corn, Canola, and/or Sunflower Oil), Maltodextrin, Salt, Cheddar Cheese (Milk, Cheese Cultures, Salt, Enzymes), Whey, Monosodium Glutamate, Buttermilk, Romano Cheese, Whey Protein Concentrate, Onion Powder, Corn Flour, Natural and Artificial Flavor, Dextrose, Tomato Powder, Lactose, Spices, Artificial Color (Yellow 6, Yellow 5, Red 40), Lactic Acid, Citric Acid, Sugar, Garlic Powder, Skim Milk, Red and Green Bell Pepper Powder, Disodium Inosinate, Disodium Guanylate",
            category: "Snack",
        },
        ProductKeywordRecord {
            keywords: &["pringles"],
            product_name: "Pringles",
            ingredients: "Dried Potatoes, Vegetable Oil (Corn, Cottonseed, High Oleic Soybean, and/or Sunflower Oil), Degerminated Yellow Corn Flour, Cornstarch, Rice Flour, Maltodextrin, Mono- and Diglycerides, Salt, Wheat Starch",
            category: "Snack",
        },
        ProductKeywordRecord {
            keywords: &["cheetos"],
            product_name: "Cheetos",
            ingredients: "Enriched Corn Meal (Corn Meal, Ferrous Sulfate, Niacin, Thiamin Mononitrate, Riboflavin, Folic Acid), Vegetable Oil (Corn, Canola, and/or Sunflower Oil), Cheese Seasoning (Whey, Cheddar Cheese [Milk, Cheese Cultures, Salt, Enzymes], Canola Oil, Maltodextrin, Natural and Artificial Flavors, Salt, Whey Protein Concentrate, Monosodium Glutamate, Lactic Acid, Citric Acid, Artificial Color [Yellow 6]), Salt",
            category: "Snack",
        },
        // Cookies and biscuits
        ProductKeywordRecord {
            keywords: &["oreo"],
            product_name: "Oreo",
            ingredients: "Sugar, Unbleached Enriched Flour (Wheat Flour, Niacin, Reduced Iron, Thiamine Mononitrate, Riboflavin, Folic Acid), Palm and/or Canola Oil, Cocoa (Processed with Alkali), High Fructose Corn Syrup, Leavening (Baking Soda and/or Calcium Phosphate), Salt, Soy Lecithin, Chocolate, Artificial Flavor",
            category: "Cookie",
        },
        ProductKeywordRecord {
            keywords: &["parle-g", "parle g"],
            product_name: "Parle-G",
            ingredients: "Wheat Flour, Sugar, Edible Vegetable Oil (Palm), Invert Sugar Syrup, Leavening Agents (503(ii), 500(ii)), Milk Solids, Salt, Emulsifier (322), Dough Conditioner (223)",
            category: "Biscuit",
        },
        // Instant noodles
        ProductKeywordRecord {
            keywords: &["maggi", "maggie"],
            product_name: "Maggi Noodles",
            ingredients: "Wheat Flour (Maida), Palm Oil, Salt, Wheat Gluten, Guar Gum, Acidity Regulators (501(i), 500(i), 330), Humectant (412), Colour (101(i)). Tastemaker: Mixed Spices (Onion Powder, Coriander Powder, Turmeric Powder, Red Chilli Powder, Garlic Powder, Cumin Powder, Aniseed Powder, Ginger Powder, Fenugreek Powder, Black Pepper Powder, Clove Powder, Nutmeg Powder, Cardamom Powder), Sugar, Flavour Enhancers (635, 627), Hydrolysed Groundnut Protein, Starch, Edible Vegetable Oil (Palm Oil), Wheat Flour, Salt, Thickener (508), Colour (150d)",
            category: "Instant Noodles",
        },
        ProductKeywordRecord {
            keywords: &["top ramen", "nissin"],
            product_name: "Top Ramen",
            ingredients: "Enriched Wheat Flour (Wheat Flour, Niacin, Reduced Iron, Thiamine Mononitrate, Riboflavin, Folic Acid), Vegetable Oil (Contains One or More of the Following: Canola, Cottonseed, Palm), Preserved by TBHQ, Salt, Soy Sauce (Water, Wheat, Soybeans, Salt), Potassium Carbonate, Sodium (Mono, Hexameta, and/or Tripoly) Phosphate, Sodium Carbonate, Turmeric",
            category: "Instant Noodles",
        },
        // Cereals
        ProductKeywordRecord {
            keywords: &["corn flakes", "kelloggs"],
            product_name: "Corn Flakes",
            ingredients: "Milled Corn, Sugar, Malt Flavor, High Fructose Corn Syrup, Salt, BHT for Freshness. Vitamins and Minerals: Iron (Ferric Phosphate), Niacinamide, Vitamin B6 (Pyridoxine Hydrochloride), Vitamin B2 (Riboflavin), Vitamin B1 (Thiamin Hydrochloride), Folic Acid, Vitamin D3, Vitamin B12",
            category: "Cereal",
        },
        // Bread
        ProductKeywordRecord {
            keywords: &["white bread", "sandwich bread"],
            product_name: "White Bread",
            ingredients: "Enriched Wheat Flour (Flour, Malted Barley Flour, Niacin, Reduced Iron, Thiamine Mononitrate, Riboflavin, Folic Acid), Water, High Fructose Corn Syrup, Yeast, Soybean Oil, Salt, Wheat Gluten, Dough Conditioners (Contains One or More of the Following: Sodium Stearoyl Lactylate, Calcium Stearoyl Lactylate, Monoglycerides, Mono- and Diglycerides, Distilled Monoglycerides, Calcium Peroxide, Calcium Iodate, DATEM, Ethoxylated Mono- and Diglycerides, Enzymes, Ascorbic Acid), Calcium Propionate (Preservative), Soy Lecithin",
            category: "Bread",
        },
        // Dairy
        ProductKeywordRecord {
            keywords: &["amul milk"],
            product_name: "Amul Milk",
            ingredients: "Milk, Vitamin A, Vitamin D3",
            category: "Dairy",
        },
        // Energy drinks
        ProductKeywordRecord {
            keywords: &["red bull", "redbull"],
            product_name: "Red Bull",
            ingredients: "Carbonated Water, Sucrose, Glucose, Citric Acid, Taurine, Sodium Bicarbonate, Magnesium Carbonate, Caffeine, Niacinamide, Calcium Pantothenate, Pyridoxine HCl, Vitamin B12, Natural and Artificial Flavors, Colors",
            category: "Energy Drink",
        },
        ProductKeywordRecord {
            keywords: &["monster energy", "monster"],
            product_name: "Monster Energy",
            ingredients: "Carbonated Water, Sugar, Glucose, Citric Acid, Natural Flavors, Taurine, Sodium Citrate, Color Added, Panax Ginseng Root Extract, L-Carnitine, Caffeine, Sorbic Acid, Benzoic Acid, Niacinamide, Sucralose, Salt, D-Glucuronolactone, Inositol, Guarana Extract, Pyridoxine Hydrochloride, Riboflavin, Maltodextrin, Cyanocobalamin",
            category: "Energy Drink",
        },
    ]
});

/// Look up the knowledge-base record for an ingredient token
///
/// Matching is case-insensitive containment against the ordered key list, so
/// the most specific (longest) matching key wins.
pub fn lookup(token: &str) -> Option<&'static IngredientRecord> {
    let normalized = token.to_lowercase();
    let records: &'static Vec<(&'static str, IngredientRecord)> = &INGREDIENT_RECORDS;

    records
        .iter()
        .find(|(key, _)| normalized.contains(key))
        .map(|(_, record)| record)
}

/// Search free text for a known product keyword
///
/// Returns the first product whose alias appears in the text, or None when
/// the text is too short or mentions no known product. Aliases are checked
/// in table order, within each product in alias order.
pub fn find_product(text: &str) -> Option<&'static ProductKeywordRecord> {
    if text.trim().len() < 3 {
        return None;
    }

    let normalized = text.to_lowercase();
    let products: &'static Vec<ProductKeywordRecord> = &PRODUCT_KEYWORDS;

    for product in products.iter() {
        for keyword in product.keywords {
            if normalized.contains(keyword) {
                debug!(
                    "Product keyword match: \"{}\" -> {}",
                    keyword, product.product_name
                );
                return Some(product);
            }
        }
    }

    None
}

/// All product categories, sorted and deduplicated
pub fn product_categories() -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = PRODUCT_KEYWORDS
        .iter()
        .map(|product| product.category)
        .collect();
    categories.sort_unstable();
    categories.dedup();
    categories
}

/// All known products in a category (case-insensitive match)
pub fn products_in_category(category: &str) -> Vec<&'static ProductKeywordRecord> {
    let products: &'static Vec<ProductKeywordRecord> = &PRODUCT_KEYWORDS;
    products
        .iter()
        .filter(|product| product.category.eq_ignore_ascii_case(category))
        .collect()
}
