//! # Ingredient Analysis Pipeline
//!
//! This module ties the pipeline together: validate the raw list, tokenize
//! it, classify every token, aggregate the classification mix, and wrap the
//! whole thing in a verdict plus personalized narrative. The entry point is
//! [`analyze`]; everything it uses is also public so callers can run stages
//! on their own.
//!
//! ## Core Concepts
//!
//! - **Ingredient**: one classified token with whatever curated metadata the
//!   knowledge base had for it
//! - **IngredientSummary**: classification counts plus the allergen union
//! - **Verdict**: a three-tier recommendation with a fixed explanation
//!
//! ## Usage
//!
//! ```rust
//! use labelscan::analysis::analyze;
//! use labelscan::personalization::UserPreferences;
//!
//! let result = analyze("water, sugar, salt", &UserPreferences::default()).unwrap();
//! assert_eq!(result.summary.total_count, 3);
//! ```

use crate::analysis_errors::AnalysisError;
use crate::classifier;
use crate::knowledge_base::Classification;
use crate::parser;
use crate::personalization::{self, Highlight, UserPreferences};
use crate::sample_data::{self, SourceCitation};
use crate::validator;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One analyzed ingredient
///
/// Metadata fields are populated only from genuine knowledge-base hits;
/// heuristically classified ingredients carry just a name, classification,
/// and fallback description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Token with its first letter capitalized, otherwise as parsed
    pub name: String,
    /// Origin classification
    pub classification: Classification,
    /// Why it is used, or a per-classification fallback; never empty
    pub description: String,
    /// Formal or label name
    pub chemical_name: Option<String>,
    /// Curated "why used" text
    pub why_used: Option<String>,
    /// Curated upsides
    pub benefits: Option<Vec<String>>,
    /// Curated caveats
    pub considerations: Option<Vec<String>>,
    /// Who should pay attention
    pub who_should_care: Option<String>,
    /// Unsettled research notes
    pub evolving_science: Option<String>,
    /// Allergen labels
    pub allergens: Option<Vec<String>>,
}

impl Ingredient {
    /// Build an ingredient from a parsed token
    pub fn from_token(token: &str) -> Self {
        let classification = classifier::classify(token);
        let description = classifier::describe(token, classification);
        let details = classifier::details(token);

        Self {
            name: capitalize_first(token),
            classification,
            description,
            chemical_name: details
                .and_then(|record| record.chemical_name)
                .map(str::to_string),
            why_used: details.and_then(|record| record.why_used).map(str::to_string),
            benefits: details.map(|record| owned_strings(record.benefits)).filter(|v| !v.is_empty()),
            considerations: details
                .map(|record| owned_strings(record.considerations))
                .filter(|v| !v.is_empty()),
            who_should_care: details
                .and_then(|record| record.who_should_care)
                .map(str::to_string),
            evolving_science: details
                .and_then(|record| record.evolving_science)
                .map(str::to_string),
            allergens: details
                .map(|record| owned_strings(record.allergens))
                .filter(|v| !v.is_empty()),
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.classification)
    }
}

/// Classification counts and allergen union for one ingredient list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientSummary {
    /// Number of ingredients analyzed
    pub total_count: usize,
    /// Ingredients classified natural
    pub natural_count: usize,
    /// Ingredients classified processed
    pub processed_count: usize,
    /// Ingredients classified synthetic
    pub synthetic_count: usize,
    /// One-sentence characterization of the mix
    pub summary_text: String,
    /// Union of all allergen labels, sorted and deduplicated
    pub allergens: Vec<String>,
}

impl fmt::Display for IngredientSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} ingredients ({} natural, {} processed, {} synthetic)",
            self.total_count, self.natural_count, self.processed_count, self.synthetic_count
        )?;
        if !self.allergens.is_empty() {
            writeln!(f, "Allergens: {}", self.allergens.join(", "))?;
        }
        write!(f, "{}", self.summary_text)
    }
}

/// Three-tier recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerdictKind {
    /// Mostly natural, minimal synthetic content
    BetterChoice,
    /// Fine sometimes, not a staple
    OccasionalChoice,
    /// Heavy on processed and synthetic ingredients
    NotIdeal,
}

impl VerdictKind {
    /// Kebab-case name matching the serialized form
    pub fn display_name(&self) -> &'static str {
        match self {
            VerdictKind::BetterChoice => "better-choice",
            VerdictKind::OccasionalChoice => "occasional-choice",
            VerdictKind::NotIdeal => "not-ideal",
        }
    }
}

impl fmt::Display for VerdictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Recommendation plus its fixed explanation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Which tier the product landed in
    pub kind: VerdictKind,
    /// Consumer-facing explanation for the tier
    pub explanation: String,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.explanation)
    }
}

/// Complete output of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Context-aware narrative opener
    pub opening_statement: String,
    /// Up to two ingredients the reader should look at first
    pub what_matters_most: Vec<Highlight>,
    /// Classification counts and allergens
    pub summary: IngredientSummary,
    /// Tiered recommendation
    pub verdict: Verdict,
    /// Goal-specific closing paragraph
    pub personalized_insight: String,
    /// Every analyzed ingredient, in label order
    pub ingredients: Vec<Ingredient>,
    /// Reference sources backing the editorial content
    pub sources: Vec<SourceCitation>,
}

/// Run the full analysis pipeline over a raw ingredient list
///
/// Fails with [`AnalysisError::Validation`] when the text does not look like
/// food, and with [`AnalysisError::EmptyAnalysis`] when it validates but
/// parses to zero tokens (for example a bare comma). Given the same input
/// and preferences, the result is always identical.
pub fn analyze(
    ingredient_list: &str,
    preferences: &UserPreferences,
) -> Result<AnalysisResult, AnalysisError> {
    info!(
        "Starting ingredient analysis ({} chars)",
        ingredient_list.len()
    );

    let validation = validator::validate(ingredient_list);
    if !validation.is_valid {
        let reason = validation
            .reason
            .unwrap_or_else(|| "Invalid food input".to_string());
        debug!("Analysis rejected by validator: {}", reason);
        return Err(AnalysisError::Validation(reason));
    }

    let ingredients: Vec<Ingredient> = parser::parse(ingredient_list)
        .map(|token| Ingredient::from_token(&token))
        .collect();
    if ingredients.is_empty() {
        debug!("Input validated but produced no tokens");
        return Err(AnalysisError::EmptyAnalysis);
    }

    let summary = aggregate(&ingredients);
    let verdict = verdict_for(&summary);
    let opening_statement = personalization::opening_statement(
        summary.natural_count,
        summary.processed_count,
        summary.synthetic_count,
        &ingredients,
    );
    let what_matters_most = personalization::what_matters_most(&ingredients, preferences);
    let personalized_insight = personalization::insight(preferences, verdict.kind, &ingredients);

    info!(
        "Analysis complete: {} ({} natural / {} processed / {} synthetic)",
        verdict.kind, summary.natural_count, summary.processed_count, summary.synthetic_count
    );

    Ok(AnalysisResult {
        opening_statement,
        what_matters_most,
        summary,
        verdict,
        personalized_insight,
        ingredients,
        sources: sample_data::citation_sources(),
    })
}

/// Count classifications and collect allergens in a single pass
pub fn aggregate(ingredients: &[Ingredient]) -> IngredientSummary {
    let mut natural_count = 0;
    let mut processed_count = 0;
    let mut synthetic_count = 0;
    let mut allergens: BTreeSet<String> = BTreeSet::new();

    for ingredient in ingredients {
        match ingredient.classification {
            Classification::Natural => natural_count += 1,
            Classification::Processed => processed_count += 1,
            Classification::Synthetic => synthetic_count += 1,
        }
        if let Some(labels) = &ingredient.allergens {
            for allergen in labels {
                allergens.insert(allergen.clone());
            }
        }
    }

    IngredientSummary {
        total_count: ingredients.len(),
        natural_count,
        processed_count,
        synthetic_count,
        summary_text: summary_text(natural_count, processed_count, synthetic_count),
        allergens: allergens.into_iter().collect(),
    }
}

fn summary_text(natural: usize, processed: usize, synthetic: usize) -> String {
    let total = natural + processed + synthetic;
    if total == 0 {
        return "No ingredients were available to summarize.".to_string();
    }

    let natural_percent = natural as f64 / total as f64 * 100.0;
    let synthetic_percent = synthetic as f64 / total as f64 * 100.0;

    let text = if natural_percent > 60.0 {
        "This product primarily consists of natural ingredients with some processed components."
    } else if synthetic_percent > 30.0 {
        "This product contains a notable amount of synthetic additives and processed ingredients."
    } else {
        "This product is a mix of natural, processed, and synthetic ingredients."
    };
    text.to_string()
}

/// Map a summary onto the three-tier verdict
///
/// Tiers are checked in order: better-choice needs a clearly natural mix
/// (over 60% natural, under 10% synthetic); not-ideal catches either a
/// heavy synthetic share (over 30%) or more processed than natural
/// ingredients; everything else is an occasional choice. Shares on the
/// boundary do not qualify (strict comparisons).
pub fn verdict_for(summary: &IngredientSummary) -> Verdict {
    if summary.total_count == 0 {
        return Verdict {
            kind: VerdictKind::OccasionalChoice,
            explanation: "No ingredients were available to assess.".to_string(),
        };
    }

    let total = summary.total_count as f64;
    let natural_percent = summary.natural_count as f64 / total * 100.0;
    let synthetic_percent = summary.synthetic_count as f64 / total * 100.0;

    if natural_percent > 60.0 && synthetic_percent < 10.0 {
        return Verdict {
            kind: VerdictKind::BetterChoice,
            explanation: "This product contains mostly natural ingredients with minimal synthetic additives, making it a better choice for regular consumption.".to_string(),
        };
    }

    if synthetic_percent > 30.0 || summary.processed_count > summary.natural_count {
        return Verdict {
            kind: VerdictKind::NotIdeal,
            explanation: "This product contains significant amounts of processed and synthetic ingredients, making it not ideal for daily consumption.".to_string(),
        };
    }

    Verdict {
        kind: VerdictKind::OccasionalChoice,
        explanation: "While it contains natural ingredients, the presence of processed and synthetic components makes it suitable for occasional consumption rather than a daily staple.".to_string(),
    }
}

fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn owned_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
