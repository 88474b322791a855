//! # Ingredient Classification
//!
//! This module assigns each ingredient token a [`Classification`]. The
//! knowledge base is consulted first; tokens it does not know fall back to
//! keyword heuristics, and anything still unresolved defaults to processed,
//! which is the safest middle ground for packaged-food ingredients.
//!
//! ## Features
//!
//! - Knowledge-base lookup wins over every heuristic
//! - Fixed heuristic precedence: natural indicators, then synthetic
//!   indicators, then the processed default
//! - Metadata comes only from genuine knowledge-base hits; the heuristic
//!   path never fabricates chemistry or allergen data
//! - Descriptions are never empty

use crate::knowledge_base::{self, Classification, IngredientRecord};
use log::trace;
use std::sync::LazyLock;

/// Substrings suggesting an ingredient is used close to its natural form
///
/// Checked before the synthetic list; the order is load-bearing for tokens
/// matching both (e.g. "natural benzoate blend" classifies as natural).
static NATURAL_INDICATORS: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| vec!["natural", "water", "salt", "spice", "herb"]);

/// Substrings suggesting chemical synthesis
static SYNTHETIC_INDICATORS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    vec![
        "acid",
        "glutamate",
        "propionate",
        "benzoate",
        "artificial",
        "synthetic",
        "sucralose",
        "aspartame",
    ]
});

/// Classify a single ingredient token
///
/// Never fails: unknown tokens silently take the heuristic path and end up
/// processed when nothing matches.
pub fn classify(token: &str) -> Classification {
    let normalized = token.to_lowercase();

    if let Some(record) = knowledge_base::lookup(&normalized) {
        return record.classification;
    }

    trace!("No knowledge-base hit for {:?}, using heuristics", token);

    if NATURAL_INDICATORS
        .iter()
        .any(|indicator| normalized.contains(indicator))
    {
        return Classification::Natural;
    }

    if SYNTHETIC_INDICATORS
        .iter()
        .any(|indicator| normalized.contains(indicator))
    {
        return Classification::Synthetic;
    }

    Classification::Processed
}

/// Curated record for a token, if the knowledge base has one
///
/// Returns None for heuristic-only tokens so callers never see invented
/// metadata.
pub fn details(token: &str) -> Option<&'static IngredientRecord> {
    knowledge_base::lookup(token)
}

/// Human-readable description for a classified token
///
/// Prefers the knowledge base's "why used" text; otherwise a fixed sentence
/// per classification, so the result is never empty.
pub fn describe(token: &str, classification: Classification) -> String {
    if let Some(why) = knowledge_base::lookup(token).and_then(|record| record.why_used) {
        return why.to_string();
    }

    match classification {
        Classification::Natural => "A naturally occurring ingredient.",
        Classification::Processed => "A processed ingredient derived from natural sources.",
        Classification::Synthetic => "A synthetically produced ingredient.",
    }
    .to_string()
}
