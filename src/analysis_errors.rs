//! # Analysis Error Types Module
//!
//! This module defines the error type returned by the analysis entry point.
//! Rejections are deliberate, consumer-facing outcomes, so each variant
//! carries (or is) a message suitable for display.

/// Errors produced when an ingredient list cannot be analyzed
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Input failed the food-relevance gate; carries the rejection reason
    Validation(String),
    /// Input validated but parsed to zero ingredient tokens
    EmptyAnalysis,
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::Validation(msg) => write!(f, "{msg}"),
            AnalysisError::EmptyAnalysis => {
                write!(f, "No ingredients could be parsed from the input.")
            }
        }
    }
}

impl std::error::Error for AnalysisError {}
