//! # LabelScan
//!
//! Ingredient label analysis for packaged food: validates that text looks
//! like an ingredient list, parses it, classifies every ingredient as
//! natural, processed or synthetic, and turns the tallies into a verdict
//! with personalized guidance. Upstream helpers fuse OCR, known-product and
//! visual color signals into the single string the pipeline consumes, and
//! enrich results from public food databases.

pub mod analysis;
pub mod analysis_errors;
pub mod classifier;
pub mod food_data;
pub mod fusion;
pub mod fusion_config;
pub mod knowledge_base;
pub mod parser;
pub mod personalization;
pub mod sample_data;
pub mod validator;
pub mod visual;
