//! # Fusion Configuration Module
//!
//! This module defines configuration structures for the signal fusion layer,
//! including OCR acceptance thresholds and enrichment lookup limits.

// Constants for signal fusion
pub const MIN_OCR_CONFIDENCE: f32 = 60.0; // Tesseract-style 0-100 scale
pub const MIN_OCR_TEXT_LEN: usize = 10;
pub const ENRICHMENT_TIMEOUT_SECS: u64 = 5;
pub const MAX_IMAGE_DIMENSION: u32 = 200; // Thumbnail size for color sampling

/// Configuration for resolving OCR, keyword and visual signals
#[derive(Debug, Clone)]
pub struct FusionConfig {
    /// Minimum OCR confidence (0-100) before the text is trusted on its own
    pub min_ocr_confidence: f32,
    /// Minimum OCR text length in characters before the text is trusted
    pub min_ocr_text_len: usize,
    /// Timeout for best-effort product enrichment lookups in seconds
    pub enrichment_timeout_secs: u64,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            min_ocr_confidence: MIN_OCR_CONFIDENCE,
            min_ocr_text_len: MIN_OCR_TEXT_LEN,
            enrichment_timeout_secs: ENRICHMENT_TIMEOUT_SECS, // 5 seconds
        }
    }
}
