//! # Ingredient List Parser
//!
//! This module splits a raw ingredient list into individual tokens. Labels
//! routinely group sub-ingredients in parentheses, so splitting happens only
//! at commas outside any parenthesis: "emulsifiers (E442, E476)" stays one
//! token instead of two broken halves.
//!
//! ## Features
//!
//! - Comma splitting with a parenthesis depth counter (nested groups work)
//! - Tokens are trimmed and lowercased; empty tokens are dropped
//! - Lazy iterator, so callers can stop early without scanning the rest
//! - Declaration order is preserved
//!
//! ## Usage
//!
//! ```rust
//! use labelscan::parser::parse_to_vec;
//!
//! let tokens = parse_to_vec("Sugar, Emulsifiers (E442, E476), Salt");
//! assert_eq!(tokens, vec!["sugar", "emulsifiers (e442, e476)", "salt"]);
//! ```

/// Lazy iterator over the tokens of an ingredient list
///
/// Created by [`parse`]. Each call to `next` scans only as far as the next
/// top-level comma.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let rest = self.rest?;

            let mut depth: u32 = 0;
            let mut split_at = None;
            for (idx, ch) in rest.char_indices() {
                match ch {
                    '(' => depth += 1,
                    // A stray ')' stays at depth 0 rather than underflowing.
                    ')' => depth = depth.saturating_sub(1),
                    ',' if depth == 0 => {
                        split_at = Some(idx);
                        break;
                    }
                    _ => {}
                }
            }

            let candidate = match split_at {
                Some(idx) => {
                    let token = &rest[..idx];
                    self.rest = Some(&rest[idx + 1..]);
                    token
                }
                None => {
                    // No top-level comma left; the tail (including any
                    // unclosed parenthetical) is the final token.
                    self.rest = None;
                    rest
                }
            };

            let token = candidate.trim().to_lowercase();
            if !token.is_empty() {
                return Some(token);
            }
        }
    }
}

/// Tokenize an ingredient list lazily
///
/// Commas inside parentheses do not split; empty segments (doubled or
/// trailing commas) are skipped. The iterator is finite and never panics,
/// whatever the nesting looks like.
pub fn parse(raw: &str) -> Tokens<'_> {
    Tokens { rest: Some(raw) }
}

/// Tokenize an ingredient list into a vector
pub fn parse_to_vec(raw: &str) -> Vec<String> {
    parse(raw).collect()
}
