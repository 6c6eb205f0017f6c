//! Lowercase filter implementation.
//!
//! This module provides a filter that converts all token text to lowercase.
//! Both training phrases and classified utterances are case-folded with this
//! filter so that "Hello" and "hello" project onto the same vocabulary entry.
//!
//! # Examples
//!
//! ```
//! use banter::analysis::token_filter::Filter;
//! use banter::analysis::token_filter::lowercase::LowercaseFilter;
//! use banter::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// # Behavior
///
/// - Converts all characters to lowercase (Unicode-aware)
/// - Skips tokens marked as stopped
/// - Preserves token positions and offsets
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens.map(|token| {
            if token.is_stopped() || token.text.chars().all(|c| c.is_lowercase() || !c.is_alphabetic()) {
                token
            } else {
                let lowered = token.text.to_lowercase();
                token.with_text(lowered)
            }
        });

        Ok(Box::new(filtered_tokens))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
