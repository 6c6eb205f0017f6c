//! Text analysis pipeline: tokenizers, token filters, and analyzers.
//!
//! The analysis pipeline defines the tokenization rule shared by training
//! and classification: an utterance is split into tokens, case-folded, and
//! cleaned of empty tokens before it is projected onto the vocabulary.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export the most commonly used types
pub use analyzer::{Analyzer, PipelineAnalyzer, SimpleAnalyzer, StandardAnalyzer};
pub use token::{Token, TokenStream};
pub use token_filter::{Filter, LowercaseFilter, RemoveEmptyFilter, StopFilter};
pub use tokenizer::{RegexTokenizer, Tokenizer, UnicodeWordTokenizer, WhitespaceTokenizer};
