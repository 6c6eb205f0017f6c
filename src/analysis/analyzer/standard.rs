//! Standard analyzer used for training phrases and classified utterances.
//!
//! # Pipeline
//!
//! 1. RegexTokenizer (`\w+`, splits on non-word characters)
//! 2. LowercaseFilter
//! 3. RemoveEmptyFilter
//!
//! There is no stop word removal in the default pipeline: utterances such as
//! "I miss my home" are short enough that their function words carry most of
//! the matching signal.
//!
//! # Examples
//!
//! ```
//! use banter::analysis::analyzer::Analyzer;
//! use banter::analysis::analyzer::standard::StandardAnalyzer;
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("Hello, World!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::remove_empty::RemoveEmptyFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// A standard analyzer that case-folds and splits on non-word characters.
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer with default settings.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .with_name("standard".to_string());

        Ok(StandardAnalyzer { inner: analyzer })
    }

    /// Create a standard analyzer that also removes English stop words.
    ///
    /// Not suitable as a classification analyzer for short utterances; meant
    /// for callers reusing the pipeline on longer free text.
    pub fn with_stop_words() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .with_name("standard_stop".to_string());

        Ok(StandardAnalyzer { inner: analyzer })
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new().expect("Standard analyzer should be creatable with default settings")
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_standard_analyzer() {
        let analyzer = StandardAnalyzer::new().unwrap();

        let tokens: Vec<Token> = analyzer.analyze("I can't focus on studies").unwrap().collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["i", "can", "t", "focus", "on", "studies"]);
    }

    #[test]
    fn test_standard_analyzer_keeps_function_words() {
        let analyzer = StandardAnalyzer::new().unwrap();

        let tokens: Vec<Token> = analyzer.analyze("The Dorm Is Noisy").unwrap().collect();

        // No stop word removal in the default pipeline
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].text, "the");
        assert_eq!(tokens[2].text, "is");
    }

    #[test]
    fn test_standard_analyzer_with_stop_words() {
        let analyzer = StandardAnalyzer::with_stop_words().unwrap();

        let tokens: Vec<Token> = analyzer.analyze("The dorm is noisy").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "dorm");
        assert_eq!(tokens[1].text, "noisy");
    }

    #[test]
    fn test_standard_analyzer_empty_input() {
        let analyzer = StandardAnalyzer::new().unwrap();
        let tokens: Vec<Token> = analyzer.analyze("").unwrap().collect();
        assert!(tokens.is_empty());
    }
}
