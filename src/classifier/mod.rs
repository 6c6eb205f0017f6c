//! Intent classification over a static catalog of example phrases.
//!
//! This module provides intent classification for user utterances using
//! either:
//! - Cosine classification: bag-of-words count vectors compared by cosine
//!   similarity against every training example
//! - Keyword classification: simple keyword-set overlap scoring
//!
//! # Architecture
//!
//! - [`IntentClassifier`] trait: Common interface for all classifiers
//! - [`CosineIntentClassifier`]: Count-vector cosine similarity implementation
//! - [`KeywordIntentClassifier`]: Keyword matching implementation
//! - [`CountVectorizer`]: Vocabulary fitting and phrase vectorization
//! - [`PhraseVector`]: Fixed-length per-token occurrence counts
//! - [`IntentIndex`]: Read-only per-example vector index
//!
//! # Example
//!
//! ```
//! use banter::catalog::IntentCatalog;
//! use banter::classifier::{CosineIntentClassifier, IntentClassifier};
//!
//! # fn main() -> banter::error::Result<()> {
//! let mut catalog = IntentCatalog::new();
//! catalog.add_intent("greeting", ["hello there", "hi friend"]);
//!
//! let classifier = CosineIntentClassifier::new(&catalog)?;
//!
//! assert_eq!(classifier.predict("hello there")?.intent, "greeting");
//! assert_eq!(classifier.predict("xyz abc")?.intent, "unknown");
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

mod cosine;
mod index;
mod keyword;
mod vector;
mod vectorizer;

// Public exports
pub use cosine::CosineIntentClassifier;
pub use index::IntentIndex;
pub use keyword::KeywordIntentClassifier;
pub use vector::PhraseVector;
pub use vectorizer::CountVectorizer;

/// Sentinel intent returned when no training example matches well enough.
pub const UNKNOWN_INTENT: &str = "unknown";

/// Default minimum cosine similarity for a match to count.
///
/// A best score strictly below this value classifies as
/// [`UNKNOWN_INTENT`]; a score exactly equal to it is accepted.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.3;

/// The outcome of classifying a single utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// The predicted intent name, or [`UNKNOWN_INTENT`].
    pub intent: String,
    /// The winning score. Cosine similarity of the best-matching example for
    /// [`CosineIntentClassifier`] (reported even when the prediction falls
    /// back to unknown), keyword hit count for [`KeywordIntentClassifier`].
    pub score: f64,
}

impl Classification {
    /// Create an unknown classification carrying the observed best score.
    pub fn unknown(score: f64) -> Self {
        Classification {
            intent: UNKNOWN_INTENT.to_string(),
            score,
        }
    }

    /// Check whether this classification is the unknown fallback.
    pub fn is_unknown(&self) -> bool {
        self.intent == UNKNOWN_INTENT
    }
}

/// Intent classifier trait.
///
/// Implementations map a free-text utterance to a named intent from their
/// training catalog, or to [`UNKNOWN_INTENT`]. Implementations are immutable
/// after construction and safe to share across threads.
pub trait IntentClassifier: Send + Sync {
    /// Predict the intent for a given utterance.
    ///
    /// Always yields a value for well-formed models; "no good match" is the
    /// unknown classification, not an error.
    fn predict(&self, utterance: &str) -> Result<Classification>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
