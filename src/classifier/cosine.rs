//! Cosine similarity intent classifier.

use std::sync::Arc;

use log::debug;
use rayon::prelude::*;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::catalog::IntentCatalog;
use crate::classifier::index::IntentIndex;
use crate::classifier::vectorizer::CountVectorizer;
use crate::classifier::{Classification, DEFAULT_SIMILARITY_THRESHOLD, IntentClassifier};
use crate::error::Result;

/// An intent classifier based on bag-of-words cosine similarity.
///
/// Construction fits a [`CountVectorizer`] on the catalog's example phrases
/// and indexes one count vector per example. Both are immutable afterwards,
/// so a single classifier can serve any number of concurrent callers without
/// locking.
///
/// Prediction tokenizes the utterance with the training analyzer, projects it
/// onto the fitted vocabulary, and takes the training example with the
/// highest cosine similarity. The prediction falls back to
/// [`UNKNOWN_INTENT`](super::UNKNOWN_INTENT) when the utterance has no
/// in-vocabulary tokens, the catalog is empty, or the best similarity is
/// strictly below the threshold.
pub struct CosineIntentClassifier {
    vectorizer: CountVectorizer,
    index: IntentIndex,
    threshold: f64,
}

impl std::fmt::Debug for CosineIntentClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosineIntentClassifier")
            .field("vocabulary_size", &self.vectorizer.vocabulary_size())
            .field("examples", &self.index.len())
            .field("threshold", &self.threshold)
            .finish()
    }
}

impl CosineIntentClassifier {
    /// Create a classifier from a catalog using the standard analyzer.
    pub fn new(catalog: &IntentCatalog) -> Result<Self> {
        Self::with_analyzer(catalog, Arc::new(StandardAnalyzer::new()?))
    }

    /// Create a classifier from a catalog with a custom analyzer.
    ///
    /// The same analyzer is used for training phrases and for every
    /// classified utterance.
    pub fn with_analyzer(catalog: &IntentCatalog, analyzer: Arc<dyn Analyzer>) -> Result<Self> {
        let vectorizer = CountVectorizer::fit(analyzer, catalog.samples().map(|(_, p)| p))?;
        let index = IntentIndex::build(catalog, &vectorizer)?;

        debug!(
            "built cosine classifier: {} intents, {} examples, {} terms",
            catalog.intent_count(),
            index.len(),
            vectorizer.vocabulary_size()
        );

        Ok(CosineIntentClassifier {
            vectorizer,
            index,
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
        })
    }

    /// Override the similarity threshold.
    ///
    /// A best score strictly below the threshold is rejected; a score equal
    /// to it is accepted.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// The active similarity threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// The fitted vectorizer.
    pub fn vectorizer(&self) -> &CountVectorizer {
        &self.vectorizer
    }

    /// The training example index.
    pub fn index(&self) -> &IntentIndex {
        &self.index
    }

    /// Classify a batch of utterances in parallel.
    ///
    /// Each prediction is independent, so the batch is scored across threads
    /// with results in input order.
    pub fn predict_batch(&self, utterances: &[&str]) -> Result<Vec<Classification>> {
        utterances
            .par_iter()
            .map(|utterance| self.predict(utterance))
            .collect()
    }
}

impl IntentClassifier for CosineIntentClassifier {
    fn predict(&self, utterance: &str) -> Result<Classification> {
        let query = self.vectorizer.transform(utterance)?;

        // A query with no in-vocabulary tokens matches nothing
        if query.is_zero() {
            return Ok(Classification::unknown(0.0));
        }

        match self.index.best_match(&query) {
            None => Ok(Classification::unknown(0.0)),
            Some((_, score)) if score < self.threshold => Ok(Classification::unknown(score)),
            Some((best, score)) => Ok(Classification {
                intent: self.index.intent(best).to_string(),
                score,
            }),
        }
    }

    fn name(&self) -> &str {
        "cosine"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::UNKNOWN_INTENT;

    fn greeting_catalog() -> IntentCatalog {
        let mut catalog = IntentCatalog::new();
        catalog.add_intent("greeting", ["hello there", "hi friend"]);
        catalog
    }

    #[test]
    fn test_exact_phrase_matches_own_intent() {
        let classifier = CosineIntentClassifier::new(&greeting_catalog()).unwrap();

        let result = classifier.predict("hello there").unwrap();
        assert_eq!(result.intent, "greeting");
        assert!((result.score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_utterance_is_unknown() {
        let classifier = CosineIntentClassifier::new(&greeting_catalog()).unwrap();
        assert_eq!(classifier.predict("").unwrap().intent, UNKNOWN_INTENT);
    }

    #[test]
    fn test_out_of_vocabulary_is_unknown() {
        let classifier = CosineIntentClassifier::new(&greeting_catalog()).unwrap();
        assert_eq!(classifier.predict("xyz abc").unwrap().intent, UNKNOWN_INTENT);
    }

    #[test]
    fn test_empty_catalog_is_unknown() {
        let classifier = CosineIntentClassifier::new(&IntentCatalog::new()).unwrap();
        assert_eq!(classifier.predict("anything").unwrap().intent, UNKNOWN_INTENT);
    }

    #[test]
    fn test_below_threshold_is_unknown() {
        let mut catalog = IntentCatalog::new();
        // 12 distinct tokens; sharing one token scores 1/sqrt(12) ~ 0.289
        catalog.add_phrase(
            "verbose",
            "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu",
        );

        let classifier = CosineIntentClassifier::new(&catalog).unwrap();
        let result = classifier.predict("alpha").unwrap();

        assert_eq!(result.intent, UNKNOWN_INTENT);
        assert!(result.score > 0.0 && result.score < 0.3);
    }

    #[test]
    fn test_at_threshold_is_accepted() {
        let mut catalog = IntentCatalog::new();
        // Sharing one of four distinct tokens scores exactly 0.5
        catalog.add_phrase("verbose", "alpha beta gamma delta");

        let classifier = CosineIntentClassifier::new(&catalog)
            .unwrap()
            .with_threshold(0.5);
        let result = classifier.predict("alpha").unwrap();

        // Rejection is strictly below the threshold, so 0.5 passes at 0.5
        assert_eq!(result.intent, "verbose");
        assert!((result.score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_prediction_is_deterministic() {
        let classifier = CosineIntentClassifier::new(&greeting_catalog()).unwrap();

        let first = classifier.predict("hello friend").unwrap();
        let second = classifier.predict("hello friend").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_tie_prefers_first_catalog_entry() {
        let mut catalog = IntentCatalog::new();
        catalog.add_phrase("first", "shared words here");
        catalog.add_phrase("second", "shared words here");

        let classifier = CosineIntentClassifier::new(&catalog).unwrap();
        assert_eq!(classifier.predict("shared words here").unwrap().intent, "first");
    }

    #[test]
    fn test_predict_batch_matches_predict() {
        let classifier = CosineIntentClassifier::new(&greeting_catalog()).unwrap();

        let batch = classifier
            .predict_batch(&["hello there", "xyz", "hi friend"])
            .unwrap();

        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0].intent, "greeting");
        assert_eq!(batch[1].intent, UNKNOWN_INTENT);
        assert_eq!(batch[2].intent, "greeting");
    }

    #[test]
    fn test_classifier_name() {
        let classifier = CosineIntentClassifier::new(&greeting_catalog()).unwrap();
        assert_eq!(classifier.name(), "cosine");
    }
}
