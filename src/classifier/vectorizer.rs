//! Count vectorizer: vocabulary fitting and phrase vectorization.

use std::collections::BTreeSet;
use std::sync::Arc;

use ahash::AHashMap;
use log::debug;

use crate::analysis::analyzer::Analyzer;
use crate::classifier::vector::PhraseVector;
use crate::error::Result;

/// A bag-of-words count vectorizer.
///
/// The vocabulary is fitted once from the training phrases: every distinct
/// analyzed token, assigned dense indices in lexicographic order so that the
/// same phrases always produce the same vector layout. Queries seen later
/// never extend the vocabulary; their out-of-vocabulary tokens simply
/// contribute nothing.
pub struct CountVectorizer {
    /// Vocabulary: term -> dense index mapping.
    vocabulary: AHashMap<String, usize>,
    /// Terms in index order (lexicographically sorted).
    terms: Vec<String>,
    /// Analyzer shared by fitting and transformation.
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for CountVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountVectorizer")
            .field("vocabulary_size", &self.terms.len())
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl CountVectorizer {
    /// Fit a vectorizer on training phrases with the specified analyzer.
    pub fn fit<I, S>(analyzer: Arc<dyn Analyzer>, phrases: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: BTreeSet<String> = BTreeSet::new();
        for phrase in phrases {
            for token in analyzer.analyze(phrase.as_ref())? {
                seen.insert(token.text);
            }
        }

        // BTreeSet iteration yields the sorted term order
        let terms: Vec<String> = seen.into_iter().collect();
        let vocabulary: AHashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(index, term)| (term.clone(), index))
            .collect();

        debug!(
            "fitted vocabulary of {} terms with analyzer '{}'",
            terms.len(),
            analyzer.name()
        );

        Ok(CountVectorizer {
            vocabulary,
            terms,
            analyzer,
        })
    }

    /// Transform text into a count vector over the fitted vocabulary.
    pub fn transform(&self, text: &str) -> Result<PhraseVector> {
        let mut vector = PhraseVector::zeros(self.terms.len());

        for token in self.analyzer.analyze(text)? {
            if let Some(&index) = self.vocabulary.get(&token.text) {
                vector.increment(index);
            }
        }

        Ok(vector)
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }

    /// Get the vocabulary terms in index order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Get the dense index of a term, if it is in the vocabulary.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Get the analyzer used by this vectorizer.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }
}
