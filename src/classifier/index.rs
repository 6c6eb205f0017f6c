//! Read-only per-example intent index.

use crate::catalog::IntentCatalog;
use crate::classifier::vector::PhraseVector;
use crate::classifier::vectorizer::CountVectorizer;
use crate::error::Result;

/// Parallel arrays holding one entry per training example.
///
/// Entries appear in stable catalog order (intent insertion order, then
/// phrase order), and the index is read-only after construction. That order
/// is what makes tie-breaking deterministic: when several examples share the
/// maximum similarity, the earliest one wins.
#[derive(Debug, Clone)]
pub struct IntentIndex {
    vectors: Vec<PhraseVector>,
    intents: Vec<String>,
    phrases: Vec<String>,
}

impl IntentIndex {
    /// Build an index from a catalog using a fitted vectorizer.
    pub fn build(catalog: &IntentCatalog, vectorizer: &CountVectorizer) -> Result<Self> {
        let mut vectors = Vec::with_capacity(catalog.sample_count());
        let mut intents = Vec::with_capacity(catalog.sample_count());
        let mut phrases = Vec::with_capacity(catalog.sample_count());

        for (intent, phrase) in catalog.samples() {
            vectors.push(vectorizer.transform(phrase)?);
            intents.push(intent.to_string());
            phrases.push(phrase.to_string());
        }

        Ok(IntentIndex {
            vectors,
            intents,
            phrases,
        })
    }

    /// Number of indexed training examples.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Check if the index holds no examples.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// The owning intent of the example at `index`.
    pub fn intent(&self, index: usize) -> &str {
        &self.intents[index]
    }

    /// The original phrase text of the example at `index`.
    pub fn phrase(&self, index: usize) -> &str {
        &self.phrases[index]
    }

    /// The count vector of the example at `index`.
    pub fn vector(&self, index: usize) -> &PhraseVector {
        &self.vectors[index]
    }

    /// Find the example most similar to the query vector.
    ///
    /// Returns `(example index, cosine similarity)`, or `None` when the index
    /// is empty. Replacement requires a strictly greater score, so the first
    /// example in index order wins ties.
    pub fn best_match(&self, query: &PhraseVector) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;

        for (index, vector) in self.vectors.iter().enumerate() {
            let similarity = query.cosine_similarity(vector);
            match best {
                Some((_, best_similarity)) if similarity <= best_similarity => {}
                _ => best = Some((index, similarity)),
            }
        }

        best
    }
}
