//! Keyword-based intent classifier.

use std::sync::Arc;

use ahash::AHashSet;

use crate::analysis::analyzer::Analyzer;
use crate::classifier::{Classification, IntentClassifier};
use crate::error::Result;

/// Keyword-based intent classifier.
///
/// Scores each intent by how many analyzed utterance tokens appear in its
/// keyword set. The highest count wins; intents registered earlier win ties,
/// and zero hits fall back to the unknown classification. Cheaper than
/// [`CosineIntentClassifier`](super::CosineIntentClassifier) and useful when
/// intents are characterized by a handful of signal words rather than whole
/// example phrases.
pub struct KeywordIntentClassifier {
    entries: Vec<(String, AHashSet<String>)>,
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for KeywordIntentClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordIntentClassifier")
            .field(
                "intents",
                &self.entries.iter().map(|(n, _)| n).collect::<Vec<_>>(),
            )
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl KeywordIntentClassifier {
    /// Create a new keyword classifier with no intents.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        KeywordIntentClassifier {
            entries: Vec::new(),
            analyzer,
        }
    }

    /// Register an intent with its keyword set.
    ///
    /// Keywords are lowercased so they compare against case-folded tokens.
    /// Registration order defines tie-breaking.
    pub fn with_intent<I, W, S>(mut self, intent: I, keywords: W) -> Self
    where
        I: Into<String>,
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: AHashSet<String> = keywords
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        self.entries.push((intent.into(), keywords));
        self
    }

    /// Number of registered intents.
    pub fn intent_count(&self) -> usize {
        self.entries.len()
    }
}

impl IntentClassifier for KeywordIntentClassifier {
    fn predict(&self, utterance: &str) -> Result<Classification> {
        let tokens: Vec<String> = self
            .analyzer
            .analyze(utterance)?
            .map(|token| token.text)
            .collect();

        let mut best: Option<(&str, usize)> = None;
        for (intent, keywords) in &self.entries {
            let hits = tokens.iter().filter(|t| keywords.contains(*t)).count();
            match best {
                Some((_, best_hits)) if hits <= best_hits => {}
                _ => best = Some((intent, hits)),
            }
        }

        match best {
            Some((intent, hits)) if hits > 0 => Ok(Classification {
                intent: intent.to_string(),
                score: hits as f64,
            }),
            _ => Ok(Classification::unknown(0.0)),
        }
    }

    fn name(&self) -> &str {
        "keyword"
    }
}
