//! Intent catalog: named intents and their example phrases.
//!
//! An [`IntentCatalog`] is the static training table for the classifiers: an
//! ordered mapping from intent name to an ordered list of example phrases.
//! It is built once at startup (from code or from a JSON file) and handed to
//! a classifier by reference; the classifier takes its own immutable snapshot
//! during construction.
//!
//! Order matters: the flattened sample order (intent insertion order, then
//! phrase order within each intent) defines which example wins when two
//! examples score equally.
//!
//! # Examples
//!
//! ```
//! use banter::catalog::IntentCatalog;
//!
//! let mut catalog = IntentCatalog::new();
//! catalog.add_intent("greeting", ["hello there", "hi friend"]);
//! catalog.add_phrase("farewell", "see you later");
//!
//! assert_eq!(catalog.intent_count(), 2);
//! assert_eq!(catalog.sample_count(), 3);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single training example: one phrase labeled with its intent.
///
/// This is also the on-disk record format for catalog files: a catalog file
/// is a JSON array of samples, and file order is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentSample {
    /// Example phrase text.
    pub text: String,
    /// Intent label owning the phrase.
    pub intent: String,
}

impl IntentSample {
    /// Create a new training sample.
    pub fn new<T: Into<String>, I: Into<String>>(text: T, intent: I) -> Self {
        IntentSample {
            text: text.into(),
            intent: intent.into(),
        }
    }
}

#[derive(Debug, Clone)]
struct IntentEntry {
    name: String,
    phrases: Vec<String>,
}

/// An ordered mapping from intent name to example phrases.
///
/// Intents keep their insertion order and phrases keep their addition order;
/// both orders are observable through [`IntentCatalog::samples`] and define
/// classifier tie-breaking.
#[derive(Debug, Clone, Default)]
pub struct IntentCatalog {
    entries: Vec<IntentEntry>,
}

impl IntentCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        IntentCatalog {
            entries: Vec::new(),
        }
    }

    /// Build a catalog from flat training samples, preserving sample order.
    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = IntentSample>,
    {
        let mut catalog = Self::new();
        for sample in samples {
            catalog.add_phrase(sample.intent, sample.text);
        }
        catalog
    }

    /// Load a catalog from a JSON file containing an array of samples.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let samples: Vec<IntentSample> = serde_json::from_str(&content)?;
        Ok(Self::from_samples(samples))
    }

    /// Add a single example phrase to an intent, creating the intent if it
    /// does not exist yet.
    pub fn add_phrase<I: Into<String>, P: Into<String>>(&mut self, intent: I, phrase: P) {
        let intent = intent.into();
        let phrase = phrase.into();
        match self.entries.iter_mut().find(|e| e.name == intent) {
            Some(entry) => entry.phrases.push(phrase),
            None => self.entries.push(IntentEntry {
                name: intent,
                phrases: vec![phrase],
            }),
        }
    }

    /// Add an intent with a list of example phrases.
    pub fn add_intent<I, P, S>(&mut self, intent: I, phrases: P)
    where
        I: Into<String>,
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let intent = intent.into();
        for phrase in phrases {
            self.add_phrase(intent.clone(), phrase);
        }
    }

    /// Number of distinct intents.
    pub fn intent_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of example phrases across all intents.
    pub fn sample_count(&self) -> usize {
        self.entries.iter().map(|e| e.phrases.len()).sum()
    }

    /// Check if the catalog has no intents.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over intent names in insertion order.
    pub fn intents(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Get the example phrases for an intent, if present.
    pub fn phrases(&self, intent: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.name == intent)
            .map(|e| e.phrases.as_slice())
    }

    /// Iterate over `(intent, phrases)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.phrases.as_slice()))
    }

    /// Iterate over all `(intent, phrase)` pairs in stable catalog order.
    ///
    /// This is the order the classifiers index training examples in.
    pub fn samples(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|e| {
            e.phrases
                .iter()
                .map(move |p| (e.name.as_str(), p.as_str()))
        })
    }
}
