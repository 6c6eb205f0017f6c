//! Response lookup: mapping classified intents to user-facing replies.
//!
//! The classifier stays oblivious to what is said back to the user; the
//! [`ResponseTable`] is the separate key-value lookup that owns that mapping,
//! with a fallback reply for the unknown intent (and any intent the table
//! does not cover).

use std::fs;
use std::path::Path;

use ahash::AHashMap;

use crate::classifier::UNKNOWN_INTENT;
use crate::error::Result;

/// Fallback reply used when no reply is registered for an intent.
pub const DEFAULT_FALLBACK: &str = "I'm not sure about that. Can you rephrase?";

/// A lookup table from intent name to reply text.
#[derive(Debug, Clone)]
pub struct ResponseTable {
    replies: AHashMap<String, String>,
    fallback: String,
}

impl ResponseTable {
    /// Create an empty table with the default fallback reply.
    pub fn new() -> Self {
        ResponseTable {
            replies: AHashMap::new(),
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }

    /// Create an empty table with a custom fallback reply.
    pub fn with_fallback<S: Into<String>>(fallback: S) -> Self {
        ResponseTable {
            replies: AHashMap::new(),
            fallback: fallback.into(),
        }
    }

    /// Load a table from a JSON object file (`{"intent": "reply", …}`).
    ///
    /// An `"unknown"` key, if present, becomes the fallback reply.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut replies: AHashMap<String, String> = serde_json::from_str(&content)?;

        let fallback = replies
            .remove(UNKNOWN_INTENT)
            .unwrap_or_else(|| DEFAULT_FALLBACK.to_string());

        Ok(ResponseTable { replies, fallback })
    }

    /// Register a reply for an intent.
    pub fn insert<I: Into<String>, R: Into<String>>(&mut self, intent: I, reply: R) {
        self.replies.insert(intent.into(), reply.into());
    }

    /// Look up the reply for an intent, falling back when unmapped.
    pub fn reply_for(&self, intent: &str) -> &str {
        self.replies
            .get(intent)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    /// The fallback reply.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Number of registered replies (excluding the fallback).
    pub fn len(&self) -> usize {
        self.replies.len()
    }

    /// Check if no replies are registered.
    pub fn is_empty(&self) -> bool {
        self.replies.is_empty()
    }
}

impl Default for ResponseTable {
    fn default() -> Self {
        Self::new()
    }
}
