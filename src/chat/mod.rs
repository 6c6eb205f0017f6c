//! Chat engine: classification, reply lookup, and logging in one facade.
//!
//! The [`ChatEngine`] owns the pieces a chatbot front end needs per exchange:
//! an [`IntentClassifier`], a [`ResponseTable`], and optionally a
//! [`ChatLogSink`]. The classifier itself stays a pure function; all I/O
//! (the log append) happens here.
//!
//! # Examples
//!
//! ```
//! use banter::catalog::IntentCatalog;
//! use banter::chat::ChatEngine;
//! use banter::classifier::CosineIntentClassifier;
//! use banter::respond::ResponseTable;
//!
//! # fn main() -> banter::error::Result<()> {
//! let mut catalog = IntentCatalog::new();
//! catalog.add_intent("greeting", ["hello there", "hi friend"]);
//!
//! let mut responses = ResponseTable::new();
//! responses.insert("greeting", "Hi! How can I help?");
//!
//! let classifier = CosineIntentClassifier::new(&catalog)?;
//! let engine = ChatEngine::new(Box::new(classifier), responses);
//!
//! let reply = engine.respond("Green View", "hello there")?;
//! assert_eq!(reply.intent, "greeting");
//! assert_eq!(reply.message, "Hi! How can I help?");
//! # Ok(())
//! # }
//! ```

pub mod log;

pub use log::{ChatLogSink, FileChatLogSink, LogEntry, MemoryChatLogSink, scan_log_dir};

use chrono::{Local, NaiveDate};

use crate::classifier::IntentClassifier;
use crate::error::Result;
use crate::respond::ResponseTable;

/// The engine's answer to one user message.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    /// The classified intent (possibly `"unknown"`).
    pub intent: String,
    /// The classifier score for the winning match.
    pub score: f64,
    /// The reply text to show the user.
    pub message: String,
}

/// A chatbot facade combining classifier, response table, and log sink.
pub struct ChatEngine {
    classifier: Box<dyn IntentClassifier>,
    responses: ResponseTable,
    sink: Option<Box<dyn ChatLogSink>>,
}

impl ChatEngine {
    /// Create an engine without logging.
    pub fn new(classifier: Box<dyn IntentClassifier>, responses: ResponseTable) -> Self {
        ChatEngine {
            classifier,
            responses,
            sink: None,
        }
    }

    /// Attach a log sink; every exchange appends one entry.
    pub fn with_log_sink(mut self, sink: Box<dyn ChatLogSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// The response table in use.
    pub fn responses(&self) -> &ResponseTable {
        &self.responses
    }

    /// Classify a message, look up the reply, and log the exchange dated
    /// today.
    pub fn respond(&self, site: &str, message: &str) -> Result<ChatReply> {
        self.respond_dated(site, message, Local::now().date_naive())
    }

    /// Like [`respond`](Self::respond) with an explicit exchange date.
    pub fn respond_dated(&self, site: &str, message: &str, date: NaiveDate) -> Result<ChatReply> {
        let classification = self.classifier.predict(message)?;
        let reply = self.responses.reply_for(&classification.intent).to_string();

        if let Some(sink) = &self.sink {
            sink.append(&LogEntry::new(site, date, classification.intent.clone()))?;
        }

        Ok(ChatReply {
            intent: classification.intent,
            score: classification.score,
            message: reply,
        })
    }
}

impl std::fmt::Debug for ChatEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatEngine")
            .field("classifier", &self.classifier.name())
            .field("responses", &self.responses.len())
            .field("logging", &self.sink.is_some())
            .finish()
    }
}
