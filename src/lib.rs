//! # Banter
//!
//! A lightweight intent classification and chatbot toolkit for Rust.
//!
//! ## Features
//!
//! - Bag-of-words cosine similarity classification over a static catalog
//! - Keyword-set classification for signal-word domains
//! - Flexible text analysis pipeline (tokenizers + filters)
//! - Response lookup with unknown fallback
//! - Append-only chat logs and log aggregation reports
//!
//! ## Quick start
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
//! assert_eq!(classifier.predict("hello there")?.intent, "greeting");
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod catalog;
pub mod chat;
pub mod classifier;
pub mod cli;
pub mod error;
pub mod report;
pub mod respond;

pub mod prelude {
    //! Convenient re-exports of the most commonly used types.

    pub use crate::analysis::{Analyzer, StandardAnalyzer};
    pub use crate::catalog::{IntentCatalog, IntentSample};
    pub use crate::chat::{ChatEngine, ChatLogSink, ChatReply, FileChatLogSink, LogEntry};
    pub use crate::classifier::{
        Classification, CosineIntentClassifier, IntentClassifier, KeywordIntentClassifier,
        UNKNOWN_INTENT,
    };
    pub use crate::error::{BanterError, Result};
    pub use crate::report::ChatLogReport;
    pub use crate::respond::ResponseTable;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
