//! Review Sentiment Tagging Example
//!
//! The keyword classifier is not limited to chatbot intents: given
//! positive/negative word sets it acts as a small lexicon-based sentiment
//! tagger for free-text reviews.

use std::sync::Arc;

use anyhow::Result;
use banter::analysis::analyzer::standard::StandardAnalyzer;
use banter::classifier::{IntentClassifier, KeywordIntentClassifier};

fn main() -> Result<()> {
    println!("=== Review Sentiment Tagging Example ===\n");

    let analyzer = Arc::new(StandardAnalyzer::new()?);
    let tagger = KeywordIntentClassifier::new(analyzer)
        .with_intent(
            "positive",
            [
                "good", "great", "excellent", "amazing", "clean", "friendly", "comfortable",
                "delicious", "helpful", "spacious", "affordable", "peaceful", "quiet",
            ],
        )
        .with_intent(
            "negative",
            [
                "bad", "worst", "dirty", "rude", "late", "expensive", "poor", "horrible",
                "noisy", "uncomfortable", "slow", "broken", "crowded", "terrible",
            ],
        );

    let reviews = vec![
        "The rooms were clean and the staff was friendly",
        "Horrible experience, dirty bathrooms and rude management",
        "It exists. It has walls.",
        "great location but terribly noisy at night",
    ];

    for review in reviews {
        let result = tagger.predict(review)?;
        println!("Review: {:?}", review);
        println!("  Sentiment: {} (hits: {})\n", result.intent, result.score);
    }

    println!("=== Example Complete ===");
    Ok(())
}
