//! Basic Intent Classification Example
//!
//! This example demonstrates loading a catalog of training phrases and
//! classifying a handful of utterances against it.

use anyhow::Result;
use banter::catalog::IntentCatalog;
use banter::classifier::{CosineIntentClassifier, IntentClassifier};

fn main() -> Result<()> {
    println!("=== Basic Intent Classification Example ===\n");

    // Load training data from JSON file
    println!("Loading catalog from resource/catalog.json...");
    let catalog = IntentCatalog::load_json("resource/catalog.json")?;
    println!(
        "Loaded {} intents with {} example phrases",
        catalog.intent_count(),
        catalog.sample_count()
    );

    // Build the classifier
    println!("\nBuilding cosine classifier...");
    let classifier = CosineIntentClassifier::new(&catalog)?;
    println!(
        "Vocabulary contains {} terms",
        classifier.vectorizer().vocabulary_size()
    );

    // Classify some utterances
    println!("\n=== Classification ===");
    let utterances = vec![
        "I really miss my family back home",
        "the buses are late again",
        "I have a fever and feel sick",
        "completely unrelated gibberish",
        "",
    ];

    for utterance in utterances {
        let result = classifier.predict(utterance)?;
        println!(
            "Utterance: {:?} => Intent: {} (score: {:.3})",
            utterance, result.intent, result.score
        );
    }

    // Batch classification runs predictions in parallel
    println!("\n=== Batch Classification ===");
    let batch = classifier.predict_batch(&["I need money", "my dorm is noisy"])?;
    for (utterance, result) in ["I need money", "my dorm is noisy"].iter().zip(batch) {
        println!("Utterance: {:?} => Intent: {}", utterance, result.intent);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
