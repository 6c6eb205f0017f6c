//! Chat Session Example
//!
//! This example wires the classifier, response table, and a log sink into a
//! complete chat engine, runs a short scripted conversation, and aggregates
//! the resulting logs into a report.

use anyhow::Result;
use banter::catalog::IntentCatalog;
use banter::chat::{ChatEngine, FileChatLogSink};
use banter::classifier::CosineIntentClassifier;
use banter::report::ChatLogReport;
use banter::respond::ResponseTable;

fn main() -> Result<()> {
    println!("=== Chat Session Example ===\n");

    let catalog = IntentCatalog::load_json("resource/catalog.json")?;
    let responses = ResponseTable::load_json("resource/responses.json")?;
    let classifier = CosineIntentClassifier::new(&catalog)?;

    let log_dir = std::env::temp_dir().join("banter_chat_demo");
    let sink = FileChatLogSink::new(&log_dir)?;
    println!("Logging chats under {}", log_dir.display());

    let engine =
        ChatEngine::new(Box::new(classifier), responses).with_log_sink(Box::new(sink));

    // A scripted conversation from one accommodation
    let messages = vec![
        "I miss my home so much",
        "also my dorm is really noisy",
        "what's the meaning of life?",
    ];

    println!("\n=== Conversation (site: Green View Hostel) ===");
    for message in messages {
        let reply = engine.respond("Green View Hostel", message)?;
        println!("User: {message}");
        println!("Bot [{}]: {}\n", reply.intent, reply.message);
    }

    // Aggregate everything logged so far
    println!("=== Report ===");
    let report = ChatLogReport::from_dir(&log_dir)?;
    println!("Total logged exchanges: {}", report.total());
    for (intent, count) in report.top_intents(5) {
        println!("  {intent}: {count}");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
