//! Integration tests for the chat engine with file-backed logging.

use banter::catalog::IntentCatalog;
use banter::chat::{ChatEngine, FileChatLogSink, scan_log_dir};
use banter::classifier::{CosineIntentClassifier, UNKNOWN_INTENT};
use banter::respond::{DEFAULT_FALLBACK, ResponseTable};
use chrono::NaiveDate;
use tempfile::TempDir;

fn student_engine(log_dir: &std::path::Path) -> ChatEngine {
    let catalog_path = concat!(env!("CARGO_MANIFEST_DIR"), "/resource/catalog.json");
    let responses_path = concat!(env!("CARGO_MANIFEST_DIR"), "/resource/responses.json");

    let catalog = IntentCatalog::load_json(catalog_path).unwrap();
    let responses = ResponseTable::load_json(responses_path).unwrap();
    let classifier = CosineIntentClassifier::new(&catalog).unwrap();
    let sink = FileChatLogSink::new(log_dir).unwrap();

    ChatEngine::new(Box::new(classifier), responses).with_log_sink(Box::new(sink))
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_chat_round_trip_with_logging() {
    let temp_dir = TempDir::new().unwrap();
    let engine = student_engine(temp_dir.path());

    let reply = engine
        .respond_dated("Green View Hostel", "I miss my home", date("2025-11-03"))
        .unwrap();
    assert_eq!(reply.intent, "homesickness");
    assert!(reply.message.contains("Homesickness is common"));

    let reply = engine
        .respond_dated("Green View Hostel", "qqq zzz", date("2025-11-03"))
        .unwrap();
    assert_eq!(reply.intent, UNKNOWN_INTENT);
    assert_eq!(reply.message, "I'm not sure about that. Can you rephrase?");

    // Both exchanges landed in the site's log file
    let content =
        std::fs::read_to_string(temp_dir.path().join("Green_View_Hostel.txt")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Green View Hostel | 2025-11-03 | homesickness");
    assert_eq!(lines[1], "Green View Hostel | 2025-11-03 | unknown");
}

#[test]
fn test_logged_entries_scan_back() {
    let temp_dir = TempDir::new().unwrap();
    let engine = student_engine(temp_dir.path());

    engine
        .respond_dated("Green View", "I need money", date("2025-11-03"))
        .unwrap();
    engine
        .respond_dated("Sunrise", "my dorm is noisy", date("2025-11-04"))
        .unwrap();

    let mut entries = scan_log_dir(temp_dir.path()).unwrap();
    entries.sort_by(|a, b| a.site.cmp(&b.site));

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].site, "Green View");
    assert_eq!(entries[0].intent, "financial_issues");
    assert_eq!(entries[1].site, "Sunrise");
    assert_eq!(entries[1].intent, "accommodation_problems");
}

#[test]
fn test_engine_without_sink_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();

    let mut catalog = IntentCatalog::new();
    catalog.add_intent("greeting", ["hello there"]);
    let classifier = CosineIntentClassifier::new(&catalog).unwrap();
    let engine = ChatEngine::new(Box::new(classifier), ResponseTable::new());

    let reply = engine.respond("anywhere", "hello there").unwrap();
    assert_eq!(reply.intent, "greeting");
    // No response registered for "greeting", so the fallback is used
    assert_eq!(reply.message, DEFAULT_FALLBACK);

    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}
