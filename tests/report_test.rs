//! Integration tests for chat log aggregation.

use banter::chat::log::LogEntry;
use banter::chat::{ChatLogSink, FileChatLogSink};
use banter::report::ChatLogReport;
use chrono::NaiveDate;
use tempfile::TempDir;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn write_logs(dir: &std::path::Path) {
    let sink = FileChatLogSink::new(dir).unwrap();
    let entries = [
        ("Green View", "2025-11-03", "homesickness"),
        ("Green View", "2025-11-03", "homesickness"),
        ("Green View", "2025-11-04", "health_concerns"),
        ("Sunrise", "2025-11-03", "homesickness"),
        ("Sunrise", "2025-11-05", "financial_issues"),
        ("Sunrise", "2025-11-05", "unknown"),
    ];

    for (site, day, intent) in entries {
        sink.append(&LogEntry::new(site, date(day), intent)).unwrap();
    }
}

#[test]
fn test_report_over_sink_output() {
    let temp_dir = TempDir::new().unwrap();
    write_logs(temp_dir.path());

    let report = ChatLogReport::from_dir(temp_dir.path()).unwrap();

    assert_eq!(report.total(), 6);
    assert_eq!(report.intent_counts()["homesickness"], 3);
    assert_eq!(report.intent_counts()["unknown"], 1);

    assert_eq!(report.daily_counts()[&date("2025-11-03")], 3);
    assert_eq!(report.daily_counts()[&date("2025-11-05")], 2);

    assert_eq!(
        report.intent_daily()["homesickness"][&date("2025-11-03")],
        3
    );

    assert_eq!(report.site_intents()["Green View"]["homesickness"], 2);
    assert_eq!(report.site_intents()["Sunrise"]["financial_issues"], 1);
}

#[test]
fn test_report_top_intents() {
    let temp_dir = TempDir::new().unwrap();
    write_logs(temp_dir.path());

    let report = ChatLogReport::from_dir(temp_dir.path()).unwrap();
    let top = report.top_intents(2);

    assert_eq!(top, vec![("homesickness", 3), ("financial_issues", 1)]);
}

#[test]
fn test_report_tolerates_foreign_files() {
    let temp_dir = TempDir::new().unwrap();
    write_logs(temp_dir.path());

    // A stray non-log text file and a non-txt file in the same directory
    std::fs::write(
        temp_dir.path().join("reviews.txt"),
        "Green View | lovely place | 4 Stars | 2025-11-03 12:00:00\n",
    )
    .unwrap();
    std::fs::write(temp_dir.path().join("notes.json"), "{}").unwrap();

    let report = ChatLogReport::from_dir(temp_dir.path()).unwrap();
    // The review line has four fields and no parseable date, so it is skipped
    assert_eq!(report.total(), 6);
}

#[test]
fn test_report_empty_directory() {
    let temp_dir = TempDir::new().unwrap();
    let report = ChatLogReport::from_dir(temp_dir.path()).unwrap();
    assert_eq!(report.total(), 0);
}
