//! Append-only chat logs: one line per classified exchange.
//!
//! Each exchange is recorded as a pipe-separated line:
//!
//! ```text
//! Green View Hostel | 2025-11-03 | homesickness
//! ```
//!
//! The file sink keeps one log file per site so that downstream reporting
//! can aggregate a whole directory of logs at once.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single chat log record: which site asked, when, and what intent was
/// classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// The site (e.g. accommodation name) the conversation belongs to.
    pub site: String,
    /// The day of the exchange.
    pub date: NaiveDate,
    /// The classified intent name.
    pub intent: String,
}

impl LogEntry {
    /// Create a new log entry.
    pub fn new<S: Into<String>, I: Into<String>>(site: S, date: NaiveDate, intent: I) -> Self {
        LogEntry {
            site: site.into(),
            date,
            intent: intent.into(),
        }
    }

    /// Serialize to the pipe-separated line format (without newline).
    pub fn to_line(&self) -> String {
        format!("{} | {} | {}", self.site, self.date.format("%Y-%m-%d"), self.intent)
    }

    /// Parse a pipe-separated line, tolerating extra whitespace around the
    /// separators. Returns `None` for malformed lines.
    pub fn parse(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split('|').map(str::trim).collect();
        if parts.len() != 3 {
            return None;
        }

        let date = NaiveDate::parse_from_str(parts[1], "%Y-%m-%d").ok()?;
        if parts[0].is_empty() || parts[2].is_empty() {
            return None;
        }

        Some(LogEntry::new(parts[0], date, parts[2]))
    }
}

/// Trait for chat log sinks.
///
/// Sinks are shared behind the chat engine and must tolerate concurrent
/// appends.
pub trait ChatLogSink: Send + Sync {
    /// Append one entry to the log.
    fn append(&self, entry: &LogEntry) -> Result<()>;
}

impl<T: ChatLogSink + ?Sized> ChatLogSink for std::sync::Arc<T> {
    fn append(&self, entry: &LogEntry) -> Result<()> {
        (**self).append(entry)
    }
}

/// A file-backed sink that appends to one log file per site.
///
/// Files are named after the site with non-filename characters replaced by
/// underscores, so arbitrary site strings cannot escape the base directory.
pub struct FileChatLogSink {
    dir: PathBuf,
    lock: Mutex<()>,
}

impl FileChatLogSink {
    /// Create a sink rooted at `dir`, creating the directory if needed.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(FileChatLogSink {
            dir,
            lock: Mutex::new(()),
        })
    }

    /// The base directory of this sink.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The log file path for a site.
    pub fn file_for(&self, site: &str) -> PathBuf {
        let sanitized: String = site
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{sanitized}.txt"))
    }
}

impl std::fmt::Debug for FileChatLogSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileChatLogSink")
            .field("dir", &self.dir)
            .finish()
    }
}

impl ChatLogSink for FileChatLogSink {
    fn append(&self, entry: &LogEntry) -> Result<()> {
        let _guard = self.lock.lock();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.file_for(&entry.site))?;
        writeln!(file, "{}", entry.to_line())?;
        Ok(())
    }
}

/// An in-memory sink that collects entries, for tests and demos.
#[derive(Debug, Default)]
pub struct MemoryChatLogSink {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryChatLogSink {
    /// Create an empty in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the collected entries.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }
}

impl ChatLogSink for MemoryChatLogSink {
    fn append(&self, entry: &LogEntry) -> Result<()> {
        self.entries.lock().push(entry.clone());
        Ok(())
    }
}

/// Read every `*.txt` log file under a directory into entries.
///
/// Malformed lines are skipped; files are visited in name order so the
/// result is deterministic.
pub fn scan_log_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<LogEntry>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    files.sort();

    let mut entries = Vec::new();
    for path in files {
        let content = fs::read_to_string(&path)?;
        let parsed = content.lines().filter_map(LogEntry::parse);
        entries.extend(parsed);
    }

    log::debug!("scanned {} log entries", entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_log_entry_line_round_trip() {
        let entry = LogEntry::new("Green View Hostel", date("2025-11-03"), "homesickness");
        let line = entry.to_line();
        assert_eq!(line, "Green View Hostel | 2025-11-03 | homesickness");
        assert_eq!(LogEntry::parse(&line).unwrap(), entry);
    }

    #[test]
    fn test_log_entry_parse_tolerates_spacing() {
        let entry = LogEntry::parse("Sunrise PG|2025-01-15|health_concerns").unwrap();
        assert_eq!(entry.site, "Sunrise PG");
        assert_eq!(entry.intent, "health_concerns");
    }

    #[test]
    fn test_log_entry_parse_rejects_malformed() {
        assert!(LogEntry::parse("").is_none());
        assert!(LogEntry::parse("only two | fields").is_none());
        assert!(LogEntry::parse("site | not-a-date | intent").is_none());
        assert!(LogEntry::parse(" | 2025-01-15 | intent").is_none());
        assert!(LogEntry::parse("a | 2025-01-15 | b | extra").is_none());
    }

    #[test]
    fn test_file_sink_appends_per_site() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileChatLogSink::new(dir.path()).unwrap();

        sink.append(&LogEntry::new("Green View", date("2025-11-03"), "homesickness"))
            .unwrap();
        sink.append(&LogEntry::new("Green View", date("2025-11-04"), "health_concerns"))
            .unwrap();
        sink.append(&LogEntry::new("Sunrise", date("2025-11-03"), "financial_issues"))
            .unwrap();

        let green = std::fs::read_to_string(dir.path().join("Green_View.txt")).unwrap();
        assert_eq!(green.lines().count(), 2);

        let sunrise = std::fs::read_to_string(dir.path().join("Sunrise.txt")).unwrap();
        assert!(sunrise.contains("financial_issues"));
    }

    #[test]
    fn test_file_sink_sanitizes_names() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileChatLogSink::new(dir.path()).unwrap();

        let path = sink.file_for("../evil/site");
        assert_eq!(path, dir.path().join("___evil_site.txt"));
    }

    #[test]
    fn test_scan_log_dir_skips_malformed() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("a.txt"),
            "Green View | 2025-11-03 | homesickness\ngarbage line\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("notes.md"), "ignored | 2025-11-03 | x\n").unwrap();

        let entries = scan_log_dir(dir.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].intent, "homesickness");
    }
}
