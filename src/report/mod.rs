//! Aggregation over chat logs.
//!
//! A [`ChatLogReport`] summarizes what users asked about: how often each
//! intent came up overall, per day, per intent per day, and per site per
//! intent. Reports are built from [`LogEntry`] values — typically a whole
//! directory of per-site log files at once.
//!
//! All aggregation maps are `BTreeMap`s so that iteration and serialized
//! output are stable across runs.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

use crate::chat::log::{LogEntry, scan_log_dir};
use crate::error::Result;

/// Aggregated counts over a set of chat log entries.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChatLogReport {
    /// Total entries recorded.
    total: u64,
    /// Count per intent.
    intent_counts: BTreeMap<String, u64>,
    /// Count per day.
    daily_counts: BTreeMap<NaiveDate, u64>,
    /// Count per intent per day.
    intent_daily: BTreeMap<String, BTreeMap<NaiveDate, u64>>,
    /// Count per site per intent.
    site_intents: BTreeMap<String, BTreeMap<String, u64>>,
}

impl ChatLogReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one entry to the aggregation.
    pub fn record(&mut self, entry: &LogEntry) {
        self.total += 1;
        *self.intent_counts.entry(entry.intent.clone()).or_insert(0) += 1;
        *self.daily_counts.entry(entry.date).or_insert(0) += 1;
        *self
            .intent_daily
            .entry(entry.intent.clone())
            .or_default()
            .entry(entry.date)
            .or_insert(0) += 1;
        *self
            .site_intents
            .entry(entry.site.clone())
            .or_default()
            .entry(entry.intent.clone())
            .or_insert(0) += 1;
    }

    /// Build a report from entries.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a LogEntry>,
    {
        let mut report = Self::new();
        for entry in entries {
            report.record(entry);
        }
        report
    }

    /// Build a report from every `*.txt` log file in a directory.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let entries = scan_log_dir(dir)?;
        Ok(Self::from_entries(&entries))
    }

    /// Total number of recorded entries.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Count per intent.
    pub fn intent_counts(&self) -> &BTreeMap<String, u64> {
        &self.intent_counts
    }

    /// Count per day.
    pub fn daily_counts(&self) -> &BTreeMap<NaiveDate, u64> {
        &self.daily_counts
    }

    /// Count per intent per day.
    pub fn intent_daily(&self) -> &BTreeMap<String, BTreeMap<NaiveDate, u64>> {
        &self.intent_daily
    }

    /// Count per site per intent.
    pub fn site_intents(&self) -> &BTreeMap<String, BTreeMap<String, u64>> {
        &self.site_intents
    }

    /// The `n` most frequent intents, count-descending and name-ascending
    /// within equal counts.
    pub fn top_intents(&self, n: usize) -> Vec<(&str, u64)> {
        let mut intents: Vec<(&str, u64)> = self
            .intent_counts
            .iter()
            .map(|(intent, &count)| (intent.as_str(), count))
            .collect();
        intents.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        intents.truncate(n);
        intents
    }
}
