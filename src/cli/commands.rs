//! Command implementations for the Banter CLI.

use std::io::{self, BufRead, Write};

use ahash::AHashSet;

use crate::catalog::IntentCatalog;
use crate::chat::log::LogEntry;
use crate::chat::{ChatEngine, FileChatLogSink, scan_log_dir};
use crate::classifier::{CosineIntentClassifier, IntentClassifier};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::report::ChatLogReport;
use crate::respond::ResponseTable;

/// Execute a CLI command.
pub fn execute_command(args: BanterArgs) -> Result<()> {
    match &args.command {
        Command::Classify(classify_args) => classify_text(classify_args.clone(), &args),
        Command::Chat(chat_args) => run_chat(chat_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
        Command::Report(report_args) => run_report(report_args.clone(), &args),
    }
}

/// Build a cosine classifier from a catalog and an optional threshold.
fn build_classifier(
    catalog: &IntentCatalog,
    threshold: Option<f64>,
) -> Result<CosineIntentClassifier> {
    let mut classifier = CosineIntentClassifier::new(catalog)?;
    if let Some(threshold) = threshold {
        classifier = classifier.with_threshold(threshold);
    }
    Ok(classifier)
}

/// Classify a single utterance.
fn classify_text(args: ClassifyArgs, cli_args: &BanterArgs) -> Result<()> {
    let catalog = IntentCatalog::load_json(&args.catalog)?;
    let classifier = build_classifier(&catalog, args.threshold)?;

    let classification = classifier.predict(&args.text)?;

    output_result(
        "Classification complete",
        &ClassifyResult {
            text: args.text,
            intent: classification.intent,
            score: classification.score,
        },
        cli_args,
    )
}

/// Run an interactive chat session on stdin/stdout.
fn run_chat(args: ChatArgs, cli_args: &BanterArgs) -> Result<()> {
    let catalog = IntentCatalog::load_json(&args.catalog)?;
    let classifier = build_classifier(&catalog, args.threshold)?;

    let responses = match &args.responses {
        Some(path) => ResponseTable::load_json(path)?,
        None => ResponseTable::new(),
    };

    let mut engine = ChatEngine::new(Box::new(classifier), responses);
    if let Some(dir) = &args.log_dir {
        engine = engine.with_log_sink(Box::new(FileChatLogSink::new(dir)?));
    }

    if cli_args.verbosity() > 0 {
        println!("Chatting as site '{}'. Type 'exit' to leave.", args.site);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }
        if message.is_empty() {
            println!("Please say something so I can help!");
            continue;
        }

        let reply = engine.respond(&args.site, message)?;
        if cli_args.verbosity() > 1 {
            println!("[intent: {}, score: {:.3}]", reply.intent, reply.score);
        }
        println!("{}", reply.message);
    }

    Ok(())
}

/// Show catalog statistics.
fn show_stats(args: StatsArgs, cli_args: &BanterArgs) -> Result<()> {
    let catalog = IntentCatalog::load_json(&args.catalog)?;
    let classifier = CosineIntentClassifier::new(&catalog)?;

    output_result(
        "Catalog statistics",
        &CatalogStats {
            intents: catalog.intent_count(),
            examples: catalog.sample_count(),
            vocabulary_size: classifier.vectorizer().vocabulary_size(),
            intent_names: catalog.intents().map(String::from).collect(),
        },
        cli_args,
    )
}

/// Keep only entries belonging to the requested sites; an empty request
/// keeps everything.
fn filter_entries(entries: Vec<LogEntry>, sites: &[String]) -> Vec<LogEntry> {
    if sites.is_empty() {
        return entries;
    }

    let wanted: AHashSet<&str> = sites.iter().map(String::as_str).collect();
    entries
        .into_iter()
        .filter(|entry| wanted.contains(entry.site.as_str()))
        .collect()
}

/// Aggregate chat logs into a report.
fn run_report(args: ReportArgs, cli_args: &BanterArgs) -> Result<()> {
    let entries = filter_entries(scan_log_dir(&args.log_dir)?, &args.site);
    let report = ChatLogReport::from_entries(&entries);

    let summary = ReportSummary {
        total: report.total(),
        top_intents: report
            .top_intents(args.top)
            .into_iter()
            .map(|(intent, count)| TopIntent {
                intent: intent.to_string(),
                count,
            })
            .collect(),
        intent_counts: report.intent_counts().clone(),
        daily_counts: report
            .daily_counts()
            .iter()
            .map(|(date, &count)| (date.format("%Y-%m-%d").to_string(), count))
            .collect(),
        site_intents: report.site_intents().clone(),
    };

    output_result("Chat log report", &summary, cli_args)
}
