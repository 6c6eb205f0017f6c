//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cli::args::{BanterArgs, OutputFormat};
use crate::error::Result;

/// Result structure for one-shot classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResult {
    pub text: String,
    pub intent: String,
    pub score: f64,
}

/// Catalog statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogStats {
    pub intents: usize,
    pub examples: usize,
    pub vocabulary_size: usize,
    pub intent_names: Vec<String>,
}

/// One row of the top-intent listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct TopIntent {
    pub intent: String,
    pub count: u64,
}

/// Summary of an aggregated chat log report.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: u64,
    pub top_intents: Vec<TopIntent>,
    pub intent_counts: BTreeMap<String, u64>,
    pub daily_counts: BTreeMap<String, u64>,
    pub site_intents: BTreeMap<String, BTreeMap<String, u64>>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &BanterArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &BanterArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    if std::any::type_name::<T>().contains("ReportSummary") {
        output_report_human(&value)
    } else {
        output_generic_human(&value)
    }
}

/// Output a report summary in human format.
fn output_report_human(value: &serde_json::Value) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return Ok(());
    };

    if let Some(total) = obj.get("total").and_then(|t| t.as_u64()) {
        println!("Total entries: {total}");
    }

    if let Some(top) = obj.get("top_intents").and_then(|t| t.as_array())
        && !top.is_empty()
    {
        println!();
        println!("Top intents:");
        for row in top {
            let intent = row.get("intent").and_then(|i| i.as_str()).unwrap_or("?");
            let count = row.get("count").and_then(|c| c.as_u64()).unwrap_or(0);
            println!("  {intent}: {count}");
        }
    }

    if let Some(sites) = obj.get("site_intents").and_then(|s| s.as_object())
        && !sites.is_empty()
    {
        println!();
        println!("Per site:");
        for (site, intents) in sites {
            println!("  {site}:");
            if let Some(intents) = intents.as_object() {
                for (intent, count) in intents {
                    println!("    {intent}: {count}");
                }
            }
        }
    }

    Ok(())
}

/// Generic key-value output for other result types.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                match val {
                    serde_json::Value::String(s) => println!("{key}: {s}"),
                    serde_json::Value::Array(items) => {
                        let rendered: Vec<String> =
                            items.iter().map(|i| i.to_string()).collect();
                        println!("{key}: {}", rendered.join(", "));
                    }
                    other => println!("{key}: {other}"),
                }
            }
        }
        other => println!("{other}"),
    }

    Ok(())
}

/// Output as JSON (compact, or pretty with `--pretty`).
fn output_json<T: Serialize>(result: &T, args: &BanterArgs) -> Result<()> {
    let rendered = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_result_serializes() {
        let result = ClassifyResult {
            text: "hello there".to_string(),
            intent: "greeting".to_string(),
            score: 1.0,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["intent"], "greeting");
        assert_eq!(json["score"], 1.0);
    }

    #[test]
    fn test_report_summary_serializes() {
        let summary = ReportSummary {
            total: 2,
            top_intents: vec![TopIntent {
                intent: "homesickness".to_string(),
                count: 2,
            }],
            intent_counts: BTreeMap::from([("homesickness".to_string(), 2)]),
            daily_counts: BTreeMap::new(),
            site_intents: BTreeMap::new(),
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["total"], 2);
        assert_eq!(json["top_intents"][0]["intent"], "homesickness");
    }
}
