//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cli::args::{OutputFormat, TextonymArgs};
use crate::error::Result;

/// Result structure for textonym lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResult {
    pub word: String,
    pub signature: String,
    pub matches: Vec<String>,
}

/// Result structure for signature computation.
#[derive(Debug, Serialize, Deserialize)]
pub struct SignatureResult {
    pub word: String,
    pub signature: String,
}

/// One textonym class: a signature and the words sharing it.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TextonymClass {
    pub signature: String,
    pub words: Vec<String>,
}

/// Result structure for the groups command.
#[derive(Debug, Serialize, Deserialize)]
pub struct GroupsResult {
    pub classes: Vec<TextonymClass>,
    pub total_classes: usize,
}

/// Word-list statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResult {
    pub words: usize,
    pub distinct_signatures: usize,
    pub textonym_classes: usize,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &TextonymArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &TextonymArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
    }

    // Convert to JSON value for uniform rendering
    let value = serde_json::to_value(result)?;
    print_value(&value, 0);

    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TextonymArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");

    Ok(())
}

fn print_value(value: &Value, indent: usize) {
    let pad = "  ".repeat(indent);
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                match val {
                    Value::Object(_) | Value::Array(_) => {
                        println!("{pad}{key}:");
                        print_value(val, indent + 1);
                    }
                    _ => println!("{pad}{key}: {}", scalar(val)),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::Object(_) | Value::Array(_) => {
                        println!("{pad}-");
                        print_value(item, indent + 1);
                    }
                    _ => println!("{pad}- {}", scalar(item)),
                }
            }
        }
        _ => println!("{pad}{}", scalar(value)),
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
