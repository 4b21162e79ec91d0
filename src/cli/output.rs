//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{NumtrieArgs, OutputFormat};
use crate::error::Result;

/// One encoded term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermResult {
    pub value: i64,
    pub shift: u32,
    pub term: String,
}

/// All terms of one value.
#[derive(Debug, Serialize, Deserialize)]
pub struct LadderResult {
    pub value: i64,
    pub precision_step: u32,
    pub terms: Vec<TermResult>,
}

/// One term range of a split.
#[derive(Debug, Serialize, Deserialize)]
pub struct TermRangeResult {
    pub shift: u32,
    pub lower: String,
    pub upper: String,
    pub min_value: i64,
    pub max_value: i64,
}

/// A split value range.
#[derive(Debug, Serialize, Deserialize)]
pub struct SplitResult {
    pub lower: i64,
    pub upper: i64,
    pub precision_step: u32,
    pub ranges: Vec<TermRangeResult>,
}

/// One analyzed token.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResult {
    pub term: String,
    pub start_offset: usize,
    pub end_offset: usize,
    pub position: usize,
    pub token_type: String,
}

/// An analyzed field.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub name: String,
    pub options: String,
    pub value: String,
    pub length: usize,
    pub tokens: Vec<TokenResult>,
}

/// Output a result in the selected format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &NumtrieArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &NumtrieArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    for line in human_lines(&value) {
        println!("{line}");
    }
    Ok(())
}

/// Render a JSON value as `key: value` lines, expanding arrays of objects as
/// one indented row each.
fn human_lines(value: &serde_json::Value) -> Vec<String> {
    let mut lines = Vec::new();
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                match val {
                    serde_json::Value::Array(rows) if rows.iter().all(|r| r.is_object()) => {
                        lines.push(format!("{key}:"));
                        for row in rows {
                            lines.push(format!("  {}", format_row(row)));
                        }
                    }
                    _ => lines.push(format!("{key}: {}", format_value(val))),
                }
            }
        }
        _ => lines.push(format_value(value)),
    }
    lines
}

fn format_row(row: &serde_json::Value) -> String {
    match row.as_object() {
        Some(obj) => obj
            .iter()
            .map(|(key, val)| format!("{key}={}", format_value(val)))
            .collect::<Vec<_>>()
            .join(" "),
        None => format_value(row),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &NumtrieArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
