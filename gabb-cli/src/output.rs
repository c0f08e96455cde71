//! Output formatting.

use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use serde_json::{Map, Value};

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table format
    Table,
    /// JSON format
    Json,
    /// Plain text format
    #[default]
    Plain,
}

/// Render a scalar for a table cell or plain line.
fn cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) if items.iter().all(|v| !v.is_object() && !v.is_array()) => items
            .iter()
            .map(cell)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

/// Find the list of records in a response, looking one level into
/// wrapper objects such as `{"Zones": [...]}`.
fn records(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(map) if map.len() == 1 => map.values().next().and_then(Value::as_array),
        _ => None,
    }
}

/// Column headers in order of first appearance.
fn headers(items: &[Value]) -> Vec<String> {
    let mut headers: Vec<String> = Vec::new();
    for item in items {
        if let Value::Object(map) = item {
            for key in map.keys() {
                if !headers.iter().any(|h| h == key) {
                    headers.push(key.clone());
                }
            }
        }
    }
    headers
}

fn print_table(items: &[Value]) {
    if items.is_empty() {
        println!("No results");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let headers = headers(items);
    if headers.is_empty() {
        table.set_header(vec!["Value"]);
        for item in items {
            table.add_row(vec![cell(item)]);
        }
    } else {
        table.set_header(headers.clone());
        for item in items {
            table.add_row(
                headers
                    .iter()
                    .map(|h| item.get(h).map(cell).unwrap_or_default())
                    .collect::<Vec<_>>(),
            );
        }
    }
    println!("{table}");
}

fn print_object_plain(map: &Map<String, Value>, indent: usize) {
    let pad = " ".repeat(indent);
    for (key, value) in map {
        match value {
            Value::Object(inner) => {
                println!("{}{}", pad, format!("{key}:").cyan());
                print_object_plain(inner, indent + 2);
            }
            Value::Array(items) if items.iter().any(Value::is_object) => {
                println!("{}{}", pad, format!("{key}:").cyan());
                for item in items {
                    print_plain(item, indent + 2);
                }
            }
            _ => println!("{}{} {}", pad, format!("{key}:").cyan(), cell(value)),
        }
    }
}

fn print_plain(value: &Value, indent: usize) {
    match value {
        Value::Object(map) => {
            print_object_plain(map, indent);
            println!();
        }
        Value::Array(items) => {
            if items.is_empty() {
                println!("No results");
            }
            for item in items {
                print_plain(item, indent);
            }
        }
        other => println!("{}{}", " ".repeat(indent), cell(other)),
    }
}

/// Print an API response in the requested format.
pub fn print_value(value: &Value, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
        }
        OutputFormat::Table => match (records(value), value) {
            (Some(items), _) => print_table(items),
            (None, Value::Object(map)) => {
                let mut table = Table::new();
                table.load_preset(UTF8_FULL_CONDENSED);
                table.set_content_arrangement(ContentArrangement::Dynamic);
                table.set_header(vec!["Field", "Value"]);
                for (key, v) in map {
                    table.add_row(vec![key.clone(), cell(v)]);
                }
                println!("{table}");
            }
            (None, other) => println!("{}", cell(other)),
        },
        OutputFormat::Plain => print_plain(value, 0),
    }
}

/// Print the result of a change, falling back to `done` when the API
/// returned no body.
pub fn print_outcome(value: &Value, format: OutputFormat, done: &str) {
    match (value, format) {
        (Value::Null, OutputFormat::Json) => println!("{}", serde_json::json!({"ok": true})),
        (Value::Null, _) => println!("{}", done.green()),
        _ => print_value(value, format),
    }
}
