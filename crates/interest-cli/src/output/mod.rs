pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod report;
pub mod table;

use crate::OutputFormat;
use serde_json::{Map, Value};

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
        OutputFormat::Report => report::print_report(value),
    }
}

/// The `result` object of a computation envelope, or the value itself.
pub(crate) fn result_of(value: &Value) -> &Value {
    value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value)
}

/// Flatten nested objects into `(dotted.key, leaf)` pairs in map order.
pub(crate) fn flatten(value: &Value) -> Vec<(String, Value)> {
    let mut rows = Vec::new();
    if let Value::Object(map) = value {
        flatten_into(&mut rows, "", map);
    }
    rows
}

fn flatten_into(rows: &mut Vec<(String, Value)>, prefix: &str, map: &Map<String, Value>) {
    for (key, val) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match val {
            Value::Object(inner) => flatten_into(rows, &path, inner),
            leaf => rows.push((path, leaf.clone())),
        }
    }
}

pub(crate) fn format_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
