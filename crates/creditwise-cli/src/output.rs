//! Output formatting: JSON (default), field/value tables, CSV, and a
//! minimal single-value mode for scripting.

use serde_json::Value;
use tabled::{builder::Builder, Table};

use crate::OutputFormat;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => print_table(value),
        OutputFormat::Csv => print_csv(value),
        OutputFormat::Minimal => print_minimal(value),
    }
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(_) => println!("{value}"),
    }
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

fn print_table(value: &Value) {
    let result = unwrap_envelope(value);

    match result {
        Value::Object(map) => {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for (key, val) in map {
                builder.push_record([key.as_str(), &scalar(val)]);
            }
            println!("{}", Table::from(builder));
        }
        Value::Array(items) => print_row_table(items),
        other => println!("{other}"),
    }

    if let Value::Object(envelope) = value {
        if let Some(Value::Array(warnings)) = envelope.get("warnings") {
            if !warnings.is_empty() {
                println!("\nWarnings:");
                for warning in warnings {
                    if let Value::String(text) = warning {
                        println!("  - {text}");
                    }
                }
            }
        }
    }
}

fn print_row_table(items: &[Value]) {
    let Some(Value::Object(first)) = items.first() else {
        for item in items {
            println!("{}", scalar(item));
        }
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);
    for item in items {
        if let Value::Object(map) = item {
            builder.push_record(
                headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(scalar).unwrap_or_default()),
            );
        }
    }
    println!("{}", Table::from(builder));
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

fn print_csv(value: &Value) {
    let result = unwrap_envelope(value);
    let mut writer = csv::Writer::from_writer(std::io::stdout());

    let rows: Vec<(String, String)> = match result {
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), scalar(v))).collect(),
        Value::Array(items) => {
            // Row-per-item CSV with the first object's keys as the header
            if let Some(Value::Object(first)) = items.first() {
                let headers: Vec<String> = first.keys().cloned().collect();
                let _ = writer.write_record(&headers);
                for item in items {
                    if let Value::Object(map) = item {
                        let _ = writer.write_record(
                            headers
                                .iter()
                                .map(|h| map.get(h.as_str()).map(scalar).unwrap_or_default()),
                        );
                    }
                }
                let _ = writer.flush();
                return;
            }
            items
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), scalar(v)))
                .collect()
        }
        other => vec![("value".to_string(), scalar(other))],
    };

    let _ = writer.write_record(["field", "value"]);
    for (field, val) in rows {
        let _ = writer.write_record([field, val]);
    }
    let _ = writer.flush();
}

// ---------------------------------------------------------------------------
// Minimal
// ---------------------------------------------------------------------------

/// Headline result fields, in priority order.
const HEADLINE_KEYS: [&str; 10] = [
    "score",
    "monthlyPayment",
    "maxPrincipal",
    "eligible",
    "delta",
    "streak",
    "level",
    "xpAwarded",
    "bestOffer",
    "tip",
];

fn print_minimal(value: &Value) {
    let result = unwrap_envelope(value);

    if let Value::Object(map) = result {
        for key in HEADLINE_KEYS {
            if let Some(val) = map.get(key) {
                if !val.is_null() {
                    println!("{}", scalar(val));
                    return;
                }
            }
        }
        if let Some((key, val)) = map.iter().next() {
            println!("{key}: {}", scalar(val));
            return;
        }
    }

    println!("{}", scalar(result));
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Commands wrap their payload in the core's computation envelope; peel it
/// off so every format shows the payload itself.
fn unwrap_envelope(value: &Value) -> &Value {
    value
        .as_object()
        .and_then(|map| map.get("result"))
        .unwrap_or(value)
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(items) => items.iter().map(scalar).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
