//! Output formatting for CLI display.
//!
//! JiffyBox wraps every answer as `{"messages": [...], "result": ...}`.
//! [`render`] turns the `result` member into a table where its shape allows
//! and appends any provider messages.

use serde_json::{Map, Value};
use tabled::builder::Builder;

/// Render an API response for the terminal.
///
/// With `json` set the whole response is pretty-printed unchanged.
pub fn render(response: &Value, json: bool) -> String {
    if json {
        return pretty(response);
    }

    let result = response.get("result").unwrap_or(response);
    let mut out = table(result).unwrap_or_else(|| pretty(result));

    for line in messages(response) {
        out.push('\n');
        out.push_str(&line);
    }

    out
}

/// Provider messages formatted as `[type] message`.
fn messages(response: &Value) -> Vec<String> {
    response
        .get("messages")
        .and_then(Value::as_array)
        .map(|messages| {
            messages
                .iter()
                .filter_map(|m| {
                    let text = m.get("message")?.as_str()?;
                    let kind = m.get("type").and_then(Value::as_str).unwrap_or("info");
                    Some(format!("[{kind}] {text}"))
                })
                .collect()
        })
        .unwrap_or_default()
}

fn table(result: &Value) -> Option<String> {
    match result {
        // Collections come keyed by id.
        Value::Object(map) if !map.is_empty() && map.values().all(Value::is_object) => {
            let rows: Vec<(Option<&str>, &Map<String, Value>)> = map
                .iter()
                .filter_map(|(id, v)| Some((Some(id.as_str()), v.as_object()?)))
                .collect();
            Some(rows_table(&rows))
        }
        Value::Object(map) if !map.is_empty() => {
            let mut builder = Builder::default();
            builder.push_record(["key".to_string(), "value".to_string()]);
            for (key, value) in map {
                builder.push_record([key.clone(), cell(value)]);
            }
            Some(builder.build().to_string())
        }
        Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
            let rows: Vec<(Option<&str>, &Map<String, Value>)> = items
                .iter()
                .filter_map(|v| Some((None, v.as_object()?)))
                .collect();
            Some(rows_table(&rows))
        }
        _ => None,
    }
}

/// One row per object; columns are the scalar fields in order of first appearance.
fn rows_table(rows: &[(Option<&str>, &Map<String, Value>)]) -> String {
    let mut columns: Vec<&str> = Vec::new();
    for (_, row) in rows {
        for (key, value) in row.iter() {
            if !value.is_object() && !value.is_array() && !columns.contains(&key.as_str()) {
                columns.push(key);
            }
        }
    }

    let keyed = rows.iter().any(|(id, row)| id.is_some() && !row.contains_key("id"));

    let mut builder = Builder::default();
    let mut header: Vec<String> = Vec::with_capacity(columns.len() + 1);
    if keyed {
        header.push("id".to_string());
    }
    header.extend(columns.iter().map(|c| c.to_string()));
    builder.push_record(header);

    for (id, row) in rows {
        let mut record = Vec::with_capacity(columns.len() + 1);
        if keyed {
            record.push(id.unwrap_or_default().to_string());
        }
        record.extend(columns.iter().map(|c| row.get(*c).map(cell).unwrap_or_default()));
        builder.push_record(record);
    }

    builder.build().to_string()
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
