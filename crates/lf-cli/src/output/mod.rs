use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
///
/// `columns` fixes the table column order; keys not listed are appended in
/// name order. Ignored for json and raw output.
pub fn render<T: Serialize>(
    value: &T,
    format: OutputFormat,
    columns: &[&str],
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(&serde_json::to_value(value)?, columns, options()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(
    value: &T,
    format: OutputFormat,
    columns: &[&str],
) -> anyhow::Result<()> {
    let rendered = render(value, format, columns)?;
    println!("{rendered}");
    Ok(())
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table(
    value: &Value,
    columns: &[&str],
    options: table::TableOptions,
) -> anyhow::Result<String> {
    match value {
        Value::Array(items) => Ok(render_array_table(items, columns, options)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let rows = ordered_keys(std::iter::once(map), columns)
                .into_iter()
                .map(|key| {
                    let cell = map.get(&key).map_or_else(|| String::from("-"), value_to_cell);
                    vec![key, cell]
                })
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(scalar)]];
            Ok(table::render_entity_table(&headers, &rows, options))
        }
    }
}

fn render_array_table(items: &[Value], columns: &[&str], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let objects = items.iter().filter_map(Value::as_object).collect::<Vec<_>>();
    if objects.len() != items.len() {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, options);
    }

    let headers = ordered_keys(objects.iter().copied(), columns);
    if headers.is_empty() {
        return String::from("(no columns)");
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = objects
        .iter()
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options)
}

/// Keys present in any of `maps`: listed `columns` first, then the rest sorted.
fn ordered_keys<'a>(
    maps: impl IntoIterator<Item = &'a Map<String, Value>>,
    columns: &[&str],
) -> Vec<String> {
    let mut rest = Vec::<String>::new();
    let mut present = Vec::<&str>::new();
    for map in maps {
        for key in map.keys() {
            if let Some(column) = columns.iter().copied().find(|column| *column == key.as_str()) {
                if !present.contains(&column) {
                    present.push(column);
                }
            } else if !rest.contains(key) {
                rest.push(key.clone());
            }
        }
    }
    rest.sort();

    columns
        .iter()
        .copied()
        .filter(|column| present.contains(column))
        .map(String::from)
        .chain(rest)
        .collect()
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.replace(['\n', '\r'], " "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
