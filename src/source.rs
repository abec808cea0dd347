// src/source.rs
use serde_json::Value;

use crate::api::ApiClient;
use crate::csv_handler::CSVHandler;
use crate::data_types::{row_from_json, Align, CellValue, Column, TableData, TableSource};
use crate::error::TableError;

/// Loads rows and inferred columns from either a CSV file or a JSON endpoint.
pub async fn load_table(
    source: &TableSource,
    client: &ApiClient,
    hidden_columns: &[String],
) -> Result<TableData, TableError> {
    match source {
        TableSource::Local(path) => {
            CSVHandler::with_hidden_columns(hidden_columns.to_vec())
                .read_csv(path)
                .await
        }
        TableSource::Endpoint(endpoint) => {
            let value: Value = client.fetch_json(endpoint).await?;
            table_from_json(&value)
        }
    }
}

/// Turns a JSON array of objects into table data.
///
/// Columns follow the key order of the first object; numeric columns are
/// right-aligned.
pub fn table_from_json(value: &Value) -> Result<TableData, TableError> {
    let items = value
        .as_array()
        .ok_or_else(|| TableError::Shape(json_kind(value).to_string()))?;

    let rows = items
        .iter()
        .map(|item| {
            row_from_json(item).ok_or_else(|| {
                TableError::Shape(format!("an array containing {}", json_kind(item)))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let columns = match items.first().and_then(Value::as_object) {
        Some(first) => first
            .iter()
            .map(|(key, value)| {
                let column = Column::new(key.clone(), key.clone());
                match CellValue::from(value) {
                    CellValue::Number(_) => column.align(Align::Right),
                    CellValue::Text(_) => column,
                }
            })
            .collect(),
        None => Vec::new(),
    };

    Ok(TableData { columns, rows })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
