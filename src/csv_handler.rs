// src/csv_handler.rs
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tokio::task;

use crate::data_types::{Align, CellValue, Column, Row, TableData};
use crate::error::TableError;

pub struct CSVHandler {
    hidden_columns: Vec<String>,
}

impl CSVHandler {
    pub fn new() -> Self {
        CSVHandler {
            hidden_columns: Vec::new(),
        }
    }

    /// Columns whose header contains any of these names (case-insensitive)
    /// are left out of the table.
    pub fn with_hidden_columns(hidden_columns: Vec<String>) -> Self {
        CSVHandler {
            hidden_columns: hidden_columns.into_iter().map(|c| c.to_lowercase()).collect(),
        }
    }

    pub async fn read_csv<P: AsRef<Path>>(&self, path: P) -> Result<TableData, TableError> {
        let path = path.as_ref().to_path_buf();
        let hidden = self.hidden_columns.clone();
        task::spawn_blocking(move || Self::read_blocking(&path, &hidden)).await?
    }

    fn read_blocking(path: &Path, hidden: &[String]) -> Result<TableData, TableError> {
        let io_error = |source| TableError::Io {
            path: path.to_path_buf(),
            source,
        };
        let csv_error = |source| TableError::Csv {
            path: path.to_path_buf(),
            source,
        };

        // First check if file uses comma or semicolon as delimiter
        let delimiter = Self::detect_delimiter(path).map_err(io_error)?;

        let file = File::open(path).map_err(io_error)?;
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()
            .map_err(csv_error)?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        let visible: Vec<bool> = headers
            .iter()
            .map(|h| !Self::is_hidden(h, hidden))
            .collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(csv_error)?;

            // Skip empty rows
            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }

            let row: Row = record
                .iter()
                .enumerate()
                .filter(|(i, _)| visible.get(*i).copied().unwrap_or(false))
                .map(|(i, field)| (headers[i].clone(), CellValue::parse(field)))
                .collect();
            rows.push(row);
        }

        let columns = headers
            .iter()
            .zip(&visible)
            .filter(|(_, visible)| **visible)
            .map(|(header, _)| {
                let column = Column::new(header.clone(), header.clone());
                if Self::is_numeric_column(header, &rows) {
                    column.align(Align::Right)
                } else {
                    column
                }
            })
            .collect();

        log::debug!("Read {} rows from {}", rows.len(), path.display());
        Ok(TableData { columns, rows })
    }

    fn detect_delimiter(path: &Path) -> std::io::Result<u8> {
        let mut reader = BufReader::new(File::open(path)?);
        let mut first_line = String::new();
        reader.read_line(&mut first_line)?;

        if first_line.contains(';') {
            Ok(b';')
        } else {
            Ok(b',')
        }
    }

    fn is_hidden(header: &str, hidden: &[String]) -> bool {
        let header = header.to_lowercase();
        hidden.iter().any(|col| header.contains(col.as_str()))
    }

    fn is_numeric_column(header: &str, rows: &[Row]) -> bool {
        let mut cells = rows.iter().filter_map(|row| row.get(header)).peekable();
        cells.peek().is_some() && cells.all(|cell| cell.as_number().is_some())
    }
}

impl Default for CSVHandler {
    fn default() -> Self {
        CSVHandler::new()
    }
}
