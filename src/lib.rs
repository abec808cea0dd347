// src/lib.rs
//! Client utilities for the marketing ROI dashboard.
//!
//! - `api` - GET helpers returning parsed JSON or raw text
//! - `format` - currency and percentage display strings
//! - `viz` - loads server-rendered chart fragments into page containers
//! - `table` - HTML tables from rows and column descriptors
//! - `dashboard` - assembles the full dashboard page from the server's endpoints

pub mod api;
pub mod config;
pub mod csv_handler;
pub mod dashboard;
pub mod data_types;
pub mod error;
pub mod format;
pub mod models;
pub mod renderer;
pub mod source;
pub mod table;
pub mod ui;
pub mod viz;

pub use api::{ApiClient, Fetcher};
pub use config::Config;
pub use data_types::{Align, CellFormat, CellValue, Column, Row, TableData, TableSource};
pub use error::{ApiError, ConfigError, TableError};
pub use format::{format_currency, format_percent};
pub use renderer::{Document, Renderer};
pub use table::build_table;
pub use viz::{LoadOutcome, VisualizationLoader};
