// src/error.rs
//! Error types for roi_dashboard

use std::path::PathBuf;
use thiserror::Error;

/// Failures of a single fetch against the dashboard server.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("HTTP error fetching {endpoint}: status {status}")]
    Http { endpoint: String, status: u16 },

    /// The request never produced a response.
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the JSON the caller asked for.
    #[error("invalid JSON from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Status code for `Http` failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failures while turning a data source into table rows.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid CSV in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("expected a JSON array of objects, got {0}")]
    Shape(String),

    #[error("CSV reader task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Failures while loading the YAML configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
