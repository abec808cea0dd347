// src/config.rs
//! Dashboard client configuration.
//!
//! Settings are read from an optional YAML file; anything the file leaves
//! out falls back to the defaults below. Command-line flags are applied on
//! top by the binary.
//!
//! ```yaml
//! base_url: http://127.0.0.1:5000
//! header_color: "#667eea"
//! output: dashboard.html
//! hidden_columns: [Campaign_ID]
//! visualizations:
//!   - endpoint: /api/viz/scatter
//!     container: scatter-chart
//!     title: Spend vs Revenue
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::table::DEFAULT_HEADER_COLOR;

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.yaml";

/// Flask's default bind address for the dashboard server.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// A chart fragment endpoint and the page container it is loaded into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visualization {
    pub endpoint: String,
    pub container: String,
    pub title: String,
}

impl Visualization {
    fn new(endpoint: &str, container: &str, title: &str) -> Self {
        Visualization {
            endpoint: endpoint.to_string(),
            container: container.to_string(),
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub header_color: String,
    pub output: PathBuf,
    pub hidden_columns: Vec<String>,
    pub visualizations: Vec<Visualization>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            header_color: DEFAULT_HEADER_COLOR.to_string(),
            output: PathBuf::from("dashboard.html"),
            hidden_columns: Vec::new(),
            visualizations: default_visualizations(),
        }
    }
}

fn default_visualizations() -> Vec<Visualization> {
    vec![
        Visualization::new("/api/viz/choropleth", "choropleth-map", "Marketing ROI by Region"),
        Visualization::new(
            "/api/viz/scatter",
            "scatter-chart",
            "Marketing Spend vs Revenue by Campaign Type",
        ),
        Visualization::new(
            "/api/viz/campaign-bar",
            "campaign-bar-chart",
            "Revenue vs Marketing Spend by Campaign Type",
        ),
        Visualization::new("/api/viz/category-bar", "category-bar-chart", "ROI by Product Category"),
        Visualization::new("/api/viz/region-altair", "region-altair-chart", "ROI Comparison by Region"),
    ]
}

impl Config {
    /// Loads the config at `path`, or `dashboard.yaml` in the working
    /// directory when `path` is `None`.
    ///
    /// A missing default file yields the defaults; a missing explicit path
    /// is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_yaml(&contents).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        // an empty file deserializes to unit, not to an empty mapping
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_cover_all_charts() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.header_color, "#667eea");
        assert_eq!(config.visualizations.len(), 5);
        assert_eq!(config.visualizations[0].endpoint, "/api/viz/choropleth");
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = Config::from_yaml("base_url: http://dash.local:8080\nhidden_columns: [notes]\n").unwrap();
        assert_eq!(config.base_url, "http://dash.local:8080");
        assert_eq!(config.hidden_columns, vec!["notes"]);
        assert_eq!(config.output, PathBuf::from("dashboard.html"));
        assert_eq!(config.visualizations.len(), 5);
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
    }

    #[test]
    fn from_file_reports_bad_yaml_with_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"base_url: [unclosed").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = Config::load(Some(Path::new("/no/such/dashboard.yaml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
