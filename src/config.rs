//! Configuration file support.
//!
//! The tool is configured by an INI file with a single `[main]` section:
//!
//! ```ini
//! [main]
//! PackageName = Newtonsoft.Json
//! OutputPath = graph.png
//! VisualizerPath = /usr/local/bin/mmdc
//! ; optional: grouped (default) or flat
//! GraphStyle = grouped
//! ```
//!
//! All required keys are checked when the file is loaded, so a bad config
//! fails before any package is opened.

use ini::{Ini, ParseOption};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::graph_generation::domain::GraphStyle;
use crate::shared::error::GraphError;
use crate::shared::Result;

pub const MAIN_SECTION: &str = "main";
pub const KEY_PACKAGE_NAME: &str = "PackageName";
pub const KEY_OUTPUT_PATH: &str = "OutputPath";
pub const KEY_VISUALIZER_PATH: &str = "VisualizerPath";
pub const KEY_GRAPH_STYLE: &str = "GraphStyle";

const KNOWN_KEYS: [&str; 4] = [
    KEY_PACKAGE_NAME,
    KEY_OUTPUT_PATH,
    KEY_VISUALIZER_PATH,
    KEY_GRAPH_STYLE,
];

/// Validated application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub package_name: String,
    pub output_path: PathBuf,
    pub visualizer_path: PathBuf,
    pub graph_style: GraphStyle,
    /// Keys in `[main]` that the tool doesn't know about.
    pub unknown_fields: Vec<String>,
}

/// Load config from an explicit path.
pub fn load_config_from_path(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| GraphError::ConfigReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let config = parse_config(path, &content)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Parse and validate config content. `path` is only used in error messages.
pub fn parse_config(path: &Path, content: &str) -> Result<AppConfig> {
    // Backslashes are literal so Windows paths survive
    let options = ParseOption {
        enabled_escape: false,
        ..ParseOption::default()
    };
    let ini = Ini::load_from_str_opt(content, options).map_err(|e| GraphError::ConfigReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let section = ini
        .section(Some(MAIN_SECTION))
        .ok_or_else(|| GraphError::ConfigReadError {
            path: path.to_path_buf(),
            details: format!("Missing [{}] section", MAIN_SECTION),
        })?;

    // Keys are matched case-insensitively
    let lookup = |key: &str| -> Option<String> {
        section
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.trim().to_string())
    };
    let require = |key: &str| -> Result<String> {
        let value = lookup(key).ok_or_else(|| GraphError::MissingConfigKey {
            path: path.to_path_buf(),
            section: MAIN_SECTION.to_string(),
            key: key.to_string(),
        })?;
        if value.is_empty() {
            return Err(GraphError::InvalidConfigValue {
                key: key.to_string(),
                value,
                reason: "value must not be empty".to_string(),
            }
            .into());
        }
        Ok(value)
    };

    let package_name = require(KEY_PACKAGE_NAME)?;
    let output_path = PathBuf::from(require(KEY_OUTPUT_PATH)?);
    let visualizer_path = PathBuf::from(require(KEY_VISUALIZER_PATH)?);

    let graph_style = match lookup(KEY_GRAPH_STYLE) {
        Some(value) => {
            GraphStyle::from_str(&value).map_err(|reason| GraphError::InvalidConfigValue {
                key: KEY_GRAPH_STYLE.to_string(),
                value: value.clone(),
                reason,
            })?
        }
        None => GraphStyle::default(),
    };

    let unknown_fields = section
        .iter()
        .map(|(k, _)| k)
        .filter(|k| !KNOWN_KEYS.iter().any(|known| known.eq_ignore_ascii_case(k)))
        .map(str::to_string)
        .collect();

    Ok(AppConfig {
        package_name,
        output_path,
        visualizer_path,
        graph_style,
        unknown_fields,
    })
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &AppConfig) {
    for key in &config.unknown_fields {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
