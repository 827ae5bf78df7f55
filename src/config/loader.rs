//! Settings-file loading from disk.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::resolver::ConfigError;

/// Structured settings source, used when no positional arguments are
/// supplied. Both keys are optional at the parse level; the resolver
/// reports which one is missing.
#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub listen_address: Option<String>,

    #[serde(default)]
    pub target_port: Option<PortValue>,
}

/// Target port as written in the settings file. Integers and numeric
/// strings are both accepted; either way the resolver sees a raw candidate
/// and applies the same validation as for CLI input.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PortValue {
    Number(i64),
    Text(String),
}

impl PortValue {
    /// The raw candidate string handed to the resolver.
    pub fn candidate(&self) -> String {
        match self {
            PortValue::Number(n) => n.to_string(),
            PortValue::Text(s) => s.clone(),
        }
    }
}

/// Load settings from a TOML file.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::SettingsIo {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::SettingsParse {
        path: path.to_path_buf(),
        source,
    })
}
