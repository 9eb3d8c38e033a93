//! # Configuration DTO
//!
//! Maps the TOML configuration file onto plain data. This module holds no
//! policy: missing keys become empty values and defaults are resolved by
//! [`crate::settings`].

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Attribute carrying the native payload in copied HTML (may be empty)
    pub data_attribute: String,

    /// Substrings marking HTML copied from another application
    pub foreign_markers: Vec<String>,

    /// Accepted image MIME types, in priority order
    pub image_mime_types: Vec<String>,

    /// Log level directive, e.g. "info" or "sc_app=debug"
    pub log_level: String,

    /// Directory for the rolling log file (path info only)
    pub log_dir: PathBuf,
}

fn string_at(toml_value: &toml::Value, section: &str, key: &str) -> String {
    toml_value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

fn strings_at(toml_value: &toml::Value, section: &str, key: &str) -> Vec<String> {
    toml_value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

impl AppConfig {
    /// Create AppConfig from a TOML value.
    ///
    /// Must not validate or compute defaults. Non-string array items are
    /// dropped.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            data_attribute: string_at(toml_value, "clipboard", "data_attribute"),
            foreign_markers: strings_at(toml_value, "clipboard", "foreign_markers"),
            image_mime_types: strings_at(toml_value, "clipboard", "image_mime_types"),
            log_level: string_at(toml_value, "logging", "level"),
            log_dir: PathBuf::from(string_at(toml_value, "logging", "log_dir")),
        })
    }

    /// Create empty AppConfig (all empty values)
    pub fn empty() -> Self {
        Self {
            data_attribute: String::new(),
            foreign_markers: Vec::new(),
            image_mime_types: Vec::new(),
            log_level: String::new(),
            log_dir: PathBuf::new(),
        }
    }
}
