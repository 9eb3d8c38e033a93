//! # Configuration Loader
//!
//! Reads the TOML configuration file into the `AppConfig` DTO. Defaults are
//! resolved later by `ClipboardSettings::from_config`.

use anyhow::Context;
use sc_core::config::AppConfig;
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file
///
/// Pure data loading: empty strings and missing sections are accepted as
/// they are.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// `<config dir>/sheetclip/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sheetclip").join("config.toml"))
}

/// An explicit path must load. Without one, the default location is used
/// when it exists and an empty config otherwise.
pub fn resolve_config(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        return load_config(path.to_path_buf());
    }
    match default_config_path() {
        Some(path) if path.exists() => load_config(path),
        _ => Ok(AppConfig::empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [clipboard]
            data_attribute = "data-sheet"
            foreign_markers = ["excel"]

            [logging]
            level = "debug"
            log_dir = "/tmp/sheetclip-logs"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.data_attribute, "data-sheet");
        assert_eq!(config.foreign_markers, vec!["excel"]);
        assert!(config.image_mime_types.is_empty());
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_dir, PathBuf::from("/tmp/sheetclip-logs"));
    }

    #[test]
    fn test_load_config_returns_error_for_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[clipboard\nbroken").unwrap();

        let err = load_config(temp_file.path().to_path_buf()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_resolve_config_requires_explicit_file_to_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");

        let err = resolve_config(Some(&missing)).unwrap_err();

        assert!(err.to_string().contains("Failed to read config file"));
    }
}
