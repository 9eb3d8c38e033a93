//! Resolved clipboard settings.

mod defaults;

pub use defaults::{
    DEFAULT_DATA_ATTRIBUTE, DEFAULT_FOREIGN_MARKERS, DEFAULT_IMAGE_MIME_TYPES, DEFAULT_LOG_LEVEL,
};

use serde::{Deserialize, Serialize};

use crate::clipboard::MimeType;
use crate::config::AppConfig;

/// Knobs of the OS clipboard parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardSettings {
    /// HTML attribute holding the native payload.
    pub data_attribute: String,
    /// Root attribute substrings that mark foreign HTML.
    pub foreign_markers: Vec<String>,
    /// Image types probed when no text is present, highest priority first.
    pub image_mime_types: Vec<MimeType>,
}

impl ClipboardSettings {
    /// Overlays the configured values on the defaults. Empty config values
    /// keep the default.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut settings = Self::default();
        if !config.data_attribute.is_empty() {
            settings.data_attribute = config.data_attribute.clone();
        }
        if !config.foreign_markers.is_empty() {
            settings.foreign_markers = config.foreign_markers.clone();
        }
        if !config.image_mime_types.is_empty() {
            settings.image_mime_types = config
                .image_mime_types
                .iter()
                .map(|mime| MimeType::from(mime.as_str()))
                .collect();
        }
        settings
    }
}
