use super::ClipboardSettings;
use crate::clipboard::MimeType;

pub const DEFAULT_DATA_ATTRIBUTE: &str = "data-osheet-clipboard";

pub const DEFAULT_FOREIGN_MARKERS: &[&str] = &[
    "urn:schemas-microsoft-com:office:excel",
    "google-sheets-html-origin",
];

pub const DEFAULT_IMAGE_MIME_TYPES: &[&str] = &[
    "image/avif",
    "image/bmp",
    "image/gif",
    "image/vnd.microsoft.icon",
    "image/jpeg",
    "image/png",
    "image/tiff",
    "image/webp",
];

pub const DEFAULT_LOG_LEVEL: &str = "info";

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self {
            data_attribute: DEFAULT_DATA_ATTRIBUTE.to_string(),
            foreign_markers: DEFAULT_FOREIGN_MARKERS
                .iter()
                .map(|marker| marker.to_string())
                .collect(),
            image_mime_types: DEFAULT_IMAGE_MIME_TYPES
                .iter()
                .map(|mime| MimeType::from(*mime))
                .collect(),
        }
    }
}
