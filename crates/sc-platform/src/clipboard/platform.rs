use async_trait::async_trait;
use clipboard_rs::common::RustImage;
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use tokio::task::spawn_blocking;
use tracing::debug;

use sc_core::clipboard::{MimeType, OsClipboardContent, OsClipboardData};
use sc_core::ports::{ClipboardReadError, OsClipboardReaderPort};
use sc_core::settings::ClipboardSettings;

/// Reads the system clipboard through clipboard-rs.
///
/// A fresh clipboard context is opened on a blocking worker for every read,
/// so the reader itself holds no platform handle.
#[derive(Debug, Clone)]
pub struct PlatformClipboardReader {
    image_mime_types: Vec<MimeType>,
}

impl PlatformClipboardReader {
    pub fn new(settings: &ClipboardSettings) -> Self {
        Self {
            image_mime_types: settings.image_mime_types.clone(),
        }
    }

    fn read_blocking(image_mime_types: &[MimeType]) -> Result<OsClipboardContent, ClipboardReadError> {
        let ctx = ClipboardContext::new()
            .map_err(|e| ClipboardReadError::Unavailable(e.to_string()))?;
        let available = ctx
            .available_formats()
            .map_err(|e| ClipboardReadError::Backend(e.to_string()))?;

        let mut content = OsClipboardContent::new();

        if ctx.has(ContentFormat::Text) {
            if let Ok(text) = ctx.get_text() {
                content = content.with_text(text);
            }
        }

        if ctx.has(ContentFormat::Html) {
            if let Ok(html) = ctx.get_html() {
                content = content.with_html(html);
            }
        }

        // formats advertised under their MIME name (X11, Wayland)
        for mime in image_mime_types {
            if !available.iter().any(|format| format.eq_ignore_ascii_case(mime.as_str())) {
                continue;
            }
            if let Ok(bytes) = ctx.get_buffer(mime.as_str()) {
                content.insert(mime.clone(), OsClipboardData::Bytes { bytes });
            }
        }

        let png = MimeType::from("image/png");
        if content.get(&png).is_none() && ctx.has(ContentFormat::Image) {
            if let Ok(image) = ctx.get_image() {
                if let Ok(encoded) = image.to_png() {
                    content.insert(
                        png,
                        OsClipboardData::Bytes {
                            bytes: encoded.get_bytes().to_vec(),
                        },
                    );
                }
            }
        }

        Ok(content)
    }
}

impl Default for PlatformClipboardReader {
    fn default() -> Self {
        Self::new(&ClipboardSettings::default())
    }
}

#[async_trait]
impl OsClipboardReaderPort for PlatformClipboardReader {
    async fn read(&self) -> Result<OsClipboardContent, ClipboardReadError> {
        let image_mime_types = self.image_mime_types.clone();
        let content = spawn_blocking(move || Self::read_blocking(&image_mime_types))
            .await
            .map_err(|e| ClipboardReadError::Backend(format!("Task join error: {e}")))??;

        debug!(
            parts = ?content.mime_types().map(MimeType::as_str).collect::<Vec<_>>(),
            "Read platform clipboard"
        );
        Ok(content)
    }
}
