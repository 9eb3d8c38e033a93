use serde::Serialize;

use sc_core::clipboard::{ClipboardPayload, ImageBlob, ParsedClipboardContent};

/// What a paste from the OS clipboard should use.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OsPasteSource {
    /// Native payload table copied from a spreadsheet.
    Structured { payload: ClipboardPayload },
    Image { image: ImageBlob },
    Text { text: String },
    Empty,
}

/// Picks the richest usable content: structured data, then image, then text.
///
/// Whitespace-only text counts as nothing to paste.
pub fn resolve_os_clipboard(content: ParsedClipboardContent) -> OsPasteSource {
    if let Some(payload) = content.data {
        return OsPasteSource::Structured { payload };
    }
    if let Some(image) = content.image {
        return OsPasteSource::Image { image };
    }
    if content.text.trim().is_empty() {
        return OsPasteSource::Empty;
    }
    OsPasteSource::Text { text: content.text }
}
