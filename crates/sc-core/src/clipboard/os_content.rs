//! Raw multi-format content of the operating system clipboard, and the
//! result of disambiguating it.
//!
//! - [`OsClipboardContent`] is what the platform hands over: one entry per
//!   MIME type (`text/plain`, `text/html`, `image/*`).
//! - [`ParsedClipboardContent`] is what a paste can use: the plain text
//!   fallback, an embedded payload table when the HTML came from this
//!   engine, and an image when there is no text.
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::clipboard::{ClipboardPayload, MimeType};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OsClipboardData {
    /// UTF-8 text
    Text { text: String },

    /// raw bytes (images)
    Bytes { bytes: Vec<u8> },
}

impl OsClipboardData {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            OsClipboardData::Text { text } => text.as_bytes(),
            OsClipboardData::Bytes { bytes } => bytes,
        }
    }

    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            OsClipboardData::Text { text } => Cow::Borrowed(text),
            OsClipboardData::Bytes { bytes } => String::from_utf8_lossy(bytes),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OsClipboardContent {
    parts: BTreeMap<MimeType, OsClipboardData>,
}

impl OsClipboardContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_part(MimeType::text_plain(), OsClipboardData::Text { text: text.into() })
    }

    pub fn with_html(self, html: impl Into<String>) -> Self {
        self.with_part(MimeType::text_html(), OsClipboardData::Text { text: html.into() })
    }

    pub fn with_bytes(self, mime: MimeType, bytes: Vec<u8>) -> Self {
        self.with_part(mime, OsClipboardData::Bytes { bytes })
    }

    pub fn with_part(mut self, mime: MimeType, data: OsClipboardData) -> Self {
        self.insert(mime, data);
        self
    }

    pub fn insert(&mut self, mime: MimeType, data: OsClipboardData) {
        self.parts.insert(mime, data);
    }

    pub fn get(&self, mime: &MimeType) -> Option<&OsClipboardData> {
        self.parts.get(mime)
    }

    pub fn text_of(&self, mime: &MimeType) -> Option<Cow<'_, str>> {
        self.get(mime).map(OsClipboardData::as_text)
    }

    pub fn mime_types(&self) -> impl Iterator<Item = &MimeType> + '_ {
        self.parts.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageBlob {
    pub mime: MimeType,
    pub bytes: Vec<u8>,
}

/// Everything usable that was found on the OS clipboard.
///
/// `data` and `image` may both be present; consumers prefer `data`, then
/// `image`, then `text`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ParsedClipboardContent {
    pub text: String,
    pub data: Option<ClipboardPayload>,
    pub image: Option<ImageBlob>,
}
