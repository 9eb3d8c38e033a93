//! OS clipboard port - abstracts reading the platform clipboard
//!
//! Reading the platform clipboard is the only suspending step of a paste;
//! everything downstream of the returned content is synchronous.

use async_trait::async_trait;

use super::ClipboardReadError;
use crate::clipboard::{OsClipboardContent, ParsedClipboardContent};

#[async_trait]
pub trait OsClipboardReaderPort: Send + Sync {
    /// Reads every supported representation currently on the clipboard.
    async fn read(&self) -> Result<OsClipboardContent, ClipboardReadError>;
}

/// Turns raw clipboard parts into usable content. Never fails: anything
/// unrecognised degrades to absent fields.
pub trait OsClipboardParserPort: Send + Sync {
    fn parse(&self, content: &OsClipboardContent) -> ParsedClipboardContent;
}
