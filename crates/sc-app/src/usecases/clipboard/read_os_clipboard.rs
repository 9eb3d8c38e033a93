use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info_span, Instrument};

use sc_core::ports::{OsClipboardParserPort, OsClipboardReaderPort};

use super::resolve_os_clipboard::{resolve_os_clipboard, OsPasteSource};

/// Reads the platform clipboard and resolves what a paste should use.
///
/// The read is the only suspending step; parsing and resolution are
/// synchronous and cannot fail.
pub struct ReadOsClipboardUseCase {
    reader: Arc<dyn OsClipboardReaderPort>,
    parser: Arc<dyn OsClipboardParserPort>,
}

impl ReadOsClipboardUseCase {
    pub fn new(
        reader: Arc<dyn OsClipboardReaderPort>,
        parser: Arc<dyn OsClipboardParserPort>,
    ) -> Self {
        Self { reader, parser }
    }

    pub async fn execute(&self) -> Result<OsPasteSource> {
        let span = info_span!("usecase.read_os_clipboard.execute");
        async move {
            let content = self
                .reader
                .read()
                .await
                .context("Failed to read the OS clipboard")?;
            debug!(
                parts = ?content.mime_types().map(|mime| mime.as_str()).collect::<Vec<_>>(),
                "Read OS clipboard"
            );

            let parsed = self.parser.parse(&content);
            Ok(resolve_os_clipboard(parsed))
        }
        .instrument(span)
        .await
    }
}
