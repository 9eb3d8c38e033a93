//! Platform adapters: OS clipboard parsing and the clipboard-rs reader.

pub mod clipboard;

pub use clipboard::{parse_os_clipboard_content, OsClipboardParser, PlatformClipboardReader};
