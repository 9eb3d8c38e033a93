//! Port interfaces for the application layer
//!
//! Ports define the contract between the paste/copy use cases and the
//! outside world: the UI selection model and the platform clipboard.
//! Implementations live in `sc-platform` or in the embedding application.

pub mod errors;
mod os_clipboard;
mod selection;

pub use errors::ClipboardReadError;
pub use os_clipboard::{OsClipboardParserPort, OsClipboardReaderPort};
pub use selection::SelectionPort;
