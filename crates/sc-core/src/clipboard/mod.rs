//! Clipboard domain models.
mod mime;
mod options;
mod os_content;
mod payload;
mod rect;
mod selection;
mod target;

pub mod handler;

pub use handler::{
    CellClipboardHandler, ClipboardHandler, ClipboardHandlerRegistry, FigureClipboardHandler,
    HandlerFactory, HandlerKind, NamedHandler, PayloadError, Registry, RegistryError,
};
pub use mime::MimeType;
pub use options::{ClipboardOptions, CopyMode, PasteOption};
pub use os_content::{ImageBlob, OsClipboardContent, OsClipboardData, ParsedClipboardContent};
pub use payload::{ClipboardPayload, RESERVED_PAYLOAD_KEYS};
pub use rect::Rect;
pub use selection::CopySelection;
pub use target::PasteTarget;
