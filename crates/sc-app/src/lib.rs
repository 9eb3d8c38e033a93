//! Sheet clipboard application layer
//!
//! This crate contains the copy and paste use cases that drive the
//! registered clipboard handlers over the `sc-core` domain model.

pub mod usecases;

pub use usecases::clipboard::{
    apply_clipboard_handlers_paste, get_paste_target_from_handlers, resolve_os_clipboard,
    select_pasted_zone, CopySelectionUseCase, CopiedContent, OsPasteSource,
    PasteClipboardUseCase, PasteTargetResolution, ReadOsClipboardUseCase,
};
