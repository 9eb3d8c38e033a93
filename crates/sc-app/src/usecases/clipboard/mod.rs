pub mod copy_selection;
pub mod paste_clipboard;
pub mod paste_orchestrator;
pub mod read_os_clipboard;
pub mod resolve_os_clipboard;

pub use copy_selection::{CopiedContent, CopySelectionUseCase};
pub use paste_clipboard::PasteClipboardUseCase;
pub use paste_orchestrator::{
    apply_clipboard_handlers_paste, get_paste_target_from_handlers, select_pasted_zone,
    PasteTargetResolution,
};
pub use read_os_clipboard::ReadOsClipboardUseCase;
pub use resolve_os_clipboard::{resolve_os_clipboard, OsPasteSource};
