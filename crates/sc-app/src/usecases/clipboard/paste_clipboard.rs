use std::sync::Arc;

use tracing::{debug, info_span};

use sc_core::clipboard::{ClipboardHandlerRegistry, ClipboardOptions, ClipboardPayload};
use sc_core::ids::SheetId;
use sc_core::ports::SelectionPort;
use sc_core::zone::Zone;

use super::paste_orchestrator::{
    apply_clipboard_handlers_paste, get_paste_target_from_handlers, select_pasted_zone,
    PasteTargetResolution,
};

/// Pastes a payload table onto a sheet.
///
/// # Behavior
/// - 1. Instantiate fresh cell then figure handlers from the registry
/// - 2. Resolve where every involved handler writes
/// - 3. Let each handler paste its own payload entry
/// - 4. When `select_target` is set, select the pasted area
pub struct PasteClipboardUseCase {
    registry: Arc<ClipboardHandlerRegistry>,
}

impl PasteClipboardUseCase {
    pub fn new(registry: Arc<ClipboardHandlerRegistry>) -> Self {
        Self { registry }
    }

    /// Returns the resolution so the caller can enqueue follow-up commands.
    ///
    /// The new selection is anchored on the first target zone, which always
    /// lies inside the pasted area.
    pub fn execute(
        &self,
        sheet_id: &SheetId,
        target: &[Zone],
        payload: &ClipboardPayload,
        options: &ClipboardOptions,
        selection: &mut dyn SelectionPort,
    ) -> PasteTargetResolution {
        let span = info_span!(
            "usecase.paste_clipboard.execute",
            sheet_id = %sheet_id,
            targets = target.len(),
            cut = options.is_cut_operation,
        );
        let _enter = span.enter();

        let handlers = self.registry.instantiate_all();
        let resolution =
            get_paste_target_from_handlers(sheet_id, target, payload, &handlers, options);

        let applied = apply_clipboard_handlers_paste(&handlers, payload, &resolution.target, options);
        debug!(handlers = ?applied, zone = ?resolution.zone, "Clipboard handlers pasted");

        if options.select_target {
            select_pasted_zone(selection, target, &resolution.selected_zones);
        }

        resolution
    }
}
