use std::sync::Arc;

use tracing::{debug, info_span, warn};

use sc_core::clipboard::{
    ClipboardHandlerRegistry, ClipboardPayload, CopyMode, CopySelection, HandlerKind, Rect,
};
use sc_core::zone::merge_overlapping_zones;

/// Result of a copy: the payload table plus the figure bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct CopiedContent {
    pub payload: ClipboardPayload,
    /// Union of the copied figures' placements, used to offset a figure paste.
    pub copy_rect: Option<Rect>,
}

/// Asks every registered handler for its share of a selection.
///
/// Cell selections go through the cell handlers, figure selections through
/// the figure handlers. Handlers with nothing to copy are left out of the
/// payload table.
pub struct CopySelectionUseCase {
    registry: Arc<ClipboardHandlerRegistry>,
}

impl CopySelectionUseCase {
    pub fn new(registry: Arc<ClipboardHandlerRegistry>) -> Self {
        Self { registry }
    }

    pub fn execute(
        &self,
        selection: &CopySelection,
        is_cut: bool,
        mode: CopyMode,
    ) -> CopiedContent {
        let span = info_span!(
            "usecase.copy_selection.execute",
            sheet_id = %selection.sheet_id,
            zones = selection.zones.len(),
            figures = selection.figure_ids.len(),
        );
        let _enter = span.enter();

        let kind = if selection.is_figure_selection() {
            HandlerKind::Figure
        } else {
            HandlerKind::Cell
        };

        let selection = CopySelection {
            zones: merge_overlapping_zones(&selection.zones),
            ..selection.clone()
        };

        let mut payload =
            ClipboardPayload::for_sheet(selection.sheet_id.clone(), selection.zones.clone());
        if kind == HandlerKind::Figure {
            payload.figure_id = selection.figure_ids.first().cloned();
        }

        let mut copy_rect: Option<Rect> = None;
        for named in self.registry.instantiate(kind) {
            match named.handler.copy(&selection, is_cut, mode) {
                Ok(Some(content)) => payload.insert(named.name.clone(), content),
                Ok(None) => {
                    debug!(handler = %named.name, "Handler has nothing to copy");
                    continue;
                }
                Err(err) => {
                    warn!(handler = %named.name, error = %err, "Skipping clipboard handler copy");
                    continue;
                }
            }

            if let Some(rect) = named.handler.copy_rect(&selection) {
                copy_rect = Some(match copy_rect {
                    Some(current) => current.union(&rect),
                    None => rect,
                });
            }
        }

        CopiedContent { payload, copy_rect }
    }
}
