use serde::{de::DeserializeOwned, Serialize};

use crate::clipboard::{ClipboardOptions, CopySelection, PasteTarget, Rect};
use crate::ids::{FigureId, SheetId};
use crate::zone::Zone;

/// Strategy for one kind of floating object (chart, image).
pub trait FigureClipboardHandler: Send + Sync {
    type Content: Serialize + DeserializeOwned;

    /// Reads the selected figures. `None` means nothing to copy.
    fn copy(&self, selection: &CopySelection) -> Option<Self::Content>;

    /// Current placement of a figure, `None` if it no longer exists.
    fn placement(&self, sheet_id: &SheetId, figure_id: &FigureId) -> Option<Rect>;

    fn get_paste_target(
        &self,
        sheet_id: &SheetId,
        target: &[Zone],
        content: &Self::Content,
        options: &ClipboardOptions,
    ) -> PasteTarget;

    fn paste(&self, target: &PasteTarget, content: &Self::Content, options: &ClipboardOptions);

    /// Bounding rectangle of every selected figure that still exists.
    fn copy_rect(&self, selection: &CopySelection) -> Option<Rect> {
        selection
            .figure_ids
            .iter()
            .filter_map(|id| self.placement(&selection.sheet_id, id))
            .reduce(|acc, rect| acc.union(&rect))
    }
}
