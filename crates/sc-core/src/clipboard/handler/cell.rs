use serde::{de::DeserializeOwned, Serialize};

use crate::clipboard::{ClipboardOptions, CopyMode, CopySelection, PasteTarget};
use crate::ids::SheetId;
use crate::zone::{get_paste_zones, merge_overlapping_zones, CellShaped, Zone};

/// Strategy for one kind of cell content (values, formats, borders...).
///
/// Implementors only describe how to read a block and how to write it at a
/// single anchor cell; tiling and stamping over the paste target are
/// provided.
pub trait CellClipboardHandler: Send + Sync {
    type Content: CellShaped + Serialize + DeserializeOwned;

    /// Reads the selection. `None` means this handler has nothing to copy.
    fn copy(&self, selection: &CopySelection, is_cut: bool, mode: CopyMode)
        -> Option<Self::Content>;

    /// Writes `content` with its top-left cell at `(col, row)`.
    fn paste_zone(
        &self,
        sheet_id: &SheetId,
        col: u32,
        row: u32,
        content: &Self::Content,
        options: &ClipboardOptions,
    );

    /// Zones this handler writes when pasting `content` into `target`.
    fn get_paste_target(
        &self,
        sheet_id: &SheetId,
        target: &[Zone],
        content: &Self::Content,
        _options: &ClipboardOptions,
    ) -> PasteTarget {
        let zones = if target.len() == 1 {
            get_paste_zones(target, content)
        } else {
            merge_overlapping_zones(target)
        };
        PasteTarget::new(sheet_id.clone(), zones)
    }

    fn paste(&self, target: &PasteTarget, content: &Self::Content, options: &ClipboardOptions) {
        self.paste_from_copy(&target.sheet_id, &target.zones, content, options);
    }

    /// A single target zone is filled by repeating the copied block over it.
    /// Several target zones are merged and every cell of the result gets its
    /// own copy of the block.
    fn paste_from_copy(
        &self,
        sheet_id: &SheetId,
        target: &[Zone],
        content: &Self::Content,
        options: &ClipboardOptions,
    ) {
        if target.len() == 1 {
            for zone in get_paste_zones(target, content) {
                self.paste_zone(sheet_id, zone.left, zone.top, content, options);
            }
            return;
        }

        for zone in merge_overlapping_zones(target) {
            for position in zone.positions() {
                self.paste_zone(sheet_id, position.col, position.row, content, options);
            }
        }
    }
}
