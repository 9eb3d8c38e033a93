use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ids::{FigureId, SheetId};
use crate::zone::Zone;

/// Where a paste lands, as handed to the command layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasteTarget {
    pub sheet_id: SheetId,
    pub zones: Vec<Zone>,
    /// Copied figure -> figure created by the paste.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub figure_ids: BTreeMap<FigureId, FigureId>,
}

impl PasteTarget {
    pub fn new(sheet_id: SheetId, zones: Vec<Zone>) -> Self {
        Self {
            sheet_id,
            zones,
            figure_ids: BTreeMap::new(),
        }
    }
}
