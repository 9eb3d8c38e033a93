use serde::{Deserialize, Serialize};

use crate::ids::{FigureId, SheetId};
use crate::zone::Zone;

/// What a copy reads: cell zones of a sheet, or figures placed on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopySelection {
    pub sheet_id: SheetId,
    #[serde(default)]
    pub zones: Vec<Zone>,
    #[serde(default)]
    pub figure_ids: Vec<FigureId>,
}

impl CopySelection {
    pub fn cells(sheet_id: SheetId, zones: Vec<Zone>) -> Self {
        Self {
            sheet_id,
            zones,
            figure_ids: Vec::new(),
        }
    }

    pub fn figures(sheet_id: SheetId, figure_ids: Vec<FigureId>) -> Self {
        Self {
            sheet_id,
            zones: Vec::new(),
            figure_ids,
        }
    }

    pub fn is_figure_selection(&self) -> bool {
        !self.figure_ids.is_empty()
    }
}
