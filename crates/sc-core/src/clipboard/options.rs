use serde::{Deserialize, Serialize};

/// How a copy is going to be consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CopyMode {
    /// Regular copy/cut followed by a paste.
    #[default]
    CopyPaste,
    /// Content is being moved by a row/column insertion or deletion.
    ShiftCells,
}

/// Restricts what a paste writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PasteOption {
    OnlyFormat,
    AsValue,
}

/// Per-operation flags. Built for one copy or paste and never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipboardOptions {
    pub is_cut_operation: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paste_option: Option<PasteOption>,
    #[serde(default)]
    pub select_target: bool,
}

impl ClipboardOptions {
    pub fn cut() -> Self {
        Self {
            is_cut_operation: true,
            ..Self::default()
        }
    }

    pub fn with_paste_option(mut self, option: PasteOption) -> Self {
        self.paste_option = Some(option);
        self
    }

    pub fn selecting_target(mut self) -> Self {
        self.select_target = true;
        self
    }
}
