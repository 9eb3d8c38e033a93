//! The payload table produced by a copy and consumed by a paste.
//!
//! Each registered handler that had something to copy stores one opaque
//! JSON value under its registry key. The shared fields describe where the
//! copy came from. Handler entries are flattened next to the shared fields,
//! so the serialized form is a single JSON object:
//!
//! ```json
//! { "sheetId": "s1", "zones": [{"left":0,"top":0,"right":1,"bottom":0}], "cell": [[1, 2]] }
//! ```
//!
//! Keys that match no registered handler (for example from a newer peer) are
//! kept but never acted upon. Handler keys must not collide with the shared
//! field names in [`RESERVED_PAYLOAD_KEYS`]; the handler registry refuses them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::ids::{FigureId, SheetId};
use crate::zone::Zone;

/// Serialized names of the shared payload fields.
pub const RESERVED_PAYLOAD_KEYS: [&str; 3] = ["sheetId", "zones", "figureId"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipboardPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<SheetId>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub zones: Vec<Zone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figure_id: Option<FigureId>,

    /// handler name -> handler-specific content
    #[serde(flatten)]
    pub handlers: BTreeMap<String, Value>,
}

impl ClipboardPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_sheet(sheet_id: SheetId, zones: Vec<Zone>) -> Self {
        Self {
            sheet_id: Some(sheet_id),
            zones,
            ..Self::default()
        }
    }

    /// True for keys that would collide with a shared field.
    pub fn is_reserved_key(key: &str) -> bool {
        RESERVED_PAYLOAD_KEYS.contains(&key)
    }

    pub fn insert(&mut self, handler: impl Into<String>, content: Value) {
        self.handlers.insert(handler.into(), content);
    }

    pub fn get(&self, handler: &str) -> Option<&Value> {
        self.handlers.get(handler)
    }

    pub fn contains(&self, handler: &str) -> bool {
        self.handlers.contains_key(handler)
    }

    pub fn handler_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.handlers.keys().map(String::as_str)
    }

    /// True when no handler contributed content.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
