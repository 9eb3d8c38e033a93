//! # sc-core
//!
//! Core domain models for the sheet clipboard engine.
//!
//! This crate contains pure logic without any infrastructure dependencies:
//! zone algebra, interval sets, sparse grids, the clipboard payload model and
//! the handler abstraction driven by the paste orchestrator in `sc-app`.

// Public module exports
pub mod clipboard;
pub mod config;
pub mod ids;
pub mod ports;
pub mod sequence_set;
pub mod settings;
pub mod sparse_grid;
pub mod zone;

// Re-export commonly used types at the crate root
pub use clipboard::{
    ClipboardHandler, ClipboardHandlerRegistry, ClipboardOptions, ClipboardPayload, CopyMode,
    CopySelection, PasteOption, PasteTarget,
};
pub use config::AppConfig;
pub use ids::{FigureId, SheetId};
pub use sequence_set::SequenceSet;
pub use settings::ClipboardSettings;
pub use sparse_grid::SparseGrid;
pub use zone::{CellPosition, Zone};
