//! Zones: axis-aligned inclusive rectangles over the column/row grid.
//!
//! A [`Zone`] is the unit every copy and paste operation is expressed in.
//! The free functions of this module combine, intersect and tile zones;
//! they never fail, disjoint inputs are reported as `None`.

mod a1;
mod algebra;
mod shape;

pub use a1::ZoneParseError;
pub use algebra::{
    get_paste_zones, intersection, merge_overlapping_zones, overlap, split_zone_for_paste, touch,
    union, union_all,
};
pub use shape::CellShaped;

use serde::{Deserialize, Serialize};

/// Inclusive rectangle of columns (`left..=right`) and rows (`top..=bottom`).
///
/// Invariant: `left <= right` and `top <= bottom`. Deserialization goes
/// through [`Zone::new`], so reversed bounds from a payload are normalised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ZoneBounds")]
pub struct Zone {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

#[derive(Deserialize)]
struct ZoneBounds {
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
}

impl From<ZoneBounds> for Zone {
    fn from(bounds: ZoneBounds) -> Self {
        Zone::new(bounds.left, bounds.top, bounds.right, bounds.bottom)
    }
}

/// A single cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPosition {
    pub col: u32,
    pub row: u32,
}

impl Zone {
    /// Builds a zone from two corners, swapping bounds when given in reverse.
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left: left.min(right),
            top: top.min(bottom),
            right: left.max(right),
            bottom: top.max(bottom),
        }
    }

    pub fn cell(col: u32, row: u32) -> Self {
        Self::new(col, row, col, row)
    }

    /// Zone of `width x height` cells whose top-left corner is `(col, row)`.
    ///
    /// Both dimensions must be at least 1. The far edges stop at the last
    /// addressable column and row.
    pub fn with_size(col: u32, row: u32, width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0, "zone dimensions must be positive");
        Self::new(
            col,
            row,
            col.saturating_add(width.saturating_sub(1)),
            row.saturating_add(height.saturating_sub(1)),
        )
    }

    /// Saturates at `u32::MAX` for a zone spanning every column.
    pub fn width(&self) -> u32 {
        (self.right - self.left).saturating_add(1)
    }

    pub fn height(&self) -> u32 {
        (self.bottom - self.top).saturating_add(1)
    }

    pub fn cell_count(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    pub fn top_left(&self) -> CellPosition {
        CellPosition {
            col: self.left,
            row: self.top,
        }
    }

    pub fn contains(&self, col: u32, row: u32) -> bool {
        self.left <= col && col <= self.right && self.top <= row && row <= self.bottom
    }

    pub fn contains_zone(&self, other: &Zone) -> bool {
        self.left <= other.left
            && other.right <= self.right
            && self.top <= other.top
            && other.bottom <= self.bottom
    }

    /// Every cell of the zone, column by column.
    pub fn positions(&self) -> impl Iterator<Item = CellPosition> + '_ {
        (self.left..=self.right)
            .flat_map(move |col| (self.top..=self.bottom).map(move |row| CellPosition { col, row }))
    }
}
