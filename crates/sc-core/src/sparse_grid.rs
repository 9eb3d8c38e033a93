//! Sparse per-cell storage.

use indexmap::IndexMap;

/// Mapping from `(col, row)` to a value; a missing entry is an empty cell.
///
/// `width`/`height` describe the area the grid was built for. They are
/// informational and not enforced on write.
///
/// Traversal follows insertion order: columns in the order they were first
/// written, then rows within each column. It is not sorted by coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseGrid<T> {
    width: u32,
    height: u32,
    cols: IndexMap<u32, IndexMap<u32, T>>,
}

impl<T> Default for SparseGrid<T> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<T> SparseGrid<T> {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cols: IndexMap::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Stores `value` at `(col, row)`; `None` clears the cell.
    pub fn set(&mut self, col: u32, row: u32, value: Option<T>) {
        match value {
            Some(value) => {
                self.cols.entry(col).or_default().insert(row, value);
            }
            None => {
                self.delete(col, row);
            }
        }
    }

    pub fn get(&self, col: u32, row: u32) -> Option<&T> {
        self.cols.get(&col)?.get(&row)
    }

    pub fn get_mut(&mut self, col: u32, row: u32) -> Option<&mut T> {
        self.cols.get_mut(&col)?.get_mut(&row)
    }

    /// Removes the value at `(col, row)`, dropping the column bucket once it
    /// is empty.
    pub fn delete(&mut self, col: u32, row: u32) -> Option<T> {
        let column = self.cols.get_mut(&col)?;
        let removed = column.shift_remove(&row);
        if column.is_empty() {
            self.cols.shift_remove(&col);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.cols.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cols.is_empty()
    }

    /// `((col, row), value)` for every stored cell.
    pub fn entries(&self) -> impl Iterator<Item = ((u32, u32), &T)> + '_ {
        self.cols.iter().flat_map(|(&col, rows)| {
            rows.iter().map(move |(&row, value)| ((col, row), value))
        })
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.cols.values().flat_map(IndexMap::values)
    }

    /// Dense `[row][col]` copy sized by the highest used row and column,
    /// not by the declared width and height.
    pub fn to_matrix(&self) -> Vec<Vec<Option<T>>>
    where
        T: Clone,
    {
        let Some(max_col) = self.cols.keys().copied().max() else {
            return Vec::new();
        };
        let max_row = self
            .cols
            .values()
            .flat_map(IndexMap::keys)
            .copied()
            .max()
            .unwrap_or(0);

        let mut matrix = vec![vec![None; max_col as usize + 1]; max_row as usize + 1];
        for ((col, row), value) in self.entries() {
            matrix[row as usize][col as usize] = Some(value.clone());
        }
        matrix
    }
}
