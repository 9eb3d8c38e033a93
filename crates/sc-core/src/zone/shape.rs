/// Copied content that occupies a rectangular block of cells.
///
/// The block size drives tiling: a paste target is filled with as many
/// `width x height` copies of the content as fit.
pub trait CellShaped {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
}

/// Rows of cells; the first row defines the width.
impl<T> CellShaped for [Vec<T>] {
    fn width(&self) -> u32 {
        self.first().map_or(0, |row| row.len() as u32)
    }

    fn height(&self) -> u32 {
        self.len() as u32
    }
}

impl<T> CellShaped for Vec<Vec<T>> {
    fn width(&self) -> u32 {
        self.as_slice().width()
    }

    fn height(&self) -> u32 {
        self.as_slice().height()
    }
}

impl<S: CellShaped + ?Sized> CellShaped for &S {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }
}
