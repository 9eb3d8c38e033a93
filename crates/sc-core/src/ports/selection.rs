use crate::zone::{CellPosition, Zone};

/// The grid selection a paste updates once content has been written.
pub trait SelectionPort {
    /// Drops the current selection and returns to the default one.
    fn reset_default(&mut self);

    /// Selects `zone`, with the active cell at `anchor`.
    fn select_zone(&mut self, anchor: CellPosition, zone: Zone);
}

#[cfg(test)]
mockall::mock! {
    pub Selection {}

    impl SelectionPort for Selection {
        fn reset_default(&mut self);
        fn select_zone(&mut self, anchor: CellPosition, zone: Zone);
    }
}
