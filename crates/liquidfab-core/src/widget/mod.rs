//! The floating action button and its cells.
//!
//! The button owns its items and forwards all motion to the
//! [`LiquidBase`](crate::animation::LiquidBase) driver. Cells come either
//! from a [`DataSource`] or from items added with
//! [`LiquidFloatingActionButton::add_cell`].

mod button;
mod cell;

pub use button::LiquidFloatingActionButton;
pub use cell::{Cell, CellContent};

/// Supplies the cells shown when the button opens.
pub trait DataSource {
    fn number_of_cells(&self) -> usize;

    fn cell_for_index(&self, index: usize) -> Cell;
}

/// Receives cell selections.
pub trait Delegate {
    fn did_select_item(&mut self, index: usize);
}
