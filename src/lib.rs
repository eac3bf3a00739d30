//! Drag to swap for egui: square slots in a row, a column or a grid, where dropping one slot onto
//! another reports a [`Swap`] for the host to apply.

pub use column::ColumnSwapper;
pub use geometry::SlotGeometry;
pub use grid::GridSwapper;
pub use row::RowSwapper;
pub use session::{transform_for, DragSession, SlotLayout, SlotTransform, Swap, SwapResponse};

mod column;
mod geometry;
mod grid;
mod linear;
mod row;
mod session;
mod slot;
pub mod utils;
