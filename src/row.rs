use egui::{Id, Ui};
use std::hash::Hash;

use crate::linear::{Axis, LinearSwapper};
use crate::session::{DragSession, SwapResponse};

/// [RowSwapper] lays out `list_size` square slots left to right and lets the user drag one slot
/// onto another to swap them.
///
/// The swapper never touches the host's data. It reports the swap and the host applies it before
/// the next frame.
///
/// # Example
/// ```rust
/// use egui_swap::{utils::swap_items, RowSwapper};
///
/// fn tiles_ui(ui: &mut egui::Ui, swapper: &mut RowSwapper, tiles: &mut Vec<String>) {
///     let response = swapper.ui(ui, tiles.len(), |ui, index| {
///         ui.label(tiles[index].as_str());
///     });
///     if let Some(swap) = response.completed() {
///         swap_items(swap.from, swap.to, tiles);
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RowSwapper {
    inner: LinearSwapper,
}

impl RowSwapper {
    /// `box_size` is the side length of every slot and must be positive.
    pub fn new(id_source: impl Hash, box_size: f32) -> Self {
        Self {
            inner: LinearSwapper::new(Id::new(id_source), Axis::Horizontal, box_size),
        }
    }

    /// Scale of the dragged slot, 1.1 by default.
    pub fn with_drag_scale(mut self, drag_scale: f32) -> Self {
        self.inner.style.drag_scale = drag_scale;
        self
    }

    /// Inset between a slot's edge and its content, 2.0 by default.
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.inner.style.padding = padding;
        self
    }

    pub fn session(&self) -> &DragSession {
        self.inner.session()
    }

    /// Draws the row. `content` is called once per index with a ui covering that slot.
    pub fn ui(
        &mut self,
        ui: &mut Ui,
        list_size: usize,
        content: impl FnMut(&mut Ui, usize),
    ) -> SwapResponse {
        ui.horizontal(|ui| self.inner.ui(ui, list_size, content))
            .inner
    }
}
