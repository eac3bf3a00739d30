use egui::{Id, Ui};
use std::hash::Hash;

use crate::linear::{Axis, LinearSwapper};
use crate::session::{DragSession, SwapResponse};

/// Same as [`crate::RowSwapper`], with the slots stacked top to bottom.
#[derive(Debug, Clone)]
pub struct ColumnSwapper {
    inner: LinearSwapper,
}

impl ColumnSwapper {
    pub fn new(id_source: impl Hash, box_size: f32) -> Self {
        Self {
            inner: LinearSwapper::new(Id::new(id_source), Axis::Vertical, box_size),
        }
    }

    pub fn with_drag_scale(mut self, drag_scale: f32) -> Self {
        self.inner.style.drag_scale = drag_scale;
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.inner.style.padding = padding;
        self
    }

    pub fn session(&self) -> &DragSession {
        self.inner.session()
    }

    pub fn ui(
        &mut self,
        ui: &mut Ui,
        list_size: usize,
        content: impl FnMut(&mut Ui, usize),
    ) -> SwapResponse {
        ui.vertical(|ui| self.inner.ui(ui, list_size, content))
            .inner
    }
}
