use egui::{vec2, Id, Pos2, Rect, Sense, Ui, Vec2};
use std::hash::Hash;

use crate::geometry::SlotGeometry;
use crate::session::{DragSession, SwapResponse};
use crate::slot::{finish_gesture, slot_ui, Gesture, SlotStyle};

/// [GridSwapper] lays out `list_size` square slots row by row, `columns` per row, centered in the
/// available width, and lets the user drag one slot onto another to swap them.
///
/// Where a slot ends up on screen depends on the surrounding layout, so the rect every slot was
/// drawn at is measured each frame and drops are tested against those rects. A drop hits a slot
/// when the dragged slot's center lies inside its rect, edges included (see
/// [`crate::SlotLayout::slot_at`]).
#[derive(Debug, Clone)]
pub struct GridSwapper {
    id: Id,
    columns: usize,
    box_size: f32,
    spacing: f32,
    style: SlotStyle,
    session: DragSession,
    geometry: SlotGeometry,
}

impl GridSwapper {
    /// `columns` must be at least 1 and `box_size` positive.
    pub fn new(id_source: impl Hash, columns: usize, box_size: f32) -> Self {
        assert!(columns > 0, "a grid needs at least one column");
        assert!(box_size > 0.0, "box_size must be positive, got {box_size}");
        Self {
            id: Id::new(id_source),
            columns,
            box_size,
            spacing: 8.0,
            style: SlotStyle {
                drag_scale: 1.05,
                padding: 4.0,
            },
            session: DragSession::default(),
            geometry: SlotGeometry::default(),
        }
    }

    /// Scale of the dragged slot, 1.05 by default.
    pub fn with_drag_scale(mut self, drag_scale: f32) -> Self {
        self.style.drag_scale = drag_scale;
        self
    }

    /// Inset between a slot's edge and its content, 4.0 by default.
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.style.padding = padding;
        self
    }

    /// Gap between neighbouring slots, 8.0 by default.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing.max(0.0);
        self
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// Rects measured during the last frame.
    pub fn geometry(&self) -> &SlotGeometry {
        &self.geometry
    }

    fn rows(&self, list_size: usize) -> usize {
        (list_size + self.columns - 1) / self.columns
    }

    fn size(&self, list_size: usize) -> Vec2 {
        let pitch = self.box_size + self.spacing;
        let rows = self.rows(list_size);
        let width = self.columns as f32 * pitch - self.spacing;
        let height = if rows == 0 {
            0.0
        } else {
            rows as f32 * pitch - self.spacing
        };
        vec2(width, height)
    }

    /// Resting rect of the slot at `index` for a grid whose top left corner is `origin`.
    fn cell_rect(&self, origin: Pos2, index: usize) -> Rect {
        let pitch = self.box_size + self.spacing;
        let (row, column) = (index / self.columns, index % self.columns);
        Rect::from_min_size(
            origin + vec2(column as f32 * pitch, row as f32 * pitch),
            Vec2::splat(self.box_size),
        )
    }

    /// Draws the grid. `content` is called once per index with a ui covering that slot.
    pub fn ui(
        &mut self,
        ui: &mut Ui,
        list_size: usize,
        mut content: impl FnMut(&mut Ui, usize),
    ) -> SwapResponse {
        // follow the host's list, items added since the last frame must be hit-testable too
        self.geometry.resize(list_size);

        ui.vertical_centered(|ui| {
            let (grid, _) = ui.allocate_exact_size(self.size(list_size), Sense::hover());

            let mut gesture = Gesture::default();
            for index in 0..list_size {
                let rect = self.cell_rect(grid.min, index);
                self.geometry.record(index, rect);
                slot_ui(
                    ui,
                    self.id,
                    index,
                    rect,
                    &self.style,
                    &mut self.session,
                    &mut gesture,
                    &mut content,
                );
            }

            finish_gesture(ui, &mut self.session, gesture, list_size, &self.geometry)
        })
        .inner
    }
}
