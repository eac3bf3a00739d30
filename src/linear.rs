use egui::{vec2, Id, Pos2, Rect, Sense, Ui, Vec2};

use crate::session::{DragSession, SlotLayout, SwapResponse};
use crate::slot::{finish_gesture, slot_ui, Gesture, SlotStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}

/// `len` boxes of `box_size` back to back along `axis`, starting at the origin.
///
/// Slot `i` spans `[i * box_size, (i + 1) * box_size]` along the axis and `[0, box_size]` across
/// it. Everything is plain arithmetic, there is nothing to measure.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LinearLayout {
    pub axis: Axis,
    pub len: usize,
    pub box_size: f32,
}

impl LinearLayout {
    fn along(&self, distance: f32) -> Vec2 {
        match self.axis {
            Axis::Horizontal => vec2(distance, 0.0),
            Axis::Vertical => vec2(0.0, distance),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.along(self.len as f32 * self.box_size) + self.along_cross(self.box_size)
    }

    fn along_cross(&self, distance: f32) -> Vec2 {
        match self.axis {
            Axis::Horizontal => vec2(0.0, distance),
            Axis::Vertical => vec2(distance, 0.0),
        }
    }
}

impl SlotLayout for LinearLayout {
    fn slot_count(&self) -> usize {
        self.len
    }

    fn slot_rect(&self, index: usize) -> Option<Rect> {
        if index >= self.len {
            return None;
        }
        let min = Pos2::ZERO + self.along(index as f32 * self.box_size);
        Some(Rect::from_min_size(min, Vec2::splat(self.box_size)))
    }
}

/// The drag state shared by [`crate::RowSwapper`] and [`crate::ColumnSwapper`].
#[derive(Debug, Clone)]
pub(crate) struct LinearSwapper {
    id: Id,
    axis: Axis,
    box_size: f32,
    pub style: SlotStyle,
    session: DragSession,
}

impl LinearSwapper {
    pub fn new(id: Id, axis: Axis, box_size: f32) -> Self {
        assert!(box_size > 0.0, "box_size must be positive, got {box_size}");
        Self {
            id,
            axis,
            box_size,
            style: SlotStyle {
                drag_scale: 1.1,
                padding: 2.0,
            },
            session: DragSession::default(),
        }
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn ui(
        &mut self,
        ui: &mut Ui,
        list_size: usize,
        mut content: impl FnMut(&mut Ui, usize),
    ) -> SwapResponse {
        let layout = LinearLayout {
            axis: self.axis,
            len: list_size,
            box_size: self.box_size,
        };
        let (strip, _) = ui.allocate_exact_size(layout.size(), Sense::hover());
        let origin = strip.min.to_vec2();

        let mut gesture = Gesture::default();
        for index in 0..list_size {
            let Some(rect) = layout.slot_rect(index) else {
                continue;
            };
            slot_ui(
                ui,
                self.id,
                index,
                rect.translate(origin),
                &self.style,
                &mut self.session,
                &mut gesture,
                &mut content,
            );
        }

        // offsets are translation invariant, so the local layout is enough to hit-test
        finish_gesture(ui, &mut self.session, gesture, list_size, &layout)
    }
}
