use egui::{Rect, Vec2};

/// A completed swap: the slot at `from` was dropped onto the slot at `to`.
/// `from` and `to` are always distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swap {
    pub from: usize,
    pub to: usize,
}

/// What happened to a swapper during the last frame.
///
/// `CurrentDrag` carries a snapshot of the session while a slot is being dragged and can be used
/// to update some state while the drag is in progress. `Completed` is returned once, on the frame
/// the dragged slot was released over another slot. Apply it to the backing collection, e.g. with
/// [`crate::utils::swap_items`].
#[derive(Debug, Clone, PartialEq)]
pub enum SwapResponse {
    NoDrag,
    CurrentDrag(DragSession),
    Completed(Swap),
}

impl SwapResponse {
    pub fn completed(&self) -> Option<Swap> {
        match self {
            SwapResponse::Completed(swap) => Some(*swap),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, SwapResponse::CurrentDrag(_))
    }
}

/// Anything the dragged slot can be dropped onto: a fixed number of slots, each with a rect in a
/// shared coordinate space.
pub trait SlotLayout {
    fn slot_count(&self) -> usize;

    /// Rect of the slot at `index`, `None` if it is out of range or was never measured.
    fn slot_rect(&self, index: usize) -> Option<Rect>;

    /// First slot in scan order whose rect contains `point`.
    ///
    /// Bounds are inclusive on both ends ([`Rect::contains`]), including the right and bottom
    /// edges. A point on an edge shared by two slots resolves to the lower index, and a point
    /// exactly on the outer right or bottom edge of a slot still hits it.
    fn slot_at(&self, point: egui::Pos2) -> Option<usize> {
        (0..self.slot_count()).find(|&idx| {
            self.slot_rect(idx)
                .map_or(false, |rect| rect.contains(point))
        })
    }
}

/// Transient state of one drag gesture.
///
/// Idle when `dragged` is `None`. [`DragSession::begin`] enters the dragging state and
/// [`DragSession::end`] or [`DragSession::cancel`] always return to idle, so a stray gesture can't
/// leave a slot stuck in its lifted state.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DragSession {
    dragged: Option<usize>,
    /// Pointer movement accumulated since the drag began
    offset: Vec2,
}

impl DragSession {
    pub fn dragged(&self) -> Option<usize> {
        self.dragged
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn is_active(&self) -> bool {
        self.dragged.is_some()
    }

    pub fn is_dragging(&self, index: usize) -> bool {
        self.dragged == Some(index)
    }

    pub fn begin(&mut self, index: usize) {
        if let Some(previous) = self.dragged {
            tracing::warn!(previous, index, "drag began over an active session, discarding it");
        }
        tracing::debug!(index, "drag began");
        self.dragged = Some(index);
        self.offset = Vec2::ZERO;
    }

    /// Accumulates pointer movement. Hit-testing waits for [`DragSession::end`].
    pub fn update(&mut self, delta: Vec2) {
        if self.dragged.is_none() {
            return;
        }
        self.offset += delta;
        tracing::trace!(offset = ?self.offset, "drag moved");
    }

    /// Finishes the gesture, resolving the drop target against `layout`. The session is idle
    /// afterwards whatever the outcome.
    pub fn end(&mut self, layout: &impl SlotLayout) -> Option<Swap> {
        let session = std::mem::take(self);
        let from = session.dragged?;

        let target = layout
            .slot_rect(from)
            .map(|rect| rect.center() + session.offset)
            .and_then(|center| layout.slot_at(center));

        match target {
            Some(to) if to != from => {
                tracing::debug!(from, to, "swap");
                Some(Swap { from, to })
            }
            _ => {
                tracing::debug!(index = from, "drag ended without a target");
                None
            }
        }
    }

    /// Drops the gesture without looking for a target.
    pub fn cancel(&mut self) {
        if let Some(index) = self.dragged.take() {
            tracing::debug!(index, "drag cancelled");
        }
        self.offset = Vec2::ZERO;
    }

    pub fn response(&self) -> SwapResponse {
        if self.is_active() {
            SwapResponse::CurrentDrag(self.clone())
        } else {
            SwapResponse::NoDrag
        }
    }
}

/// Visual transform of a single slot for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotTransform {
    pub offset: Vec2,
    pub scale: f32,
    /// Drawn above its siblings
    pub elevated: bool,
}

impl SlotTransform {
    pub const IDENTITY: Self = Self {
        offset: Vec2::ZERO,
        scale: 1.0,
        elevated: false,
    };

    /// Where the slot ends up when its resting rect is `rect`.
    pub fn apply(&self, rect: Rect) -> Rect {
        Rect::from_center_size(rect.center() + self.offset, rect.size() * self.scale)
    }
}

/// Only the dragged slot is moved, scaled and lifted. Every other slot keeps its resting place.
pub fn transform_for(index: usize, session: &DragSession, drag_scale: f32) -> SlotTransform {
    if session.is_dragging(index) {
        SlotTransform {
            offset: session.offset,
            scale: drag_scale,
            elevated: true,
        }
    } else {
        SlotTransform::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    /// Three unit-ish slots next to each other, 10 wide.
    struct Strip;

    impl SlotLayout for Strip {
        fn slot_count(&self) -> usize {
            3
        }

        fn slot_rect(&self, index: usize) -> Option<Rect> {
            (index < 3).then(|| Rect::from_min_size(pos2(index as f32 * 10.0, 0.0), vec2(10.0, 10.0)))
        }
    }

    #[test]
    fn dropping_on_other_slot_swaps() {
        let mut session = DragSession::default();
        session.begin(0);
        session.update(vec2(12.0, 0.0));
        session.update(vec2(8.0, 1.0));

        assert_eq!(session.end(&Strip), Some(Swap { from: 0, to: 2 }));
        assert_eq!(session, DragSession::default());
    }

    #[test]
    fn dropping_in_place_does_nothing() {
        let mut session = DragSession::default();
        session.begin(1);
        session.update(vec2(3.0, -2.0));

        assert_eq!(session.end(&Strip), None);
        assert!(!session.is_active());
    }

    #[test]
    fn dropping_outside_does_nothing() {
        let mut session = DragSession::default();
        session.begin(1);
        session.update(vec2(500.0, 500.0));

        assert_eq!(session.end(&Strip), None);
        assert_eq!(session.offset(), Vec2::ZERO);
    }

    #[test]
    fn shared_edge_goes_to_lower_index() {
        let mut session = DragSession::default();
        session.begin(2);
        // center of slot 2 is x=25, landing exactly on x=10
        session.update(vec2(-15.0, 0.0));

        assert_eq!(session.end(&Strip), Some(Swap { from: 2, to: 0 }));
    }

    #[test]
    fn end_without_begin_is_noop() {
        let mut session = DragSession::default();
        session.update(vec2(10.0, 0.0));

        assert_eq!(session.offset(), Vec2::ZERO);
        assert_eq!(session.end(&Strip), None);
    }

    #[test]
    fn cancel_resets_like_fresh_session() {
        let mut session = DragSession::default();
        session.begin(0);
        session.update(vec2(10.0, 0.0));
        session.cancel();
        assert_eq!(session, DragSession::default());

        session.begin(1);
        session.update(vec2(10.0, 0.0));
        assert_eq!(session.offset(), vec2(10.0, 0.0));
        assert_eq!(session.end(&Strip), Some(Swap { from: 1, to: 2 }));
    }

    #[test]
    fn begin_over_active_session_starts_over() {
        let mut session = DragSession::default();
        session.begin(0);
        session.update(vec2(7.0, 0.0));
        session.begin(2);

        assert_eq!(session.dragged(), Some(2));
        assert_eq!(session.offset(), Vec2::ZERO);
    }

    #[test]
    fn only_dragged_slot_is_transformed() {
        let mut session = DragSession::default();
        assert_eq!(transform_for(0, &session, 1.1), SlotTransform::IDENTITY);

        session.begin(1);
        session.update(vec2(4.0, 2.0));
        assert_eq!(transform_for(0, &session, 1.1), SlotTransform::IDENTITY);

        let lifted = transform_for(1, &session, 1.1);
        assert!(lifted.elevated);
        assert_eq!(lifted.offset, vec2(4.0, 2.0));

        let rect = lifted.apply(Rect::from_min_size(pos2(0.0, 0.0), vec2(10.0, 10.0)));
        assert_eq!(rect.center(), pos2(9.0, 7.0));
        assert!((rect.width() - 11.0).abs() < 1e-4);
    }

    #[test]
    fn response_reflects_session() {
        let mut session = DragSession::default();
        assert_eq!(session.response(), SwapResponse::NoDrag);

        session.begin(2);
        assert!(session.response().is_dragging());
        assert_eq!(session.response().completed(), None);
        assert_eq!(
            SwapResponse::Completed(Swap { from: 2, to: 0 }).completed(),
            Some(Swap { from: 2, to: 0 })
        );
    }
}
