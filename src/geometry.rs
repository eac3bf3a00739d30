use egui::Rect;

use crate::session::SlotLayout;

/// Last measured rect of every slot, indexed by slot.
///
/// Refreshed on every layout pass, so whatever was drawn last is what a drop is tested against.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SlotGeometry {
    rects: Vec<Option<Rect>>,
}

impl SlotGeometry {
    /// Grows or shrinks the mapping to `len` slots. Slots that appear are unmeasured until the
    /// next [`SlotGeometry::record`], slots that disappear are forgotten.
    pub fn resize(&mut self, len: usize) {
        self.rects.resize(len, None);
    }

    /// Stores the rect `index` was drawn at. Out of range indices are ignored.
    pub fn record(&mut self, index: usize, rect: Rect) {
        if let Some(slot) = self.rects.get_mut(index) {
            *slot = Some(rect);
        }
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

impl SlotLayout for SlotGeometry {
    fn slot_count(&self) -> usize {
        self.rects.len()
    }

    fn slot_rect(&self, index: usize) -> Option<Rect> {
        self.rects.get(index).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn unmeasured_slots_never_match() {
        let mut geometry = SlotGeometry::default();
        geometry.resize(2);
        geometry.record(1, Rect::from_min_size(pos2(10.0, 0.0), vec2(10.0, 10.0)));

        assert_eq!(geometry.slot_rect(0), None);
        assert_eq!(geometry.slot_at(pos2(5.0, 5.0)), None);
        assert_eq!(geometry.slot_at(pos2(15.0, 5.0)), Some(1));
    }

    #[test]
    fn resize_keeps_measured_slots() {
        let mut geometry = SlotGeometry::default();
        geometry.resize(1);
        let first = Rect::from_min_size(pos2(0.0, 0.0), vec2(10.0, 10.0));
        geometry.record(0, first);
        geometry.record(4, first);

        geometry.resize(3);
        assert_eq!(geometry.len(), 3);
        assert_eq!(geometry.slot_rect(0), Some(first));
        assert_eq!(geometry.slot_rect(2), None);

        geometry.resize(0);
        assert!(geometry.is_empty());
    }
}
