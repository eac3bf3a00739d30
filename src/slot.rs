use egui::{self, CursorIcon, Direction, Id, Key, Layout, Order, Rect, Sense, Ui};
use epaint::{RectShape, Shape};

use crate::session::{transform_for, DragSession, SlotLayout, SwapResponse};

/// Visual knobs shared by all swappers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SlotStyle {
    /// Scale applied to the slot while it is dragged
    pub drag_scale: f32,
    /// Inset between a slot's edge and its content
    pub padding: f32,
}

/// What the slots reported about the active gesture during one frame.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Gesture {
    held: bool,
    released: bool,
}

/// Draws one slot at its resting `rect` and feeds its pointer interaction into `session`.
///
/// Resting slots are drawn inline. The dragged slot leaves a disabled placeholder behind and is
/// drawn again, moved and scaled, on a foreground layer so it ends up above its siblings.
#[allow(clippy::too_many_arguments)]
pub(crate) fn slot_ui(
    ui: &mut Ui,
    id: Id,
    index: usize,
    rect: Rect,
    style: &SlotStyle,
    session: &mut DragSession,
    gesture: &mut Gesture,
    content: &mut impl FnMut(&mut Ui, usize),
) {
    let response = ui.interact(rect, id.with(index), Sense::drag());

    if response.drag_started() {
        session.begin(index);
    }
    if session.is_dragging(index) {
        if response.dragged() {
            session.update(response.drag_delta());
            gesture.held = true;
        }
        if response.drag_released() {
            // the last move can arrive in the same frame as the release, after which egui no
            // longer reports a drag delta
            session.update(ui.input(|i| i.pointer.delta()));
            gesture.released = true;
        }
    }

    let transform = transform_for(index, session, style.drag_scale);
    if !transform.elevated {
        if response.hovered() {
            ui.ctx().set_cursor_icon(CursorIcon::Grab);
        }
        paint_background(ui, rect, ui.style().interact(&response));
        let mut content_ui = ui.child_ui(rect.shrink(style.padding), centered());
        content(&mut content_ui, index);
        return;
    }

    ui.ctx().set_cursor_icon(CursorIcon::Grabbing);

    // placeholder in the resting place
    let mut placeholder_ui = ui.child_ui(rect.shrink(style.padding), centered());
    placeholder_ui.set_enabled(false);
    content(&mut placeholder_ui, index);

    // The lifted copy can't be interacted with, which is fine: the drag itself is tracked by the
    // resting slot's response.
    let lifted = transform.apply(rect);
    egui::Area::new(id.with(("lifted", index)))
        .order(Order::Foreground)
        .interactable(false)
        .fixed_pos(lifted.min)
        .show(ui.ctx(), |ui| {
            let (lifted, _) = ui.allocate_exact_size(lifted.size(), Sense::hover());
            paint_background(ui, lifted, &ui.visuals().widgets.active);
            let mut content_ui =
                ui.child_ui(lifted.shrink(style.padding * transform.scale), centered());
            content(&mut content_ui, index);
        });
}

/// Resolves the gesture once every slot of the frame has been drawn and measured.
///
/// A release ends the session against `layout`. A session that is still active but whose slot
/// neither held nor released the pointer this frame was dropped by egui (or its slot is no longer
/// rendered) and is cancelled, as is one aborted with Escape.
pub(crate) fn finish_gesture(
    ui: &Ui,
    session: &mut DragSession,
    gesture: Gesture,
    list_size: usize,
    layout: &impl SlotLayout,
) -> SwapResponse {
    let Some(index) = session.dragged() else {
        return SwapResponse::NoDrag;
    };

    if gesture.released {
        return match session.end(layout) {
            Some(swap) => SwapResponse::Completed(swap),
            None => SwapResponse::NoDrag,
        };
    }

    let escaped = ui.input(|i| i.key_pressed(Key::Escape));
    if escaped {
        ui.memory_mut(|mem| mem.stop_dragging());
    }
    if escaped || !gesture.held || index >= list_size {
        session.cancel();
    }

    session.response()
}

fn centered() -> Layout {
    Layout::centered_and_justified(Direction::TopDown)
}

fn paint_background(ui: &Ui, rect: Rect, visuals: &egui::style::WidgetVisuals) {
    let mut shape = RectShape::filled(rect, visuals.rounding, visuals.bg_fill);
    shape.stroke = visuals.bg_stroke;
    ui.painter().add(Shape::Rect(shape));
}
