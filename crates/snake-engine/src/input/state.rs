use super::frame::InputFrame;
use super::types::{InputEvent, PointerButtonEvent, PointerMoveEvent};

/// Input state that outlives a single frame.
///
/// Only the pointer position is tracked; it is stamped onto button events by
/// the platform layer.
#[derive(Debug, Default)]
pub struct InputState {
    /// Pointer position in logical pixels, `None` while the pointer is outside
    /// the window or has not moved yet.
    pub pointer_pos: Option<(f32, f32)>,
}

impl InputState {
    /// Updates the tracked state from `ev` and queues it on `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::PointerButton(PointerButtonEvent { position: Some(pos), .. }) => {
                self.pointer_pos = Some(*pos);
            }

            InputEvent::PointerButton(_) | InputEvent::Key { .. } => {}
        }

        frame.push_event(ev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, KeyState, MouseButton, MouseButtonState};

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    fn left_press(position: Option<(f32, f32)>) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            position,
        })
    }

    // ── events ────────────────────────────────────────────────────────────

    #[test]
    fn every_event_is_queued_in_order() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        let press = InputEvent::Key { key: Key::R, state: KeyState::Pressed, repeat: false };
        let repeat = InputEvent::Key { key: Key::R, state: KeyState::Pressed, repeat: true };
        state.apply_event(&mut frame, press.clone());
        state.apply_event(&mut frame, repeat.clone());
        state.apply_event(&mut frame, moved(3.0, 4.0));

        assert_eq!(frame.events, vec![press, repeat, moved(3.0, 4.0)]);
    }

    #[test]
    fn frame_clear_keeps_pointer() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, moved(5.0, 6.0));
        frame.clear();

        assert!(frame.events.is_empty());
        assert_eq!(state.pointer_pos, Some((5.0, 6.0)));
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn pointer_starts_unknown() {
        assert_eq!(InputState::default().pointer_pos, None);
    }

    #[test]
    fn move_then_leave_forgets_position() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, moved(1.0, 2.0));
        assert_eq!(state.pointer_pos, Some((1.0, 2.0)));

        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, None);
    }

    #[test]
    fn button_with_position_updates_pointer() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, left_press(Some((12.0, 34.0))));

        assert_eq!(state.pointer_pos, Some((12.0, 34.0)));
    }

    #[test]
    fn button_without_position_keeps_it_unknown() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, left_press(None));

        assert_eq!(state.pointer_pos, None);
        assert_eq!(frame.events.len(), 1);
    }
}
