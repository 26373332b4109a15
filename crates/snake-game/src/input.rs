//! Keyboard and mouse bindings.

use snake_engine::input::{
    InputEvent, InputFrame, Key, KeyState, MouseButton, MouseButtonState, PointerButtonEvent,
};

use crate::snake::Direction;

/// What the player asked for.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command {
    Steer(Direction),
    Grow,
    Quit,
    /// Report the cursor position (logical pixels), if the window knows it.
    ReportCursor { position: Option<(f32, f32)> },
}

/// Maps a single input event to a command.
///
/// Key presses and OS repeats both count, so holding `R` keeps growing.
pub fn command_for(event: &InputEvent) -> Option<Command> {
    match event {
        InputEvent::Key { key, state: KeyState::Pressed, .. } => match key {
            Key::ArrowRight => Some(Command::Steer(Direction::Right)),
            Key::ArrowLeft => Some(Command::Steer(Direction::Left)),
            Key::ArrowUp => Some(Command::Steer(Direction::Up)),
            Key::ArrowDown => Some(Command::Steer(Direction::Down)),
            Key::R => Some(Command::Grow),
            Key::Escape => Some(Command::Quit),
            _ => None,
        },

        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            position,
        }) => Some(Command::ReportCursor { position: *position }),

        _ => None,
    }
}

/// Commands for every event of the frame, in arrival order.
pub fn commands(frame: &InputFrame) -> impl Iterator<Item = Command> + '_ {
    frame.events.iter().filter_map(command_for)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Pressed, repeat: false }
    }

    fn click(button: MouseButton, state: MouseButtonState) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state,
            position: Some((40.0, 60.5)),
        })
    }

    #[test]
    fn arrows_steer() {
        assert_eq!(command_for(&press(Key::ArrowRight)), Some(Command::Steer(Direction::Right)));
        assert_eq!(command_for(&press(Key::ArrowLeft)), Some(Command::Steer(Direction::Left)));
        assert_eq!(command_for(&press(Key::ArrowUp)), Some(Command::Steer(Direction::Up)));
        assert_eq!(command_for(&press(Key::ArrowDown)), Some(Command::Steer(Direction::Down)));
    }

    #[test]
    fn r_grows_and_escape_quits() {
        assert_eq!(command_for(&press(Key::R)), Some(Command::Grow));
        assert_eq!(command_for(&press(Key::Escape)), Some(Command::Quit));
    }

    #[test]
    fn key_repeat_still_counts() {
        let ev = InputEvent::Key { key: Key::R, state: KeyState::Pressed, repeat: true };
        assert_eq!(command_for(&ev), Some(Command::Grow));
    }

    #[test]
    fn releases_and_unbound_keys_are_ignored() {
        let release = InputEvent::Key { key: Key::ArrowUp, state: KeyState::Released, repeat: false };
        assert_eq!(command_for(&release), None);
        assert_eq!(command_for(&press(Key::W)), None);
        assert_eq!(command_for(&InputEvent::PointerLeft), None);
    }

    #[test]
    fn left_click_reports_cursor() {
        assert_eq!(
            command_for(&click(MouseButton::Left, MouseButtonState::Pressed)),
            Some(Command::ReportCursor { position: Some((40.0, 60.5)) })
        );
        assert_eq!(command_for(&click(MouseButton::Left, MouseButtonState::Released)), None);
        assert_eq!(command_for(&click(MouseButton::Right, MouseButtonState::Pressed)), None);
    }

    #[test]
    fn click_before_cursor_moves_reports_unknown_position() {
        let ev = InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            position: None,
        });
        assert_eq!(command_for(&ev), Some(Command::ReportCursor { position: None }));
    }

    #[test]
    fn frame_commands_keep_arrival_order() {
        let mut frame = InputFrame::default();
        frame.push_event(press(Key::ArrowUp));
        frame.push_event(press(Key::Q));
        frame.push_event(press(Key::R));
        frame.push_event(press(Key::ArrowLeft));

        let got: Vec<_> = commands(&frame).collect();
        assert_eq!(
            got,
            vec![
                Command::Steer(Direction::Up),
                Command::Grow,
                Command::Steer(Direction::Left),
            ]
        );
    }
}
