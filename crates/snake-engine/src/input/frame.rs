use super::types::InputEvent;

/// Input events received since the previous frame, in arrival order.
///
/// Key repeats are included. The runtime clears the frame after each redraw.
#[derive(Debug, Default)]
pub struct InputFrame {
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }
}
