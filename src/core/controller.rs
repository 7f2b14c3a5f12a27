use serde::{Deserialize, Serialize};

/// Input button identifier, also used to configure the trigger key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Space,
    Enter,
    KeyC,
    KeyP,
    MouseLeft,
}

/// Polled input state supplied by the host's input layer
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;
}

/// Turns a held button into a single press edge
#[derive(Debug, Clone, Copy)]
pub struct PressEdge {
    button: Button,
    was_down: bool,
}

impl PressEdge {
    pub fn new(button: Button) -> Self {
        Self {
            button,
            was_down: false,
        }
    }

    pub fn button(&self) -> Button {
        self.button
    }

    /// Sample once per frame; true only on the frame the button goes down
    pub fn sample(&mut self, controller: &impl Controller) -> bool {
        let is_down = controller.is_down(self.button);
        let pressed = is_down && !self.was_down;
        self.was_down = is_down;
        pressed
    }
}
