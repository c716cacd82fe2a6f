use serde::{Deserialize, Serialize};

/// The keys the paste chord cares about; everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyInput {
    LeftControl,
    RightControl,
    V,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyDirection {
    Down,
    Up,
}

/// Tracks Ctrl+V from a raw key-event stream.
///
/// Fires once per fresh `V` press while Control is held; auto-repeat of a
/// held `V` does not fire again. Left and right Control are tracked
/// independently so releasing one while the other is held keeps the chord armed.
#[derive(Debug, Clone, Default)]
pub struct ChordTracker {
    left_control: bool,
    right_control: bool,
    v_held: bool,
}

impl ChordTracker {
    pub const fn new() -> Self {
        Self {
            left_control: false,
            right_control: false,
            v_held: false,
        }
    }

    pub fn control_held(&self) -> bool {
        self.left_control || self.right_control
    }

    /// Feeds one key event; returns `true` when the paste chord completes.
    pub fn on_key(&mut self, key: KeyInput, direction: KeyDirection) -> bool {
        match (key, direction) {
            (KeyInput::LeftControl, direction) => {
                self.left_control = direction == KeyDirection::Down;
                false
            }
            (KeyInput::RightControl, direction) => {
                self.right_control = direction == KeyDirection::Down;
                false
            }
            (KeyInput::V, KeyDirection::Down) => {
                let fresh = !self.v_held;
                self.v_held = true;
                fresh && self.control_held()
            }
            (KeyInput::V, KeyDirection::Up) => {
                self.v_held = false;
                false
            }
            (KeyInput::Other, _) => false,
        }
    }
}
