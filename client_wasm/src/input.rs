//! Keyboard input handling

use game_core::InputState;

/// Logical action bound to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    TogglePause,
    Reset,
}

/// Map a `KeyboardEvent.key` value to an action
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "w" | "W" => Some(KeyAction::LeftUp),
        "s" | "S" => Some(KeyAction::LeftDown),
        "ArrowUp" => Some(KeyAction::RightUp),
        "ArrowDown" => Some(KeyAction::RightDown),
        " " | "Spacebar" => Some(KeyAction::TogglePause),
        "r" | "R" => Some(KeyAction::Reset),
        _ => None,
    }
}

/// Keys currently held down
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    held: InputState,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the key is bound, so the page can suppress scrolling
    pub fn handle_key_down(&mut self, key: &str) -> bool {
        self.set(key, true)
    }

    pub fn handle_key_up(&mut self, key: &str) -> bool {
        self.set(key, false)
    }

    fn set(&mut self, key: &str, down: bool) -> bool {
        let Some(action) = action_for_key(key) else {
            return false;
        };
        let slot = match action {
            KeyAction::LeftUp => &mut self.held.p1_up,
            KeyAction::LeftDown => &mut self.held.p1_down,
            KeyAction::RightUp => &mut self.held.p2_up,
            KeyAction::RightDown => &mut self.held.p2_down,
            KeyAction::TogglePause => &mut self.held.toggle_pause,
            KeyAction::Reset => &mut self.held.reset,
        };
        *slot = down;
        true
    }

    /// Snapshot for the next simulation tick
    pub fn input_state(&self) -> InputState {
        self.held
    }

    /// Drop everything, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.held = InputState::new();
    }
}
