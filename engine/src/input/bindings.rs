//! Input Bindings Module
//!
//! Maps physical keys to logical actions. One action may be driven by several
//! keys (WASD and the arrow keys both steer), but each key drives at most one
//! action.

use std::collections::HashMap;

use super::KeyCode;

/// Logical input actions the simulation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move forward (default: W, ArrowUp)
    MoveForward,
    /// Move backward (default: S, ArrowDown)
    MoveBack,
    /// Move left (default: A, ArrowLeft)
    MoveLeft,
    /// Move right (default: D, ArrowRight)
    MoveRight,
    /// Rotate the view left (default: Q)
    YawLeft,
    /// Rotate the view right (default: E)
    YawRight,
    /// Pause / resume (default: P)
    TogglePause,
    /// Step to the next zoom level (default: Grave)
    CycleZoom,
    /// Start playing from the menu (default: Enter)
    Confirm,
}

/// Maps physical keys to logical actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    key_to_action: HashMap<KeyCode, InputAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create a new KeyBindings instance with default key mappings.
    ///
    /// Default bindings:
    /// - W / ArrowUp = MoveForward
    /// - S / ArrowDown = MoveBack
    /// - A / ArrowLeft = MoveLeft
    /// - D / ArrowRight = MoveRight
    /// - Q = YawLeft, E = YawRight
    /// - P = TogglePause
    /// - Grave = CycleZoom
    /// - Enter = Confirm
    pub fn new() -> Self {
        let mut bindings = Self::empty();

        bindings.bind(KeyCode::W, InputAction::MoveForward);
        bindings.bind(KeyCode::ArrowUp, InputAction::MoveForward);
        bindings.bind(KeyCode::S, InputAction::MoveBack);
        bindings.bind(KeyCode::ArrowDown, InputAction::MoveBack);
        bindings.bind(KeyCode::A, InputAction::MoveLeft);
        bindings.bind(KeyCode::ArrowLeft, InputAction::MoveLeft);
        bindings.bind(KeyCode::D, InputAction::MoveRight);
        bindings.bind(KeyCode::ArrowRight, InputAction::MoveRight);
        bindings.bind(KeyCode::Q, InputAction::YawLeft);
        bindings.bind(KeyCode::E, InputAction::YawRight);
        bindings.bind(KeyCode::P, InputAction::TogglePause);
        bindings.bind(KeyCode::Grave, InputAction::CycleZoom);
        bindings.bind(KeyCode::Enter, InputAction::Confirm);

        bindings
    }

    /// Bindings with no keys mapped.
    pub fn empty() -> Self {
        Self {
            key_to_action: HashMap::new(),
        }
    }

    /// Bind a physical key to a logical action.
    ///
    /// Replaces any previous action of this key. Other keys bound to the same
    /// action keep their binding.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        self.key_to_action.insert(key, action);
    }

    /// Remove the binding for a specific key.
    pub fn unbind_key(&mut self, key: KeyCode) {
        self.key_to_action.remove(&key);
    }

    /// Remove every binding of a specific action.
    pub fn unbind_action(&mut self, action: InputAction) {
        self.key_to_action.retain(|_, bound| *bound != action);
    }

    /// Action bound to `key`, if any.
    pub fn action_for(&self, key: KeyCode) -> Option<InputAction> {
        self.key_to_action.get(&key).copied()
    }

    /// All keys bound to `action`.
    pub fn keys_for(&self, action: InputAction) -> Vec<KeyCode> {
        self.key_to_action
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| *key)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::new();
        assert_eq!(bindings.action_for(KeyCode::W), Some(InputAction::MoveForward));
        assert_eq!(bindings.action_for(KeyCode::ArrowDown), Some(InputAction::MoveBack));
        assert_eq!(bindings.action_for(KeyCode::Q), Some(InputAction::YawLeft));
        assert_eq!(bindings.action_for(KeyCode::Grave), Some(InputAction::CycleZoom));
        assert_eq!(bindings.action_for(KeyCode::Unknown), None);
    }

    #[test]
    fn test_keys_for_action() {
        let bindings = KeyBindings::new();
        let mut keys = bindings.keys_for(InputAction::MoveLeft);
        keys.sort_by_key(|k| format!("{k:?}"));
        assert_eq!(keys, vec![KeyCode::A, KeyCode::ArrowLeft]);
    }

    #[test]
    fn test_rebind_key() {
        let mut bindings = KeyBindings::new();
        bindings.bind(KeyCode::W, InputAction::YawRight);
        assert_eq!(bindings.action_for(KeyCode::W), Some(InputAction::YawRight));
        // ArrowUp still moves forward
        assert_eq!(bindings.keys_for(InputAction::MoveForward), vec![KeyCode::ArrowUp]);
    }

    #[test]
    fn test_unbind() {
        let mut bindings = KeyBindings::new();
        bindings.unbind_key(KeyCode::P);
        assert!(bindings.keys_for(InputAction::TogglePause).is_empty());
        // Escape is left to the host (window close)
        assert_eq!(bindings.action_for(KeyCode::Escape), None);

        bindings.unbind_action(InputAction::MoveRight);
        assert!(bindings.keys_for(InputAction::MoveRight).is_empty());
        assert!(KeyBindings::empty().keys_for(InputAction::Confirm).is_empty());
    }
}
