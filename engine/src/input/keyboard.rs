//! Keyboard Input Module
//!
//! Tracks which keys are held and which were pressed since the last
//! simulation step, and turns that into one [`InputFrame`] per step.
//! Decoupled from any windowing system: the host forwards press/release
//! events with generic key codes.

use std::collections::HashSet;

use super::bindings::{InputAction, KeyBindings};

/// Generic key codes, independent of the windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,

    // Camera yaw
    Q,
    E,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Control keys
    P,
    Grave,
    Enter,
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Held state of the directional and yaw controls for one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    /// W / Up - accelerate forward
    pub forward: bool,
    /// S / Down - accelerate backward
    pub backward: bool,
    /// A / Left - accelerate left
    pub left: bool,
    /// D / Right - accelerate right
    pub right: bool,
    /// Q - rotate the view left (no effect on velocity)
    pub yaw_left: bool,
    /// E - rotate the view right (no effect on velocity)
    pub yaw_right: bool,
}

impl MovementKeys {
    /// Create a new movement keys state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any velocity-affecting key is held.
    pub fn any_directional(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Get the forward/backward direction (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Get the left/right direction (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }

    /// Get the yaw direction (-1 = left, 0, or 1 = right).
    pub fn yaw_axis(&self) -> i32 {
        (self.yaw_right as i32) - (self.yaw_left as i32)
    }

    fn set(&mut self, action: InputAction, held: bool) {
        match action {
            InputAction::MoveForward => self.forward = held,
            InputAction::MoveBack => self.backward = held,
            InputAction::MoveLeft => self.left = held,
            InputAction::MoveRight => self.right = held,
            InputAction::YawLeft => self.yaw_left = held,
            InputAction::YawRight => self.yaw_right = held,
            InputAction::TogglePause | InputAction::CycleZoom | InputAction::Confirm => {}
        }
    }
}

/// Everything the simulation reads from the input source for one step.
///
/// `movement` holds "is held" state; the three toggles are "pressed since the
/// previous step" edges and are already debounced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    /// Held directional and yaw keys
    pub movement: MovementKeys,
    /// Pause/menu toggle pressed
    pub toggle_pause: bool,
    /// Zoom-cycle toggle pressed
    pub cycle_zoom: bool,
    /// Menu confirm ("Play") pressed
    pub confirm: bool,
}

impl InputFrame {
    /// A frame with nothing held or pressed.
    pub fn idle() -> Self {
        Self::default()
    }

    /// A frame with only the given movement keys held.
    pub fn holding(movement: MovementKeys) -> Self {
        Self {
            movement,
            ..Self::default()
        }
    }
}

/// Complete keyboard state tracking.
///
/// Keys map to actions through [`KeyBindings`]. Several keys may drive the
/// same action (W and ArrowUp both move forward), so an action stays held
/// while any of its keys is down.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    bindings: KeyBindings,
    held_keys: HashSet<KeyCode>,
    pressed_actions: HashSet<InputAction>,
}

impl KeyboardState {
    /// Create a new keyboard state with default bindings and all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a keyboard state with custom bindings.
    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Self::default()
        }
    }

    /// Current bindings.
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the key is bound to an action.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        let Some(action) = self.bindings.action_for(key) else {
            return false;
        };

        if pressed {
            // Key repeat delivers press events for keys already down
            if self.held_keys.insert(key) {
                self.pressed_actions.insert(action);
            }
        } else {
            self.held_keys.remove(&key);
        }
        true
    }

    /// Whether any key bound to `action` is held.
    pub fn is_held(&self, action: InputAction) -> bool {
        self.held_keys
            .iter()
            .any(|key| self.bindings.action_for(*key) == Some(action))
    }

    /// Whether `action` was pressed since the last [`sample`](Self::sample).
    pub fn was_pressed(&self, action: InputAction) -> bool {
        self.pressed_actions.contains(&action)
    }

    /// Snapshot the input for one simulation step and clear the pressed edges.
    pub fn sample(&mut self) -> InputFrame {
        let mut movement = MovementKeys::new();
        for key in &self.held_keys {
            if let Some(action) = self.bindings.action_for(*key) {
                movement.set(action, true);
            }
        }

        let frame = InputFrame {
            movement,
            toggle_pause: self.was_pressed(InputAction::TogglePause),
            cycle_zoom: self.was_pressed(InputAction::CycleZoom),
            confirm: self.was_pressed(InputAction::Confirm),
        };
        self.pressed_actions.clear();
        frame
    }

    /// Reset all keyboard state (e.g. when the window loses focus).
    pub fn reset(&mut self) {
        self.held_keys.clear();
        self.pressed_actions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys_default() {
        let keys = MovementKeys::new();
        assert!(!keys.any_directional());
        assert_eq!(keys.forward_axis(), 0);
        assert_eq!(keys.right_axis(), 0);
        assert_eq!(keys.yaw_axis(), 0);
    }

    #[test]
    fn test_wasd_and_arrows_share_actions() {
        let mut keyboard = KeyboardState::new();
        assert!(keyboard.handle_key(KeyCode::W, true));
        assert!(keyboard.handle_key(KeyCode::ArrowUp, true));
        keyboard.handle_key(KeyCode::W, false);

        // ArrowUp still holds the forward action
        let frame = keyboard.sample();
        assert!(frame.movement.forward);
        assert_eq!(frame.movement.forward_axis(), 1);

        keyboard.handle_key(KeyCode::ArrowUp, false);
        assert!(!keyboard.sample().movement.forward);
    }

    #[test]
    fn test_opposite_keys_both_held() {
        let mut keyboard = KeyboardState::new();
        keyboard.handle_key(KeyCode::D, true);
        keyboard.handle_key(KeyCode::ArrowLeft, true);
        let frame = keyboard.sample();
        assert!(frame.movement.right && frame.movement.left);
        assert_eq!(frame.movement.right_axis(), 0);
    }

    #[test]
    fn test_toggles_are_edges() {
        let mut keyboard = KeyboardState::new();
        keyboard.handle_key(KeyCode::P, true);
        assert!(keyboard.sample().toggle_pause);
        // Still held, but not pressed again
        assert!(!keyboard.sample().toggle_pause);

        // Key repeat does not re-trigger
        keyboard.handle_key(KeyCode::P, true);
        assert!(!keyboard.sample().toggle_pause);

        keyboard.handle_key(KeyCode::P, false);
        keyboard.handle_key(KeyCode::P, true);
        assert!(keyboard.sample().toggle_pause);
    }

    #[test]
    fn test_zoom_and_confirm_edges() {
        let mut keyboard = KeyboardState::new();
        keyboard.handle_key(KeyCode::Grave, true);
        keyboard.handle_key(KeyCode::Enter, true);
        let frame = keyboard.sample();
        assert!(frame.cycle_zoom);
        assert!(frame.confirm);
        assert!(!frame.toggle_pause);
    }

    #[test]
    fn test_yaw_keys_do_not_touch_directional_axes() {
        let mut keyboard = KeyboardState::new();
        keyboard.handle_key(KeyCode::E, true);
        let frame = keyboard.sample();
        assert_eq!(frame.movement.yaw_axis(), 1);
        assert!(!frame.movement.any_directional());
    }

    #[test]
    fn test_unbound_key_ignored() {
        let mut keyboard = KeyboardState::new();
        assert!(!keyboard.handle_key(KeyCode::Unknown, true));
        assert_eq!(keyboard.sample(), InputFrame::idle());
    }

    #[test]
    fn test_reset_releases_everything() {
        let mut keyboard = KeyboardState::new();
        keyboard.handle_key(KeyCode::S, true);
        keyboard.handle_key(KeyCode::P, true);
        keyboard.reset();
        assert_eq!(keyboard.sample(), InputFrame::idle());
        assert!(!keyboard.is_held(InputAction::MoveBack));
    }
}
