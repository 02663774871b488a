//! Simulation State
//!
//! Everything that changes from one step to the next, in one place. Owned by
//! the scene and passed explicitly to the systems that update it.

use crate::camera::ArenaCamera;
use crate::input::InputFrame;
use crate::physics::PlayerProxy;
use crate::player::{MovementController, MovementTuning, TuningError};

/// Top-level flow of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Start menu: camera idles, nothing moves
    #[default]
    Menu,
    /// Simulation running
    Playing,
    /// Simulation frozen
    Paused,
}

impl GamePhase {
    /// Phase after this step's edge-triggered inputs.
    ///
    /// Menu leaves only on `confirm`; pause toggles only outside the menu.
    pub fn next(self, frame: &InputFrame) -> Self {
        match self {
            GamePhase::Menu if frame.confirm => GamePhase::Playing,
            GamePhase::Playing if frame.toggle_pause => GamePhase::Paused,
            GamePhase::Paused if frame.toggle_pause => GamePhase::Playing,
            phase => phase,
        }
    }

    /// True while steps advance the simulation.
    pub fn is_running(self) -> bool {
        self == GamePhase::Playing
    }
}

/// Mutable per-step state of the arena.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Player collision sphere; its center is the player position
    pub proxy: PlayerProxy,
    /// Sole owner of the player velocity
    pub movement: MovementController,
    /// View-only camera
    pub camera: ArenaCamera,
    /// Current phase
    pub phase: GamePhase,
    /// Fixed steps run while playing
    pub steps: u64,
}

impl SimulationState {
    /// Fresh state at the menu, proxy resting at `proxy`'s center.
    pub fn new(proxy: PlayerProxy, tuning: MovementTuning) -> Result<Self, TuningError> {
        Ok(Self {
            proxy,
            movement: MovementController::new(tuning)?,
            camera: ArenaCamera::looking_at(proxy.center),
            phase: GamePhase::Menu,
            steps: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{Vec3, Velocity2D};

    fn frame(confirm: bool, toggle_pause: bool) -> InputFrame {
        InputFrame {
            confirm,
            toggle_pause,
            ..InputFrame::idle()
        }
    }

    #[test]
    fn test_phase_transitions() {
        let phase = GamePhase::Menu;
        assert_eq!(phase.next(&frame(false, true)), GamePhase::Menu);
        let phase = phase.next(&frame(true, false));
        assert_eq!(phase, GamePhase::Playing);
        let phase = phase.next(&frame(false, true));
        assert_eq!(phase, GamePhase::Paused);
        assert!(!phase.is_running());
        // Confirm does nothing once past the menu
        assert_eq!(phase.next(&frame(true, false)), GamePhase::Paused);
        assert_eq!(phase.next(&frame(false, true)), GamePhase::Playing);
    }

    #[test]
    fn test_new_state_at_rest() {
        let proxy = PlayerProxy::new(Vec3::new(0.0, 0.25, 0.0), 0.25);
        let state = SimulationState::new(proxy, MovementTuning::default()).unwrap();
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.movement.velocity(), Velocity2D::ZERO);
        assert_eq!(state.camera.target, proxy.center);
        assert_eq!(state.steps, 0);
    }
}
