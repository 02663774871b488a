//! Game Module
//!
//! Contains game-specific systems that build on top of the engine.

pub mod config;
pub mod diagnostics;
pub mod scenes;
pub mod state;
pub mod systems;

pub use config::{ArenaConfig, ConfigError, WallConfig};
pub use diagnostics::{CollisionObserver, NullObserver, RecordingObserver, TracingObserver};
pub use scenes::{ArenaScene, SceneSnapshot, WallSnapshot};
pub use state::{GamePhase, SimulationState};
pub use systems::{CollisionSystem, StepReport};
