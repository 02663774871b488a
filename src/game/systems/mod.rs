//! Game systems: stateless per-step logic over the simulation state.

pub mod collision_system;

pub use collision_system::{CollisionSystem, StepReport};
