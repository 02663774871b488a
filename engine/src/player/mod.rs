//! Player module
//!
//! Ground-plane movement for the player proxy.
//!
//! # Modules
//!
//! - [`movement_controller`] - input-driven velocity with acceleration,
//!   deceleration, friction, and a speed clamp

pub mod movement_controller;

pub use movement_controller::{
    MovementController, MovementStep, MovementTuning, TuningError, advance_axis,
};
