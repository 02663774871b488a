//! Player Movement Controller
//!
//! Converts held directional keys into a smoothly accelerating and
//! decelerating ground-plane velocity, and derives the per-step displacement.
//!
//! # Per-axis rule
//!
//! Each velocity component is updated independently:
//!
//! - Positive key held: `+acceleration` if the component is already positive,
//!   otherwise `+deceleration`. Deceleration is the larger step, so reversing
//!   direction eats into the opposite sign faster than starting from rest.
//! - Negative key held: the mirror image.
//! - Neither held: friction moves the component toward zero by
//!   `acceleration / friction_factor`, stopping exactly at zero.
//! - The result is clamped to `[-max_speed, max_speed]`.
//!
//! When both keys of an axis are held, the positive branch runs first and the
//! negative branch then sees its result. That leaves a small nudge rather
//! than an exact cancel, and is kept as observable behavior.
//!
//! # Usage
//!
//! ```rust,ignore
//! use walled_arena_engine::player::{MovementController, MovementTuning};
//!
//! let mut controller = MovementController::new(MovementTuning::default())?;
//!
//! // Each step:
//! let step = controller.advance(&frame.movement);
//! proxy.translate(step.displacement);
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::MovementKeys;
use crate::physics::Velocity2D;

/// Per-step speed gain while moving in the held direction
pub const ACCELERATION: f32 = 0.01;

/// Per-step speed gain while the held direction opposes (or starts from) rest
pub const DECELERATION: f32 = 0.025;

/// Divisor applied to `ACCELERATION` to get the per-step friction
pub const FRICTION_FACTOR: f32 = 2.75;

/// Largest absolute value of either velocity component
pub const MAX_SPEED: f32 = 0.1;

/// Multiplier from velocity to per-step displacement
pub const STEP_SCALE: f32 = 1.0;

/// Invalid movement tuning.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    /// A rate or limit is zero, negative, or not finite.
    #[error("movement tuning `{field}` must be finite and positive, got {value}")]
    NotPositive {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f32,
    },
    /// The displacement scale is negative or not finite.
    #[error("movement tuning `step_scale` must be finite and non-negative, got {0}")]
    InvalidStepScale(f32),
}

/// Immutable movement configuration, constant for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MovementTuning {
    /// Speed gain per step while already moving in the held direction
    pub acceleration: f32,
    /// Speed gain per step when the held direction opposes the current velocity
    pub deceleration: f32,
    /// Friction per step is `acceleration / friction_factor`
    pub friction_factor: f32,
    /// Clamp for each velocity component
    pub max_speed: f32,
    /// Displacement per step is `velocity * step_scale`
    pub step_scale: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            acceleration: ACCELERATION,
            deceleration: DECELERATION,
            friction_factor: FRICTION_FACTOR,
            max_speed: MAX_SPEED,
            step_scale: STEP_SCALE,
        }
    }
}

impl MovementTuning {
    /// Checks every field. Called before a controller is built.
    pub fn validate(&self) -> Result<(), TuningError> {
        for (field, value) in [
            ("acceleration", self.acceleration),
            ("deceleration", self.deceleration),
            ("friction_factor", self.friction_factor),
            ("max_speed", self.max_speed),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TuningError::NotPositive { field, value });
            }
        }
        if !self.step_scale.is_finite() || self.step_scale < 0.0 {
            return Err(TuningError::InvalidStepScale(self.step_scale));
        }
        Ok(())
    }

    /// Speed removed per step by friction.
    #[inline]
    pub fn friction_step(&self) -> f32 {
        self.acceleration / self.friction_factor
    }

    /// Upper bound on the number of idle steps needed to stop from any
    /// in-range velocity.
    pub fn steps_to_rest(&self) -> u32 {
        (self.max_speed / self.friction_step()).ceil() as u32 + 1
    }
}

/// Output of one [`MovementController::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementStep {
    /// Velocity after this step's update
    pub velocity: Velocity2D,
    /// World-space displacement to apply to the proxy (Y is always zero)
    pub displacement: Vec3,
}

/// Applies the per-axis rule to one velocity component.
pub fn advance_axis(
    mut v: f32,
    positive_held: bool,
    negative_held: bool,
    tuning: &MovementTuning,
) -> f32 {
    if positive_held {
        v += if v > 0.0 {
            tuning.acceleration
        } else {
            tuning.deceleration
        };
    }

    if negative_held {
        v -= if v < 0.0 {
            tuning.acceleration
        } else {
            tuning.deceleration
        };
    }

    if !positive_held && !negative_held {
        let friction = tuning.friction_step();
        if v > 0.0 {
            v = (v - friction).max(0.0);
        } else if v < 0.0 {
            v = (v + friction).min(0.0);
        }
    }

    v.clamp(-tuning.max_speed, tuning.max_speed)
}

/// Ground-plane movement controller.
///
/// Sole owner of the player velocity. The collision response re-enters only
/// through [`apply_response`](Self::apply_response).
#[derive(Debug, Clone)]
pub struct MovementController {
    velocity: Velocity2D,
    tuning: MovementTuning,
}

impl MovementController {
    /// Create a controller at rest. Fails if the tuning is invalid.
    pub fn new(tuning: MovementTuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            velocity: Velocity2D::ZERO,
            tuning,
        })
    }

    /// Create a controller starting from a given velocity.
    ///
    /// The velocity is taken as-is; an out-of-range value is brought back
    /// inside the bound by the first [`advance`](Self::advance).
    pub fn with_velocity(tuning: MovementTuning, velocity: Velocity2D) -> Result<Self, TuningError> {
        let mut controller = Self::new(tuning)?;
        controller.velocity = velocity;
        Ok(controller)
    }

    /// Get the current velocity.
    pub fn velocity(&self) -> Velocity2D {
        self.velocity
    }

    /// Get the tuning this controller was built with.
    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    /// Replace the velocity with a collision response.
    ///
    /// The value is clamped like any other update so the speed bound holds
    /// even under the `Reflect` response.
    pub fn apply_response(&mut self, velocity: Velocity2D) {
        let max = self.tuning.max_speed;
        self.velocity = Velocity2D::new(velocity.x.clamp(-max, max), velocity.y.clamp(-max, max));
    }

    /// Reset velocity to zero (e.g. on restart).
    pub fn reset(&mut self) {
        self.velocity = Velocity2D::ZERO;
    }

    /// Advance one simulation step.
    ///
    /// Yaw keys are ignored here: view rotation never feeds the velocity.
    pub fn advance(&mut self, keys: &MovementKeys) -> MovementStep {
        let x = advance_axis(self.velocity.x, keys.forward, keys.backward, &self.tuning);
        let y = advance_axis(self.velocity.y, keys.right, keys.left, &self.tuning);
        self.velocity = Velocity2D::new(x, y);

        MovementStep {
            velocity: self.velocity,
            displacement: self.velocity.to_ground_plane() * self.tuning.step_scale,
        }
    }
}
