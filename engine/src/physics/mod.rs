//! Physics module
//!
//! Custom collision core for the walled arena: a sphere proxy moving on the
//! ground plane against static axis-aligned wall boxes. No external physics
//! library.
//!
//! # Unit System
//!
//! Distances are world units (one wall is 1 unit thick, the arena 32 units
//! across). Velocities are world units per simulation step; the step is
//! nominally 1/60 s.
//!
//! # Submodules
//!
//! - [`types`] - glam re-exports and the planar [`Velocity2D`]
//! - [`collision`] - proxy/obstacle types, sphere-AABB overlap, [`CollisionWorld`]
//! - [`face`] - which face of a box was struck
//! - [`resolver`] - post-impact velocity and [`CollisionEvent`]

pub mod collision;
pub mod face;
pub mod resolver;
pub mod types;

// Re-export commonly used types at the physics module level
pub use collision::{
    CollisionWorld, Obstacle, ObstacleContact, ObstacleError, ObstacleId, PlayerProxy,
    sphere_aabb_overlap,
};
pub use face::{Face, classify};
pub use resolver::{
    BounceResponse, CollisionEvent, CollisionResolver, Resolution, clamped_asin_degrees,
};
pub use types::{Vec3, Velocity2D};
