//! Collision detection module
//!
//! Sphere-vs-AABB overlap tests between the player proxy and the static
//! wall boxes of the arena.
//!
//! # Sphere-AABB Overlap
//!
//! The closest point on the box to the sphere center is found by clamping the
//! center into the box on each axis. The sphere overlaps the box iff the
//! squared distance to that point is at most the squared radius, so a sphere
//! that exactly touches a face counts as a contact.
//!
//! # Example
//!
//! ```ignore
//! use walled_arena_engine::physics::collision::{CollisionWorld, Obstacle, PlayerProxy};
//! use glam::Vec3;
//!
//! let world = CollisionWorld::new(vec![Obstacle::new(
//!     Vec3::new(-16.5, 0.0, -16.0),
//!     Vec3::new(-15.5, 5.0, 16.0),
//! )])?;
//!
//! let proxy = PlayerProxy::new(Vec3::new(-16.4, 2.0, 0.0), 0.5);
//! for contact in world.test_all(&proxy) {
//!     if contact.overlaps {
//!         println!("touching wall {}", contact.id);
//!     }
//! }
//! ```

use std::fmt;

use glam::Vec3;
use thiserror::Error;

/// The sphere standing in for the player's collidable extent.
///
/// `center` is the authoritative player position: the camera target and the
/// renderer both read it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerProxy {
    /// World-space center of the sphere
    pub center: Vec3,
    /// Sphere radius in world units
    pub radius: f32,
}

impl PlayerProxy {
    /// Creates a new proxy sphere.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Moves the proxy by `displacement`.
    pub fn translate(&mut self, displacement: Vec3) {
        self.center += displacement;
    }
}

/// Registration index of an obstacle inside a [`CollisionWorld`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObstacleId(pub usize);

impl fmt::Display for ObstacleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Configuration errors raised while building a collision world.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObstacleError {
    /// A `min` coordinate exceeds the matching `max` coordinate.
    #[error("obstacle {index}: min.{axis} ({min}) exceeds max.{axis} ({max})")]
    InvertedBounds {
        /// Registration index of the bad obstacle
        index: usize,
        /// Offending axis name
        axis: char,
        /// Minimum coordinate on that axis
        min: f32,
        /// Maximum coordinate on that axis
        max: f32,
    },
    /// A corner coordinate is NaN or infinite.
    #[error("obstacle {index}: bounds must be finite")]
    NonFinite {
        /// Registration index of the bad obstacle
        index: usize,
    },
}

/// A static axis-aligned wall box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Obstacle {
    /// Creates an obstacle from its corners. Not validated until it is
    /// registered with a [`CollisionWorld`].
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates an obstacle from a center point and full edge lengths.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Box center.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full edge lengths.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Checks that the bounds are finite and not inverted on any axis.
    ///
    /// `index` is only used to label the error.
    pub fn validate(&self, index: usize) -> Result<(), ObstacleError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ObstacleError::NonFinite { index });
        }
        for (axis, min, max) in [
            ('x', self.min.x, self.max.x),
            ('y', self.min.y, self.max.y),
            ('z', self.min.z, self.max.z),
        ] {
            if min > max {
                return Err(ObstacleError::InvertedBounds {
                    index,
                    axis,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }

    /// Nearest point on (or in) the box to `point`.
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }

    /// Squared distance from `point` to the box (zero inside).
    pub fn distance_squared_to(&self, point: Vec3) -> f32 {
        point.distance_squared(self.closest_point(point))
    }

    /// True when `point` is strictly inside the box on every axis.
    pub fn contains_strictly(&self, point: Vec3) -> bool {
        point.cmpgt(self.min).all() && point.cmplt(self.max).all()
    }
}

/// Sphere-vs-AABB overlap predicate.
///
/// Holds iff the squared distance from `center` to the nearest point of the
/// box is `<= radius²`.
pub fn sphere_aabb_overlap(center: Vec3, radius: f32, aabb_min: Vec3, aabb_max: Vec3) -> bool {
    let closest = center.clamp(aabb_min, aabb_max);
    center.distance_squared(closest) <= radius * radius
}

/// Result of testing the proxy against one obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleContact<'a> {
    /// Registration index of the obstacle
    pub id: ObstacleId,
    /// The obstacle itself
    pub obstacle: &'a Obstacle,
    /// Whether the proxy overlaps it
    pub overlaps: bool,
}

/// The static set of wall boxes the player collides with.
///
/// Built once at world setup. Read-only afterwards: the overlap queries take
/// `&self` and keep no iteration state between calls.
#[derive(Debug, Clone, Default)]
pub struct CollisionWorld {
    obstacles: Vec<Obstacle>,
}

impl CollisionWorld {
    /// Builds a world from obstacles in registration order.
    ///
    /// Fails on the first malformed obstacle; a world is never built
    /// partially.
    pub fn new(obstacles: Vec<Obstacle>) -> Result<Self, ObstacleError> {
        for (index, obstacle) in obstacles.iter().enumerate() {
            obstacle.validate(index)?;
        }
        Ok(Self { obstacles })
    }

    /// Number of registered obstacles.
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    /// Returns true if the world has no obstacles.
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Gets the obstacle registered under `id`.
    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.get(id.0)
    }

    /// All obstacles in registration order.
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Tests the proxy against every obstacle.
    ///
    /// The iterator is lazy and yields in registration order. Calling this
    /// again starts a fresh pass.
    pub fn test_all<'a>(
        &'a self,
        proxy: &'a PlayerProxy,
    ) -> impl Iterator<Item = ObstacleContact<'a>> + 'a {
        self.obstacles
            .iter()
            .enumerate()
            .map(move |(index, obstacle)| ObstacleContact {
                id: ObstacleId(index),
                obstacle,
                overlaps: sphere_aabb_overlap(
                    proxy.center,
                    proxy.radius,
                    obstacle.min,
                    obstacle.max,
                ),
            })
    }

    /// Ids of every obstacle the proxy currently overlaps, in registration order.
    pub fn overlapping(&self, proxy: &PlayerProxy) -> Vec<ObstacleId> {
        self.test_all(proxy)
            .filter(|contact| contact.overlaps)
            .map(|contact| contact.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{Face, Velocity2D};

    // Runtime state stays out of the config format
    static_assertions::assert_not_impl_any!(PlayerProxy: serde::Serialize, serde::de::DeserializeOwned);
    static_assertions::assert_not_impl_any!(Obstacle: serde::Serialize, serde::de::DeserializeOwned);
    static_assertions::assert_not_impl_any!(ObstacleId: serde::Serialize, serde::de::DeserializeOwned);
    static_assertions::assert_not_impl_any!(Velocity2D: serde::Serialize, serde::de::DeserializeOwned);
    static_assertions::assert_not_impl_any!(Face: serde::Serialize, serde::de::DeserializeOwned);

    fn blue_wall() -> Obstacle {
        Obstacle::new(Vec3::new(-16.5, 0.0, -16.0), Vec3::new(-15.5, 5.0, 16.0))
    }

    #[test]
    fn test_from_center_size_matches_corners() {
        let wall = Obstacle::from_center_size(Vec3::new(-16.0, 2.5, 0.0), Vec3::new(1.0, 5.0, 32.0));
        assert_eq!(wall, blue_wall());
        assert_eq!(wall.center(), Vec3::new(-16.0, 2.5, 0.0));
        assert_eq!(wall.size(), Vec3::new(1.0, 5.0, 32.0));
    }

    #[test]
    fn test_sphere_overlaps_thin_wall() {
        let wall = blue_wall();
        assert!(sphere_aabb_overlap(Vec3::new(-16.4, 2.0, 0.0), 0.5, wall.min, wall.max));
        assert!(!sphere_aabb_overlap(Vec3::new(-10.0, 2.0, 0.0), 0.5, wall.min, wall.max));
    }

    #[test]
    fn test_touching_face_counts_as_overlap() {
        let min = Vec3::new(0.0, 0.0, 0.0);
        let max = Vec3::new(1.0, 1.0, 1.0);
        // distance to the x = 1 face is exactly 0.5
        assert!(sphere_aabb_overlap(Vec3::new(1.5, 0.5, 0.5), 0.5, min, max));
        assert!(!sphere_aabb_overlap(Vec3::new(1.5001, 0.5, 0.5), 0.5, min, max));
    }

    #[test]
    fn test_corner_distance_uses_all_axes() {
        let min = Vec3::ZERO;
        let max = Vec3::ONE;
        // diagonal from the (1, 1, 1) corner: sqrt(3) * 0.3 ~= 0.52
        let center = Vec3::splat(1.3);
        assert!(!sphere_aabb_overlap(center, 0.5, min, max));
        assert!(sphere_aabb_overlap(center, 0.53, min, max));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let bad = Obstacle::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 1.0));
        let result = CollisionWorld::new(vec![blue_wall(), bad]);
        assert_eq!(
            result.unwrap_err(),
            ObstacleError::InvertedBounds {
                index: 1,
                axis: 'x',
                min: 1.0,
                max: 0.0,
            }
        );
    }

    #[test]
    fn test_non_finite_bounds_rejected() {
        let bad = Obstacle::new(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::ONE);
        assert_eq!(
            CollisionWorld::new(vec![bad]).unwrap_err(),
            ObstacleError::NonFinite { index: 0 }
        );
    }

    #[test]
    fn test_flat_obstacle_is_valid() {
        let plane = Obstacle::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(4.0, 0.0, 4.0));
        assert!(CollisionWorld::new(vec![plane]).is_ok());
    }

    #[test]
    fn test_test_all_preserves_registration_order() {
        let world = CollisionWorld::new(vec![
            blue_wall(),
            Obstacle::new(Vec3::new(15.5, 0.0, -16.0), Vec3::new(16.5, 5.0, 16.0)),
        ])
        .unwrap();
        let proxy = PlayerProxy::new(Vec3::new(-16.4, 2.0, 0.0), 0.5);

        let contacts: Vec<_> = world.test_all(&proxy).collect();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].id, ObstacleId(0));
        assert!(contacts[0].overlaps);
        assert_eq!(contacts[1].id, ObstacleId(1));
        assert!(!contacts[1].overlaps);

        // Restartable: a second pass yields the same sequence
        let again: Vec<_> = world.test_all(&proxy).collect();
        assert_eq!(contacts, again);
        assert_eq!(world.overlapping(&proxy), vec![ObstacleId(0)]);
    }

    #[test]
    fn test_contains_strictly() {
        let wall = blue_wall();
        assert!(wall.contains_strictly(Vec3::new(-16.0, 2.0, 0.0)));
        assert!(!wall.contains_strictly(Vec3::new(-16.5, 2.0, 0.0)));
    }
}
