//! Face classification
//!
//! Decides which side of a wall box the proxy struck, once an overlap has
//! already been confirmed.
//!
//! Faces are tested in a fixed priority order and the first test that fires
//! wins, so a hit near an edge or corner is attributed to whichever axis is
//! listed first. The walls are thin and long, which makes the axis order
//! rarely matter in practice.
//!
//! Two passes are made over the same priority order:
//!
//! 1. **Center pass** - the sphere center lies on or beyond a face plane
//!    (`center.x <= min.x` -> Left, ...).
//! 2. **Extent pass** - the center has slipped inside the box but part of
//!    the sphere still pokes out through a face (`center.x - radius < min.x`
//!    -> Left, ...). The comparison is strict: a sphere resting flush on a
//!    face plane (the player on the floor at a wall's base) does not pierce it.
//!
//! If neither pass fires, the sphere is buried in the box and the result is
//! [`Face::None`]. Callers log that case and skip the response.

use std::fmt;

use glam::Vec3;

use super::collision::{Obstacle, PlayerProxy};

/// One of the six sides of a wall box, or `None` when unresolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// The `min.x` side
    Left,
    /// The `max.x` side
    Right,
    /// The `min.z` side
    Back,
    /// The `max.z` side
    Front,
    /// The `min.y` side
    Bottom,
    /// The `max.y` side
    Top,
    /// Deep penetration: no face could be attributed
    None,
}

impl Face {
    /// Faces in tie-break order. The first matching test wins.
    pub const PRIORITY: [Face; 6] = [
        Face::Left,
        Face::Right,
        Face::Back,
        Face::Front,
        Face::Bottom,
        Face::Top,
    ];

    /// Outward unit normal of the face. Zero for [`Face::None`].
    pub fn normal(self) -> Vec3 {
        match self {
            Face::Left => Vec3::NEG_X,
            Face::Right => Vec3::X,
            Face::Back => Vec3::NEG_Z,
            Face::Front => Vec3::Z,
            Face::Bottom => Vec3::NEG_Y,
            Face::Top => Vec3::Y,
            Face::None => Vec3::ZERO,
        }
    }

    /// True for the six real faces.
    pub fn is_resolved(self) -> bool {
        self != Face::None
    }

    /// Lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            Face::Left => "left",
            Face::Right => "right",
            Face::Back => "back",
            Face::Front => "front",
            Face::Bottom => "bottom",
            Face::Top => "top",
            Face::None => "none",
        }
    }

    /// Whether `point` is on or beyond this face's plane.
    fn reached_by(self, point: Vec3, obstacle: &Obstacle) -> bool {
        let (min, max) = (obstacle.min, obstacle.max);
        match self {
            Face::Left => point.x <= min.x,
            Face::Right => point.x >= max.x,
            Face::Back => point.z <= min.z,
            Face::Front => point.z >= max.z,
            Face::Bottom => point.y <= min.y,
            Face::Top => point.y >= max.y,
            Face::None => false,
        }
    }

    /// Whether a sphere at `center` sticks out strictly past this face's
    /// plane. Merely touching the plane does not count.
    fn pierced_by(self, center: Vec3, radius: f32, obstacle: &Obstacle) -> bool {
        let (min, max) = (obstacle.min, obstacle.max);
        match self {
            Face::Left => center.x - radius < min.x,
            Face::Right => center.x + radius > max.x,
            Face::Back => center.z - radius < min.z,
            Face::Front => center.z + radius > max.z,
            Face::Bottom => center.y - radius < min.y,
            Face::Top => center.y + radius > max.y,
            Face::None => false,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Determines which face of `obstacle` the proxy struck.
///
/// Only meaningful after an overlap has been reported for this pair.
pub fn classify(proxy: &PlayerProxy, obstacle: &Obstacle) -> Face {
    let radius = proxy.radius.max(0.0);
    Face::PRIORITY
        .into_iter()
        .find(|face| face.reached_by(proxy.center, obstacle))
        .or_else(|| {
            Face::PRIORITY
                .into_iter()
                .find(|face| face.pierced_by(proxy.center, radius, obstacle))
        })
        .unwrap_or(Face::None)
}
