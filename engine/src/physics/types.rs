//! Physics type re-exports from glam, plus the planar velocity type.
//!
//! Positions and displacements are plain `glam::Vec3`. The player's velocity
//! only ever lives on the ground plane, so it gets its own two-component type
//! instead of a `Vec3` with a dead vertical slot.

pub use glam::{Vec2, Vec3};

/// Ground-plane velocity of the player proxy, in world units per step.
///
/// Axis convention:
/// - `x` is the forward/back component and maps to world +X
/// - `y` is the right/left component and maps to world +Z
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Velocity2D {
    /// Forward (+) / back (-) component
    pub x: f32,
    /// Right (+) / left (-) component
    pub y: f32,
}

static_assertions::assert_eq_size!(Velocity2D, [f32; 2]);

impl Velocity2D {
    /// The resting velocity.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a velocity from its two components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Lift the velocity into world space. The vertical component is always zero.
    pub fn to_ground_plane(self) -> Vec3 {
        Vec3::new(self.x, 0.0, self.y)
    }

    /// Project a world-space vector onto the ground plane (drops Y).
    pub fn from_ground_plane(v: Vec3) -> Self {
        Self::new(v.x, v.z)
    }

    /// Both components negated.
    pub fn negated(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Largest absolute component.
    pub fn max_abs_component(self) -> f32 {
        self.x.abs().max(self.y.abs())
    }

    /// True when both components are exactly zero.
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl From<Velocity2D> for Vec2 {
    fn from(v: Velocity2D) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec2> for Velocity2D {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_plane_mapping() {
        let v = Velocity2D::new(1.5, -0.5);
        assert_eq!(v.to_ground_plane(), Vec3::new(1.5, 0.0, -0.5));
        assert_eq!(Velocity2D::from_ground_plane(Vec3::new(1.5, 9.0, -0.5)), v);
    }

    #[test]
    fn test_negated_twice_is_identity() {
        let v = Velocity2D::new(0.07, -0.02);
        assert_eq!(v.negated().negated(), v);
    }

    #[test]
    fn test_max_abs_component() {
        assert_eq!(Velocity2D::new(-0.3, 0.1).max_abs_component(), 0.3);
        assert!(Velocity2D::ZERO.is_zero());
    }
}
