//! Collision response
//!
//! Turns a classified wall hit into a post-impact velocity and a
//! [`CollisionEvent`] describing it. Resolution never fails and never moves
//! the proxy: a sphere left inside a wall is carried back out by the next
//! step's velocity.
//!
//! # Response modes
//!
//! - [`BounceResponse::Negate`] (default): both velocity components flip sign,
//!   whatever face was hit.
//! - [`BounceResponse::Reflect`]: mirror reflection about the wall normal on
//!   the ground plane, `v' = v - 2(v.n)n`. Hits on the top or bottom faces
//!   leave the planar velocity untouched.
//!
//! # Incidence angle
//!
//! The event carries an approach-angle diagnostic: `(center - velocity)` is
//! normalized as the incoming direction, dotted with the face normal, and
//! passed through `asin`. The dot product is clamped into `[-1, 1]` first;
//! when that clamp changes the value (or the input is not finite) the event
//! is flagged. The angle is informational and does not feed the response.

use serde::{Deserialize, Serialize};

use super::collision::{ObstacleId, PlayerProxy};
use super::face::Face;
use super::types::Velocity2D;

/// How a wall hit changes the proxy velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BounceResponse {
    /// Negate both components (full elastic bounce straight back)
    #[default]
    Negate,
    /// Mirror about the struck face's normal in the ground plane
    Reflect,
}

/// Description of one resolved wall hit.
///
/// Produced once per step per active collision and handed to a diagnostics
/// observer; never stored by the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    /// Wall that was hit
    pub obstacle_id: ObstacleId,
    /// Face the hit was attributed to
    pub face: Face,
    /// Velocity entering the resolver
    pub velocity_before: Velocity2D,
    /// Velocity leaving the resolver
    pub velocity_after: Velocity2D,
    /// Approach angle against the face normal, in degrees
    pub incidence_angle_degrees: f32,
    /// Set when the `asin` input had to be clamped or was not finite
    pub angle_clamped: bool,
}

impl CollisionEvent {
    /// Human-readable report, one fact per line.
    pub fn report_lines(&self) -> [String; 4] {
        [
            format!(
                "collision with obstacle {} on {} face",
                self.obstacle_id, self.face
            ),
            format!(
                "velocity before: ({:.4}, {:.4})",
                self.velocity_before.x, self.velocity_before.y
            ),
            format!(
                "velocity after: ({:.4}, {:.4})",
                self.velocity_after.x, self.velocity_after.y
            ),
            format!(
                "incidence angle: {:.2} deg{}",
                self.incidence_angle_degrees,
                if self.angle_clamped { " (clamped)" } else { "" }
            ),
        ]
    }
}

/// Output of [`CollisionResolver::resolve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Post-impact velocity
    pub velocity: Velocity2D,
    /// Event describing the impact
    pub event: CollisionEvent,
}

/// Stateless collision response.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollisionResolver {
    /// Response rule applied to the velocity
    pub response: BounceResponse,
}

impl CollisionResolver {
    /// Creates a resolver with the given response rule.
    pub fn new(response: BounceResponse) -> Self {
        Self { response }
    }

    /// Computes the post-impact velocity for a hit on `face`.
    ///
    /// Callers only invoke this after a confirmed overlap with a resolved
    /// face; for [`Face::None`] the normal is zero and `Reflect` degrades to
    /// identity.
    pub fn resolve(
        &self,
        proxy: &PlayerProxy,
        obstacle_id: ObstacleId,
        velocity: Velocity2D,
        face: Face,
    ) -> Resolution {
        let (incidence_angle_degrees, angle_clamped) = incidence_angle(proxy, velocity, face);

        let after = match self.response {
            BounceResponse::Negate => velocity.negated(),
            BounceResponse::Reflect => reflect(velocity, face),
        };

        Resolution {
            velocity: after,
            event: CollisionEvent {
                obstacle_id,
                face,
                velocity_before: velocity,
                velocity_after: after,
                incidence_angle_degrees,
                angle_clamped,
            },
        }
    }
}

/// Mirror `velocity` about the face normal, restricted to the ground plane.
pub fn reflect(velocity: Velocity2D, face: Face) -> Velocity2D {
    let n = face.normal();
    let n = Velocity2D::from_ground_plane(n);
    let dot = velocity.x * n.x + velocity.y * n.y;
    Velocity2D::new(velocity.x - 2.0 * dot * n.x, velocity.y - 2.0 * dot * n.y)
}

/// Approach angle in degrees plus a flag for a clamped/non-finite `asin` input.
pub fn incidence_angle(proxy: &PlayerProxy, velocity: Velocity2D, face: Face) -> (f32, bool) {
    let incoming = proxy.center - velocity.to_ground_plane();
    if !incoming.is_finite() {
        return (0.0, true);
    }

    clamped_asin_degrees(incoming.normalize_or_zero().dot(face.normal()))
}

/// `asin` in degrees with the input clamped into `[-1, 1]`. The flag is set
/// when the clamp changed the value.
pub fn clamped_asin_degrees(dot: f32) -> (f32, bool) {
    let clamped = dot.clamp(-1.0, 1.0);
    (clamped.asin().to_degrees(), clamped != dot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn scenario_proxy() -> PlayerProxy {
        PlayerProxy::new(Vec3::new(-16.4, 2.0, 0.0), 0.5)
    }

    #[test]
    fn test_negate_flips_both_components() {
        let resolver = CollisionResolver::default();
        let out = resolver.resolve(
            &scenario_proxy(),
            ObstacleId(0),
            Velocity2D::new(1.0, 0.3),
            Face::Left,
        );
        assert_eq!(out.velocity, Velocity2D::new(-1.0, -0.3));
        assert_eq!(out.event.velocity_before, Velocity2D::new(1.0, 0.3));
        assert_eq!(out.event.velocity_after, out.velocity);
        assert_eq!(out.event.face, Face::Left);
        assert_eq!(out.event.obstacle_id, ObstacleId(0));
    }

    #[test]
    fn test_negate_ignores_face() {
        let resolver = CollisionResolver::default();
        let v = Velocity2D::new(0.05, -0.08);
        for face in Face::PRIORITY {
            let out = resolver.resolve(&scenario_proxy(), ObstacleId(2), v, face);
            assert_eq!(out.velocity, v.negated());
        }
    }

    #[test]
    fn test_double_resolve_restores_velocity() {
        let resolver = CollisionResolver::default();
        let proxy = scenario_proxy();
        let v = Velocity2D::new(0.07, -0.01);
        let once = resolver.resolve(&proxy, ObstacleId(0), v, Face::Right);
        let twice = resolver.resolve(&proxy, ObstacleId(0), once.velocity, Face::Right);
        assert_eq!(twice.velocity, v);
    }

    #[test]
    fn test_reflect_only_flips_normal_component() {
        let v = Velocity2D::new(0.08, 0.03);
        assert_eq!(reflect(v, Face::Left), Velocity2D::new(-0.08, 0.03));
        assert_eq!(reflect(v, Face::Front), Velocity2D::new(0.08, -0.03));
        assert_eq!(reflect(v, Face::Top), v);
        assert_eq!(reflect(v, Face::None), v);
    }

    #[test]
    fn test_incidence_angle_is_finite_and_bounded() {
        let (angle, clamped) =
            incidence_angle(&scenario_proxy(), Velocity2D::new(1.0, 0.3), Face::Left);
        assert!(angle.is_finite());
        assert!((-90.0..=90.0).contains(&angle));
        assert!(!clamped);
    }

    #[test]
    fn test_incidence_angle_head_on() {
        // incoming direction exactly along -X against the left face normal
        let proxy = PlayerProxy::new(Vec3::new(-2.0, 0.0, 0.0), 0.5);
        let (angle, _) = incidence_angle(&proxy, Velocity2D::ZERO, Face::Left);
        assert!((angle - 90.0).abs() < 1e-3, "got {angle}");
    }

    #[test]
    fn test_non_finite_input_is_flagged() {
        let proxy = PlayerProxy::new(Vec3::new(f32::NAN, 0.0, 0.0), 0.5);
        let (angle, clamped) = incidence_angle(&proxy, Velocity2D::ZERO, Face::Left);
        assert_eq!(angle, 0.0);
        assert!(clamped);
    }

    #[test]
    fn test_out_of_range_asin_input_is_clamped_and_flagged() {
        let (angle, clamped) = clamped_asin_degrees(1.0 + f32::EPSILON);
        assert!((angle - 90.0).abs() < 1e-4, "got {angle}");
        assert!(clamped);

        let (angle, clamped) = clamped_asin_degrees(-1.0 - f32::EPSILON);
        assert!((angle + 90.0).abs() < 1e-4, "got {angle}");
        assert!(clamped);

        let (angle, clamped) = clamped_asin_degrees(0.5);
        assert!((angle - 30.0).abs() < 1e-4, "got {angle}");
        assert!(!clamped);
    }

    #[test]
    fn test_report_lines() {
        let out = CollisionResolver::default().resolve(
            &scenario_proxy(),
            ObstacleId(1),
            Velocity2D::new(1.0, 0.3),
            Face::Left,
        );
        let lines = out.event.report_lines();
        assert_eq!(lines[0], "collision with obstacle #1 on left face");
        assert_eq!(lines[1], "velocity before: (1.0000, 0.3000)");
        assert_eq!(lines[2], "velocity after: (-1.0000, -0.3000)");
        assert!(lines[3].starts_with("incidence angle: "));
    }
}
