//! Collision system: one simulation step of the player against the walls.
//!
//! Wraps the movement controller and the low-level collision primitives
//! from [`crate::physics`] into a single per-step pipeline:
//!
//! 1. apply held yaw keys to the camera (view only)
//! 2. advance the velocity and move the proxy
//! 3. test the moved proxy against every wall
//! 4. for each overlap, classify the face, resolve, and feed the new
//!    velocity back into the controller
//!
//! Every overlap test of a step finishes before any velocity is written.
//! Pure game logic with no renderer dependencies.

use glam::Vec3;

use crate::game::diagnostics::CollisionObserver;
use crate::game::state::SimulationState;
use crate::input::InputFrame;
use crate::physics::{CollisionEvent, CollisionResolver, CollisionWorld, Face, ObstacleId, classify};

/// What happened during one step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// World-space displacement applied to the proxy
    pub displacement: Vec3,
    /// Every wall the moved proxy overlaps, in registration order
    pub contacts: Vec<ObstacleId>,
    /// Resolved hits, in the order they were applied
    pub events: Vec<CollisionEvent>,
    /// Overlapping walls with no classifiable face
    pub degenerate: Vec<ObstacleId>,
}

impl StepReport {
    /// True if the proxy touched any wall this step.
    pub fn collided(&self) -> bool {
        !self.contacts.is_empty()
    }
}

/// Stateless collision system that delegates to the physics primitives.
pub struct CollisionSystem;

impl CollisionSystem {
    /// Run one step of the motion and collision pipeline.
    ///
    /// When several walls overlap in the same step their responses are
    /// applied in registration order, each one starting from the velocity
    /// the previous one produced.
    pub fn step(
        state: &mut SimulationState,
        world: &CollisionWorld,
        resolver: &CollisionResolver,
        frame: &InputFrame,
        observer: &mut dyn CollisionObserver,
    ) -> StepReport {
        state.camera.apply_yaw_input(frame.movement.yaw_axis());

        let movement = state.movement.advance(&frame.movement);
        state.proxy.translate(movement.displacement);
        state.camera.follow(state.proxy.center);

        let hits: Vec<_> = world
            .test_all(&state.proxy)
            .filter(|contact| contact.overlaps)
            .map(|contact| (contact.id, classify(&state.proxy, contact.obstacle)))
            .collect();

        let mut report = StepReport {
            displacement: movement.displacement,
            contacts: hits.iter().map(|(id, _)| *id).collect(),
            ..StepReport::default()
        };

        for (id, face) in hits {
            if face == Face::None {
                observer.on_degenerate(id, &state.proxy);
                report.degenerate.push(id);
                continue;
            }

            let resolution = resolver.resolve(&state.proxy, id, state.movement.velocity(), face);
            state.movement.apply_response(resolution.velocity);
            observer.on_collision(&resolution.event);
            report.events.push(resolution.event);
        }

        report
    }
}
