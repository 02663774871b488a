//! Collision diagnostics.
//!
//! The simulation never prints. Each resolved hit and each contact that
//! could not be attributed to a face is handed to a [`CollisionObserver`];
//! what happens next (log, record, drop) is the observer's business.

use tracing::{debug, warn};

use crate::physics::{CollisionEvent, ObstacleId, PlayerProxy};

/// `tracing` target used for every collision report.
pub const COLLISION_LOG_TARGET: &str = "walled_arena::collision";

/// Sink for per-step collision diagnostics.
pub trait CollisionObserver {
    /// A wall hit was resolved.
    fn on_collision(&mut self, event: &CollisionEvent);

    /// The proxy overlaps `obstacle_id` but no face could be determined
    /// (the sphere is buried inside the box). Velocity was left untouched.
    fn on_degenerate(&mut self, obstacle_id: ObstacleId, proxy: &PlayerProxy);
}

/// Writes each report line through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CollisionObserver for TracingObserver {
    fn on_collision(&mut self, event: &CollisionEvent) {
        for line in event.report_lines() {
            debug!(target: COLLISION_LOG_TARGET, "{line}");
        }
        if event.angle_clamped {
            warn!(
                target: COLLISION_LOG_TARGET,
                obstacle = %event.obstacle_id,
                face = %event.face,
                "incidence angle input out of range, clamped"
            );
        }
    }

    fn on_degenerate(&mut self, obstacle_id: ObstacleId, proxy: &PlayerProxy) {
        warn!(
            target: COLLISION_LOG_TARGET,
            obstacle = %obstacle_id,
            center = %proxy.center,
            radius = proxy.radius,
            "overlap with no classifiable face, velocity unchanged"
        );
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl CollisionObserver for NullObserver {
    fn on_collision(&mut self, _event: &CollisionEvent) {}

    fn on_degenerate(&mut self, _obstacle_id: ObstacleId, _proxy: &PlayerProxy) {}
}

/// Keeps every callback in memory. Used by tests and by the headless runner
/// to count hits.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    /// Resolved hits, in emission order
    pub events: Vec<CollisionEvent>,
    /// Obstacles reported as degenerate contacts
    pub degenerate: Vec<ObstacleId>,
}

impl RecordingObserver {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
        self.degenerate.clear();
    }
}

impl CollisionObserver for RecordingObserver {
    fn on_collision(&mut self, event: &CollisionEvent) {
        self.events.push(*event);
    }

    fn on_degenerate(&mut self, obstacle_id: ObstacleId, _proxy: &PlayerProxy) {
        self.degenerate.push(obstacle_id);
    }
}
