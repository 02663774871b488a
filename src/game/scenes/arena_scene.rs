//! Arena Scene
//!
//! Owns the simulation state, the collision world and the resolver, and runs
//! them on a fixed-rate loop. The host calls [`ArenaScene::update`] once per
//! rendered frame with the elapsed time and the sampled input, then reads a
//! [`SceneSnapshot`] back to draw.
//!
//! Edge-triggered inputs (confirm, pause, zoom) are applied once per call,
//! before any fixed step runs. Held movement keys apply to every fixed step
//! of that call.

use tracing::{debug, info};

use crate::camera::ArenaCamera;
use crate::game::config::{ArenaConfig, ConfigError};
use crate::game::diagnostics::CollisionObserver;
use crate::game::state::{GamePhase, SimulationState};
use crate::game::systems::{CollisionSystem, StepReport};
use crate::input::InputFrame;
use crate::physics::{CollisionResolver, CollisionWorld, Obstacle, ObstacleId, PlayerProxy, Velocity2D};
use crate::world::{ArenaLayout, WallColor};

/// Length of one simulation step in seconds.
pub const FIXED_STEP_S: f32 = 1.0 / 60.0;
/// Upper bound on catch-up steps per `update` call.
pub const MAX_FIXED_STEPS_PER_FRAME: usize = 8;
/// Accumulated time is capped just above the catch-up budget so a long
/// frame always yields exactly `MAX_FIXED_STEPS_PER_FRAME` steps.
const MAX_ACCUMULATED_S: f32 = FIXED_STEP_S * (MAX_FIXED_STEPS_PER_FRAME as f32 + 0.5);

/// One wall as the renderer should draw it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSnapshot {
    /// Wall box
    pub obstacle: Obstacle,
    /// Display tint
    pub color: WallColor,
    /// Touched by the proxy on the last step
    pub colliding: bool,
}

/// Read-only view of the scene after an update.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSnapshot {
    /// Player sphere
    pub proxy: PlayerProxy,
    /// Player velocity
    pub velocity: Velocity2D,
    /// View camera
    pub camera: ArenaCamera,
    /// Current phase
    pub phase: GamePhase,
    /// Ground edge length
    pub ground_size: f32,
    /// All walls in registration order
    pub walls: Vec<WallSnapshot>,
    /// Steps simulated so far
    pub steps: u64,
    /// Resolved hits so far
    pub collisions: u64,
}

/// Fixed-rate arena simulation.
pub struct ArenaScene {
    state: SimulationState,
    layout: ArenaLayout,
    world: CollisionWorld,
    resolver: CollisionResolver,
    accumulator_s: f32,
    last_contacts: Vec<ObstacleId>,
    collisions: u64,
}

impl ArenaScene {
    /// Build a scene from a config. Refuses to start on invalid config.
    pub fn new(config: ArenaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let layout = config.layout();
        let world = layout.collision_world()?;
        let state = SimulationState::new(layout.spawn_proxy(), config.tuning)?;

        info!(
            walls = world.len(),
            radius = layout.player_radius,
            bounce = ?config.bounce,
            "arena scene ready"
        );

        Ok(Self {
            state,
            layout,
            world,
            resolver: CollisionResolver::new(config.bounce),
            accumulator_s: 0.0,
            last_contacts: Vec::new(),
            collisions: 0,
        })
    }

    /// Current state (read-only).
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Current phase.
    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// The static wall set.
    pub fn world(&self) -> &CollisionWorld {
        &self.world
    }

    /// Per-frame update: apply toggles, then run as many fixed steps as the
    /// accumulated time allows. Returns the number of steps run.
    pub fn update(
        &mut self,
        delta: f32,
        frame: &InputFrame,
        observer: &mut dyn CollisionObserver,
    ) -> usize {
        self.apply_toggles(frame);

        if self.state.phase == GamePhase::Paused {
            self.accumulator_s = 0.0;
            return 0;
        }

        let delta = delta.max(0.0);
        self.accumulator_s = (self.accumulator_s + delta).min(MAX_ACCUMULATED_S);

        let held = InputFrame::holding(frame.movement);
        let mut steps = 0usize;
        while self.accumulator_s >= FIXED_STEP_S && steps < MAX_FIXED_STEPS_PER_FRAME {
            self.fixed_step(&held, observer);
            self.accumulator_s -= FIXED_STEP_S;
            steps += 1;
        }
        steps
    }

    /// Apply toggles and run exactly one step. Returns the step report when
    /// the simulation actually advanced (i.e. while playing).
    pub fn step(
        &mut self,
        frame: &InputFrame,
        observer: &mut dyn CollisionObserver,
    ) -> Option<StepReport> {
        self.apply_toggles(frame);
        self.fixed_step(&InputFrame::holding(frame.movement), observer)
    }

    /// Read-only view for the renderer.
    pub fn snapshot(&self) -> SceneSnapshot {
        let walls = self
            .layout
            .walls
            .iter()
            .enumerate()
            .map(|(index, wall)| WallSnapshot {
                obstacle: wall.obstacle,
                color: wall.color,
                colliding: self.last_contacts.contains(&ObstacleId(index)),
            })
            .collect();

        SceneSnapshot {
            proxy: self.state.proxy,
            velocity: self.state.movement.velocity(),
            camera: self.state.camera,
            phase: self.state.phase,
            ground_size: self.layout.ground_size,
            walls,
            steps: self.state.steps,
            collisions: self.collisions,
        }
    }

    fn apply_toggles(&mut self, frame: &InputFrame) {
        let before = self.state.phase;
        self.state.phase = before.next(frame);
        if self.state.phase != before {
            debug!(from = ?before, to = ?self.state.phase, "phase change");
        }

        if self.state.phase.is_running() && frame.cycle_zoom {
            let zoom = self.state.camera.cycle_zoom();
            debug!(?zoom, fovy = zoom.fovy(), "zoom cycled");
        }
    }

    fn fixed_step(
        &mut self,
        frame: &InputFrame,
        observer: &mut dyn CollisionObserver,
    ) -> Option<StepReport> {
        match self.state.phase {
            GamePhase::Menu => {
                self.state.camera.menu_spin();
                None
            }
            GamePhase::Paused => None,
            GamePhase::Playing => {
                let report = CollisionSystem::step(
                    &mut self.state,
                    &self.world,
                    &self.resolver,
                    frame,
                    observer,
                );
                self.state.steps += 1;
                self.collisions += report.events.len() as u64;
                self.last_contacts.clone_from(&report.contacts);
                Some(report)
            }
        }
    }
}
