//! Arena Layout Module
//!
//! The walled arena: a flat 32x32 ground plane closed on three sides by
//! tall thin walls. The fourth side is open.
//!
//! ## Coordinates
//! - Ground is centered on the origin at Y = 0
//! - Walls stand on the ground, 5 units tall
//! - The proxy spawns at the origin, resting on the ground

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::physics::{CollisionWorld, Obstacle, ObstacleError, PlayerProxy};

/// Edge length of the player cube drawn at the proxy center.
pub const PLAYER_CUBE_DIMENSIONS: f32 = 0.5;

/// Default collision radius: the cube's half extent.
pub const PLAYER_RADIUS: f32 = PLAYER_CUBE_DIMENSIONS / 2.0;

/// Default spawn point (cube resting on the ground).
pub const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, PLAYER_CUBE_DIMENSIONS / 2.0, 0.0);

/// Ground plane edge length (X and Z).
pub const GROUND_SIZE: f32 = 32.0;

/// Wall height shared by the default walls.
pub const WALL_HEIGHT: f32 = 5.0;

/// Display tint of a wall. Only the renderer cares about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallColor {
    Blue,
    Lime,
    Gold,
    Gray,
}

/// One wall of the arena.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    /// Collision box
    pub obstacle: Obstacle,
    /// Display tint
    pub color: WallColor,
}

impl Wall {
    /// Build a wall from its center and full size.
    pub fn new(center: Vec3, size: Vec3, color: WallColor) -> Self {
        Self {
            obstacle: Obstacle::from_center_size(center, size),
            color,
        }
    }
}

/// Static geometry of the arena plus the proxy's starting state.
#[derive(Debug, Clone, PartialEq)]
pub struct ArenaLayout {
    /// Ground plane edge length
    pub ground_size: f32,
    /// Walls in registration order
    pub walls: Vec<Wall>,
    /// Proxy start position
    pub spawn: Vec3,
    /// Proxy collision radius
    pub player_radius: f32,
}

impl Default for ArenaLayout {
    fn default() -> Self {
        Self {
            ground_size: GROUND_SIZE,
            walls: default_walls(),
            spawn: PLAYER_SPAWN,
            player_radius: PLAYER_RADIUS,
        }
    }
}

impl ArenaLayout {
    /// Proxy at the spawn point.
    pub fn spawn_proxy(&self) -> PlayerProxy {
        PlayerProxy::new(self.spawn, self.player_radius)
    }

    /// Register every wall, in order, into a collision world.
    pub fn collision_world(&self) -> Result<CollisionWorld, ObstacleError> {
        CollisionWorld::new(self.walls.iter().map(|wall| wall.obstacle).collect())
    }

    /// Half the ground edge: the playable extent from the origin.
    pub fn half_extent(&self) -> f32 {
        self.ground_size * 0.5
    }
}

/// The three default walls: blue on -X, lime on +X, gold on +Z.
pub fn default_walls() -> Vec<Wall> {
    let half = GROUND_SIZE * 0.5;
    let y = WALL_HEIGHT * 0.5;
    vec![
        Wall::new(
            Vec3::new(-half, y, 0.0),
            Vec3::new(1.0, WALL_HEIGHT, GROUND_SIZE),
            WallColor::Blue,
        ),
        Wall::new(
            Vec3::new(half, y, 0.0),
            Vec3::new(1.0, WALL_HEIGHT, GROUND_SIZE),
            WallColor::Lime,
        ),
        Wall::new(
            Vec3::new(0.0, y, half),
            Vec3::new(GROUND_SIZE, WALL_HEIGHT, 1.0),
            WallColor::Gold,
        ),
    ]
}
