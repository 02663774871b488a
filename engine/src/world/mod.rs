//! World Module
//!
//! Static arena geometry and spawn configuration.
//!
//! ## Default World
//! A 32x32 ground plane walled on the -X, +X and +Z edges.

pub mod arena;

pub use arena::{
    ArenaLayout, GROUND_SIZE, PLAYER_CUBE_DIMENSIONS, PLAYER_RADIUS, PLAYER_SPAWN, WALL_HEIGHT,
    Wall, WallColor, default_walls,
};
