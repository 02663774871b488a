//! Scene Module
//!
//! High-level scene compositions that wire together all game systems.

pub mod arena_scene;

pub use arena_scene::{
    ArenaScene, FIXED_STEP_S, MAX_FIXED_STEPS_PER_FRAME, SceneSnapshot, WallSnapshot,
};
