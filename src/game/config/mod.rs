//! Config Module
//!
//! Startup configuration for the arena: layout, tuning and bounce response.

pub mod arena_config;

pub use arena_config::{ArenaConfig, ConfigError, WallConfig};
