//! Arena Configuration
//!
//! Everything needed to start a simulation: movement tuning, the proxy's
//! size and spawn point, the wall list, and the bounce response. Loaded once
//! at startup and immutable afterwards.
//!
//! The JSON form mirrors the struct one-to-one. Vectors are `[x, y, z]`
//! arrays. Missing top-level fields fall back to the default arena; unknown
//! fields are rejected.
//!
//! ```json
//! {
//!   "player_radius": 0.25,
//!   "spawn": [0.0, 0.25, 0.0],
//!   "walls": [
//!     { "center": [-16.0, 2.5, 0.0], "size": [1.0, 5.0, 32.0], "color": "blue" }
//!   ],
//!   "bounce": "negate"
//! }
//! ```

use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::physics::{BounceResponse, ObstacleError};
use crate::player::{MovementTuning, TuningError};
use crate::world::{ArenaLayout, PLAYER_RADIUS, PLAYER_SPAWN, Wall, WallColor, default_walls};

/// Error type for loading and validating an [`ArenaConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// Malformed JSON or unexpected fields.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Movement tuning out of range.
    #[error(transparent)]
    Tuning(#[from] TuningError),
    /// A wall box is inverted or non-finite.
    #[error(transparent)]
    Obstacle(#[from] ObstacleError),
    /// Proxy radius is zero, negative, or not finite.
    #[error("player_radius must be finite and positive, got {0}")]
    InvalidRadius(f32),
    /// Spawn point has a NaN or infinite coordinate.
    #[error("spawn must be finite, got {0}")]
    NonFiniteSpawn(Vec3),
}

/// One wall as written in the config file.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WallConfig {
    /// Box center
    pub center: Vec3,
    /// Full edge lengths
    pub size: Vec3,
    /// Display tint
    pub color: WallColor,
}

impl From<&Wall> for WallConfig {
    fn from(wall: &Wall) -> Self {
        Self {
            center: wall.obstacle.center(),
            size: wall.obstacle.size(),
            color: wall.color,
        }
    }
}

impl From<&WallConfig> for Wall {
    fn from(config: &WallConfig) -> Self {
        Wall::new(config.center, config.size, config.color)
    }
}

/// Central configuration for one arena run.
///
/// `Default` is the three-wall arena with the stock tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArenaConfig {
    /// Movement rates and limits
    pub tuning: MovementTuning,
    /// Proxy sphere radius (world units)
    pub player_radius: f32,
    /// Proxy start position
    pub spawn: Vec3,
    /// Walls in registration order
    pub walls: Vec<WallConfig>,
    /// Velocity response on impact
    pub bounce: BounceResponse,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            tuning: MovementTuning::default(),
            player_radius: PLAYER_RADIUS,
            spawn: PLAYER_SPAWN,
            walls: default_walls().iter().map(WallConfig::from).collect(),
            bounce: BounceResponse::default(),
        }
    }
}

impl ArenaConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Pretty JSON, suitable for `--dump-config`.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks tuning, proxy and every wall.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tuning.validate()?;
        if !self.player_radius.is_finite() || self.player_radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.player_radius));
        }
        if !self.spawn.is_finite() {
            return Err(ConfigError::NonFiniteSpawn(self.spawn));
        }
        for (index, wall) in self.walls.iter().enumerate() {
            Wall::from(wall).obstacle.validate(index)?;
        }
        Ok(())
    }

    /// Arena geometry described by this config.
    pub fn layout(&self) -> ArenaLayout {
        ArenaLayout {
            walls: self.walls.iter().map(Wall::from).collect(),
            spawn: self.spawn,
            player_radius: self.player_radius,
            ..ArenaLayout::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ArenaConfig::default();
        config.validate().unwrap();
        assert_eq!(config.walls.len(), 3);
        assert_eq!(config.bounce, BounceResponse::Negate);
        assert_eq!(config.layout().walls, default_walls());
    }

    #[test]
    fn test_json_roundtrip_default() {
        let config = ArenaConfig::default();
        let json = config.to_json_pretty().unwrap();
        let parsed = ArenaConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ArenaConfig::from_json_str(r#"{ "bounce": "reflect" }"#).unwrap();
        assert_eq!(config.bounce, BounceResponse::Reflect);
        assert_eq!(config.player_radius, PLAYER_RADIUS);
        assert_eq!(config.walls.len(), 3);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = ArenaConfig::from_json_str(r#"{ "gravity": 9.8 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Serde(_)));
    }

    #[test]
    fn test_inverted_wall_rejected() {
        let json = r#"{
            "walls": [
                { "center": [0.0, 0.0, 0.0], "size": [1.0, 1.0, 1.0], "color": "gray" },
                { "center": [0.0, 0.0, 0.0], "size": [-1.0, 1.0, 1.0], "color": "blue" }
            ]
        }"#;
        let err = ArenaConfig::from_json_str(json).unwrap_err();
        match err {
            ConfigError::Obstacle(ObstacleError::InvertedBounds { index, axis, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(axis, 'x');
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_radius_and_tuning_rejected() {
        let config = ArenaConfig {
            player_radius: 0.0,
            ..ArenaConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRadius(_))));

        let json = r#"{ "tuning": {
            "acceleration": -0.01, "deceleration": 0.025, "friction_factor": 2.75,
            "max_speed": 0.1, "step_scale": 1.0
        } }"#;
        assert!(matches!(
            ArenaConfig::from_json_str(json),
            Err(ConfigError::Tuning(TuningError::NotPositive { field: "acceleration", .. }))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ArenaConfig::load("/nonexistent/arena.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
