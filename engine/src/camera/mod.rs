//! Camera Module
//!
//! View-only camera state. Window-system agnostic: it only deals with
//! orbit angles, zoom level and the point being looked at.

pub mod controller;

pub use controller::{ArenaCamera, CAMERA_ROTATE_SPEED, FOVY_TABLE, ZoomLevel};
