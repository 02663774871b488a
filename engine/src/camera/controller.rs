//! Camera Controller Module
//!
//! Isometric orbit camera for the arena. Everything here is cosmetic view
//! state: yaw, pitch and zoom never feed back into movement or collision.
//! The camera only reads the proxy position to keep it as the orbit target.
//!
//! Zoom is a bounded cycle of four levels. Each level maps to one entry of
//! [`FOVY_TABLE`] (the near-plane width of the orthographic projection), and
//! stepping past the closest level wraps back to the farthest.

use glam::Vec3;

/// Orthographic near-plane width for each zoom level, farthest first.
pub const FOVY_TABLE: [f32; 4] = [20.0, 17.5, 15.0, 12.5];

/// Yaw change per step while the rotate keys are held, in degrees.
pub const CAMERA_ROTATE_SPEED: f32 = 1.25;

/// Starting yaw around the target, in degrees.
pub const DEFAULT_YAW_DEGREES: f32 = -135.0;

/// Starting pitch, in degrees (negative looks down).
pub const DEFAULT_PITCH_DEGREES: f32 = -45.0;

/// Orbit distance from target to eye.
pub const DEFAULT_ORBIT_DISTANCE: f32 = 100.0;

/// Discrete zoom levels, cycled by the zoom toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ZoomLevel {
    #[default]
    Far,
    Mid,
    Near,
    Closest,
}

impl ZoomLevel {
    /// All levels in cycle order.
    pub const ALL: [ZoomLevel; 4] = [
        ZoomLevel::Far,
        ZoomLevel::Mid,
        ZoomLevel::Near,
        ZoomLevel::Closest,
    ];

    fn index(self) -> usize {
        match self {
            ZoomLevel::Far => 0,
            ZoomLevel::Mid => 1,
            ZoomLevel::Near => 2,
            ZoomLevel::Closest => 3,
        }
    }

    /// The next level, wrapping from `Closest` back to `Far`.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Projection width for this level.
    pub fn fovy(self) -> f32 {
        FOVY_TABLE[self.index()]
    }
}

/// Orbit camera looking down at the player proxy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaCamera {
    /// Orbit target, kept on the proxy center
    pub target: Vec3,
    /// Horizontal orbit angle in degrees
    pub yaw_degrees: f32,
    /// Vertical angle in degrees
    pub pitch_degrees: f32,
    /// Eye distance from the target
    pub distance: f32,
    /// Current zoom level
    pub zoom: ZoomLevel,
}

impl Default for ArenaCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            yaw_degrees: DEFAULT_YAW_DEGREES,
            pitch_degrees: DEFAULT_PITCH_DEGREES,
            distance: DEFAULT_ORBIT_DISTANCE,
            zoom: ZoomLevel::Far,
        }
    }
}

impl ArenaCamera {
    /// Create a camera orbiting `target` with the default isometric angles.
    pub fn looking_at(target: Vec3) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }

    /// Keep the orbit centered on `target`.
    pub fn follow(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Rotate around the target, keeping yaw in `[-180, 180)`.
    pub fn rotate_yaw(&mut self, degrees: f32) {
        self.yaw_degrees = (self.yaw_degrees + degrees + 180.0).rem_euclid(360.0) - 180.0;
    }

    /// Apply one step of held rotate keys (-1 left, 0, 1 right).
    pub fn apply_yaw_input(&mut self, yaw_axis: i32) {
        if yaw_axis != 0 {
            self.rotate_yaw(yaw_axis as f32 * CAMERA_ROTATE_SPEED);
        }
    }

    /// Idle spin shown behind the start menu: half the normal rotate speed.
    pub fn menu_spin(&mut self) {
        self.rotate_yaw(CAMERA_ROTATE_SPEED * 0.5);
    }

    /// Step to the next zoom level and return it.
    pub fn cycle_zoom(&mut self) -> ZoomLevel {
        self.zoom = self.zoom.next();
        self.zoom
    }

    /// Current projection width.
    pub fn fovy(&self) -> f32 {
        self.zoom.fovy()
    }

    /// Eye position derived from target, angles and distance.
    pub fn eye(&self) -> Vec3 {
        let yaw = self.yaw_degrees.to_radians();
        let pitch = self.pitch_degrees.to_radians();
        let offset = Vec3::new(
            pitch.cos() * yaw.sin(),
            -pitch.sin(),
            pitch.cos() * yaw.cos(),
        );
        self.target + offset * self.distance
    }
}
