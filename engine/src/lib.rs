//! Walled Arena Engine Library
//!
//! Per-step motion and collision core for a sphere proxy moving on a ground
//! plane inside an arena of static axis-aligned walls. Rendering and the
//! window system live outside this crate; they feed key events in and read
//! a snapshot back out.
//!
//! # Modules
//!
//! - [`input`] - Platform-agnostic keyboard state and per-step input frames
//! - [`player`] - Acceleration/deceleration/friction movement controller
//! - [`physics`] - Sphere-AABB overlap, face classification, bounce response
//! - [`camera`] - View-only orbit camera with a cyclic zoom
//! - [`world`] - Arena layout (ground, walls, spawn)
//! - [`game`] - Configuration, diagnostics, per-step pipeline and scene loop
//!
//! # Example
//!
//! ```ignore
//! use walled_arena_engine::game::{ArenaConfig, ArenaScene, TracingObserver};
//! use walled_arena_engine::input::{KeyCode, KeyboardState};
//!
//! let mut scene = ArenaScene::new(ArenaConfig::default())?;
//! let mut keyboard = KeyboardState::new();
//! let mut observer = TracingObserver;
//!
//! // From the window event loop
//! keyboard.handle_key(KeyCode::Enter, true);
//! keyboard.handle_key(KeyCode::W, true);
//!
//! // Once per rendered frame
//! let frame = keyboard.sample();
//! scene.update(delta_seconds, &frame, &mut observer);
//! let snapshot = scene.snapshot();
//! ```

pub mod camera;
pub mod input;
pub mod physics;
pub mod player;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used input types
pub use input::{InputFrame, KeyCode, KeyboardState, MovementKeys};
// Re-export player types
pub use player::{MovementController, MovementTuning};
// Re-export physics types
pub use physics::{CollisionResolver, CollisionWorld, Face, PlayerProxy, Velocity2D};
// Re-export world types for convenience
pub use world::{ArenaLayout, WallColor};
