//! Input Module
//!
//! Platform-agnostic input handling. The host window forwards key events;
//! the simulation only ever sees one [`InputFrame`] per step.
//!
//! # Example
//!
//! ```rust,ignore
//! use walled_arena_engine::input::{KeyboardState, KeyCode};
//!
//! let mut keyboard = KeyboardState::new();
//!
//! // From the window event loop
//! keyboard.handle_key(KeyCode::W, true);
//!
//! // Once per simulation step
//! let frame = keyboard.sample();
//! if frame.movement.forward {
//!     // accelerate forward
//! }
//! ```

pub mod bindings;
pub mod keyboard;

// Re-export commonly used types at module level
pub use bindings::{InputAction, KeyBindings};
pub use keyboard::{InputFrame, KeyCode, KeyboardState, MovementKeys};
