//! Dustline Engine Library
//!
//! Core logic for a first-person-shooter prototype: a quake-style movement
//! model, platform-agnostic input intent, an FPS camera, and world bounds.
//! Rendering, raw input-event capture, and UI drawing are external
//! collaborators; this library is plain data and math with no windowing
//! or GPU dependency.
//!
//! # Modules
//!
//! - [`physics`] - Movement integrator (friction, acceleration, gravity, bounds)
//! - [`input`] - Platform-agnostic key codes and the per-tick input intent
//! - [`camera`] - FPS camera orientation (yaw/pitch) and eye placement
//! - [`player`] - Per-session player controller wrapping the integrator
//! - [`world`] - World bounds configuration
//!
//! # Example
//!
//! ```ignore
//! use dustline_engine::player::PlayerController;
//! use dustline_engine::input::InputIntent;
//! use glam::Vec3;
//!
//! let mut player = PlayerController::new();
//! let mut position = Vec3::new(0.0, 10.0, 0.0);
//! let mut intent = InputIntent::new();
//! intent.forward = true;
//!
//! // Each simulation tick (dt pre-clamped by the driving loop, <= 0.1s):
//! position = player.update(position, &intent, camera_yaw, dt);
//! ```

pub mod camera;
pub mod input;
pub mod physics;
pub mod player;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used types at crate level for convenience
pub use camera::FpsCamera;
pub use input::{InputIntent, KeyCode};
pub use physics::{MovementConfig, MovementState};
pub use player::PlayerController;
pub use world::WorldBounds;
