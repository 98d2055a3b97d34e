//! Physics Module
//!
//! Quake-style player movement physics: friction and acceleration on the
//! ground, high-acceleration air control, gravity, a flat ground plane at
//! y = 0, and hard world bounds.

pub mod movement;
pub mod types;

pub use movement::{
    ACCELERATION, AIR_ACCELERATION, FRICTION, GRAVITY, JUMP_FORCE, MOVE_SPEED, STOPSPEED,
    MovementConfig, MovementState,
};
pub use types::Vec3;
