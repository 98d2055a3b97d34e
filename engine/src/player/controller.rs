//! Player Controller
//!
//! Thin session-level wrapper around the movement integrator. One instance
//! per player; instances share no state, so concurrent updates for
//! different players are safe as long as each keeps its own controller.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dustline_engine::player::PlayerController;
//!
//! let mut player = PlayerController::new();
//!
//! // Each frame (dt pre-clamped by the driving loop):
//! position = player.update(position, &intent, camera.yaw, dt);
//! ```

use glam::Vec3;

use crate::input::InputIntent;
use crate::physics::{MovementConfig, MovementState};

/// Long-lived per-player movement controller.
///
/// Owns the velocity/grounded state exclusively; only [`update`] mutates it.
/// The player position stays caller-owned and is passed by value each tick.
///
/// [`update`]: PlayerController::update
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerController {
    config: MovementConfig,
    state: MovementState,
}

impl PlayerController {
    /// Create a controller with the standard movement tuning, zero velocity,
    /// airborne.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with custom movement tuning.
    pub fn with_config(config: MovementConfig) -> Self {
        Self {
            config,
            state: MovementState::new(),
        }
    }

    /// Advance one simulation tick and return the next position.
    ///
    /// `dt` is assumed pre-clamped by the driving loop (<= 0.1s).
    pub fn update(&mut self, position: Vec3, input: &InputIntent, yaw: f32, dt: f32) -> Vec3 {
        self.config.step(&mut self.state, position, input, yaw, dt)
    }

    /// Current velocity in world space.
    pub fn velocity(&self) -> Vec3 {
        self.state.velocity
    }

    /// Whether the player is resting on the ground plane.
    pub fn is_grounded(&self) -> bool {
        self.state.grounded
    }

    /// Current horizontal speed (XZ plane), e.g. for a speedometer HUD.
    pub fn horizontal_speed(&self) -> f32 {
        self.state.horizontal_speed()
    }

    /// Borrow the movement tuning.
    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// Reset the movement state (respawn); position is the caller's to set.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
