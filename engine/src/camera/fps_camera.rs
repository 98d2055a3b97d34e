//! FPS Camera
//!
//! First-person camera controller: raw mouse deltas rotate the view
//! directly, with no button held and no smoothing. The yaw angle doubles as
//! the facing the movement integrator consumes; pitch only affects the view.
//!
//! Key features:
//! - Direct mouse input -> rotation (no smoothing, instant response)
//! - Configurable sensitivity (default: 0.002 rad/pixel)
//! - Pitch clamped to +/- 90 degrees
//! - Eye placement above the player position, lowered while crouching

use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

/// Eye height above the player position while standing
pub const STANDING_EYE_HEIGHT: f32 = 72.0;

/// Eye height above the player position while crouching
pub const CROUCH_EYE_HEIGHT: f32 = 36.0;

/// Default mouse sensitivity in radians per pixel
pub const DEFAULT_SENSITIVITY: f32 = 0.002;

/// FPS camera orientation state.
///
/// ## Usage
/// ```rust,ignore
/// let mut camera = FpsCamera::new();
///
/// // In your input loop, pass raw mouse delta (in pixels)
/// camera.apply_mouse_delta(mouse_dx, mouse_dy);
///
/// // Feed the yaw to the movement integrator, then place the eye
/// let eye = camera.eye_position(player_position, intent.crouch);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FpsCamera {
    /// Horizontal angle in radians - unrestricted, wraps around
    pub yaw: f32,
    /// Vertical angle in radians - clamped to +/- pi/2
    pub pitch: f32,
    /// Mouse sensitivity in radians per pixel
    pub sensitivity: f32,
}

impl Default for FpsCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

impl FpsCamera {
    /// Create a camera facing -Z with default sensitivity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a camera with custom sensitivity.
    pub fn with_sensitivity(sensitivity: f32) -> Self {
        Self {
            sensitivity,
            ..Default::default()
        }
    }

    /// Apply raw mouse movement (in pixels) to the orientation.
    ///
    /// Moving the mouse right turns the view right (decreasing yaw with the
    /// -Z-forward convention); moving it down looks down. Pitch is clamped
    /// to +/- 90 degrees, yaw is unrestricted.
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * self.sensitivity;
        self.pitch -= dy * self.sensitivity;
        self.pitch = self.pitch.clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    /// Eye position for a player standing at `position`.
    ///
    /// Crouching switches the offset instantly (no transition); the physics
    /// core never sees the eye height, only the camera does.
    pub fn eye_position(&self, position: Vec3, crouching: bool) -> Vec3 {
        let offset = if crouching {
            CROUCH_EYE_HEIGHT
        } else {
            STANDING_EYE_HEIGHT
        };
        position + Vec3::new(0.0, offset, 0.0)
    }

    /// Forward direction on the XZ plane (ignores pitch), matching the
    /// movement integrator's yaw convention: yaw 0 faces -Z.
    pub fn horizontal_forward(&self) -> Vec3 {
        let (sin, cos) = self.yaw.sin_cos();
        Vec3::new(-sin, 0.0, -cos)
    }
}
