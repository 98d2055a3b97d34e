//! Quake-Style Movement Integrator
//!
//! Velocity integration for a first-person player: ground friction and
//! acceleration, high-acceleration air control ("air strafing"), gravity,
//! a flat ground plane at y = 0, and hard world bounds on x/z.
//!
//! # Physics Model
//!
//! - Target move speed: 250 units/s
//! - Ground acceleration: 10 (per second, scaled by target speed)
//! - Air acceleration: 100 - deliberately much larger than ground
//!   acceleration so mid-air trajectory changes are strong
//! - Friction: 4, with current speed floored at STOPSPEED = 100 when
//!   computing the per-tick drop
//! - Gravity: 800 units/s^2
//! - Jump impulse: 300 units/s
//!
//! Because acceleration is capped per-direction (dot product against the
//! wish direction), strafing obliquely can exceed the nominal move speed.
//! That is the intended source-engine-style behavior, not a missing clamp.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dustline_engine::physics::{MovementConfig, MovementState};
//!
//! let config = MovementConfig::default();
//! let mut state = MovementState::new();
//!
//! // Each simulation tick (dt pre-clamped by the caller, <= 0.1s):
//! position = config.step(&mut state, position, &intent, camera_yaw, dt);
//! ```

use glam::Vec3;

use crate::input::InputIntent;
use crate::world::WorldBounds;

/// Gravity acceleration in units per second squared
pub const GRAVITY: f32 = 800.0;

/// Target movement speed in units per second
pub const MOVE_SPEED: f32 = 250.0;

/// Vertical velocity applied on jump, in units per second
pub const JUMP_FORCE: f32 = 300.0;

/// Ground friction coefficient
pub const FRICTION: f32 = 4.0;

/// Ground acceleration coefficient
pub const ACCELERATION: f32 = 10.0;

/// Air acceleration coefficient (much larger than ground, by design)
pub const AIR_ACCELERATION: f32 = 100.0;

/// Minimum speed used when computing the friction drop
pub const STOPSPEED: f32 = 100.0;

/// Below this speed, grounded friction snaps horizontal velocity to zero
pub const STOP_EPSILON: f32 = 0.1;

/// Per-player movement state, created at session start and mutated only by
/// [`MovementConfig::step`].
///
/// Held as an explicit struct (rather than hidden controller fields) so the
/// integrator stays testable as pure input -> output plus next-state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementState {
    /// Current velocity in world space (units per second)
    pub velocity: Vec3,
    /// Whether the player is resting on the ground plane
    pub grounded: bool,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            grounded: false,
        }
    }
}

impl MovementState {
    /// Create a new movement state: zero velocity, airborne.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the horizontal speed (XZ plane only).
    pub fn horizontal_speed(&self) -> f32 {
        Vec3::new(self.velocity.x, 0.0, self.velocity.z).length()
    }

    /// Reset to the initial state (respawn).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Movement physics configuration.
///
/// All values are struct fields so variants (slower characters, low-gravity
/// arenas) stay possible; `Default` is the standard tuning above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementConfig {
    /// Target movement speed in units/s
    pub move_speed: f32,
    /// Ground acceleration coefficient
    pub acceleration: f32,
    /// Air acceleration coefficient
    pub air_acceleration: f32,
    /// Ground friction coefficient
    pub friction: f32,
    /// Friction drop floor in units/s
    pub stopspeed: f32,
    /// Gravity in units/s^2
    pub gravity: f32,
    /// Jump impulse in units/s
    pub jump_force: f32,
    /// Hard world bounds applied to the integrated position
    pub bounds: WorldBounds,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            acceleration: ACCELERATION,
            air_acceleration: AIR_ACCELERATION,
            friction: FRICTION,
            stopspeed: STOPSPEED,
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            bounds: WorldBounds::default(),
        }
    }
}

impl MovementConfig {
    /// Create a movement config with the standard tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the movement state by one simulation tick and return the
    /// next position.
    ///
    /// # Arguments
    /// * `state` - Per-player velocity/grounded state, updated in place
    /// * `position` - Current world position (passed by value, not retained)
    /// * `input` - Per-tick input intent snapshot
    /// * `yaw` - Facing yaw in radians; only yaw affects movement direction
    /// * `dt` - Elapsed simulation time in seconds. The caller is
    ///   responsible for clamping it (the driving loop caps at 0.1s);
    ///   no internal clamping is performed and `dt >= 0` is assumed.
    ///
    /// # Returns
    /// The next world position, ground-clamped to y >= 0 and bounds-clamped
    /// on x/z.
    pub fn step(
        &self,
        state: &mut MovementState,
        position: Vec3,
        input: &InputIntent,
        yaw: f32,
        dt: f32,
    ) -> Vec3 {
        let wish_dir = wish_direction(input, yaw);

        if state.grounded {
            self.apply_friction(state, dt);
            self.accelerate(state, wish_dir, self.move_speed, self.acceleration, dt);

            // No vertical-velocity gate: holding jump while grounded
            // re-jumps every tick (bunny hop)
            if input.jump {
                state.velocity.y = self.jump_force;
                state.grounded = false;
            }
        } else {
            self.accelerate(state, wish_dir, self.move_speed, self.air_acceleration, dt);
            state.velocity.y -= self.gravity * dt;
        }

        let mut next = position + state.velocity * dt;

        // The flat ground plane at y = 0 is the only collision surface
        if next.y <= 0.0 {
            next.y = 0.0;
            state.velocity.y = 0.0;
            state.grounded = true;
        }

        // Hard world bounds; velocity is left untouched at the wall, so a
        // body pressed against a bound keeps accelerating into it until
        // input changes
        self.bounds.clamp(next)
    }

    /// Damp horizontal velocity while grounded.
    ///
    /// Below [`STOP_EPSILON`] the horizontal components snap to zero
    /// outright; otherwise the drop is proportional to the current speed
    /// floored at `stopspeed`.
    fn apply_friction(&self, state: &mut MovementState, dt: f32) {
        let speed = state.velocity.length();
        if speed < STOP_EPSILON {
            state.velocity.x = 0.0;
            state.velocity.z = 0.0;
            return;
        }

        let drop = speed.max(self.stopspeed) * self.friction * dt;
        let factor = (speed - drop).max(0.0) / speed;

        state.velocity.x *= factor;
        state.velocity.z *= factor;
    }

    /// Accelerate the horizontal velocity toward `wish_dir`.
    ///
    /// The gain is capped by how far below `wish_speed` the velocity
    /// projection onto `wish_dir` currently is; once at or past the target
    /// in that direction, nothing is added. `wish_dir` has zero vertical
    /// component, so only x/z change.
    fn accelerate(
        &self,
        state: &mut MovementState,
        wish_dir: Vec3,
        wish_speed: f32,
        accel: f32,
        dt: f32,
    ) {
        let current_speed = state.velocity.dot(wish_dir);
        let add_speed = wish_speed - current_speed;
        if add_speed <= 0.0 {
            return;
        }

        let accel_speed = (accel * dt * wish_speed).min(add_speed);

        state.velocity.x += wish_dir.x * accel_speed;
        state.velocity.z += wish_dir.z * accel_speed;
    }
}

/// Build the world-space wish direction from the input intent and yaw.
///
/// Convention: forward = local -Z, right = local +X; opposite flags cancel.
/// The normalized local direction is rotated about +Y by `yaw`. Rotation is
/// done component-wise so the result keeps y exactly zero.
fn wish_direction(input: &InputIntent, yaw: f32) -> Vec3 {
    let local = Vec3::new(
        input.right_axis() as f32,
        0.0,
        -(input.forward_axis() as f32),
    );
    // Zero input stays zero (no division by zero)
    let local = local.normalize_or_zero();

    let (sin, cos) = yaw.sin_cos();
    Vec3::new(
        local.x * cos + local.z * sin,
        0.0,
        local.z * cos - local.x * sin,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const DT: f32 = 1.0 / 60.0;
    const EPSILON: f32 = 1e-3;

    fn forward_intent() -> InputIntent {
        InputIntent {
            forward: true,
            ..Default::default()
        }
    }

    fn grounded_state(velocity: Vec3) -> MovementState {
        MovementState {
            velocity,
            grounded: true,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = MovementState::new();
        assert_eq!(state.velocity, Vec3::ZERO);
        assert!(!state.grounded);
    }

    #[test]
    fn test_wish_direction_forward_is_negative_z() {
        let dir = wish_direction(&forward_intent(), 0.0);
        assert!((dir - Vec3::new(0.0, 0.0, -1.0)).length() < EPSILON);
    }

    #[test]
    fn test_wish_direction_rotates_with_yaw() {
        // Yaw +90 degrees turns forward from -Z toward -X
        let dir = wish_direction(&forward_intent(), FRAC_PI_2);
        assert!((dir - Vec3::new(-1.0, 0.0, 0.0)).length() < EPSILON);
        assert_eq!(dir.y, 0.0);
    }

    #[test]
    fn test_wish_direction_diagonal_is_unit_length() {
        let intent = InputIntent {
            forward: true,
            right: true,
            ..Default::default()
        };
        let dir = wish_direction(&intent, 0.0);
        assert!((dir.length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_wish_direction_opposite_flags_cancel() {
        let intent = InputIntent {
            forward: true,
            backward: true,
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(wish_direction(&intent, 0.3), Vec3::ZERO);
    }

    #[test]
    fn test_idle_decay_reaches_exact_zero() {
        let config = MovementConfig::default();
        let mut state = grounded_state(Vec3::new(120.0, 0.0, 0.0));
        let intent = InputIntent::default();
        let mut position = Vec3::ZERO;

        let mut last_speed = state.horizontal_speed();
        let mut ticks_to_stop = None;
        for tick in 0..400 {
            position = config.step(&mut state, position, &intent, 0.0, DT);
            let speed = state.horizontal_speed();
            assert!(
                speed < last_speed || speed == 0.0,
                "speed must decrease monotonically"
            );
            last_speed = speed;
            if speed == 0.0 {
                ticks_to_stop = Some(tick);
                break;
            }
        }
        assert!(ticks_to_stop.is_some(), "must snap to exactly zero");
    }

    #[test]
    fn test_friction_drop_uses_stopspeed_floor() {
        let config = MovementConfig::default();
        // Speed 50 is below STOPSPEED, so drop = 100 * 4 * dt
        let mut state = grounded_state(Vec3::new(50.0, 0.0, 0.0));
        config.apply_friction(&mut state, DT);

        let expected = 50.0 - STOPSPEED * FRICTION * DT;
        assert!((state.velocity.x - expected).abs() < EPSILON);
    }

    #[test]
    fn test_friction_snaps_below_threshold() {
        let config = MovementConfig::default();
        let mut state = grounded_state(Vec3::new(0.05, 0.0, 0.02));
        config.apply_friction(&mut state, DT);
        assert_eq!(state.velocity.x, 0.0);
        assert_eq!(state.velocity.z, 0.0);
    }

    #[test]
    fn test_jump_impulse_exact() {
        let config = MovementConfig::default();
        let mut state = grounded_state(Vec3::ZERO);
        let intent = InputIntent {
            jump: true,
            ..Default::default()
        };

        config.step(&mut state, Vec3::ZERO, &intent, 0.0, DT);
        assert_eq!(state.velocity.y, JUMP_FORCE);
        assert!(!state.grounded);
    }

    #[test]
    fn test_gravity_integration_exact() {
        let config = MovementConfig::default();
        let mut state = MovementState::new();
        let intent = InputIntent::default();
        let mut position = Vec3::new(0.0, 200.0, 0.0);

        let mut expected_vy = 0.0;
        for _ in 0..5 {
            position = config.step(&mut state, position, &intent, 0.0, DT);
            expected_vy -= GRAVITY * DT;
            assert_eq!(state.velocity.y, expected_vy);
        }
    }

    #[test]
    fn test_ground_clamp_zeroes_vertical_velocity() {
        let config = MovementConfig::default();
        let mut state = MovementState {
            velocity: Vec3::new(0.0, -50.0, 0.0),
            grounded: false,
        };
        let intent = InputIntent::default();

        let next = config.step(&mut state, Vec3::new(3.0, 0.1, -7.0), &intent, 0.0, DT);
        assert_eq!(next.y, 0.0);
        assert_eq!(state.velocity.y, 0.0);
        assert!(state.grounded);
    }

    #[test]
    fn test_bounds_clamp_exact() {
        let config = MovementConfig::default();
        let mut state = grounded_state(Vec3::new(1000.0, 0.0, -1000.0));
        let intent = InputIntent::default();

        let next = config.step(&mut state, Vec3::new(499.0, 0.0, -499.0), &intent, 0.0, DT);
        assert_eq!(next.x, 500.0);
        assert_eq!(next.z, -500.0);
    }

    #[test]
    fn test_bounds_clamp_keeps_velocity() {
        let config = MovementConfig::default();
        let mut state = MovementState {
            velocity: Vec3::new(400.0, 0.0, 0.0),
            grounded: false,
        };
        let intent = InputIntent::default();

        config.step(&mut state, Vec3::new(500.0, 10.0, 0.0), &intent, 0.0, DT);
        // Pressed against the wall, horizontal velocity is not zeroed
        assert!(state.velocity.x > 0.0);
    }

    #[test]
    fn test_ground_acceleration_capped_at_move_speed() {
        let config = MovementConfig::default();
        let mut state = grounded_state(Vec3::ZERO);
        let intent = forward_intent();
        let mut position = Vec3::ZERO;

        position = config.step(&mut state, position, &intent, 0.0, DT);
        let first_tick_speed = state.horizontal_speed();
        assert!(first_tick_speed > 0.0);
        assert!(first_tick_speed <= MOVE_SPEED + EPSILON);

        // Asymptotic approach: never overshoots the target speed
        for _ in 0..200 {
            position = config.step(&mut state, position, &intent, 0.0, DT);
            assert!(state.horizontal_speed() <= MOVE_SPEED + EPSILON);
        }
        assert!((state.horizontal_speed() - MOVE_SPEED).abs() < 0.5);
    }

    #[test]
    fn test_air_acceleration_reaches_target_in_one_tick() {
        // AIR_ACCELERATION * dt * MOVE_SPEED exceeds MOVE_SPEED at 60 Hz,
        // so the per-direction cap is what limits the first tick
        let config = MovementConfig::default();
        let mut state = MovementState::new();
        let intent = forward_intent();

        config.step(&mut state, Vec3::new(0.0, 100.0, 0.0), &intent, 0.0, DT);
        assert!((state.velocity.z - (-MOVE_SPEED)).abs() < EPSILON);
    }

    #[test]
    fn test_oblique_strafe_exceeds_move_speed() {
        // Accelerating at right angles to existing velocity can push total
        // speed past the nominal target; preserved by design
        let config = MovementConfig::default();
        let mut state = MovementState {
            velocity: Vec3::new(0.0, 100.0, -MOVE_SPEED),
            grounded: false,
        };
        let intent = InputIntent {
            right: true,
            ..Default::default()
        };

        config.step(&mut state, Vec3::new(0.0, 100.0, 0.0), &intent, 0.0, DT);
        assert!(state.horizontal_speed() > MOVE_SPEED);
    }

    #[test]
    fn test_bunny_hop_rejumps_on_landing() {
        let config = MovementConfig::default();
        let mut state = grounded_state(Vec3::ZERO);
        let intent = InputIntent {
            jump: true,
            ..Default::default()
        };
        let mut position = Vec3::ZERO;

        position = config.step(&mut state, position, &intent, 0.0, DT);
        assert!(!state.grounded);

        // Ride the arc down while holding jump; the landing tick grounds
        // the body and the next grounded tick jumps again
        let mut jumps = 1;
        for _ in 0..200 {
            let was_grounded = state.grounded;
            position = config.step(&mut state, position, &intent, 0.0, DT);
            if was_grounded && !state.grounded {
                jumps += 1;
            }
        }
        assert!(jumps >= 2, "holding jump must re-jump after landing");
    }
}
