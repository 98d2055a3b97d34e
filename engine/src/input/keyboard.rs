//! Keyboard Input Module
//!
//! Contains the per-tick input intent snapshot consumed by the movement
//! integrator, plus generic key codes decoupled from any windowing system.

/// Generic key codes for the keys the prototype binds, independent of
/// windowing system.
///
/// These map to standard keyboard keys but are not tied to any particular
/// event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,
    ShiftLeft,
    ShiftRight,

    // Game keys
    /// B - open the buy menu
    B,
    /// Escape - close the buy menu
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Per-tick snapshot of the player's movement intent.
///
/// Six independent flags; opposite flags (forward/backward, left/right) may
/// both be set simultaneously and cancel out. The snapshot is assembled from
/// key events by the input-capture layer and handed to the movement
/// integrator once per simulation tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputIntent {
    /// W key - move forward
    pub forward: bool,
    /// S key - move backward
    pub backward: bool,
    /// A key - move left (strafe)
    pub left: bool,
    /// D key - move right (strafe)
    pub right: bool,
    /// Space - jump
    pub jump: bool,
    /// Shift - crouch (lowers the eye height)
    pub crouch: bool,
}

impl InputIntent {
    /// Create a new input intent with all flags released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update intent based on key press/release.
    ///
    /// Returns `true` if the key was a movement key and was handled,
    /// `false` otherwise.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W => {
                self.forward = pressed;
                true
            }
            KeyCode::S => {
                self.backward = pressed;
                true
            }
            KeyCode::A => {
                self.left = pressed;
                true
            }
            KeyCode::D => {
                self.right = pressed;
                true
            }
            KeyCode::Space => {
                self.jump = pressed;
                true
            }
            KeyCode::ShiftLeft | KeyCode::ShiftRight => {
                self.crouch = pressed;
                true
            }
            _ => false,
        }
    }

    /// Check if any directional key is currently pressed.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Get the forward/backward movement direction (-1, 0, or 1).
    ///
    /// Positive means forward; both keys held cancels to 0.
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Get the left/right movement direction (-1, 0, or 1).
    ///
    /// Positive means right; both keys held cancels to 0.
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }

    /// Check if the crouch key is currently pressed.
    pub fn is_crouching(&self) -> bool {
        self.crouch
    }

    /// Reset all flags to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_default() {
        let intent = InputIntent::new();
        assert!(!intent.any_pressed());
        assert_eq!(intent.forward_axis(), 0);
        assert_eq!(intent.right_axis(), 0);
    }

    #[test]
    fn test_intent_forward() {
        let mut intent = InputIntent::new();
        assert!(intent.handle_key(KeyCode::W, true));
        assert!(intent.forward);
        assert!(intent.any_pressed());
        assert_eq!(intent.forward_axis(), 1);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut intent = InputIntent::new();
        intent.handle_key(KeyCode::W, true);
        intent.handle_key(KeyCode::S, true);
        assert_eq!(intent.forward_axis(), 0);

        intent.handle_key(KeyCode::A, true);
        intent.handle_key(KeyCode::D, true);
        assert_eq!(intent.right_axis(), 0);
    }

    #[test]
    fn test_jump_and_crouch() {
        let mut intent = InputIntent::new();
        assert!(intent.handle_key(KeyCode::Space, true));
        assert!(intent.jump);

        assert!(intent.handle_key(KeyCode::ShiftLeft, true));
        assert!(intent.is_crouching());

        intent.handle_key(KeyCode::ShiftLeft, false);
        assert!(!intent.is_crouching());
    }

    #[test]
    fn test_non_movement_key() {
        let mut intent = InputIntent::new();
        assert!(!intent.handle_key(KeyCode::B, true));
        assert!(!intent.handle_key(KeyCode::Escape, true));
        assert!(!intent.any_pressed());
    }

    #[test]
    fn test_reset() {
        let mut intent = InputIntent::new();
        intent.handle_key(KeyCode::W, true);
        intent.handle_key(KeyCode::Space, true);
        intent.reset();
        assert_eq!(intent, InputIntent::default());
    }
}
