//! Camera Module
//!
//! FPS camera orientation and eye placement. The camera owns the facing the
//! physics core consumes (yaw only) and places the eye above the returned
//! player position depending on crouch state.

pub mod fps_camera;

pub use fps_camera::{CROUCH_EYE_HEIGHT, FpsCamera, STANDING_EYE_HEIGHT};
