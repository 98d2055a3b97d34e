//! Input Module
//!
//! Provides platform-agnostic input handling for the movement and game keys.
//! This module is decoupled from any specific windowing system to allow for
//! flexible integration; raw key/mouse events are captured elsewhere and fed
//! in as generic [`KeyCode`] values.
//!
//! # Example
//!
//! ```ignore
//! use dustline_engine::input::{InputIntent, KeyCode};
//!
//! let mut intent = InputIntent::new();
//!
//! intent.handle_key(KeyCode::W, true); // W pressed
//! if intent.forward {
//!     // Move forward
//! }
//! ```

pub mod keyboard;

// Re-export commonly used types at module level
pub use keyboard::{InputIntent, KeyCode};
