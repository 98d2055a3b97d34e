//! Player Module
//!
//! Per-session player controller: the long-lived object owning one
//! [`MovementState`] and its [`MovementConfig`] for the duration of a
//! player session.

pub mod controller;

pub use controller::PlayerController;
