//! World Module
//!
//! World-space configuration for the arena: a flat ground plane at y = 0
//! and hard axis-aligned bounds on x/z.

pub mod bounds;

pub use bounds::{WORLD_HALF_EXTENT, WorldBounds};
