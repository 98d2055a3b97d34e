//! UI Data Module
//!
//! HUD-facing data that is pure math or constants: the radar projection
//! from world space onto the minimap. Actual drawing is an external
//! collaborator.

pub mod radar;

pub use radar::{RADAR_RANGE, RADAR_SIZE_PX, Radar, SiteMarker};
