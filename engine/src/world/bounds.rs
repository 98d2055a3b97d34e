//! World Bounds
//!
//! Hard map boundaries for the arena. The playable area is a square from
//! -500 to +500 on both x and z; the radar maps the same range onto its
//! display, so the two must stay in sync through this config.

use glam::Vec3;

/// Half-extent of the playable area: bounds run from -500 to +500
pub const WORLD_HALF_EXTENT: f32 = 500.0;

/// Axis-aligned world bounds applied to integrated positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    /// Bounds run from `-half_extent` to `+half_extent` on x and z
    pub half_extent: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            half_extent: WORLD_HALF_EXTENT,
        }
    }
}

impl WorldBounds {
    /// Create bounds with a custom half-extent.
    pub fn new(half_extent: f32) -> Self {
        Self { half_extent }
    }

    /// Clamp a position to the map boundaries.
    ///
    /// Clamps x and z to [-half_extent, +half_extent] independently;
    /// y is preserved.
    pub fn clamp(&self, pos: Vec3) -> Vec3 {
        let bounds = self.half_extent;
        Vec3::new(
            pos.x.clamp(-bounds, bounds),
            pos.y,
            pos.z.clamp(-bounds, bounds),
        )
    }

    /// Check whether a position lies inside the bounds (inclusive).
    pub fn contains(&self, pos: Vec3) -> bool {
        pos.x.abs() <= self.half_extent && pos.z.abs() <= self.half_extent
    }
}
