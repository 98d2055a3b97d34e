//! Radar Projection
//!
//! Projects world x/z onto the square minimap. The radar range matches the
//! physics world bounds (+/-500), so a player pressed against a wall sits
//! exactly on the radar edge.

use glam::{Vec2, Vec3};

/// Radar display size in pixels
pub const RADAR_SIZE_PX: f32 = 120.0;

/// World half-extent covered by the radar; matches the physics bounds
pub const RADAR_RANGE: f32 = 500.0;

/// A fixed label on the radar (bombsites).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteMarker {
    pub label: char,
    /// Position in radar pixels
    pub position: Vec2,
}

/// World-to-radar projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Radar {
    /// Display size in pixels
    pub size_px: f32,
    /// World half-extent mapped onto the display
    pub range: f32,
}

impl Default for Radar {
    fn default() -> Self {
        Self {
            size_px: RADAR_SIZE_PX,
            range: RADAR_RANGE,
        }
    }
}

impl Radar {
    /// Create a radar with custom display size and world range.
    pub fn new(size_px: f32, range: f32) -> Self {
        Self { size_px, range }
    }

    /// Project a world position onto radar pixel coordinates.
    ///
    /// World x maps to radar x, world z to radar y; (-range, -range) lands
    /// at the top-left corner, (+range, +range) at the bottom-right.
    pub fn project(&self, world: Vec3) -> Vec2 {
        Vec2::new(
            ((world.x + self.range) / (self.range * 2.0)) * self.size_px,
            ((world.z + self.range) / (self.range * 2.0)) * self.size_px,
        )
    }

    /// The two static bombsite markers, in radar pixels.
    pub fn site_markers(&self) -> [SiteMarker; 2] {
        [
            SiteMarker {
                label: 'A',
                position: Vec2::new(20.0, 20.0),
            },
            SiteMarker {
                label: 'B',
                position: Vec2::new(self.size_px - 20.0, self.size_px - 20.0),
            },
        ]
    }
}
