//! Game Module
//!
//! Contains game-specific systems that build on top of the engine:
//! match state, the weapon catalog and buy economy, and HUD-facing data
//! like the radar projection.

pub mod economy;
pub mod state;
pub mod types;
pub mod ui;

// Re-exports from game modules
pub use economy::{Weapon, WeaponId, load_catalog, save_catalog, weapon_catalog};
pub use state::{MatchState, ROUND_SECONDS};
pub use types::{GamePhase, PlayerStats};
pub use ui::{RADAR_RANGE, RADAR_SIZE_PX, Radar, SiteMarker};
