//! Economy Module
//!
//! Weapon catalog and prices for the buy menu. Spray-pattern data is carried
//! here as plain data for the HUD/recoil collaborators; the movement physics
//! never consumes it.

pub mod weapons;

pub use weapons::{Weapon, WeaponId, load_catalog, save_catalog, weapon_catalog};
