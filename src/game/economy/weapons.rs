//! Weapon Catalog
//!
//! Static weapon definitions for the buy menu: prices, ammo pools, damage,
//! fire rate, and the deterministic spray patterns. The catalog can be
//! saved to / loaded from JSON so designers can retune without a rebuild.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Weapon identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponId {
    Ak47,
    M4a1,
    Deagle,
}

impl WeaponId {
    /// Display name shown in the HUD and buy menu.
    pub fn display_name(&self) -> &'static str {
        match self {
            WeaponId::Ak47 => "CV-47",
            WeaponId::M4a1 => "Maverick M4A1",
            WeaponId::Deagle => "Night Hawk .50C",
        }
    }
}

/// One purchasable weapon with its full data sheet.
///
/// `spray_pattern` is the deterministic per-shot aim offset sequence; it is
/// data for the recoil/HUD collaborators and is never read by the movement
/// core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub id: WeaponId,
    pub name: String,
    /// Buy price in dollars
    pub price: i32,
    /// Rounds currently in the magazine
    pub ammo: u32,
    /// Magazine capacity
    pub max_ammo: u32,
    /// Reserve rounds
    pub reserve: u32,
    /// Damage per hit
    pub damage: u32,
    /// Milliseconds between shots
    pub fire_rate_ms: u32,
    /// Deterministic per-shot aim offsets
    pub spray_pattern: Vec<Vec2>,
    /// Milliseconds of not firing before the spray index resets
    pub recoil_reset_ms: u32,
}

/// Deterministic spray pattern for the AK-47 (simplified).
fn ak47_spray() -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(0.1, 0.2),
        Vec2::new(-0.1, 0.4),
        Vec2::new(0.2, 0.6),
        Vec2::new(-0.2, 0.8),
        Vec2::new(0.3, 1.0),
        Vec2::new(-0.3, 1.1),
        Vec2::new(0.4, 1.2),
        Vec2::new(-0.4, 1.25),
        Vec2::new(0.0, 1.3),
    ]
}

impl Weapon {
    /// Look up the catalog entry for a weapon id.
    pub fn get(id: WeaponId) -> Weapon {
        match id {
            WeaponId::Ak47 => Weapon {
                id,
                name: id.display_name().to_string(),
                price: 2500,
                ammo: 30,
                max_ammo: 30,
                reserve: 90,
                damage: 36,
                fire_rate_ms: 100,
                spray_pattern: ak47_spray(),
                recoil_reset_ms: 500,
            },
            WeaponId::M4a1 => Weapon {
                id,
                name: id.display_name().to_string(),
                price: 3100,
                ammo: 30,
                max_ammo: 30,
                reserve: 90,
                damage: 33,
                fire_rate_ms: 90,
                // Same shape as the AK pattern, scaled down
                spray_pattern: ak47_spray().into_iter().map(|p| p * 0.8).collect(),
                recoil_reset_ms: 400,
            },
            WeaponId::Deagle => Weapon {
                id,
                name: id.display_name().to_string(),
                price: 650,
                ammo: 7,
                max_ammo: 7,
                reserve: 35,
                damage: 54,
                fire_rate_ms: 300,
                spray_pattern: vec![
                    Vec2::new(0.0, 0.0),
                    Vec2::new(0.0, 1.0),
                    Vec2::new(0.0, 2.0),
                ],
                recoil_reset_ms: 800,
            },
        }
    }
}

/// The full buy-menu catalog, in display order.
pub fn weapon_catalog() -> Vec<Weapon> {
    vec![
        Weapon::get(WeaponId::Ak47),
        Weapon::get(WeaponId::M4a1),
        Weapon::get(WeaponId::Deagle),
    ]
}

/// Save a weapon catalog as pretty-printed JSON.
pub fn save_catalog(path: &Path, catalog: &[Weapon]) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog)
        .context("failed to serialize weapon catalog")?;
    fs::write(path, json)
        .with_context(|| format!("failed to write weapon catalog to {}", path.display()))?;
    Ok(())
}

/// Load a weapon catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Vec<Weapon>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read weapon catalog from {}", path.display()))?;
    let catalog =
        serde_json::from_str(&json).context("failed to parse weapon catalog JSON")?;
    Ok(catalog)
}
