//! Core game types shared across the game modules.

use serde::{Deserialize, Serialize};

/// High-level phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Main menu, nothing simulating
    Menu,
    /// Buy time at round start
    BuyTime,
    /// Round in progress
    RoundActive,
    /// Round over, waiting for the next one
    RoundEnd,
}

impl Default for GamePhase {
    fn default() -> Self {
        GamePhase::RoundActive
    }
}

/// Per-player scoreboard and economy stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Health points
    pub hp: i32,
    /// Armor points
    pub armor: i32,
    /// Money available in the buy menu
    pub money: i32,
    pub kills: u32,
    pub deaths: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            hp: 100,
            armor: 100,
            money: 800,
            kills: 0,
            deaths: 0,
        }
    }
}

impl PlayerStats {
    /// Create stats with the round-start values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the player can afford a given price.
    pub fn can_afford(&self, price: i32) -> bool {
        self.money >= price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_stats() {
        let stats = PlayerStats::new();
        assert_eq!(stats.hp, 100);
        assert_eq!(stats.armor, 100);
        assert_eq!(stats.money, 800);
        assert_eq!(stats.kills, 0);
        assert_eq!(stats.deaths, 0);
    }

    #[test]
    fn test_can_afford() {
        let stats = PlayerStats::new();
        assert!(stats.can_afford(800));
        assert!(!stats.can_afford(801));
    }
}
