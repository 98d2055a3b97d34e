//! Match State
//!
//! Round-level bookkeeping for one player session: phase, scoreboard
//! stats, the round countdown, the equipped weapon, and the buy menu.
//! The driving loop consults [`MatchState::physics_enabled`] to gate the
//! movement integrator while the buy menu is open.

use log::info;

use crate::game::economy::{Weapon, WeaponId};
use crate::game::types::{GamePhase, PlayerStats};

/// Round length in seconds
pub const ROUND_SECONDS: u32 = 120;

/// Match state for one player session.
#[derive(Debug, Clone)]
pub struct MatchState {
    /// Current round phase
    pub phase: GamePhase,
    /// Scoreboard and economy stats
    pub stats: PlayerStats,
    /// Currently equipped weapon (players start with the pistol)
    pub current_weapon: Weapon,
    /// Seconds left on the round clock
    pub seconds_left: u32,
    /// Whether the buy menu overlay is open (pauses physics stepping)
    pub buy_menu_open: bool,
    /// Whether the whole simulation is paused
    pub paused: bool,
    /// Sub-second accumulator for the countdown
    timer_accum: f32,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// Create a fresh match: round active, full clock, pistol equipped.
    pub fn new() -> Self {
        Self {
            phase: GamePhase::RoundActive,
            stats: PlayerStats::new(),
            current_weapon: Weapon::get(WeaponId::Deagle),
            seconds_left: ROUND_SECONDS,
            buy_menu_open: false,
            paused: false,
            timer_accum: 0.0,
        }
    }

    /// Advance the round clock.
    ///
    /// Whole seconds are consumed from an accumulator so variable tick
    /// rates count down correctly. The clock holds at zero.
    pub fn tick(&mut self, dt: f32) {
        if self.paused || self.phase != GamePhase::RoundActive {
            return;
        }

        self.timer_accum += dt;
        while self.timer_accum >= 1.0 {
            self.timer_accum -= 1.0;
            if self.seconds_left > 0 {
                self.seconds_left -= 1;
            }
        }

        if self.seconds_left == 0 {
            self.phase = GamePhase::RoundEnd;
        }
    }

    /// Whether the movement integrator should step this frame.
    ///
    /// Matches the original behavior: physics is skipped entirely while
    /// the buy menu overlay is up.
    pub fn physics_enabled(&self) -> bool {
        !self.buy_menu_open && !self.paused
    }

    /// Open the buy menu overlay.
    pub fn open_buy_menu(&mut self) {
        self.buy_menu_open = true;
    }

    /// Close the buy menu overlay.
    pub fn close_buy_menu(&mut self) {
        self.buy_menu_open = false;
    }

    /// Try to buy a weapon: checks affordability, deducts the price,
    /// equips it, and closes the buy menu.
    ///
    /// Returns `false` (leaving stats untouched) when money is short.
    pub fn try_buy(&mut self, weapon: Weapon) -> bool {
        if !self.stats.can_afford(weapon.price) {
            return false;
        }

        self.stats.money -= weapon.price;
        info!(
            "bought {} for ${} (${} left)",
            weapon.name, weapon.price, self.stats.money
        );
        self.current_weapon = weapon;
        self.buy_menu_open = false;
        true
    }

    /// Format the round clock as m:ss for the HUD.
    pub fn format_clock(&self) -> String {
        format!("{}:{:02}", self.seconds_left / 60, self.seconds_left % 60)
    }
}
