//! Dust Arena - Headless Movement Demo
//!
//! Run with: `cargo run --bin dust_arena`
//!
//! Drives the movement integrator through a scripted session at a fixed
//! 60 Hz tick: spawn in the air, land, run forward, strafe-jump, open the
//! buy menu (physics pauses), buy a pistol upgrade is skipped (too poor for
//! the rifle), close the menu and keep running until the body rides the
//! world bound. Rendering and real input capture are external collaborators;
//! this binary stands in for the driving render loop.
//!
//! Set `RUST_LOG=info` (or `debug` for per-second traces) to see output.

use glam::Vec3;
use log::{debug, info};

use dustline_engine::game::{MatchState, Radar, Weapon, WeaponId};
use dustline_engine::input::InputIntent;
use dustline_engine::{FpsCamera, PlayerController};

/// Simulation tick rate
const TICK_RATE: f32 = 60.0;

/// Per-tick cap matching the original driving loop's frame-hitch guard
const MAX_DT: f32 = 0.1;

fn main() {
    env_logger::init();

    let mut player = PlayerController::new();
    let mut camera = FpsCamera::new();
    let mut game = MatchState::new();
    let radar = Radar::default();

    let mut position = Vec3::new(0.0, 10.0, 0.0);
    let mut intent = InputIntent::new();

    let dt = (1.0 / TICK_RATE).min(MAX_DT);
    let total_ticks = (30.0 * TICK_RATE) as u32; // 30 simulated seconds

    info!("dust_arena: starting scripted session, {total_ticks} ticks at {TICK_RATE} Hz");

    for tick in 0..total_ticks {
        let t = tick as f32 * dt;

        // Scripted input: land, then run forward; hop between 5s and 8s;
        // buy menu from 10s to 12s; veer right afterwards
        intent.forward = t >= 1.0;
        intent.jump = (5.0..8.0).contains(&t);

        if tick == (10.0 * TICK_RATE) as u32 {
            game.open_buy_menu();
            let rifle = Weapon::get(WeaponId::Ak47);
            if !game.try_buy(rifle) {
                info!("buy menu: rifle too expensive, keeping the pistol");
            }
        }
        if tick == (12.0 * TICK_RATE) as u32 {
            game.close_buy_menu();
            // Turn ~45 degrees right via mouse
            camera.apply_mouse_delta(std::f32::consts::FRAC_PI_4 / camera.sensitivity, 0.0);
        }

        game.tick(dt);
        if game.physics_enabled() {
            position = player.update(position, &intent, camera.yaw, dt);
        }

        if tick % TICK_RATE as u32 == 0 {
            let blip = radar.project(position);
            debug!(
                "t={t:5.1}s pos=({:8.2},{:6.2},{:8.2}) speed={:6.1} grounded={} radar=({:.0},{:.0}) clock={}",
                position.x,
                position.y,
                position.z,
                player.horizontal_speed(),
                player.is_grounded(),
                blip.x,
                blip.y,
                game.format_clock(),
            );
        }
    }

    info!(
        "session over: pos=({:.1},{:.1},{:.1}) speed={:.1} weapon={} money=${} clock={}",
        position.x,
        position.y,
        position.z,
        player.horizontal_speed(),
        game.current_weapon.name,
        game.stats.money,
        game.format_clock(),
    );

    println!(
        "Final position: ({:.1}, {:.1}, {:.1}) | grounded: {} | ${} | {}",
        position.x,
        position.y,
        position.z,
        player.is_grounded(),
        game.stats.money,
        game.format_clock(),
    );
}
