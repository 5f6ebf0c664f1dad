//! Shot entity logic.
//!
//! This module handles firing new shots. Flight and impacts are resolved by
//! the projectile system on each tick.

use log::{debug, trace};

use crate::game::state::GameState;
use crate::game::types::PendingShot;

/// Attempt to fire a shot for the given player, `angle` degrees off its facing.
/// Only succeeds if the player is alive, faces a direction and is off cooldown.
pub fn shoot(game_state: &mut GameState, player_id: &str, angle: f64) {
    let cooldown = game_state.config.shooting_delay_ticks;
    let lifetime = game_state.config.shot_lifetime_ticks;

    let Some(stats) = game_state.agent_stats.get_mut(player_id) else {
        return;
    };
    if !stats.is_alive || stats.shooting_delay > 0 {
        trace!("Player {} cannot shoot (delay {})", player_id, stats.shooting_delay);
        return;
    }
    let Some(player) = game_state.map.player(player_id) else {
        return;
    };
    let Some(facing) = player.direction else {
        return;
    };

    let shot = PendingShot {
        player_id: player_id.to_string(),
        origin: player.position,
        direction: facing.rotated(angle),
        remaining_ticks: lifetime,
    };
    debug!("Player {} fires from {:?} towards {:?}", player_id, shot.origin, shot.direction);
    game_state.pending_shots.push(shot);
    stats.shooting_delay = cooldown;
}
