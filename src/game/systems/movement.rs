//! Player movement system.
//!
//! This module handles moving and turning players on the map.

use log::trace;

use crate::game::collision::collision_player_wall;
use crate::game::geometry::closest_vec_multiple_angle;
use crate::game::state::GameState;

/// Move the specified player one step along its facing direction.
/// The move is dropped if the new position would stand inside a wall;
/// other players never block movement.
pub fn move_forward(game_state: &mut GameState, player_id: &str) {
    if !game_state.is_alive(player_id) {
        return;
    }
    let step = game_state.config.forward_distance;
    let map = &mut game_state.map;
    let Some(player) = map.players.get(player_id) else {
        return;
    };
    let Some(facing) = player.direction else {
        return;
    };

    let new_pos = player.position + facing * step;
    if map.nearest_walls(new_pos).any(|wall| collision_player_wall(new_pos, wall)) {
        trace!("Player {} blocked by a wall at {:?}", player_id, new_pos);
        return;
    }
    if let Some(player) = map.players.get_mut(player_id) {
        player.position = new_pos;
    }
}

/// Rotate the specified player by `turns` granularity steps (negative is left).
pub fn turn(game_state: &mut GameState, player_id: &str, turns: f64) {
    if !game_state.is_alive(player_id) {
        return;
    }
    let step = game_state.config.rotate_degrees;
    if let Some(player) = game_state.map.player_mut(player_id) {
        if let Some(facing) = player.direction {
            player.direction = Some(closest_vec_multiple_angle(facing.rotated(turns * step), step));
        }
    }
}
