//! Action dispatch.
//!
//! Every action variant maps to one executor. Executors mutate the state on
//! behalf of the acting player and silently do nothing when the action
//! cannot apply (dead player, wall ahead, weapon on cooldown).

use log::{trace, warn};

use crate::game::entities::shoot;
use crate::game::state::GameState;
use crate::game::systems::movement::{move_forward, turn};
use crate::game::types::Action;

impl Action {
    /// Apply this action for `player_id`. Returns the state for chaining.
    pub fn execute<'a>(&self, player_id: &str, game_state: &'a mut GameState) -> &'a mut GameState {
        if !game_state.agent_stats.contains_key(player_id) {
            warn!("Ignoring {:?} for unknown player {}", self, player_id);
            return game_state;
        }
        if !game_state.is_alive(player_id) {
            trace!("Ignoring {:?} for dead player {}", self, player_id);
            return game_state;
        }

        match *self {
            Action::Forward => move_forward(game_state, player_id),
            Action::TurnLeft => turn(game_state, player_id, -1.0),
            Action::TurnRight => turn(game_state, player_id, 1.0),
            Action::Shoot { angle } => shoot(game_state, player_id, angle),
            Action::Wait => {}
        }
        game_state
    }
}
