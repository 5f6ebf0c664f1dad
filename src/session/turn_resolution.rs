//! Resolves one round for a game state.
//! Collects every agent's decision from the same snapshot, applies the
//! actions one after another, then advances the world by one tick.

use log::debug;

use crate::agents::Agent;
use crate::game::error::GameError;
use crate::game::state::GameState;
use crate::game::types::Action;

/// Run one round: percepts from the pre-round state, decisions, actions in
/// agent order, then a single `step`.
pub fn resolve_round(state: &mut GameState, agents: &mut [Box<dyn Agent>]) -> Result<(), GameError> {
    // Decisions are blind: every percept is taken before any action lands.
    let percepts = agents
        .iter()
        .map(|agent| state.percept(agent.player_id()))
        .collect::<Result<Vec<_>, _>>()?;

    let actions: Vec<Action> = agents
        .iter_mut()
        .zip(percepts)
        .map(|(agent, percept)| {
            agent.see(percept);
            agent.select_action()
        })
        .collect();

    for (agent, action) in agents.iter().zip(actions) {
        debug!("Tick {}: {} -> {:?}", state.tick, agent.player_id(), action);
        state.apply_player_action(action, agent.player_id());
    }

    state.step()
}
