use std::collections::BTreeMap;

use log::info;
use serde::Serialize;

use crate::agents::Agent;
use crate::game::error::GameError;
use crate::game::state::GameState;
use crate::game::systems::RenderEngine;
use crate::game::types::PlayerId;
use crate::session::turn_resolution::resolve_round;

/// Outcome of a finished simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSummary {
    pub ticks: u64,
    pub winner: Option<char>,
    pub survivors: Vec<PlayerId>,
    pub kills: BTreeMap<PlayerId, Vec<PlayerId>>,
}

impl MatchSummary {
    pub fn from_state(state: &GameState) -> Self {
        let alive_teams = state.alive_teams();
        Self {
            ticks: state.tick,
            winner: match alive_teams.as_slice() {
                [team] => Some(*team),
                _ => None,
            },
            survivors: state
                .agent_stats
                .iter()
                .filter(|(_, stats)| stats.is_alive)
                .map(|(id, _)| id.clone())
                .collect(),
            kills: state.kills.clone(),
        }
    }
}

/// Sense-act loop over one game state.
pub struct Simulation {
    pub state: GameState,
    pub agents: Vec<Box<dyn Agent>>,
    pub renderer: Box<dyn RenderEngine>,
}

impl Simulation {
    pub fn new(state: GameState, agents: Vec<Box<dyn Agent>>, renderer: Box<dyn RenderEngine>) -> Self {
        Self {
            state,
            agents,
            renderer,
        }
    }

    /// Over when the tick limit is reached or at most one team still stands.
    pub fn is_complete(&self) -> bool {
        self.state.tick >= self.state.config.max_ticks || self.state.alive_teams().len() <= 1
    }

    pub fn simulation_step(&mut self) -> Result<(), GameError> {
        resolve_round(&mut self.state, &mut self.agents)?;
        self.renderer.display(&self.state);
        Ok(())
    }

    pub fn run(&mut self) -> Result<MatchSummary, GameError> {
        info!("Simulation start: {} agents, tick limit {}", self.agents.len(), self.state.config.max_ticks);
        self.renderer.display(&self.state);

        while !self.is_complete() {
            self.simulation_step()?;
        }
        self.renderer.stop();

        let summary = MatchSummary::from_state(&self.state);
        info!(
            "Simulation over after {} ticks, winner: {:?}",
            summary.ticks, summary.winner
        );
        Ok(summary)
    }
}
