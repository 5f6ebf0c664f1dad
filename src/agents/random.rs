use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::agents::{Agent, AgentCore};
use crate::game::types::{Action, Percept, PlayerId};

/// Picks uniformly among all actions, shooting straight ahead.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    core: AgentCore,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(player_id: PlayerId, history_len: usize, seed: u64) -> Self {
        Self {
            core: AgentCore::new(player_id, history_len),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn player_id(&self) -> &str {
        &self.core.player_id
    }

    fn see(&mut self, percept: Percept) {
        self.core.current_percept = Some(percept);
    }

    fn select_action(&mut self) -> Action {
        let action = match self.rng.random_range(0..5) {
            0 => Action::Forward,
            1 => Action::TurnLeft,
            2 => Action::TurnRight,
            3 => Action::Shoot { angle: 0.0 },
            _ => Action::Wait,
        };
        self.core.choose(action)
    }
}
