use crate::agents::{Agent, AgentCore};
use crate::game::types::{Action, Percept, PlayerId};

/// Always waits.
#[derive(Debug, Clone)]
pub struct IdleAgent {
    core: AgentCore,
}

impl IdleAgent {
    pub fn new(player_id: PlayerId, history_len: usize) -> Self {
        Self { core: AgentCore::new(player_id, history_len) }
    }
}

impl Agent for IdleAgent {
    fn player_id(&self) -> &str {
        &self.core.player_id
    }

    fn see(&mut self, percept: Percept) {
        self.core.current_percept = Some(percept);
    }

    fn select_action(&mut self) -> Action {
        self.core.choose(Action::Wait)
    }
}
