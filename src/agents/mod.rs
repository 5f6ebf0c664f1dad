//! Decision policies.
//!
//! An agent receives a percept each round and answers with one action. The
//! engine only needs the [`Agent`] trait; the bundled policies are simple
//! baselines used by the command-line runner.

use std::collections::VecDeque;

use crate::game::types::{Action, Percept, PlayerId};

pub mod dummy;
pub mod idle;
pub mod random;

pub use dummy::DummyAgent;
pub use idle::IdleAgent;
pub use random::RandomAgent;

pub trait Agent {
    fn player_id(&self) -> &str;

    fn see(&mut self, percept: Percept);

    fn select_action(&mut self) -> Action;
}

/// Bounded record of the most recent actions an agent chose.
#[derive(Debug, Clone)]
pub struct ActionHistory {
    actions: VecDeque<Action>,
    capacity: usize,
}

impl ActionHistory {
    /// A history of `capacity` entries, pre-filled with `Wait`.
    pub fn new(capacity: usize) -> Self {
        Self {
            actions: std::iter::repeat(Action::Wait).take(capacity).collect(),
            capacity,
        }
    }

    pub fn push(&mut self, action: Action) {
        if self.capacity == 0 {
            return;
        }
        if self.actions.len() == self.capacity {
            self.actions.pop_front();
        }
        self.actions.push_back(action);
    }

    pub fn last(&self) -> Option<&Action> {
        self.actions.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }
}

/// State shared by the bundled agents: who they play and what they last saw.
#[derive(Debug, Clone)]
pub struct AgentCore {
    pub player_id: PlayerId,
    pub current_percept: Option<Percept>,
    pub last_actions: ActionHistory,
}

impl AgentCore {
    pub fn new(player_id: PlayerId, history_len: usize) -> Self {
        Self {
            player_id,
            current_percept: None,
            last_actions: ActionHistory::new(history_len),
        }
    }

    /// Record `action` as chosen and forget the consumed percept.
    pub fn choose(&mut self, action: Action) -> Action {
        self.current_percept = None;
        self.last_actions.push(action);
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_starts_with_waits() {
        let history = ActionHistory::new(3);
        assert_eq!(history.iter().count(), 3);
        assert!(history.iter().all(|a| *a == Action::Wait));
    }

    #[test]
    fn test_history_is_bounded() {
        let mut history = ActionHistory::new(2);
        history.push(Action::Forward);
        history.push(Action::TurnLeft);
        history.push(Action::TurnRight);
        let kept: Vec<Action> = history.iter().copied().collect();
        assert_eq!(kept, vec![Action::TurnLeft, Action::TurnRight]);
        assert_eq!(history.last(), Some(&Action::TurnRight));
    }

    #[test]
    fn test_choose_consumes_percept() {
        let mut core = AgentCore::new("p1".to_string(), 2);
        core.current_percept = Some(Percept { rays: vec![], direction: Default::default() });
        assert_eq!(core.choose(Action::Forward), Action::Forward);
        assert!(core.current_percept.is_none());
        assert_eq!(core.last_actions.last(), Some(&Action::Forward));
    }
}
