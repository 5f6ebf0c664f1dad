use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::agents::{Agent, AgentCore};
use crate::game::types::{Action, GameObject, Percept, PlayerId};

/// Walls closer than this (normalized distance) make the agent turn away.
const WALL_TOO_CLOSE: f64 = 0.3;

/// Rays on each side of the central one that trigger a shot on an enemy.
const AIM_HALF_WINDOW: usize = 4;

/// Heuristic baseline: avoid walls, shoot enemies in front, otherwise wander.
#[derive(Debug, Clone)]
pub struct DummyAgent {
    core: AgentCore,
    rng: StdRng,
}

impl DummyAgent {
    pub fn new(player_id: PlayerId, history_len: usize, seed: u64) -> Self {
        Self {
            core: AgentCore::new(player_id, history_len),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn decide(&mut self, percept: &Percept) -> Action {
        let rays = &percept.rays;
        if rays
            .iter()
            .any(|ray| ray.obj == GameObject::Wall && ray.distance < WALL_TOO_CLOSE)
        {
            return Action::TurnLeft;
        }

        let center = rays.len() / 2;
        let window = center.saturating_sub(AIM_HALF_WINDOW)..(center + AIM_HALF_WINDOW + 1).min(rays.len());
        if rays[window].iter().any(|ray| ray.obj == GameObject::Enemy) {
            return Action::Shoot { angle: 0.0 };
        }

        let p: f64 = self.rng.random();
        if p < 0.85 {
            Action::Forward
        } else if p < 0.95 {
            Action::TurnLeft
        } else {
            Action::Wait
        }
    }
}

impl Agent for DummyAgent {
    fn player_id(&self) -> &str {
        &self.core.player_id
    }

    fn see(&mut self, percept: Percept) {
        self.core.current_percept = Some(percept);
    }

    fn select_action(&mut self) -> Action {
        let action = match self.core.current_percept.take() {
            Some(percept) => self.decide(&percept),
            None => Action::Wait,
        };
        self.core.choose(action)
    }
}
