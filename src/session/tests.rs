use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::agents::{Agent, IdleAgent};
use crate::config::GameConfig;
use crate::game::geometry::Vector2D;
use crate::game::grid::GameMap;
use crate::game::state::GameState;
use crate::game::systems::{NullRenderer, RenderEngine};
use crate::game::types::{Action, Percept, PlayerId};
use crate::session::{resolve_round, MatchSummary, Simulation};

/// Plays a fixed list of actions, then waits. Keeps every percept it saw.
struct ScriptedAgent {
    player_id: PlayerId,
    script: VecDeque<Action>,
    seen: Rc<RefCell<Vec<Percept>>>,
}

impl ScriptedAgent {
    fn new(player_id: &str, script: &[Action]) -> Self {
        Self {
            player_id: player_id.to_string(),
            script: script.iter().copied().collect(),
            seen: Rc::default(),
        }
    }
}

impl Agent for ScriptedAgent {
    fn player_id(&self) -> &str {
        &self.player_id
    }

    fn see(&mut self, percept: Percept) {
        self.seen.borrow_mut().push(percept);
    }

    fn select_action(&mut self) -> Action {
        self.script.pop_front().unwrap_or(Action::Wait)
    }
}

/// Counts frames instead of drawing them.
#[derive(Clone, Default)]
struct CountingRenderer {
    frames: Rc<RefCell<usize>>,
    stopped: Rc<RefCell<bool>>,
}

impl RenderEngine for CountingRenderer {
    fn display(&mut self, _game_state: &GameState) {
        *self.frames.borrow_mut() += 1;
    }

    fn stop(&mut self) {
        *self.stopped.borrow_mut() = true;
    }
}

fn duel(text: &str, config: GameConfig) -> (GameState, PlayerId, PlayerId) {
    let mut state = GameState::new(GameMap::from_text(text).unwrap(), config).unwrap();
    let a = state.map.players_in_team('A')[0].clone();
    let b = state.map.players_in_team('B')[0].clone();
    state.map.player_mut(&a).unwrap().direction = Some(Vector2D::new(1.0, 0.0));
    state.map.player_mut(&b).unwrap().direction = Some(Vector2D::new(-1.0, 0.0));
    state.refresh_rays().unwrap();
    (state, a, b)
}

#[test]
fn test_percepts_come_from_pre_round_state() {
    let (mut state, a, b) = duel("A...B", GameConfig::default());
    let expected_b = state.percept(&b).unwrap();

    let mover = ScriptedAgent::new(&a, &[Action::Forward]);
    let watcher = ScriptedAgent::new(&b, &[Action::Wait]);
    let seen_by_b = Rc::clone(&watcher.seen);
    let mut agents: Vec<Box<dyn Agent>> = vec![Box::new(mover), Box::new(watcher)];
    resolve_round(&mut state, &mut agents).unwrap();

    assert_eq!(state.tick, 1);
    assert_eq!(state.map.player(&a).unwrap().position, Vector2D::new(1.5, 1.0));
    assert_eq!(seen_by_b.borrow().as_slice(), &[expected_b.clone()]);
    assert_ne!(state.percept(&b).unwrap(), expected_b);
}

#[test]
fn test_simultaneous_shots_kill_both() {
    let (mut state, a, b) = duel("AB", GameConfig::default());
    let mut agents: Vec<Box<dyn Agent>> = vec![
        Box::new(ScriptedAgent::new(&a, &[Action::Shoot { angle: 0.0 }])),
        Box::new(ScriptedAgent::new(&b, &[Action::Shoot { angle: 0.0 }])),
    ];
    resolve_round(&mut state, &mut agents).unwrap();

    assert!(!state.is_alive(&a));
    assert!(!state.is_alive(&b));
    assert_eq!(state.kills_of(&a), &[b.clone()]);
    assert_eq!(state.kills_of(&b), &[a.clone()]);
}

#[test]
fn test_later_agent_is_too_late_once_dead() {
    let (mut state, a, b) = duel("A.B", GameConfig::default());
    let mut agents: Vec<Box<dyn Agent>> = vec![
        Box::new(ScriptedAgent::new(&a, &[Action::Shoot { angle: 0.0 }])),
        Box::new(ScriptedAgent::new(&b, &[Action::Wait, Action::Shoot { angle: 0.0 }])),
    ];
    resolve_round(&mut state, &mut agents).unwrap();
    assert!(!state.is_alive(&b));

    resolve_round(&mut state, &mut agents).unwrap();
    assert!(state.pending_shots.is_empty());
    assert!(state.is_alive(&a));
}

#[test]
fn test_run_until_one_team_left() {
    let (state, a, b) = duel("A..B", GameConfig::default());
    let renderer = CountingRenderer::default();
    let agents: Vec<Box<dyn Agent>> = vec![
        Box::new(ScriptedAgent::new(&a, &[Action::Shoot { angle: 0.0 }])),
        Box::new(IdleAgent::new(b.clone(), 3)),
    ];
    let mut sim = Simulation::new(state, agents, Box::new(renderer.clone()));
    let summary = sim.run().unwrap();

    assert_eq!(summary.winner, Some('A'));
    assert_eq!(summary.survivors, vec![a.clone()]);
    assert_eq!(summary.kills[&a], vec![b]);
    assert!(summary.ticks >= 1);
    assert_eq!(*renderer.frames.borrow(), summary.ticks as usize + 1);
    assert!(*renderer.stopped.borrow());
}

#[test]
fn test_run_stops_at_tick_limit() {
    let config = GameConfig { max_ticks: 7, ..GameConfig::default() };
    let (state, a, b) = duel("A....B", config);
    let agents: Vec<Box<dyn Agent>> = vec![
        Box::new(IdleAgent::new(a, 3)),
        Box::new(IdleAgent::new(b, 3)),
    ];
    let mut sim = Simulation::new(state, agents, Box::new(NullRenderer));
    let summary = sim.run().unwrap();

    assert_eq!(summary.ticks, 7);
    assert_eq!(summary.winner, None);
    assert_eq!(summary.survivors.len(), 2);
}

#[test]
fn test_summary_serializes_to_json() {
    let (state, _, _) = duel("A.B", GameConfig::default());
    let summary = MatchSummary::from_state(&state);
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["ticks"], 0);
    assert!(json["winner"].is_null());
}

#[test]
fn test_unknown_agent_fails_round() {
    let (mut state, _, _) = duel("A.B", GameConfig::default());
    let mut agents: Vec<Box<dyn Agent>> = vec![Box::new(ScriptedAgent::new("ghost", &[]))];
    assert!(resolve_round(&mut state, &mut agents).is_err());
    assert_eq!(state.tick, 0);
}
