use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use crate::config::GameConfig;
use crate::game::entities::default_direction;
use crate::game::error::GameError;
use crate::game::grid::GameMap;
use crate::game::systems::{advance_shots, compute_rays};
use crate::game::types::{Action, AgentStats, PendingShot, Percept, PlayerId, Ray};

/// The whole simulation state. Actions and the tick engine mutate it in
/// place; dead players stay in every table so ids keep resolving.
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub tick: u64,
    pub map: GameMap,
    pub config: GameConfig,
    pub agent_stats: BTreeMap<PlayerId, AgentStats>,
    pub rays: BTreeMap<PlayerId, Vec<Ray>>,
    pub pending_shots: Vec<PendingShot>,
    pub kills: BTreeMap<PlayerId, Vec<PlayerId>>,
}

impl GameState {
    /// Build the initial state for a run. Validates `config` and casts the
    /// first round of perception rays.
    pub fn new(mut map: GameMap, config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;

        // Spawned facings were snapped at the default granularity; redo it
        // from the away-from-center vector at the configured one.
        let center = map.center();
        for player in map.players.values_mut() {
            if player.direction.is_some() {
                player.direction = Some(default_direction(player.position, center, config.rotate_degrees));
            }
        }

        let agent_stats = map
            .players
            .keys()
            .map(|id| (id.clone(), AgentStats::default()))
            .collect();
        let kills = map.players.keys().map(|id| (id.clone(), Vec::new())).collect();

        let mut state = GameState {
            tick: 0,
            map,
            config,
            agent_stats,
            rays: BTreeMap::new(),
            pending_shots: Vec::new(),
            kills,
        };
        state.refresh_rays()?;
        Ok(state)
    }

    pub fn apply_player_action(&mut self, action: Action, player_id: &str) {
        action.execute(player_id, self);
    }

    /// Advance the world by one tick: fly shots, cool weapons down, refresh
    /// perception, then bump the tick counter.
    pub fn step(&mut self) -> Result<(), GameError> {
        advance_shots(self);

        for stats in self.agent_stats.values_mut() {
            stats.shooting_delay = stats.shooting_delay.saturating_sub(1);
        }

        self.refresh_rays()?;
        self.tick += 1;
        debug!("Tick {} done, {} shots in flight", self.tick, self.pending_shots.len());
        Ok(())
    }

    /// Recompute the cached rays of every player, dead ones included.
    pub fn refresh_rays(&mut self) -> Result<(), GameError> {
        let mut rays = BTreeMap::new();
        for player_id in self.map.players.keys() {
            let fan = compute_rays(&self.map, &self.agent_stats, &self.config, player_id)?;
            rays.insert(player_id.clone(), fan);
        }
        self.rays = rays;
        Ok(())
    }

    /// Read-only view of what `player_id` currently perceives.
    pub fn percept(&self, player_id: &str) -> Result<Percept, GameError> {
        let player = self
            .map
            .player(player_id)
            .ok_or_else(|| GameError::UnknownPlayer(player_id.to_string()))?;
        let direction = player
            .direction
            .ok_or_else(|| GameError::UndefinedDirection(player_id.to_string()))?;
        let rays = self.rays.get(player_id).cloned().unwrap_or_default();
        Ok(Percept { rays, direction })
    }

    pub fn is_alive(&self, player_id: &str) -> bool {
        self.agent_stats.get(player_id).is_some_and(|s| s.is_alive)
    }

    pub fn player_team(&self, player_id: &str) -> Option<char> {
        self.map.player(player_id).map(|p| p.team)
    }

    /// Teams with at least one living player, sorted.
    pub fn alive_teams(&self) -> Vec<char> {
        let mut teams: Vec<char> = self
            .map
            .players
            .values()
            .filter(|p| self.is_alive(&p.player_id))
            .map(|p| p.team)
            .collect();
        teams.sort_unstable();
        teams.dedup();
        teams
    }

    pub fn kills_of(&self, player_id: &str) -> &[PlayerId] {
        self.kills.get(player_id).map(Vec::as_slice).unwrap_or(&[])
    }
}
