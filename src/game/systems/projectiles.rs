//! Projectile flight.
//!
//! Every tick each pending shot travels a fixed distance along its direction.
//! The travelled segment is marched in the same number of steps as a
//! perception ray; at each step living agents are tested before walls.

use std::collections::BTreeMap;

use log::{debug, info};

use crate::config::GameConfig;
use crate::game::collision::collision;
use crate::game::grid::GameMap;
use crate::game::state::GameState;
use crate::game::systems::perception::{is_alive, relation};
use crate::game::types::{AgentStats, GameObject, PendingShot, PlayerId};

#[derive(Debug, Clone, PartialEq)]
enum ShotOutcome {
    HitPlayer(PlayerId),
    HitWall,
    Flying(PendingShot),
    Expired,
}

/// Advance all pending shots by one tick, resolving hits and expiries.
pub fn advance_shots(game_state: &mut GameState) {
    let shots = std::mem::take(&mut game_state.pending_shots);
    let mut survivors = Vec::with_capacity(shots.len());

    for shot in shots {
        match fly(&game_state.map, &game_state.agent_stats, &game_state.config, &shot) {
            ShotOutcome::HitPlayer(victim) => {
                if let Some(stats) = game_state.agent_stats.get_mut(&victim) {
                    stats.is_alive = false;
                }
                info!("Player {} killed {}", shot.player_id, victim);
                game_state
                    .kills
                    .entry(shot.player_id.clone())
                    .or_default()
                    .push(victim);
            }
            ShotOutcome::HitWall => {
                debug!("Shot from {} hit a wall", shot.player_id);
            }
            ShotOutcome::Flying(next) => survivors.push(next),
            ShotOutcome::Expired => {
                debug!("Shot from {} expired", shot.player_id);
            }
        }
    }

    game_state.pending_shots = survivors;
}

fn fly(
    map: &GameMap,
    agent_stats: &BTreeMap<PlayerId, AgentStats>,
    config: &GameConfig,
    shot: &PendingShot,
) -> ShotOutcome {
    let shooter_team = map.player(&shot.player_id).map(|p| p.team);
    let travel = shot.direction * config.shot_speed;

    for step in 1..=config.ray_steps {
        let fraction = step as f64 / config.ray_steps as f64;
        let point = shot.origin + travel * fraction;

        for other in map.players.values() {
            if other.player_id == shot.player_id || !is_alive(agent_stats, &other.player_id) {
                continue;
            }
            let obj = match shooter_team {
                Some(team) => relation(team, other.team),
                None => GameObject::Enemy,
            };
            if collision(point, other.position, obj) {
                return ShotOutcome::HitPlayer(other.player_id.clone());
            }
        }

        if map
            .nearest_walls(point)
            .any(|wall| collision(point, wall, GameObject::Wall))
        {
            return ShotOutcome::HitWall;
        }
    }

    if shot.remaining_ticks > 1 {
        ShotOutcome::Flying(PendingShot {
            origin: shot.origin + travel,
            remaining_ticks: shot.remaining_ticks - 1,
            ..shot.clone()
        })
    } else {
        ShotOutcome::Expired
    }
}
