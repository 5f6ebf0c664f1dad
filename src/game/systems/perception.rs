//! Ray-casting perception.
//!
//! Each agent sees the world as a fan of rays spread evenly across its field
//! of view. Rays are marched in fixed steps from the caster's position and
//! stop at the first wall or living agent they touch. A hit is always
//! closer than the full range, so a distance of 1.0 means nothing was seen.
//! The first sample is the caster's own cell, so a living agent overlapping
//! the caster is reported at distance 0.0.

use std::collections::BTreeMap;

use crate::config::GameConfig;
use crate::game::collision::collision;
use crate::game::error::GameError;
use crate::game::geometry::Vector2D;
use crate::game::grid::GameMap;
use crate::game::types::{AgentStats, GameObject, PlayerId, PlayerMapData, Ray};

/// Cast the full ray fan for `player_id`.
///
/// Fails if the player is unknown or has no facing direction.
pub fn compute_rays(
    map: &GameMap,
    agent_stats: &BTreeMap<PlayerId, AgentStats>,
    config: &GameConfig,
    player_id: &str,
) -> Result<Vec<Ray>, GameError> {
    let caster = map
        .player(player_id)
        .ok_or_else(|| GameError::UnknownPlayer(player_id.to_string()))?;
    let facing = caster
        .direction
        .ok_or_else(|| GameError::UndefinedDirection(player_id.to_string()))?;

    let base_angle = facing.base_angle();
    let (start_angle, angle_step) = if config.num_rays > 1 {
        (
            base_angle - config.view_fov / 2.0,
            config.view_fov / (config.num_rays - 1) as f64,
        )
    } else {
        (base_angle, 0.0)
    };

    let rays = (0..config.num_rays)
        .map(|i| {
            let angle = start_angle + i as f64 * angle_step;
            cast_single_ray(map, agent_stats, config, caster, angle)
        })
        .collect();
    Ok(rays)
}

fn cast_single_ray(
    map: &GameMap,
    agent_stats: &BTreeMap<PlayerId, AgentStats>,
    config: &GameConfig,
    caster: &PlayerMapData,
    angle: f64,
) -> Ray {
    let direction = Vector2D::from_angle(angle);
    for step in 0..config.ray_steps {
        let fraction = step as f64 / config.ray_steps as f64;
        let point = caster.position + direction * (fraction * config.ray_length);

        let obj = object_at(map, agent_stats, caster, point);
        if obj != GameObject::None {
            return Ray { distance: fraction, obj, angle };
        }
    }
    Ray { distance: 1.0, obj: GameObject::None, angle }
}

/// What `point` touches, as seen by `caster`. Walls are tested first so a
/// wall occludes an agent standing right behind it.
fn object_at(
    map: &GameMap,
    agent_stats: &BTreeMap<PlayerId, AgentStats>,
    caster: &PlayerMapData,
    point: Vector2D,
) -> GameObject {
    if map
        .nearest_walls(point)
        .any(|wall| collision(point, wall, GameObject::Wall))
    {
        return GameObject::Wall;
    }

    for other in map.players.values() {
        if other.player_id == caster.player_id || !is_alive(agent_stats, &other.player_id) {
            continue;
        }
        let obj = relation(caster.team, other.team);
        if collision(point, other.position, obj) {
            return obj;
        }
    }
    GameObject::None
}

/// How a member of `own_team` classifies a member of `other_team`.
pub fn relation(own_team: char, other_team: char) -> GameObject {
    if own_team == other_team {
        GameObject::Teammate
    } else {
        GameObject::Enemy
    }
}

pub(crate) fn is_alive(agent_stats: &BTreeMap<PlayerId, AgentStats>, player_id: &str) -> bool {
    agent_stats.get(player_id).is_some_and(|s| s.is_alive)
}
