use serde::{Deserialize, Serialize};

use crate::game::geometry::Vector2D;

/// Stable agent identifier (a UUID v4 string generated at map load).
pub type PlayerId = String;

/// Static content of a map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Wall,
}

/// What a sample point can touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameObject {
    None,
    Wall,
    Teammate,
    Enemy,
}

impl GameObject {
    /// Side of the square footprint used for collision tests.
    pub fn size(self) -> f64 {
        match self {
            GameObject::None => 0.0,
            GameObject::Wall | GameObject::Teammate | GameObject::Enemy => 1.0,
        }
    }
}

/// Placement of one agent on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerMapData {
    pub player_id: PlayerId,
    pub team: char,
    pub position: Vector2D,
    pub direction: Option<Vector2D>,
}

impl PlayerMapData {
    pub fn new(player_id: PlayerId, team: char, position: Vector2D) -> Self {
        Self {
            player_id,
            team,
            position,
            direction: None,
        }
    }
}

/// Mutable combat state of one agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentStats {
    pub is_alive: bool,
    pub shooting_delay: u32,
}

impl Default for AgentStats {
    fn default() -> Self {
        Self {
            is_alive: true,
            shooting_delay: 0,
        }
    }
}

/// A projectile in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingShot {
    pub player_id: PlayerId,
    pub origin: Vector2D,
    pub direction: Vector2D,
    pub remaining_ticks: u32,
}

/// One perception sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// Normalized hit distance in [0, 1]; 1.0 means nothing was hit.
    pub distance: f64,
    pub obj: GameObject,
    /// Absolute angle the ray was cast at, in degrees.
    pub angle: f64,
}

/// Read-only snapshot handed to an agent's decision policy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Percept {
    pub rays: Vec<Ray>,
    pub direction: Vector2D,
}

/// Everything an agent can do in one round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Forward,
    TurnLeft,
    TurnRight,
    /// Fire with an angle offset, in degrees, relative to the facing direction.
    Shoot { angle: f64 },
    Wait,
}
