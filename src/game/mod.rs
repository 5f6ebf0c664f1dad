//! Simulation state engine: map, collision, perception, actions and
//! projectile flight.

pub mod collision;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod state;
pub mod systems;
pub mod types;


pub use error::{GameError, MapError};
pub use geometry::Vector2D;
pub use grid::GameMap;
pub use state::GameState;
pub use types::*;
