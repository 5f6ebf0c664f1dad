//! Point/footprint intersection tests.
//!
//! Footprints are axis-aligned squares centered on a cell position. Bounds
//! are inclusive: a point exactly on the edge of a footprint touches it.

use crate::game::geometry::Vector2D;
use crate::game::types::GameObject;

/// True if `point` lies within the footprint of `object` centered at `cell`.
pub fn collision(point: Vector2D, cell: Vector2D, object: GameObject) -> bool {
    let half = object.size() / 2.0;
    (point.x - cell.x).abs() <= half && (point.y - cell.y).abs() <= half
}

/// True if an agent moved to `new_position` would stand inside `wall`.
pub fn collision_player_wall(new_position: Vector2D, wall: Vector2D) -> bool {
    collision(new_position, wall, GameObject::Wall)
}
