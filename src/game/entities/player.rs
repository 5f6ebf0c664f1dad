//! Player entity logic.
//!
//! Players are spawned while the map is classified: each one gets a fresh
//! UUID and a default facing pointing away from the map center.

use log::debug;
use uuid::Uuid;

use crate::game::geometry::{closest_vec_multiple_angle, Vector2D};
use crate::game::types::PlayerMapData;

/// Generate a new player of `team` standing at `position`.
pub fn spawn_player(team: char, position: Vector2D, center: Vector2D, rotate_degrees: f64) -> PlayerMapData {
    let mut player = PlayerMapData::new(Uuid::new_v4().to_string(), team, position);
    player.direction = Some(default_direction(position, center, rotate_degrees));
    player
}

/// Direction pointing away from `center`, snapped to the turn granularity.
/// A player standing exactly on the center faces east.
pub fn default_direction(position: Vector2D, center: Vector2D, rotate_degrees: f64) -> Vector2D {
    match (position - center).versor() {
        Some(away) => closest_vec_multiple_angle(away, rotate_degrees),
        None => {
            debug!("Player at {:?} stands on the map center, facing east", position);
            Vector2D::new(1.0, 0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawned_players_get_unique_ids() {
        let center = Vector2D::new(5.0, 5.0);
        let a = spawn_player('A', Vector2D::new(1.0, 1.0), center, 45.0);
        let b = spawn_player('A', Vector2D::new(1.0, 1.0), center, 45.0);
        assert_ne!(a.player_id, b.player_id);
        assert_eq!(a.team, 'A');
    }

    #[test]
    fn test_default_direction_points_away_from_center() {
        let center = Vector2D::new(5.0, 5.0);
        let dir = default_direction(Vector2D::new(9.0, 5.2), center, 45.0);
        assert!((dir.x - 1.0).abs() < 1e-9 && dir.y.abs() < 1e-9);

        let dir = default_direction(Vector2D::new(1.0, 1.0), center, 45.0);
        assert!((dir.base_angle() - -135.0).abs() < 1e-9);
    }

    #[test]
    fn test_player_on_center_faces_east() {
        let center = Vector2D::new(2.0, 2.0);
        assert_eq!(default_direction(center, center, 45.0), Vector2D::new(1.0, 0.0));
    }
}
