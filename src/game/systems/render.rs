//! Text rendering of the game state.

use crate::game::state::GameState;
use crate::game::types::Cell;

/// Anything that can show successive game states.
pub trait RenderEngine {
    fn display(&mut self, game_state: &GameState);

    fn stop(&mut self) {}
}

/// Renders nothing.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl RenderEngine for NullRenderer {
    fn display(&mut self, _game_state: &GameState) {}
}

/// Prints each state as a character grid on stdout.
#[derive(Debug, Default)]
pub struct ConsoleRenderer;

impl RenderEngine for ConsoleRenderer {
    fn display(&mut self, game_state: &GameState) {
        println!("{}", render_frame(game_state));
    }
}

/// Build the text frame for `game_state`: `#` wall, lower-case team letter
/// for a living player, `x` for a dead one, `*` for a shot in flight.
pub fn render_frame(game_state: &GameState) -> String {
    let map = &game_state.map;
    let mut display: Vec<Vec<char>> = map
        .grid
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Cell::Wall => '#',
                    Cell::Empty => ' ',
                })
                .collect()
        })
        .collect();

    let mut place = |x: f64, y: f64, symbol: char| {
        let (x, y) = (x.round(), y.round());
        if x >= 0.0 && y >= 0.0 {
            if let Some(slot) = display.get_mut(y as usize).and_then(|row| row.get_mut(x as usize)) {
                *slot = symbol;
            }
        }
    };

    for shot in &game_state.pending_shots {
        place(shot.origin.x, shot.origin.y, '*');
    }
    // Living players on top.
    let (alive, dead): (Vec<_>, Vec<_>) = map
        .players
        .values()
        .partition(|p| game_state.is_alive(&p.player_id));
    for player in dead {
        place(player.position.x, player.position.y, 'x');
    }
    for player in alive {
        place(player.position.x, player.position.y, player.team.to_ascii_lowercase());
    }

    let mut frame = format!("Tick: {}\n", game_state.tick);
    for row in display {
        frame.extend(row);
        frame.push('\n');
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::grid::GameMap;

    #[test]
    fn test_render_frame_layout() {
        let map = GameMap::from_text("A.b").unwrap();
        let state = GameState::new(map, GameConfig::default()).unwrap();
        let frame = render_frame(&state);
        assert_eq!(frame, "Tick: 0\n#####\n#a b#\n#####\n");
    }

    #[test]
    fn test_dead_players_and_shots() {
        let map = GameMap::from_text("A..B").unwrap();
        let mut state = GameState::new(map, GameConfig::default()).unwrap();
        let b = state.map.players_in_team('B')[0].clone();
        state.agent_stats.get_mut(&b).unwrap().is_alive = false;
        state.pending_shots.push(crate::game::types::PendingShot {
            player_id: b,
            origin: crate::game::geometry::Vector2D::new(2.2, 0.9),
            direction: crate::game::geometry::Vector2D::new(1.0, 0.0),
            remaining_ticks: 1,
        });
        let frame = render_frame(&state);
        assert_eq!(frame.lines().nth(2), Some("#a* x#"));
    }
}
