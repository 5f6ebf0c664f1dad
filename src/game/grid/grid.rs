use std::collections::BTreeMap;
use std::fs;
use std::ops::Range;
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::config::game::PLAYER_ROTATE_DEGREES;
use crate::game::entities::spawn_player;
use crate::game::error::MapError;
use crate::game::geometry::Vector2D;
use crate::game::types::{Cell, PlayerId, PlayerMapData};

const EMPTY_CHAR: char = '.';
const WALL_CHAR: char = '#';

/// Half-extent of a unit footprint plus half-extent of a wall: any wall farther
/// than this on either axis cannot touch the footprint.
const FOOTPRINT_REACH: f64 = 1.0;

/// Static layout plus live player placement.
///
/// The authored grid is always surrounded by a ring of wall cells, so every
/// position an agent can reach is enclosed.
#[derive(Debug, Clone, Serialize)]
pub struct GameMap {
    pub grid: Vec<Vec<Cell>>,
    pub width: usize,
    pub height: usize,
    pub walls: Vec<Vector2D>,
    pub players: BTreeMap<PlayerId, PlayerMapData>,
}

impl GameMap {
    /// Build a map from authored rows: `.` empty, `#` wall, any other
    /// character spawns a player of that team.
    pub fn new(rows: Vec<Vec<char>>) -> Result<Self, MapError> {
        let padded = pad_with_walls(rows)?;
        let height = padded.len();
        let width = padded[0].len();
        let center = map_center(width, height);

        let mut grid = vec![vec![Cell::Empty; width]; height];
        let mut walls = Vec::new();
        let mut players = BTreeMap::new();

        for (y, row) in padded.iter().enumerate() {
            for (x, &symbol) in row.iter().enumerate() {
                let position = Vector2D::new(x as f64, y as f64);
                match symbol {
                    EMPTY_CHAR => {}
                    WALL_CHAR => {
                        grid[y][x] = Cell::Wall;
                        walls.push(position);
                    }
                    team => {
                        let player = spawn_player(team, position, center, PLAYER_ROTATE_DEGREES);
                        players.insert(player.player_id.clone(), player);
                    }
                }
            }
        }

        let map = GameMap { grid, width, height, walls, players };
        info!(
            "Map loaded: {}x{}, {} walls, {} players in {} teams",
            map.width,
            map.height,
            map.walls.len(),
            map.players.len(),
            map.teams().len()
        );
        Ok(map)
    }

    /// Parse the text map format. Blank lines are skipped and short lines
    /// are right-padded with `.`.
    pub fn from_text(text: &str) -> Result<Self, MapError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();
        let max_width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        let rows = lines
            .iter()
            .map(|line| {
                let mut row: Vec<char> = line.chars().collect();
                row.resize(max_width, EMPTY_CHAR);
                row
            })
            .collect();
        Self::new(rows)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let text = fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    /// Point the default facings turn away from.
    pub fn center(&self) -> Vector2D {
        map_center(self.width, self.height)
    }

    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        self.grid
            .get(y)
            .and_then(|row| row.get(x))
            .is_some_and(|cell| *cell == Cell::Wall)
    }

    /// Walls whose footprint could overlap a unit footprint centered at `point`.
    ///
    /// The grid doubles as the bucket index: only the cells within one unit
    /// of `point` on each axis are inspected.
    pub fn nearest_walls(&self, point: Vector2D) -> impl Iterator<Item = Vector2D> + '_ {
        let xs = cell_span(point.x, self.width);
        let ys = cell_span(point.y, self.height);
        ys.flat_map(move |y| xs.clone().map(move |x| (x, y)))
            .filter(move |&(x, y)| self.grid[y][x] == Cell::Wall)
            .map(|(x, y)| Vector2D::new(x as f64, y as f64))
    }

    pub fn player(&self, player_id: &str) -> Option<&PlayerMapData> {
        self.players.get(player_id)
    }

    pub fn player_mut(&mut self, player_id: &str) -> Option<&mut PlayerMapData> {
        self.players.get_mut(player_id)
    }

    /// Ids of the players of `team`, in id order.
    pub fn players_in_team(&self, team: char) -> Vec<PlayerId> {
        self.players
            .values()
            .filter(|p| p.team == team)
            .map(|p| p.player_id.clone())
            .collect()
    }

    pub fn teams(&self) -> Vec<char> {
        let mut teams: Vec<char> = self.players.values().map(|p| p.team).collect();
        teams.sort_unstable();
        teams.dedup();
        teams
    }
}

fn map_center(width: usize, height: usize) -> Vector2D {
    Vector2D::new(width as f64, height as f64) / 2.0
}

fn pad_with_walls(rows: Vec<Vec<char>>) -> Result<Vec<Vec<char>>, MapError> {
    let width = rows.first().map(Vec::len).ok_or(MapError::Empty)?;
    if width == 0 {
        return Err(MapError::Empty);
    }
    if let Some((row, found)) = rows
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != width)
    {
        return Err(MapError::Ragged { row, expected: width, found });
    }

    let wall_row = vec![WALL_CHAR; width + 2];
    let mut padded = Vec::with_capacity(rows.len() + 2);
    padded.push(wall_row.clone());
    for row in rows {
        let mut line = Vec::with_capacity(width + 2);
        line.push(WALL_CHAR);
        line.extend(row);
        line.push(WALL_CHAR);
        padded.push(line);
    }
    padded.push(wall_row);
    Ok(padded)
}

/// Indices of the cells within `FOOTPRINT_REACH` of `coord`, clamped to `0..len`.
fn cell_span(coord: f64, len: usize) -> Range<usize> {
    let lo = (coord - FOOTPRINT_REACH).ceil().max(0.0);
    let hi = (coord + FOOTPRINT_REACH).floor().min(len as f64 - 1.0);
    if !(lo <= hi) {
        return 0..0;
    }
    lo as usize..hi as usize + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::collision::collision;
    use crate::game::types::GameObject;

    #[test]
    fn test_map_is_padded_with_walls() {
        let map = GameMap::from_text("...\n...").unwrap();
        assert_eq!(map.width, 5);
        assert_eq!(map.height, 4);
        for x in 0..map.width {
            assert!(map.is_wall(x, 0));
            assert!(map.is_wall(x, map.height - 1));
        }
        for y in 0..map.height {
            assert!(map.is_wall(0, y));
            assert!(map.is_wall(map.width - 1, y));
        }
        assert!(!map.is_wall(1, 1));
        assert_eq!(map.walls.len(), 14);
    }

    #[test]
    fn test_players_spawn_with_team_and_direction() {
        let map = GameMap::from_text("A..\n.#.\n..B").unwrap();
        assert_eq!(map.players.len(), 2);
        assert_eq!(map.teams(), vec!['A', 'B']);

        let a = map.player(&map.players_in_team('A')[0]).unwrap();
        assert_eq!(a.position, Vector2D::new(1.0, 1.0));
        assert!(a.direction.is_some());
        assert!(map.is_wall(2, 2));
    }

    #[test]
    fn test_short_lines_are_padded_and_blank_lines_skipped() {
        let map = GameMap::from_text("#....\n\n..\n").unwrap();
        assert_eq!(map.width, 7);
        assert_eq!(map.height, 4);
        assert!(map.is_wall(1, 1));
        assert!(!map.is_wall(5, 2));
    }

    #[test]
    fn test_empty_and_ragged_maps_rejected() {
        assert!(matches!(GameMap::from_text("\n\n"), Err(MapError::Empty)));
        let rows = vec![vec!['.', '.'], vec!['.']];
        assert!(matches!(
            GameMap::new(rows),
            Err(MapError::Ragged { row: 1, expected: 2, found: 1 })
        ));
    }

    #[test]
    fn test_nearest_walls_is_conservative() {
        let map = GameMap::from_text("..#..\n.....\n#...#").unwrap();
        let mut y = 0.0;
        while y <= (map.height - 1) as f64 {
            let mut x = 0.0;
            while x <= (map.width - 1) as f64 {
                let point = Vector2D::new(x, y);
                let near: Vec<Vector2D> = map.nearest_walls(point).collect();
                for wall in &map.walls {
                    if collision(point, *wall, GameObject::Wall) {
                        assert!(near.contains(wall), "{wall:?} missing near {point:?}");
                    }
                }
                x += 0.25;
            }
            y += 0.25;
        }
    }

    #[test]
    fn test_nearest_walls_is_local() {
        let map = GameMap::from_text(&".".repeat(20)).unwrap();
        let near: Vec<Vector2D> = map.nearest_walls(Vector2D::new(10.0, 1.0)).collect();
        assert_eq!(near.len(), 6);
        assert!(near.iter().all(|w| (w.x - 10.0).abs() <= 1.0));
    }

    #[test]
    fn test_map_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("level.txt");
        fs::write(&path, "A.\n.B\n").unwrap();
        let map = GameMap::from_file(&path).unwrap();
        assert_eq!(map.players.len(), 2);
        assert!(matches!(
            GameMap::from_file(dir.path().join("missing.txt")),
            Err(MapError::Io(_))
        ));
    }
}
