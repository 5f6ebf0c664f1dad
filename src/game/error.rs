use thiserror::Error;

use crate::config::ConfigError;
use crate::game::types::PlayerId;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Map has no rows")]
    Empty,

    #[error("Row {row} has width {found}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Player {0} has no facing direction")]
    UndefinedDirection(PlayerId),

    #[error("Unknown player: {0}")]
    UnknownPlayer(PlayerId),
}
