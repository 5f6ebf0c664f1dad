/// Main configuration module.
///
/// `game` holds the compile-time defaults, `settings` the runtime
/// configuration owned by the game state.
pub mod game;
pub mod settings;

pub use settings::{ConfigError, GameConfig};
