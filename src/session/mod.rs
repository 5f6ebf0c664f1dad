//! Round orchestration: percepts, decisions, sequential action resolution
//! and the tick engine, looped until the match is over.

pub mod game_loop;
pub mod turn_resolution;

#[cfg(test)]
mod tests;

pub use game_loop::{MatchSummary, Simulation};
pub use turn_resolution::resolve_round;
