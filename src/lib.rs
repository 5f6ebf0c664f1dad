//! Discrete-tick, grid-based multi-agent combat simulation.
//!
//! Agents stand on a walled grid, perceive it through a fan of distance
//! rays, and each round move, turn, shoot or wait. `game` holds the state
//! engine, `agents` the decision policies, `session` the round loop.

pub mod agents;
pub mod config;
pub mod game;
pub mod session;
