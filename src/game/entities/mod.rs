//! Game entities module.
//!
//! This module organizes player spawning and shot creation logic.

pub mod player;
pub mod shot;

pub use player::*;
pub use shot::*;
