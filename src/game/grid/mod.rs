//! Map layout and spatial queries.

pub mod grid;

pub use grid::*;
