pub mod actions;
pub mod movement;
pub mod perception;
pub mod projectiles;
pub mod render;

pub use actions::*;
pub use movement::*;
pub use perception::*;
pub use projectiles::*;
pub use render::*;
