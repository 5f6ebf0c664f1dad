/// Game configuration constants.
///
/// This module defines the default gameplay parameters: turn granularity,
/// perception fan, movement step, shooting cooldown and projectile flight.
pub const PLAYER_ROTATE_DEGREES: f64 = 45.0; // Turn granularity in degrees.

/// Field of view of an agent, in degrees, centered on its facing direction.
pub const PLAYER_VIEW_FOV: f64 = 90.0;

/// Number of perception rays cast across the field of view.
pub const PLAYER_NUM_RAYS: usize = 21;

/// Maximum perception range, in cells.
pub const PLAYER_RAY_LENGTH: f64 = 10.0;

/// Number of march steps used by perception rays and projectiles.
pub const RAY_TRACER_STEPS: usize = 40;

/// Distance covered by a single Forward action, in cells.
pub const PLAYER_FORWARD_DISTANCE: f64 = 0.5;

/// Ticks an agent must wait after firing before it can fire again.
pub const PLAYER_SHOOTING_DELAY_TICKS: u32 = 5;

/// Number of ticks a shot stays in flight before expiring.
pub const SHOT_LIFETIME_TICKS: u32 = 10;

/// Distance a shot travels per tick, in cells.
pub const SHOT_SPEED: f64 = 2.0;

/// Number of past actions remembered by the bundled agents.
pub const PLAYER_LAST_ACTIONS_LEN: usize = 5;

/// Tick limit after which a simulation is considered complete.
pub const MAX_TICKS: u64 = 500;
