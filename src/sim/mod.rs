//! Skygate world simulation
//!
//! One `tick` moves the player, runs the spawn cadence, scrolls obstacles and
//! projectiles, then resolves hits and scoring. Removals are decided first and
//! applied in one compaction at the end of the tick. The only randomness is
//! the seeded obstacle height, so a seed plus an input log replays exactly.

pub mod collision;
pub mod geometry;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::{Resolution, player_hit, resolve};
pub use geometry::{Rect, aabb_intersects};
pub use state::{GameEvent, GamePhase, GameState, Obstacle, Player, Projectile};
pub use tick::{Command, TickInput, handle_command, tick};
