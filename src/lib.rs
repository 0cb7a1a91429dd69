//! Skygate - a gated-obstacle flyer on a fixed 400x600 field
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, phases)
//! - `renderer`: Draws a frame through the `Canvas` surface trait
//! - `platform`: Input mapping and the tick-boundary command queue
//! - `tuning`: Data-driven game balance
//! - `game`: Per-frame driver tying input, simulation and rendering together

pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use tuning::{Tuning, TuningError};

/// Play-field geometry. The surface size is constant for a session.
pub mod consts {
    /// Drawable surface width in device-independent pixels
    pub const FIELD_WIDTH: f32 = 400.0;
    /// Drawable surface height in device-independent pixels
    pub const FIELD_HEIGHT: f32 = 600.0;
    /// Ground strip drawn along the bottom edge
    pub const GROUND_HEIGHT: f32 = 25.0;
    /// Top of the ground strip; bottom obstacle segments end here
    pub const FLOOR_Y: f32 = FIELD_HEIGHT - GROUND_HEIGHT;

    /// Player horizontal position (never changes)
    pub const PLAYER_X: f32 = 80.0;
    /// Player vertical position at session start and after restart
    pub const PLAYER_START_Y: f32 = 250.0;
    /// Player hitbox edge length (square, centered on the player)
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const PLAYER_HALF: f32 = PLAYER_SIZE / 2.0;

    /// Obstacle segment width
    pub const OBSTACLE_WIDTH: f32 = 50.0;
    /// Decorative cap height drawn at each segment's open end
    pub const OBSTACLE_CAP_HEIGHT: f32 = 20.0;
    /// How far the cap overhangs the segment on each side
    pub const OBSTACLE_CAP_OVERHANG: f32 = 4.0;

    /// Projectile spawn offset from the player's position
    pub const PROJECTILE_OFFSET_X: f32 = 20.0;
    pub const PROJECTILE_OFFSET_Y: f32 = 10.0;
    /// Projectile hitbox (centered on the projectile)
    pub const PROJECTILE_WIDTH: f32 = 12.0;
    pub const PROJECTILE_HEIGHT: f32 = 4.0;

    /// Rotation clamp range (degrees)
    pub const MIN_ROTATION_DEG: f32 = -30.0;
    pub const MAX_ROTATION_DEG: f32 = 45.0;

    /// Width of the altitude scale in the left margin
    pub const SCALE_WIDTH: f32 = 10.0;
}

/// Lowest y the player center may reach before touching the floor
#[inline]
pub fn floor_limit() -> f32 {
    consts::FLOOR_Y - consts::PLAYER_HALF
}
