//! Data-driven game balance
//!
//! Every gameplay constant that is not field geometry lives here so it can be
//! overridden from JSON without recompiling. Missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{FLOOR_Y, PLAYER_SIZE};

/// Errors raised while loading a tuning override
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Gameplay balance values, all expressed per fixed tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Added to the player's vertical velocity every tick
    pub gravity: f32,
    /// Vertical velocity set by a jump (negative is upward)
    pub jump_impulse: f32,
    /// Degrees of rotation per unit of vertical velocity
    pub rotation_factor: f32,

    /// Leftward obstacle speed
    pub obstacle_speed: f32,
    /// Ticks between obstacle spawns
    pub spawn_interval: u64,
    /// Vertical opening between the top and bottom segments
    pub gap: f32,
    /// Inclusive range for the randomized top-segment height
    pub min_top_height: f32,
    pub max_top_height: f32,

    /// Rightward projectile speed
    pub projectile_speed: f32,

    /// Points for flying past an obstacle
    pub pass_score: u64,
    /// Points for destroying an obstacle with a projectile
    pub destroy_bonus: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            jump_impulse: -8.0,
            rotation_factor: 3.0,

            obstacle_speed: 2.5,
            spawn_interval: 90,
            gap: 120.0,
            min_top_height: 50.0,
            max_top_height: 330.0,

            projectile_speed: 8.0,

            pass_score: 1,
            destroy_bonus: 5,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would make the game unplayable
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        if self.gravity <= 0.0 {
            return invalid("gravity", "must be positive");
        }
        if self.jump_impulse >= 0.0 {
            return invalid("jump_impulse", "must be negative (upward)");
        }
        if self.obstacle_speed <= 0.0 {
            return invalid("obstacle_speed", "must be positive");
        }
        if self.projectile_speed <= 0.0 {
            return invalid("projectile_speed", "must be positive");
        }
        if self.spawn_interval == 0 {
            return invalid("spawn_interval", "must be at least one tick");
        }
        if self.gap <= PLAYER_SIZE {
            return invalid("gap", "must be wider than the player");
        }
        if self.min_top_height < 0.0 || self.min_top_height > self.max_top_height {
            return invalid("min_top_height", "must be non-negative and not above max_top_height");
        }
        if self.max_top_height + self.gap > FLOOR_Y {
            return invalid("max_top_height", "gap must fit above the floor");
        }
        if self.destroy_bonus <= self.pass_score {
            return invalid("destroy_bonus", "must exceed pass_score");
        }
        Ok(())
    }
}
