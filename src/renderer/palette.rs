//! Colors for game elements

use super::canvas::Color;

pub const SKY_TOP: Color = [0.33, 0.69, 0.91, 1.0];
pub const SKY_BOTTOM: Color = [0.62, 0.85, 0.96, 1.0];
pub const CLOUD: Color = [1.0, 1.0, 1.0, 0.75];
pub const HILLS: Color = [0.45, 0.75, 0.45, 1.0];
pub const GROUND: Color = [0.87, 0.78, 0.52, 1.0];
pub const GROUND_STRIPE: Color = [0.76, 0.65, 0.38, 1.0];
pub const GROUND_EDGE: Color = [0.36, 0.62, 0.2, 1.0];

pub const OBSTACLE: Color = [0.35, 0.75, 0.2, 1.0];
pub const OBSTACLE_CAP: Color = [0.42, 0.84, 0.25, 1.0];
pub const OBSTACLE_OUTLINE: Color = [0.13, 0.33, 0.07, 1.0];

pub const PROJECTILE: Color = [1.0, 0.85, 0.2, 1.0];
pub const PROJECTILE_TRAIL: Color = [1.0, 0.55, 0.1, 0.5];

pub const PLAYER_BODY: Color = [0.98, 0.8, 0.18, 1.0];
pub const PLAYER_WING: Color = [1.0, 0.93, 0.6, 1.0];
pub const PLAYER_OUTLINE: Color = [0.3, 0.2, 0.05, 1.0];
pub const PLAYER_EYE: Color = [1.0, 1.0, 1.0, 1.0];
pub const PLAYER_PUPIL: Color = [0.05, 0.05, 0.05, 1.0];
pub const PLAYER_BEAK: Color = [0.95, 0.45, 0.15, 1.0];

pub const SCALE_TRACK: Color = [0.0, 0.0, 0.0, 0.25];
pub const SCALE_TICK: Color = [1.0, 1.0, 1.0, 0.6];
pub const SCALE_MARKER: Color = [1.0, 0.3, 0.25, 1.0];

pub const HUD_TEXT: Color = [1.0, 1.0, 1.0, 1.0];
pub const HUD_SHADOW: Color = [0.0, 0.0, 0.0, 0.45];
pub const SCRIM: Color = [0.0, 0.0, 0.0, 0.5];
pub const TITLE: Color = [1.0, 0.86, 0.3, 1.0];
pub const GAME_OVER: Color = [1.0, 0.35, 0.3, 1.0];
pub const PROMPT: Color = [0.85, 0.95, 1.0, 1.0];
