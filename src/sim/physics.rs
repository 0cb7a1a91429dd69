//! Player integration, obstacle spawning and entity advance
//!
//! Every step is a fixed per-tick increment; there is no delta time.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Player, Projectile};
use crate::consts::*;
use crate::tuning::Tuning;

/// Semi-implicit Euler: velocity first, then position with the new velocity.
/// Rotation follows the new velocity and never feeds back into physics.
pub fn integrate_player(player: &mut Player, tuning: &Tuning) {
    player.vel += tuning.gravity;
    player.pos.y += player.vel;
    player.rotation = Player::rotation_for(player.vel, tuning.rotation_factor);
}

/// Player touched the floor or left through the top edge
pub fn out_of_bounds(player: &Player) -> bool {
    player.pos.y > crate::floor_limit() || player.pos.y < 0.0
}

/// Velocity override (not additive)
pub fn apply_jump(player: &mut Player, tuning: &Tuning) {
    player.vel = tuning.jump_impulse;
}

/// Fire a projectile from the player's current position
pub fn fire(state: &mut GameState) -> u32 {
    let origin = state.player.pos + Vec2::new(PROJECTILE_OFFSET_X, PROJECTILE_OFFSET_Y);
    state.push_projectile(origin)
}

/// Advance the frame counter and spawn an obstacle on the cadence.
/// Returns the new obstacle's ID when one spawned.
pub fn advance_spawner(state: &mut GameState) -> Option<u32> {
    state.frame += 1;
    if !state.frame.is_multiple_of(state.tuning.spawn_interval) {
        return None;
    }

    let (min, max) = (state.tuning.min_top_height, state.tuning.max_top_height);
    let top_height = state.rng.random_range(min..=max);
    let id = state.push_obstacle(FIELD_WIDTH, top_height);
    log::debug!(
        "frame {}: spawned obstacle {} (top {:.1})",
        state.frame,
        id,
        top_height
    );
    Some(id)
}

/// Scroll obstacles left and move projectiles right
pub fn advance_entities(state: &mut GameState) {
    let obstacle_speed = state.tuning.obstacle_speed;
    for obstacle in &mut state.obstacles {
        obstacle.x -= obstacle_speed;
    }

    let projectile_speed = state.tuning.projectile_speed;
    for projectile in &mut state.projectiles {
        advance_projectile(projectile, projectile_speed);
    }
}

#[inline]
fn advance_projectile(projectile: &mut Projectile, speed: f32) {
    projectile.pos.x += speed;
}
