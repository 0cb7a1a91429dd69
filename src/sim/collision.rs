//! Collision detection and scoring
//!
//! Runs after every entity has advanced for the tick. Removals are collected
//! first and compacted once at the end so iteration order stays stable.

use super::state::{GameEvent, GameState, Obstacle, Player};

/// Outcome of resolving one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing fatal happened
    Clear,
    /// The player touched an obstacle; the round must end
    PlayerHit { obstacle_id: u32 },
}

/// First obstacle (in collection order) whose top or bottom segment touches
/// the player's hitbox
pub fn player_hit(player: &Player, obstacles: &[Obstacle]) -> Option<u32> {
    let hitbox = player.hitbox();
    obstacles.iter().find(|o| o.hits(&hitbox)).map(|o| o.id)
}

/// Resolve collisions and scoring for the current tick.
///
/// A player collision skips scoring and projectile hits so the fatal frame
/// stays on screen. Entities that left the field this tick are still dropped.
pub fn resolve(state: &mut GameState, events: &mut Vec<GameEvent>) -> Resolution {
    if let Some(obstacle_id) = player_hit(&state.player, &state.obstacles) {
        drop_departed(state);
        return Resolution::PlayerHit { obstacle_id };
    }

    score_passed(state, events);
    resolve_projectiles(state, events);
    Resolution::Clear
}

/// Award the pass score for every obstacle whose trailing edge is now strictly
/// left of the player
fn score_passed(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let player_x = state.player.pos.x;
    let pass_score = state.tuning.pass_score;

    for obstacle in &mut state.obstacles {
        if !obstacle.passed && obstacle.right() < player_x {
            obstacle.passed = true;
            state.score += pass_score;
            log::debug!("passed obstacle {} (score {})", obstacle.id, state.score);
            events.push(GameEvent::Scored {
                obstacle_id: obstacle.id,
                score: state.score,
            });
        }
    }
}

/// Remove obstacles that scrolled off the left edge and projectiles that
/// flew past the right edge
fn drop_departed(state: &mut GameState) {
    state.obstacles.retain(|o| !o.is_off_screen());
    state.projectiles.retain(|p| !p.is_off_field());
}

/// Match projectiles against obstacles, then drop everything that was hit or
/// left the field in a single compaction pass
fn resolve_projectiles(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let mut destroyed = vec![false; state.obstacles.len()];
    let mut consumed = vec![false; state.projectiles.len()];

    for (pi, projectile) in state.projectiles.iter().enumerate() {
        let hitbox = projectile.hitbox();
        let target = state
            .obstacles
            .iter()
            .enumerate()
            .position(|(oi, o)| !destroyed[oi] && o.hits(&hitbox));

        if let Some(oi) = target {
            destroyed[oi] = true;
            consumed[pi] = true;
            state.score += state.tuning.destroy_bonus;
            let obstacle_id = state.obstacles[oi].id;
            log::debug!(
                "projectile {} destroyed obstacle {} (score {})",
                projectile.id,
                obstacle_id,
                state.score
            );
            events.push(GameEvent::ObstacleDestroyed {
                obstacle_id,
                projectile_id: projectile.id,
                score: state.score,
            });
        }
    }

    state.obstacles = std::mem::take(&mut state.obstacles)
        .into_iter()
        .zip(destroyed)
        .filter(|(o, hit)| !hit && !o.is_off_screen())
        .map(|(o, _)| o)
        .collect();

    state.projectiles = std::mem::take(&mut state.projectiles)
        .into_iter()
        .zip(consumed)
        .filter(|(p, hit)| !hit && !p.is_off_field())
        .map(|(p, _)| p)
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn state_with_player_at(y: f32) -> GameState {
        let mut state = GameState::new(5);
        state.player.pos.y = y;
        state
    }

    #[test]
    fn test_obstacle_right_of_player_never_hits() {
        // Top 200 / gap 120; player hitbox 65..95 x 175..205 overlaps the top segment in y
        let mut state = state_with_player_at(190.0);
        state.push_obstacle(400.0, 200.0);

        let mut x = 400.0;
        while x > 95.0 {
            state.obstacles[0].x = x;
            assert!(player_hit(&state.player, &state.obstacles).is_none(), "x = {x}");
            x -= 2.5;
        }
        state.obstacles[0].x = 95.0;
        assert!(player_hit(&state.player, &state.obstacles).is_none());
    }

    #[test]
    fn test_obstacle_overlapping_player_hits() {
        let mut state = state_with_player_at(190.0);
        let id = state.push_obstacle(94.0, 200.0);
        assert_eq!(player_hit(&state.player, &state.obstacles), Some(id));

        state.obstacles[0].x = 16.0;
        assert_eq!(player_hit(&state.player, &state.obstacles), Some(id));

        state.obstacles[0].x = 15.0;
        assert!(player_hit(&state.player, &state.obstacles).is_none());
    }

    #[test]
    fn test_player_inside_gap_is_safe() {
        // Hitbox 235..265 sits inside the 200..320 opening
        let mut state = state_with_player_at(250.0);
        state.push_obstacle(60.0, 200.0);
        assert!(player_hit(&state.player, &state.obstacles).is_none());
    }

    #[test]
    fn test_bottom_segment_hits() {
        let mut state = state_with_player_at(310.0);
        let id = state.push_obstacle(70.0, 200.0);
        assert_eq!(player_hit(&state.player, &state.obstacles), Some(id));
    }

    #[test]
    fn test_player_hit_short_circuits_scoring() {
        let mut state = state_with_player_at(190.0);
        state.push_obstacle(10.0, 50.0); // already past, unscored
        state.push_obstacle(70.0, 200.0);
        let mut events = Vec::new();

        let resolution = resolve(&mut state, &mut events);

        assert!(matches!(resolution, Resolution::PlayerHit { .. }));
        assert_eq!(state.score, 0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_player_hit_keeps_fatal_obstacle_but_drops_departed() {
        let mut state = state_with_player_at(190.0);
        state.push_obstacle(-60.0, 100.0);
        let fatal = state.push_obstacle(70.0, 200.0);
        let live = state.push_projectile(Vec2::new(200.0, 260.0));
        state.push_projectile(Vec2::new(410.0, 260.0));
        let mut events = Vec::new();

        let resolution = resolve(&mut state, &mut events);

        assert_eq!(resolution, Resolution::PlayerHit { obstacle_id: fatal });
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].id, fatal);
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.projectiles[0].id, live);
    }

    #[test]
    fn test_pass_scored_exactly_once() {
        let mut state = state_with_player_at(250.0);
        state.push_obstacle(29.0, 200.0); // right edge 79 < 80
        let mut events = Vec::new();

        resolve(&mut state, &mut events);
        assert!(state.obstacles[0].passed);
        assert_eq!(state.score, 1);

        resolve(&mut state, &mut events);
        assert_eq!(state.score, 1);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_trailing_edge_at_player_x_not_yet_passed() {
        let mut state = state_with_player_at(250.0);
        state.push_obstacle(30.0, 200.0); // right edge exactly 80
        let mut events = Vec::new();
        resolve(&mut state, &mut events);
        assert!(!state.obstacles[0].passed);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_projectile_destroys_obstacle_for_bonus() {
        let mut state = state_with_player_at(250.0);
        let obstacle_id = state.push_obstacle(300.0, 100.0);
        let projectile_id = state.push_projectile(Vec2::new(305.0, 50.0));
        let mut events = Vec::new();

        resolve(&mut state, &mut events);

        assert!(state.obstacles.is_empty());
        assert!(state.projectiles.is_empty());
        assert_eq!(state.score, state.tuning.destroy_bonus);
        assert!(state.tuning.destroy_bonus > state.tuning.pass_score);
        assert_eq!(
            events,
            vec![GameEvent::ObstacleDestroyed {
                obstacle_id,
                projectile_id,
                score: 5
            }]
        );
    }

    #[test]
    fn test_projectile_in_gap_passes_through() {
        let mut state = state_with_player_at(250.0);
        state.push_obstacle(300.0, 100.0);
        state.push_projectile(Vec2::new(320.0, 160.0));
        let mut events = Vec::new();

        resolve(&mut state, &mut events);

        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_projectile_destroys_only_first_obstacle() {
        let mut state = state_with_player_at(250.0);
        let first = state.push_obstacle(200.0, 300.0);
        let second = state.push_obstacle(205.0, 300.0);
        state.push_projectile(Vec2::new(230.0, 100.0));
        let mut events = Vec::new();

        resolve(&mut state, &mut events);

        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].id, second);
        assert_eq!(state.score, 5);
        assert!(matches!(
            events[0],
            GameEvent::ObstacleDestroyed { obstacle_id, .. } if obstacle_id == first
        ));
    }

    #[test]
    fn test_second_projectile_takes_remaining_obstacle() {
        let mut state = state_with_player_at(250.0);
        state.push_obstacle(200.0, 300.0);
        state.push_obstacle(205.0, 300.0);
        state.push_projectile(Vec2::new(230.0, 100.0));
        state.push_projectile(Vec2::new(232.0, 150.0));
        let mut events = Vec::new();

        resolve(&mut state, &mut events);

        assert!(state.obstacles.is_empty());
        assert!(state.projectiles.is_empty());
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_off_field_projectile_discarded_without_score() {
        let mut state = state_with_player_at(250.0);
        state.push_projectile(Vec2::new(401.0, 260.0));
        let mut events = Vec::new();

        resolve(&mut state, &mut events);

        assert!(state.projectiles.is_empty());
        assert_eq!(state.score, 0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_passed_then_destroyed_scores_both_once() {
        let mut state = state_with_player_at(250.0);
        state.push_obstacle(10.0, 300.0); // right edge 60, already behind the player
        state.push_projectile(Vec2::new(40.0, 100.0));
        let mut events = Vec::new();

        resolve(&mut state, &mut events);

        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, 1 + 5);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_off_screen_obstacle_removed() {
        let mut state = state_with_player_at(250.0);
        state.push_obstacle(-51.0, 200.0);
        state.obstacles[0].passed = true;
        let mut events = Vec::new();

        resolve(&mut state, &mut events);

        assert!(state.obstacles.is_empty());
        assert!(events.is_empty());
    }
}
