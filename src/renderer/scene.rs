//! Frame composition
//!
//! Paints one frame from the world state. Drawing order is back to front:
//! background, altitude scale, obstacles, projectiles, player, HUD, overlay.

use super::canvas::{Canvas, Color, TextAlign};
use super::palette;
use crate::consts::*;
use crate::sim::{GamePhase, GameState, Obstacle, Player, Projectile};

/// Number of flat bands used to fake the sky gradient
const SKY_BANDS: usize = 6;

/// Static clouds: (center x, center y, scale)
const CLOUDS: [(f32, f32, f32); 4] = [
    (70.0, 90.0, 1.0),
    (250.0, 60.0, 1.3),
    (340.0, 170.0, 0.8),
    (160.0, 230.0, 0.9),
];

/// Static hills along the horizon: (center x, radius)
const HILLS: [(f32, f32); 4] = [(40.0, 70.0), (150.0, 50.0), (270.0, 80.0), (390.0, 55.0)];

/// Spacing of altitude scale ticks (major ticks every other one)
const SCALE_TICK_SPACING: f32 = 50.0;

/// Render the complete frame. Never mutates the world.
pub fn render<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    draw_background(canvas);
    draw_altitude_scale(canvas, state.player.pos.y);

    for obstacle in &state.obstacles {
        draw_obstacle(canvas, obstacle);
    }
    for projectile in &state.projectiles {
        draw_projectile(canvas, projectile);
    }
    draw_player(canvas, &state.player);

    draw_hud(canvas, state);

    match state.phase {
        GamePhase::Start => draw_start_overlay(canvas, state),
        GamePhase::GameOver => draw_game_over_overlay(canvas, state),
        GamePhase::Playing => {}
    }
}

fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ]
}

fn draw_background<C: Canvas + ?Sized>(canvas: &mut C) {
    let (width, _) = canvas.size();
    let band_height = FLOOR_Y / SKY_BANDS as f32;
    for i in 0..SKY_BANDS {
        let t = i as f32 / (SKY_BANDS - 1) as f32;
        canvas.set_fill(lerp_color(palette::SKY_TOP, palette::SKY_BOTTOM, t));
        // Overlap by a pixel to avoid seams
        canvas.fill_rect(0.0, i as f32 * band_height, width, band_height + 1.0);
    }

    canvas.set_fill(palette::CLOUD);
    for &(cx, cy, scale) in &CLOUDS {
        canvas.fill_ellipse(cx, cy, 28.0 * scale, 14.0 * scale);
        canvas.fill_ellipse(cx - 20.0 * scale, cy + 4.0 * scale, 18.0 * scale, 10.0 * scale);
        canvas.fill_ellipse(cx + 22.0 * scale, cy + 5.0 * scale, 16.0 * scale, 9.0 * scale);
    }

    canvas.set_fill(palette::HILLS);
    for &(cx, r) in &HILLS {
        canvas.fill_ellipse(cx, FLOOR_Y, r, r * 0.6);
    }

    canvas.set_fill(palette::GROUND);
    canvas.fill_rect(0.0, FLOOR_Y, FIELD_WIDTH, GROUND_HEIGHT);
    canvas.set_fill(palette::GROUND_STRIPE);
    let mut x = 0.0;
    while x < FIELD_WIDTH {
        canvas.fill_polygon(&[
            (x, FIELD_HEIGHT),
            (x + 10.0, FLOOR_Y + 4.0),
            (x + 18.0, FLOOR_Y + 4.0),
            (x + 8.0, FIELD_HEIGHT),
        ]);
        x += 24.0;
    }
    canvas.set_fill(palette::GROUND_EDGE);
    canvas.fill_rect(0.0, FLOOR_Y, FIELD_WIDTH, 4.0);
}

/// Left-margin gauge with a marker at the player's height
fn draw_altitude_scale<C: Canvas + ?Sized>(canvas: &mut C, player_y: f32) {
    canvas.set_fill(palette::SCALE_TRACK);
    canvas.fill_rect(0.0, 0.0, SCALE_WIDTH, FLOOR_Y);

    canvas.set_stroke(palette::SCALE_TICK, 1.0);
    let mut step = 0;
    let mut y = FLOOR_Y;
    while y > 0.0 {
        let len = if step % 2 == 0 { SCALE_WIDTH } else { SCALE_WIDTH / 2.0 };
        canvas.line(0.0, y, len, y);
        y -= SCALE_TICK_SPACING;
        step += 1;
    }

    let marker_y = player_y.clamp(0.0, FLOOR_Y);
    canvas.set_fill(palette::SCALE_MARKER);
    canvas.fill_polygon(&[
        (SCALE_WIDTH + 6.0, marker_y),
        (SCALE_WIDTH - 2.0, marker_y - 5.0),
        (SCALE_WIDTH - 2.0, marker_y + 5.0),
    ]);
}

fn draw_obstacle<C: Canvas + ?Sized>(canvas: &mut C, obstacle: &Obstacle) {
    let x = obstacle.x;
    let cap_x = x - OBSTACLE_CAP_OVERHANG;
    let cap_w = OBSTACLE_WIDTH + OBSTACLE_CAP_OVERHANG * 2.0;
    canvas.set_stroke(palette::OBSTACLE_OUTLINE, 2.0);

    // Top segment, cap at its lower (open) end
    let top_h = obstacle.top_height;
    if top_h > 0.0 {
        let cap_h = OBSTACLE_CAP_HEIGHT.min(top_h);
        let body_h = top_h - cap_h;
        canvas.set_fill(palette::OBSTACLE);
        canvas.fill_rect(x, 0.0, OBSTACLE_WIDTH, body_h);
        canvas.stroke_rect(x, 0.0, OBSTACLE_WIDTH, body_h);
        canvas.set_fill(palette::OBSTACLE_CAP);
        canvas.fill_rect(cap_x, body_h, cap_w, cap_h);
        canvas.stroke_rect(cap_x, body_h, cap_w, cap_h);
    }

    // Bottom segment, cap at its upper (open) end
    let gap_bottom = obstacle.gap_bottom();
    let bottom_h = FLOOR_Y - gap_bottom;
    if bottom_h > 0.0 {
        let cap_h = OBSTACLE_CAP_HEIGHT.min(bottom_h);
        canvas.set_fill(palette::OBSTACLE);
        canvas.fill_rect(x, gap_bottom + cap_h, OBSTACLE_WIDTH, bottom_h - cap_h);
        canvas.stroke_rect(x, gap_bottom + cap_h, OBSTACLE_WIDTH, bottom_h - cap_h);
        canvas.set_fill(palette::OBSTACLE_CAP);
        canvas.fill_rect(cap_x, gap_bottom, cap_w, cap_h);
        canvas.stroke_rect(cap_x, gap_bottom, cap_w, cap_h);
    }
}

fn draw_projectile<C: Canvas + ?Sized>(canvas: &mut C, projectile: &Projectile) {
    let (x, y) = (projectile.pos.x, projectile.pos.y);
    let half_w = PROJECTILE_WIDTH / 2.0;

    canvas.set_stroke(palette::PROJECTILE_TRAIL, PROJECTILE_HEIGHT);
    canvas.line(x - half_w - 14.0, y, x - half_w, y);

    canvas.set_fill(palette::PROJECTILE);
    canvas.fill_ellipse(x, y, half_w, PROJECTILE_HEIGHT / 2.0);
}

fn draw_player<C: Canvas + ?Sized>(canvas: &mut C, player: &Player) {
    canvas.save();
    canvas.translate(player.pos.x, player.pos.y);
    canvas.rotate(player.rotation.to_radians());

    canvas.set_fill(palette::PLAYER_BODY);
    canvas.set_stroke(palette::PLAYER_OUTLINE, 2.0);
    canvas.fill_ellipse(0.0, 0.0, 17.0, 13.0);
    canvas.stroke_ellipse(0.0, 0.0, 17.0, 13.0);

    canvas.set_fill(palette::PLAYER_WING);
    canvas.fill_ellipse(-6.0, 2.0, 8.0, 5.0);
    canvas.stroke_ellipse(-6.0, 2.0, 8.0, 5.0);

    canvas.set_fill(palette::PLAYER_EYE);
    canvas.fill_circle(7.0, -5.0, 5.0);
    canvas.set_fill(palette::PLAYER_PUPIL);
    canvas.fill_circle(9.0, -5.0, 2.0);

    canvas.set_fill(palette::PLAYER_BEAK);
    canvas.fill_polygon(&[(13.0, -1.0), (23.0, 2.0), (13.0, 5.0)]);

    canvas.restore();
}

fn shadowed_text<C: Canvas + ?Sized>(
    canvas: &mut C,
    text: &str,
    x: f32,
    y: f32,
    size: f32,
    align: TextAlign,
    color: Color,
) {
    canvas.set_fill(palette::HUD_SHADOW);
    canvas.fill_text(text, x + 2.0, y + 2.0, size, align);
    canvas.set_fill(color);
    canvas.fill_text(text, x, y, size, align);
}

fn draw_hud<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState) {
    shadowed_text(
        canvas,
        &state.score.to_string(),
        FIELD_WIDTH / 2.0,
        64.0,
        40.0,
        TextAlign::Center,
        palette::HUD_TEXT,
    );
    shadowed_text(
        canvas,
        &format!("BEST {}", state.display_best()),
        FIELD_WIDTH - 12.0,
        28.0,
        16.0,
        TextAlign::Right,
        palette::HUD_TEXT,
    );
}

fn draw_scrim<C: Canvas + ?Sized>(canvas: &mut C) {
    let (width, height) = canvas.size();
    canvas.set_fill(palette::SCRIM);
    canvas.fill_rect(0.0, 0.0, width, height);
}

fn draw_start_overlay<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState) {
    let cx = FIELD_WIDTH / 2.0;
    draw_scrim(canvas);

    shadowed_text(canvas, "SKYGATE", cx, 190.0, 44.0, TextAlign::Center, palette::TITLE);
    shadowed_text(
        canvas,
        "SPACE / TAP LEFT - FLY",
        cx,
        255.0,
        16.0,
        TextAlign::Center,
        palette::HUD_TEXT,
    );
    shadowed_text(
        canvas,
        "X / TAP RIGHT - SHOOT",
        cx,
        280.0,
        16.0,
        TextAlign::Center,
        palette::HUD_TEXT,
    );
    if state.session_best > 0 {
        shadowed_text(
            canvas,
            &format!("BEST {}", state.session_best),
            cx,
            330.0,
            20.0,
            TextAlign::Center,
            palette::HUD_TEXT,
        );
    }
    shadowed_text(
        canvas,
        "PRESS SPACE OR TAP TO START",
        cx,
        400.0,
        18.0,
        TextAlign::Center,
        palette::PROMPT,
    );
}

fn draw_game_over_overlay<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState) {
    let cx = FIELD_WIDTH / 2.0;
    draw_scrim(canvas);

    shadowed_text(canvas, "GAME OVER", cx, 200.0, 44.0, TextAlign::Center, palette::GAME_OVER);
    shadowed_text(
        canvas,
        &format!("SCORE {}", state.score),
        cx,
        260.0,
        24.0,
        TextAlign::Center,
        palette::HUD_TEXT,
    );
    let best_line = if state.last_round_new_best {
        format!("BEST {} - NEW!", state.session_best)
    } else {
        format!("BEST {}", state.session_best)
    };
    shadowed_text(canvas, &best_line, cx, 295.0, 24.0, TextAlign::Center, palette::HUD_TEXT);
    shadowed_text(
        canvas,
        "PRESS SPACE OR TAP TO RESTART",
        cx,
        380.0,
        18.0,
        TextAlign::Center,
        palette::PROMPT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DisplayList, DrawCommand};
    use glam::Vec2;

    fn frame(state: &GameState) -> DisplayList {
        let mut list = DisplayList::default();
        render(state, &mut list);
        list
    }

    fn has_scrim(list: &DisplayList) -> bool {
        list.position(|c| matches!(c, DrawCommand::SetFill { color } if *color == palette::SCRIM))
            .is_some()
    }

    #[test]
    fn test_start_frame_shows_title_and_prompt() {
        let state = GameState::new(1);
        let list = frame(&state);
        assert!(list.is_balanced());
        assert!(has_scrim(&list));
        assert!(list.contains_text("SKYGATE"));
        assert!(list.contains_text("SHOOT"));
        assert!(list.contains_text("TO START"));
    }

    #[test]
    fn test_scrim_covers_the_whole_surface() {
        let state = GameState::new(1);
        let mut list = DisplayList::new(800.0, 1200.0);
        render(&state, &mut list);
        assert!(list.filled_rects().contains(&(0.0, 0.0, 800.0, 1200.0)));
    }

    #[test]
    fn test_playing_frame_has_no_overlay() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::Playing;
        let list = frame(&state);
        assert!(list.is_balanced());
        assert!(!has_scrim(&list));
        assert!(!list.contains_text("TO START"));
        assert!(!list.contains_text("GAME OVER"));
    }

    #[test]
    fn test_game_over_frame_shows_scores() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver;
        state.score = 4;
        state.session_best = 11;
        let list = frame(&state);
        assert!(has_scrim(&list));
        assert!(list.contains_text("GAME OVER"));
        assert!(list.contains_text("SCORE 4"));
        assert!(list.contains_text("BEST 11"));
        assert!(list.contains_text("TO RESTART"));
        assert!(!list.contains_text("NEW!"));
    }

    #[test]
    fn test_game_over_flags_new_best() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver;
        state.score = 12;
        state.session_best = 12;
        state.last_round_new_best = true;
        assert!(frame(&state).contains_text("BEST 12 - NEW!"));
    }

    #[test]
    fn test_game_over_tie_is_not_new_best() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver;
        state.score = 5;
        state.session_best = 5;
        let list = frame(&state);
        assert!(list.contains_text("BEST 5"));
        assert!(!list.contains_text("NEW!"));
    }

    #[test]
    fn test_hud_best_inflates_while_playing() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::Playing;
        state.score = 8;
        state.session_best = 3;
        let list = frame(&state);
        assert!(list.texts().contains(&"8"));
        assert!(list.texts().contains(&"BEST 8"));
    }

    #[test]
    fn test_obstacle_segments_drawn_with_caps() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::Playing;
        state.push_obstacle(200.0, 150.0);
        let rects = frame(&state).filled_rects();

        // Top body, top cap, bottom body, bottom cap
        assert!(rects.contains(&(200.0, 0.0, 50.0, 130.0)));
        assert!(rects.contains(&(196.0, 130.0, 58.0, 20.0)));
        assert!(rects.contains(&(200.0, 290.0, 50.0, FLOOR_Y - 290.0)));
        assert!(rects.contains(&(196.0, 270.0, 58.0, 20.0)));
    }

    #[test]
    fn test_player_drawn_after_entities_and_rotated() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::Playing;
        state.player.rotation = 45.0;
        state.push_obstacle(200.0, 150.0);
        state.push_projectile(Vec2::new(120.0, 260.0));
        let list = frame(&state);

        let last_obstacle = list
            .rposition(|c| matches!(c, DrawCommand::FillRect { x, .. } if *x == 196.0))
            .unwrap();
        let projectile = list
            .position(|c| matches!(c, DrawCommand::FillEllipse { cx, .. } if *cx == 120.0))
            .unwrap();
        let rotate = list
            .position(|c| matches!(c, DrawCommand::Rotate { .. }))
            .unwrap();

        assert!(last_obstacle < projectile);
        assert!(projectile < rotate);
        assert_eq!(
            list.commands[rotate],
            DrawCommand::Rotate {
                radians: 45.0f32.to_radians()
            }
        );
        assert_eq!(
            list.commands[rotate - 1],
            DrawCommand::Translate { x: 80.0, y: 250.0 }
        );
    }

    #[test]
    fn test_altitude_marker_follows_player() {
        let mut state = GameState::new(1);
        state.player.pos.y = 333.0;
        let list = frame(&state);
        assert!(list.position(|c| *c == DrawCommand::MoveTo { x: SCALE_WIDTH + 6.0, y: 333.0 }).is_some());
    }

    #[test]
    fn test_render_is_repeatable() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::Playing;
        state.push_obstacle(220.0, 90.0);
        assert_eq!(frame(&state).commands, frame(&state).commands);
    }
}
