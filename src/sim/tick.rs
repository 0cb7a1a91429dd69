//! Fixed-step simulation tick
//!
//! Applies queued commands through the phase state machine, then advances the
//! world one step if a round is in progress.

use serde::{Deserialize, Serialize};

use super::collision::{Resolution, resolve};
use super::physics::{
    advance_entities, advance_spawner, apply_jump, fire, integrate_player, out_of_bounds,
};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// The two abstract commands a host can deliver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Jump,
    Shoot,
}

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Commands received since the previous tick, in arrival order
    pub commands: Vec<Command>,
    /// Idle/demo mode - the autopilot plays the game
    pub idle_mode: bool,
}

impl TickInput {
    pub fn with_commands(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
            idle_mode: false,
        }
    }
}

/// Advance the game state by one tick and report what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    for &command in &input.commands {
        handle_command(state, command, &mut events);
    }
    if input.idle_mode {
        for command in autopilot(state) {
            handle_command(state, command, &mut events);
        }
    }

    if state.phase != GamePhase::Playing {
        return events;
    }

    integrate_player(&mut state.player, &state.tuning);
    if out_of_bounds(&state.player) {
        end_round(state, &mut events);
        return events;
    }

    if let Some(id) = advance_spawner(state) {
        events.push(GameEvent::ObstacleSpawned { id });
    }
    advance_entities(state);

    if let Resolution::PlayerHit { obstacle_id } = resolve(state, &mut events) {
        log::debug!("player hit obstacle {}", obstacle_id);
        end_round(state, &mut events);
    }

    events
}

/// Phase state machine. Inputs that have no transition in the current phase
/// are ignored.
pub fn handle_command(state: &mut GameState, command: Command, events: &mut Vec<GameEvent>) {
    match (state.phase, command) {
        (GamePhase::Start, Command::Jump) => {
            state.phase = GamePhase::Playing;
            apply_jump(&mut state.player, &state.tuning);
            log::info!("round started");
            events.push(GameEvent::Started);
        }
        (GamePhase::Playing, Command::Jump) => {
            apply_jump(&mut state.player, &state.tuning);
        }
        (GamePhase::Playing, Command::Shoot) => {
            let id = fire(state);
            log::debug!("fired projectile {}", id);
        }
        (GamePhase::GameOver, Command::Jump) => {
            state.reset_round();
            log::info!("round reset (session best {})", state.session_best);
            events.push(GameEvent::Restarted);
        }
        (GamePhase::Start | GamePhase::GameOver, Command::Shoot) => {}
    }
}

/// Playing -> GameOver, committing the session best
fn end_round(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.phase = GamePhase::GameOver;
    let new_best = state.score > state.session_best;
    if new_best {
        state.session_best = state.score;
    }
    state.last_round_new_best = new_best;
    log::info!(
        "game over: score {} (best {}{})",
        state.score,
        state.session_best,
        if new_best { ", new best" } else { "" }
    );
    events.push(GameEvent::GameOver {
        score: state.score,
        best: state.session_best,
        new_best,
    });
}

/// How far above the bottom of the opening the autopilot lets the player sink
const AUTOPILOT_MARGIN: f32 = 12.0;
/// Fire when the next obstacle is this close
const AUTOPILOT_FIRE_RANGE: f32 = 220.0;

/// Demo-mode decisions for this tick
fn autopilot(state: &GameState) -> Vec<Command> {
    match state.phase {
        // Start a round straight away, and restart after a crash
        GamePhase::Start | GamePhase::GameOver => return vec![Command::Jump],
        GamePhase::Playing => {}
    }

    let player = &state.player;
    let next = state
        .obstacles
        .iter()
        .find(|o| o.right() > player.pos.x - PLAYER_HALF);

    let floor = match next {
        Some(o) => o.gap_bottom() - PLAYER_HALF - AUTOPILOT_MARGIN,
        None => FIELD_HEIGHT / 2.0,
    };

    let mut commands = Vec::new();
    if player.pos.y > floor && player.vel >= 0.0 {
        commands.push(Command::Jump);
    }

    // One shot in flight at a time
    let in_range = next.is_some_and(|o| {
        o.x > player.pos.x + PLAYER_HALF && o.x - player.pos.x < AUTOPILOT_FIRE_RANGE
    });
    if in_range && state.projectiles.is_empty() {
        commands.push(Command::Shoot);
    }

    commands
}
