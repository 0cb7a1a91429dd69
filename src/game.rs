//! Per-frame driver
//!
//! Owns the world and the input queue. Each display refresh calls `frame`,
//! which applies queued input, advances one tick and draws the result.

use crate::platform::{CommandQueue, KeyAction, map_key, map_pointer};
use crate::renderer::{Canvas, render};
use crate::sim::{Command, GameEvent, GamePhase, GameState, TickInput, tick};
use crate::tuning::Tuning;

/// Game instance holding all state
#[derive(Debug)]
pub struct Game {
    state: GameState,
    queue: CommandQueue,
    idle_mode: bool,
    running: bool,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        log::info!("session started (seed {})", seed);
        Self {
            state: GameState::with_tuning(seed, tuning),
            queue: CommandQueue::new(),
            idle_mode: false,
            running: true,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn session_best(&self) -> u64 {
        self.state.session_best
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn idle_mode(&self) -> bool {
        self.idle_mode
    }

    pub fn set_idle_mode(&mut self, on: bool) {
        if self.idle_mode != on {
            log::info!("idle mode: {}", on);
        }
        self.idle_mode = on;
    }

    /// Queue a command for the next tick
    pub fn push(&mut self, command: Command) {
        if self.running {
            self.queue.push(command);
        }
    }

    /// Handle a key press. Returns whether the key was recognized.
    pub fn key_down(&mut self, key: &str) -> bool {
        match map_key(key) {
            Some(KeyAction::Command(command)) => {
                self.push(command);
                true
            }
            Some(KeyAction::ToggleIdle) => {
                self.set_idle_mode(!self.idle_mode);
                true
            }
            None => false,
        }
    }

    /// Handle a tap or click at surface x
    pub fn pointer_down(&mut self, x: f32, surface_width: f32) {
        self.push(map_pointer(x, surface_width));
    }

    /// Run one tick and draw it. Without a surface nothing happens and queued
    /// input waits for the next frame.
    pub fn frame<C: Canvas + ?Sized>(&mut self, canvas: Option<&mut C>) -> Vec<GameEvent> {
        if !self.running {
            return Vec::new();
        }
        let Some(canvas) = canvas else {
            return Vec::new();
        };

        let input = TickInput {
            commands: self.queue.drain(),
            idle_mode: self.idle_mode,
        };
        let events = tick(&mut self.state, &input);
        render(&self.state, canvas);
        events
    }

    /// Stop accepting input and ticking; the host cancels its refresh callback
    pub fn shutdown(&mut self) {
        if self.running {
            log::info!(
                "session ended (best {}, {} pending inputs dropped)",
                self.state.session_best,
                self.queue.len()
            );
        }
        self.running = false;
        self.queue.clear();
    }
}
