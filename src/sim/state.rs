//! Game state and core simulation types
//!
//! The world is a single owned struct mutated in place each tick. Only
//! `phase` and the score fields are meant to be observed by a UI layer;
//! everything else changes every frame.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first jump
    #[default]
    Start,
    /// Active gameplay
    Playing,
    /// Round ended, waiting for a jump to return to Start
    GameOver,
}

/// Low-frequency changes a host may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Start -> Playing
    Started,
    /// An obstacle spawned at the right edge
    ObstacleSpawned { id: u32 },
    /// The player flew past an obstacle
    Scored { obstacle_id: u32, score: u64 },
    /// A projectile destroyed an obstacle
    ObstacleDestroyed {
        obstacle_id: u32,
        projectile_id: u32,
        score: u64,
    },
    /// Playing -> GameOver
    GameOver { score: u64, best: u64, new_best: bool },
    /// GameOver -> Start
    Restarted,
}

/// The player-controlled flyer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Center position; x never changes
    pub pos: Vec2,
    /// Vertical velocity (positive is downward)
    pub vel: f32,
    /// Visual tilt in degrees, derived from velocity
    pub rotation: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, PLAYER_START_Y),
            vel: 0.0,
            rotation: 0.0,
        }
    }
}

impl Player {
    /// Fixed-size hitbox centered on the player
    pub fn hitbox(&self) -> Rect {
        Rect::centered(self.pos, PLAYER_SIZE, PLAYER_SIZE)
    }

    /// Tilt for a given velocity, clamped to the allowed range
    pub fn rotation_for(vel: f32, factor: f32) -> f32 {
        (vel * factor).clamp(MIN_ROTATION_DEG, MAX_ROTATION_DEG)
    }
}

/// A gated pair: a top and bottom segment with an opening between them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge
    pub x: f32,
    /// Height of the top segment (the gap starts here)
    pub top_height: f32,
    /// Opening size, constant for the obstacle's lifetime
    pub gap: f32,
    /// Set once when the trailing edge crosses the player
    pub passed: bool,
}

impl Obstacle {
    pub fn new(id: u32, x: f32, top_height: f32, gap: f32) -> Self {
        Self {
            id,
            x,
            top_height,
            gap,
            passed: false,
        }
    }

    /// Trailing edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + OBSTACLE_WIDTH
    }

    /// Top of the bottom segment
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.top_height + self.gap
    }

    pub fn top_segment(&self) -> Rect {
        Rect::new(self.x, 0.0, OBSTACLE_WIDTH, self.top_height)
    }

    pub fn bottom_segment(&self) -> Rect {
        let y = self.gap_bottom();
        Rect::new(self.x, y, OBSTACLE_WIDTH, (FLOOR_Y - y).max(0.0))
    }

    /// Whether either segment overlaps the given rectangle
    pub fn hits(&self, rect: &Rect) -> bool {
        self.top_segment().intersects(rect) || self.bottom_segment().intersects(rect)
    }

    /// Fully scrolled past the left edge
    pub fn is_off_screen(&self) -> bool {
        self.right() < 0.0
    }
}

/// A shot fired by the player, travelling right
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    /// Center position; y is fixed at creation
    pub pos: Vec2,
}

impl Projectile {
    pub fn hitbox(&self) -> Rect {
        Rect::centered(self.pos, PROJECTILE_WIDTH, PROJECTILE_HEIGHT)
    }

    /// Left the play field on the right
    pub fn is_off_field(&self) -> bool {
        self.pos.x > FIELD_WIDTH
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Balance values in effect
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// The one and only player
    pub player: Player,
    /// Live obstacles in spawn order (also left-to-right)
    pub obstacles: Vec<Obstacle>,
    /// Live projectiles in firing order
    pub projectiles: Vec<Projectile>,
    /// Ticks played this round; drives the spawn cadence only
    pub frame: u64,
    /// Current round score
    pub score: u64,
    /// Best score committed this session
    pub session_best: u64,
    /// The last finished round raised the session best (ties do not count)
    pub last_round_new_best: bool,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a state with custom balance. Tuning that fails validation is
    /// replaced by the defaults.
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("rejected tuning, using defaults: {}", e);
                Tuning::default()
            }
        };
        Self {
            seed,
            tuning,
            phase: GamePhase::Start,
            player: Player::default(),
            obstacles: Vec::new(),
            projectiles: Vec::new(),
            frame: 0,
            score: 0,
            session_best: 0,
            last_round_new_best: false,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reinitialize everything that belongs to a round. Session best and the
    /// RNG stream carry over.
    pub fn reset_round(&mut self) {
        self.phase = GamePhase::Start;
        self.player = Player::default();
        self.obstacles.clear();
        self.projectiles.clear();
        self.frame = 0;
        self.score = 0;
        self.last_round_new_best = false;
    }

    /// Best score to show on the HUD. While playing this already reflects a
    /// score that would beat the committed best.
    pub fn display_best(&self) -> u64 {
        match self.phase {
            GamePhase::Playing => self.score.max(self.session_best),
            _ => self.session_best,
        }
    }

    /// Push an obstacle with a fresh ID (used by the spawner and by tests)
    pub fn push_obstacle(&mut self, x: f32, top_height: f32) -> u32 {
        let id = self.next_entity_id();
        let gap = self.tuning.gap;
        self.obstacles.push(Obstacle::new(id, x, top_height, gap));
        id
    }

    /// Push a projectile with a fresh ID
    pub fn push_projectile(&mut self, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.projectiles.push(Projectile { id, pos });
        id
    }
}
