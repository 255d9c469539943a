//! Game state and core simulation types
//!
//! The session owns every entity; external code mutates nothing directly and
//! observes the game through [`Snapshot`] and the public collections.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

use super::level::generate_bricks;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the driver to start a session
    Menu,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Run ended
    GameOver,
}

/// Invalid construction parameters
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("playfield dimensions must be positive, got {width}x{height}")]
    NonPositiveDimensions { width: i64, height: i64 },
    #[error("playfield width {width} too narrow for the paddle and brick grid")]
    TooNarrow { width: i64 },
}

/// The rectangular simulation area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    /// Validate dimensions; no layout can be generated from a degenerate field
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::NonPositiveDimensions {
                width: width as i64,
                height: height as i64,
            });
        }
        if width <= 2.0 * GRID_MARGIN || width < PADDLE_WIDTH {
            return Err(ConfigError::TooNarrow { width: width as i64 });
        }
        Ok(Self { width, height })
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal movement per tick from keyboard input
    pub speed: f32,
}

impl Paddle {
    pub fn new(playfield: &Playfield) -> Self {
        Self {
            pos: Vec2::new(
                playfield.width / 2.0 - PADDLE_WIDTH / 2.0,
                playfield.height - PADDLE_BOTTOM_MARGIN,
            ),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
        }
    }

    /// Clamp x so the paddle stays fully inside the playfield
    pub fn clamp_to(&mut self, playfield: &Playfield) {
        self.pos.x = self.pos.x.clamp(0.0, playfield.width - self.width);
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    pub radius: f32,
    /// Velocity in px per tick
    pub vel: Vec2,
    /// Scalar speed; paddle bounces re-derive `vel` from this
    pub speed: f32,
}

/// A brick. Immutable after generation except for the one-way destroyed flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Packed 0xRRGGBB
    pub color: u32,
    pub destroyed: bool,
    pub points: u32,
}

impl Brick {
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A particle for visual effects. Never affects gameplay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Packed 0xRRGGBB
    pub color: u32,
    /// Remaining lifetime in ticks
    pub life: u32,
}

/// Gameplay events emitted during a tick, drained by the driver.
///
/// Purely informational; every transition is also observable as a delta
/// between successive snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    BrickDestroyed { points: u32 },
    LifeLost { remaining: u8 },
    LevelCleared { level: u32 },
    GameOver { score: u64 },
}

/// Immutable published game state, polled by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub score: u64,
    pub level: u32,
    pub lives: u8,
    pub phase: GamePhase,
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Playfield dimensions, fixed at construction
    pub playfield: Playfield,
    /// Session seed for reproducibility
    pub seed: u64,
    /// Session RNG (launch coin flip, particle velocities)
    pub(crate) rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    pub score: u64,
    /// Current level (starts at 1)
    pub level: u32,
    pub lives: u8,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Bricks in generation order (row-major); collision tie-breaks on first match
    pub bricks: Vec<Brick>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Events emitted since the last drain
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh session in the Menu phase with a level-1 grid laid out
    pub fn new(playfield: Playfield, seed: u64) -> Self {
        let mut state = Self {
            playfield,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            score: 0,
            level: 1,
            lives: STARTING_LIVES,
            time_ticks: 0,
            paddle: Paddle::new(&playfield),
            ball: Ball {
                pos: playfield.center(),
                radius: BALL_RADIUS,
                vel: Vec2::ZERO,
                speed: BALL_START_SPEED,
            },
            bricks: generate_bricks(1, playfield.width),
            particles: Vec::new(),
            events: Vec::new(),
        };
        state.reset_ball();
        state
    }

    /// Re-center the ball and give it a fresh launch velocity:
    /// straight up at `speed`, horizontal sign decided by the session RNG
    pub fn reset_ball(&mut self) {
        self.ball.pos = self.playfield.center();
        let sign = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.ball.vel = Vec2::new(sign * self.ball.speed, -self.ball.speed);
    }

    /// Menu -> Playing. No-op in any other phase.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Menu {
            self.phase = GamePhase::Playing;
            self.reset_ball();
            log::info!("Session started (seed {})", self.seed);
        }
    }

    /// Playing -> Paused. No-op elsewhere; Menu and GameOver never pause.
    pub fn pause(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Paused;
        }
    }

    /// Paused -> Playing
    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Playing;
        }
    }

    /// Back to the Menu with all session counters and entities re-initialized
    pub fn reset(&mut self) {
        self.reinitialize();
        self.phase = GamePhase::Menu;
    }

    /// GameOver -> a fresh Playing session (same as reset + start in one step)
    pub fn play_again(&mut self) {
        if self.phase == GamePhase::GameOver {
            self.reinitialize();
            self.phase = GamePhase::Playing;
        }
    }

    fn reinitialize(&mut self) {
        self.score = 0;
        self.level = 1;
        self.lives = STARTING_LIVES;
        self.time_ticks = 0;
        self.ball.speed = BALL_START_SPEED;
        self.paddle = Paddle::new(&self.playfield);
        self.bricks = generate_bricks(1, self.playfield.width);
        self.particles.clear();
        self.events.clear();
        self.reset_ball();
    }

    /// Publish the current immutable snapshot
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            score: self.score,
            level: self.level,
            lives: self.lives,
            phase: self.phase,
        }
    }

    /// Drain events emitted since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// True if every brick in the current grid is destroyed
    pub fn level_cleared(&self) -> bool {
        self.bricks.iter().all(|b| b.destroyed)
    }
}
