//! Brick Breaker - a classic paddle-and-ball arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, level layout, game state)
//!
//! Rendering, UI wiring, and score submission are external collaborators: a
//! driver calls [`sim::tick`] once per frame with a [`sim::TickInput`] and
//! reads back the published snapshot plus the entity collections.

pub mod sim;

pub use sim::{GamePhase, GameState, MoveDir, Playfield, Snapshot, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Reference tick cadence the external driver is expected to run at (Hz)
    pub const TICK_RATE: u32 = 60;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    /// Paddle movement per tick from keyboard input (px)
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Gap between the paddle top and the bottom playfield edge (px)
    pub const PADDLE_BOTTOM_MARGIN: f32 = 30.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Ball speed at level 1 (px per tick)
    pub const BALL_START_SPEED: f32 = 4.0;
    /// Added to ball speed on every level clear
    pub const BALL_SPEED_INCREMENT: f32 = 0.5;
    /// Paddle-bounce angle scale: deflection = (hit - 0.5) * this (radians)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::PI / 3.0;

    /// Brick grid layout
    pub const BRICK_COLS: u32 = 10;
    /// Rows for a given level = BRICK_BASE_ROWS + level
    pub const BRICK_BASE_ROWS: u32 = 5;
    pub const BRICK_HEIGHT: f32 = 20.0;
    /// Vertical gap between brick rows (px)
    pub const BRICK_ROW_GAP: f32 = 5.0;
    /// Horizontal gutter carved out of each grid cell (px)
    pub const BRICK_GUTTER: f32 = 2.0;
    /// Grid top-left corner; the grid tiles `playfield width - 2 * margin`
    pub const GRID_MARGIN: f32 = 50.0;
    /// Score per brick = (rows - row) * BRICK_POINT_STEP
    pub const BRICK_POINT_STEP: u32 = 10;

    /// Row colors, cycled by `row % PALETTE.len()` (packed 0xRRGGBB)
    pub const PALETTE: [u32; 6] = [
        0xFF6B6B, 0x4ECDC4, 0x45B7D1, 0x96CEB4, 0xFFEAA7, 0xDDA0DD,
    ];
    /// Color of the burst spawned on a paddle hit
    pub const PADDLE_BURST_COLOR: u32 = 0xFFFFFF;

    /// Particles per burst
    pub const BURST_SIZE: usize = 8;
    /// Particle lifetime in ticks
    pub const PARTICLE_LIFE: u32 = 30;
    /// Particle velocity components are uniform in ±this (px per tick)
    pub const PARTICLE_MAX_VEL: f32 = 3.0;

    /// Session defaults
    pub const STARTING_LIVES: u8 = 3;
}
