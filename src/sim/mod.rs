//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Discrete ticks only (velocities are in px per tick)
//! - Seeded RNG only
//! - Stable iteration order (bricks in generation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod particles;
pub mod state;
pub mod tick;

pub use collision::{ball_brick_overlap, paddle_bounce_velocity};
pub use level::generate_bricks;
pub use state::{
    Ball, Brick, ConfigError, GameEvent, GamePhase, GameState, Paddle, Particle, Playfield,
    Snapshot,
};
pub use tick::{MoveDir, TickInput, tick};
