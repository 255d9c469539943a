//! Collision detection and response
//!
//! Flat-geometry tests: the ball reflects off the side and top walls, bounces
//! off the paddle at an angle derived from the hit position, and knocks out
//! at most one brick per tick via an AABB overlap test.

use glam::Vec2;

use crate::consts::MAX_BOUNCE_ANGLE;

use super::state::{Ball, Brick, Paddle, Playfield};

/// Reflect the ball off the left/right/top playfield boundaries.
///
/// There is no bottom wall: crossing the bottom edge is a ball-lost event
/// handled by the session, not a reflection.
pub fn reflect_off_walls(ball: &mut Ball, playfield: &Playfield) {
    if ball.pos.x <= ball.radius || ball.pos.x >= playfield.width - ball.radius {
        ball.vel.x = -ball.vel.x;
    }
    if ball.pos.y <= ball.radius {
        ball.vel.y = -ball.vel.y;
    }
}

/// True when the ball's lower edge has reached the paddle's top edge while
/// horizontally within the paddle's span
pub fn hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.y + ball.radius >= paddle.pos.y
        && ball.pos.x >= paddle.pos.x
        && ball.pos.x <= paddle.pos.x + paddle.width
}

/// Velocity after a paddle bounce.
///
/// The bounce angle is `(hit - 0.5) * MAX_BOUNCE_ANGLE` where `hit` is the
/// normalized position along the paddle, so a center hit goes straight up and
/// edge hits get the maximum deflection. The result always points upward with
/// magnitude exactly `speed`, regardless of the incoming velocity.
pub fn paddle_bounce_velocity(ball_x: f32, paddle: &Paddle, speed: f32) -> Vec2 {
    let hit_pos = (ball_x - paddle.pos.x) / paddle.width;
    let angle = (hit_pos - 0.5) * MAX_BOUNCE_ANGLE;
    Vec2::new(angle.sin() * speed, -angle.cos() * speed)
}

/// AABB overlap between the ball (center ± radius) and a brick
pub fn ball_brick_overlap(ball: &Ball, brick: &Brick) -> bool {
    ball.pos.x + ball.radius >= brick.pos.x
        && ball.pos.x - ball.radius <= brick.pos.x + brick.width
        && ball.pos.y + ball.radius >= brick.pos.y
        && ball.pos.y - ball.radius <= brick.pos.y + brick.height
}

/// Index of the first surviving brick the ball overlaps, in generation
/// (row-major) order. The linear first-match scan is a deliberate tie-break:
/// when the ball overlaps two bricks at once, the earlier one wins.
pub fn first_brick_hit(ball: &Ball, bricks: &[Brick]) -> Option<usize> {
    bricks
        .iter()
        .position(|brick| !brick.destroyed && ball_brick_overlap(ball, brick))
}
