//! Procedural brick grid layout
//!
//! Fully deterministic per (level, playfield width): no RNG involved, so a
//! given level always produces the same grid across runs.

use glam::Vec2;

use crate::consts::*;

use super::state::Brick;

/// Generate the brick grid for a level in row-major order.
///
/// Rows grow with the level (`5 + level`), columns are fixed at 10. The grid
/// tiles `playfield_width - 100` px with a 2 px gutter per cell; top rows are
/// worth more points. The returned order is part of the contract: brick
/// collision resolves ties by first match in this order.
pub fn generate_bricks(level: u32, playfield_width: f32) -> Vec<Brick> {
    let rows = BRICK_BASE_ROWS + level;
    let cell_width = (playfield_width - 2.0 * GRID_MARGIN) / BRICK_COLS as f32;

    let mut bricks = Vec::with_capacity((rows * BRICK_COLS) as usize);
    for row in 0..rows {
        for col in 0..BRICK_COLS {
            bricks.push(Brick {
                pos: Vec2::new(
                    GRID_MARGIN + col as f32 * cell_width,
                    GRID_MARGIN + row as f32 * (BRICK_HEIGHT + BRICK_ROW_GAP),
                ),
                width: cell_width - BRICK_GUTTER,
                height: BRICK_HEIGHT,
                color: PALETTE[row as usize % PALETTE.len()],
                destroyed: false,
                points: (rows - row) * BRICK_POINT_STEP,
            });
        }
    }
    bricks
}
