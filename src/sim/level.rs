//! Level construction
//!
//! Computes the brick grid for the field size and places paddle, ball, and
//! bricks. The grid grows one column/row at a time until each cell fits the
//! size caps, so any field dimensions produce a sensible layout.

use glam::Vec2;
use rand_pcg::Pcg32;

use super::state::{Ball, Brick, Paddle, Shape};
use crate::consts::*;

/// Brick grid dimensions (columns, rows) for a field size.
///
/// Columns is the smallest count ≥ 1 where a cell is at most
/// `BRICK_MAX_WIDTH` wide; rows likewise against `BRICK_MAX_HEIGHT`.
pub fn grid_dimensions(field_width: f32, field_height: f32) -> (u32, u32) {
    let mut cols = 1;
    while field_width / cols as f32 > BRICK_MAX_WIDTH {
        cols += 1;
    }
    let mut rows = 1;
    while field_height / rows as f32 > BRICK_MAX_HEIGHT {
        rows += 1;
    }
    (cols, rows)
}

/// Build a complete level: paddle, ball, and the brick grid.
///
/// Bricks occupy the top `BRICK_BAND_FRACTION` of the field height, laid out
/// column by column. Entity order (paddle, ball, bricks) fixes the RNG draw
/// order, so one seed always produces the same level.
pub fn build_level(
    field_width: f32,
    field_height: f32,
    rng: &mut Pcg32,
) -> (Paddle, Ball, Vec<Brick>) {
    let (cols, rows) = grid_dimensions(field_width, field_height);

    let paddle = Paddle::new(
        Vec2::new(field_width / 2.0, field_height - PADDLE_RAISE),
        Shape::new(cols as f32 * PADDLE_WIDTH_PER_COLUMN, PADDLE_HEIGHT),
        rng,
    );

    let ball = Ball::new(Vec2::new(field_width / 2.0, field_height / 2.0), rng);

    let cell_width = field_width / cols as f32;
    let cell_height = BRICK_BAND_FRACTION * field_height / rows as f32;

    let mut bricks = Vec::with_capacity((cols * rows) as usize);
    for n in 0..cols {
        for m in 0..rows {
            let center = Vec2::new(
                n as f32 * cell_width + cell_width / 2.0,
                m as f32 * cell_height + cell_height / 2.0,
            );
            let shape = Shape::new(cell_width - BRICK_GUTTER, cell_height - BRICK_GUTTER);
            bricks.push(Brick::new(center, shape, rng));
        }
    }

    (paddle, ball, bricks)
}
