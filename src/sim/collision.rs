//! Collision detection and resolution
//!
//! Axis-aligned overlap tests against the ball's projected next position:
//! a hit is reported one tick before the ball would visibly intersect, which
//! keeps rebounds from sinking into the paddle at full speed.

use glam::Vec2;

use super::state::{Ball, GameState, Outcome, Shape};

/// Speculative AABB overlap between the ball and a rectangle.
///
/// Uses the ball's projected next position (position + direction * speed).
/// Degenerate geometry (non-finite projection or non-positive extents) is a
/// usage error: it is logged and reported as no collision so play continues.
pub fn ball_overlaps(ball: &Ball, center: Vec2, shape: Shape) -> bool {
    let projected = ball.projected();
    if !projected.is_finite() || shape.width <= 0.0 || shape.height <= 0.0 {
        log::warn!(
            "invalid collision test: projected={projected:?} shape={}x{}",
            shape.width,
            shape.height
        );
        return false;
    }

    (projected.x - center.x).abs() < ball.shape.half_width() + shape.half_width()
        && (projected.y - center.y).abs() < ball.shape.half_height() + shape.half_height()
}

/// Resolve all collisions for one tick.
///
/// Order matters: the paddle is tested first, then every live brick in arena
/// order. The brick scan does not break early, so several bricks touching the
/// ball in the same tick are each resolved (reversing the ball each time).
pub fn resolve(state: &mut GameState) {
    let GameState {
        rng,
        paddle,
        ball,
        bricks,
        live_bricks,
        outcome,
        ..
    } = state;

    if ball_overlaps(ball, paddle.pos, paddle.shape) {
        ball.paddle_bounce(rng);
        // Seat the ball exactly on top of the paddle so it cannot sink in
        ball.pos.y = paddle.pos.y - paddle.shape.half_height() - ball.shape.half_height();
    }

    for brick in bricks.iter_mut() {
        if brick.destroyed {
            continue;
        }
        if ball_overlaps(ball, brick.pos, brick.shape) {
            ball.bounce();
            brick.destroy();
            *live_bricks -= 1;
            log::debug!("brick destroyed at {:?}, {} left", brick.pos, live_bricks);

            if *live_bricks == 0 && outcome.is_none() {
                *outcome = Some(Outcome::Win);
            }
        }
    }
}
