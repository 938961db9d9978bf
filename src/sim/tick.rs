//! Fixed timestep simulation tick
//!
//! One call advances the game by exactly one step: entity updates in order
//! (paddle, ball, bricks), then collision resolution. Ticks after a terminal
//! outcome are no-ops.

use super::collision;
use super::state::{GameState, Outcome};
use crate::consts::*;

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Current mouse x relative to the playfield origin (last writer wins)
    pub mouse_x: f32,
    /// Demo mode - the paddle tracks the ball on its own
    pub autopilot: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if !state.playing() {
        return;
    }

    state.time_ticks += 1;

    let mouse_x = if input.autopilot {
        state.ball.pos.x
    } else {
        input.mouse_x
    };

    // Entity updates in collection order: paddle, ball, then bricks
    state.paddle.fade.advance();
    state.paddle.follow_mouse(mouse_x, state.field_width);

    update_ball(state);

    for brick in &mut state.bricks {
        if !brick.destroyed {
            brick.fade.advance();
        }
    }

    // A bottom exit during the ball update ends the tick before collisions
    if state.playing() {
        collision::resolve(state);
    }
}

/// Ball movement for one tick.
///
/// The move is committed first, then each wall test looks one tick ahead
/// from the new position. The four checks run in sequence and later ones see
/// reflections applied by earlier ones. The resulting one-tick lag at the
/// boundaries is deliberate; it shapes the visible bounce timing.
fn update_ball(state: &mut GameState) {
    let ball = &mut state.ball;

    ball.fade.advance();

    if ball.speed < BALL_MAX_SPEED {
        ball.speed = (ball.speed + BALL_SPEED_RAMP).min(BALL_MAX_SPEED);
    }

    ball.pos += ball.direction * ball.speed;

    if ball.pos.x + ball.direction.x * ball.speed < 0.0 {
        ball.direction.x = -ball.direction.x;
    }
    if ball.pos.x + ball.direction.x * ball.speed > state.field_width {
        ball.direction.x = -ball.direction.x;
    }
    if ball.pos.y + ball.direction.y * ball.speed < 0.0 {
        ball.direction.y = -ball.direction.y;
    }
    if ball.pos.y + ball.direction.y * ball.speed > state.field_height {
        // Past the paddle and out the bottom
        state.outcome = Some(Outcome::Loss);
        log::info!("ball left the field after {} ticks", state.time_ticks);
    }
}
