//! Game state and core simulation types
//!
//! Entities are held in named fields (paddle, ball, brick arena) rather than
//! one mixed collection; the ordered render sequence is rebuilt on demand.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use super::level::build_level;
use crate::consts::*;
use crate::direction_from_angle;

/// Rectangular extent of an entity. Immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub width: f32,
    pub height: f32,
}

impl Shape {
    pub fn new(width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0);
        Self { width, height }
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }
}

/// Fade-in state: opacity climbs toward 1 by a per-entity delta
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    pub opacity: f32,
    /// Chosen once at creation, uniform in [0.05, 0.07)
    delta: f32,
}

impl Fade {
    pub fn new(rng: &mut Pcg32) -> Self {
        Self {
            opacity: 0.0,
            delta: FADE_DELTA_MIN + rng.random_range(0.0..FADE_DELTA_SPREAD),
        }
    }

    /// One tick of fade-in. Clamped so opacity never overshoots 1.
    pub fn advance(&mut self) {
        if self.opacity < 1.0 {
            self.opacity = (self.opacity + self.delta).min(1.0);
        }
    }

    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta
    }
}

/// The player's paddle. Permanent for the whole game - it cannot be destroyed.
#[derive(Debug, Clone)]
pub struct Paddle {
    pub pos: Vec2,
    pub shape: Shape,
    pub fade: Fade,
}

impl Paddle {
    pub fn new(pos: Vec2, shape: Shape, rng: &mut Pcg32) -> Self {
        Self {
            pos,
            shape,
            fade: Fade::new(rng),
        }
    }

    /// Track the mouse x, clamped so the paddle rectangle stays inside the field
    pub fn follow_mouse(&mut self, mouse_x: f32, field_width: f32) {
        let half = self.shape.half_width();
        self.pos.x = if mouse_x < half {
            half
        } else if mouse_x > field_width - half {
            field_width - half
        } else {
            mouse_x
        };
    }
}

/// The ball. Permanent for the whole game - it cannot be destroyed.
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub shape: Shape,
    pub fade: Fade,
    /// Unit direction of travel
    pub direction: Vec2,
    /// Pixels per tick, ramps from 0 up to `BALL_MAX_SPEED`
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, rng: &mut Pcg32) -> Self {
        let fade = Fade::new(rng);
        let angle = rng.random_range(0.0..TAU);
        Self {
            pos,
            shape: Shape::new(BALL_SIZE, BALL_SIZE),
            fade,
            direction: direction_from_angle(angle),
            speed: 0.0,
        }
    }

    /// Projected position one tick ahead (used by speculative collision checks)
    #[inline]
    pub fn projected(&self) -> Vec2 {
        self.pos + self.direction * self.speed
    }

    /// Rebound off the paddle: new direction is a random angle in the
    /// upward cone [-135°, -45°]
    pub fn paddle_bounce(&mut self, rng: &mut Pcg32) {
        let angle = -(FRAC_PI_4 + rng.random_range(0.0..FRAC_PI_2));
        self.direction = direction_from_angle(angle);
    }

    /// Rebound off a brick: full reversal of both components
    pub fn bounce(&mut self) {
        self.direction = -self.direction;
    }
}

/// A destructible brick. Destroyed bricks are tombstoned in the arena so
/// indices stay stable within a tick.
#[derive(Debug, Clone)]
pub struct Brick {
    pub pos: Vec2,
    pub shape: Shape,
    pub fade: Fade,
    pub destroyed: bool,
}

impl Brick {
    pub fn new(pos: Vec2, shape: Shape, rng: &mut Pcg32) -> Self {
        Self {
            pos,
            shape,
            fade: Fade::new(rng),
            destroyed: false,
        }
    }

    pub fn destroy(&mut self) {
        self.destroyed = true;
    }
}

/// Terminal result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Ball left the field at the bottom
    Loss,
    /// Every brick destroyed
    Win,
}

impl Outcome {
    /// User-facing message for the shell's finish notification
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Loss => "Game Over",
            Outcome::Win => "Congratulations, you won!",
        }
    }
}

/// Snapshot of one entity for the render call
#[derive(Debug, Clone, Copy)]
pub struct EntityView {
    pub pos: Vec2,
    pub shape: Shape,
    pub opacity: f32,
    pub destroyed: bool,
}

/// Complete state of one game, created on start and replaced on restart
#[derive(Debug, Clone)]
pub struct GameState {
    pub field_width: f32,
    pub field_height: f32,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Brick arena in grid order (column-major, matching construction)
    pub bricks: Vec<Brick>,
    /// Bricks not yet destroyed; 0 means the game is won
    pub live_bricks: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Set exactly once when the game ends
    pub outcome: Option<Outcome>,
}

impl GameState {
    /// Create a fresh game: computes the brick grid for the field size and
    /// places paddle, ball, and bricks.
    pub fn new(field_width: f32, field_height: f32, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let (paddle, ball, bricks) = build_level(field_width, field_height, &mut rng);
        let live_bricks = bricks.len() as u32;

        Self {
            field_width,
            field_height,
            seed,
            rng,
            paddle,
            ball,
            bricks,
            live_bricks,
            time_ticks: 0,
            outcome: None,
        }
    }

    /// True until a terminal outcome is reached
    #[inline]
    pub fn playing(&self) -> bool {
        self.outcome.is_none()
    }

    /// Ordered entity snapshot for rendering: paddle, ball, then bricks.
    /// Tombstoned bricks are included with their destroyed flag set.
    pub fn render_entities(&self) -> Vec<EntityView> {
        let mut entities = Vec::with_capacity(2 + self.bricks.len());
        entities.push(EntityView {
            pos: self.paddle.pos,
            shape: self.paddle.shape,
            opacity: self.paddle.fade.opacity,
            destroyed: false,
        });
        entities.push(EntityView {
            pos: self.ball.pos,
            shape: self.ball.shape,
            opacity: self.ball.fade.opacity,
            destroyed: false,
        });
        for brick in &self.bricks {
            entities.push(EntityView {
                pos: brick.pos,
                shape: brick.shape,
                opacity: brick.fade.opacity,
                destroyed: brick.destroyed,
            });
        }
        entities
    }
}
