//! Arcanoid - a mouse-driven brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, level generation, collisions)
//! - `game`: Game loop orchestration and the shell interface to the platform
//! - `scheduler`: Fixed-cadence tick source
//! - `settings`: Data-driven configuration

pub mod game;
pub mod scheduler;
pub mod settings;
pub mod sim;

pub use game::{GameLoop, GameShell, LoopPhase};
pub use scheduler::FixedTicker;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default tick interval (50 Hz simulation)
    pub const TICK_INTERVAL_MS: u64 = 20;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 12.0;
    /// Maximum ball speed (pixels per tick)
    pub const BALL_MAX_SPEED: f32 = 8.0;
    /// Speed gained per tick during the launch ramp
    pub const BALL_SPEED_RAMP: f32 = 0.1;

    /// Paddle defaults - width scales with the brick column count
    pub const PADDLE_WIDTH_PER_COLUMN: f32 = 9.0;
    pub const PADDLE_HEIGHT: f32 = 12.0;
    /// Paddle center sits this far above the bottom edge
    pub const PADDLE_RAISE: f32 = 32.0;

    /// Brick grid sizing - columns/rows grow until cells fit these caps
    pub const BRICK_MAX_WIDTH: f32 = 32.0;
    pub const BRICK_MAX_HEIGHT: f32 = 48.0;
    /// Visual gutter between neighboring bricks (pixels per side)
    pub const BRICK_GUTTER: f32 = 2.0;
    /// Bricks fill only the top portion of the field
    pub const BRICK_BAND_FRACTION: f32 = 0.33;

    /// Fade-in: opacity gained per tick, chosen once per entity
    pub const FADE_DELTA_MIN: f32 = 0.05;
    pub const FADE_DELTA_SPREAD: f32 = 0.02;
}

/// Unit direction vector for an angle in radians
#[inline]
pub fn direction_from_angle(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
