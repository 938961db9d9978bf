//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` = one simulation step)
//! - Seeded RNG only
//! - Stable entity order (paddle, ball, then bricks in grid order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{ball_overlaps, resolve};
pub use level::{build_level, grid_dimensions};
pub use state::{Ball, Brick, EntityView, GameState, Outcome, Paddle, Shape};
pub use tick::{TickInput, tick};
