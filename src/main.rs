//! Arcanoid headless demo driver
//!
//! Runs one autopilot game against a logging shell and reports the outcome.
//! Pass a JSON settings file as the first argument to change the field size,
//! cadence, or seed; `tick_interval_ms: 0` runs the game unthrottled.

use arcanoid::sim::EntityView;
use arcanoid::{FixedTicker, GameLoop, GameShell, Settings};

/// Shell that logs instead of drawing - the real surface lives elsewhere
#[derive(Default)]
struct LoggingShell {
    frames: u64,
}

impl GameShell for LoggingShell {
    fn render(&mut self, entities: &[EntityView]) {
        self.frames += 1;
        if self.frames % 250 == 0 {
            let live = entities.iter().filter(|e| !e.destroyed).count();
            let ball = entities[1].pos;
            log::debug!(
                "frame {}: {live} live entities, ball at ({:.1}, {:.1})",
                self.frames,
                ball.x,
                ball.y
            );
        }
    }

    fn notify_finished(&mut self, message: &str) {
        println!("{message}");
    }

    fn clear(&mut self) {
        log::debug!("surface cleared");
    }
}

fn main() {
    env_logger::init();

    let mut settings = std::env::args()
        .nth(1)
        .map(Settings::load)
        .unwrap_or_default();
    // The demo has no mouse to follow
    settings.autopilot = true;

    let mut ticker = FixedTicker::new(settings.tick_interval());
    let mut game = GameLoop::new(settings, LoggingShell::default());

    game.start();
    game.run(&mut ticker);

    if let Some(state) = game.state() {
        log::info!(
            "{} ticks, {} bricks left, seed {}",
            state.time_ticks,
            state.live_bricks,
            state.seed
        );
    }
}
