//! Game loop orchestration
//!
//! `GameLoop` owns the simulation state and drives the per-tick sequence
//! (update, collision, render) against a `GameShell` - the platform side
//! that draws rectangles and shows the finish message. The shell sees only
//! snapshots; the simulation never touches the platform.

use crate::scheduler::FixedTicker;
use crate::settings::Settings;
use crate::sim::{EntityView, GameState, TickInput, tick};

/// Platform interface the game drives
pub trait GameShell {
    /// Draw one frame. Entities arrive in order (paddle, ball, bricks) with
    /// their opacity for alpha-blended drawing; tombstoned bricks carry the
    /// destroyed flag and are expected to be skipped.
    fn render(&mut self, entities: &[EntityView]);

    /// One-shot terminal notification ("Game Over" or the win message)
    fn notify_finished(&mut self, message: &str);

    /// Blank the drawing surface
    fn clear(&mut self);
}

/// Lifecycle phase of the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    /// No game yet - waiting for the first start command
    Idle,
    Playing,
    /// A game ran to its outcome; a start command begins a fresh one
    Finished,
}

/// Owns a game from start command to finish notification
pub struct GameLoop<S: GameShell> {
    shell: S,
    settings: Settings,
    state: Option<GameState>,
    /// Latest mouse x, updated asynchronously between ticks (last writer wins)
    mouse_x: f32,
}

impl<S: GameShell> GameLoop<S> {
    pub fn new(settings: Settings, shell: S) -> Self {
        Self {
            shell,
            settings,
            state: None,
            mouse_x: 0.0,
        }
    }

    pub fn phase(&self) -> LoopPhase {
        match &self.state {
            None => LoopPhase::Idle,
            Some(state) if state.playing() => LoopPhase::Playing,
            Some(_) => LoopPhase::Finished,
        }
    }

    /// Record the current mouse position; read by the paddle on the next tick
    pub fn set_mouse_x(&mut self, x: f32) {
        self.mouse_x = x;
    }

    /// Start command: builds a fresh level and enters Playing.
    /// Ignored while a game is already running.
    pub fn start(&mut self) {
        if self.phase() == LoopPhase::Playing {
            log::warn!("start ignored: game already running");
            return;
        }

        let seed = self.settings.seed.unwrap_or_else(rand::random);
        let state = GameState::new(
            self.settings.field_width as f32,
            self.settings.field_height as f32,
            seed,
        );
        log::info!(
            "game started: {}x{} field, {} bricks, seed {seed}",
            self.settings.field_width,
            self.settings.field_height,
            state.live_bricks
        );
        self.state = Some(state);
    }

    /// Run one tick: update, collide, render. On finish, clears the surface
    /// and notifies the shell exactly once. Returns false when not playing.
    pub fn tick_once(&mut self) -> bool {
        let Some(state) = self.state.as_mut() else {
            return false;
        };
        if !state.playing() {
            return false;
        }

        let input = TickInput {
            mouse_x: self.mouse_x,
            autopilot: self.settings.autopilot,
        };
        tick(state, &input);

        match state.outcome {
            Some(outcome) => {
                log::info!("game finished after {} ticks: {outcome:?}", state.time_ticks);
                self.shell.clear();
                self.shell.notify_finished(outcome.message());
                false
            }
            None => {
                self.shell.render(&state.render_entities());
                true
            }
        }
    }

    /// Drive a started game at the ticker's cadence until it finishes or the
    /// ticker is cancelled from outside. Cancels the ticker on finish.
    pub fn run(&mut self, ticker: &mut FixedTicker) {
        while ticker.wait() {
            if !self.tick_once() {
                ticker.cancel();
            }
        }
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use std::time::Duration;

    /// Shell that records every call for assertions
    #[derive(Default)]
    struct RecordingShell {
        frames: usize,
        last_entity_count: usize,
        messages: Vec<String>,
        clears: usize,
    }

    impl GameShell for RecordingShell {
        fn render(&mut self, entities: &[EntityView]) {
            self.frames += 1;
            self.last_entity_count = entities.len();
        }

        fn notify_finished(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }

        fn clear(&mut self) {
            self.clears += 1;
        }
    }

    fn test_settings() -> Settings {
        Settings {
            field_width: 320,
            field_height: 480,
            seed: Some(42),
            ..Default::default()
        }
    }

    #[test]
    fn test_phases() {
        let mut game = GameLoop::new(test_settings(), RecordingShell::default());
        assert_eq!(game.phase(), LoopPhase::Idle);
        assert!(!game.tick_once(), "tick before start is a no-op");

        game.start();
        assert_eq!(game.phase(), LoopPhase::Playing);
        assert!(game.tick_once());
        assert_eq!(game.shell().frames, 1);
    }

    #[test]
    fn test_start_ignored_while_playing() {
        let mut game = GameLoop::new(test_settings(), RecordingShell::default());
        game.start();
        game.tick_once();
        let ticks = game.state().unwrap().time_ticks;

        game.start();
        assert_eq!(
            game.state().unwrap().time_ticks,
            ticks,
            "second start must not rebuild the level"
        );
    }

    #[test]
    fn test_render_receives_full_entity_list() {
        let mut game = GameLoop::new(test_settings(), RecordingShell::default());
        game.start();
        game.tick_once();
        // Paddle + ball + 10x10 bricks
        assert_eq!(game.shell().last_entity_count, 102);
    }

    #[test]
    fn test_loss_notifies_exactly_once() {
        let mut game = GameLoop::new(test_settings(), RecordingShell::default());
        game.start();

        // Force an immediate bottom exit
        let state = game.state.as_mut().unwrap();
        state.ball.pos = Vec2::new(160.0, 475.0);
        state.ball.direction = Vec2::new(0.0, 1.0);
        state.ball.speed = 7.9;

        assert!(!game.tick_once());
        assert_eq!(game.phase(), LoopPhase::Finished);
        assert_eq!(game.shell().messages, vec!["Game Over".to_string()]);
        assert_eq!(game.shell().clears, 1);

        // Further ticks stay silent
        assert!(!game.tick_once());
        assert_eq!(game.shell().messages.len(), 1);
        assert_eq!(game.shell().clears, 1);
    }

    #[test]
    fn test_win_notifies_with_win_message() {
        let mut game = GameLoop::new(test_settings(), RecordingShell::default());
        game.start();

        // Leave one brick and park the ball on a collision course with it
        let state = game.state.as_mut().unwrap();
        for brick in state.bricks.iter_mut().skip(1) {
            brick.destroyed = true;
        }
        state.live_bricks = 1;
        let target = state.bricks[0].pos;
        state.ball.pos = Vec2::new(target.x, target.y + 170.0);
        state.ball.direction = Vec2::new(0.0, -1.0);
        state.ball.speed = 7.9;

        let mut guard = 0;
        while game.tick_once() {
            guard += 1;
            assert!(guard < 10_000, "win never reached");
        }

        assert_eq!(
            game.shell().messages,
            vec!["Congratulations, you won!".to_string()]
        );
        assert_eq!(game.phase(), LoopPhase::Finished);
    }

    #[test]
    fn test_restart_after_finish_rebuilds() {
        let mut game = GameLoop::new(test_settings(), RecordingShell::default());
        game.start();

        let state = game.state.as_mut().unwrap();
        state.ball.pos = Vec2::new(160.0, 475.0);
        state.ball.direction = Vec2::new(0.0, 1.0);
        state.ball.speed = 7.9;
        game.tick_once();
        assert_eq!(game.phase(), LoopPhase::Finished);

        game.start();
        assert_eq!(game.phase(), LoopPhase::Playing);
        let state = game.state().unwrap();
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.live_bricks, 100);
    }

    #[test]
    fn test_run_stops_when_finished() {
        let mut game = GameLoop::new(test_settings(), RecordingShell::default());
        game.start();

        let state = game.state.as_mut().unwrap();
        state.ball.pos = Vec2::new(160.0, 475.0);
        state.ball.direction = Vec2::new(0.0, 1.0);
        state.ball.speed = 7.9;

        let mut ticker = FixedTicker::new(Duration::ZERO);
        game.run(&mut ticker);

        assert!(ticker.is_cancelled());
        assert_eq!(game.shell().messages, vec!["Game Over".to_string()]);
    }
}
