//! Fixed-tick game loop.
//!
//! Each iteration sleeps one poll interval, handles at most one pending key
//! (re-rendering if it changed anything), then applies gravity once the tick
//! interval has elapsed since the last gravity step. The tick timer is reset
//! to the current time when it fires, so late ticks do not accumulate.
//!
//! Input for an iteration is fully applied and rendered before that
//! iteration's gravity check. Quit ends the iteration immediately.

use anyhow::Result;
use log::{debug, info};

use crate::clock::Clock;
use crate::config::EngineConfig;
use crate::core::{GameState, TickOutcome};
use crate::input::{action_for_key, KeySource};
use crate::term::RenderSink;
use crate::types::GameAction;

/// What one loop iteration did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// Action read this iteration, if any key mapped to one
    pub action: Option<GameAction>,
    /// Whether the action changed the game
    pub accepted: bool,
    /// Gravity result, when the tick fired
    pub tick: Option<TickOutcome>,
}

/// Drives a [`GameState`] from a key source, a clock and a render sink.
pub struct Runner<K, C, R> {
    config: EngineConfig,
    keys: K,
    clock: C,
    sink: R,
    last_tick_ms: u64,
}

impl<K: KeySource, C: Clock, R: RenderSink> Runner<K, C, R> {
    pub fn new(config: EngineConfig, keys: K, clock: C, sink: R) -> Self {
        let last_tick_ms = clock.now_millis();
        Self {
            config,
            keys,
            clock,
            sink,
            last_tick_ms,
        }
    }

    pub fn keys(&self) -> &K {
        &self.keys
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    /// Draw the first frame and loop until the game is over.
    ///
    /// Returns the final score.
    pub fn run(&mut self, game: &mut GameState) -> Result<u32> {
        self.sink.render(game)?;
        self.last_tick_ms = self.clock.now_millis();

        while !game.is_over() {
            self.step(game)?;
        }

        info!(
            "game over: score {}, {} rows, {} pieces",
            game.score(),
            game.rows_cleared(),
            game.pieces_spawned()
        );
        Ok(game.score())
    }

    /// One loop iteration.
    pub fn step(&mut self, game: &mut GameState) -> Result<StepReport> {
        let mut report = StepReport {
            action: None,
            accepted: false,
            tick: None,
        };

        self.clock.sleep(self.config.poll_interval_ms);

        if self.keys.has_input()? {
            if let Some(action) = self.keys.read_one_char()?.and_then(action_for_key) {
                report.action = Some(action);

                if action == GameAction::Quit {
                    debug!("{} at {}ms", action.as_str(), self.clock.now_millis());
                    game.quit();
                    report.accepted = true;
                    return Ok(report);
                }

                report.accepted = game.apply_action(action);
                if report.accepted {
                    debug!("{} at ({}, {})", action.as_str(), game.active().x, game.active().y);
                    self.sink.render(game)?;
                }
            }
        }

        let now = self.clock.now_millis();
        if now.saturating_sub(self.last_tick_ms) >= self.config.tick_interval_ms {
            self.last_tick_ms = now;

            let outcome = game.gravity_tick();
            if let TickOutcome::Locked { rows_cleared } | TickOutcome::ToppedOut { rows_cleared } =
                outcome
            {
                debug!(
                    "piece locked at {}ms ({} rows cleared, score {})",
                    now,
                    rows_cleared,
                    game.score()
                );
            }
            report.tick = Some(outcome);

            self.sink.render(game)?;
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::core::{Board, Piece};
    use crate::input::ScriptedKeys;
    use crate::term::RecordingSink;
    use crate::types::PieceKind;

    fn runner(keys: &str) -> Runner<ScriptedKeys, ManualClock, RecordingSink> {
        Runner::new(
            EngineConfig::default(),
            ScriptedKeys::new(keys),
            ManualClock::new(0),
            RecordingSink::new(),
        )
    }

    fn t_game() -> GameState {
        GameState::with_active(Board::new(), Piece::spawn(PieceKind::T, 10), 9)
    }

    #[test]
    fn test_gravity_fires_after_the_tick_interval() {
        let mut runner = runner("");
        let mut game = t_game();

        // 49 polls of 10ms: 490ms, no gravity yet.
        for _ in 0..49 {
            assert_eq!(runner.step(&mut game).unwrap().tick, None);
        }
        assert_eq!(game.active().y, 0);

        let report = runner.step(&mut game).unwrap();
        assert_eq!(report.tick, Some(TickOutcome::Fell));
        assert_eq!(game.active().y, 1);
        assert_eq!(runner.sink().frames.len(), 1);
    }

    #[test]
    fn test_tick_timer_resets_on_fire() {
        let mut runner = runner("");
        let mut game = t_game();

        // A slow frame: the tick fires late, at 730ms.
        runner.clock_mut().advance(720);
        assert!(runner.step(&mut game).unwrap().tick.is_some());

        // The next one is due 500ms after 730ms, not after 1000ms.
        for _ in 0..49 {
            assert_eq!(runner.step(&mut game).unwrap().tick, None);
        }
        assert!(runner.step(&mut game).unwrap().tick.is_some());
    }

    #[test]
    fn test_accepted_input_renders_before_gravity() {
        let mut runner = runner("d");
        let mut game = t_game();
        runner.clock_mut().advance(500);

        let report = runner.step(&mut game).unwrap();
        assert_eq!(report.action, Some(GameAction::MoveRight));
        assert!(report.accepted);
        assert_eq!(report.tick, Some(TickOutcome::Fell));
        // One frame for the move, one for the tick.
        assert_eq!(runner.sink().frames.len(), 2);
        assert_eq!((game.active().x, game.active().y), (4, 1));
    }

    #[test]
    fn test_unknown_keys_are_ignored_without_render() {
        let mut runner = runner("x");
        let mut game = t_game();

        let report = runner.step(&mut game).unwrap();
        assert_eq!(report.action, None);
        assert!(runner.sink().frames.is_empty());
        assert_eq!(runner.keys().remaining(), 0);
    }

    #[test]
    fn test_quit_skips_the_gravity_tick() {
        let mut runner = runner("ed");
        let mut game = t_game();
        runner.clock_mut().advance(1000);

        let report = runner.step(&mut game).unwrap();
        assert_eq!(report.action, Some(GameAction::Quit));
        assert_eq!(report.tick, None);
        assert!(game.is_over());
        assert_eq!(game.active().y, 0);
        assert!(runner.sink().frames.is_empty());
        // The second key was never read.
        assert_eq!(runner.keys().remaining(), 1);
    }
}
