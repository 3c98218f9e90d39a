//! Falling-block puzzle runner (default binary).
//!
//! Keys: `q` left, `d` right, `z`/`s` rotate, space hard drop, `e` quit.

use anyhow::Result;
use crossterm::style::Stylize;
use log::info;

use term_arcade::core::GameState;
use term_arcade::engine::{init_logging, EngineConfig, RunConfig, Runner, SystemClock};
use term_arcade::input::TerminalKeys;
use term_arcade::term::{TerminalSession, TerminalSink};

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    init_logging(&config)?;
    info!("seed {}", config.seed);

    let mut session = TerminalSession::enter()?;
    let result = run(&mut session, config.seed);

    // Restore the terminal before printing, whichever way the loop ended.
    session.close()?;
    let score = result?;

    println!("\n{} Final score: {}", "Game Over!".red(), score);
    println!("Thanks for playing!");
    Ok(())
}

fn run(session: &mut TerminalSession, seed: u32) -> Result<u32> {
    let mut game = GameState::new(seed);
    let mut runner = Runner::new(
        EngineConfig::default(),
        TerminalKeys::new(),
        SystemClock::new(),
        TerminalSink::new(session.renderer()),
    );
    runner.run(&mut game)
}
