//! Dodge game runner.
//!
//! Walk the arena with `z`/`q`/`s`/`d`, collect fruit (`*`) and stay away
//! from the enemies (`E`). `e` quits. Turn-based: every key is one turn.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::style::Stylize;
use log::info;

use term_arcade::core::{DodgeEvent, DodgeGame};
use term_arcade::engine::{init_logging, RunConfig};
use term_arcade::input::{direction_for_key, is_quit_key, TerminalKeys};
use term_arcade::term::{DodgeView, TerminalSession};
use term_arcade::types::DODGE_STEP_DELAY_MS;

enum Ending {
    Caught,
    Quit,
}

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    init_logging(&config)?;
    info!("dodge seed {}", config.seed);

    let mut game = DodgeGame::new(config.seed);
    let mut session = TerminalSession::enter()?;
    let result = run(&mut session, &mut game);
    session.close()?;

    match result? {
        Ending::Caught => println!("\n{} An enemy caught you.", "Game Over!".red()),
        Ending::Quit => println!("\nYou left the game."),
    }
    println!("Score : {}", game.score());
    Ok(())
}

fn run(session: &mut TerminalSession, game: &mut DodgeGame) -> Result<Ending> {
    let view = DodgeView::default();
    let mut keys = TerminalKeys::new();

    loop {
        session.renderer().draw(&view.render(game))?;

        let key = keys.wait_for_char()?;
        if is_quit_key(key) {
            game.quit();
            return Ok(Ending::Quit);
        }

        if game.step(direction_for_key(key)) == DodgeEvent::Caught {
            session.renderer().draw(&view.render(game))?;
            return Ok(Ending::Caught);
        }

        thread::sleep(Duration::from_millis(DODGE_STEP_DELAY_MS));
    }
}
