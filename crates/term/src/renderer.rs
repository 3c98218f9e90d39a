//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every frame is a full clear-and-redraw. `TerminalSession` scopes raw mode so
//! the terminal is restored on every exit path, including early `?` returns.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::GameState;
use crate::fb::{CellStyle, FrameBuffer, Tint};
use crate::game_view::GameView;

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Clear the screen and print the whole framebuffer.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        let mut current_style: Option<CellStyle> = None;
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                let cell = fb.get(x, y).unwrap_or_default();
                if current_style != Some(cell.style) {
                    self.apply_style(cell.style)?;
                    current_style = Some(cell.style);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
            if y + 1 < fb.height() {
                // Raw mode disables output post-processing, so return explicitly.
                self.stdout.queue(Print("\r\n"))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn apply_style(&mut self, style: CellStyle) -> Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        match tint_to_color(style.fg) {
            Some(color) => self.stdout.queue(SetForegroundColor(color))?,
            None => self.stdout.queue(ResetColor)?,
        };
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn tint_to_color(tint: Tint) -> Option<Color> {
    match tint {
        Tint::Plain => None,
        Tint::Yellow => Some(Color::DarkYellow),
        Tint::Blue => Some(Color::DarkBlue),
        Tint::Red => Some(Color::DarkRed),
        Tint::Green => Some(Color::DarkGreen),
        Tint::White => Some(Color::Grey),
    }
}

/// Raw-mode terminal scope.
///
/// `enter` switches the terminal to raw mode on the alternate screen; dropping
/// the session restores it. Call [`TerminalSession::close`] to observe
/// restore errors instead of ignoring them.
pub struct TerminalSession {
    renderer: TerminalRenderer,
    active: bool,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        let mut renderer = TerminalRenderer::new();
        renderer.enter()?;
        Ok(Self {
            renderer,
            active: true,
        })
    }

    pub fn renderer(&mut self) -> &mut TerminalRenderer {
        &mut self.renderer
    }

    /// Restore the terminal now.
    pub fn close(mut self) -> Result<()> {
        self.active = false;
        self.renderer.exit()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            let _ = self.renderer.exit();
        }
    }
}

/// Where the game loop sends frames.
pub trait RenderSink {
    /// Full redraw of the board, active piece and score.
    fn render(&mut self, game: &GameState) -> Result<()>;
}

/// Renders frames through a [`GameView`] onto the live terminal.
pub struct TerminalSink<'a> {
    renderer: &'a mut TerminalRenderer,
    view: GameView,
}

impl<'a> TerminalSink<'a> {
    pub fn new(renderer: &'a mut TerminalRenderer) -> Self {
        Self {
            renderer,
            view: GameView::default(),
        }
    }
}

impl RenderSink for TerminalSink<'_> {
    fn render(&mut self, game: &GameState) -> Result<()> {
        let fb = self.view.render(game);
        self.renderer.draw(&fb)
    }
}

/// Keeps the text of every rendered frame; used to observe the loop.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub frames: Vec<String>,
    view: GameView,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl RenderSink for RecordingSink {
    fn render(&mut self, game: &GameState) -> Result<()> {
        self.frames.push(self.view.render(game).to_text());
        Ok(())
    }
}
