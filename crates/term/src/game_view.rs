//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{DodgeGame, GameState};
use crate::fb::{CellStyle, FrameBuffer, Tint};

/// Glyph pair for an occupied cell (locked or active piece)
pub const FILLED_GLYPH: &str = "[]";

/// Glyph pair for an empty cell
pub const EMPTY_GLYPH: &str = " .";

/// Renders the falling-block board, the active piece and the score.
///
/// Locked cells and the active piece look identical. The score line sits
/// directly under the board.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    filled: CellStyle,
    empty: CellStyle,
    text: CellStyle,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: FILLED_GLYPH.len() as u16,
            filled: CellStyle::tinted(Tint::Yellow),
            empty: CellStyle::tinted(Tint::Blue),
            text: CellStyle::default(),
        }
    }
}

impl GameView {
    /// Framebuffer size needed for a game: the board plus one score row.
    pub fn frame_size(&self, game: &GameState) -> (u16, u16) {
        let board = game.board();
        (
            (board.width() as u16) * self.cell_w,
            board.height() as u16 + 1,
        )
    }

    /// Render the current game state into an existing framebuffer.
    pub fn render_into(&self, game: &GameState, fb: &mut FrameBuffer) {
        let board = game.board();
        let active = game.active();

        for y in 0..board.height() {
            for x in 0..board.width() {
                let (bx, by) = (x as i32, y as i32);
                let filled = board.is_occupied(bx, by) || active.covers(bx, by);
                let (glyph, style) = if filled {
                    (FILLED_GLYPH, self.filled)
                } else {
                    (EMPTY_GLYPH, self.empty)
                };
                fb.put_str(x as u16 * self.cell_w, y as u16, glyph, style);
            }
        }

        let score_line = format!("Score: {}", game.score());
        fb.put_str(0, board.height() as u16, &score_line, self.text);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &GameState) -> FrameBuffer {
        let (w, h) = self.frame_size(game);
        // Wide enough for large scores on narrow boards.
        let mut fb = FrameBuffer::new(w.max(24), h);
        self.render_into(game, &mut fb);
        fb
    }
}

/// Renders the dodge arena, its actors and the score.
#[derive(Debug, Clone, Copy)]
pub struct DodgeView {
    player: CellStyle,
    enemy: CellStyle,
    fruit: CellStyle,
    wall: CellStyle,
    floor: CellStyle,
}

impl Default for DodgeView {
    fn default() -> Self {
        Self {
            player: CellStyle {
                fg: Tint::Green,
                bold: true,
            },
            enemy: CellStyle {
                fg: Tint::Red,
                bold: true,
            },
            fruit: CellStyle::tinted(Tint::Yellow),
            wall: CellStyle::tinted(Tint::White),
            floor: CellStyle::tinted(Tint::Blue),
        }
    }
}

impl DodgeView {
    pub const PROMPT: &'static str = "Move (z/q/s/d, e to quit)";

    pub fn render(&self, game: &DodgeGame) -> FrameBuffer {
        let arena = game.arena();
        let width = (arena.width() as u16).max(Self::PROMPT.len() as u16);
        let mut fb = FrameBuffer::new(width, arena.height() as u16 + 3);

        let player = game.player();
        let fruit = game.fruit();
        for y in 0..arena.height() as i32 {
            for x in 0..arena.width() as i32 {
                // Player over fruit over enemies over the map.
                let cell = if player.x == x && player.y == y {
                    self.player.into_cell('P')
                } else if fruit.x == x && fruit.y == y {
                    self.fruit.into_cell('*')
                } else if game.enemies().iter().any(|e| e.x == x && e.y == y) {
                    self.enemy.into_cell('E')
                } else {
                    let tile = arena.tile(x, y).unwrap_or(' ');
                    let style = if arena.is_wall(x, y) {
                        self.wall
                    } else {
                        self.floor
                    };
                    style.into_cell(tile)
                };
                fb.set(x as u16, y as u16, cell);
            }
        }

        let base = arena.height() as u16;
        fb.put_str(0, base + 1, &format!("Score : {}", game.score()), CellStyle::default());
        fb.put_str(0, base + 2, Self::PROMPT, CellStyle::default());
        fb
    }
}
