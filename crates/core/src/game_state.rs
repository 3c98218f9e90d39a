//! Game state module - manages the complete falling-block game state
//!
//! This module ties together the board, the active piece, the RNG and scoring.
//! It owns the piece lifecycle: falling, locking (fix + clear + respawn in one
//! step) and game over. Every operation is total: rejected moves and turns are
//! no-ops reported as `false`, never errors.

use log::{debug, info};

use crate::board::Board;
use crate::pieces::{try_rotate, Piece};
use crate::rng::SimpleRng;
use crate::scoring::line_clear_score;
use crate::types::{GameAction, GameStatus, RotationDirection};

/// Result of one gravity tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The piece moved down one row
    Fell,
    /// The piece could not descend: it was fixed, rows cleared and a new piece spawned
    Locked { rows_cleared: usize },
    /// Like `Locked`, but the new piece did not fit at its spawn position
    ToppedOut { rows_cleared: usize },
    /// The game is already over; nothing happened
    Idle,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Piece,
    rng: SimpleRng,
    score: u32,
    status: GameStatus,
    /// Number of pieces spawned so far, the first one included
    pieces_spawned: u32,
    /// Total rows cleared this session
    rows_cleared: u32,
}

impl GameState {
    /// Create a new game on the standard board and spawn the first piece
    pub fn new(seed: u32) -> Self {
        Self::with_board(Board::new(), seed)
    }

    /// Create a game on an existing board and spawn the first piece
    pub fn with_board(board: Board, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = Piece::spawn(rng.next_kind(), board.width());
        let mut state = Self {
            board,
            active,
            rng,
            score: 0,
            status: GameStatus::Running,
            pieces_spawned: 1,
            rows_cleared: 0,
        };
        if !state.active.is_valid(&state.board) {
            state.status = GameStatus::GameOver;
        }
        info!(
            "game started: {}x{} board, first piece {}",
            state.board.width(),
            state.board.height(),
            state.active.kind.as_str()
        );
        state
    }

    /// Create a game with a chosen active piece, for scripted scenarios.
    ///
    /// Later spawns still come from the seeded RNG.
    pub fn with_active(board: Board, active: Piece, seed: u32) -> Self {
        let mut state = Self::with_board(board, seed);
        state.active = active;
        state.status = if active.is_valid(&state.board) {
            GameStatus::Running
        } else {
            GameStatus::GameOver
        };
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    /// Replace the active piece with a fresh random one at the spawn position.
    ///
    /// Returns false (and ends the game) if the new piece does not fit.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.rng.next_kind();
        self.active = Piece::spawn(kind, self.board.width());
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);

        if !self.active.is_valid(&self.board) {
            info!(
                "spawn blocked for piece {} at ({}, {}); game over with score {}",
                kind.as_str(),
                self.active.x,
                self.active.y,
                self.score
            );
            self.status = GameStatus::GameOver;
            return false;
        }

        debug!("spawned piece {}", kind.as_str());
        true
    }

    /// Try to move the active piece
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if self.is_over() {
            return false;
        }

        let candidate = self.active.moved(dx, dy);
        if candidate.is_valid(&self.board) {
            self.active = candidate;
            return true;
        }

        false
    }

    /// Try to turn the active piece in place (no wall kicks)
    pub fn try_rotate(&mut self, direction: RotationDirection) -> bool {
        if self.is_over() {
            return false;
        }
        try_rotate(&mut self.active, direction, &self.board)
    }

    /// Drop the active piece to the lowest row it can reach.
    ///
    /// Returns the number of rows travelled. The piece is not locked here;
    /// locking happens on the next gravity tick.
    pub fn hard_drop(&mut self) -> u32 {
        let mut rows = 0;
        while self.try_move(0, 1) {
            rows += 1;
        }
        rows
    }

    /// End the session immediately
    pub fn quit(&mut self) {
        if !self.is_over() {
            info!("quit requested; final score {}", self.score);
        }
        self.status = GameStatus::GameOver;
    }

    /// Fix the active piece, clear completed rows, score them and spawn the next piece
    pub fn lock_piece(&mut self) -> TickOutcome {
        self.board.fix(&self.active);

        let rows_cleared = self.board.clear_completed_rows();
        if rows_cleared > 0 {
            self.score = self
                .score
                .saturating_add(line_clear_score(rows_cleared, self.board.width()));
            self.rows_cleared = self.rows_cleared.saturating_add(rows_cleared as u32);
            debug!("cleared {} row(s); score {}", rows_cleared, self.score);
        }

        if self.spawn_piece() {
            TickOutcome::Locked { rows_cleared }
        } else {
            TickOutcome::ToppedOut { rows_cleared }
        }
    }

    /// One gravity step: fall a row, or lock when the row below is blocked
    pub fn gravity_tick(&mut self) -> TickOutcome {
        if self.is_over() {
            return TickOutcome::Idle;
        }

        if self.try_move(0, 1) {
            TickOutcome::Fell
        } else {
            self.lock_piece()
        }
    }

    /// Apply a game action; returns true when the action was accepted
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::Rotate(direction) => self.try_rotate(direction),
            GameAction::HardDrop => {
                if self.is_over() {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::Quit => {
                self.quit();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
