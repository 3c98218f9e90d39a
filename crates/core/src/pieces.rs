//! Pieces module - tetromino shapes, validity and the rotation engine
//!
//! Every piece lives in a 4x4 occupancy matrix indexed `[row][col]`, row 0 on
//! top. Rotation is a pure matrix transform with no wall kicks: the turned
//! matrix is accepted only if it fits at the piece's current origin.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{PieceKind, RotationDirection, SHAPE_SIZE};

/// Absolute board cells covered by a piece (at most 16)
pub type PieceCells = ArrayVec<(i32, i32), { SHAPE_SIZE * SHAPE_SIZE }>;

/// 4x4 occupancy matrix of a piece in local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape(pub [[bool; SHAPE_SIZE]; SHAPE_SIZE]);

const X: bool = true;
const O: bool = false;

/// Spawn matrices, indexed by `PieceKind::index()`
const SHAPES: [[[bool; SHAPE_SIZE]; SHAPE_SIZE]; PieceKind::COUNT] = [
    // I
    [[O, O, O, O], [X, X, X, X], [O, O, O, O], [O, O, O, O]],
    // O
    [[O, O, O, O], [O, X, X, O], [O, X, X, O], [O, O, O, O]],
    // T
    [[O, O, O, O], [X, X, X, O], [O, X, O, O], [O, O, O, O]],
    // S
    [[O, O, O, O], [O, X, X, O], [X, X, O, O], [O, O, O, O]],
    // Z
    [[O, O, O, O], [X, X, O, O], [O, X, X, O], [O, O, O, O]],
    // J
    [[O, O, O, O], [X, O, O, O], [X, X, X, O], [O, O, O, O]],
    // L
    [[O, O, O, O], [O, O, X, O], [X, X, X, O], [O, O, O, O]],
];

impl Shape {
    /// Spawn orientation of a piece kind
    pub fn for_kind(kind: PieceKind) -> Self {
        Shape(SHAPES[kind.index()])
    }

    /// Whether local cell (col, row) is occupied
    pub fn is_set(&self, col: usize, row: usize) -> bool {
        self.0[row][col]
    }

    /// Occupied local cells as (col, row)
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .filter(|&(_, &set)| set)
                .map(move |(col, _)| (col, row))
        })
    }

    /// Quarter turn of the whole matrix.
    ///
    /// Clockwise: `new[col][3 - row] = old[row][col]`.
    /// Counter-clockwise: `new[3 - col][row] = old[row][col]`.
    pub fn rotated(&self, direction: RotationDirection) -> Self {
        let last = SHAPE_SIZE - 1;
        let mut out = [[false; SHAPE_SIZE]; SHAPE_SIZE];
        for (row, line) in self.0.iter().enumerate() {
            for (col, &set) in line.iter().enumerate() {
                match direction {
                    RotationDirection::Clockwise => out[col][last - row] = set,
                    RotationDirection::CounterClockwise => out[last - col][row] = set,
                }
            }
        }
        Shape(out)
    }
}

/// Check whether `shape` fits with its origin at (x, y).
///
/// A cell is rejected if its column is outside the board or its row is at or
/// below the bottom edge; cells at row >= 0 are also rejected when the board
/// cell is occupied. Cells above the board (negative row) never collide.
pub fn is_valid(x: i32, y: i32, shape: &Shape, board: &Board) -> bool {
    let width = board.width() as i32;
    let height = board.height() as i32;

    shape.cells().all(|(px, py)| {
        let ax = x + px as i32;
        let ay = y + py as i32;
        if ax < 0 || ax >= width || ay >= height {
            return false;
        }
        ay < 0 || !board.is_occupied(ax, ay)
    })
}

/// Spawn origin for a board of the given width
pub fn spawn_position(board_width: usize) -> (i32, i32) {
    (board_width as i32 / 2 - 2, 0)
}

/// A positioned piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Piece of `kind` in spawn orientation at (x, y)
    pub fn new(kind: PieceKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            shape: Shape::for_kind(kind),
            x,
            y,
        }
    }

    /// Piece of `kind` at the spawn position of a board `board_width` wide
    pub fn spawn(kind: PieceKind, board_width: usize) -> Self {
        let (x, y) = spawn_position(board_width);
        Self::new(kind, x, y)
    }

    /// Absolute cells covered by the piece, including ones above the board
    pub fn cells(&self) -> PieceCells {
        self.shape
            .cells()
            .map(|(px, py)| (self.x + px as i32, self.y + py as i32))
            .collect()
    }

    /// Check if the piece fits on the board where it is
    pub fn is_valid(&self, board: &Board) -> bool {
        is_valid(self.x, self.y, &self.shape, board)
    }

    /// Candidate translated by (dx, dy)
    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Whether the piece is covering absolute cell (x, y)
    pub fn covers(&self, x: i32, y: i32) -> bool {
        let (lx, ly) = (x - self.x, y - self.y);
        if lx < 0 || ly < 0 || lx as usize >= SHAPE_SIZE || ly as usize >= SHAPE_SIZE {
            return false;
        }
        self.shape.is_set(lx as usize, ly as usize)
    }
}

/// Rotate `piece` in place if the turned matrix fits at its current origin.
///
/// Returns whether the rotation was applied; a rejected turn leaves the piece
/// untouched.
pub fn try_rotate(piece: &mut Piece, direction: RotationDirection, board: &Board) -> bool {
    let candidate = piece.shape.rotated(direction);
    if is_valid(piece.x, piece.y, &candidate, board) {
        piece.shape = candidate;
        true
    } else {
        false
    }
}
