//! Logical board: an 8x8 grid of optional pieces
//!
//! The grid is the single source of truth for what sits where. Input systems
//! mutate it, the fixed-tick renderer reads it. No chess rules are applied:
//! any piece may be placed on any square.

use super::piece::{Piece, PieceColor, PieceKind};
use super::square::{Square, BOARD_SIZE};
use bevy::prelude::*;

/// Back rank order, left to right
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Resource holding the grid, indexed `[row][col]`
#[derive(Resource, Clone, Debug, PartialEq, Eq)]
pub struct ChessBoard {
    squares: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::standard()
    }
}

impl ChessBoard {
    pub fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Standard starting position: black on rows 0-1, white on rows 6-7
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as usize;
            board.squares[0][col] = Some(Piece::new(kind, PieceColor::Black));
            board.squares[1][col] = Some(Piece::black(PieceKind::Pawn));
            board.squares[6][col] = Some(Piece::white(PieceKind::Pawn));
            board.squares[7][col] = Some(Piece::new(kind, PieceColor::White));
        }
        board
    }

    pub fn reset(&mut self) {
        *self = Self::standard();
        tracing::debug!("[BOARD] Reset to starting position");
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    /// Remove and return the piece on `square`
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize].take()
    }

    /// Put `piece` on `square`, returning any piece it replaced
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize].replace(piece)
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Occupied squares with their pieces, row by row from the top-left
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }

    pub fn piece_count(&self) -> usize {
        self.occupied().count()
    }
}
