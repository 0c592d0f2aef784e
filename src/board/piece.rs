//! Piece data: a plain (kind, color) pair
//!
//! Pieces carry no behaviour. The board stores them by value and the renderer
//! maps them to textures through [`Piece::texture_path`].

use bevy::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect, Default)]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    pub const ALL: [PieceColor; 2] = [PieceColor::White, PieceColor::Black];

    /// Name used in texture folders and file names
    pub fn name(self) -> &'static str {
        match self {
            PieceColor::White => "White",
            PieceColor::Black => "Black",
        }
    }

    pub fn index(self) -> usize {
        match self {
            PieceColor::White => 0,
            PieceColor::Black => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect, Default)]
pub enum PieceKind {
    #[default]
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }

    /// Parse a piece name, ignoring case
    ///
    /// Unknown names yield `None`; callers draw nothing for them.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// A chess piece as stored on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self { kind, color }
    }

    pub const fn white(kind: PieceKind) -> Self {
        Self::new(kind, PieceColor::White)
    }

    pub const fn black(kind: PieceKind) -> Self {
        Self::new(kind, PieceColor::Black)
    }

    /// Asset path of this piece's image, relative to the asset root
    ///
    /// ```rust,ignore
    /// assert_eq!(Piece::white(PieceKind::Pawn).texture_path(), "textures/White/WhitePawn.png");
    /// ```
    pub fn texture_path(&self) -> String {
        format!(
            "textures/{color}/{color}{kind}.png",
            color = self.color.name(),
            kind = self.kind.name()
        )
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color.name(), self.kind.name())
    }
}
