//! Board coordinates
//!
//! Row 0 is the top of the screen (black back rank) and row 7 the bottom
//! (white back rank). Columns run left to right, file `a` to file `h`.

use bevy::prelude::*;

pub const BOARD_SIZE: u8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Self { row, col })
    }

    pub fn from_signed(row: i32, col: i32) -> Option<Self> {
        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        Self::new(row, col)
    }

    /// Every square, row by row from the top-left
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }

    /// Algebraic name, e.g. `a8` for the top-left square
    pub fn name(&self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = BOARD_SIZE - self.row;
        format!("{file}{rank}")
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}
