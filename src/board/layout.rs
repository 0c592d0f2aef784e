//! Pixel geometry of the board
//!
//! All positions are window pixels with the origin at the top-left corner and
//! y growing downwards, the same space the cursor is reported in. Conversion
//! to Bevy's centred, y-up world space happens only at draw time via
//! [`window_to_world`].

use super::square::{Square, BOARD_SIZE};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Piece images are drawn at their native size divided by this factor
pub const PIECE_IMAGE_SCALE: f32 = 3.2;

/// Placement of the 8x8 grid inside the window
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Resource)]
pub struct BoardLayout {
    /// Window x of the left edge of column 0
    pub origin_x: f32,
    /// Window y of the top edge of row 0
    pub origin_y: f32,
    /// Side of one square in pixels
    pub tile_size: f32,
    /// Offset of a resting piece from its square's top-left corner
    pub piece_inset_x: f32,
    pub piece_inset_y: f32,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            origin_x: 357.0,
            origin_y: 74.0,
            tile_size: 69.0,
            piece_inset_x: 2.0,
            piece_inset_y: 3.0,
        }
    }
}

impl BoardLayout {
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.origin_x, self.origin_y)
    }

    pub fn piece_inset(&self) -> Vec2 {
        Vec2::new(self.piece_inset_x, self.piece_inset_y)
    }

    /// Square under a window pixel, or `None` off the board
    ///
    /// Uses floor division, so pixels left of or above the origin never map
    /// onto row or column 0.
    pub fn square_at(&self, pos: Vec2) -> Option<Square> {
        if self.tile_size <= 0.0 || !pos.is_finite() {
            return None;
        }
        let rel = (pos - self.origin()) / self.tile_size;
        let (col, row) = (rel.x.floor(), rel.y.floor());
        if !(0.0..BOARD_SIZE as f32).contains(&col) || !(0.0..BOARD_SIZE as f32).contains(&row) {
            return None;
        }
        Square::new(row as u8, col as u8)
    }

    /// Top-left corner of the square in window pixels
    pub fn square_top_left(&self, square: Square) -> Vec2 {
        self.origin() + Vec2::new(square.col as f32, square.row as f32) * self.tile_size
    }

    /// Top-left corner of a resting piece's image
    pub fn piece_top_left(&self, square: Square) -> Vec2 {
        self.square_top_left(square) + self.piece_inset()
    }

    /// Size of resting pieces, derived from the pawn image's native size
    ///
    /// Falls back to the tile minus the inset when no pawn image is available.
    pub fn piece_draw_size(&self, pawn_image_size: Option<UVec2>) -> Vec2 {
        match pawn_image_size {
            Some(size) => (size.as_vec2() / PIECE_IMAGE_SCALE).trunc(),
            None => Vec2::splat(self.tile_size) - self.piece_inset(),
        }
    }

    /// Size of the piece following the cursor
    pub fn dragged_draw_size(&self) -> Vec2 {
        Vec2::splat(self.tile_size)
    }

    /// Offset from the cursor to the dragged piece's top-left corner
    ///
    /// Half a tile, rounded down to whole pixels.
    pub fn drag_offset(&self) -> Vec2 {
        Vec2::splat((self.tile_size / 2.0).trunc())
    }
}

/// Convert a window pixel (top-left origin, y down) to world space of a
/// default 2D camera (centred origin, y up)
pub fn window_to_world(pos: Vec2, window_size: Vec2) -> Vec2 {
    Vec2::new(pos.x - window_size.x / 2.0, window_size.y / 2.0 - pos.y)
}

/// World-space centre of an image whose top-left corner sits at `top_left`
pub fn image_center(top_left: Vec2, size: Vec2, window_size: Vec2) -> Vec2 {
    window_to_world(top_left + size / 2.0, window_size)
}
