//! Board module - the logical 8x8 grid and its pixel geometry
//!
//! - `piece` - (kind, color) pairs and their texture paths
//! - `square` - bounded row/column coordinates
//! - `grid` - [`ChessBoard`] resource, the single source of truth for piece placement
//! - `layout` - [`BoardLayout`] mapping window pixels to squares and back
//!
//! No chess rules live here: pieces can be moved to any square.

pub mod grid;
pub mod layout;
pub mod piece;
pub mod square;

pub use grid::ChessBoard;
pub use layout::{window_to_world, BoardLayout};
pub use piece::{Piece, PieceColor, PieceKind};
pub use square::Square;

use bevy::prelude::*;

/// Registers the board resources
///
/// The layout is normally inserted from settings before this plugin is added;
/// a default one is used otherwise.
pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ChessBoard>()
            .init_resource::<BoardLayout>()
            .register_type::<BoardLayout>();
    }
}
