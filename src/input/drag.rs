//! Drag-and-drop of pieces
//!
//! Pressing on an occupied square lifts the piece out of the grid. While the
//! button is held the piece follows the cursor, centred under it. Releasing
//! over a square drops it there, replacing whatever stood on it; releasing
//! anywhere else puts it back on the square it came from.
//!
//! A lifted piece is owned by [`DragState`] and is in no grid square. Every
//! path out of a drag (drop, return, cancel) puts it back into the grid, so
//! the only way a piece leaves the board is by being overwritten on a drop.

use crate::board::{BoardLayout, ChessBoard, Piece, Square};
use crate::core::GameState;
use bevy::prelude::*;

/// A piece lifted off the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraggedPiece {
    pub piece: Piece,
    pub origin: Square,
}

/// Result of ending a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece now stands on `to`; `captured` is the piece it replaced
    Moved {
        piece: Piece,
        from: Square,
        to: Square,
        captured: Option<Piece>,
    },
    /// The piece went back to its origin square
    Returned { piece: Piece, origin: Square },
}

/// Resource tracking the piece under the cursor
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct DragState {
    dragged: Option<DraggedPiece>,
    /// Last cursor position seen during the drag, window pixels
    pub cursor: Vec2,
    /// Cursor offset from the dragged piece's top-left corner
    pub offset: Vec2,
}

impl DragState {
    pub fn is_active(&self) -> bool {
        self.dragged.is_some()
    }

    pub fn dragged(&self) -> Option<DraggedPiece> {
        self.dragged
    }

    /// Top-left corner to draw the dragged piece at
    pub fn draw_top_left(&self) -> Option<Vec2> {
        self.dragged.map(|_| self.cursor - self.offset)
    }

    /// Lift the piece under `pos`, if any
    ///
    /// Does nothing while a drag is already in progress, or when `pos` is off
    /// the board or over an empty square.
    pub fn press(
        &mut self,
        board: &mut ChessBoard,
        layout: &BoardLayout,
        pos: Vec2,
    ) -> Option<DraggedPiece> {
        if self.is_active() {
            return None;
        }
        let origin = layout.square_at(pos)?;
        let piece = board.take(origin)?;
        let dragged = DraggedPiece { piece, origin };
        self.dragged = Some(dragged);
        self.offset = layout.drag_offset();
        self.cursor = pos;
        Some(dragged)
    }

    /// Track the cursor; returns false when nothing is being dragged
    pub fn motion(&mut self, pos: Vec2) -> bool {
        if self.is_active() {
            self.cursor = pos;
            true
        } else {
            false
        }
    }

    /// Drop the dragged piece at `pos`
    ///
    /// `None` means the cursor is outside the window, which counts as off the
    /// board. Returns `None` when nothing was being dragged.
    pub fn release(
        &mut self,
        board: &mut ChessBoard,
        layout: &BoardLayout,
        pos: Option<Vec2>,
    ) -> Option<DropOutcome> {
        let DraggedPiece { piece, origin } = self.dragged.take()?;
        let target = pos.and_then(|pos| layout.square_at(pos));
        match target {
            Some(to) if to != origin => {
                let captured = board.place(to, piece);
                Some(DropOutcome::Moved {
                    piece,
                    from: origin,
                    to,
                    captured,
                })
            }
            _ => {
                board.place(origin, piece);
                Some(DropOutcome::Returned { piece, origin })
            }
        }
    }

    /// Abort a drag, returning the piece to its origin square
    pub fn cancel(&mut self, board: &mut ChessBoard) -> Option<DropOutcome> {
        let DraggedPiece { piece, origin } = self.dragged.take()?;
        board.place(origin, piece);
        Some(DropOutcome::Returned { piece, origin })
    }

    /// Forget any drag without touching the board
    ///
    /// Used when the board itself is reset.
    pub fn clear(&mut self) {
        self.dragged = None;
    }
}

/// Lift a piece on left-button press
pub fn begin_drag(
    mouse: Res<ButtonInput<MouseButton>>,
    cursor: Res<super::CursorState>,
    layout: Res<BoardLayout>,
    mut drag: ResMut<DragState>,
    mut board: ResMut<ChessBoard>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Some(pos) = cursor.position else {
        return;
    };
    if let Some(dragged) = drag.press(&mut board, &layout, pos) {
        debug!("[DRAG] Picked up {} from {}", dragged.piece, dragged.origin);
    }
}

/// Keep the dragged piece under the cursor
pub fn follow_cursor(cursor: Res<super::CursorState>, mut drag: ResMut<DragState>) {
    if !drag.is_active() {
        return;
    }
    if let Some(pos) = cursor.position {
        if drag.cursor != pos {
            drag.motion(pos);
        }
    }
}

/// Drop the dragged piece on left-button release
pub fn end_drag(
    mouse: Res<ButtonInput<MouseButton>>,
    cursor: Res<super::CursorState>,
    layout: Res<BoardLayout>,
    mut drag: ResMut<DragState>,
    mut board: ResMut<ChessBoard>,
) {
    if !mouse.just_released(MouseButton::Left) || !drag.is_active() {
        return;
    }
    match drag.release(&mut board, &layout, cursor.position) {
        Some(DropOutcome::Moved {
            piece,
            from,
            to,
            captured: Some(captured),
        }) => info!("[DRAG] {} {} -> {} replacing {}", piece, from, to, captured),
        Some(DropOutcome::Moved { piece, from, to, .. }) => {
            info!("[DRAG] {} {} -> {}", piece, from, to)
        }
        Some(DropOutcome::Returned { piece, origin }) => {
            debug!("[DRAG] {} returned to {}", piece, origin)
        }
        None => {}
    }
}

/// Put an in-flight piece back when leaving the playing screen
pub fn cancel_drag_on_exit(mut drag: ResMut<DragState>, mut board: ResMut<ChessBoard>) {
    if let Some(DropOutcome::Returned { piece, origin }) = drag.cancel(&mut board) {
        info!(
            "[DRAG] Left {:?} mid-drag, {} returned to {}",
            GameState::Playing,
            piece,
            origin
        );
    }
}
