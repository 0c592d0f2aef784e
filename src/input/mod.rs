//! Input module - cursor tracking, drag-and-drop and screen keys
//!
//! # Architecture
//!
//! - `pointer` - mirrors the window cursor into [`CursorState`]
//! - `drag` - [`DragState`] and the press / follow / release systems
//! - `keyboard` - Enter / Escape / R screen transitions
//!
//! Systems run in [`InputSystems`] order: Cursor → Drag → Screen. Drag systems
//! only run while [`GameState::Playing`]; leaving that screen mid-drag returns
//! the piece to its square.

pub mod drag;
pub mod keyboard;
pub mod pointer;

pub use drag::{DragState, DraggedPiece, DropOutcome};
pub use keyboard::{screen_key_action, ScreenAction};
pub use pointer::CursorState;

use crate::core::GameState;
use bevy::prelude::*;

/// Ordering of the input systems within `Update`
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSystems {
    /// Read the window cursor
    Cursor,
    /// Lift, move and drop pieces
    Drag,
    /// Screen transitions from the keyboard
    Screen,
}

/// Registers input resources and systems
///
/// `track_cursor` is off in headless apps that have no window and drive
/// [`CursorState`] directly.
pub struct BoardInputPlugin {
    pub track_cursor: bool,
}

impl Default for BoardInputPlugin {
    fn default() -> Self {
        Self { track_cursor: true }
    }
}

impl Plugin for BoardInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<CursorState>()
            .init_resource::<DragState>()
            .register_type::<CursorState>();

        app.configure_sets(
            Update,
            (InputSystems::Cursor, InputSystems::Drag, InputSystems::Screen).chain(),
        );

        if self.track_cursor {
            app.add_systems(
                Update,
                pointer::cursor_tracking_system.in_set(InputSystems::Cursor),
            );
        }

        app.add_systems(
            Update,
            (drag::begin_drag, drag::follow_cursor, drag::end_drag)
                .chain()
                .in_set(InputSystems::Drag)
                .run_if(in_state(GameState::Playing)),
        )
        .add_systems(
            Update,
            keyboard::handle_screen_keys.in_set(InputSystems::Screen),
        )
        .add_systems(OnExit(GameState::Playing), drag::cancel_drag_on_exit);
    }
}
