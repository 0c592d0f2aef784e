//! Cursor tracking
//!
//! Mirrors the primary window's cursor position into [`CursorState`] every
//! frame so the drag systems never touch the window directly. Headless apps
//! (tests) skip the tracking system and write [`CursorState`] themselves.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Current cursor position within the game window
///
/// `position` is in window pixels, top-left origin, y down, and is `None`
/// while the cursor is outside the window.
#[derive(Resource, Debug, Default, Clone, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct CursorState {
    pub position: Option<Vec2>,
    /// Seconds since the last trace line
    pub last_log: f32,
}

/// Updates [`CursorState`] from the primary window
///
/// Traces the position at most once per second.
pub fn cursor_tracking_system(
    q_windows: Query<&Window, With<PrimaryWindow>>,
    time: Res<Time>,
    mut cursor_state: ResMut<CursorState>,
) {
    cursor_state.last_log += time.delta_secs();
    let position = q_windows.single().ok().and_then(|w| w.cursor_position());
    if cursor_state.position != position {
        cursor_state.position = position;
    }
    if cursor_state.last_log >= 1.0 {
        if let Some(pos) = cursor_state.position {
            trace!("[POINTER] Cursor position: ({:.1}, {:.1})", pos.x, pos.y);
        }
        cursor_state.last_log = 0.0;
    }
}
