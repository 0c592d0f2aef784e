//! Headless app helpers shared by the integration tests
//!
//! There is no window or `InputPlugin` here, so tests write `CursorState`
//! directly and clear `ButtonInput` themselves between frames.

#![allow(dead_code)]

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use dragboard::board::{BoardLayout, BoardPlugin, Square};
use dragboard::core::{CorePlugin, GameState};
use dragboard::input::{BoardInputPlugin, CursorState};

/// Core, board and input plugins, not yet updated
pub fn headless_base() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .add_plugins((
            CorePlugin {
                install_panic_hook: false,
            },
            BoardPlugin,
            BoardInputPlugin { track_cursor: false },
        ));
    app
}

pub fn headless_app() -> App {
    let mut app = headless_base();
    app.update();
    app
}

pub fn current_state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

/// Tap a key: one frame with it pressed, one more to apply the transition
pub fn tap_key(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
    app.update();
    {
        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.release(key);
        keys.clear();
    }
    app.update();
}

pub fn set_state(app: &mut App, state: GameState) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(state);
    app.update();
}

/// Window pixel at the middle of `square`
pub fn square_center(app: &App, square: Square) -> Vec2 {
    let layout = app.world().resource::<BoardLayout>();
    layout.square_top_left(square) + Vec2::splat(layout.tile_size / 2.0)
}

pub fn move_cursor(app: &mut App, position: Option<Vec2>) {
    app.world_mut().resource_mut::<CursorState>().position = position;
}

pub fn press_left(app: &mut App) {
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Left);
    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .clear();
}

pub fn release_left(app: &mut App) {
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .release(MouseButton::Left);
    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .clear();
}

pub fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).expect("square on the board")
}
