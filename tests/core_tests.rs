//! Integration tests for the screen state machine
//!
//! Drives a headless app with keyboard input and checks which screen is
//! active and what happens to the board on restart.

mod common;

use bevy::prelude::*;
use common::*;
use dragboard::board::{ChessBoard, Piece, PieceKind};
use dragboard::core::{GameState, OnBoard};

#[test]
fn test_initial_state_is_menu() {
    let app = headless_app();
    assert_eq!(current_state(&app), GameState::Menu);
    assert!(app.world().get_resource::<State<OnBoard>>().is_none());
    assert_eq!(app.world().resource::<ChessBoard>().piece_count(), 32);
}

#[test]
fn test_enter_starts_game() {
    let mut app = headless_app();
    tap_key(&mut app, KeyCode::Enter);
    assert_eq!(current_state(&app), GameState::Playing);
    assert!(app.world().get_resource::<State<OnBoard>>().is_some());
}

#[test]
fn test_escape_returns_to_menu() {
    let mut app = headless_app();
    tap_key(&mut app, KeyCode::Enter);
    tap_key(&mut app, KeyCode::Escape);
    assert_eq!(current_state(&app), GameState::Menu);
}

#[test]
fn test_keys_ignored_outside_their_screen() {
    let mut app = headless_app();

    tap_key(&mut app, KeyCode::Escape);
    tap_key(&mut app, KeyCode::KeyR);
    assert_eq!(current_state(&app), GameState::Menu);

    tap_key(&mut app, KeyCode::Enter);
    tap_key(&mut app, KeyCode::Enter);
    tap_key(&mut app, KeyCode::KeyR);
    assert_eq!(current_state(&app), GameState::Playing);
}

#[test]
fn test_restart_from_game_over_resets_board() {
    let mut app = headless_app();
    tap_key(&mut app, KeyCode::Enter);

    {
        let mut board = app.world_mut().resource_mut::<ChessBoard>();
        board.take(sq(6, 4));
        board.place(sq(0, 0), Piece::white(PieceKind::Queen));
    }
    set_state(&mut app, GameState::GameOver);
    assert_eq!(current_state(&app), GameState::GameOver);
    assert!(app.world().get_resource::<State<OnBoard>>().is_some());

    tap_key(&mut app, KeyCode::KeyR);
    assert_eq!(current_state(&app), GameState::Playing);
    assert_eq!(*app.world().resource::<ChessBoard>(), ChessBoard::standard());
}

#[test]
fn test_returning_to_menu_keeps_board() {
    let mut app = headless_app();
    tap_key(&mut app, KeyCode::Enter);
    app.world_mut().resource_mut::<ChessBoard>().take(sq(6, 0));

    tap_key(&mut app, KeyCode::Escape);
    tap_key(&mut app, KeyCode::Enter);

    let board = app.world().resource::<ChessBoard>();
    assert_eq!(board.piece_count(), 31);
    assert!(board.is_empty(sq(6, 0)));
}

#[test]
fn test_fixed_timestep_follows_settings() {
    use dragboard::core::GameSettings;
    use std::time::Duration;

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, bevy::state::app::StatesPlugin))
        .insert_resource(GameSettings {
            tick_rate_hz: 50.0,
            ..default()
        })
        .add_plugins(dragboard::core::CorePlugin {
            install_panic_hook: false,
        });

    assert_eq!(
        app.world().resource::<Time<Fixed>>().timestep(),
        Duration::from_millis(20)
    );
}
