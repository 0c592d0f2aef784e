//! Screen keys
//!
//! | Screen   | Key    | Effect                                   |
//! |----------|--------|------------------------------------------|
//! | Menu     | Enter  | start playing on the current board       |
//! | Playing  | Escape | back to the menu                         |
//! | GameOver | R      | reset the board and play again           |
//!
//! Any other key, or a listed key on another screen, is ignored.

use super::drag::DragState;
use crate::board::ChessBoard;
use crate::core::GameState;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    Start,
    ReturnToMenu,
    Restart,
}

impl ScreenAction {
    pub fn target(self) -> GameState {
        match self {
            ScreenAction::Start | ScreenAction::Restart => GameState::Playing,
            ScreenAction::ReturnToMenu => GameState::Menu,
        }
    }
}

/// Which action, if any, `key` triggers on `screen`
pub fn screen_key_action(screen: GameState, key: KeyCode) -> Option<ScreenAction> {
    match (screen, key) {
        (GameState::Menu, KeyCode::Enter | KeyCode::NumpadEnter) => Some(ScreenAction::Start),
        (GameState::Playing, KeyCode::Escape) => Some(ScreenAction::ReturnToMenu),
        (GameState::GameOver, KeyCode::KeyR) => Some(ScreenAction::Restart),
        _ => None,
    }
}

/// Apply at most one screen action per frame
pub fn handle_screen_keys(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut board: ResMut<ChessBoard>,
    mut drag: ResMut<DragState>,
) {
    let screen = *state.get();
    let Some(action) = keys
        .get_just_pressed()
        .find_map(|&key| screen_key_action(screen, key))
    else {
        return;
    };

    match action {
        ScreenAction::Start => info!("[SCREEN] Game started"),
        ScreenAction::ReturnToMenu => info!("[SCREEN] Returning to menu"),
        ScreenAction::Restart => {
            drag.clear();
            board.reset();
            info!("[SCREEN] Game restarted");
        }
    }
    next_state.set(action.target());
}
