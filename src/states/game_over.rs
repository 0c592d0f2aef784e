//! Game over screen plugin
//!
//! Draws a translucent black banner over the final board position with the
//! restart prompt. The board sprites stay visible underneath.

use crate::core::GameState;
use crate::ui::styles::*;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

pub const GAME_OVER_TITLE: &str = "Game Over";
pub const GAME_OVER_PROMPT: &str = "Press R to Restart";

/// Plugin for game over screen
pub struct GameOverPlugin;

impl Plugin for GameOverPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::GameOver), announce_game_over)
            .add_systems(
                EguiPrimaryContextPass,
                game_over_ui.run_if(in_state(GameState::GameOver)),
            );
    }
}

fn announce_game_over() {
    info!("[GAME_OVER] Showing game over overlay");
}

fn game_over_ui(mut contexts: EguiContexts) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(UiColors::BG_GAME_OVER))
        .show(ctx, |ui| {
            let height = ui.available_height();
            ui.vertical_centered(|ui| {
                ui.add_space(height * 0.35);
                ui.label(TextStyle::title(GAME_OVER_TITLE, UiColors::DANGER));
                ui.add_space(height * 0.08);
                ui.label(TextStyle::prompt(GAME_OVER_PROMPT));
            });
        });
}
