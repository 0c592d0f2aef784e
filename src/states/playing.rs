//! Playing screen overlay
//!
//! The board itself is drawn with sprites. egui only steps in when the board
//! image could not be loaded, to say so in the corner of the window.

use crate::core::GameState;
use crate::rendering::BoardTextures;
use crate::ui::styles::*;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

pub const BOARD_LOAD_FAILED: &str = "Board image failed to load!";

pub struct PlayingPlugin;

impl Plugin for PlayingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            EguiPrimaryContextPass,
            board_failure_notice
                .run_if(in_state(GameState::Playing))
                .run_if(board_texture_failed),
        );
    }
}

/// Run condition: the board image finished loading with an error.
pub fn board_texture_failed(textures: Res<BoardTextures>) -> bool {
    textures.board_failed()
}

fn board_failure_notice(mut contexts: EguiContexts) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("board_load_failure"))
        .fixed_pos(egui::pos2(20.0, 20.0))
        .show(ctx, |ui| {
            ui.label(TextStyle::error(BOARD_LOAD_FAILED));
        });
}
