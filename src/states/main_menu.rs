//! Main menu screen
//!
//! A full-window panel with the title and the start prompt. ENTER is handled
//! by `input::keyboard::handle_screen_keys`.

use crate::core::GameState;
use crate::ui::styles::*;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

pub const MENU_TITLE: &str = "Chess Game";
pub const MENU_PROMPT: &str = "Press ENTER to Start";

pub struct MainMenuPlugin;

impl Plugin for MainMenuPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Menu), announce_menu)
            .add_systems(
                EguiPrimaryContextPass,
                main_menu_ui.run_if(in_state(GameState::Menu)),
            );
    }
}

fn announce_menu() {
    info!("[MAIN_MENU] Showing title screen");
}

fn main_menu_ui(mut contexts: EguiContexts) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(UiColors::BG_MENU))
        .show(ctx, |ui| {
            let height = ui.available_height();
            ui.vertical_centered(|ui| {
                // Title sits at roughly a third of the window, prompt below it.
                ui.add_space(height * 0.3);
                ui.label(TextStyle::title(MENU_TITLE, UiColors::TEXT_PRIMARY));
                ui.add_space(height * 0.1);
                ui.label(TextStyle::prompt(MENU_PROMPT));
            });
        });
}
