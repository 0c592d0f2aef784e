//! Color palette for the screen overlays
//!
//! Colors are defined as egui::Color32 for direct use in UI code.

use bevy_egui::egui;

/// Primary UI color palette
pub struct UiColors;

impl UiColors {
    /// Menu background, matching the clear color behind it
    pub const BG_MENU: egui::Color32 = egui::Color32::from_rgb(64, 64, 64);

    /// Translucent black drawn over the board on game over
    pub const BG_GAME_OVER: egui::Color32 = egui::Color32::from_black_alpha(150);

    /// Headings and prompts
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::WHITE;

    /// Game-over heading and load errors
    pub const DANGER: egui::Color32 = egui::Color32::RED;
}
