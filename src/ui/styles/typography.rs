//! Typography for the screen overlays

use super::colors::UiColors;
use bevy_egui::egui;

/// Text size presets
pub struct TextSize;

impl TextSize {
    /// Screen titles ("Chess Game", "Game Over")
    pub const TITLE: f32 = 60.0;

    /// Key prompts
    pub const PROMPT: f32 = 30.0;

    /// Small status text
    pub const BODY: f32 = 14.0;
}

/// Helper functions for creating styled text
pub struct TextStyle;

impl TextStyle {
    pub fn title(text: impl Into<String>, color: egui::Color32) -> egui::RichText {
        egui::RichText::new(text)
            .size(TextSize::TITLE)
            .color(color)
            .strong()
    }

    pub fn prompt(text: impl Into<String>) -> egui::RichText {
        egui::RichText::new(text)
            .size(TextSize::PROMPT)
            .color(UiColors::TEXT_PRIMARY)
    }

    pub fn error(text: impl Into<String>) -> egui::RichText {
        egui::RichText::new(text)
            .size(TextSize::BODY)
            .color(UiColors::DANGER)
    }
}
