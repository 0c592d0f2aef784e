//! Window configuration
//!
//! The window opens at the configured size, then follows the board image: it
//! is resized to the image once it loads, or to the fallback size if it fails.

use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowResolution};
use serde::{Deserialize, Serialize};

/// Configuration for the primary application window
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Resource)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial width in logical pixels
    pub width: u32,
    /// Initial height in logical pixels
    pub height: u32,
    /// Whether the window should be resizable
    pub resizable: bool,
    /// Size used when the board image cannot be loaded
    pub fallback_width: u32,
    pub fallback_height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Chess".to_string(),
            width: 1366,
            height: 768,
            resizable: false,
            fallback_width: 626,
            fallback_height: 626,
        }
    }
}

impl WindowConfig {
    /// Create a Bevy Window from this configuration
    pub fn to_window(&self) -> Window {
        Window {
            title: self.title.clone(),
            resolution: WindowResolution::new(self.width, self.height),
            resizable: self.resizable,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    pub fn fallback_size(&self) -> UVec2 {
        UVec2::new(self.fallback_width, self.fallback_height)
    }
}
