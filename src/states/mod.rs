//! Screen overlays, one plugin per game state
//!
//! Each plugin draws its egui overlay in `EguiPrimaryContextPass`, gated with
//! `run_if(in_state(...))`. Screen changes are driven by the keyboard systems
//! in [`crate::input::keyboard`]; the overlays only draw.
//!
//! - `main_menu` - MainMenuPlugin: title card over a dark grey backdrop
//! - `playing` - PlayingPlugin: load-failure notice on top of the board
//! - `game_over` - GameOverPlugin: translucent banner over the final position

pub mod game_over;
pub mod main_menu;
pub mod playing;

pub use game_over::GameOverPlugin;
pub use main_menu::MainMenuPlugin;
pub use playing::PlayingPlugin;

use bevy::prelude::*;

/// Adds every screen overlay plugin.
pub struct ScreensPlugin;

impl Plugin for ScreensPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((MainMenuPlugin, PlayingPlugin, GameOverPlugin));
    }
}
