//! Rendering module - 2D sprites for the board and its pieces
//!
//! # Fixed-timestep loop
//!
//! Resting pieces are redrawn from the grid in `FixedUpdate`, which ticks at
//! `GameSettings::tick_rate_hz` (30 Hz by default). The dragged piece is
//! updated every frame in `Update` so it never lags the cursor, and resting
//! pieces are also redrawn in `Update` on any frame the grid changed.
//!
//! # Modules
//!
//! - `textures` - image loading, load-state tracking and fallbacks
//! - `sprites` - sprite entities and their sync systems

pub mod sprites;
pub mod textures;

pub use sprites::{BoardSprite, DraggedSprite, SquareSprite};
pub use textures::{BoardTextures, TextureStatus};

use crate::board::ChessBoard;
use crate::core::{GameState, OnBoard};
use crate::input::InputSystems;
use bevy::prelude::*;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BoardTextures>()
            .insert_resource(ClearColor(sprites::MENU_BACKGROUND))
            .add_plugins(SpriteSyncPlugin);

        app.add_systems(
            Startup,
            (
                sprites::setup_camera,
                (textures::load_textures, sprites::spawn_board_sprites).chain(),
            ),
        )
        .add_systems(
            Update,
            (textures::track_texture_loading, sprites::log_screen_render),
        )
        .add_systems(OnEnter(GameState::Menu), sprites::use_menu_background)
        .add_systems(OnEnter(OnBoard), sprites::use_board_background);
    }
}

/// Keeps sprites in step with [`ChessBoard`] and [`crate::input::DragState`]
///
/// Reads [`BoardTextures`] but loads nothing, so it also runs in headless apps
/// that insert the textures resource themselves.
pub struct SpriteSyncPlugin;

impl Plugin for SpriteSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                sprites::sync_dragged_sprite,
                // Lift and drop show on the same frame
                sprites::sync_piece_sprites.run_if(resource_changed::<ChessBoard>),
            )
                .after(InputSystems::Drag),
        )
        .add_systems(
            FixedUpdate,
            (sprites::sync_board_backdrop, sprites::sync_piece_sprites),
        );
    }
}
