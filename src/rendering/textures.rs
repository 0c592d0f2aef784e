//! Board and piece images
//!
//! All images are requested once at startup. [`track_texture_loading`] polls
//! the asset server until each handle resolves:
//!
//! - Board loaded: log its size and fit the window to it
//! - Board failed: log an error and shrink the window to the fallback size;
//!   pieces are then not drawn and the playing screen shows an error label
//! - Piece failed: log a warning; that piece simply does not appear

use crate::board::{Piece, PieceColor, PieceKind};
use crate::core::GameSettings;
use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

pub const BOARD_TEXTURE_PATH: &str = "textures/Board.png";

/// Load progress of one image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum TextureStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

impl TextureStatus {
    pub fn from_load_state(state: &LoadState) -> Self {
        match state {
            LoadState::Loaded => TextureStatus::Ready,
            LoadState::Failed(_) => TextureStatus::Failed,
            LoadState::NotLoaded | LoadState::Loading => TextureStatus::Loading,
        }
    }

    pub fn is_resolved(self) -> bool {
        self != TextureStatus::Loading
    }
}

/// Handles to every image the board needs
#[derive(Resource, Default)]
pub struct BoardTextures {
    pub board: Handle<Image>,
    /// Indexed by `[PieceColor::index()][PieceKind::index()]`
    pub pieces: [[Handle<Image>; 6]; 2],
    pub board_status: TextureStatus,
    pub piece_status: [[TextureStatus; 6]; 2],
    /// Native size of the board image once loaded
    pub board_size: Option<UVec2>,
    /// Native size of the white pawn image, used to scale all resting pieces
    pub pawn_size: Option<UVec2>,
}

impl BoardTextures {
    pub fn piece(&self, piece: Piece) -> &Handle<Image> {
        &self.pieces[piece.color.index()][piece.kind.index()]
    }

    pub fn piece_status(&self, piece: Piece) -> TextureStatus {
        self.piece_status[piece.color.index()][piece.kind.index()]
    }

    pub fn board_ready(&self) -> bool {
        self.board_status == TextureStatus::Ready
    }

    pub fn board_failed(&self) -> bool {
        self.board_status == TextureStatus::Failed
    }

    fn all_resolved(&self) -> bool {
        self.board_status.is_resolved()
            && self.piece_status.iter().flatten().all(|s| s.is_resolved())
    }
}

/// Startup system requesting every image
pub fn load_textures(mut textures: ResMut<BoardTextures>, asset_server: Res<AssetServer>) {
    textures.board = asset_server.load(BOARD_TEXTURE_PATH);
    for color in PieceColor::ALL {
        for kind in PieceKind::ALL {
            let piece = Piece::new(kind, color);
            textures.pieces[color.index()][kind.index()] = asset_server.load(piece.texture_path());
        }
    }
    info!(
        "[TEXTURES] Requested board and {} piece images",
        PieceColor::ALL.len() * PieceKind::ALL.len()
    );
}

/// Poll load states until every image has loaded or failed
pub fn track_texture_loading(
    mut textures: ResMut<BoardTextures>,
    asset_server: Res<AssetServer>,
    images: Res<Assets<Image>>,
    settings: Res<GameSettings>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if textures.all_resolved() {
        return;
    }

    if !textures.board_status.is_resolved() {
        let status = TextureStatus::from_load_state(&asset_server.load_state(&textures.board));
        match status {
            TextureStatus::Ready => {
                let size = images.get(&textures.board).map(|image| image.size());
                textures.board_size = size;
                textures.board_status = TextureStatus::Ready;
                if let Some(size) = size {
                    info!("[TEXTURES] Board image loaded: {}x{}", size.x, size.y);
                    if settings.resize_to_board {
                        resize_primary_window(&mut windows, size);
                    }
                }
            }
            TextureStatus::Failed => {
                textures.board_status = TextureStatus::Failed;
                error!(
                    "[TEXTURES] Board image failed to load. Check asset path {:?} under {:?}.",
                    BOARD_TEXTURE_PATH, settings.asset_root
                );
                resize_primary_window(&mut windows, settings.window.fallback_size());
            }
            TextureStatus::Loading => {}
        }
    }

    for color in PieceColor::ALL {
        for kind in PieceKind::ALL {
            let (c, k) = (color.index(), kind.index());
            if textures.piece_status[c][k].is_resolved() {
                continue;
            }
            let status =
                TextureStatus::from_load_state(&asset_server.load_state(&textures.pieces[c][k]));
            textures.piece_status[c][k] = status;
            let piece = Piece::new(kind, color);
            match status {
                TextureStatus::Ready if piece == Piece::white(PieceKind::Pawn) => {
                    textures.pawn_size = images.get(&textures.pieces[c][k]).map(|i| i.size());
                }
                TextureStatus::Failed => {
                    warn!(
                        "[TEXTURES] Failed to load {} image {:?}",
                        piece,
                        piece.texture_path()
                    );
                }
                _ => {}
            }
        }
    }
}

fn resize_primary_window(windows: &mut Query<&mut Window, With<PrimaryWindow>>, size: UVec2) {
    match windows.single_mut() {
        Ok(mut window) => {
            window.resolution.set(size.x as f32, size.y as f32);
            info!("[TEXTURES] Window size set to: {}x{}", size.x, size.y);
        }
        Err(e) => debug!("[TEXTURES] No primary window to resize: {:?}", e),
    }
}
