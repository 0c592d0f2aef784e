//! Board, piece and dragged-piece sprites
//!
//! The grid is redrawn from [`ChessBoard`] on every fixed tick: each of the 64
//! square sprites shows its occupant's image or hides. The dragged piece has a
//! sprite of its own that follows the cursor every frame, above everything.
//!
//! Resting pieces are drawn only once the board image is ready. The dragged
//! piece is drawn regardless.

use super::textures::BoardTextures;
use crate::board::layout::image_center;
use crate::board::{BoardLayout, ChessBoard, Square};
use crate::core::{GameState, OnBoard};
use crate::input::DragState;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

const BOARD_Z: f32 = 0.0;
const PIECE_Z: f32 = 1.0;
const DRAGGED_Z: f32 = 2.0;

/// Background behind the menu
pub const MENU_BACKGROUND: Color = Color::srgb(0.25, 0.25, 0.25);
/// Background behind the board
pub const BOARD_BACKGROUND: Color = Color::srgb(0.75, 0.75, 0.75);

#[derive(Component, Debug)]
pub struct BoardSprite;

#[derive(Component, Debug, Clone, Copy)]
pub struct SquareSprite {
    pub square: Square,
}

#[derive(Component, Debug)]
pub struct DraggedSprite;

/// World position of a resting piece's sprite centre
pub fn piece_translation(
    layout: &BoardLayout,
    square: Square,
    draw_size: Vec2,
    window_size: Vec2,
) -> Vec3 {
    image_center(layout.piece_top_left(square), draw_size, window_size).extend(PIECE_Z)
}

/// World position of the dragged piece's sprite centre
pub fn dragged_translation(top_left: Vec2, draw_size: Vec2, window_size: Vec2) -> Vec3 {
    image_center(top_left, draw_size, window_size).extend(DRAGGED_Z)
}

fn primary_window_size(windows: &Query<&Window, With<PrimaryWindow>>) -> Option<Vec2> {
    windows
        .single()
        .ok()
        .map(|window| Vec2::new(window.width(), window.height()))
}

pub fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Name::new("Board Camera")));
}

/// Spawn the board, one sprite per square and the dragged-piece sprite, all hidden
pub fn spawn_board_sprites(mut commands: Commands, textures: Res<BoardTextures>) {
    commands.spawn((
        Name::new("Board"),
        BoardSprite,
        Sprite::from_image(textures.board.clone()),
        Transform::from_xyz(0.0, 0.0, BOARD_Z),
        Visibility::Hidden,
    ));

    for square in Square::all() {
        commands.spawn((
            Name::new(format!("Square {}", square)),
            SquareSprite { square },
            Sprite::default(),
            Transform::from_xyz(0.0, 0.0, PIECE_Z),
            Visibility::Hidden,
        ));
    }

    commands.spawn((
        Name::new("Dragged Piece"),
        DraggedSprite,
        Sprite::default(),
        Transform::from_xyz(0.0, 0.0, DRAGGED_Z),
        Visibility::Hidden,
    ));

    debug!("[RENDER] Spawned board, 64 square sprites and the drag sprite");
}

/// Show the board image centred in the window while the board is on screen
pub fn sync_board_backdrop(
    textures: Res<BoardTextures>,
    on_board: Option<Res<State<OnBoard>>>,
    mut query: Query<(&mut Sprite, &mut Visibility), With<BoardSprite>>,
) {
    let visible = on_board.is_some() && textures.board_ready();
    for (mut sprite, mut visibility) in &mut query {
        if let Some(size) = textures.board_size {
            let size = size.as_vec2();
            if sprite.custom_size != Some(size) {
                sprite.custom_size = Some(size);
            }
        }
        visibility.set_if_neq(if visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        });
    }
}

/// Redraw resting pieces from the grid
pub fn sync_piece_sprites(
    board: Res<ChessBoard>,
    layout: Res<BoardLayout>,
    textures: Res<BoardTextures>,
    on_board: Option<Res<State<OnBoard>>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut query: Query<(&SquareSprite, &mut Sprite, &mut Transform, &mut Visibility)>,
) {
    let window_size = primary_window_size(&windows);
    let draw = on_board.is_some() && textures.board_ready();
    let draw_size = layout.piece_draw_size(textures.pawn_size);

    for (cell, mut sprite, mut transform, mut visibility) in &mut query {
        let occupant = board.get(cell.square).filter(|_| draw);
        let (Some(piece), Some(window_size)) = (occupant, window_size) else {
            visibility.set_if_neq(Visibility::Hidden);
            continue;
        };

        let image = textures.piece(piece);
        if sprite.image != *image {
            sprite.image = image.clone();
        }
        if sprite.custom_size != Some(draw_size) {
            sprite.custom_size = Some(draw_size);
        }
        let translation = piece_translation(&layout, cell.square, draw_size, window_size);
        if transform.translation != translation {
            transform.translation = translation;
        }
        visibility.set_if_neq(Visibility::Visible);
    }
}

/// Keep the dragged piece's sprite under the cursor
pub fn sync_dragged_sprite(
    drag: Res<DragState>,
    layout: Res<BoardLayout>,
    textures: Res<BoardTextures>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut query: Query<(&mut Sprite, &mut Transform, &mut Visibility), With<DraggedSprite>>,
) {
    let window_size = primary_window_size(&windows);
    for (mut sprite, mut transform, mut visibility) in &mut query {
        let (Some(dragged), Some(top_left), Some(window_size)) =
            (drag.dragged(), drag.draw_top_left(), window_size)
        else {
            visibility.set_if_neq(Visibility::Hidden);
            continue;
        };

        let size = layout.dragged_draw_size();
        let image = textures.piece(dragged.piece);
        if sprite.image != *image {
            sprite.image = image.clone();
        }
        sprite.custom_size = Some(size);
        transform.translation = dragged_translation(top_left, size, window_size);
        visibility.set_if_neq(Visibility::Visible);
    }
}

pub fn use_menu_background(mut clear_color: ResMut<ClearColor>) {
    clear_color.0 = MENU_BACKGROUND;
}

pub fn use_board_background(mut clear_color: ResMut<ClearColor>) {
    clear_color.0 = BOARD_BACKGROUND;
}

/// Log screen changes that affect what is drawn
pub fn log_screen_render(state: Res<State<GameState>>, textures: Res<BoardTextures>) {
    if state.is_changed() {
        debug!(
            "[RENDER] Drawing {:?} (board image {:?})",
            state.get(),
            textures.board_status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceColor, PieceKind};
    use crate::rendering::TextureStatus;
    use bevy::ecs::system::RunSystemOnce;
    use bevy::window::WindowResolution;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("square in range")
    }

    /// World with a primary window, distinct piece handles and every sprite spawned
    fn render_world(
        board_status: TextureStatus,
        on_board: bool,
        board: ChessBoard,
        drag: DragState,
    ) -> World {
        let mut world = World::new();

        let mut images = Assets::<Image>::default();
        let mut textures = BoardTextures::default();
        for color in PieceColor::ALL {
            for kind in PieceKind::ALL {
                textures.pieces[color.index()][kind.index()] = images.add(Image::default());
            }
        }
        textures.board_status = board_status;

        world.insert_resource(images);
        world.insert_resource(textures);
        world.insert_resource(board);
        world.insert_resource(drag);
        world.insert_resource(BoardLayout::default());
        if on_board {
            world.insert_resource(State::new(OnBoard));
        }

        world.spawn((
            Window {
                resolution: WindowResolution::new(1366, 768),
                ..default()
            },
            PrimaryWindow,
        ));
        for square in Square::all() {
            world.spawn((
                SquareSprite { square },
                Sprite::default(),
                Transform::default(),
                Visibility::Hidden,
            ));
        }
        world.spawn((
            DraggedSprite,
            Sprite::default(),
            Transform::default(),
            Visibility::Hidden,
        ));
        world
    }

    fn square_sprite(world: &mut World, square: Square) -> (Visibility, Handle<Image>, Vec3) {
        let mut query = world.query::<(&SquareSprite, &Sprite, &Transform, &Visibility)>();
        query
            .iter(world)
            .find(|(cell, ..)| cell.square == square)
            .map(|(_, sprite, transform, visibility)| {
                (*visibility, sprite.image.clone(), transform.translation)
            })
            .expect("square sprite")
    }

    fn dragged_sprite(world: &mut World) -> (Visibility, Handle<Image>, Vec3) {
        let mut query =
            world.query_filtered::<(&Sprite, &Transform, &Visibility), With<DraggedSprite>>();
        let (sprite, transform, visibility) = query.single(world).expect("drag sprite");
        (*visibility, sprite.image.clone(), transform.translation)
    }

    fn visible_squares(world: &mut World) -> usize {
        let mut query = world.query::<(&SquareSprite, &Visibility)>();
        query
            .iter(world)
            .filter(|(_, visibility)| **visibility == Visibility::Visible)
            .count()
    }

    /// Lift the piece on `square` the way a mouse press would
    fn lifted(square: Square) -> (ChessBoard, DragState) {
        let layout = BoardLayout::default();
        let mut board = ChessBoard::standard();
        let mut drag = DragState::default();
        let pos = layout.square_top_left(square) + Vec2::splat(layout.tile_size / 2.0);
        drag.press(&mut board, &layout, pos).expect("piece lifted");
        (board, drag)
    }

    #[test]
    fn test_piece_translation_in_world_space() {
        let layout = BoardLayout::default();
        let window = Vec2::new(1366.0, 768.0);
        let square = Square::new(0, 0).expect("a8");
        let size = Vec2::splat(62.0);

        // top-left (359, 77), centre (390, 108) in window pixels
        let translation = piece_translation(&layout, square, size, window);
        assert_eq!(translation, Vec3::new(390.0 - 683.0, 384.0 - 108.0, PIECE_Z));
    }

    #[test]
    fn test_dragged_sprite_is_above_pieces() {
        let translation = dragged_translation(Vec2::ZERO, Vec2::splat(69.0), Vec2::splat(100.0));
        assert!(translation.z > PIECE_Z);
        assert_eq!(translation.truncate(), Vec2::new(-15.5, 15.5));
    }

    #[test]
    fn test_resting_pieces_drawn_with_their_textures() {
        let mut world = render_world(
            TextureStatus::Ready,
            true,
            ChessBoard::standard(),
            DragState::default(),
        );
        world.run_system_once(sync_piece_sprites).expect("system runs");

        assert_eq!(visible_squares(&mut world), 32);

        let pawn = world
            .resource::<BoardTextures>()
            .piece(Piece::white(PieceKind::Pawn))
            .clone();
        let queen = world
            .resource::<BoardTextures>()
            .piece(Piece::black(PieceKind::Queen))
            .clone();
        assert_ne!(pawn, queen);

        let (visibility, image, _) = square_sprite(&mut world, sq(6, 4));
        assert_eq!(visibility, Visibility::Visible);
        assert_eq!(image, pawn);

        let (visibility, image, _) = square_sprite(&mut world, sq(0, 3));
        assert_eq!(visibility, Visibility::Visible);
        assert_eq!(image, queen);

        let (visibility, ..) = square_sprite(&mut world, sq(4, 4));
        assert_eq!(visibility, Visibility::Hidden);
    }

    #[test]
    fn test_resting_pieces_hidden_when_board_failed() {
        let mut world = render_world(
            TextureStatus::Failed,
            true,
            ChessBoard::standard(),
            DragState::default(),
        );
        world.run_system_once(sync_piece_sprites).expect("system runs");
        assert_eq!(visible_squares(&mut world), 0);
    }

    #[test]
    fn test_resting_pieces_hidden_while_loading() {
        let mut world = render_world(
            TextureStatus::Loading,
            true,
            ChessBoard::standard(),
            DragState::default(),
        );
        world.run_system_once(sync_piece_sprites).expect("system runs");
        assert_eq!(visible_squares(&mut world), 0);
    }

    #[test]
    fn test_resting_pieces_hidden_off_board_screen() {
        let mut world = render_world(
            TextureStatus::Ready,
            false,
            ChessBoard::standard(),
            DragState::default(),
        );
        world.run_system_once(sync_piece_sprites).expect("system runs");
        assert_eq!(visible_squares(&mut world), 0);
    }

    #[test]
    fn test_pieces_hide_again_when_leaving_board() {
        let mut world = render_world(
            TextureStatus::Ready,
            true,
            ChessBoard::standard(),
            DragState::default(),
        );
        world.run_system_once(sync_piece_sprites).expect("system runs");
        assert_eq!(visible_squares(&mut world), 32);

        world.remove_resource::<State<OnBoard>>();
        world.run_system_once(sync_piece_sprites).expect("system runs");
        assert_eq!(visible_squares(&mut world), 0);
    }

    #[test]
    fn test_dragged_piece_drawn_when_board_failed() {
        let (board, drag) = lifted(sq(7, 6));
        let mut world = render_world(TextureStatus::Failed, true, board, drag);
        world.run_system_once(sync_piece_sprites).expect("system runs");
        world.run_system_once(sync_dragged_sprite).expect("system runs");

        let knight = world
            .resource::<BoardTextures>()
            .piece(Piece::white(PieceKind::Knight))
            .clone();
        let (visibility, image, translation) = dragged_sprite(&mut world);
        assert_eq!(visibility, Visibility::Visible);
        assert_eq!(image, knight);
        assert!(translation.z > PIECE_Z);
        assert_eq!(visible_squares(&mut world), 0);
    }

    #[test]
    fn test_dragged_piece_above_resting_pieces() {
        let (board, drag) = lifted(sq(6, 4));
        let mut world = render_world(TextureStatus::Ready, true, board, drag);
        world.run_system_once(sync_piece_sprites).expect("system runs");
        world.run_system_once(sync_dragged_sprite).expect("system runs");

        // The lifted pawn's square is empty while it is in the air
        let (origin_visibility, ..) = square_sprite(&mut world, sq(6, 4));
        assert_eq!(origin_visibility, Visibility::Hidden);
        assert_eq!(visible_squares(&mut world), 31);

        let (_, _, resting) = square_sprite(&mut world, sq(6, 3));
        let (visibility, _, dragged) = dragged_sprite(&mut world);
        assert_eq!(visibility, Visibility::Visible);
        assert!(dragged.z > resting.z);
    }

    #[test]
    fn test_dragged_sprite_hidden_without_drag() {
        let mut world = render_world(
            TextureStatus::Ready,
            true,
            ChessBoard::standard(),
            DragState::default(),
        );
        world.run_system_once(sync_dragged_sprite).expect("system runs");
        let (visibility, ..) = dragged_sprite(&mut world);
        assert_eq!(visibility, Visibility::Hidden);
    }
}
