//! Screen state machine
//!
//! ```text
//! [Menu] ──Enter──▶ [Playing] ──(explicit)──▶ [GameOver]
//!    ▲                  │ ▲                        │
//!    └──────Escape──────┘ └───────────R────────────┘
//! ```
//!
//! There is no game-ending logic: `GameOver` is only reached through an
//! explicit `NextState::set(GameState::GameOver)`.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

/// Primary screen state
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, States, Reflect)]
pub enum GameState {
    /// Title screen, waiting for Enter
    #[default]
    Menu,

    /// Board visible, pieces can be dragged
    Playing,

    /// Translucent overlay over the board, waiting for R
    GameOver,
}

/// Computed state active while the board is on screen
///
/// The board stays visible underneath the game-over overlay.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct OnBoard;

impl ComputedStates for OnBoard {
    type SourceStates = GameState;

    fn compute(sources: GameState) -> Option<Self> {
        match sources {
            GameState::Playing | GameState::GameOver => Some(Self),
            GameState::Menu => None,
        }
    }
}

/// Timer resource for the periodic state log
#[derive(Resource, Deref, DerefMut)]
pub struct StateLoggerTimer(pub Timer);

impl Default for StateLoggerTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(15.0, TimerMode::Repeating))
    }
}

/// Logs the current screen every 15 seconds
pub fn log_game_state_system(
    state: Res<State<GameState>>,
    mut timer: ResMut<StateLoggerTimer>,
    time: Res<Time>,
) {
    if timer.tick(time.delta()).just_finished() {
        let current = *state.get();
        let mut state_info = format!("State: {:?}", current);
        if OnBoard::compute(current).is_some() {
            state_info.push_str(" | OnBoard");
        }
        info!("[STATE] {}", state_info);
    }
}

/// Whether the screen flow allows moving from `from` to `to`
pub fn is_valid_state_transition(from: GameState, to: GameState) -> bool {
    match (from, to) {
        (GameState::Menu, GameState::Playing) => true,
        (GameState::Playing, GameState::Menu) => true,
        (GameState::Playing, GameState::GameOver) => true,
        // Restart
        (GameState::GameOver, GameState::Playing) => true,
        (from, to) if from == to => true,
        _ => false,
    }
}

/// Logs every transition, flagging ones the screen flow does not allow
pub fn validate_and_log_state_transitions(
    mut transition_events: MessageReader<StateTransitionEvent<GameState>>,
) {
    for event in transition_events.read() {
        match (event.exited, event.entered) {
            (Some(exited), Some(entered)) => {
                if is_valid_state_transition(exited, entered) {
                    info!("[TRANSITION] {:?} -> {:?}", exited, entered);
                } else {
                    error!(
                        "[TRANSITION] INVALID: {:?} -> {:?} (state may be inconsistent)",
                        exited, entered
                    );
                }
            }
            (None, Some(entered)) => debug!("[TRANSITION] Enter: {:?}", entered),
            (Some(exited), None) => debug!("[TRANSITION] Exit: {:?}", exited),
            (None, None) => {}
        }
    }
}
