//! Core plugin
//!
//! Provides fundamental application setup:
//! - Screen state machine and its computed states
//! - Transition validation and periodic state logging
//! - Fixed tick rate from [`GameSettings`]
//! - Panic hook writing crash reports that include the current screen
//!
//! Add this plugin before the board, input and rendering plugins.

use bevy::prelude::*;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::panic;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use super::{
    settings_persistence::log_settings_origin,
    states::{log_game_state_system, validate_and_log_state_transitions},
    GameSettings, GameState, OnBoard, StateLoggerTimer,
};

/// Last known screen, readable from the panic hook outside the ECS
static PANIC_STATE_TRACKER: OnceLock<Mutex<Option<GameState>>> = OnceLock::new();

/// Core plugin for the application
///
/// `install_panic_hook` is off in headless tests so they keep the default
/// panic output.
pub struct CorePlugin {
    pub install_panic_hook: bool,
}

impl Default for CorePlugin {
    fn default() -> Self {
        Self {
            install_panic_hook: true,
        }
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<GameSettings>() {
            app.init_resource::<GameSettings>();
        }
        let settings = app.world().resource::<GameSettings>();
        let (tick_rate, tick_interval) = (settings.tick_rate_hz, settings.tick_interval());
        info!(
            "[CORE] Fixed tick at {} Hz ({:?} per tick)",
            tick_rate, tick_interval
        );

        app.init_state::<GameState>()
            .add_computed_state::<OnBoard>()
            .init_resource::<StateLoggerTimer>()
            .insert_resource(Time::<Fixed>::from_duration(tick_interval))
            .register_type::<GameSettings>()
            .register_type::<GameState>();

        app.add_systems(Startup, log_settings_origin);
        app.add_systems(
            Update,
            (
                log_game_state_system,
                validate_and_log_state_transitions,
                update_panic_state_tracker,
            ),
        );
    }

    fn finish(&self, _app: &mut App) {
        if self.install_panic_hook {
            setup_panic_hook();
        }
    }
}

/// Install a panic hook that prints and stores a crash report
///
/// The report holds the panic message, its location, the current screen and a
/// backtrace. It is written to `logs/crash_<timestamp>.log`.
fn setup_panic_hook() {
    PANIC_STATE_TRACKER.get_or_init(|| Mutex::new(None));

    panic::set_hook(Box::new(|panic_info| {
        let panic_msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "<unknown>".to_string()
        };

        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "<unknown>".to_string());

        let game_state = PANIC_STATE_TRACKER
            .get()
            .and_then(|tracker| tracker.lock().ok().and_then(|state| *state))
            .map(|state| format!("{:?}", state))
            .unwrap_or_else(|| "<unknown>".to_string());

        let backtrace = std::backtrace::Backtrace::capture();

        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let panic_report = format!(
            "PANIC DETECTED [{}]\n\
            ============================================\n\
            Message: {}\n\
            Location: {}\n\
            GameState: {}\n\
            \n\
            Backtrace:\n\
            {}\n\
            ============================================\n",
            timestamp, panic_msg, location, game_state, backtrace
        );

        eprintln!("\n{}", panic_report);

        let logs_dir = Path::new("logs");
        if !logs_dir.exists() {
            let _ = fs::create_dir_all(logs_dir);
        }
        let log_file = logs_dir.join(format!("crash_{}.log", timestamp));
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&log_file) {
            let _ = writeln!(file, "{}", panic_report);
            eprintln!("[PANIC] Crash log written to: {:?}", log_file);
        }
    }));
}

/// Mirror the current screen into the panic tracker
fn update_panic_state_tracker(game_state: Res<State<GameState>>) {
    if !game_state.is_changed() {
        return;
    }
    if let Some(tracker) = PANIC_STATE_TRACKER.get() {
        if let Ok(mut state) = tracker.lock() {
            *state = Some(*game_state.get());
        }
    }
}
