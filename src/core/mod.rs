//! Core module - screen state machine and application infrastructure
//!
//! # State Architecture
//!
//! - `GameState` - Menu → Playing ⇄ GameOver, with Escape back to Menu
//! - `OnBoard` - computed state active while the board is on screen
//!
//! # Resources
//!
//! - [`GameSettings`] - persisted configuration (window, tick rate, layout)
//! - [`WindowConfig`] - window settings, part of [`GameSettings`]
//! - [`SettingsOrigin`] - where the settings were loaded from
//!
//! # Core Plugin
//!
//! [`CorePlugin`] registers the states, the fixed tick rate, transition
//! validation and the crash-report panic hook.

pub mod error;
pub mod plugin;
pub mod resources;
pub mod settings_persistence;
pub mod states;
pub mod window_config;

pub use error::{CoreError, CoreResult};
pub use plugin::CorePlugin;
pub use resources::*;
pub use settings_persistence::SettingsOrigin;
pub use states::*;
pub use window_config::WindowConfig;
