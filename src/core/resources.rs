//! Application settings
//!
//! [`GameSettings`] is loaded once before the app is built (window size, tick
//! rate and log level are needed up front) and then inserted as a resource.

use super::error::{CoreError, CoreResult};
use super::window_config::WindowConfig;
use crate::board::BoardLayout;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Default fixed tick rate of the update/render loop
pub const DEFAULT_TICK_RATE_HZ: f64 = 30.0;

/// User-tunable configuration, persisted as JSON
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Resource)]
#[serde(default)]
pub struct GameSettings {
    /// Primary window configuration
    pub window: WindowConfig,

    /// Fixed update rate in ticks per second
    pub tick_rate_hz: f64,

    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`)
    pub log_level: String,

    /// Directory the asset server reads images from
    pub asset_root: String,

    /// Resize the window to the board image once it has loaded
    pub resize_to_board: bool,

    /// Board placement inside the window
    pub layout: BoardLayout,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
            log_level: "info".to_string(),
            asset_root: "assets".to_string(),
            resize_to_board: true,
            layout: BoardLayout::default(),
        }
    }
}

impl GameSettings {
    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> CoreResult<()> {
        if !self.tick_rate_hz.is_finite() || self.tick_rate_hz <= 0.0 {
            return Err(CoreError::InvalidSetting {
                field: "tick_rate_hz",
                message: format!("must be a positive number, got {}", self.tick_rate_hz),
            });
        }
        if !self.layout.tile_size.is_finite() || self.layout.tile_size <= 0.0 {
            return Err(CoreError::InvalidSetting {
                field: "layout.tile_size",
                message: format!("must be a positive number, got {}", self.layout.tile_size),
            });
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(CoreError::InvalidSetting {
                field: "window",
                message: format!(
                    "window size must be non-zero, got {}x{}",
                    self.window.width, self.window.height
                ),
            });
        }
        self.parsed_log_level()?;
        Ok(())
    }

    pub fn parsed_log_level(&self) -> CoreResult<bevy::log::Level> {
        self.log_level
            .parse::<bevy::log::Level>()
            .map_err(|e| CoreError::InvalidSetting {
                field: "log_level",
                message: format!("{e} ({:?})", self.log_level),
            })
    }

    /// Interval between fixed ticks
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.tick_rate_hz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = GameSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.tick_rate_hz, 30.0);
        assert_eq!(settings.layout, BoardLayout::default());
    }

    #[test]
    fn test_tick_interval() {
        let settings = GameSettings {
            tick_rate_hz: 50.0,
            ..default()
        };
        assert_eq!(settings.tick_interval(), std::time::Duration::from_millis(20));
    }

    #[test]
    fn test_rejects_non_positive_tick_rate() {
        let settings = GameSettings {
            tick_rate_hz: 0.0,
            ..default()
        };
        assert!(matches!(
            settings.validate(),
            Err(CoreError::InvalidSetting { field: "tick_rate_hz", .. })
        ));
    }

    #[test]
    fn test_rejects_zero_tile() {
        let mut settings = GameSettings::default();
        settings.layout.tile_size = 0.0;
        assert!(matches!(
            settings.validate(),
            Err(CoreError::InvalidSetting { field: "layout.tile_size", .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let settings = GameSettings {
            log_level: "loud".to_string(),
            ..default()
        };
        assert!(matches!(
            settings.validate(),
            Err(CoreError::InvalidSetting { field: "log_level", .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: GameSettings =
            serde_json::from_str(r#"{ "tick_rate_hz": 60.0 }"#).expect("valid json");
        assert_eq!(settings.tick_rate_hz, 60.0);
        assert_eq!(settings.asset_root, "assets");
        assert_eq!(settings.window, WindowConfig::default());
    }
}
