//! Command line arguments
//!
//! Flags override values read from the settings file; anything left unset
//! keeps the file (or default) value.

use crate::core::GameSettings;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default, PartialEq)]
#[command(name = "dragboard", version, about = "Drag chess pieces around a board")]
pub struct Args {
    /// Settings file to read instead of the platform config location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Fixed update rate in ticks per second
    #[arg(long, value_name = "HZ")]
    pub tick_rate: Option<f64>,

    /// Minimum log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Directory holding the `textures/` folder
    #[arg(long, value_name = "DIR")]
    pub assets: Option<String>,

    /// Write the effective settings to the settings file and exit
    #[arg(long)]
    pub write_config: bool,
}

impl Args {
    /// Overlay the flags that were given onto `settings`.
    pub fn apply_overrides(&self, settings: &mut GameSettings) {
        if let Some(hz) = self.tick_rate {
            settings.tick_rate_hz = hz;
        }
        if let Some(level) = &self.log_level {
            settings.log_level = level.clone();
        }
        if let Some(assets) = &self.assets {
            settings.asset_root = assets.clone();
        }
    }
}
