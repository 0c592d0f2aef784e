use anyhow::Context;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use clap::Parser;

use dragboard::board::BoardPlugin;
use dragboard::cli::Args;
use dragboard::core::settings_persistence::{
    load_settings_or_default, save_settings_to, settings_path,
};
use dragboard::core::CorePlugin;
use dragboard::input::BoardInputPlugin;
use dragboard::rendering::RenderingPlugin;
use dragboard::states::ScreensPlugin;

const LOG_FILTER: &str = "wgpu=warn,naga=error,bevy_render=warn,bevy_ecs=info";

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let path = args.config.clone().unwrap_or_else(settings_path);
    let (mut settings, origin) = load_settings_or_default(&path);
    args.apply_overrides(&mut settings);
    settings
        .validate()
        .context("invalid settings after applying command line flags")?;

    if args.write_config {
        save_settings_to(&path, &settings)
            .with_context(|| format!("failed to write settings to {}", path.display()))?;
        println!("Wrote settings to {}", path.display());
        return Ok(());
    }

    let level = settings.parsed_log_level()?;

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(settings.window.to_window()),
                    ..default()
                })
                .set(AssetPlugin {
                    file_path: settings.asset_root.clone(),
                    ..default()
                })
                .set(LogPlugin {
                    level,
                    filter: LOG_FILTER.to_string(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin::default())
        .insert_resource(settings.layout)
        .insert_resource(settings)
        .insert_resource(origin)
        .add_plugins((
            CorePlugin::default(),
            BoardPlugin,
            BoardInputPlugin::default(),
            RenderingPlugin,
            ScreensPlugin,
        ))
        .run();

    Ok(())
}
