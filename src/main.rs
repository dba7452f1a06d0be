mod demo;

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use movement_tricks::settings::SettingsSource;
use movement_tricks::{MovementTricksPlugin, TickRate};

fn main() {
    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
            Duration::from_secs_f64(1.0 / 60.0),
        )))
        .add_plugins(LogPlugin {
            filter: "movement_tricks=debug".to_string(),
            ..default()
        })
        .insert_resource(SettingsSource::new("assets/data/trick_settings.ron"))
        .add_plugins(MovementTricksPlugin {
            tick_rate: TickRate { hz: 20.0 },
        })
        .add_plugins(demo::DemoPlugin)
        .run();
}
