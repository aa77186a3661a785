use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use daycycle::plugins::core::CorePlugin;
use daycycle::plugins::day_cycle::DayCyclePlugin;
use daycycle::plugins::debug_ui::DebugOverlayPlugin;
use daycycle::plugins::diagnostics::DiagnosticsPlugin;
use daycycle::plugins::input::InputPlugin;
use daycycle::resources::{CliArgs, DayCycleConfig, DiagnosticLog};

fn main() -> AppExit {
    let cli = CliArgs::parse();

    // Logging first so config warnings reach the console.
    let mut app = App::new();
    app.add_plugins(LogPlugin {
        level: if cli.debug { Level::DEBUG } else { Level::INFO },
        ..default()
    });

    let config = DayCycleConfig::load(&cli);
    let log = match DiagnosticLog::from_config(&config) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("daycycle: {e}");
            return AppExit::error();
        }
    };

    app.add_plugins(
        DefaultPlugins
            .build()
            .disable::<LogPlugin>()
            .set(WindowPlugin {
                primary_window: Some(config.window.to_window()),
                ..default()
            }),
    );

    let debug = config.debug;
    app.insert_resource(config)
        .insert_resource(log)
        .add_plugins(InputPlugin)
        .add_plugins(CorePlugin)
        .add_plugins(DayCyclePlugin)
        .add_plugins(DiagnosticsPlugin);

    if debug {
        app.add_plugins(EguiPlugin).add_plugins(DebugOverlayPlugin);
    }

    app.run()
}
