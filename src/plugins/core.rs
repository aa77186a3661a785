use bevy::prelude::*;
use crate::plugins::input::get_default_input_map;
use leafwing_input_manager::prelude::*;

/// Camera carrying the advance key binding. The window itself comes from
/// `WindowSettings::to_window` in `main`.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera);
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_xyz(0.0, 0.0, 100.0),
        InputManagerBundle::with_map(get_default_input_map()),
    ));
}
