use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

#[derive(Actionlike, PartialEq, Eq, Clone, Copy, Hash, Debug, Reflect)]
pub enum DayAction {
    /// Move to the next segment of the day.
    Advance,
}

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(InputManagerPlugin::<DayAction>::default());
    }
}

pub fn get_default_input_map() -> InputMap<DayAction> {
    let mut input_map = InputMap::default();

    input_map.insert(DayAction::Advance, KeyCode::Enter);
    input_map.insert(DayAction::Advance, KeyCode::NumpadEnter);

    input_map
}

