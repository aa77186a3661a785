//! Day cycle plugin - the per-frame loop around the `DayCycle` state machine.
//!
//! Registers the cycle resources, the input/transition events, and the
//! ordered frame systems. Rendering only touches `ClearColor` and the
//! `SegmentLabel` text, so the plugin also runs headless under `MinimalPlugins`.

use bevy::prelude::*;

use crate::events::{AdvancePressed, SegmentAdvanced};
use crate::resources::{AdvanceInput, DayCycle, DayCycleConfig, EdgeDetector};
use crate::systems::{
    advance_day_cycle, apply_initial_background, detect_advance_edge, refresh_segment_display,
    sample_advance_key, spawn_segment_label,
};

/// Stages of one frame, run in declaration order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCycleSet {
    /// Sample the key and detect the advance edge.
    Input,
    /// Apply at most one transition.
    Advance,
    /// Redraw label and background.
    Display,
}

pub struct DayCyclePlugin;

impl Plugin for DayCyclePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DayCycleConfig>()
            .init_resource::<DayCycle>()
            .init_resource::<AdvanceInput>()
            .init_resource::<EdgeDetector>()
            .add_event::<AdvancePressed>()
            .add_event::<SegmentAdvanced>()
            .configure_sets(
                Update,
                (DayCycleSet::Input, DayCycleSet::Advance, DayCycleSet::Display).chain(),
            )
            .add_systems(Startup, (spawn_segment_label, apply_initial_background))
            .add_systems(
                Update,
                (
                    (sample_advance_key, detect_advance_edge)
                        .chain()
                        .in_set(DayCycleSet::Input),
                    advance_day_cycle.in_set(DayCycleSet::Advance),
                    refresh_segment_display.in_set(DayCycleSet::Display),
                ),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::SegmentLabel;
    use crate::plugins::input::DayAction;
    use crate::resources::{DaySegment, Rgb};
    use leafwing_input_manager::prelude::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(DayCyclePlugin);
        // Run startup systems
        app.update();
        app
    }

    /// Runs one frame with the advance key held (`true`) or released.
    fn frame(app: &mut App, pressed: bool) {
        app.world_mut().resource_mut::<AdvanceInput>().pressed = pressed;
        app.update();
    }

    /// A full press: one frame down, one frame up.
    fn press(app: &mut App) {
        frame(app, true);
        frame(app, false);
    }

    fn current(app: &App) -> DaySegment {
        app.world().resource::<DayCycle>().current()
    }

    fn label(app: &mut App) -> String {
        let mut query = app
            .world_mut()
            .query_filtered::<&Text2d, With<SegmentLabel>>();
        query.single(app.world()).0.clone()
    }

    fn background(app: &App) -> Color {
        app.world().resource::<ClearColor>().0
    }

    #[test]
    fn test_startup_shows_banner_on_dawn() {
        let mut app = test_app();
        assert_eq!(current(&app), DaySegment::Dawn);
        assert_eq!(label(&mut app), "Day Cycle\nPress Enter");
        assert_eq!(background(&app), Color::from(Rgb::new(25, 26, 21)));
    }

    #[test]
    fn test_three_presses_reach_afternoon() {
        let mut app = test_app();
        for _ in 0..3 {
            press(&mut app);
        }
        assert_eq!(current(&app), DaySegment::Afternoon);
        assert_eq!(label(&mut app), "Afternoon");
        assert_eq!(background(&app), Color::from(DaySegment::Afternoon.color()));
    }

    #[test]
    fn test_midnight_wraps_to_dawn() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(DayCycle::starting_at(DaySegment::Midnight));
        app.add_plugins(DayCyclePlugin);
        app.update();

        press(&mut app);
        assert_eq!(current(&app), DaySegment::Dawn);
        assert_eq!(label(&mut app), "Dawn");
    }

    #[test]
    fn test_held_key_advances_once() {
        let mut app = test_app();
        for pressed in [false, true, true, false] {
            frame(&mut app, pressed);
        }
        assert_eq!(current(&app), DaySegment::Morning);
        assert_eq!(app.world().resource::<DayCycle>().transitions(), 1);
    }

    #[test]
    fn test_action_state_drives_the_cycle() {
        let mut app = test_app();
        let entity = app
            .world_mut()
            .spawn(ActionState::<DayAction>::default())
            .id();

        for pressed in [false, true, true, false, true] {
            let mut action_state = app
                .world_mut()
                .get_mut::<ActionState<DayAction>>(entity)
                .unwrap();
            if pressed {
                action_state.press(&DayAction::Advance);
            } else {
                action_state.release(&DayAction::Advance);
            }
            app.update();
            assert_eq!(app.world().resource::<AdvanceInput>().pressed, pressed);
        }

        assert_eq!(current(&app), DaySegment::Noon);
        assert_eq!(app.world().resource::<DayCycle>().transitions(), 2);
        assert_eq!(label(&mut app), "Noon");
    }

    #[test]
    fn test_idle_frames_change_nothing() {
        let mut app = test_app();
        let initial = background(&app);
        for _ in 0..30 {
            frame(&mut app, false);
            assert_eq!(background(&app), initial);
        }
        assert_eq!(current(&app), DaySegment::Dawn);
        assert_eq!(label(&mut app), "Day Cycle\nPress Enter");
    }

    #[test]
    fn test_full_day_returns_to_dawn() {
        let mut app = test_app();
        let mut seen = Vec::new();
        for _ in 0..8 {
            press(&mut app);
            seen.push(current(&app));
        }
        let mut expected = DaySegment::ALL[1..].to_vec();
        expected.push(DaySegment::Dawn);
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_configured_labels_are_rendered() {
        let mut config = DayCycleConfig::default();
        config.locale.segments.morning = "Matin".to_string();
        config.palette.morning = Rgb::new(10, 20, 30);

        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(config);
        app.add_plugins(DayCyclePlugin);
        app.update();

        press(&mut app);
        assert_eq!(label(&mut app), "Matin");
        assert_eq!(background(&app), Color::srgb_u8(10, 20, 30));
    }
}
