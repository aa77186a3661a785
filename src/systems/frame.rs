//! Per-frame systems driving the day cycle.
//!
//! Run in order every frame: sample the key level, detect the rising edge,
//! advance the cycle, redraw the label and background.

use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

use crate::components::{SegmentLabel, LABEL_FONT_SIZE};
use crate::events::{AdvancePressed, SegmentAdvanced};
use crate::plugins::input::DayAction;
use crate::resources::{AdvanceInput, DayCycle, DayCycleConfig, EdgeDetector};

/// Copies the advance key level from the input manager.
/// Leaves `AdvanceInput` alone when no action state exists.
pub fn sample_advance_key(
    query: Query<&ActionState<DayAction>>,
    mut input: ResMut<AdvanceInput>,
) {
    let Ok(action_state) = query.get_single() else {
        return;
    };
    input.pressed = action_state.pressed(&DayAction::Advance);
}

pub fn detect_advance_edge(
    input: Res<AdvanceInput>,
    mut detector: ResMut<EdgeDetector>,
    mut pressed: EventWriter<AdvancePressed>,
) {
    if detector.sample(input.pressed) {
        pressed.send(AdvancePressed);
    }
}

/// Advances the cycle exactly once when an edge fired this frame.
pub fn advance_day_cycle(
    mut pressed: EventReader<AdvancePressed>,
    mut cycle: ResMut<DayCycle>,
    mut advanced: EventWriter<SegmentAdvanced>,
) {
    if pressed.read().count() == 0 {
        return;
    }

    let from = cycle.current();
    let to = cycle.advance();
    debug!("Day segment: {} -> {}", from, to);
    advanced.send(SegmentAdvanced { from, to });
}

/// Rewrites the label and background after a transition.
pub fn refresh_segment_display(
    mut advanced: EventReader<SegmentAdvanced>,
    cycle: Res<DayCycle>,
    config: Res<DayCycleConfig>,
    mut clear_color: ResMut<ClearColor>,
    mut labels: Query<&mut Text2d, With<SegmentLabel>>,
) {
    if advanced.read().count() == 0 {
        return;
    }

    let segment = cycle.current();
    for mut text in &mut labels {
        text.0 = config.label_of(segment).to_string();
    }
    clear_color.0 = config.color_of(segment).into();
}

/// Spawns the centered banner text that later shows segment labels.
pub fn spawn_segment_label(mut commands: Commands, config: Res<DayCycleConfig>) {
    commands.spawn((
        Name::new("Segment Label"),
        SegmentLabel,
        Text2d::new(config.banner()),
        TextFont {
            font_size: LABEL_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        TextLayout::new_with_justify(JustifyText::Center),
    ));
}

/// Paints the starting segment's color once at startup.
pub fn apply_initial_background(
    mut commands: Commands,
    cycle: Res<DayCycle>,
    config: Res<DayCycleConfig>,
) {
    commands.insert_resource(ClearColor(config.color_of(cycle.current()).into()));
}
