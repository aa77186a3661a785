use bevy::prelude::*;

/// Marks the centered text that shows the banner at startup and the
/// current segment's label after each transition.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SegmentLabel;

/// Font size of the segment label, in logical pixels.
pub const LABEL_FONT_SIZE: f32 = 20.0;
