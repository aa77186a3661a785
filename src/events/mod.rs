use bevy::prelude::*;

use crate::resources::DaySegment;

/// Emitted when the advance key goes from released to pressed.
/// At most one per frame.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvancePressed;

/// Emitted after the day cycle moves to its next segment.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentAdvanced {
    pub from: DaySegment,
    pub to: DaySegment,
}
