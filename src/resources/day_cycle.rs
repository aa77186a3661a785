use bevy::prelude::*;

use super::day_segment::{DaySegment, TransitionTable};

/// Resource holding the live day segment.
///
/// The only mutable state of the cycle. It is written by the
/// `advance_day_cycle` system when an advance edge is observed and read by
/// the display systems later in the same frame.
#[derive(Resource, Debug, Clone)]
pub struct DayCycle {
    current: DaySegment,
    table: TransitionTable,
    /// Number of transitions since startup.
    transitions: u64,
}

impl Default for DayCycle {
    fn default() -> Self {
        Self::starting_at(DaySegment::Dawn)
    }
}

impl DayCycle {
    /// Creates a cycle on the canonical table, positioned at `segment`.
    pub fn starting_at(segment: DaySegment) -> Self {
        Self::with_table(segment, TransitionTable::canonical())
    }

    pub fn with_table(segment: DaySegment, table: TransitionTable) -> Self {
        debug_assert!(
            table.is_single_cycle(),
            "transition table must be a single cycle over all eight segments"
        );
        Self {
            current: segment,
            table,
            transitions: 0,
        }
    }

    pub fn current(&self) -> DaySegment {
        self.current
    }

    /// Moves to the successor of the current segment and returns it.
    pub fn advance(&mut self) -> DaySegment {
        self.current = self.table.successor(self.current);
        self.transitions += 1;
        self.current
    }

    pub fn transitions(&self) -> u64 {
        self.transitions
    }
}
