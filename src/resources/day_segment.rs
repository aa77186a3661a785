//! The eight named segments of a day and the per-segment lookup tables.
//!
//! Every table is a struct with one field per segment, so a lookup is an
//! exhaustive `match` and can never miss.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Number of day segments.
pub const SEGMENT_COUNT: usize = 8;

/// One of the eight phases of a day, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DaySegment {
    #[default]
    Dawn,
    Morning,
    Noon,
    Afternoon,
    Dusk,
    Evening,
    Night,
    Midnight,
}

impl DaySegment {
    /// Every segment, starting at Dawn and following the canonical cycle.
    pub const ALL: [DaySegment; SEGMENT_COUNT] = [
        DaySegment::Dawn,
        DaySegment::Morning,
        DaySegment::Noon,
        DaySegment::Afternoon,
        DaySegment::Dusk,
        DaySegment::Evening,
        DaySegment::Night,
        DaySegment::Midnight,
    ];

    /// Returns the segment at `index` in cycle order, or `None` past Midnight.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this segment in [`DaySegment::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase locale key, also used in diagnostic log lines.
    pub fn key(self) -> &'static str {
        match self {
            DaySegment::Dawn => "dawn",
            DaySegment::Morning => "morning",
            DaySegment::Noon => "noon",
            DaySegment::Afternoon => "afternoon",
            DaySegment::Dusk => "dusk",
            DaySegment::Evening => "evening",
            DaySegment::Night => "night",
            DaySegment::Midnight => "midnight",
        }
    }

    /// Built-in display label.
    pub fn label(self) -> &'static str {
        match self {
            DaySegment::Dawn => "Dawn",
            DaySegment::Morning => "Morning",
            DaySegment::Noon => "Noon",
            DaySegment::Afternoon => "Afternoon",
            DaySegment::Dusk => "Dusk",
            DaySegment::Evening => "Evening",
            DaySegment::Night => "Night",
            DaySegment::Midnight => "Midnight",
        }
    }

    /// Built-in background color. Brightest in the afternoon, black at midnight.
    pub fn color(self) -> Rgb {
        match self {
            DaySegment::Dawn | DaySegment::Night => Rgb::new(25, 26, 21),
            DaySegment::Morning | DaySegment::Evening => Rgb::new(73, 61, 63),
            DaySegment::Noon | DaySegment::Dusk => Rgb::new(105, 94, 88),
            DaySegment::Afternoon => Rgb::new(143, 133, 124),
            DaySegment::Midnight => Rgb::new(0, 0, 0),
        }
    }
}

impl std::fmt::Display for DaySegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::srgb_u8(rgb.r, rgb.g, rgb.b)
    }
}

/// A value for every day segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentTable<T> {
    pub dawn: T,
    pub morning: T,
    pub noon: T,
    pub afternoon: T,
    pub dusk: T,
    pub evening: T,
    pub night: T,
    pub midnight: T,
}

impl<T> SegmentTable<T> {
    /// Builds a table by evaluating `f` once per segment.
    pub fn from_fn(mut f: impl FnMut(DaySegment) -> T) -> Self {
        Self {
            dawn: f(DaySegment::Dawn),
            morning: f(DaySegment::Morning),
            noon: f(DaySegment::Noon),
            afternoon: f(DaySegment::Afternoon),
            dusk: f(DaySegment::Dusk),
            evening: f(DaySegment::Evening),
            night: f(DaySegment::Night),
            midnight: f(DaySegment::Midnight),
        }
    }

    pub fn get(&self, segment: DaySegment) -> &T {
        match segment {
            DaySegment::Dawn => &self.dawn,
            DaySegment::Morning => &self.morning,
            DaySegment::Noon => &self.noon,
            DaySegment::Afternoon => &self.afternoon,
            DaySegment::Dusk => &self.dusk,
            DaySegment::Evening => &self.evening,
            DaySegment::Night => &self.night,
            DaySegment::Midnight => &self.midnight,
        }
    }
}

/// Successor of every segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable(SegmentTable<DaySegment>);

impl TransitionTable {
    /// Dawn, Morning, Noon, Afternoon, Dusk, Evening, Night, Midnight, then Dawn again.
    pub fn canonical() -> Self {
        Self(SegmentTable::from_fn(|segment| {
            DaySegment::from_index((segment.index() + 1) % SEGMENT_COUNT)
                .unwrap_or_default()
        }))
    }

    /// Wraps an arbitrary successor table. Use [`TransitionTable::is_single_cycle`]
    /// to check it before driving a [`DayCycle`](super::DayCycle) with it.
    pub fn from_table(table: SegmentTable<DaySegment>) -> Self {
        Self(table)
    }

    pub fn successor(&self, segment: DaySegment) -> DaySegment {
        *self.0.get(segment)
    }

    /// True when following successors from Dawn visits all eight segments
    /// exactly once before returning to Dawn.
    pub fn is_single_cycle(&self) -> bool {
        let mut seen = [false; SEGMENT_COUNT];
        let mut segment = DaySegment::Dawn;
        for _ in 0..SEGMENT_COUNT {
            if seen[segment.index()] {
                return false;
            }
            seen[segment.index()] = true;
            segment = self.successor(segment);
        }
        segment == DaySegment::Dawn
    }
}
