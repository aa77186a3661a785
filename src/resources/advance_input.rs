use bevy::prelude::*;

/// Level of the advance key as sampled this frame.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceInput {
    pub pressed: bool,
}

/// Turns per-frame key levels into release-to-press edges.
///
/// Holding the key yields one edge; each new press after a release yields
/// another.
#[derive(Resource, Debug, Default, Clone)]
pub struct EdgeDetector {
    was_pressed: bool,
}

impl EdgeDetector {
    /// Feeds one frame's key level and reports whether it is a rising edge.
    pub fn sample(&mut self, pressed: bool) -> bool {
        let edge = pressed && !self.was_pressed;
        self.was_pressed = pressed;
        edge
    }
}
