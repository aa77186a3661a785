use bevy::prelude::*;

use crate::plugins::day_cycle::DayCycleSet;
use crate::resources::DiagnosticLog;
use crate::systems::{flush_diagnostic_log, record_run_start, record_transitions};

/// Writes run start and every transition to the diagnostic log, flushing
/// once per frame. Without an open log (no `-d`) the records are dropped.
pub struct DiagnosticsPlugin;

impl Plugin for DiagnosticsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DiagnosticLog>()
            .add_systems(Startup, record_run_start)
            .add_systems(
                Update,
                record_transitions
                    .after(DayCycleSet::Advance)
                    .before(DayCycleSet::Display),
            )
            .add_systems(Last, flush_diagnostic_log);
    }
}
