use bevy::prelude::*;

use crate::events::SegmentAdvanced;
use crate::resources::DiagnosticLog;

pub fn record_run_start(mut log: ResMut<DiagnosticLog>) {
    log.record("run");
}

/// Writes one line per transition, e.g. `dawn -> morning`.
pub fn record_transitions(
    mut advanced: EventReader<SegmentAdvanced>,
    mut log: ResMut<DiagnosticLog>,
) {
    for event in advanced.read() {
        log.record(format_args!("{} -> {}", event.from, event.to));
    }
}

pub fn flush_diagnostic_log(mut log: ResMut<DiagnosticLog>) {
    log.flush();
}
