//! Debug overlay, added by `main` only with `-d`.
//!
//! A corner card listing the whole day with the live segment marked, its
//! palette swatch, the transition count, and smoothed FPS. Read-only: the
//! advance key stays the only way to move the cycle.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::resources::{DayCycle, DayCycleConfig, DaySegment, Rgb};

pub struct DebugOverlayPlugin;

impl Plugin for DebugOverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(FrameTimeDiagnosticsPlugin::default())
            .add_systems(Update, draw_cycle_overlay);
    }
}

/// One line of the overlay's segment list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayRow {
    pub segment: DaySegment,
    pub label: String,
    pub swatch: Rgb,
    pub is_current: bool,
}

/// Rows for every segment in cycle order.
pub fn overlay_rows(cycle: &DayCycle, config: &DayCycleConfig) -> Vec<OverlayRow> {
    DaySegment::ALL
        .into_iter()
        .map(|segment| OverlayRow {
            segment,
            label: config.label_of(segment).to_string(),
            swatch: config.color_of(segment),
            is_current: segment == cycle.current(),
        })
        .collect()
}

fn draw_cycle_overlay(
    mut contexts: EguiContexts,
    cycle: Res<DayCycle>,
    config: Res<DayCycleConfig>,
    diagnostics: Res<DiagnosticsStore>,
) {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|diag| diag.smoothed());

    egui::Area::new(egui::Id::new("day_cycle_overlay"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-6.0, 6.0))
        .show(contexts.ctx_mut(), |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                egui::Grid::new("day_cycle_segments")
                    .num_columns(2)
                    .show(ui, |ui| {
                        for row in overlay_rows(&cycle, &config) {
                            let swatch =
                                egui::Color32::from_rgb(row.swatch.r, row.swatch.g, row.swatch.b);
                            let (rect, _) = ui
                                .allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                            ui.painter().rect_filled(rect, 2.0, swatch);

                            let text = egui::RichText::new(row.label).small();
                            ui.label(if row.is_current { text.strong() } else { text.weak() });
                            ui.end_row();
                        }
                    });

                ui.separator();
                ui.small(format!("transitions {}", cycle.transitions()));
                if let Some(fps) = fps {
                    ui.small(format!("{:.0} fps", fps));
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_cycle_order() {
        let rows = overlay_rows(&DayCycle::default(), &DayCycleConfig::default());
        let segments: Vec<_> = rows.iter().map(|row| row.segment).collect();
        assert_eq!(segments, DaySegment::ALL.to_vec());
        assert_eq!(rows[3].label, "Afternoon");
        assert_eq!(rows[7].swatch, Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_only_live_segment_marked() {
        let mut cycle = DayCycle::default();
        cycle.advance();
        cycle.advance();

        let rows = overlay_rows(&cycle, &DayCycleConfig::default());
        let marked: Vec<_> = rows
            .iter()
            .filter(|row| row.is_current)
            .map(|row| row.segment)
            .collect();
        assert_eq!(marked, vec![DaySegment::Noon]);
    }
}
