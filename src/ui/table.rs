use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::analysis::advisory::servings_per_week;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Sample table (bottom panel)
// ---------------------------------------------------------------------------

/// List the samples currently feeding the scatter plot.
pub fn sample_table(ui: &mut Ui, state: &AppState) {
    let samples = &state.visible_samples;
    if samples.is_empty() {
        ui.label("No samples in view.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::initial(220.0).at_least(120.0))
        .columns(Column::auto().at_least(70.0), 4)
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in ["Species", "Length (in)", "Mercury (ppm)", "Latitude", "Longitude", "Servings/week"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, samples.len(), |mut row| {
                let s = &samples[row.index()];
                row.col(|ui| {
                    let color = state.color_map.color_for(&s.species);
                    ui.label(RichText::new(&s.species).color(color));
                });
                row.col(|ui| {
                    ui.label(format!("{:.1}", s.length_inches()));
                });
                row.col(|ui| {
                    ui.label(format!("{:.3}", s.mercury_ppm));
                });
                row.col(|ui| {
                    ui.label(format!("{:.4}", s.latitude));
                });
                row.col(|ui| {
                    ui.label(format!("{:.4}", s.longitude));
                });
                row.col(|ui| {
                    ui.label(servings_per_week(s.mercury_ppm, state.population).to_string());
                });
            });
        });
}
