use eframe::egui::{RichText, Ui, Vec2};
use egui_plot::{Plot, PlotBounds, PlotPoint, PlotPoints, Points};

use crate::data::model::{CALIFORNIA_BOUNDS, GeoBounds, Sample};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Sample location map
// ---------------------------------------------------------------------------

/// Convert the plot's visible window (x = longitude, y = latitude).
fn geo_bounds(plot: &PlotBounds) -> GeoBounds {
    let [west, south] = plot.min();
    let [east, north] = plot.max();
    GeoBounds::new(north, south, east, west)
}

/// Hover text for a map position. On a marker it also reports the sample's
/// length and mercury level.
fn hover_text(samples: &[Sample], name: &str, value: &PlotPoint) -> String {
    let location = format!("Location: {:.4}, {:.4}", value.y, value.x);
    if name.is_empty() {
        return location;
    }
    let marker = samples.iter().find(|s| {
        s.species == name
            && (s.longitude - value.x).abs() < 1e-9
            && (s.latitude - value.y).abs() < 1e-9
    });
    match marker {
        Some(s) => format!(
            "{name}\n{location}\nLength: {:.1} in\nMercury: {:.3} ppm",
            s.length_inches(),
            s.mercury_ppm
        ),
        None => format!("{name}\n{location}"),
    }
}

/// Render selected samples by location.
///
/// Once the user pans or zooms, the visible window becomes the bounds filter
/// for the scatter plot. "Reset view" clears it.
pub fn sample_map(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Sample Locations");
        if ui
            .add_enabled(state.bounds.is_some(), eframe::egui::Button::new("Reset view"))
            .clicked()
        {
            state.reset_map();
        }
    });

    if state.selected.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("Pick a species to see where it was sampled");
        });
        return;
    }

    // A fresh id after a reset drops the zoom state and re-fits California.
    let response = Plot::new(("sample_map", state.map_reset_generation))
        .data_aspect(1.0)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .include_x(CALIFORNIA_BOUNDS.west)
        .include_x(CALIFORNIA_BOUNDS.east)
        .include_y(CALIFORNIA_BOUNDS.south)
        .include_y(CALIFORNIA_BOUNDS.north)
        .height(ui.available_height() - 24.0)
        .label_formatter(|name, value| hover_text(&state.species_samples, name, value))
        .show(ui, |plot_ui| {
            for (species, color) in state.color_map.legend_entries() {
                let points: PlotPoints = state
                    .species_samples
                    .iter()
                    .filter(|s| s.species == species)
                    .map(|s| [s.longitude, s.latitude])
                    .collect();
                plot_ui.points(Points::new(points).name(&species).color(color).radius(4.0));
            }
        });

    let adjusted = response.response.dragged()
        || (response.response.hovered()
            && ui.input(|i| i.smooth_scroll_delta != Vec2::ZERO || i.zoom_delta() != 1.0));
    if adjusted || state.bounds.is_some() {
        state.set_bounds(Some(geo_bounds(response.transform.bounds())));
    }

    ui.label(
        RichText::new("Tip: zoom and pan the map to filter the scatter plot data")
            .small()
            .weak(),
    );
}
