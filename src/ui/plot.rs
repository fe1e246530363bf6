use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{HLine, Legend, Line, LineStyle, Plot, PlotPoints, Points};

use crate::analysis::advisory::FDA_ACTION_LEVEL_PPM;
use crate::color::lighten;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Mercury vs length scatter plot
// ---------------------------------------------------------------------------

/// Upper y limit: 10% headroom over the highest sample, rounded up to 0.1.
pub fn y_axis_max(mercury: impl Iterator<Item = f64>) -> f64 {
    let max = mercury.fold(f64::NEG_INFINITY, f64::max);
    if max.is_finite() {
        (max * 1.1 * 10.0).ceil() / 10.0
    } else {
        1.0
    }
}

/// Render the scatter plot with trend lines and advisory levels.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    ui.heading("Mercury vs Fish Length");

    if state.selected.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("Pick a species to see its samples");
        });
        return;
    }

    let y_max = y_axis_max(state.visible_samples.iter().map(|s| s.mercury_ppm));
    let population = state.population;

    Plot::new("mercury_scatter")
        .legend(Legend::default())
        .x_axis_label("Fish Length (inches)")
        .y_axis_label("Mercury (ppm)")
        .include_x(0.0)
        .include_y(0.0)
        .include_y(y_max)
        .height(ui.available_height() - 24.0)
        .label_formatter(|name, value| {
            let name = if name.is_empty() { String::new() } else { format!("{name}\n") };
            format!("{name}Length: {:.1}\"\nMercury: {:.3} ppm", value.x, value.y)
        })
        .show(ui, |plot_ui| {
            for tier in population.tiers() {
                plot_ui.hline(
                    HLine::new(tier.max_ppm)
                        .name(format!("{}×/week limit", tier.servings_per_week))
                        .color(Color32::from_gray(160))
                        .style(LineStyle::dashed_loose())
                        .width(0.8),
                );
            }
            plot_ui.hline(
                HLine::new(FDA_ACTION_LEVEL_PPM)
                    .name("FDA action level")
                    .color(Color32::DARK_RED)
                    .style(LineStyle::dashed_dense()),
            );

            for (species, color) in state.color_map.legend_entries() {
                let points: PlotPoints = state
                    .visible_samples
                    .iter()
                    .filter(|s| s.species == species)
                    .map(|s| [s.length_inches(), s.mercury_ppm])
                    .collect();
                plot_ui.points(
                    Points::new(points)
                        .name(&species)
                        .color(lighten(color, 0.1).gamma_multiply(0.7))
                        .radius(3.5),
                );
            }

            for trend in &state.trends {
                let points: PlotPoints = trend.points.iter().map(|p| [p.x, p.y]).collect();
                plot_ui.line(
                    Line::new(points)
                        .name(format!("{} trend (R² {:.2})", trend.species, trend.fit.r_squared))
                        .color(state.color_map.color_for(&trend.species))
                        .width(2.0),
                );
            }
        });

    ui.label(
        RichText::new(format!(
            "Dashed lines: advised weekly servings for {population}. FDA action level is {FDA_ACTION_LEVEL_PPM:.1} ppm."
        ))
        .small()
        .weak(),
    );
}
