use eframe::egui;

use crate::state::AppState;
use crate::ui::{map, panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FishToxApp {
    pub state: AppState,
}

impl FishToxApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for FishToxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: species picker ----
        egui::SidePanel::left("species_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: samples in view ----
        egui::TopBottomPanel::bottom("sample_table")
            .resizable(true)
            .default_height(180.0)
            .show(ctx, |ui| {
                table::sample_table(ui, &self.state);
            });

        // ---- Central panel: scatter plot and map ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |cols| {
                plot::scatter_plot(&mut cols[0], &self.state);
                map::sample_map(&mut cols[1], &mut self.state);
            });
            ui.label(
                egui::RichText::new(
                    "Informational purposes only. See the California OEHHA Fish Advisories for official guidance.",
                )
                .small()
                .weak(),
            );
        });
    }
}
