mod analysis;
mod app;
mod color;
mod config;
mod data;
mod export;
mod state;
mod ui;

use app::FishToxApp;
use clap::Parser;
use config::Args;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();
    let args = Args::parse();

    let mut state = AppState::new(args.analysis_config());
    if let Some(path) = &args.data {
        ui::panels::load_path(&mut state, path);
        if !args.species.is_empty() {
            state.select_species(&args.species);
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "FishTox – Mercury in California Fish",
        options,
        Box::new(|_cc| Ok(Box::new(FishToxApp::new(state)))),
    )
}
