use std::path::Path;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::analysis::advisory::Population;
use crate::export::ViewSummary;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – species picker
// ---------------------------------------------------------------------------

/// Render the species picker and plot options.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Species");
    ui.separator();

    let species = match &state.dataset {
        Some(ds) => ds.species.clone(),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    ui.add(
        egui::TextEdit::singleline(&mut state.species_query)
            .hint_text("Type to search species…"),
    );
    let query = state.species_query.to_lowercase();

    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("{} selected", state.selected.len()));
        if ui.small_button("Clear").clicked() {
            state.clear_selection();
        }
    });

    // ---- Legend for the current selection ----
    for (name, color) in state.color_map.legend_entries() {
        ui.label(RichText::new(format!("● {name}")).color(color));
    }
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .max_height(ui.available_height() - 80.0)
        .show(ui, |ui: &mut Ui| {
            for name in species
                .iter()
                .filter(|s| query.is_empty() || s.to_lowercase().contains(&query))
            {
                let mut checked = state.is_selected(name);
                if ui.checkbox(&mut checked, name.as_str()).changed() {
                    state.toggle_species(name);
                }
            }
        });

    ui.separator();
    ui.strong("Advisory overlay");
    egui::ComboBox::from_id_salt("population")
        .selected_text(state.population.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for population in Population::ALL {
                ui.selectable_value(&mut state.population, population, population.to_string());
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let can_export = !state.selected.is_empty();
            if ui
                .add_enabled(can_export, egui::Button::new("Export summary…"))
                .clicked()
            {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} samples, {} species",
                ds.len(),
                ds.species.len()
            ));
            ui.separator();
        }

        match state.summary_line() {
            Some(line) => ui.label(line),
            None if state.dataset.is_some() => ui.label("Select one or more species"),
            None => ui.label(""),
        };

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open fish mercury data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        load_path(state, &path);
    }
}

/// Load a CSV into `state`, reporting failures in the status line.
pub fn load_path(state: &mut AppState, path: &Path) {
    match crate::data::loader::load_file(path) {
        Ok(dataset) if dataset.is_empty() => {
            log::warn!("No usable rows in {}", path.display());
            state.status_message = Some("No valid samples found in file".to_string());
        }
        Ok(dataset) => {
            log::info!(
                "Loaded {} samples of {} species from {}",
                dataset.len(),
                dataset.species.len(),
                path.display()
            );
            state.set_dataset(dataset);
        }
        Err(e) => {
            log::error!("Failed to load fish data: {e}");
            state.status_message = Some(format!("Failed to load fish data: {e}"));
        }
    }
}

fn export_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export view summary")
        .set_file_name("fishtox-summary.json")
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        if let Err(e) = ViewSummary::from_state(state).write_json(&path) {
            log::error!("Export failed: {e:#}");
            state.status_message = Some(format!("Export failed: {e:#}"));
        } else {
            log::info!("Exported view summary to {}", path.display());
        }
    }
}
