use crate::analysis::advisory::Population;
use crate::analysis::trend::{SpeciesTrend, species_trends};
use crate::color::ColorMap;
use crate::config::AnalysisConfig;
use crate::data::filter::{filter_by_bounds, filter_by_species};
use crate::data::model::{FishDataset, GeoBounds, Sample};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<FishDataset>,

    /// Selected species, in the order they were picked.
    pub selected: Vec<String>,

    /// Map viewport, once the user has panned or zoomed.
    pub bounds: Option<GeoBounds>,

    /// Samples of the selected species (drawn on the map).
    pub species_samples: Vec<Sample>,

    /// `species_samples` inside `bounds` (drawn on the scatter plot).
    pub visible_samples: Vec<Sample>,

    /// Trend lines for `visible_samples`.
    pub trends: Vec<SpeciesTrend>,

    /// Colours for the current selection.
    pub color_map: ColorMap,

    pub analysis: AnalysisConfig,

    /// Advisory table drawn on the scatter plot.
    pub population: Population,

    /// Text typed into the species search box.
    pub species_query: String,

    /// Incremented whenever the map should return to its initial extent.
    pub map_reset_generation: u64,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(analysis: AnalysisConfig) -> Self {
        Self {
            analysis,
            ..Self::default()
        }
    }

    /// Ingest a newly loaded dataset, keeping selected species it contains.
    pub fn set_dataset(&mut self, dataset: FishDataset) {
        self.selected.retain(|s| dataset.species.contains(s));
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refilter();
    }

    /// Re-run species filter, bounds filter and trend fitting.
    pub fn refilter(&mut self) {
        self.color_map = ColorMap::new(&self.selected);
        let Some(ds) = &self.dataset else {
            self.species_samples.clear();
            self.visible_samples.clear();
            self.trends.clear();
            return;
        };
        self.species_samples = filter_by_species(&ds.samples, &self.selected);
        self.visible_samples = filter_by_bounds(&self.species_samples, self.bounds.as_ref());
        self.trends = species_trends(&self.visible_samples, &self.analysis);
        log::debug!(
            "{} selected samples, {} in view, {} trends",
            self.species_samples.len(),
            self.visible_samples.len(),
            self.trends.len()
        );
    }

    pub fn is_selected(&self, species: &str) -> bool {
        self.selected.iter().any(|s| s == species)
    }

    /// Add or remove a species from the selection.
    pub fn toggle_species(&mut self, species: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == species) {
            self.selected.remove(pos);
        } else {
            self.selected.push(species.to_string());
        }
        self.refilter();
    }

    /// Replace the selection, ignoring species not in the dataset.
    pub fn select_species(&mut self, species: &[String]) {
        self.selected.clear();
        for s in species {
            let known = self
                .dataset
                .as_ref()
                .is_some_and(|ds| ds.species.contains(s));
            if known && !self.is_selected(s) {
                self.selected.push(s.clone());
            } else if !known {
                log::warn!("Unknown species '{s}' ignored");
            }
        }
        self.refilter();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
        self.refilter();
    }

    /// Apply a new map viewport. Refilters only when it actually changed.
    pub fn set_bounds(&mut self, bounds: Option<GeoBounds>) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.refilter();
        }
    }

    /// Drop the viewport filter and send the map back to its initial extent.
    pub fn reset_map(&mut self) {
        self.map_reset_generation += 1;
        self.set_bounds(None);
    }

    /// Whether the viewport removed any selected samples.
    pub fn bounds_filtered(&self) -> bool {
        self.bounds.is_some() && self.visible_samples.len() != self.species_samples.len()
    }

    /// One-line description of what is on screen.
    pub fn summary_line(&self) -> Option<String> {
        if self.selected.is_empty() {
            return None;
        }
        let names = self.selected.join(", ");
        Some(if self.bounds_filtered() {
            format!(
                "Showing {} {names} samples (filtered by map bounds)",
                self.visible_samples.len()
            )
        } else {
            format!("Showing {} {names} samples", self.species_samples.len())
        })
    }
}
