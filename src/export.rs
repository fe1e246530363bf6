use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::analysis::regression::PowerLawFit;
use crate::data::filter::group_by_species;
use crate::data::model::GeoBounds;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// View summary
// ---------------------------------------------------------------------------

/// What the user is currently looking at, for sharing or archiving.
#[derive(Debug, Serialize)]
pub struct ViewSummary {
    pub bounds: Option<GeoBounds>,
    pub species: Vec<SpeciesSummary>,
}

#[derive(Debug, Serialize)]
pub struct SpeciesSummary {
    pub species: String,
    /// Samples of this species inside the current bounds.
    pub sample_count: usize,
    pub mean_mercury_ppm: Option<f64>,
    pub max_mercury_ppm: Option<f64>,
    /// Present only when a trend line is drawn.
    pub fit: Option<PowerLawFit>,
}

impl ViewSummary {
    pub fn from_state(state: &AppState) -> Self {
        let groups = group_by_species(&state.visible_samples);
        let species = state
            .selected
            .iter()
            .map(|name| {
                let group = groups.get(name.as_str()).map(Vec::as_slice).unwrap_or_default();
                let n = group.len();
                let mean = (n > 0).then(|| group.iter().map(|s| s.mercury_ppm).sum::<f64>() / n as f64);
                let max = group
                    .iter()
                    .map(|s| s.mercury_ppm)
                    .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))));
                SpeciesSummary {
                    species: name.clone(),
                    sample_count: n,
                    mean_mercury_ppm: mean,
                    max_mercury_ppm: max,
                    fit: state
                        .trends
                        .iter()
                        .find(|t| &t.species == name)
                        .map(|t| t.fit),
                }
            })
            .collect();

        ViewSummary {
            bounds: state.bounds,
            species,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialising view summary")
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))
    }
}
