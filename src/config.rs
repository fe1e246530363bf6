use std::path::PathBuf;

use clap::Parser;

use crate::analysis::regression::DEFAULT_MIN_POINTS;
use crate::analysis::trend::DEFAULT_TREND_POINTS;

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[derive(Debug, Parser)]
#[command(name = "fishtox", version, about = "Mercury levels in California fish")]
pub struct Args {
    /// CSV file to load on startup.
    #[arg(short, long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Species to select once the data is loaded (repeatable).
    #[arg(short, long = "species", value_name = "NAME")]
    pub species: Vec<String>,

    /// Points per trend line.
    #[arg(long, default_value_t = DEFAULT_TREND_POINTS)]
    pub trend_points: usize,
}

impl Args {
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            trend_points: self.trend_points,
            ..AnalysisConfig::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Analysis thresholds
// ---------------------------------------------------------------------------

/// When a species group is fitted and drawn with a trend line.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Minimum positive (length, mercury) pairs for a fit.
    pub min_points: usize,
    /// Minimum samples in a species group before fitting.
    pub min_group_size: usize,
    /// Fits at or below this R² are not drawn.
    pub min_r_squared: f64,
    pub trend_points: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_points: DEFAULT_MIN_POINTS,
            min_group_size: 5,
            min_r_squared: 0.1,
            trend_points: DEFAULT_TREND_POINTS,
        }
    }
}
