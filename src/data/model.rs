use serde::{Deserialize, Serialize};

/// Millimetres per inch.
const MM_PER_INCH: f64 = 25.4;

/// Convert a length in millimetres to inches.
pub fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

// ---------------------------------------------------------------------------
// RawRecord – one undecoded row of the source CSV
// ---------------------------------------------------------------------------

/// A CSV row as text, before validation.
///
/// Every field is optional: short rows, missing columns and empty cells all
/// decode to `None` (or an empty string) and are rejected by the validator.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    #[serde(rename = "CompositeCommonName")]
    pub species: Option<String>,
    /// Wet-weight mercury result, ppm.
    #[serde(rename = "Result")]
    pub mercury: Option<String>,
    #[serde(rename = "TLAvgLength(mm)")]
    pub length_mm: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

// ---------------------------------------------------------------------------
// Sample – one validated measurement
// ---------------------------------------------------------------------------

/// One validated fish-mercury measurement.
///
/// Only built by the loader, from a row where every field was present and
/// every numeric field parsed to a finite value. Sign and coordinate range
/// are not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Species label, trimmed.
    pub species: String,
    pub mercury_ppm: f64,
    pub length_mm: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl Sample {
    /// Total length in inches, the unit the scatter plot and trends use.
    pub fn length_inches(&self) -> f64 {
        mm_to_inches(self.length_mm)
    }
}

// ---------------------------------------------------------------------------
// GeoBounds – rectangular lat/long window
// ---------------------------------------------------------------------------

/// A latitude/longitude rectangle, edges inclusive.
///
/// No ordering between edges is enforced: an inverted window simply
/// contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl GeoBounds {
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Whether `(latitude, longitude)` falls inside the window.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        self.south <= latitude
            && latitude <= self.north
            && self.west <= longitude
            && longitude <= self.east
    }
}

/// Initial map extent covering California.
pub const CALIFORNIA_BOUNDS: GeoBounds = GeoBounds {
    north: 42.0,
    south: 32.5,
    east: -114.0,
    west: -124.5,
};

// ---------------------------------------------------------------------------
// FishDataset – the loaded collection
// ---------------------------------------------------------------------------

/// All validated samples together with their species index.
#[derive(Debug, Clone, Default)]
pub struct FishDataset {
    /// Samples in source row order.
    pub samples: Vec<Sample>,
    /// Sorted distinct species labels.
    pub species: Vec<String>,
}

impl FishDataset {
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        let species = super::filter::unique_species(&samples);
        FishDataset { samples, species }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
