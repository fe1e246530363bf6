/// Data layer: sample types, CSV validation and filtering.
///
/// Architecture:
/// ```text
///   .csv text
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  validate rows → Vec<Sample>
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ FishDataset │  samples + sorted species index
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  species selection → map bounds → per-species groups
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
