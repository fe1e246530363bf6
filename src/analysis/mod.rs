/// Numeric analysis over filtered samples: power-law regression, trend
/// line sampling and consumption advisory levels.

pub mod advisory;
pub mod regression;
pub mod trend;
