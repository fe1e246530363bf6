use serde::Serialize;

use super::regression::{PowerLawFit, Predictor};
use crate::config::AnalysisConfig;
use crate::data::filter::group_by_species;
use crate::data::model::Sample;

/// Number of points in a trend line, unless overridden.
pub const DEFAULT_TREND_POINTS: usize = 50;

/// One point on a trend line: length (inches) and predicted mercury (ppm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub x: f64,
    pub y: f64,
}

/// Sample `model` at `num_points` evenly spaced x values from `min_x` to
/// `max_x` inclusive.
///
/// The i-th x is `min_x + i · step`, except the last, which is `max_x`
/// exactly rather than the accumulated `min_x + (n - 1) · step`.
///
/// Points whose prediction is not finite and positive are dropped, so the
/// result may be shorter than `num_points`. Fewer than two points leaves the
/// spacing undefined and yields nothing.
pub fn trend_line_points<P: Predictor + ?Sized>(
    model: &P,
    min_x: f64,
    max_x: f64,
    num_points: usize,
) -> Vec<TrendPoint> {
    if num_points < 2 {
        return Vec::new();
    }
    let step = (max_x - min_x) / (num_points - 1) as f64;
    (0..num_points)
        .map(|i| {
            if i == num_points - 1 {
                max_x
            } else {
                min_x + i as f64 * step
            }
        })
        .filter_map(|x| {
            let y = model.predict(x);
            (y.is_finite() && y > 0.0).then_some(TrendPoint { x, y })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Per-species trends
// ---------------------------------------------------------------------------

/// A fitted trend for one species in the current view.
#[derive(Debug, Clone, Serialize)]
pub struct SpeciesTrend {
    pub species: String,
    pub sample_count: usize,
    pub fit: PowerLawFit,
    pub points: Vec<TrendPoint>,
}

/// Fit mercury against length (inches) for each species group and sample
/// the trends worth drawing.
///
/// A species gets a trend only when its group has at least
/// `min_group_size` samples, the fit succeeds and its R² exceeds
/// `min_r_squared`. The line spans the group's observed length range.
pub fn species_trends(samples: &[Sample], config: &AnalysisConfig) -> Vec<SpeciesTrend> {
    group_by_species(samples)
        .into_iter()
        .filter(|(_, group)| group.len() >= config.min_group_size)
        .filter_map(|(species, group)| {
            let x: Vec<f64> = group.iter().map(|s| s.length_inches()).collect();
            let y: Vec<f64> = group.iter().map(|s| s.mercury_ppm).collect();

            let fit = PowerLawFit::fit_with_min_points(&x, &y, config.min_points)?;
            if fit.r_squared <= config.min_r_squared {
                log::debug!("{species}: weak fit (R² = {:.3}), no trend", fit.r_squared);
                return None;
            }

            let min_x = x.iter().copied().fold(f64::INFINITY, f64::min);
            let max_x = x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            Some(SpeciesTrend {
                species: species.to_string(),
                sample_count: group.len(),
                fit,
                points: trend_line_points(&fit, min_x, max_x, config.trend_points),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> PowerLawFit {
        PowerLawFit {
            a: 2.0,
            b: 1.5,
            r_squared: 0.95,
        }
    }

    #[test]
    fn default_point_count_and_endpoints() {
        let points = trend_line_points(&model(), 1.0, 10.0, DEFAULT_TREND_POINTS);
        assert_eq!(points.len(), 50);
        assert_eq!(points[0].x, 1.0);
        assert_eq!(points[49].x, 10.0);

        let step = 9.0 / 49.0;
        for pair in points.windows(2) {
            assert!((pair[1].x - pair[0].x - step).abs() < 1e-9);
        }
    }

    #[test]
    fn last_x_is_exactly_max_for_awkward_ranges() {
        let ranges = [
            (0.1, 0.7, 7),
            (200.0 / 25.4, 450.0 / 25.4, 50),
            (1.0 / 3.0, 2.0 / 3.0, 13),
        ];
        for (lo, hi, n) in ranges {
            let points = trend_line_points(&model(), lo, hi, n);
            assert_eq!(points.len(), n);
            assert_eq!(points[0].x, lo);
            assert_eq!(points[n - 1].x, hi);
        }
    }

    #[test]
    fn custom_point_count() {
        assert_eq!(trend_line_points(&model(), 1.0, 10.0, 20).len(), 20);
    }

    #[test]
    fn points_stay_within_range() {
        let points = trend_line_points(&model(), 5.0, 15.0, DEFAULT_TREND_POINTS);
        assert_eq!(points.first().map(|p| p.x), Some(5.0));
        assert_eq!(points.last().map(|p| p.x), Some(15.0));
        assert!(points.iter().all(|p| (5.0..=15.0).contains(&p.x)));
    }

    #[test]
    fn y_values_come_from_the_model() {
        let m = model();
        for p in trend_line_points(&m, 1.0, 5.0, 5) {
            assert!((p.y - m.predict(p.x)).abs() < 1e-10);
        }
    }

    #[test]
    fn unit_spacing() {
        let points = trend_line_points(&model(), 0.0, 10.0, 11);
        // x = 0 predicts 0 and is dropped
        assert_eq!(points.len(), 10);
        for pair in points.windows(2) {
            assert!((pair[1].x - pair[0].x - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn negative_predictions_are_dropped() {
        let negative = |x: f64| -x;
        assert!(trend_line_points(&negative, 1.0, 10.0, DEFAULT_TREND_POINTS).is_empty());
    }

    #[test]
    fn non_finite_predictions_are_dropped() {
        let blows_up = |x: f64| if x > 5.0 { f64::INFINITY } else { x };
        let points = trend_line_points(&blows_up, 1.0, 10.0, 10);
        assert_eq!(points.len(), 5);
        assert!(points.iter().all(|p| p.y.is_finite()));

        let nan = |_: f64| f64::NAN;
        assert!(trend_line_points(&nan, 1.0, 2.0, 10).is_empty());
    }

    #[test]
    fn single_point_yields_nothing() {
        assert!(trend_line_points(&model(), 5.0, 5.0, 1).is_empty());
        assert!(trend_line_points(&model(), 1.0, 5.0, 1).is_empty());
        assert!(trend_line_points(&model(), 1.0, 5.0, 0).is_empty());
    }

    fn fish(species: &str, length_mm: f64, mercury_ppm: f64) -> Sample {
        Sample {
            species: species.to_string(),
            mercury_ppm,
            length_mm,
            latitude: 37.0,
            longitude: -122.0,
        }
    }

    #[test]
    fn trends_require_enough_samples_and_a_good_fit() {
        let mut samples = Vec::new();
        // Clean power law, six samples.
        for len in [200.0, 250.0, 300.0, 350.0, 400.0, 450.0] {
            samples.push(fish("Bass: Largemouth", len, 0.001 * (len / 25.4_f64).powf(1.8)));
        }
        // Too few samples.
        for len in [200.0, 300.0, 400.0, 500.0] {
            samples.push(fish("Trout: Rainbow", len, 0.1));
        }
        // Enough samples, no relationship with length.
        for (len, hg) in [(200.0, 0.5), (250.0, 0.05), (300.0, 0.05), (350.0, 0.5), (400.0, 0.5), (450.0, 0.05)] {
            samples.push(fish("Carp: Common", len, hg));
        }

        let trends = species_trends(&samples, &AnalysisConfig::default());
        assert_eq!(trends.len(), 1);
        let bass = &trends[0];
        assert_eq!(bass.species, "Bass: Largemouth");
        assert_eq!(bass.sample_count, 6);
        assert!((bass.fit.b - 1.8).abs() < 1e-9);
        assert_eq!(bass.points.len(), DEFAULT_TREND_POINTS);
        assert!((bass.points[0].x - 200.0 / 25.4).abs() < 1e-9);
        assert!((bass.points[49].x - 450.0 / 25.4).abs() < 1e-9);
    }

    #[test]
    fn no_samples_no_trends() {
        assert!(species_trends(&[], &AnalysisConfig::default()).is_empty());
    }
}
