use serde::Serialize;

/// Minimum number of usable points for a fit, unless overridden.
pub const DEFAULT_MIN_POINTS: usize = 3;

/// Below this the log-x variance is treated as zero.
const DEGENERATE_EPS: f64 = 1e-10;

// ---------------------------------------------------------------------------
// Predictor – anything that maps x → y
// ---------------------------------------------------------------------------

/// A model that can be sampled into a trend line.
pub trait Predictor {
    fn predict(&self, x: f64) -> f64;
}

impl<F: Fn(f64) -> f64> Predictor for F {
    fn predict(&self, x: f64) -> f64 {
        self(x)
    }
}

// ---------------------------------------------------------------------------
// PowerLawFit – y = a · x^b
// ---------------------------------------------------------------------------

/// Least-squares power-law fit, computed in log-log space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerLawFit {
    /// Coefficient, always positive.
    pub a: f64,
    /// Exponent.
    pub b: f64,
    /// Coefficient of determination of the log-space fit, clamped to [0, 1].
    pub r_squared: f64,
}

impl Predictor for PowerLawFit {
    fn predict(&self, x: f64) -> f64 {
        self.a * x.powf(self.b)
    }
}

impl PowerLawFit {
    /// Fit with [`DEFAULT_MIN_POINTS`].
    #[cfg(test)]
    pub fn fit(x_values: &[f64], y_values: &[f64]) -> Option<Self> {
        Self::fit_with_min_points(x_values, y_values, DEFAULT_MIN_POINTS)
    }

    /// Fit `y = a · x^b` to index-aligned pairs.
    ///
    /// Pairs where either value is not strictly positive are left out.
    /// Returns `None` when the slices differ in length, when fewer than
    /// `min_points` pairs are given or survive the positivity filter, or
    /// when all surviving x values are equal.
    pub fn fit_with_min_points(x_values: &[f64], y_values: &[f64], min_points: usize) -> Option<Self> {
        if x_values.len() != y_values.len() || x_values.len() < min_points {
            return None;
        }

        let (log_x, log_y): (Vec<f64>, Vec<f64>) = x_values
            .iter()
            .zip(y_values)
            .filter(|&(&x, &y)| x > 0.0 && y > 0.0)
            .map(|(&x, &y)| (x.ln(), y.ln()))
            .unzip();

        if log_x.len() < min_points || log_x.is_empty() {
            return None;
        }

        let n = log_x.len() as f64;
        let mean_x = log_x.iter().sum::<f64>() / n;
        let mean_y = log_y.iter().sum::<f64>() / n;
        let sum_xy: f64 = log_x.iter().zip(&log_y).map(|(x, y)| x * y).sum();
        let sum_xx: f64 = log_x.iter().map(|x| x * x).sum();

        let numerator = sum_xy - n * mean_x * mean_y;
        let denominator = sum_xx - n * mean_x * mean_x;
        if denominator.abs() < DEGENERATE_EPS {
            return None;
        }

        let b = numerator / denominator;
        let log_a = mean_y - b * mean_x;

        let total_ss: f64 = log_y.iter().map(|y| (y - mean_y).powi(2)).sum();
        let residual_ss: f64 = log_x
            .iter()
            .zip(&log_y)
            .map(|(x, y)| (y - (log_a + b * x)).powi(2))
            .sum();
        let r_squared = if total_ss > 0.0 {
            1.0 - residual_ss / total_ss
        } else {
            0.0
        };

        Some(PowerLawFit {
            a: log_a.exp(),
            b,
            r_squared: r_squared.clamp(0.0, 1.0),
        })
    }
}
