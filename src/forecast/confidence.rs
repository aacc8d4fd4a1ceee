//! Interval band computation
//!
//! Bounds come from the standard deviation of the in-sample residuals. The
//! in-sample band has constant width; the future band widens with the square
//! root of the forecast distance.

/// Half-width calculator for one forecast run
#[derive(Debug, Clone, Copy)]
pub struct IntervalBand {
    sigma: f64,
    z: f64,
}

impl IntervalBand {
    /// Derive the band from in-sample residuals
    ///
    /// An empty residual set (or an all-zero one, as with a perfectly fitted
    /// constant series) collapses the band to zero width.
    pub fn from_residuals(residuals: &[f64], confidence_level: f64) -> Self {
        let sigma = if residuals.is_empty() {
            0.0
        } else {
            let n = residuals.len() as f64;
            let mean = residuals.iter().sum::<f64>() / n;
            let variance = residuals.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
            variance.sqrt()
        };

        Self {
            sigma,
            z: z_score(confidence_level),
        }
    }

    /// Half-width applied to in-sample fitted points
    pub fn in_sample_half_width(&self) -> f64 {
        self.z * self.sigma
    }

    /// Half-width at forecast distance `h` (1-based)
    pub fn future_half_width(&self, h: usize) -> f64 {
        self.z * self.sigma * (h as f64).sqrt()
    }
}

/// Z-score for a given confidence level (approximate)
fn z_score(confidence_level: f64) -> f64 {
    match confidence_level {
        x if x >= 0.99 => 2.576,
        x if x >= 0.95 => 1.96,
        x if x >= 0.90 => 1.645,
        x if x >= 0.80 => 1.282,
        _ => 1.96,
    }
}
