// crates/graysim-core/src/score.rs
//
// Whole-image structural similarity: the standard SSIM formula applied once
// over the entire sample population instead of a sliding window.

use crate::error::{Result, SimError};
use crate::sample::ImageSample;
use crate::stats;

/// Stabilizing constants for the similarity formula.
///
/// `dynamic_range` defaults to 255.0 regardless of the source bit depth.
/// That reproduces the historical behavior for 16-bit inputs, which
/// underweights true 16-bit contrast; callers that want a faithful 16-bit
/// range can pass 65535.0 explicitly.
#[derive(Copy, Clone, Debug)]
pub struct SsimConfig {
    pub k1: f64,
    pub k2: f64,
    pub dynamic_range: f64,
}

impl Default for SsimConfig {
    fn default() -> Self {
        Self {
            k1: 0.01,
            k2: 0.03,
            dynamic_range: 255.0,
        }
    }
}

impl SsimConfig {
    pub fn c1(&self) -> f64 {
        (self.k1 * self.dynamic_range) * (self.k1 * self.dynamic_range)
    }

    pub fn c2(&self) -> f64 {
        (self.k2 * self.dynamic_range) * (self.k2 * self.dynamic_range)
    }
}

/// Single scalar similarity score, nominally in [-1, 1] but unclamped.
/// Thresholding (e.g. "very similar" at > 0.9) is the caller's business.
pub fn score(a: &ImageSample, b: &ImageSample, config: &SsimConfig) -> Result<f64> {
    if a.len() != b.len() {
        return Err(SimError::SizeMismatch {
            len_a: a.len(),
            len_b: b.len(),
        });
    }

    let c1 = config.c1();
    let c2 = config.c2();

    let mean1 = stats::mean(a.samples());
    let mean2 = stats::mean(b.samples());
    let var1 = stats::variance(a.samples(), mean1);
    let var2 = stats::variance(b.samples(), mean2);
    let covar = stats::covariance(a.samples(), b.samples(), mean1, mean2);

    let numerator = (2.0 * mean1 * mean2 + c1) * (2.0 * covar + c2);
    let denominator = (mean1 * mean1 + mean2 * mean2 + c1) * (var1 + var2 + c2);

    // c2 keeps the variance-sum term strictly positive, so two exactly
    // constant images still divide cleanly.
    Ok(numerator / denominator)
}
