// crates/graysim-core/src/validate.rs

use crate::error::{Result, SimError};
use crate::sample::ImageSample;

/// Dimension gate: both width and height must match pairwise. Must run
/// before the scorer in every driver composition; the scorer's own
/// sample-count check is a later, cheaper line of defense.
pub fn validate_dimensions(a: &ImageSample, b: &ImageSample) -> Result<()> {
    if a.width() != b.width() || a.height() != b.height() {
        return Err(SimError::DimensionMismatch {
            width_a: a.width(),
            height_a: a.height(),
            width_b: b.width(),
            height_b: b.height(),
        });
    }
    Ok(())
}
