pub mod decode;
pub mod error;
pub mod sample;
pub mod score;
pub mod stats;
pub mod validate;

pub use crate::decode::Strategy;
pub use crate::error::{Result, SimError};
pub use crate::sample::{BitDepth, ImageSample};
pub use crate::score::{score, SsimConfig};
pub use crate::validate::validate_dimensions;
