// crates/graysim-core/src/decode/mod.rs
//
// Three ingestion strategies, each normalizing one on-disk encoding into an
// ImageSample. The strategy is picked explicitly by the caller; nothing here
// sniffs file content to choose between them.

pub mod pgm;
pub mod raster;
pub mod raw16;

use crate::error::{Result, SimError};
use crate::sample::ImageSample;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Compressed raster (PNG/JPEG/...) with 8-bit/16-bit depth fallback.
    Raster,
    /// Portable grayscale raw (P5), 8-bit.
    Pgm,
    /// Fixed-header raw binary, 16-bit.
    Raw16,
}

pub fn decode(path: &str, strategy: Strategy) -> Result<ImageSample> {
    match strategy {
        Strategy::Raster => raster::decode(path),
        Strategy::Pgm => pgm::decode(path),
        Strategy::Raw16 => raw16::decode(path),
    }
}

/// Read a whole file, mapping absence to the dedicated taxonomy entry so
/// "no such file" stays distinct from format-level failures.
pub(crate) fn read_file(path: &str) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => SimError::FileNotFound { path: path.into() },
        _ => SimError::Io(e),
    })
}
