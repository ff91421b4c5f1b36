// crates/graysim-core/src/decode/raw16.rs

use crate::decode::read_file;
use crate::error::{Result, SimError};
use crate::sample::{BitDepth, ImageSample};

const HEADER_LEN: usize = 8;

/// Fixed-header raw layout (native byte order, matching the producer):
/// width:i32
/// height:i32
/// samples: width*height x u16, row-major, no padding
pub fn decode(path: &str) -> Result<ImageSample> {
    let bytes = read_file(path)?;
    parse(&bytes, path)
}

fn parse(bytes: &[u8], path: &str) -> Result<ImageSample> {
    if bytes.len() < HEADER_LEN {
        return Err(SimError::TruncatedData {
            path: path.into(),
            expected: HEADER_LEN,
            actual: bytes.len(),
        });
    }

    let mut i = 0usize;
    let width = read_i32_ne(bytes, &mut i);
    let height = read_i32_ne(bytes, &mut i);
    if width <= 0 || height <= 0 {
        return Err(SimError::Format {
            path: path.into(),
            reason: format!("invalid dimensions {width}x{height} in header"),
        });
    }

    let count = (width as usize) * (height as usize);
    let expected = HEADER_LEN + 2 * count;
    if bytes.len() < expected {
        return Err(SimError::TruncatedData {
            path: path.into(),
            expected,
            actual: bytes.len(),
        });
    }

    let samples = bytes[HEADER_LEN..expected]
        .chunks_exact(2)
        .map(|c| u16::from_ne_bytes([c[0], c[1]]) as f64)
        .collect();

    Ok(ImageSample::new(
        width as u32,
        height as u32,
        BitDepth::Sixteen,
        samples,
    ))
}

fn read_i32_ne(bytes: &[u8], i: &mut usize) -> i32 {
    let v = i32::from_ne_bytes(bytes[*i..*i + 4].try_into().unwrap());
    *i += 4;
    v
}
