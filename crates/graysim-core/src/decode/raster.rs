// crates/graysim-core/src/decode/raster.rs

use image::{ColorType, DynamicImage, ImageReader};

use crate::error::{Result, SimError};
use crate::sample::{BitDepth, ImageSample};

/// Compressed-raster ingestion with bit-depth fallback: the stream is
/// decoded once and collapsed to a single luminance channel. Sources that
/// decode to 16-bit sample types keep their values verbatim at
/// `bit_depth = 16`; everything else is taken as 8-bit. Neither direction
/// rescales.
pub fn decode(path: &str) -> Result<ImageSample> {
    let reader = ImageReader::open(path)
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => SimError::FileNotFound { path: path.into() },
            _ => SimError::Io(e),
        })?
        .with_guessed_format()
        .map_err(SimError::Io)?;

    let img = reader.decode().map_err(|_| SimError::Decode { path: path.into() })?;

    let sixteen_bit = matches!(
        img.color(),
        ColorType::L16 | ColorType::La16 | ColorType::Rgb16 | ColorType::Rgba16
    );

    if sixteen_bit {
        from_luma16(&img, path)
    } else {
        from_luma8(&img, path)
    }
}

fn from_luma8(img: &DynamicImage, path: &str) -> Result<ImageSample> {
    let luma = img.to_luma8();
    let (width, height) = luma.dimensions();
    check_dims(width, height, path)?;
    let samples = luma.into_raw().into_iter().map(|v| v as f64).collect();
    Ok(ImageSample::new(width, height, BitDepth::Eight, samples))
}

fn from_luma16(img: &DynamicImage, path: &str) -> Result<ImageSample> {
    let luma = img.to_luma16();
    let (width, height) = luma.dimensions();
    check_dims(width, height, path)?;
    let samples = luma.into_raw().into_iter().map(|v| v as f64).collect();
    Ok(ImageSample::new(width, height, BitDepth::Sixteen, samples))
}

fn check_dims(width: u32, height: u32, path: &str) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(SimError::Format {
            path: path.into(),
            reason: format!("invalid dimensions {width}x{height}"),
        });
    }
    Ok(())
}
