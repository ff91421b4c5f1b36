use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("cannot open or find the file: {path}")]
    FileNotFound { path: String },

    #[error("invalid image format in {path}: {reason}")]
    Format { path: String, reason: String },

    #[error("truncated image data in {path}: need {expected} bytes, have {actual}")]
    TruncatedData {
        path: String,
        expected: usize,
        actual: usize,
    },

    #[error("cannot decode image at any supported bit depth: {path}")]
    Decode { path: String },

    #[error("images must have the same dimensions: {width_a}x{height_a} vs {width_b}x{height_b}")]
    DimensionMismatch {
        width_a: u32,
        height_a: u32,
        width_b: u32,
        height_b: u32,
    },

    #[error("images must have the same size: {len_a} vs {len_b} samples")]
    SizeMismatch { len_a: usize, len_b: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
