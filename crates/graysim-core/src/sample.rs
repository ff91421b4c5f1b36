// crates/graysim-core/src/sample.rs

/// Sample precision of the *source* encoding. Scoring uses its own dynamic
/// range constant (see `score::SsimConfig`), which is deliberately not tied
/// to this.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BitDepth {
    Eight,
    Sixteen,
}

impl BitDepth {
    pub fn bits(self) -> u32 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
        }
    }
}

impl std::fmt::Display for BitDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// Canonical decoded image: luminance samples in row-major order.
///
/// Invariant: `samples.len() == width * height`, with both dimensions
/// positive. Constructed atomically by one decoder call and immutable after.
#[derive(Clone, Debug)]
pub struct ImageSample {
    width: u32,
    height: u32,
    bit_depth: BitDepth,
    samples: Vec<f64>,
}

impl ImageSample {
    /// Panics if the length invariant is violated. Decoders are the only
    /// constructors and size their payload reads from the validated header,
    /// so a mismatch here is a bug, not an input condition.
    pub fn new(width: u32, height: u32, bit_depth: BitDepth, samples: Vec<f64>) -> Self {
        assert!(width > 0 && height > 0, "dimensions must be positive");
        assert_eq!(
            samples.len(),
            (width as usize) * (height as usize),
            "sample count must equal width*height"
        );
        Self {
            width,
            height,
            bit_depth,
            samples,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bit_depth(&self) -> BitDepth {
        self.bit_depth
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
