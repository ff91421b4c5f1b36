use clap::{Args, ValueEnum};
use graysim_core::{decode, score, validate_dimensions, SsimConfig, Strategy};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Format {
    /// Compressed raster (PNG/JPEG/...), 8-bit with 16-bit fallback
    Raster,
    /// Portable grayscale raw (P5)
    Pgm,
    /// Fixed-header raw binary, 16-bit
    Raw16,
}

impl Format {
    fn strategy(self) -> Strategy {
        match self {
            Format::Raster => Strategy::Raster,
            Format::Pgm => Strategy::Pgm,
            Format::Raw16 => Strategy::Raw16,
        }
    }
}

#[derive(Args)]
pub struct CompareArgs {
    /// First input image
    pub image1: String,

    /// Second input image
    pub image2: String,

    /// Ingestion format; each invocation commits to exactly one
    #[arg(long, value_enum, default_value_t = Format::Raster)]
    pub format: Format,

    /// Verdict threshold: score above this counts as "very similar"
    #[arg(long, default_value_t = 0.9)]
    pub threshold: f64,
}

pub fn run(args: CompareArgs) -> anyhow::Result<()> {
    let strategy = args.format.strategy();
    let img1 = decode::decode(&args.image1, strategy)?;
    let img2 = decode::decode(&args.image2, strategy)?;

    println!("Bit depth of image 1: {}", img1.bit_depth());
    println!("Bit depth of image 2: {}", img2.bit_depth());

    validate_dimensions(&img1, &img2)?;
    let result = score(&img1, &img2, &SsimConfig::default())?;

    println!("SSIM: {result}");
    if result > args.threshold {
        println!("The images are very similar!");
    } else {
        println!("The images are not very similar.");
    }

    Ok(())
}
