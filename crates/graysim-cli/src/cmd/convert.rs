use anyhow::Context;
use clap::Args;
use graysim_core::{decode, Strategy};
use image::GrayImage;

#[derive(Args)]
pub struct ConvertArgs {
    /// Input fixed-header 16-bit raw file
    #[arg(long)]
    pub r#in: String,

    /// Output PNG path
    #[arg(long)]
    pub out: String,
}

/// Re-encodes only; no similarity math. 16-bit samples collapse to 8-bit
/// by dropping the low byte (value / 256).
pub fn run(args: ConvertArgs) -> anyhow::Result<()> {
    let img = decode::decode(&args.r#in, Strategy::Raw16)?;

    let pixels: Vec<u8> = img
        .samples()
        .iter()
        .map(|&v| ((v as u16) / 256) as u8)
        .collect();
    let buffer = GrayImage::from_raw(img.width(), img.height(), pixels)
        .context("assemble 8-bit pixel buffer")?;
    buffer
        .save(&args.out)
        .with_context(|| format!("write png: {}", args.out))?;

    println!("Image successfully written to {}", args.out);
    Ok(())
}
