// crates/graysim-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "graysim")]
#[command(about = "Grayscale structural-similarity tools", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two grayscale images and report a similarity score
    Compare(cmd::compare::CompareArgs),

    /// Convert a fixed-header 16-bit raw image to an 8-bit grayscale PNG
    Convert(cmd::convert::ConvertArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Compare(args) => cmd::compare::run(args),
        Commands::Convert(args) => cmd::convert::run(args),
    }
}
