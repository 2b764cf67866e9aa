//! Build asset tooling for the Celeste Android port
//!
//! Usage:
//!   content-tools mgcb                  # Regenerate Content.mgcb from Content/
//!   content-tools icons app_icon.png   # Resize the launcher icon into Android mipmaps

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

mod icons;
mod mgcb;

#[derive(Parser)]
#[command(name = "content-tools")]
#[command(about = "Build asset tooling for the Celeste Android port")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the MGCB content manifest from the asset tree
    Mgcb {
        /// Root directory of the content assets
        #[arg(long, default_value = "Content")]
        content_dir: PathBuf,
        /// Destination manifest file
        #[arg(long, default_value = "Content/Content.mgcb")]
        output: PathBuf,
    },
    /// Resize a source icon into the Android launcher mipmap densities
    Icons {
        /// Source icon image (PNG, JPEG or BMP)
        input: PathBuf,
        /// Android resources directory receiving the mipmap-* folders
        #[arg(long, default_value = "Resources")]
        output_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Mgcb {
            content_dir,
            output,
        } => generate_mgcb(&content_dir, &output),
        Commands::Icons { input, output_dir } => generate_icons(&input, &output_dir),
    }
}

fn generate_mgcb(content_dir: &Path, output: &Path) -> Result<()> {
    let report = mgcb::generate(content_dir, output)
        .with_context(|| format!("failed to generate {}", output.display()))?;

    println!("Generated: {}", output.display());
    println!("  Textures: {}", report.textures);
    println!("  Sounds: {}", report.sounds);
    println!("  Data: {}", report.data);
    println!("  Total: {}", report.total());
    println!("  Size: {:.1} KB", report.bytes as f64 / 1024.0);
    Ok(())
}

fn generate_icons(input: &Path, output_dir: &Path) -> Result<()> {
    let report = icons::generate_mipmaps(input, output_dir)
        .with_context(|| format!("failed to generate icons from {}", input.display()))?;

    println!(
        "Source icon: {}x{} px",
        report.source_width, report.source_height
    );
    for (density, size) in &report.generated {
        println!("  {}/{} ({}x{} px)", density, icons::ICON_NAME, size, size);
    }
    println!(
        "Generated {} icons under {}",
        report.generated.len(),
        output_dir.display()
    );
    Ok(())
}
