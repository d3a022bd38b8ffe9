use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ninepatch::Ninepatch;

/// Scale a nine-patch image to a target size.
#[derive(Parser, Debug)]
#[command(name = "ninepatch")]
#[command(about = "Slice a nine-patch image and scale it to a target size")]
struct Args {
    /// Source nine-patch image (e.g. button.9.png)
    source: PathBuf,

    /// Target width in pixels
    width: u32,

    /// Target height in pixels
    height: u32,

    /// Output file (PNG)
    target: PathBuf,

    /// Also export the individual tiles into this directory
    #[arg(long, value_name = "DIR")]
    slices: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let patch = Ninepatch::open(&args.source)
        .with_context(|| format!("loading {}", args.source.display()))?;

    if let Some(dir) = &args.slices {
        patch
            .export_tiles(dir)
            .with_context(|| format!("exporting tiles to {}", dir.display()))?;
    }

    let rendered = patch.render(args.width, args.height)?;
    rendered
        .save(&args.target)
        .with_context(|| format!("saving {}", args.target.display()))?;

    Ok(())
}
