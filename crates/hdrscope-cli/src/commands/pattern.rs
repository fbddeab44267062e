//! Test pattern command.

use crate::PatternArgs;
use anyhow::{ensure, Result};

/// Renders the requested pattern and writes it as PNG.
pub fn run(args: PatternArgs, verbose: bool) -> Result<()> {
    ensure!(args.width > 0 && args.height > 0, "Pattern size must be non-zero");

    let raster = args.kind.render(args.width, args.height);
    super::save_raster(&args.output, &raster)?;

    if verbose {
        println!(
            "Wrote {} {}x{} -> {}",
            args.kind,
            args.width,
            args.height,
            args.output.display()
        );
    }
    Ok(())
}
