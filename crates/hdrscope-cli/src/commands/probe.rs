//! Pixel probe command.
//!
//! Reports a pixel's code values, linear light and luminance, and the point
//! it occupies on each transfer curve for the current view.

use crate::ProbeArgs;
use anyhow::Result;
use serde_json::json;

use hdrscope_core::{TransferMode, ViewSettings};
use hdrscope_ops::{probe, PixelProbe, PixelSampler};

/// Runs the probe command.
pub fn run(args: ProbeArgs, settings: ViewSettings, verbose: bool) -> Result<()> {
    let settings = super::apply_overrides(settings, &args.view)?;
    let raster = super::load_raster(&args.input)?;
    let triplet = PixelSampler::new(raster.view()).get(args.x, args.y)?;
    let readout = probe::probe(triplet, &settings)?;

    if args.json {
        print_json(&args, &readout, &settings)?;
    } else {
        print_text(&args, &readout, &settings, verbose);
    }
    Ok(())
}

fn print_text(args: &ProbeArgs, p: &PixelProbe, settings: &ViewSettings, verbose: bool) {
    println!("{} @ ({}, {})", args.input.display(), args.x, args.y);
    println!("  Code:       {}", p.triplet);
    if verbose {
        println!(
            "  Encoded:    {:.4} {:.4} {:.4}",
            p.encoded[0], p.encoded[1], p.encoded[2]
        );
    }
    println!(
        "  Linear:     {:.6} {:.6} {:.6}",
        p.linear[0], p.linear[1], p.linear[2]
    );
    println!("  Luminance:  {:.6} ({:.2} nits)", p.luminance, p.nits);
    println!("  View:       {} @ {} nits", settings.mode, settings.peak.as_u32());

    for h in &p.highlights {
        match settings.mode {
            TransferMode::Oetf => {
                println!("  {:<5} input {:.6} -> signal {:.6}", h.tf.to_string(), h.point.x, h.point.y)
            }
            TransferMode::Eotf => {
                println!("  {:<5} signal {:.6} -> {:.2} nits", h.tf.to_string(), h.point.x, h.point.y)
            }
        }
    }
}

fn print_json(args: &ProbeArgs, p: &PixelProbe, settings: &ViewSettings) -> Result<()> {
    let highlights: Vec<_> = p
        .highlights
        .iter()
        .map(|h| json!({ "tf": h.tf.name(), "x": h.point.x, "y": h.point.y }))
        .collect();
    let doc = json!({
        "file": args.input.display().to_string(),
        "x": args.x,
        "y": args.y,
        "triplet": p.triplet,
        "linear": p.linear,
        "luminance": p.luminance,
        "nits": p.nits,
        "mode": settings.mode.to_string(),
        "peak_nits": settings.peak.as_u32(),
        "highlights": highlights,
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
