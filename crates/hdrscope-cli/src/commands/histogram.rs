//! Histogram command.
//!
//! Decodes a PNG, bins R, G, B and luminance in linear light and prints a
//! text chart (or the raw percentages as JSON).

use crate::HistogramArgs;
use anyhow::Result;
use std::time::Instant;
use tracing::info;

use hdrscope_core::{BinScale, ViewSettings};
use hdrscope_ops::{Histogram, HistogramEngine, Series};

/// Runs the histogram command.
pub fn run(args: HistogramArgs, settings: ViewSettings, verbose: bool) -> Result<()> {
    let scale = args.scale.unwrap_or(settings.bin_scale);
    let raster = super::load_raster(&args.input)?;
    let engine = HistogramEngine::new(args.bins)?;

    let start = Instant::now();
    let hist = if args.parallel {
        engine.calculate_par(&raster.view())?
    } else {
        engine.calculate(&raster.view())?
    };
    info!(
        pixels = hist.pixel_count(),
        bins = hist.bin_count(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "histogram ready"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&hist)?);
        return Ok(());
    }

    println!(
        "{} ({}x{}, {} bins, {} scale)",
        args.input.display(),
        raster.width(),
        raster.height(),
        hist.bin_count(),
        scale_name(scale)
    );
    for series in Series::ALL {
        println!();
        print_chart(&hist, series, scale, args.width, verbose);
    }
    Ok(())
}

fn scale_name(scale: BinScale) -> &'static str {
    match scale {
        BinScale::Linear => "linear",
        BinScale::Log => "log",
        BinScale::Sqrt => "sqrt",
    }
}

/// Bar lengths for a scaled series, relative to the scaled peak.
fn bar_lengths(values: &[f64], width: usize) -> Vec<usize> {
    let peak = values.iter().copied().fold(0.0, f64::max);
    if peak <= 0.0 {
        return vec![0; values.len()];
    }
    values
        .iter()
        .map(|&v| {
            let len = (v / peak * width as f64).round() as usize;
            // keep any occupied bin visible
            if v > 0.0 { len.max(1) } else { 0 }
        })
        .collect()
}

fn print_chart(hist: &Histogram, series: Series, scale: BinScale, width: usize, verbose: bool) {
    let raw = hist.series(series);
    let bars = bar_lengths(&hist.scaled(series, scale), width);
    println!("{}", series.name());
    for (i, (&pct, &len)) in raw.iter().zip(bars.iter()).enumerate() {
        // empty bins only shown in verbose mode
        if len == 0 && !verbose {
            continue;
        }
        let (lo, hi) = hist.bin_range(i);
        println!(
            "  [{:.3}, {:.3})  {:>7.3}%  {}",
            lo,
            hi,
            pct,
            "#".repeat(len)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_scale_to_peak() {
        assert_eq!(bar_lengths(&[0.0, 25.0, 50.0], 10), vec![0, 5, 10]);
        assert_eq!(bar_lengths(&[0.0, 0.0], 10), vec![0, 0]);
    }

    #[test]
    fn tiny_bins_stay_visible() {
        assert_eq!(bar_lengths(&[0.01, 100.0], 20), vec![1, 20]);
    }
}
