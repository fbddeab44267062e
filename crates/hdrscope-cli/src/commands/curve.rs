//! Transfer curve sampling command.
//!
//! Prints one `(x, y)` table per curve. In the OETF view x is relative
//! linear light and y is signal; in the EOTF view x is signal and y is
//! display nits.

use crate::CurveArgs;
use anyhow::{bail, Result};
use serde_json::json;

use hdrscope_core::{TransferMode, ViewSettings};
use hdrscope_transfer::{curve, CurvePoint, SampleGrid, TransferFunction};

/// Resolves the `--tf` argument into the curves to sample.
fn selected(tf: &str) -> Result<Vec<TransferFunction>> {
    if tf.eq_ignore_ascii_case("all") {
        return Ok(TransferFunction::ALL.to_vec());
    }
    tf.split(',')
        .map(|name| Ok(name.trim().parse::<TransferFunction>()?))
        .collect()
}

fn grid_for(args: &CurveArgs, tf: TransferFunction, settings: &ViewSettings) -> Result<SampleGrid> {
    let (lo, hi) = tf.default_domain(settings);
    let grid = match (args.start, args.end) {
        (None, None) => SampleGrid::for_function(tf, settings, args.points)?,
        (start, end) => SampleGrid::linear(start.unwrap_or(lo), end.unwrap_or(hi), args.points)?,
    };
    Ok(grid)
}

/// Runs the curve command.
pub fn run(args: CurveArgs, settings: ViewSettings, verbose: bool) -> Result<()> {
    let settings = super::apply_overrides(settings, &args.view)?;
    let tfs = selected(&args.tf)?;
    if tfs.is_empty() {
        bail!("No transfer function selected");
    }

    let mut curves = Vec::with_capacity(tfs.len());
    for tf in tfs {
        let grid = grid_for(&args, tf, &settings)?;
        curves.push((tf, curve::sample(tf, &grid, &settings)?));
    }

    if args.json {
        print_json(&curves, &settings)?;
    } else {
        print_text(&curves, &settings, verbose);
    }
    Ok(())
}

fn axis_labels(mode: TransferMode) -> (&'static str, &'static str) {
    match mode {
        TransferMode::Oetf => ("linear", "signal"),
        TransferMode::Eotf => ("signal", "nits"),
    }
}

fn print_text(curves: &[(TransferFunction, Vec<CurvePoint>)], settings: &ViewSettings, verbose: bool) {
    let (xl, yl) = axis_labels(settings.mode);
    for (idx, (tf, points)) in curves.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        println!("{} ({}) {}", tf, tf.standard(), settings.mode);
        if verbose && *tf == TransferFunction::Hlg {
            // resolved_gamma was validated by apply_overrides
            if let Ok(gamma) = settings.resolved_gamma() {
                println!("  peak {} nits, system gamma {:.4}", settings.peak.as_u32(), gamma);
            }
        }
        println!("  {:>12}  {:>12}", xl, yl);
        for p in points {
            println!("  {:>12.6}  {:>12.6}", p.x, p.y);
        }
    }
}

fn print_json(curves: &[(TransferFunction, Vec<CurvePoint>)], settings: &ViewSettings) -> Result<()> {
    let body: Vec<_> = curves
        .iter()
        .map(|(tf, points)| {
            json!({
                "tf": tf.name(),
                "standard": tf.standard(),
                "points": points.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
            })
        })
        .collect();
    let doc = json!({
        "mode": settings.mode.to_string(),
        "peak_nits": settings.peak.as_u32(),
        "curves": body,
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tf_selection() {
        assert_eq!(selected("all").unwrap(), TransferFunction::ALL.to_vec());
        assert_eq!(
            selected("pq, hlg").unwrap(),
            vec![TransferFunction::Pq, TransferFunction::Hlg]
        );
        assert!(selected("gamma22").is_err());
    }
}
