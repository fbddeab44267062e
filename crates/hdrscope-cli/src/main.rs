//! hdrscope - HDR transfer curve and luminance histogram inspector
//!
//! Plots sRGB, PQ and HLG curves, builds linear-light histograms of PNG
//! images and reports where a pixel lands on each curve.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use hdrscope_core::{BinScale, HlgSceneScale, PeakBrightness, SystemGamma, TransferMode};
use hdrscope_io::PatternKind;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "hdrscope")]
#[command(author, version, about = "HDR transfer curve and histogram inspector")]
#[command(long_about = "
Inspect how sRGB, PQ (SMPTE ST 2084) and HLG (ITU-R BT.2100) map light to
signal, and how an image's light is distributed.

Examples:
  hdrscope curve --tf all                      # All three OETFs
  hdrscope curve --tf pq --mode eotf --json    # PQ signal -> nits
  hdrscope curve --tf hlg --mode eotf --peak 4000
  hdrscope histogram frame.png --scale log     # Linear-light histogram
  hdrscope probe frame.png -x 120 -y 64        # Readout for one pixel
  hdrscope pattern bars -o bars.png -w 640 -H 360
  hdrscope --config view.yaml curve --tf hlg
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// View settings file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample transfer curves
    #[command(visible_alias = "c")]
    Curve(CurveArgs),

    /// Linear-light R, G, B and luminance histogram of an image
    #[command(visible_alias = "h")]
    Histogram(HistogramArgs),

    /// Curve readout for one pixel
    #[command(visible_alias = "p")]
    Probe(ProbeArgs),

    /// Write a synthetic test pattern
    Pattern(PatternArgs),
}

/// Overrides applied on top of the settings file.
#[derive(Args, Clone, Default)]
struct ViewArgs {
    /// Display peak brightness in nits (100, 200, 400, 600, 1000, 2000, 4000, 10000)
    #[arg(long)]
    peak: Option<PeakBrightness>,

    /// View direction: oetf (light -> signal) or eotf (signal -> nits)
    #[arg(short, long)]
    mode: Option<TransferMode>,

    /// HLG system gamma: a number, or "adaptive" for the BT.2100 peak-dependent value
    #[arg(long)]
    gamma: Option<SystemGamma>,

    /// HLG input convention: nominal (1.0 = peak) or reference (1.0 = 100 nits, 12.0 = peak)
    #[arg(long)]
    hlg_scale: Option<HlgScaleArg>,
}

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
enum HlgScaleArg {
    Nominal,
    Reference,
}

impl From<HlgScaleArg> for HlgSceneScale {
    fn from(arg: HlgScaleArg) -> Self {
        match arg {
            HlgScaleArg::Nominal => HlgSceneScale::NominalPeak,
            HlgScaleArg::Reference => HlgSceneScale::ReferenceWhite,
        }
    }
}

#[derive(Args)]
struct CurveArgs {
    /// Transfer function: srgb, pq, hlg or all
    #[arg(short, long, default_value = "all")]
    tf: String,

    /// Number of samples per curve
    #[arg(short = 'n', long, default_value = "11")]
    points: usize,

    /// Domain start (defaults to the curve's natural domain)
    #[arg(long, allow_hyphen_values = true)]
    start: Option<f64>,

    /// Domain end (defaults to the curve's natural domain)
    #[arg(long, allow_hyphen_values = true)]
    end: Option<f64>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    view: ViewArgs,
}

#[derive(Args)]
struct HistogramArgs {
    /// Input PNG
    input: PathBuf,

    /// Number of bins
    #[arg(short, long, default_value = "100")]
    bins: usize,

    /// Bar scale: linear, log or sqrt
    #[arg(short, long)]
    scale: Option<BinScale>,

    /// Chart width in characters
    #[arg(long, default_value = "60")]
    width: usize,

    /// Print JSON instead of a chart
    #[arg(long)]
    json: bool,

    /// Split the pass across threads
    #[arg(long)]
    parallel: bool,
}

#[derive(Args)]
struct ProbeArgs {
    /// Input PNG
    input: PathBuf,

    /// Pixel column
    #[arg(short)]
    x: u32,

    /// Pixel row
    #[arg(short)]
    y: u32,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    view: ViewArgs,
}

#[derive(Args)]
struct PatternArgs {
    /// Pattern: ramp, solid, bars or steps
    kind: PatternKind,

    /// Output PNG
    #[arg(short, long)]
    output: PathBuf,

    /// Width in pixels
    #[arg(short, long, default_value = "512")]
    width: u32,

    /// Height in pixels
    #[arg(short = 'H', long, default_value = "256")]
    height: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _guard = logging::init(cli.verbose, cli.log_file.as_deref())?;

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let settings = commands::load_settings(cli.config.as_deref())?;
    let verbose = cli.verbose > 0;

    match cli.command {
        Commands::Curve(args) => commands::curve::run(args, settings, verbose),
        Commands::Histogram(args) => commands::histogram::run(args, settings, verbose),
        Commands::Probe(args) => commands::probe::run(args, settings, verbose),
        Commands::Pattern(args) => commands::pattern::run(args, verbose),
    }
}
