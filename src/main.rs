//! wcag-cube - compute which colors of an RGB cube slice meet a WCAG contrast ratio.

mod export;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cube_core::config::{
    parse_threshold, DEFAULT_MIN_CONTRAST, DEFAULT_SCALE, MAX_CONTRAST, MAX_SCALE,
};
use cube_core::{render_slice, ContrastEngine, ContrastLevel, ReferenceSet, Rgb, SliceParams};

use report::{format_probe, parse_cell, Report};

/// Show which background colors of a red slice of the RGB cube reach a
/// minimum WCAG contrast ratio against 1-3 reference colors.
#[derive(Parser, Debug)]
#[command(name = "wcag-cube")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Fixed red channel value of the slice
    #[arg(short, long, default_value_t = 0)]
    red: u8,

    /// Minimum contrast ratio
    #[arg(short, long, value_parser = parse_threshold, conflicts_with = "level")]
    threshold: Option<f64>,

    /// WCAG level preset (aa-large, aa, aaa-large, aaa)
    #[arg(short, long, value_parser = parse_level)]
    level: Option<ContrastLevel>,

    /// Reference color as #rrggbb (repeat up to 3 times)
    #[arg(short, long = "color", default_value = "#ffffff")]
    colors: Vec<Rgb>,

    /// Write the slice as PNG (failing cells transparent)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Nearest-neighbor scale factor for PNG output
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_SCALE,
        value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE as i64)
    )]
    scale: u32,

    /// Report contrast details for one cell, given as G,B
    #[arg(short, long, value_parser = parse_cell)]
    probe: Option<(u8, u8)>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_level(s: &str) -> Result<ContrastLevel, String> {
    ContrastLevel::from_name(s).ok_or_else(|| format!("unknown level '{}'", s))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let min_contrast = match (args.threshold, args.level) {
        (Some(threshold), _) => threshold,
        (None, Some(level)) => {
            info!("Using WCAG {} threshold", level);
            level.min_contrast()
        }
        (None, None) => DEFAULT_MIN_CONTRAST,
    };

    if min_contrast > MAX_CONTRAST {
        warn!(
            "Threshold {} exceeds the maximum contrast ratio {}; no color can pass",
            min_contrast, MAX_CONTRAST
        );
    }

    let references =
        ReferenceSet::from_colors(&args.colors).context("Invalid reference colors")?;
    let params = SliceParams::new(args.red, min_contrast);

    let engine = ContrastEngine::new();
    let (image, summary) = render_slice(&engine, &params, &references)?;

    info!("{}", summary);

    let probe = args
        .probe
        .map(|(g, b)| engine.probe(args.red, g, b, &references));

    if args.json {
        let report = Report { summary, probe };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} of {} colors pass ({:.1}%)",
            summary.passing,
            summary.total,
            summary.fraction * 100.0
        );
        if let Some(probe) = &probe {
            print!("{}", format_probe(probe, min_contrast));
        }
    }

    if let Some(output) = &args.output {
        export::write_png(&image, args.scale, output)?;
        info!("Generated: {}", output.display());
    }

    Ok(())
}
