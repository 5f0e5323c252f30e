//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - installs logging
//! - runs the merge pipeline
//! - prints results/plots
//! - writes optional exports

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, DemoArgs, MergeArgs, OutputArgs, PlotArgs};
use crate::domain::{CurveSource, MergeConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `keymerge` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Demo(args) => handle_merge(demo_config_from_args(&args)),
        Command::Merge(args) => handle_merge(merge_config_from_args(&args)),
        Command::Plot(args) => handle_plot(args),
    }
}

/// `RUST_LOG` wins; otherwise `warn`, or `debug` with `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn handle_merge(config: MergeConfig) -> Result<(), AppError> {
    let run = pipeline::run_merge(&config)?;
    let report = run.report();

    print!("{}", crate::report::format_merge_summary(&report));
    println!();
    println!("{}", crate::report::format_merge_stats(&report));

    if config.plot {
        let plot = crate::plot::render_ascii_plot(&run.merged, config.plot_width, config.plot_height);
        println!();
        print!("{plot}");
    }

    if let Some(path) = &config.export_curve {
        crate::io::curve::write_curve_json(path, &run.merged)?;
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let curve = crate::io::curve::read_curve_json(&args.curve)?;
    let plot = crate::plot::render_ascii_plot(&curve, args.width, args.height);

    print!("{plot}");
    Ok(())
}

pub fn demo_config_from_args(args: &DemoArgs) -> MergeConfig {
    config_with_source(CurveSource::Demo { delta: args.delta }, &args.output)
}

pub fn merge_config_from_args(args: &MergeArgs) -> MergeConfig {
    config_with_source(
        CurveSource::Files {
            inserted: args.inserted.clone(),
            next: args.next.clone(),
        },
        &args.output,
    )
}

fn config_with_source(source: CurveSource, output: &OutputArgs) -> MergeConfig {
    MergeConfig {
        source,
        plot: output.plot,
        plot_width: output.width,
        plot_height: output.height,
        export_curve: output.export.clone(),
    }
}
