//! Command-line parsing for the keyframe curve merger.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the merge code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "keymerge", version, about = "Sum overlapping keyframe curves")]
pub struct Cli {
    /// Enable debug logging (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge the built-in envelope with a time-shifted copy of itself.
    Demo(DemoArgs),
    /// Merge two curve JSON files.
    Merge(MergeArgs),
    /// Plot a curve JSON file.
    Plot(PlotArgs),
}

/// Output options shared by `demo` and `merge`.
#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    /// Render an ASCII plot of the merged curve.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export the merged curve to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct DemoArgs {
    /// Time offset of the second envelope.
    #[arg(short, long, default_value_t = 9.0, allow_negative_numbers = true)]
    pub delta: f64,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args, Clone)]
pub struct MergeArgs {
    /// Curve already in place (JSON array of `[time, value]` pairs).
    #[arg(long, value_name = "JSON")]
    pub inserted: PathBuf,

    /// Curve to merge in; must not start before `--inserted`.
    #[arg(long, value_name = "JSON")]
    pub next: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options for plotting a saved curve.
#[derive(Debug, Args)]
pub struct PlotArgs {
    /// Curve JSON file, e.g. produced by `keymerge merge --export`.
    #[arg(long, value_name = "JSON")]
    pub curve: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}
