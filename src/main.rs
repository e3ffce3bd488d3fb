use argh::FromArgs;
use indicatif::{ProgressBar, ProgressStyle};
use percolation_plots::common::plots::render_figure;
use percolation_plots::common::summary::{format_summary_table, summarize};
use percolation_plots::common::PlotError;
use percolation_plots::config::{read_config, ConfigError, PlotConfig};
use percolation_plots::figures::{
    build_average_figures, build_distribution_figures, load_average_series, load_distributions,
    FigureError,
};
use std::path::PathBuf;
use thiserror::Error;

/// Renders percolation statistics tables as PNG scatter charts. Charts are written to the
/// output directory and no window is opened; the program exits once every chart is saved.
#[derive(FromArgs, Debug)]
pub struct Args {
    /// directory holding the Ave_* and Dist_* tables (default: output/ next to Cargo.toml)
    #[argh(option, short = 'i')]
    input: Option<PathBuf>,

    /// directory the charts are written to (default: current directory)
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    output: PathBuf,

    /// JSON plot configuration replacing the built-in series
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,

    /// also plot series that are disabled in the configuration
    #[argh(switch, short = 'a')]
    all: bool,

    /// render the cluster size distribution charts
    #[argh(switch, short = 'd')]
    distributions: bool,

    /// print a summary table of the loaded series
    #[argh(switch, short = 's')]
    summary: bool,
}

/// Errors that can stop a run
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Input directory does not exist: {}", .0.display())]
    InputDirectory(PathBuf),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Figure error: {0}")]
    Figure(#[from] FigureError),

    #[error("Plot error: {0}")]
    Plot(#[from] PlotError),
}

type Result<T> = core::result::Result<T, AppError>;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    if let Err(error) = run(&args) {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => read_config(path)?,
        None => PlotConfig::default(),
    };

    let input_dir = args.input.clone().unwrap_or_else(default_input_dir);
    if !input_dir.is_dir() {
        return Err(AppError::InputDirectory(input_dir));
    }

    log::debug!("Reading tables from {}", input_dir.display());
    let series = load_average_series(&config, &input_dir, args.all)?;

    if args.summary {
        println!(
            "{}",
            format_summary_table(&summarize(&series), Some("Loaded Series"))
        );
    }

    let mut figures = build_average_figures(&series)?.into_vec();

    if args.distributions {
        for &lattice_size in &config.distributions.lattice_sizes {
            let set = load_distributions(&config.distributions, lattice_size, &input_dir)?;
            figures.extend(build_distribution_figures(&set)?);
        }
    }

    let progress = ProgressBar::new(figures.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:42.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let mut written = Vec::with_capacity(figures.len());
    for figure in &figures {
        progress.set_message(figure.file_stem.clone());
        written.push(render_figure(figure, &args.output)?);
        progress.inc(1);
    }
    progress.finish_and_clear();

    for path in written {
        println!("Saved chart: {}", path.display());
    }

    Ok(())
}

/// Tables are looked up in `output/` next to the crate, where the simulation writes them.
fn default_input_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("output")
}
