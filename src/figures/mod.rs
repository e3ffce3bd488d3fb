//! Domain specific figure builders
//!
//! This module turns loaded simulation tables into [`Figure`](crate::common::figure::Figure)s:
//! - Flow probability and largest cluster size versus occupation probability
//! - Cluster size distributions below, at and above the percolation threshold

pub mod averages;
pub mod constants;
pub mod distributions;

use crate::parsing::ParsingError;
use thiserror::Error;

// Re-export figure builders for convenience
pub use averages::{build_average_figures, load_average_series, AverageFigures};
pub use distributions::{build_distribution_figures, load_distributions, DistributionSet};

/// Errors that can occur while loading tables or building figures
#[derive(Error, Debug)]
pub enum FigureError {
    #[error("Failed to load table: {0}")]
    Parsing(#[from] ParsingError),

    #[error("Table for '{label}' has no '{column}' column")]
    MissingColumn { label: String, column: &'static str },
}

type Result<T> = core::result::Result<T, FigureError>;
