//! Common infrastructure shared by the figure builders
//!
//! This module provides reusable infrastructure for:
//! - In-memory tables and their schemas
//! - Series styles in two-letter shorthand
//! - Backend independent figures and rendering them to PNG
//! - Summary tables of the loaded data

pub mod data_structures;
pub mod figure;
pub mod plots;
pub mod style;
pub mod summary;

// Re-export commonly used items
pub use data_structures::{LoadedDistribution, LoadedSeries, Table, TableSchema};
pub use figure::{AxisScale, Figure, LegendPosition, Series};
pub use plots::PlotError;
pub use style::{SeriesStyle, StyleError};
