//! # percolation-plots
//! Charts for precomputed percolation simulation statistics.
//!
//! The simulation writes whitespace delimited tables of flow probability and largest cluster
//! size per occupation probability, one file per lattice size. This crate reads those tables,
//! overlays the lattice sizes on shared axes and renders the result as PNG charts.

/// Tables, styles, figures and rendering.
pub mod common;

/// Which tables are plotted and how each series looks.
pub mod config;

/// Builders for the averages and distribution figures.
pub mod figures;

/// Reading whitespace delimited simulation output.
pub mod parsing;
