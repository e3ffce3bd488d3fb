//! Cluster size distribution figures
//!
//! For every lattice size three figures are drawn on a logarithmic `n` axis: the
//! probabilities below the percolation threshold, the critical probability on its own, and
//! the probabilities above the threshold.

use super::constants::S_AXIS;
use super::{FigureError, Result};
use crate::common::data_structures::{LoadedDistribution, DISTRIBUTION_SCHEMA};
use crate::common::figure::{AxisScale, Figure, LegendPosition, Series};
use crate::config::{DistributionConfig, ProbabilityConfig};
use crate::parsing::parse_table;
use std::path::Path;

/// All distribution tables of one lattice size
#[derive(Debug, Clone)]
pub struct DistributionSet {
    pub lattice_size: u32,
    pub below: Vec<LoadedDistribution>,
    pub critical: LoadedDistribution,
    pub above: Vec<LoadedDistribution>,
}

/// Reads every distribution table configured for a lattice size
pub fn load_distributions(
    config: &DistributionConfig,
    lattice_size: u32,
    input_dir: &Path,
) -> Result<DistributionSet> {
    let load = |entry: &ProbabilityConfig| -> Result<LoadedDistribution> {
        let path = input_dir.join(config.file_name(entry.probability, lattice_size));
        Ok(LoadedDistribution {
            probability: entry.probability,
            style: entry.style,
            table: parse_table(&path, &DISTRIBUTION_SCHEMA)?,
        })
    };

    Ok(DistributionSet {
        lattice_size,
        below: config.below.iter().map(&load).collect::<Result<_>>()?,
        critical: load(&config.critical)?,
        above: config.above.iter().map(&load).collect::<Result<_>>()?,
    })
}

/// Builds the below-threshold, critical and above-threshold figures of a lattice size
///
/// The below and above figures are skipped when no probabilities are configured for them.
/// The critical figure is always built and is named after its probability, e.g.
/// `dist_p059_L{L}` for `p = 0.592746`.
pub fn build_distribution_figures(set: &DistributionSet) -> Result<Vec<Figure>> {
    let lattice_size = set.lattice_size;
    let mut figures = Vec::with_capacity(3);

    if !set.below.is_empty() {
        figures.push(distribution_figure(
            format!("dist_below_L{}", lattice_size),
            format!("n(s, p, L={})", lattice_size),
            &set.below,
        )?);
    }

    figures.push(distribution_figure(
        critical_file_stem(set.critical.probability, lattice_size),
        format!("n(s, p={}, L={})", set.critical.probability, lattice_size),
        std::slice::from_ref(&set.critical),
    )?);

    if !set.above.is_empty() {
        figures.push(distribution_figure(
            format!("dist_above_L{}", lattice_size),
            format!("n(s, p, L={})", lattice_size),
            &set.above,
        )?);
    }

    Ok(figures)
}

/// `p` rounded to two decimals with the point dropped, so 0.592746 becomes `p059`
fn critical_file_stem(probability: f64, lattice_size: u32) -> String {
    let digits = format!("{:.2}", probability).replace('.', "");
    format!("dist_p{}_L{}", digits, lattice_size)
}

fn distribution_figure(
    file_stem: String,
    y_desc: String,
    distributions: &[LoadedDistribution],
) -> Result<Figure> {
    let mut figure = Figure::new(file_stem, S_AXIS, y_desc)
        .with_y_scale(AxisScale::Log10)
        .with_grid(true)
        .with_legend(LegendPosition::UpperRight);

    for distribution in distributions {
        let label = format!("p = {}", distribution.probability);
        let points = distribution
            .table
            .points("s", "n")
            .ok_or_else(|| FigureError::MissingColumn {
                label: label.clone(),
                column: "n",
            })?;
        figure.push_series(Series::new(label, distribution.style, points));
    }

    Ok(figure)
}
