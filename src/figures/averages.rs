//! Flow probability and largest cluster figures
//!
//! Every lattice size contributes one series to each of the two figures. Both figures share
//! the occupation probability `p` as x axis and use the same marker style per lattice size.

use super::constants::*;
use super::{FigureError, Result};
use crate::common::data_structures::{LoadedSeries, AVERAGES_SCHEMA};
use crate::common::figure::{Figure, Series};
use crate::config::PlotConfig;
use crate::parsing::parse_table;
use std::path::Path;

/// The two figures built from the averages tables
#[derive(Debug, Clone, PartialEq)]
pub struct AverageFigures {
    /// `P_flow` versus `p`
    pub flow: Figure,
    /// `<s_max>` versus `p`
    pub max_cluster: Figure,
}

impl AverageFigures {
    pub fn into_vec(self) -> Vec<Figure> {
        vec![self.flow, self.max_cluster]
    }
}

/// Reads the averages table of every active series in configuration order
///
/// # Arguments
/// * `config` - Plot configuration naming the series
/// * `input_dir` - Directory holding the `Ave_L{L}T{T}.txt` files
/// * `include_disabled` - Also load series whose `enabled` flag is false
///
/// # Returns
/// * `Ok(Vec<LoadedSeries>)` - One entry per active series
/// * `Err(FigureError)` - On the first table that is missing or malformed
pub fn load_average_series(
    config: &PlotConfig,
    input_dir: &Path,
    include_disabled: bool,
) -> Result<Vec<LoadedSeries>> {
    config
        .active_averages(include_disabled)
        .map(|series| -> Result<LoadedSeries> {
            let table = parse_table(&input_dir.join(series.file_name()), &AVERAGES_SCHEMA)?;
            Ok(LoadedSeries {
                label: series.display_label(),
                style: series.style,
                table,
            })
        })
        .collect()
}

/// Builds the flow probability and largest cluster figures
///
/// Series are added in the order given; each holds exactly one point per table row.
pub fn build_average_figures(series: &[LoadedSeries]) -> Result<AverageFigures> {
    let mut flow = Figure::new(FLOW_FIGURE_STEM, P_AXIS, P_FLOW_AXIS);
    let mut max_cluster = Figure::new(MAX_CLUSTER_FIGURE_STEM, P_AXIS, S_MAX_AXIS);

    for loaded in series {
        flow.push_series(series_for(loaded, "p_flow")?);
        max_cluster.push_series(series_for(loaded, "s_max")?);
    }

    log::debug!(
        "Built average figures with {} series and {} points each",
        flow.series.len(),
        flow.point_count()
    );

    Ok(AverageFigures { flow, max_cluster })
}

fn series_for(loaded: &LoadedSeries, column: &'static str) -> Result<Series> {
    let points = loaded
        .table
        .points("p", column)
        .ok_or_else(|| FigureError::MissingColumn {
            label: loaded.label.clone(),
            column,
        })?;

    Ok(Series::new(loaded.label.clone(), loaded.style, points))
}
