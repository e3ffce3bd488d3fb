//! Per-series summary and ASCII table formatting
//!
//! Gives a quick look at what was loaded before the charts are opened: how many rows each
//! table had, the probability range it covers and the largest values it reached.

use crate::common::data_structures::LoadedSeries;
use tabled::{Table, Tabled};

/// Summary of one loaded averages table
#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct SeriesSummary {
    #[tabled(rename = "Series")]
    pub label: String,
    #[tabled(rename = "Rows")]
    pub rows: usize,
    /// Smallest and largest `p`, e.g. `0.000-1.000`
    #[tabled(rename = "p range")]
    pub p_range: String,
    #[tabled(rename = "max P_flow")]
    pub max_flow: String,
    #[tabled(rename = "max <s_max>")]
    pub max_cluster: String,
}

/// Summarizes every loaded series, in input order
pub fn summarize(series: &[LoadedSeries]) -> Vec<SeriesSummary> {
    series
        .iter()
        .map(|loaded| {
            let table = &loaded.table;
            let p = table.column("p").unwrap_or_default();

            SeriesSummary {
                label: loaded.label.clone(),
                rows: table.row_count(),
                p_range: match (min(p), max(p)) {
                    (Some(low), Some(high)) => format!("{:.3}-{:.3}", low, high),
                    _ => "-".to_string(),
                },
                max_flow: format_max(table.column("p_flow").unwrap_or_default(), 4),
                max_cluster: format_max(table.column("s_max").unwrap_or_default(), 2),
            }
        })
        .collect()
}

/// Formats series summaries as an ASCII table using the [`tabled`] crate
///
/// # Arguments
/// * `summaries` - A slice of [`SeriesSummary`] to format
/// * `title` - Optional title for the table
pub fn format_summary_table(summaries: &[SeriesSummary], title: Option<&str>) -> String {
    if summaries.is_empty() {
        return "No series loaded".to_string();
    }

    let table = Table::new(summaries).to_string();

    if let Some(title) = title {
        format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
    } else {
        table
    }
}

// NaN rows are ignored, matching how they are left out of the charts.
fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().filter(|v| !v.is_nan()).reduce(f64::min)
}

fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().filter(|v| !v.is_nan()).reduce(f64::max)
}

fn format_max(values: &[f64], precision: usize) -> String {
    max(values).map_or_else(|| "-".to_string(), |value| format!("{:.*}", precision, value))
}
