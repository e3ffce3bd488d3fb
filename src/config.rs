//! Plot configuration
//!
//! Describes which tables are plotted and how each series looks. The built-in defaults
//! match the lattice sizes produced by the simulation runs; a JSON file with the same
//! shape (camelCase keys) can replace them.

use crate::common::style::{Marker, SeriesColor, SeriesStyle};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", file.display())]
    FileRead {
        file: PathBuf,
        source: std::io::Error,
    },

    /// Also covers malformed style strings, which are validated during deserialization.
    #[error("Failed to parse config file: {0}")]
    Json(#[from] serde_json::Error),
}

type Result<T> = core::result::Result<T, ConfigError>;

/// One lattice size in the averages figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageSeriesConfig {
    pub lattice_size: u32,
    /// Number of trials averaged per data point; part of the file name
    pub trials: u32,
    pub style: SeriesStyle,
    /// Legend label; defaults to `L = {lattice_size}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl AverageSeriesConfig {
    pub fn new(lattice_size: u32, trials: u32, style: SeriesStyle) -> Self {
        Self {
            lattice_size,
            trials,
            style,
            label: None,
            enabled: true,
        }
    }

    /// Name of the averages file written by the simulation for this series
    pub fn file_name(&self) -> String {
        format!("Ave_L{}T{}.txt", self.lattice_size, self.trials)
    }

    pub fn display_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("L = {}", self.lattice_size))
    }
}

/// One occupation probability in a distribution figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbabilityConfig {
    pub probability: f64,
    pub style: SeriesStyle,
}

impl ProbabilityConfig {
    pub fn new(probability: f64, style: SeriesStyle) -> Self {
        Self { probability, style }
    }
}

/// Cluster size distribution figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionConfig {
    pub lattice_sizes: Vec<u32>,
    pub trials: u32,
    /// Probability at (or nearest to) the percolation threshold
    pub critical: ProbabilityConfig,
    /// Probabilities below the threshold, plotted together
    pub below: Vec<ProbabilityConfig>,
    /// Probabilities above the threshold, plotted together
    pub above: Vec<ProbabilityConfig>,
}

impl DistributionConfig {
    /// Name of the distribution file written by the simulation
    pub fn file_name(&self, probability: f64, lattice_size: u32) -> String {
        format!("Dist_p{}L{}T{}.txt", probability, lattice_size, self.trials)
    }
}

impl Default for DistributionConfig {
    fn default() -> Self {
        use Marker::*;
        use SeriesColor::*;

        let at = |probability, color, marker| {
            ProbabilityConfig::new(probability, SeriesStyle::new(color, marker))
        };

        Self {
            lattice_sizes: vec![10000],
            trials: 1000,
            critical: at(0.592746, Blue, Circle),
            below: vec![
                at(0.2, Yellow, TriangleUp),
                at(0.3, Red, Circle),
                at(0.4, Green, TriangleDown),
                at(0.5, Blue, Cross),
            ],
            above: vec![
                at(0.6, Yellow, TriangleUp),
                at(0.7, Red, Cross),
                at(0.8, Green, TriangleDown),
            ],
        }
    }
}

/// Complete plot configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotConfig {
    pub averages: Vec<AverageSeriesConfig>,
    #[serde(default)]
    pub distributions: DistributionConfig,
}

impl Default for PlotConfig {
    fn default() -> Self {
        use Marker::*;
        use SeriesColor::*;

        // Large lattice runs use fewer trials and are opt-in.
        let mut large =
            AverageSeriesConfig::new(1000, 10000, SeriesStyle::new(Yellow, TriangleDown));
        large.enabled = false;

        Self {
            averages: vec![
                AverageSeriesConfig::new(10, 100000, SeriesStyle::new(Red, TriangleUp)),
                AverageSeriesConfig::new(50, 100000, SeriesStyle::new(Blue, Square)),
                AverageSeriesConfig::new(100, 100000, SeriesStyle::new(Green, Circle)),
                large,
            ],
            distributions: DistributionConfig::default(),
        }
    }
}

impl PlotConfig {
    /// Series that will be plotted
    ///
    /// # Arguments
    /// * `include_disabled` - Also return series whose `enabled` flag is false
    pub fn active_averages(
        &self,
        include_disabled: bool,
    ) -> impl Iterator<Item = &AverageSeriesConfig> {
        self.averages
            .iter()
            .filter(move |series| include_disabled || series.enabled)
    }
}

fn default_enabled() -> bool {
    true
}

/// Parses a configuration from JSON text
pub fn parse_config(json: &str) -> Result<PlotConfig> {
    Ok(serde_json::from_str(json)?)
}

/// Loads a configuration file from disk
pub fn read_config(config_path: &Path) -> Result<PlotConfig> {
    let json = fs::read_to_string(config_path).map_err(|source| ConfigError::FileRead {
        file: config_path.to_path_buf(),
        source,
    })?;
    parse_config(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enables_three_lattice_sizes() {
        let config = PlotConfig::default();
        let names: Vec<String> = config
            .active_averages(false)
            .map(AverageSeriesConfig::file_name)
            .collect();

        assert_eq!(
            names,
            vec![
                "Ave_L10T100000.txt",
                "Ave_L50T100000.txt",
                "Ave_L100T100000.txt"
            ]
        );
    }

    #[test]
    fn include_disabled_adds_large_lattice() {
        let config = PlotConfig::default();
        let all: Vec<&AverageSeriesConfig> = config.active_averages(true).collect();

        assert_eq!(all.len(), 4);
        assert_eq!(all[3].file_name(), "Ave_L1000T10000.txt");
        assert_eq!(all[3].display_label(), "L = 1000");
        assert_eq!(all[3].style.to_string(), "yv");
    }

    #[test]
    fn default_styles_match_shorthand() {
        let styles: Vec<String> = PlotConfig::default()
            .averages
            .iter()
            .map(|series| series.style.to_string())
            .collect();
        assert_eq!(styles, vec!["r^", "bs", "go", "yv"]);
    }

    #[test]
    fn distribution_file_names_use_shortest_probability() {
        let config = DistributionConfig::default();
        assert_eq!(config.file_name(0.2, 10000), "Dist_p0.2L10000T1000.txt");
        assert_eq!(
            config.file_name(config.critical.probability, 10000),
            "Dist_p0.592746L10000T1000.txt"
        );
    }

    #[test]
    fn json_fills_defaults() {
        let config = parse_config(
            r#"{
                "averages": [
                    { "latticeSize": 20, "trials": 500, "style": "k^" },
                    { "latticeSize": 40, "trials": 500, "style": "mo", "label": "big", "enabled": false }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.averages.len(), 2);
        assert!(config.averages[0].enabled);
        assert_eq!(config.averages[0].display_label(), "L = 20");
        assert_eq!(config.averages[1].display_label(), "big");
        assert!(!config.averages[1].enabled);
        assert_eq!(config.distributions, DistributionConfig::default());
    }

    #[test]
    fn json_with_bad_style_is_rejected() {
        let result = parse_config(
            r#"{ "averages": [ { "latticeSize": 20, "trials": 500, "style": "r-" } ] }"#,
        );
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn default_config_survives_json() {
        let config = PlotConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(parse_config(&json).unwrap(), config);
    }

    #[test]
    fn missing_config_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_config(&dir.path().join("plots.json"));
        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }
}
