//! Backend independent description of a chart
//!
//! A [`Figure`] holds everything needed to draw a chart: axis descriptions, scale and
//! the series with their points. Building figures is kept separate from drawing them
//! so the content of a chart can be inspected without rendering.

use crate::common::style::SeriesStyle;

/// Scale of the y axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisScale {
    #[default]
    Linear,
    /// Base 10 logarithmic scale. Non-positive values cannot be placed and are skipped.
    Log10,
}

impl AxisScale {
    /// Whether a value can be placed on an axis with this scale
    pub fn accepts(self, value: f64) -> bool {
        match self {
            AxisScale::Linear => value.is_finite(),
            AxisScale::Log10 => value.is_finite() && value > 0.0,
        }
    }
}

/// Corner of the chart that holds the legend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendPosition {
    #[default]
    UpperLeft,
    UpperRight,
}

/// A labeled set of points drawn with a single marker style
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub style: SeriesStyle,
    /// Points in the order they appear in the source table
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(label: impl Into<String>, style: SeriesStyle, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            style,
            points,
        }
    }
}

/// A chart with shared axes and any number of overlaid series
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Output file name without extension
    pub file_stem: String,
    pub x_desc: String,
    pub y_desc: String,
    pub y_scale: AxisScale,
    pub grid: bool,
    /// Legend corner, or `None` to draw the chart without a legend
    pub legend: Option<LegendPosition>,
    pub series: Vec<Series>,
}

impl Figure {
    pub fn new(
        file_stem: impl Into<String>,
        x_desc: impl Into<String>,
        y_desc: impl Into<String>,
    ) -> Self {
        Self {
            file_stem: file_stem.into(),
            x_desc: x_desc.into(),
            y_desc: y_desc.into(),
            y_scale: AxisScale::Linear,
            grid: false,
            legend: Some(LegendPosition::UpperLeft),
            series: Vec::new(),
        }
    }

    pub fn with_y_scale(mut self, scale: AxisScale) -> Self {
        self.y_scale = scale;
        self
    }

    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_legend(mut self, legend: LegendPosition) -> Self {
        self.legend = Some(legend);
        self
    }

    pub fn without_legend(mut self) -> Self {
        self.legend = None;
        self
    }

    pub fn push_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Total number of points across all series
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|series| series.points.len()).sum()
    }

    pub fn series_labels(&self) -> Vec<&str> {
        self.series.iter().map(|series| series.label.as_str()).collect()
    }

    /// Points that can be placed on the chart's axes
    pub fn drawable_points<'a>(
        &self,
        series: &'a Series,
    ) -> impl Iterator<Item = (f64, f64)> + 'a {
        let y_scale = self.y_scale;
        series
            .points
            .iter()
            .copied()
            .filter(move |&(x, y)| x.is_finite() && y_scale.accepts(y))
    }

    /// Range of the drawable data along both axes, padded for display
    ///
    /// # Returns
    /// `((x_min, x_max), (y_min, y_max))` with `min < max` on both axes. A figure without
    /// drawable points gets a unit range.
    pub fn axis_ranges(&self) -> ((f64, f64), (f64, f64)) {
        let mut x_bounds: Option<(f64, f64)> = None;
        let mut y_bounds: Option<(f64, f64)> = None;

        for series in &self.series {
            for (x, y) in self.drawable_points(series) {
                x_bounds = Some(extend(x_bounds, x));
                y_bounds = Some(extend(y_bounds, y));
            }
        }

        let x_range = pad_linear(x_bounds.unwrap_or((0.0, 1.0)));
        let y_range = match self.y_scale {
            AxisScale::Linear => pad_linear(y_bounds.unwrap_or((0.0, 1.0))),
            AxisScale::Log10 => pad_log(y_bounds.unwrap_or((1.0, 10.0))),
        };

        (x_range, y_range)
    }
}

/// Fraction of the data span added on each side of an axis
const AXIS_MARGIN: f64 = 0.05;

fn extend(bounds: Option<(f64, f64)>, value: f64) -> (f64, f64) {
    match bounds {
        Some((min, max)) => (min.min(value), max.max(value)),
        None => (value, value),
    }
}

fn pad_linear((min, max): (f64, f64)) -> (f64, f64) {
    if min >= max {
        let half = if min == 0.0 { 0.5 } else { min.abs() * 0.5 };
        return (min - half, max + half);
    }

    let margin = (max - min) * AXIS_MARGIN;
    (min - margin, max + margin)
}

fn pad_log((min, max): (f64, f64)) -> (f64, f64) {
    let (log_min, log_max) = (min.log10(), max.log10());
    if log_min >= log_max {
        return (min / 10.0, max * 10.0);
    }

    let margin = (log_max - log_min) * AXIS_MARGIN;
    (10f64.powf(log_min - margin), 10f64.powf(log_max + margin))
}
