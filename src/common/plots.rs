//! Plotting infrastructure for scatter charts
//!
//! This module renders [`Figure`]s using the [`plotters`] crate. Charts are saved as PNG
//! files with fixed 1200x800 resolution. Every series is drawn as markers only, without
//! connecting lines, and is listed with its glyph in the legend when the figure has one.

use crate::common::figure::{AxisScale, Figure, LegendPosition, Series};
use crate::common::style::Marker;
use plotters::coord::ranged1d::ValueFormatter;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Resolution of every chart in pixels
pub const CHART_SIZE: (u32, u32) = (1200, 800);

/// Horizontal offset of a legend glyph from the legend entry's anchor
const LEGEND_GLYPH_OFFSET: i32 = 10;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Renders a figure and saves it as `<output_dir>/<file_stem>.png`
///
/// # Arguments
/// * `figure` - The chart to draw
/// * `output_dir` - Directory where the PNG file should be saved; created if missing
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the written PNG file
/// * `Err(PlotError)` - If the figure has no series or drawing failed
///
/// # Headless Compatibility
/// Uses plotters' bitmap backend, so no display is required. Text is rendered with the
/// `ttf` feature, which needs a `sans-serif` font to be installed.
pub fn render_figure(figure: &Figure, output_dir: &Path) -> Result<PathBuf> {
    if figure.series.is_empty() {
        return Err(PlotError::InvalidData(format!(
            "Figure '{}' has no series",
            figure.file_stem
        )));
    }

    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join(format!("{}.png", figure.file_stem));
    create_headless_scatter_plot(figure, &output_path)?;

    log::debug!("Wrote {}", output_path.display());
    Ok(output_path)
}

/// Draws a figure into a 1200x800 PNG at `output_path`
fn create_headless_scatter_plot(figure: &Figure, output_path: &Path) -> Result<()> {
    let root = BitMapBackend::new(output_path, CHART_SIZE);
    let drawing_area = root.into_drawing_area();

    draw_figure(&drawing_area, figure)?;

    // Ensure everything is properly rendered and saved
    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Draws a figure onto any drawing area, choosing the y axis coordinate type from its scale
pub fn draw_figure<DB: DrawingBackend>(
    drawing_area: &DrawingArea<DB, Shift>,
    figure: &Figure,
) -> Result<()> {
    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let ((x_min, x_max), (y_min, y_max)) = figure.axis_ranges();

    let mut builder = ChartBuilder::on(drawing_area);
    builder
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85);

    match figure.y_scale {
        AxisScale::Linear => {
            let mut chart = builder
                .build_cartesian_2d(x_min..x_max, y_min..y_max)
                .map_err(|e| PlotError::ChartConfig(e.to_string()))?;
            draw_contents(&mut chart, figure)?;
        }
        AxisScale::Log10 => {
            let mut chart = builder
                .build_cartesian_2d(x_min..x_max, (y_min..y_max).log_scale())
                .map_err(|e| PlotError::ChartConfig(e.to_string()))?;
            draw_contents(&mut chart, figure)?;
        }
    }

    Ok(())
}

/// Draws the mesh, every series and the legend onto an already configured chart
fn draw_contents<'a, DB, X, Y>(
    chart: &mut ChartContext<'a, DB, Cartesian2d<X, Y>>,
    figure: &Figure,
) -> Result<()>
where
    DB: DrawingBackend + 'a,
    X: Ranged<ValueType = f64> + ValueFormatter<f64>,
    Y: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    {
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(figure.x_desc.as_str())
            .y_desc(figure.y_desc.as_str())
            .axis_desc_style(("sans-serif", 30))
            .label_style(("sans-serif", 22));

        if !figure.grid {
            mesh.disable_mesh();
        }

        mesh.draw().map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    for series in &figure.series {
        draw_markers(chart, series, figure.drawable_points(series))?;
    }

    let Some(legend) = figure.legend else {
        return Ok(());
    };

    // Legend text is measured with the font directly, never through the backend.
    chart
        .configure_series_labels()
        .position(match legend {
            LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
            LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
        })
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .label_font(("sans-serif", 22))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Draws one series as markers only and registers its legend entry
///
/// Each marker gets its own element type, used both for the chart points and for the
/// legend glyph.
fn draw_markers<'a, DB, X, Y>(
    chart: &mut ChartContext<'a, DB, Cartesian2d<X, Y>>,
    series: &Series,
    points: impl Iterator<Item = (f64, f64)>,
) -> Result<()>
where
    DB: DrawingBackend + 'a,
    X: Ranged<ValueType = f64>,
    Y: Ranged<ValueType = f64>,
{
    let size = series.style.size as i32;
    let color = series.style.color.rgb();
    let filled = color.filled();
    let stroke = color.stroke_width(2);
    let offset = LEGEND_GLYPH_OFFSET;

    let annotation = match series.style.marker {
        Marker::Circle => chart
            .draw_series(points.map(|point| Circle::new(point, size, filled)))
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .legend(move |(x, y)| Circle::new((x + offset, y), size, filled)),
        Marker::TriangleUp => chart
            .draw_series(points.map(|point| TriangleMarker::new(point, size, filled)))
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .legend(move |(x, y)| TriangleMarker::new((x + offset, y), size, filled)),
        Marker::Cross => chart
            .draw_series(points.map(|point| Cross::new(point, size, stroke)))
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .legend(move |(x, y)| Cross::new((x + offset, y), size, stroke)),
        Marker::Square => chart
            .draw_series(points.map(|point| {
                EmptyElement::at(point)
                    + Rectangle::new([(-size, -size), (size, size)], filled)
            }))
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .legend(move |(x, y)| {
                EmptyElement::at((x + offset, y))
                    + Rectangle::new([(-size, -size), (size, size)], filled)
            }),
        Marker::TriangleDown => chart
            .draw_series(points.map(|point| {
                EmptyElement::at(point)
                    + Polygon::new(vec![(-size, -size), (size, -size), (0, size)], filled)
            }))
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .legend(move |(x, y)| {
                EmptyElement::at((x + offset, y))
                    + Polygon::new(vec![(-size, -size), (size, -size), (0, size)], filled)
            }),
    };
    annotation.label(series.label.as_str());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::style::{SeriesColor, SeriesStyle};
    use plotters::style::{FontDesc, FontFamily, FontStyle};
    use plotters_backend::{BackendColor, BackendCoord, BackendTextStyle, DrawingErrorKind};
    use rstest::rstest;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::convert::Infallible;
    use std::rc::Rc;

    /// Everything a [`RecordingBackend`] was asked to draw
    #[derive(Default)]
    struct Recording {
        texts: Vec<String>,
        colors: HashSet<(u8, u8, u8)>,
    }

    /// Backend that records text and pixel colors instead of rasterizing them,
    /// so charts can be drawn without any fonts installed.
    struct RecordingBackend {
        recording: Rc<RefCell<Recording>>,
    }

    impl DrawingBackend for RecordingBackend {
        type ErrorType = Infallible;

        fn get_size(&self) -> (u32, u32) {
            CHART_SIZE
        }

        fn ensure_prepared(&mut self) -> core::result::Result<(), DrawingErrorKind<Infallible>> {
            Ok(())
        }

        fn present(&mut self) -> core::result::Result<(), DrawingErrorKind<Infallible>> {
            Ok(())
        }

        fn draw_pixel(
            &mut self,
            _point: BackendCoord,
            color: BackendColor,
        ) -> core::result::Result<(), DrawingErrorKind<Infallible>> {
            self.recording.borrow_mut().colors.insert(color.rgb);
            Ok(())
        }

        fn draw_text<TStyle: BackendTextStyle>(
            &mut self,
            text: &str,
            _style: &TStyle,
            _pos: BackendCoord,
        ) -> core::result::Result<(), DrawingErrorKind<Infallible>> {
            self.recording.borrow_mut().texts.push(text.to_string());
            Ok(())
        }

        fn estimate_text_size<TStyle: BackendTextStyle>(
            &self,
            text: &str,
            _style: &TStyle,
        ) -> core::result::Result<(u32, u32), DrawingErrorKind<Infallible>> {
            Ok((text.len() as u32 * 10, 20))
        }
    }

    fn draw_recorded(figure: &Figure) -> Recording {
        let recording = Rc::new(RefCell::new(Recording::default()));
        let drawing_area = RecordingBackend {
            recording: Rc::clone(&recording),
        }
        .into_drawing_area();

        draw_figure(&drawing_area, figure).unwrap();
        drop(drawing_area);

        Rc::try_unwrap(recording).ok().unwrap().into_inner()
    }

    fn sans_serif_available() -> bool {
        FontDesc::new(FontFamily::SansSerif, 22.0, FontStyle::Normal)
            .box_size("p")
            .is_ok()
    }

    const SERIES: [(&str, SeriesColor, Marker); 5] = [
        ("L = 10", SeriesColor::Red, Marker::TriangleUp),
        ("L = 50", SeriesColor::Blue, Marker::Square),
        ("L = 100", SeriesColor::Green, Marker::Circle),
        ("L = 1000", SeriesColor::Yellow, Marker::TriangleDown),
        ("L = 5000", SeriesColor::Magenta, Marker::Cross),
    ];

    fn sample_figure(y_scale: AxisScale) -> Figure {
        let mut figure = Figure::new("test_scatter", "p", "P_flow").with_y_scale(y_scale);
        for (label, color, marker) in SERIES {
            figure.push_series(Series::new(
                label,
                SeriesStyle::new(color, marker),
                vec![(0.1, 0.01), (0.5, 0.2), (0.6, 0.8), (0.9, 1.0)],
            ));
        }
        figure
    }

    #[test]
    fn figure_without_series_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let figure = Figure::new("empty", "p", "P_flow");

        let result = render_figure(&figure, dir.path());
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
        assert!(!dir.path().join("empty.png").exists());
    }

    fn rgb(color: SeriesColor) -> (u8, u8, u8) {
        color.rgb().to_backend_color().rgb
    }

    #[rstest]
    #[case(AxisScale::Linear, false)]
    #[case(AxisScale::Linear, true)]
    #[case(AxisScale::Log10, false)]
    #[case(AxisScale::Log10, true)]
    fn draws_every_marker_and_axis_description(#[case] y_scale: AxisScale, #[case] grid: bool) {
        let figure = sample_figure(y_scale).with_grid(grid).without_legend();
        let recording = draw_recorded(&figure);

        for (_, color, marker) in SERIES {
            assert!(
                recording.colors.contains(&rgb(color)),
                "No {:?} marker was drawn",
                marker
            );
        }
        assert!(recording.texts.iter().any(|text| text == "p"));
        assert!(recording.texts.iter().any(|text| text == "P_flow"));
    }

    #[rstest]
    #[case(AxisScale::Linear)]
    #[case(AxisScale::Log10)]
    fn legend_lists_every_series(#[case] y_scale: AxisScale) {
        if !sans_serif_available() {
            eprintln!("Skipping legend check: no sans-serif font available");
            return;
        }

        let recording = draw_recorded(&sample_figure(y_scale));
        for (label, _, _) in SERIES {
            assert!(
                recording.texts.iter().any(|text| text == label),
                "Legend is missing '{}'",
                label
            );
        }
    }

    #[test]
    fn log_scale_skips_values_it_cannot_place() {
        let mut figure = Figure::new("log_filter", "s", "n")
            .with_y_scale(AxisScale::Log10)
            .without_legend();
        figure.push_series(Series::new(
            "p = 0.2",
            SeriesStyle::new(SeriesColor::Cyan, Marker::Circle),
            vec![(1.0, 0.0), (2.0, -3.0), (3.0, f64::NAN), (4.0, 25.0)],
        ));
        figure.push_series(Series::new(
            "p = 0.3",
            SeriesStyle::new(SeriesColor::Red, Marker::Cross),
            vec![(1.0, 0.0)],
        ));

        let recording = draw_recorded(&figure);

        assert!(recording.colors.contains(&rgb(SeriesColor::Cyan)));
        assert!(!recording.colors.contains(&rgb(SeriesColor::Red)));
    }

    #[rstest]
    #[case(AxisScale::Linear)]
    #[case(AxisScale::Log10)]
    fn renders_png_into_created_output_dir(#[case] y_scale: AxisScale) {
        if !sans_serif_available() {
            eprintln!("Skipping PNG rendering: no sans-serif font available");
            return;
        }

        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("charts");

        let path = render_figure(&sample_figure(y_scale), &nested).unwrap();
        assert_eq!(path, nested.join("test_scatter.png"));
        assert!(path.exists());
    }
}
