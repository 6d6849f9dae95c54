use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use tracing::debug;

use crate::config::PlotConfig;
use crate::error::{PlotError, PlotResult};
use crate::training::history::MseHistory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// One labelled curve of the figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub style: LineStyle,
    pub points: Vec<(f64, f64)>,
}

/// Everything needed to draw the MSE chart, independent of the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct MseFigure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub size: (u32, u32),
    pub grid: bool,
    pub series: Vec<Series>,
}

impl MseFigure {
    /// Training MSE as a solid line, validation MSE as a dashed line, both
    /// against the iteration index.
    pub fn from_history(history: &MseHistory, config: &PlotConfig) -> Self {
        MseFigure {
            title: config.title.clone(),
            x_label: config.x_label.clone(),
            y_label: config.y_label.clone(),
            size: config.size,
            grid: true,
            series: vec![
                Series {
                    label: config.train_label.clone(),
                    style: LineStyle::Solid,
                    points: history.train_points(),
                },
                Series {
                    label: config.val_label.clone(),
                    style: LineStyle::Dashed,
                    points: history.val_points(),
                },
            ],
        }
    }

    pub fn x_range(&self) -> Range<f64> {
        axis_range(self.series.iter().flat_map(|s| s.points.iter().map(|&(x, _)| x)))
    }

    pub fn y_range(&self) -> Range<f64> {
        axis_range(self.series.iter().flat_map(|s| s.points.iter().map(|&(_, y)| y)))
    }
}

/// Data extent with a 5% margin on each side.
///
/// A zero-width extent (a single row, or a flat curve) is widened so the
/// chart still has an area to draw in.
pub fn axis_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        return 0.0..1.0;
    }

    let span = max - min;
    if span == 0.0 {
        let pad = (min.abs() * 0.05).max(0.5);
        return (min - pad)..(max + pad);
    }

    let margin = span * 0.05;
    (min - margin)..(max + margin)
}

const SERIES_COLORS: [RGBColor; 2] = [BLUE, RGBColor(255, 127, 14)];

pub fn create_plot(figure: &MseFigure, path: &Path) -> PlotResult<()> {
    let root = BitMapBackend::new(path, figure.size).into_drawing_area();
    root.fill(&WHITE).map_err(PlotError::render)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&figure.title, ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(figure.x_range(), figure.y_range())
        .map_err(PlotError::render)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(figure.x_label.as_str())
        .y_desc(figure.y_label.as_str())
        .axis_desc_style(("sans-serif", 20));
    if figure.grid {
        mesh.bold_line_style(BLACK.mix(0.15))
            .light_line_style(BLACK.mix(0.05));
    } else {
        mesh.disable_mesh();
    }
    mesh.draw().map_err(PlotError::render)?;

    for (series, color) in figure.series.iter().zip(SERIES_COLORS.iter().cycle()) {
        let style = color.stroke_width(2);
        match series.style {
            LineStyle::Solid => {
                chart
                    .draw_series(LineSeries::new(series.points.iter().copied(), style))
                    .map_err(PlotError::render)?
                    .label(series.label.as_str())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
            }
            LineStyle::Dashed => {
                chart
                    .draw_series(DashedLineSeries::new(
                        series.points.clone(),
                        10,
                        6,
                        style,
                    ))
                    .map_err(PlotError::render)?
                    .label(series.label.as_str())
                    .legend(move |(x, y)| {
                        EmptyElement::<_, BitMapBackend>::at((x, y))
                            + PathElement::new(vec![(0, 0), (8, 0)], style)
                            + PathElement::new(vec![(12, 0), (20, 0)], style)
                    });
            }
        }
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()
        .map_err(PlotError::render)?;

    root.present().map_err(PlotError::render)?;
    debug!("chart written to '{}'", path.display());

    Ok(())
}
