//! 2×2 composite chart for one numeric column.
//!
//! Panels: histogram with a KDE overlay, horizontal boxplot, violin
//! (mirrored KDE outline), and a top-10 value bar chart. The layout is
//! deterministic; only the artifact filename varies between calls.

use super::draw_err;
use super::palette::{DENSITY_RED, SERIES_BLUE};
use crate::dataset::{stats, Column};
use crate::error::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 800;
const BINS: usize = 20;
const KDE_GRID: usize = 120;
const TOP_VALUES: usize = 10;

type Panel<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// Renders the composite visualization for a numeric column.
///
/// The caller guarantees the column holds at least one non-missing value.
pub fn render_composite(column: &Column, path: &Path) -> Result<()> {
    let values = column.numeric_values();

    let root = SVGBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;
    let panels = root.split_evenly((2, 2));

    histogram_kde_panel(&panels[0], &values, column.name())?;
    box_panel(&panels[1], &values, column.name())?;
    violin_panel(&panels[2], &values, column.name())?;
    bar_panel(&panels[3], column)?;

    root.present().map_err(draw_err)
}

/// Histogram with the KDE curve scaled to count space (density × n × bin width).
fn histogram_kde_panel(panel: &Panel<'_>, values: &[f64], name: &str) -> Result<()> {
    let (edges, counts) = stats::histogram(values, BINS);
    let bin_width = edges[1] - edges[0];
    let grid: Vec<f64> = (0..KDE_GRID)
        .map(|i| edges[0] + (edges[BINS] - edges[0]) * i as f64 / (KDE_GRID - 1) as f64)
        .collect();
    let density = stats::gaussian_kde(values, &grid);
    let scale = values.len() as f64 * bin_width;

    let count_max = counts.iter().copied().max().unwrap_or(0) as f64;
    let kde_max = density.iter().copied().fold(0.0f64, f64::max) * scale;
    let y_max = count_max.max(kde_max).max(1.0) * 1.1;

    let mut chart = ChartBuilder::on(panel)
        .caption(format!("Histogram of {name}"), ("sans-serif", 16))
        .margin(10)
        .x_label_area_size(24)
        .y_label_area_size(36)
        .build_cartesian_2d(edges[0]..edges[BINS], 0.0..y_max)
        .map_err(draw_err)?;
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(5)
        .y_labels(5)
        .label_style(("sans-serif", 11))
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(counts.iter().enumerate().map(|(i, &count)| {
            Rectangle::new(
                [(edges[i], 0.0), (edges[i + 1], count as f64)],
                SERIES_BLUE.mix(0.6).filled(),
            )
        }))
        .map_err(draw_err)?;

    if !density.is_empty() {
        chart
            .draw_series(LineSeries::new(
                grid.iter().zip(density.iter()).map(|(&x, &d)| (x, d * scale)),
                DENSITY_RED.stroke_width(2),
            ))
            .map_err(draw_err)?;
    }
    Ok(())
}

/// Horizontal boxplot: quartile box, median line, 1.5·IQR whiskers with caps.
fn box_panel(panel: &Panel<'_>, values: &[f64], name: &str) -> Result<()> {
    let s = stats::summarize(values);
    let iqr = s.q3 - s.q1;
    let low_fence = s.q1 - 1.5 * iqr;
    let high_fence = s.q3 + 1.5 * iqr;
    let whisker_lo = values
        .iter()
        .copied()
        .filter(|&v| v >= low_fence)
        .fold(f64::INFINITY, f64::min);
    let whisker_hi = values
        .iter()
        .copied()
        .filter(|&v| v <= high_fence)
        .fold(f64::NEG_INFINITY, f64::max);

    let (x_lo, x_hi) = stats::padded_bounds(values);
    let mut chart = ChartBuilder::on(panel)
        .caption(format!("Boxplot of {name}"), ("sans-serif", 16))
        .margin(10)
        .x_label_area_size(24)
        .y_label_area_size(36)
        .build_cartesian_2d(x_lo..x_hi, 0.0..1.0f64)
        .map_err(draw_err)?;
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(5)
        .y_labels(0)
        .label_style(("sans-serif", 11))
        .draw()
        .map_err(draw_err)?;

    let blue = SERIES_BLUE.mix(0.5).filled();
    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(s.q1, 0.35), (s.q3, 0.65)],
            blue,
        )))
        .map_err(draw_err)?;

    let lines = [
        vec![(s.q1, 0.35), (s.q3, 0.35), (s.q3, 0.65), (s.q1, 0.65), (s.q1, 0.35)],
        vec![(s.median, 0.35), (s.median, 0.65)],
        vec![(whisker_lo, 0.5), (s.q1, 0.5)],
        vec![(s.q3, 0.5), (whisker_hi, 0.5)],
        vec![(whisker_lo, 0.42), (whisker_lo, 0.58)],
        vec![(whisker_hi, 0.42), (whisker_hi, 0.58)],
    ];
    chart
        .draw_series(
            lines
                .into_iter()
                .map(|pts| PathElement::new(pts, BLACK.stroke_width(1))),
        )
        .map_err(draw_err)?;

    // Points beyond the whiskers plot individually
    chart
        .draw_series(
            values
                .iter()
                .filter(|&&v| v < whisker_lo || v > whisker_hi)
                .map(|&v| Circle::new((v, 0.5), 3, BLACK.stroke_width(1))),
        )
        .map_err(draw_err)?;
    Ok(())
}

/// Violin: the KDE curve mirrored around the panel midline.
fn violin_panel(panel: &Panel<'_>, values: &[f64], name: &str) -> Result<()> {
    let (x_lo, x_hi) = stats::padded_bounds(values);
    let grid: Vec<f64> = (0..KDE_GRID)
        .map(|i| x_lo + (x_hi - x_lo) * i as f64 / (KDE_GRID - 1) as f64)
        .collect();
    let density = stats::gaussian_kde(values, &grid);

    let mut chart = ChartBuilder::on(panel)
        .caption(format!("Violin plot of {name}"), ("sans-serif", 16))
        .margin(10)
        .x_label_area_size(24)
        .y_label_area_size(36)
        .build_cartesian_2d(x_lo..x_hi, 0.0..1.0f64)
        .map_err(draw_err)?;
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(5)
        .y_labels(0)
        .label_style(("sans-serif", 11))
        .draw()
        .map_err(draw_err)?;

    let d_max = density.iter().copied().fold(0.0f64, f64::max);
    if d_max > 0.0 {
        let half = 0.4;
        let mut outline: Vec<(f64, f64)> = grid
            .iter()
            .zip(density.iter())
            .map(|(&x, &d)| (x, 0.5 + half * d / d_max))
            .collect();
        outline.extend(
            grid.iter()
                .zip(density.iter())
                .rev()
                .map(|(&x, &d)| (x, 0.5 - half * d / d_max)),
        );
        chart
            .draw_series(std::iter::once(Polygon::new(
                outline.clone(),
                SERIES_BLUE.mix(0.4).filled(),
            )))
            .map_err(draw_err)?;
        outline.push(outline[0]);
        chart
            .draw_series(std::iter::once(PathElement::new(
                outline,
                SERIES_BLUE.stroke_width(1),
            )))
            .map_err(draw_err)?;
    } else {
        // Degenerate distribution: mark the single location
        chart
            .draw_series(
                values
                    .first()
                    .map(|&v| PathElement::new(vec![(v, 0.3), (v, 0.7)], SERIES_BLUE.stroke_width(2))),
            )
            .map_err(draw_err)?;
    }
    Ok(())
}

/// Bar chart of the ten most frequent values, labeled above each bar.
fn bar_panel(panel: &Panel<'_>, column: &Column) -> Result<()> {
    let counts: Vec<(String, usize)> = stats::value_counts(column)
        .into_iter()
        .take(TOP_VALUES)
        .collect();
    let k = counts.len().max(1);
    let y_max = counts.iter().map(|(_, n)| *n).max().unwrap_or(0).max(1) as f64 * 1.25;

    let mut chart = ChartBuilder::on(panel)
        .caption(
            format!("Bar chart (Top 10) of {}", column.name()),
            ("sans-serif", 16),
        )
        .margin(10)
        .x_label_area_size(24)
        .y_label_area_size(36)
        .build_cartesian_2d(0.0..k as f64, 0.0..y_max)
        .map_err(draw_err)?;
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(0)
        .y_labels(5)
        .label_style(("sans-serif", 11))
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(counts.iter().enumerate().map(|(i, (_, n))| {
            Rectangle::new(
                [(i as f64 + 0.15, 0.0), (i as f64 + 0.85, *n as f64)],
                SERIES_BLUE.mix(0.7).filled(),
            )
        }))
        .map_err(draw_err)?;

    let centered = Pos::new(HPos::Center, VPos::Bottom);
    chart
        .draw_series(counts.iter().enumerate().map(|(i, (value, n))| {
            Text::new(
                value.clone(),
                (i as f64 + 0.5, *n as f64),
                ("sans-serif", 11).into_font().color(&BLACK).pos(centered),
            )
        }))
        .map_err(draw_err)?;
    Ok(())
}
