//! Pairwise grid over the first five numeric columns.
//!
//! Histogram panels on the diagonal, scatter panels off it, rows and
//! columns in declaration order.

use super::draw_err;
use super::palette::SERIES_BLUE;
use crate::dataset::{stats, Column, Dataset};
use crate::error::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

const SIZE: u32 = 900;
const BINS: usize = 12;
const MAX_COLUMNS: usize = 5;

type Panel<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// Renders the pairplot grid.
///
/// The caller guarantees at least one numeric column.
pub fn render_pairplot(df: &Dataset, path: &Path) -> Result<()> {
    let columns: Vec<&Column> = df.numeric_columns().into_iter().take(MAX_COLUMNS).collect();
    let n = columns.len();

    let root = SVGBackend::new(path, (SIZE, SIZE)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let panels = root.split_evenly((n, n));
    for row in 0..n {
        for col in 0..n {
            let panel = &panels[row * n + col];
            if row == col {
                histogram_panel(panel, columns[row])?;
            } else {
                scatter_panel(panel, columns[col], columns[row])?;
            }
        }
    }

    root.present().map_err(draw_err)
}

fn histogram_panel(panel: &Panel<'_>, column: &Column) -> Result<()> {
    let values = column.numeric_values();
    let (edges, counts) = stats::histogram(&values, BINS);
    let y_max = counts.iter().copied().max().unwrap_or(0).max(1) as f64 * 1.1;

    let mut chart = ChartBuilder::on(panel)
        .caption(column.name(), ("sans-serif", 14))
        .margin(6)
        .x_label_area_size(20)
        .y_label_area_size(28)
        .build_cartesian_2d(edges[0]..edges[edges.len() - 1], 0.0..y_max)
        .map_err(draw_err)?;
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(4)
        .y_labels(4)
        .label_style(("sans-serif", 10))
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
    Ok(())
}

fn scatter_panel(panel: &Panel<'_>, x: &Column, y: &Column) -> Result<()> {
    let points: Vec<(f64, f64)> = x
        .f64_cells()
        .iter()
        .zip(y.f64_cells().iter())
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .collect();
    let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.1).collect();
    let (x_lo, x_hi) = stats::padded_bounds(&xs);
    let (y_lo, y_hi) = stats::padded_bounds(&ys);

    let mut chart = ChartBuilder::on(panel)
        .caption(format!("{} vs {}", y.name(), x.name()), ("sans-serif", 14))
        .margin(6)
        .x_label_area_size(20)
        .y_label_area_size(28)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(draw_err)?;
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(4)
        .y_labels(4)
        .label_style(("sans-serif", 10))
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(
            points
                .iter()
                .map(|&(px, py)| Circle::new((px, py), 2, SERIES_BLUE.filled())),
        )
        .map_err(draw_err)?;
    Ok(())
}
