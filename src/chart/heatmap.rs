//! Annotated correlation heatmap.
//!
//! Laid out directly in pixel coordinates: a colored grid cell per column
//! pair, the correlation value annotated to two decimals, names along the
//! left and bottom edges. Undefined correlations (constant or empty
//! columns) render gray with a `NaN` annotation.

use super::draw_err;
use super::palette::{coolwarm, UNDEFINED_GRAY};
use crate::dataset::{stats, Dataset};
use crate::error::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

const WIDTH: u32 = 900;
const HEIGHT: u32 = 760;
const MARGIN_LEFT: i32 = 150;
const MARGIN_TOP: i32 = 30;
const MARGIN_RIGHT: i32 = 30;
const MARGIN_BOTTOM: i32 = 140;

/// Renders the correlation heatmap for the dataset's numeric columns.
///
/// The caller guarantees at least one numeric column.
pub fn render_heatmap(df: &Dataset, path: &Path) -> Result<()> {
    let columns = df.numeric_columns();
    let matrix = stats::correlation_matrix(&columns);
    let n = columns.len() as i32;

    let root = SVGBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let cell_w = (WIDTH as i32 - MARGIN_LEFT - MARGIN_RIGHT) / n;
    let cell_h = (HEIGHT as i32 - MARGIN_TOP - MARGIN_BOTTOM) / n;
    let centered = Pos::new(HPos::Center, VPos::Center);

    for (i, row) in matrix.iter().enumerate() {
        for (j, &r) in row.iter().enumerate() {
            let x0 = MARGIN_LEFT + j as i32 * cell_w;
            let y0 = MARGIN_TOP + i as i32 * cell_h;
            let fill = if r.is_nan() { UNDEFINED_GRAY } else { coolwarm(r) };

            root.draw(&Rectangle::new(
                [(x0, y0), (x0 + cell_w, y0 + cell_h)],
                fill.filled(),
            ))
            .map_err(draw_err)?;
            root.draw(&Rectangle::new(
                [(x0, y0), (x0 + cell_w, y0 + cell_h)],
                BLACK.stroke_width(1),
            ))
            .map_err(draw_err)?;

            let label = if r.is_nan() {
                "NaN".to_string()
            } else {
                format!("{r:.2}")
            };
            root.draw(&Text::new(
                label,
                (x0 + cell_w / 2, y0 + cell_h / 2),
                ("sans-serif", 14).into_font().color(&BLACK).pos(centered),
            ))
            .map_err(draw_err)?;
        }
    }

    for (i, column) in columns.iter().enumerate() {
        let cx = MARGIN_LEFT + i as i32 * cell_w + cell_w / 2;
        let cy = MARGIN_TOP + i as i32 * cell_h + cell_h / 2;

        // Column names along the bottom, row names along the left
        root.draw(&Text::new(
            column.name().to_string(),
            (cx, HEIGHT as i32 - MARGIN_BOTTOM + 16),
            ("sans-serif", 14).into_font().color(&BLACK).pos(centered),
        ))
        .map_err(draw_err)?;
        root.draw(&Text::new(
            column.name().to_string(),
            (MARGIN_LEFT - 10, cy),
            ("sans-serif", 14)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Right, VPos::Center)),
        ))
        .map_err(draw_err)?;
    }

    root.present().map_err(draw_err)
}
