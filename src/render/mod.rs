pub mod font;

use crate::consts::{
    BACKGROUND, BLACK_FILL, DPI, EVALUATION, FIGURE, HEIGHT_IN, LABEL_FONT_FAMILY, MARGIN_PX,
    MIN_LABELLED_WIDTH_PX, STEP_LINE_WIDTH, TITLE, TITLE_FONT_PX, WHITE_FILL, WIDTH_PER_PLY_IN,
    X_DESC, X_LABEL_AREA_PX, Y_DESC, Y_LABEL_AREA_PX, Y_LABEL_COUNT, Y_MAX, Y_MIN, ZERO_LINE,
};
use crate::error::{GraphError, GraphResult};
use crate::series::{clip_to_band, mask_runs, step_outline, EvalSeries};
use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;
use tracing::{debug, info};

fn ply_width_px() -> f64 {
    WIDTH_PER_PLY_IN * DPI
}

/// Pixel size of the graph for a game: a fixed width per ply and a fixed
/// height. Width is floored only where the frame would not fit: the margins
/// plus one ply without labels, the title and label areas with them.
pub fn image_size(series: &EvalSeries, labels: bool) -> (u32, u32) {
    let width = (ply_width_px() * series.len() as f64).round() as u32;
    let height = (HEIGHT_IN * DPI).round() as u32;
    let floor = if labels {
        MIN_LABELLED_WIDTH_PX
    } else {
        2 * MARGIN_PX + ply_width_px().round() as u32
    };
    (width.max(floor), height)
}

/// Fill heights beyond the fixed vertical bounds are pinned to the edge of
/// the view. The step line is clipped instead (see [`clip_to_band`]).
pub fn clamp_to_view(value: f64) -> f64 {
    value.clamp(Y_MIN, Y_MAX)
}

/// Horizontal axis over move numbers with one key point per full move.
#[derive(Clone)]
struct MoveAxis {
    span: RangedCoordf64,
    ticks: Vec<f64>,
}

impl MoveAxis {
    fn new(series: &EvalSeries) -> Self {
        let (x_min, x_max) = series.view_x_range();
        Self {
            span: (x_min..x_max).into(),
            ticks: series.tick_positions(),
        }
    }
}

impl Ranged for MoveAxis {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.span.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        if hint.weight().allow_light_points() {
            return Vec::new();
        }
        self.ticks.clone()
    }

    fn range(&self) -> Range<f64> {
        self.span.range()
    }
}

fn move_label(x: &f64) -> String {
    format!("{:.0}", x)
}

fn eval_label(y: &f64) -> String {
    format!("{:.2}", y)
}

fn render_error<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> GraphError {
    GraphError::Render(e.to_string())
}

#[derive(Debug, Clone, Copy)]
pub struct GraphRenderer {
    labels: bool,
}

impl GraphRenderer {
    /// `labels` requires a font registered under the label family
    /// (see [`font::install_label_font`]).
    pub fn new(labels: bool) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> bool {
        self.labels
    }

    pub fn image_size(&self, series: &EvalSeries) -> (u32, u32) {
        image_size(series, self.labels)
    }

    /// Writes the graph as an image, replacing any existing file. The format
    /// follows the file extension.
    pub fn render_to_file<P: AsRef<Path>>(&self, series: &EvalSeries, path: P) -> GraphResult<()> {
        let path = path.as_ref();
        let size = self.image_size(series);
        info!(
            "🖼️  Rendering {}x{} graph to {}",
            size.0,
            size.1,
            path.display()
        );

        let root = BitMapBackend::new(path, size).into_drawing_area();
        self.draw(&root, series).map_err(render_error)?;
        root.present().map_err(render_error)?;
        Ok(())
    }

    /// Renders into an RGB buffer (3 bytes per pixel, row-major).
    pub fn render_to_buffer(&self, series: &EvalSeries) -> GraphResult<(Vec<u8>, (u32, u32))> {
        let size = self.image_size(series);
        let mut buffer = vec![0u8; size.0 as usize * size.1 as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
            self.draw(&root, series).map_err(render_error)?;
            root.present().map_err(render_error)?;
        }
        Ok((buffer, size))
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        series: &EvalSeries,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        root.fill(&FIGURE)?;

        let (x_min, x_max) = series.view_x_range();
        let mut builder = ChartBuilder::on(root);
        builder.margin(MARGIN_PX);
        if self.labels {
            builder
                .caption(TITLE, (LABEL_FONT_FAMILY, TITLE_FONT_PX))
                .x_label_area_size(X_LABEL_AREA_PX)
                .y_label_area_size(Y_LABEL_AREA_PX);
        }

        let mut chart = builder.build_cartesian_2d(MoveAxis::new(series), Y_MIN..Y_MAX)?;

        chart.plotting_area().fill(&BACKGROUND)?;

        {
            let mut mesh = chart.configure_mesh();
            mesh.disable_x_mesh()
                .disable_y_mesh()
                .y_labels(Y_LABEL_COUNT)
                .x_label_formatter(&move_label)
                .y_label_formatter(&eval_label);
            if self.labels {
                mesh.x_desc(X_DESC).y_desc(Y_DESC);
            }
            mesh.draw()?;
        }

        // Fills sit beneath both lines.
        let xs = series.x_positions();
        for (side, mask, values, color) in [
            ("black", series.black_mask(), series.black_values(), BLACK_FILL),
            ("white", series.white_mask(), series.white_values(), WHITE_FILL),
        ] {
            let clipped: Vec<f64> = values.into_iter().map(clamp_to_view).collect();
            let runs = mask_runs(&mask);
            debug!("   {} fill: {} region(s)", side, runs.len());

            chart.draw_series(
                runs.into_iter()
                    .map(|run| Polygon::new(step_outline(&xs, &clipped, run), color.filled())),
            )?;
        }

        if !series.is_empty() {
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(x_min, 0.0), (x_max, 0.0)],
                ZERO_LINE,
            )))?;

            let pieces = clip_to_band(&series.step_line(), Y_MIN, Y_MAX);
            debug!("   step line: {} visible piece(s)", pieces.len());
            chart.draw_series(
                pieces
                    .into_iter()
                    .map(|piece| PathElement::new(piece, EVALUATION.stroke_width(STEP_LINE_WIDTH))),
            )?;
        }

        Ok(())
    }
}
