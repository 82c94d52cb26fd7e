use crate::core::{Domain, LinearScale, PlotOffset};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{FrameClock, SelectionRect};
use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer};
use crate::series::{MergedRow, SeriesKey};

use super::FlightChartPanel;

/// Pixel projection of the active domains into the plot area.
///
/// Output coordinates are container-local: the plot area starts at
/// `plot.left`/`plot.top`.
#[derive(Debug, Clone, Copy)]
struct PlotProjection {
    plot: PlotOffset,
    x_scale: LinearScale,
    y_scale: LinearScale,
}

impl PlotProjection {
    fn new(plot: PlotOffset, x: Domain, y: Domain) -> ChartResult<Self> {
        Ok(Self {
            plot,
            x_scale: LinearScale::horizontal(x, plot.width)?,
            y_scale: LinearScale::vertical(y, plot.height)?,
        })
    }

    fn point(self, time: f64, value: f64) -> (f64, f64) {
        (
            self.plot.left + self.x_scale.domain_to_pixel(time),
            self.plot.top + self.y_scale.domain_to_pixel(value),
        )
    }
}

impl<C: FrameClock> FlightChartPanel<C> {
    /// Builds the backend-agnostic frame for the current view.
    ///
    /// Each series becomes a polyline over the rows where it has a value;
    /// segments lying entirely outside the active X domain are dropped. A
    /// series with a single sample renders as a zero-length segment. The
    /// in-progress zoom box is added as a filled rectangle.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let Some(plot) = self.plot_offset.filter(|plot| plot.is_valid()) else {
            let (width, height) = self
                .plot_offset
                .map_or((0.0, 0.0), |plot| (plot.width, plot.height));
            return Err(ChartError::InvalidPlotArea { width, height });
        };

        let mut frame = RenderFrame::new(plot);
        let (Some(x), Some(y)) = (
            self.controller.active_x_domain(),
            self.controller.active_y_domain(),
        ) else {
            return Ok(frame);
        };
        let projection = PlotProjection::new(plot, x, y)?;

        for series in &self.model.series {
            append_series_lines(
                &mut frame,
                projection,
                &self.model.rows,
                &series.key,
                x,
                self.style.line_width,
                series.color,
            );
        }

        if let Some(selection) = self.controller.selection() {
            frame
                .rects
                .push(selection_rect(projection, selection, self.style.selection_fill));
        }

        Ok(frame)
    }

    /// Builds the current frame and hands it to `renderer`.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        renderer.render(&frame)
    }
}

fn append_series_lines(
    frame: &mut RenderFrame,
    projection: PlotProjection,
    rows: &[MergedRow],
    key: &SeriesKey,
    x_domain: Domain,
    line_width: f64,
    color: Color,
) {
    let samples: Vec<(f64, f64)> = rows
        .iter()
        .filter_map(|row| row.value(key).map(|value| (row.time, value)))
        .collect();

    if let [(time, value)] = samples.as_slice() {
        if x_domain.contains(*time) {
            let (px, py) = projection.point(*time, *value);
            frame
                .lines
                .push(LinePrimitive::new(px, py, px, py, line_width, color));
        }
        return;
    }

    for pair in samples.windows(2) {
        let (t1, v1) = pair[0];
        let (t2, v2) = pair[1];
        if t2 < x_domain.min() || t1 > x_domain.max() {
            continue;
        }
        let (x1, y1) = projection.point(t1, v1);
        let (x2, y2) = projection.point(t2, v2);
        frame
            .lines
            .push(LinePrimitive::new(x1, y1, x2, y2, line_width, color));
    }
}

fn selection_rect(
    projection: PlotProjection,
    selection: SelectionRect,
    fill: Color,
) -> RectPrimitive {
    let (x1, y1) = projection.point(selection.x1, selection.y1);
    let (x2, y2) = projection.point(selection.x2, selection.y2);
    RectPrimitive::from_corners(x1, y1, x2, y2, fill)
}
