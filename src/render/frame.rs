use crate::core::PlotOffset;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, RectPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Coordinates are container-local pixels; `plot` locates the plotted area.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub plot: PlotOffset,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(plot: PlotOffset) -> Self {
        Self {
            plot,
            lines: Vec::new(),
            rects: Vec::new(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.plot.is_valid() {
            return Err(ChartError::InvalidPlotArea {
                width: self.plot.width,
                height: self.plot.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty()
    }
}
