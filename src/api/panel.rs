use tracing::debug;

use crate::core::{ClientRect, LinearScale, PlotOffset};
use crate::error::ChartResult;
use crate::interaction::{
    ChartInput, FrameClock, FrameRequestId, HandleOutcome, ManualFrameClock, SurfaceSnapshot,
    ZoomPanController,
};
use crate::series::{AlignmentMode, ChartModel, SelectedSeries, SeriesAggregator};

use super::{PanelConfig, PanelStyle};

/// Host-facing facade for one flight chart panel.
///
/// Owns the selected series, the merged [`ChartModel`], the plot layout and
/// the [`ZoomPanController`]. Every model rebuild feeds the controller's base
/// domains, so a new selection or alignment resets the view.
pub struct FlightChartPanel<C: FrameClock = ManualFrameClock> {
    pub(super) aggregator: SeriesAggregator,
    pub(super) controller: ZoomPanController<C>,
    pub(super) style: PanelStyle,
    pub(super) selection: Vec<SelectedSeries>,
    pub(super) model: ChartModel,
    pub(super) plot_offset: Option<PlotOffset>,
    pub(super) container_rect: Option<ClientRect>,
}

impl FlightChartPanel<ManualFrameClock> {
    pub fn headless(config: PanelConfig) -> ChartResult<Self> {
        Self::new(config, ManualFrameClock::new())
    }
}

impl<C: FrameClock> FlightChartPanel<C> {
    pub fn new(config: PanelConfig, clock: C) -> ChartResult<Self> {
        let config = config.validate()?;
        let aggregator = SeriesAggregator::new(config.aggregation)?;
        let mut controller = ZoomPanController::new(config.zoom_pan, clock)?;
        controller.set_reset_dependencies(&config.aggregation.alignment);
        Ok(Self {
            aggregator,
            controller,
            style: config.style,
            selection: Vec::new(),
            model: ChartModel::empty(config.aggregation.alignment),
            plot_offset: None,
            container_rect: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> PanelConfig {
        PanelConfig {
            zoom_pan: self.controller.config(),
            aggregation: self.aggregator.config(),
            style: self.style,
        }
    }

    #[must_use]
    pub fn model(&self) -> &ChartModel {
        &self.model
    }

    #[must_use]
    pub fn controller(&self) -> &ZoomPanController<C> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ZoomPanController<C> {
        &mut self.controller
    }

    #[must_use]
    pub fn selection(&self) -> &[SelectedSeries] {
        &self.selection
    }

    #[must_use]
    pub fn alignment(&self) -> AlignmentMode {
        self.aggregator.config().alignment
    }

    /// Replaces the selected series and rebuilds the model.
    pub fn set_selection(&mut self, selection: Vec<SelectedSeries>) {
        self.selection = selection;
        self.rebuild_model();
    }

    /// Switches between calendar and elapsed time. Returns `true` when the
    /// mode changed.
    pub fn set_alignment(&mut self, alignment: AlignmentMode) -> bool {
        if !self.aggregator.set_alignment(alignment) {
            return false;
        }
        self.rebuild_model();
        true
    }

    /// Records where the plot area sits inside the chart container.
    pub fn set_layout(&mut self, plot_offset: PlotOffset, container_rect: ClientRect) {
        self.plot_offset = Some(plot_offset);
        self.container_rect = Some(container_rect);
    }

    /// Forgets the layout, e.g. when the chart unmounts. Input is ignored
    /// until the next [`Self::set_layout`].
    pub fn clear_layout(&mut self) {
        self.plot_offset = None;
        self.container_rect = None;
    }

    #[must_use]
    pub fn plot_offset(&self) -> Option<PlotOffset> {
        self.plot_offset
    }

    /// Routes one input event through the controller against the current
    /// layout and active domains.
    pub fn handle(&mut self, input: ChartInput) -> HandleOutcome {
        let domains = self
            .controller
            .active_x_domain()
            .zip(self.controller.active_y_domain());
        let layout = self.plot_offset.zip(self.container_rect);

        match (domains, layout, self.model.alignment) {
            (Some((x, y)), Some((plot, container)), AlignmentMode::Absolute) => {
                let surface = SurfaceSnapshot::time(x, y, plot, container);
                self.controller.handle(input, &surface)
            }
            (Some((x, y)), Some((plot, container)), AlignmentMode::Relative) => {
                let surface = SurfaceSnapshot::linear(x, y, plot, container);
                self.controller.handle(input, &surface)
            }
            _ => {
                let surface = SurfaceSnapshot::<LinearScale, LinearScale> {
                    plot_offset: self.plot_offset,
                    container_rect: self.container_rect,
                    ..SurfaceSnapshot::unmounted()
                };
                self.controller.handle(input, &surface)
            }
        }
    }

    pub fn on_animation_frame(&mut self, frame: FrameRequestId) -> bool {
        self.controller.on_animation_frame(frame)
    }

    pub fn reset_view(&mut self) {
        self.controller.reset_view();
    }

    #[must_use]
    pub fn is_interacting(&self) -> bool {
        self.controller.is_interacting()
    }

    fn rebuild_model(&mut self) {
        self.model = self.aggregator.build(&self.selection);
        let base_changed = self.controller.set_base_domains(self.model.base_domains());
        let mode_changed = self
            .controller
            .set_reset_dependencies(&self.model.alignment);
        debug!(
            series = self.model.series.len(),
            rows = self.model.rows.len(),
            base_changed,
            mode_changed,
            "panel model rebuilt"
        );
    }
}
