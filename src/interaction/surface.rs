use crate::core::{AxisScale, ClientRect, Domain, LinearScale, PlotOffset, TimeScale};

/// Geometry a host chart exposes to the controller.
///
/// Every accessor may return `None` while the chart is not mounted or has
/// not laid out yet; the controller then ignores the input.
pub trait ChartSurface {
    fn x_scale(&self) -> Option<&dyn AxisScale>;
    fn y_scale(&self) -> Option<&dyn AxisScale>;
    fn plot_offset(&self) -> Option<PlotOffset>;
    fn container_rect(&self) -> Option<ClientRect>;

    fn scales(&self) -> Option<(&dyn AxisScale, &dyn AxisScale)> {
        Some((self.x_scale()?, self.y_scale()?))
    }
}

/// Owned snapshot of chart geometry for one input event.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSnapshot<X, Y> {
    pub x_scale: Option<X>,
    pub y_scale: Option<Y>,
    pub plot_offset: Option<PlotOffset>,
    pub container_rect: Option<ClientRect>,
}

impl<X, Y> SurfaceSnapshot<X, Y> {
    /// Snapshot of a chart that has not mounted yet.
    #[must_use]
    pub fn unmounted() -> Self {
        Self {
            x_scale: None,
            y_scale: None,
            plot_offset: None,
            container_rect: None,
        }
    }
}

impl SurfaceSnapshot<LinearScale, LinearScale> {
    /// Numeric X/Y chart showing `x_domain` × `y_domain` inside `plot_offset`.
    ///
    /// Scales are left empty when the plot area is not laid out.
    #[must_use]
    pub fn linear(
        x_domain: Domain,
        y_domain: Domain,
        plot_offset: PlotOffset,
        container_rect: ClientRect,
    ) -> Self {
        let (x_scale, y_scale) = if plot_offset.is_valid() {
            (
                LinearScale::horizontal(x_domain, plot_offset.width).ok(),
                LinearScale::vertical(y_domain, plot_offset.height).ok(),
            )
        } else {
            (None, None)
        };
        Self {
            x_scale,
            y_scale,
            plot_offset: Some(plot_offset),
            container_rect: Some(container_rect),
        }
    }
}

impl SurfaceSnapshot<TimeScale, LinearScale> {
    /// Calendar-time X axis (epoch milliseconds) with a numeric Y axis.
    #[must_use]
    pub fn time(
        x_domain_epoch_ms: Domain,
        y_domain: Domain,
        plot_offset: PlotOffset,
        container_rect: ClientRect,
    ) -> Self {
        let (x_scale, y_scale) = if plot_offset.is_valid() {
            (
                TimeScale::horizontal(x_domain_epoch_ms, plot_offset.width).ok(),
                LinearScale::vertical(y_domain, plot_offset.height).ok(),
            )
        } else {
            (None, None)
        };
        Self {
            x_scale,
            y_scale,
            plot_offset: Some(plot_offset),
            container_rect: Some(container_rect),
        }
    }
}

impl<X: AxisScale, Y: AxisScale> ChartSurface for SurfaceSnapshot<X, Y> {
    fn x_scale(&self) -> Option<&dyn AxisScale> {
        self.x_scale.as_ref().map(|scale| scale as &dyn AxisScale)
    }

    fn y_scale(&self) -> Option<&dyn AxisScale> {
        self.y_scale.as_ref().map(|scale| scale as &dyn AxisScale)
    }

    fn plot_offset(&self) -> Option<PlotOffset> {
        self.plot_offset
    }

    fn container_rect(&self) -> Option<ClientRect> {
        self.container_rect
    }
}
