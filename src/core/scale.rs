use crate::core::primitives::epoch_ms_to_datetime;
use crate::core::{Domain, ScaleValue};
use crate::error::{ChartError, ChartResult};

/// Pixel-to-data inversion exposed by a host chart axis.
///
/// Pixels are chart-local: `0` is the left (X) or top (Y) edge of the
/// plotted area.
pub trait AxisScale {
    fn invert(&self, pixel: f64) -> ScaleValue;
}

/// Linear mapping between a data domain and a pixel range.
///
/// The pixel range may be descending, which is how Cartesian Y axes map
/// larger values towards the top of the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: Domain,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: Domain, range_start: f64, range_end: f64) -> ChartResult<Self> {
        if !range_start.is_finite() || !range_end.is_finite() || range_start == range_end {
            return Err(ChartError::InvalidData(
                "scale pixel range must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain,
            range_start,
            range_end,
        })
    }

    /// X axis scale spanning `[0, width]`.
    pub fn horizontal(domain: Domain, width: f64) -> ChartResult<Self> {
        Self::new(domain, 0.0, width)
    }

    /// Y axis scale spanning `[height, 0]`.
    pub fn vertical(domain: Domain, height: f64) -> ChartResult<Self> {
        Self::new(domain, height, 0.0)
    }

    #[must_use]
    pub fn domain(self) -> Domain {
        self.domain
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a data value to a pixel. A degenerate domain maps every value to
    /// the middle of the range.
    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let span = self.domain.span();
        if span == 0.0 {
            return (self.range_start + self.range_end) / 2.0;
        }
        let normalized = (value - self.domain.min()) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        self.domain.min() + normalized * self.domain.span()
    }
}

impl AxisScale for LinearScale {
    fn invert(&self, pixel: f64) -> ScaleValue {
        ScaleValue::Number(self.pixel_to_domain(pixel))
    }
}

/// Calendar time axis whose domain is expressed in epoch milliseconds.
///
/// Inversion yields `ScaleValue::Date`, mirroring time scales in browser
/// charting libraries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    pub fn horizontal(domain_epoch_ms: Domain, width: f64) -> ChartResult<Self> {
        Ok(Self {
            linear: LinearScale::horizontal(domain_epoch_ms, width)?,
        })
    }

    #[must_use]
    pub fn linear(self) -> LinearScale {
        self.linear
    }
}

impl AxisScale for TimeScale {
    fn invert(&self, pixel: f64) -> ScaleValue {
        epoch_ms_to_datetime(self.linear.pixel_to_domain(pixel)).into()
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisScale, LinearScale, TimeScale};
    use crate::core::Domain;

    #[test]
    fn vertical_scale_puts_max_at_top() {
        let scale = LinearScale::vertical(Domain::new(0.0, 100.0).expect("domain"), 200.0)
            .expect("scale");
        assert_eq!(scale.pixel_to_domain(0.0), 100.0);
        assert_eq!(scale.pixel_to_domain(200.0), 0.0);
        assert_eq!(scale.domain_to_pixel(25.0), 150.0);
    }

    #[test]
    fn degenerate_domain_maps_to_range_midpoint() {
        let scale =
            LinearScale::horizontal(Domain::point(5.0).expect("domain"), 400.0).expect("scale");
        assert_eq!(scale.domain_to_pixel(5.0), 200.0);
        assert_eq!(scale.pixel_to_domain(123.0), 5.0);
    }

    #[test]
    fn zero_pixel_range_is_rejected() {
        let domain = Domain::new(0.0, 1.0).expect("domain");
        assert!(LinearScale::horizontal(domain, 0.0).is_err());
    }

    #[test]
    fn time_scale_inverts_to_dates() {
        let scale = TimeScale::horizontal(Domain::new(0.0, 10_000.0).expect("domain"), 100.0)
            .expect("scale");
        assert_eq!(scale.invert(50.0).to_number(), 5_000.0);
    }
}
