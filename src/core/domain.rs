use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Closed numeric interval on one chart axis.
///
/// Invariant: both bounds are finite and `min <= max`. Degenerate domains
/// (`min == max`) are legal; consumers must not divide by `span()` without
/// checking for zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct Domain {
    min: f64,
    max: f64,
}

impl Domain {
    /// `[0, 0]`, the fallback for axes without finite data.
    pub const ZERO: Self = Self { min: 0.0, max: 0.0 };

    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ChartError::InvalidDomain { min, max });
        }
        Ok(Self { min, max })
    }

    /// Builds a domain from two bounds given in any order.
    pub fn from_unordered(a: f64, b: f64) -> ChartResult<Self> {
        Self::new(a.min(b), a.max(b))
    }

    /// Zero-span domain at `value`.
    pub fn point(value: f64) -> ChartResult<Self> {
        Self::new(value, value)
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn bounds(self) -> (f64, f64) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.min == self.max
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Shifts both bounds by `delta`.
    pub fn translate(self, delta: f64) -> ChartResult<Self> {
        Self::new(self.min + delta, self.max + delta)
    }

    /// Linear interpolation of both bounds towards `target`.
    ///
    /// `t` is clamped to `[0, 1]`, so the result stays ordered whenever both
    /// endpoints are ordered.
    #[must_use]
    pub fn lerp(self, target: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            min: self.min + (target.min - self.min) * t,
            max: self.max + (target.max - self.max) * t,
        }
    }
}

impl TryFrom<(f64, f64)> for Domain {
    type Error = ChartError;

    fn try_from((min, max): (f64, f64)) -> ChartResult<Self> {
        Self::new(min, max)
    }
}

impl From<Domain> for (f64, f64) {
    fn from(domain: Domain) -> Self {
        (domain.min, domain.max)
    }
}
