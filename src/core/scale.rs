use ordered_float::OrderedFloat;

use crate::core::model::Bubble;
use crate::error::{ChartError, ChartResult};

/// Bidirectional affine mapping between one axis domain and a pixel range.
///
/// The pixel range may be inverted (`pixel_end < pixel_start`); vertical
/// axes use that form so increasing domain values render upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    pixel_start: f64,
    pixel_end: f64,
}

impl LinearScale {
    pub fn new(
        axis: &'static str,
        domain_min: f64,
        domain_max: f64,
        pixel_start: f64,
        pixel_end: f64,
    ) -> ChartResult<Self> {
        if !domain_min.is_finite() || !domain_max.is_finite() || domain_min >= domain_max {
            return Err(ChartError::InvalidDomain {
                axis,
                min: domain_min,
                max: domain_max,
            });
        }
        if !pixel_start.is_finite() || !pixel_end.is_finite() || pixel_start == pixel_end {
            return Err(ChartError::InvalidData(format!(
                "pixel range for `{axis}` must be finite and non-degenerate"
            )));
        }

        Ok(Self {
            domain_min,
            domain_max,
            pixel_start,
            pixel_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn domain_span(self) -> f64 {
        self.domain_max - self.domain_min
    }

    #[must_use]
    pub fn to_pixel(self, value: f64) -> f64 {
        let normalized = (value - self.domain_min) / self.domain_span();
        self.pixel_start + normalized * (self.pixel_end - self.pixel_start)
    }

    #[must_use]
    pub fn to_domain(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.pixel_start) / (self.pixel_end - self.pixel_start);
        self.domain_min + normalized * self.domain_span()
    }

    /// Midpoint of the domain, the quadrant split value for this axis.
    #[must_use]
    pub fn domain_mid(self) -> f64 {
        self.domain_min + self.domain_span() / 2.0
    }

    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        value.clamp(self.domain_min, self.domain_max)
    }
}

pub const MIN_BUBBLE_RADIUS_PX: f64 = 8.0;
pub const MAX_BUBBLE_RADIUS_PX: f64 = 60.0;

/// Maps bubble `size` values onto pixel radii.
///
/// The domain is `[0, max observed size]`, recomputed from the current
/// bubble set on every render so all radii re-normalize whenever bubbles
/// are added, removed, or resized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeScale {
    max_size: f64,
    min_radius: f64,
    max_radius: f64,
}

impl SizeScale {
    #[must_use]
    pub fn from_bubbles(bubbles: &[Bubble]) -> Self {
        let max_size = bubbles
            .iter()
            .map(|bubble| OrderedFloat(bubble.size))
            .max()
            .map(|max| max.0)
            .filter(|max| max.is_finite() && *max > 0.0)
            .unwrap_or(100.0);

        Self {
            max_size,
            min_radius: MIN_BUBBLE_RADIUS_PX,
            max_radius: MAX_BUBBLE_RADIUS_PX,
        }
    }

    #[must_use]
    pub fn max_size(self) -> f64 {
        self.max_size
    }

    /// Pixel radius for one bubble size.
    ///
    /// Non-positive and non-finite sizes floor at the minimum radius so a bad
    /// data point renders degenerately instead of failing the whole frame.
    #[must_use]
    pub fn radius_for(self, size: f64) -> f64 {
        if !size.is_finite() {
            return self.min_radius;
        }

        let normalized = size / self.max_size;
        let radius = self.min_radius + normalized * (self.max_radius - self.min_radius);
        radius.clamp(self.min_radius, self.max_radius)
    }
}
