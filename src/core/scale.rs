use crate::error::{ChartError, ChartResult};

/// Affine map of `value` from `[from_start, from_end]` onto `[to_start, to_end]`.
///
/// No guard against `from_start == from_end`: the result is then `NaN` or
/// infinite, and callers decide whether to drop it.
#[must_use]
pub fn map_range(value: f64, from_start: f64, from_end: f64, to_start: f64, to_end: f64) -> f64 {
    to_start + (to_end - to_start) * ((value - from_start) / (from_end - from_start))
}

/// Pixel -> data along one axis.
#[must_use]
pub fn to_data(pixel: f64, pixel_min: f64, pixel_max: f64, data_min: f64, data_max: f64) -> f64 {
    map_range(pixel, pixel_min, pixel_max, data_min, data_max)
}

/// Data -> pixel along one axis, the inverse of [`to_data`].
#[must_use]
pub fn to_pixel(value: f64, pixel_min: f64, pixel_max: f64, data_min: f64, data_max: f64) -> f64 {
    map_range(value, data_min, data_max, pixel_min, pixel_max)
}

/// Linear data domain bound to a pixel span.
///
/// `pixel_start` maps to `domain_start` and `pixel_end` to `domain_end`, so a
/// vertical axis passes `(bottom, top)` to grow upwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    pixel_start: f64,
    pixel_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        pixel_start: f64,
        pixel_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::DegenerateGeometry(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !pixel_start.is_finite() || !pixel_end.is_finite() || pixel_start == pixel_end {
            return Err(ChartError::DegenerateGeometry(
                "scale pixel span must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            pixel_start,
            pixel_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn pixel_span(self) -> (f64, f64) {
        (self.pixel_start, self.pixel_end)
    }

    pub fn domain_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        Ok(to_pixel(
            value,
            self.pixel_start,
            self.pixel_end,
            self.domain_start,
            self.domain_end,
        ))
    }

    pub fn pixel_to_domain(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        Ok(to_data(
            pixel,
            self.pixel_start,
            self.pixel_end,
            self.domain_start,
            self.domain_end,
        ))
    }
}
