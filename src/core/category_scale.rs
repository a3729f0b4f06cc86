use crate::error::{ChartError, ChartResult};

use super::scale::map_range;

/// Ordered label axis bound to a pixel span.
///
/// `pixel_start` is the position of the first label and `pixel_end` the
/// position of the last one.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScale {
    labels: Vec<String>,
    pixel_start: f64,
    pixel_end: f64,
}

impl CategoryScale {
    pub fn new(labels: Vec<String>, pixel_start: f64, pixel_end: f64) -> ChartResult<Self> {
        if labels.is_empty() {
            return Err(ChartError::InvalidConfig(
                "category scale requires at least one label".to_owned(),
            ));
        }
        Ok(Self {
            labels,
            pixel_start,
            pixel_end,
        })
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.labels.len() - 1
    }

    /// Maps a pixel to the nearest label index, clamped to the label range.
    pub fn pixel_to_index(&self, pixel: f64) -> ChartResult<usize> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        let position = map_range(
            pixel,
            self.pixel_start,
            self.pixel_end,
            0.0,
            self.last_index() as f64,
        );
        if position.is_nan() {
            return Err(ChartError::DegenerateGeometry(format!(
                "category position for pixel {pixel} is not a number"
            )));
        }
        let clamped = position.round().clamp(0.0, self.last_index() as f64);
        Ok(clamped as usize)
    }

    pub fn pixel_to_label(&self, pixel: f64) -> ChartResult<&str> {
        let index = self.pixel_to_index(pixel)?;
        Ok(&self.labels[index])
    }

    pub fn label_to_pixel(&self, label: &str) -> ChartResult<f64> {
        let index = self
            .labels
            .iter()
            .position(|candidate| candidate == label)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown category label `{label}`")))?;
        if self.labels.len() == 1 {
            return Ok((self.pixel_start + self.pixel_end) / 2.0);
        }
        Ok(map_range(
            index as f64,
            0.0,
            self.last_index() as f64,
            self.pixel_start,
            self.pixel_end,
        ))
    }
}
