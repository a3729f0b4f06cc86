use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::category_scale::CategoryScale;
use super::scale::LinearScale;
use super::types::{Coordinate, PlotArea};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisKind {
    #[default]
    Linear,
    Category,
}

/// Which screen direction an axis runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// Static axis setup supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    #[serde(default)]
    pub kind: AxisKind,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl AxisConfig {
    #[must_use]
    pub fn linear() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn category<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: AxisKind::Category,
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn is_category(&self) -> bool {
        self.kind == AxisKind::Category
    }
}

/// Current visible `{min, max}` of a linear axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

/// Plot rectangle plus current axis ranges, refreshed by the view before moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotGeometry {
    pub area: PlotArea,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
}

impl PlotGeometry {
    #[must_use]
    pub fn new(area: PlotArea) -> Self {
        Self {
            area,
            x_range: AxisRange::default(),
            y_range: AxisRange::default(),
        }
    }

    #[must_use]
    pub fn with_x_range(mut self, min: f64, max: f64) -> Self {
        self.x_range = AxisRange::new(min, max);
        self
    }

    #[must_use]
    pub fn with_y_range(mut self, min: f64, max: f64) -> Self {
        self.y_range = AxisRange::new(min, max);
        self
    }
}

/// Axis mapping resolved against concrete plot geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisScale {
    Linear(LinearScale),
    Category(CategoryScale),
}

impl AxisScale {
    /// Builds the mapping for one axis.
    ///
    /// Linear vertical axes grow upwards (bottom edge is `min`); category
    /// vertical axes list labels top to bottom.
    pub fn resolve(
        config: &AxisConfig,
        range: AxisRange,
        area: PlotArea,
        orientation: AxisOrientation,
    ) -> ChartResult<Self> {
        area.validate()?;
        match (config.kind, orientation) {
            (AxisKind::Linear, AxisOrientation::Horizontal) => Ok(Self::Linear(
                LinearScale::new(range.min, range.max, area.left, area.right)?,
            )),
            (AxisKind::Linear, AxisOrientation::Vertical) => Ok(Self::Linear(LinearScale::new(
                range.min,
                range.max,
                area.bottom,
                area.top,
            )?)),
            (AxisKind::Category, AxisOrientation::Horizontal) => Ok(Self::Category(
                CategoryScale::new(config.labels.clone(), area.left, area.right)?,
            )),
            (AxisKind::Category, AxisOrientation::Vertical) => Ok(Self::Category(
                CategoryScale::new(config.labels.clone(), area.top, area.bottom)?,
            )),
        }
    }

    pub fn pixel_to_coordinate(&self, pixel: f64) -> ChartResult<Coordinate> {
        match self {
            Self::Linear(scale) => {
                let value = scale.pixel_to_domain(pixel)?;
                if !value.is_finite() {
                    return Err(ChartError::DegenerateGeometry(format!(
                        "pixel {pixel} mapped to non-finite value"
                    )));
                }
                Ok(Coordinate::Number(value))
            }
            Self::Category(scale) => Ok(Coordinate::from(scale.pixel_to_label(pixel)?)),
        }
    }

    pub fn coordinate_to_pixel(&self, coordinate: &Coordinate) -> ChartResult<f64> {
        match (self, coordinate) {
            (Self::Linear(scale), Coordinate::Number(value)) => scale.domain_to_pixel(*value),
            (Self::Category(scale), Coordinate::Category(label)) => scale.label_to_pixel(label),
            (Self::Linear(_), Coordinate::Category(label)) => Err(ChartError::InvalidData(
                format!("category `{label}` cannot be placed on a linear axis"),
            )),
            (Self::Category(_), Coordinate::Number(value)) => Err(ChartError::InvalidData(
                format!("number {value} cannot be placed on a category axis"),
            )),
        }
    }
}
