use std::fmt;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Pixel-space rectangle of the plot area inside the viewport.
///
/// `top < bottom` in screen coordinates: y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Plot area covering the whole viewport.
    #[must_use]
    pub fn from_viewport(viewport: Viewport) -> Self {
        Self::new(
            0.0,
            0.0,
            f64::from(viewport.width),
            f64::from(viewport.height),
        )
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    pub fn validate(self) -> ChartResult<()> {
        let finite = [self.left, self.top, self.right, self.bottom]
            .iter()
            .all(|value| value.is_finite());
        if !finite || self.width() == 0.0 || self.height() == 0.0 {
            return Err(ChartError::DegenerateGeometry(format!(
                "plot area must be finite with non-zero size: left={}, top={}, right={}, bottom={}",
                self.left, self.top, self.right, self.bottom
            )));
        }
        Ok(())
    }
}

/// Purely numeric sample used by curve math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// One coordinate value: a real number or a label from a category axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Category(String),
}

impl Coordinate {
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Category(_) => None,
        }
    }

    #[must_use]
    pub fn as_category(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Category(label) => Some(label),
        }
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl From<f64> for Coordinate {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Coordinate {
    fn from(label: &str) -> Self {
        Self::Category(label.to_owned())
    }
}

impl From<String> for Coordinate {
    fn from(label: String) -> Self {
        Self::Category(label)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Category(label) => f.write_str(label),
        }
    }
}

/// Addressable point of a series in data space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: Coordinate,
    pub y: Coordinate,
}

impl Point {
    #[must_use]
    pub fn new(x: impl Into<Coordinate>, y: impl Into<Coordinate>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    #[must_use]
    pub fn numeric(x: f64, y: f64) -> Self {
        Self::new(x, y)
    }

    /// Returns the numeric view of this point when both coordinates are numbers.
    #[must_use]
    pub fn as_data_point(&self) -> Option<DataPoint> {
        Some(DataPoint::new(self.x.as_number()?, self.y.as_number()?))
    }

    #[must_use]
    pub fn key(&self) -> PointKey {
        PointKey {
            x: CoordinateKey::from(&self.x),
            y: CoordinateKey::from(&self.y),
        }
    }
}

impl From<DataPoint> for Point {
    fn from(point: DataPoint) -> Self {
        Self::numeric(point.x, point.y)
    }
}

/// Hashable exact-equality key of a `Point`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PointKey {
    x: CoordinateKey,
    y: CoordinateKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CoordinateKey {
    Number(OrderedFloat<f64>),
    Category(String),
}

impl From<&Coordinate> for CoordinateKey {
    fn from(coordinate: &Coordinate) -> Self {
        match coordinate {
            Coordinate::Number(value) => Self::Number(OrderedFloat(*value)),
            Coordinate::Category(label) => Self::Category(label.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Coordinate, PlotArea, Point};

    #[test]
    fn point_key_treats_signed_zero_as_equal() {
        assert_eq!(
            Point::numeric(0.0, 1.0).key(),
            Point::numeric(-0.0, 1.0).key()
        );
    }

    #[test]
    fn point_key_separates_numbers_from_labels() {
        assert_ne!(Point::new(1.0, "a").key(), Point::new(1.0, "b").key());
        assert_ne!(Point::new(1.0, 2.0).key(), Point::new(1.0, "2").key());
    }

    #[test]
    fn coordinate_deserializes_untagged() {
        let parsed: Vec<Coordinate> = serde_json::from_str(r#"[1.5, "Mon"]"#).expect("parse");
        assert_eq!(parsed[0], Coordinate::Number(1.5));
        assert_eq!(parsed[1], Coordinate::Category("Mon".to_owned()));
    }

    #[test]
    fn zero_width_plot_area_is_degenerate() {
        assert!(PlotArea::new(10.0, 0.0, 10.0, 100.0).validate().is_err());
        assert!(PlotArea::new(0.0, 0.0, 10.0, 100.0).validate().is_ok());
    }
}
