use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::core::{AxisKind, Coordinate, Point, SeriesStore};
use crate::error::{ChartError, ChartResult};

/// Wire shape of series data exchanged with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataShape {
    /// Parallel `x` and `y` arrays per series.
    Xy,
    /// Ordered `x label -> y value` mapping per series.
    Labeled,
}

/// One series in parallel-array form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XySeries {
    pub x: Vec<Coordinate>,
    pub y: Vec<Coordinate>,
}

impl XySeries {
    #[must_use]
    pub fn new(x: Vec<Coordinate>, y: Vec<Coordinate>) -> Self {
        Self { x, y }
    }

    /// Builds a numeric series from `(x, y)` pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self {
            x: pairs.iter().map(|(x, _)| Coordinate::Number(*x)).collect(),
            y: pairs.iter().map(|(_, y)| Coordinate::Number(*y)).collect(),
        }
    }

    pub fn points(&self, name: &str) -> ChartResult<Vec<Point>> {
        if self.x.len() != self.y.len() {
            return Err(ChartError::InvalidData(format!(
                "series `{name}`: `x` and `y` must have the same length (x={}, y={})",
                self.x.len(),
                self.y.len()
            )));
        }
        Ok(self
            .x
            .iter()
            .zip(&self.y)
            .map(|(x, y)| Point::new(x.clone(), y.clone()))
            .collect())
    }

    fn push(&mut self, point: &Point) {
        self.x.push(point.x.clone());
        self.y.push(point.y.clone());
    }
}

/// Initial chart data supplied by the host.
///
/// Series order is preserved end to end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputData {
    Xy(IndexMap<String, XySeries>),
    Labeled(IndexMap<String, IndexMap<String, f64>>),
}

impl InputData {
    #[must_use]
    pub fn shape(&self) -> DataShape {
        match self {
            Self::Xy(_) => DataShape::Xy,
            Self::Labeled(_) => DataShape::Labeled,
        }
    }

    #[must_use]
    pub fn series_names(&self) -> Vec<&str> {
        match self {
            Self::Xy(series) => series.keys().map(String::as_str).collect(),
            Self::Labeled(series) => series.keys().map(String::as_str).collect(),
        }
    }

    /// Flattens every series into control points.
    pub fn to_points(&self) -> ChartResult<IndexMap<String, Vec<Point>>> {
        match self {
            Self::Xy(series) => series
                .iter()
                .map(|(name, data)| Ok((name.clone(), data.points(name)?)))
                .collect(),
            Self::Labeled(series) => Ok(series
                .iter()
                .map(|(name, values)| {
                    let points = values
                        .iter()
                        .map(|(label, value)| Point::new(label.as_str(), *value))
                        .collect();
                    (name.clone(), points)
                })
                .collect()),
        }
    }

    /// Labels of the first series, the implicit x axis of labeled data.
    #[must_use]
    pub fn first_series_labels(&self) -> Vec<String> {
        match self {
            Self::Labeled(series) => series
                .values()
                .next()
                .map(|values| values.keys().cloned().collect())
                .unwrap_or_default(),
            Self::Xy(_) => Vec::new(),
        }
    }

    /// Distinct labels found on one axis, in order of first appearance.
    #[must_use]
    pub fn axis_labels(&self, axis: AxisSelector) -> Vec<String> {
        match (self, axis) {
            (Self::Labeled(_), AxisSelector::X) => self.first_series_labels(),
            (Self::Labeled(_), AxisSelector::Y) => Vec::new(),
            (Self::Xy(series), axis) => {
                let mut labels = IndexSet::new();
                for data in series.values() {
                    let values = match axis {
                        AxisSelector::X => &data.x,
                        AxisSelector::Y => &data.y,
                    };
                    labels.extend(
                        values
                            .iter()
                            .filter_map(Coordinate::as_category)
                            .map(str::to_owned),
                    );
                }
                labels.into_iter().collect()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSelector {
    X,
    Y,
}

/// Infers an axis kind: `Category` as soon as any series holds a label there.
#[must_use]
pub fn infer_axis_kind(data: &InputData, axis: AxisSelector) -> AxisKind {
    match (data, axis) {
        (InputData::Labeled(_), AxisSelector::X) => AxisKind::Category,
        (InputData::Labeled(_), AxisSelector::Y) => AxisKind::Linear,
        (InputData::Xy(series), axis) => {
            let has_label = series.values().any(|data| {
                let values = match axis {
                    AxisSelector::X => &data.x,
                    AxisSelector::Y => &data.y,
                };
                values.iter().any(|value| !value.is_numeric())
            });
            if has_label {
                AxisKind::Category
            } else {
                AxisKind::Linear
            }
        }
    }
}

/// Edited data handed back to the host on commit, in the input's shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EditedData {
    Xy(IndexMap<String, XySeries>),
    Labeled(IndexMap<String, IndexMap<String, f64>>),
}

impl EditedData {
    #[must_use]
    pub fn shape(&self) -> DataShape {
        match self {
            Self::Xy(_) => DataShape::Xy,
            Self::Labeled(_) => DataShape::Labeled,
        }
    }

    #[must_use]
    pub fn series(&self, name: &str) -> Option<EditedSeries<'_>> {
        match self {
            Self::Xy(series) => series.get(name).map(EditedSeries::Xy),
            Self::Labeled(series) => series.get(name).map(EditedSeries::Labeled),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Xy(series) => series.len(),
            Self::Labeled(series) => series.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies the whole store into a fresh payload of the given shape.
    pub fn from_store(store: &SeriesStore, shape: DataShape) -> ChartResult<Self> {
        match shape {
            DataShape::Xy => Ok(Self::Xy(
                store
                    .iter()
                    .map(|series| {
                        (
                            series.name().to_owned(),
                            xy_from_points(series.points().iter()),
                        )
                    })
                    .collect(),
            )),
            DataShape::Labeled => {
                let mut out = IndexMap::with_capacity(store.len());
                for series in store.iter() {
                    let mut values = IndexMap::with_capacity(series.len());
                    for point in series.points() {
                        let (Coordinate::Category(label), Coordinate::Number(value)) =
                            (&point.x, &point.y)
                        else {
                            return Err(ChartError::InvalidData(format!(
                                "series `{}` cannot be exported as labeled data",
                                series.name()
                            )));
                        };
                        values.insert(label.clone(), *value);
                    }
                    out.insert(series.name().to_owned(), values);
                }
                Ok(Self::Labeled(out))
            }
        }
    }
}

/// Borrowed view of one committed series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditedSeries<'a> {
    Xy(&'a XySeries),
    Labeled(&'a IndexMap<String, f64>),
}

pub(super) fn xy_from_points<'a>(points: impl Iterator<Item = &'a Point>) -> XySeries {
    let mut out = XySeries::default();
    for point in points {
        out.push(point);
    }
    out
}
