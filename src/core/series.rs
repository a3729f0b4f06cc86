use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::constraint::Delta;
use super::curve::CurveMode;
use super::types::{Coordinate, Point};

/// Named, ordered list of control points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    name: String,
    points: Vec<Point>,
    editable: bool,
    curve_mode: CurveMode,
}

impl Series {
    pub fn new(
        name: impl Into<String>,
        points: Vec<Point>,
        editable: bool,
        curve_mode: CurveMode,
    ) -> ChartResult<Self> {
        let name = name.into();
        if points.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "series `{name}` must contain at least one point"
            )));
        }
        Ok(Self {
            name,
            points,
            editable,
            curve_mode,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    #[must_use]
    pub fn curve_mode(&self) -> CurveMode {
        self.curve_mode
    }

    pub fn point(&self, index: usize) -> ChartResult<&Point> {
        self.points.get(index).ok_or_else(|| self.out_of_range(index))
    }

    fn point_mut(&mut self, index: usize) -> ChartResult<&mut Point> {
        let len = self.points.len();
        let name = &self.name;
        self.points
            .get_mut(index)
            .ok_or_else(|| ChartError::InvalidReference {
                series: name.clone(),
                index,
                len,
            })
    }

    fn out_of_range(&self, index: usize) -> ChartError {
        ChartError::InvalidReference {
            series: self.name.clone(),
            index,
            len: self.points.len(),
        }
    }
}

/// Authoritative point storage for every series of one chart.
///
/// Series keep insertion order so snapshots mirror the host's input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesStore {
    series: IndexMap<String, Series>,
}

impl SeriesStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a series under its name.
    pub fn insert(&mut self, series: Series) -> Option<Series> {
        self.series.insert(series.name.clone(), series)
    }

    pub fn clear(&mut self) {
        self.series.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.series.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> ChartResult<&Series> {
        self.series
            .get(name)
            .ok_or_else(|| ChartError::UnknownSeries(name.to_owned()))
    }

    fn get_mut(&mut self, name: &str) -> ChartResult<&mut Series> {
        self.series
            .get_mut(name)
            .ok_or_else(|| ChartError::UnknownSeries(name.to_owned()))
    }

    /// Overwrites one point.
    pub fn set_point(&mut self, name: &str, index: usize, point: Point) -> ChartResult<()> {
        *self.get_mut(name)?.point_mut(index)? = point;
        Ok(())
    }

    /// Translates one point by `delta`; both coordinates must be numeric.
    pub fn move_point(&mut self, name: &str, index: usize, delta: Delta) -> ChartResult<()> {
        let point = self.get_mut(name)?.point_mut(index)?;
        match (&mut point.x, &mut point.y) {
            (Coordinate::Number(x), Coordinate::Number(y)) => {
                *x += delta.dx;
                *y += delta.dy;
                Ok(())
            }
            _ => Err(ChartError::InvalidData(format!(
                "point {index} of series `{name}` has a category coordinate and cannot be delta-moved"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Series, SeriesStore};
    use crate::ChartError;
    use crate::core::{CurveMode, Delta, Point};

    fn store() -> SeriesStore {
        let mut store = SeriesStore::new();
        store.insert(
            Series::new(
                "a",
                vec![Point::numeric(0.0, 0.0), Point::numeric(1.0, 1.0)],
                true,
                CurveMode::None,
            )
            .expect("series"),
        );
        store.insert(
            Series::new("labels", vec![Point::new("Mon", 2.0)], true, CurveMode::None)
                .expect("series"),
        );
        store
    }

    #[test]
    fn mutations_are_visible_immediately() {
        let mut store = store();
        store
            .move_point("a", 1, Delta::new(0.5, -1.0))
            .expect("move");
        assert_eq!(
            store.get("a").expect("series").points()[1],
            Point::numeric(1.5, 0.0)
        );
    }

    #[test]
    fn out_of_range_index_fails_fast() {
        let mut store = store();
        let err = store
            .set_point("a", 2, Point::numeric(0.0, 0.0))
            .expect_err("out of range");
        assert_eq!(
            err,
            ChartError::InvalidReference {
                series: "a".to_owned(),
                index: 2,
                len: 2
            }
        );
    }

    #[test]
    fn category_points_cannot_be_delta_moved() {
        let mut store = store();
        assert!(store.move_point("labels", 0, Delta::new(1.0, 1.0)).is_err());
        store
            .set_point("labels", 0, Point::new("Tue", 3.0))
            .expect("set");
    }

    #[test]
    fn empty_series_is_rejected() {
        assert!(Series::new("empty", Vec::new(), true, CurveMode::None).is_err());
    }
}
