use std::collections::HashSet;

use indexmap::IndexMap;

use crate::core::Point;
use crate::error::ChartResult;
use crate::render::Renderer;

use super::input_data::xy_from_points;
use super::{ChartEngine, EditedData};

/// Drops every sample whose exact `(x, y)` already appeared earlier.
///
/// Neighboring Bezier windows both emit their shared anchor; this keeps the
/// first occurrence and preserves order. Equality is exact, with no tolerance.
#[must_use]
pub fn dedup_points(samples: &[Point]) -> Vec<Point> {
    let mut seen = HashSet::with_capacity(samples.len());
    samples
        .iter()
        .filter(|point| seen.insert(point.key()))
        .cloned()
        .collect()
}

impl<R: Renderer> ChartEngine<R> {
    /// Builds the host payload from the settled store.
    pub(super) fn reconcile_output(&self) -> ChartResult<EditedData> {
        if !self.config.chart_kind.is_curve_fit() {
            return EditedData::from_store(&self.store, self.config.chart_kind.data_shape());
        }

        let mut out = IndexMap::with_capacity(self.store.len());
        for series in self.store.iter().filter(|series| series.is_editable()) {
            let curve = self.curve(series.name())?;
            out.insert(
                series.name().to_owned(),
                xy_from_points(dedup_points(curve).iter()),
            );
        }
        Ok(EditedData::Xy(out))
    }
}

#[cfg(test)]
mod tests {
    use super::dedup_points;
    use crate::core::Point;

    #[test]
    fn removes_shared_anchor_duplicates() {
        let samples = vec![
            Point::numeric(0.0, 0.0),
            Point::numeric(1.0, 1.0),
            Point::numeric(1.0, 1.0),
            Point::numeric(2.0, 4.0),
        ];
        assert_eq!(
            dedup_points(&samples),
            vec![
                Point::numeric(0.0, 0.0),
                Point::numeric(1.0, 1.0),
                Point::numeric(2.0, 4.0),
            ]
        );
    }

    #[test]
    fn removes_non_adjacent_repeats_too() {
        let samples = vec![
            Point::numeric(0.0, 0.0),
            Point::numeric(1.0, 1.0),
            Point::numeric(0.0, 0.0),
        ];
        assert_eq!(dedup_points(&samples).len(), 2);
    }

    #[test]
    fn near_equal_points_are_kept() {
        let samples = vec![Point::numeric(1.0, 1.0), Point::numeric(1.0 + 1e-12, 1.0)];
        assert_eq!(dedup_points(&samples).len(), 2);
    }
}
