use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::bezier::segment_lut;
use super::series::Series;
use super::types::{DataPoint, Point};

/// Parameter steps evaluated per Bezier segment.
pub const CURVE_SAMPLE_STEPS: usize = 10;

/// Samples emitted per segment, both endpoints included.
pub const SAMPLES_PER_SEGMENT: usize = CURVE_SAMPLE_STEPS + 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveMode {
    #[default]
    None,
    Quadratic,
    Cubic,
}

impl CurveMode {
    /// Control points per segment window, `None` for plain polylines.
    #[must_use]
    pub fn window_len(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Quadratic => Some(3),
            Self::Cubic => Some(4),
        }
    }

    /// Distance between consecutive window starts.
    #[must_use]
    pub fn window_stride(self) -> Option<usize> {
        self.window_len().map(|len| len - 1)
    }

    #[must_use]
    pub fn is_curve_fit(self) -> bool {
        self != Self::None
    }

    /// Start indices of every complete segment window for a series of `len` points.
    #[must_use]
    pub fn window_starts(self, len: usize) -> Vec<usize> {
        let (Some(window), Some(stride)) = (self.window_len(), self.window_stride()) else {
            return Vec::new();
        };
        (0..len)
            .step_by(stride)
            .take_while(|start| start + window - 1 < len)
            .collect()
    }

    #[must_use]
    pub fn segment_count(self, len: usize) -> usize {
        self.window_starts(len).len()
    }
}

/// Semantic role of a control point within its series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlPointRole {
    /// The sampled curve passes through it.
    Anchor,
    /// Shapes the curve without lying on it.
    Handle,
}

/// Classifies point `index` of a series with `len` points.
#[must_use]
pub fn control_point_role(mode: CurveMode, index: usize, len: usize) -> ControlPointRole {
    debug_assert!(index < len, "index {index} out of range for len {len}");
    let is_endpoint = index == 0 || index + 1 == len;
    let is_anchor = match mode {
        CurveMode::None => true,
        CurveMode::Quadratic => is_endpoint || index % 2 == 0,
        CurveMode::Cubic => is_endpoint || index % 3 == 0,
    };
    if is_anchor {
        ControlPointRole::Anchor
    } else {
        ControlPointRole::Handle
    }
}

/// Samples Bezier windows over numeric control points.
///
/// Consecutive windows share an anchor, which is emitted once per window.
/// Fewer points than one window yields an empty polyline.
#[must_use]
pub fn sample_control_points(mode: CurveMode, points: &[DataPoint]) -> Vec<DataPoint> {
    let Some(window) = mode.window_len() else {
        return points.to_vec();
    };
    let starts = mode.window_starts(points.len());
    let mut samples = Vec::with_capacity(starts.len() * SAMPLES_PER_SEGMENT);
    for start in starts {
        samples.extend(segment_lut(
            &points[start..start + window],
            CURVE_SAMPLE_STEPS,
        ));
    }
    samples
}

/// Recomputes the display polyline of a series from its current points.
///
/// Plain series are returned as-is; curve-fit series must be fully numeric.
pub fn sample_series(series: &Series) -> ChartResult<Vec<Point>> {
    if !series.curve_mode().is_curve_fit() {
        return Ok(series.points().to_vec());
    }

    let numeric = series
        .points()
        .iter()
        .enumerate()
        .map(|(index, point)| {
            point.as_data_point().ok_or_else(|| {
                ChartError::InvalidData(format!(
                    "curve series `{}` has a non-numeric point at index {index}",
                    series.name()
                ))
            })
        })
        .collect::<ChartResult<Vec<_>>>()?;

    Ok(sample_control_points(series.curve_mode(), &numeric)
        .into_iter()
        .map(Point::from)
        .collect())
}
