pub mod axis;
pub mod bezier;
pub mod category_scale;
pub mod constraint;
pub mod curve;
pub mod scale;
pub mod series;
pub mod spline_fit;
pub mod types;

pub use axis::{AxisConfig, AxisKind, AxisOrientation, AxisRange, AxisScale, PlotGeometry};
pub use category_scale::CategoryScale;
pub use constraint::{
    ConstraintRule, Delta, PropagatedMove, cubic_constraint_rule, propagate_cubic_drag,
};
pub use curve::{
    CURVE_SAMPLE_STEPS, ControlPointRole, CurveMode, SAMPLES_PER_SEGMENT, control_point_role,
    sample_control_points, sample_series,
};
pub use scale::{LinearScale, map_range, to_data, to_pixel};
pub use series::{Series, SeriesStore};
pub use spline_fit::fit_cubic_control_points;
pub use types::{Coordinate, DataPoint, PlotArea, Point, PointKey, Viewport};
