use super::types::DataPoint;

/// Evaluates a quadratic Bezier segment at `t` in `[0, 1]`.
#[must_use]
pub fn quadratic_point(p0: DataPoint, p1: DataPoint, p2: DataPoint, t: f64) -> DataPoint {
    let mt = 1.0 - t;
    let a = mt * mt;
    let b = 2.0 * mt * t;
    let c = t * t;
    DataPoint::new(
        a * p0.x + b * p1.x + c * p2.x,
        a * p0.y + b * p1.y + c * p2.y,
    )
}

/// Evaluates a cubic Bezier segment at `t` in `[0, 1]`.
#[must_use]
pub fn cubic_point(p0: DataPoint, p1: DataPoint, p2: DataPoint, p3: DataPoint, t: f64) -> DataPoint {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    DataPoint::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

/// Look-up table of one segment: `steps + 1` samples at `t = k / steps`.
///
/// `control` must hold 3 (quadratic) or 4 (cubic) points. Both endpoints are
/// returned exactly, not re-evaluated, so shared anchors stay bit-identical
/// across neighboring segments.
#[must_use]
pub fn segment_lut(control: &[DataPoint], steps: usize) -> Vec<DataPoint> {
    debug_assert!(steps > 0, "lut needs at least one step");
    debug_assert!(
        control.len() == 3 || control.len() == 4,
        "bezier segment needs 3 or 4 control points, got {}",
        control.len()
    );

    let mut lut = Vec::with_capacity(steps + 1);
    for k in 0..=steps {
        let sample = if k == 0 {
            control[0]
        } else if k == steps {
            control[control.len() - 1]
        } else {
            let t = k as f64 / steps as f64;
            match control {
                [p0, p1, p2] => quadratic_point(*p0, *p1, *p2, t),
                [p0, p1, p2, p3] => cubic_point(*p0, *p1, *p2, *p3, t),
                _ => continue,
            }
        };
        lut.push(sample);
    }
    lut
}
