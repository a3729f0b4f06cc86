//! Smooth cubic spline through prescribed anchors.
//!
//! Produces the interleaved `K0, P1_0, P2_0, K1, ..., Kn` control-point list
//! consumed by cubic curve mode, with C2-continuous handles obtained from the
//! classic tridiagonal system for Bezier splines.

use crate::error::{ChartError, ChartResult};

use super::types::DataPoint;

/// Generates cubic handles so the spline passes smoothly through `anchors`.
pub fn fit_cubic_control_points(anchors: &[DataPoint]) -> ChartResult<Vec<DataPoint>> {
    if anchors.len() < 2 {
        return Err(ChartError::InvalidData(
            "cubic spline fit requires at least two anchors".to_owned(),
        ));
    }
    if anchors.iter().any(|anchor| !anchor.is_finite()) {
        return Err(ChartError::InvalidData(
            "cubic spline anchors must be finite".to_owned(),
        ));
    }

    if let [start, end] = anchors {
        return Ok(thirds(*start, *end));
    }

    let segments = anchors.len() - 1;
    let first_handles = solve_first_handles(anchors);

    let mut second_handles = Vec::with_capacity(segments);
    for i in 0..segments - 1 {
        second_handles.push(DataPoint::new(
            2.0 * anchors[i + 1].x - first_handles[i + 1].x,
            2.0 * anchors[i + 1].y - first_handles[i + 1].y,
        ));
    }
    let last = segments - 1;
    second_handles.push(DataPoint::new(
        (anchors[segments].x + first_handles[last].x) / 2.0,
        (anchors[segments].y + first_handles[last].y) / 2.0,
    ));

    let mut out = Vec::with_capacity(3 * segments + 1);
    for i in 0..segments {
        out.push(anchors[i]);
        out.push(first_handles[i]);
        out.push(second_handles[i]);
    }
    out.push(anchors[segments]);
    Ok(out)
}

fn thirds(start: DataPoint, end: DataPoint) -> Vec<DataPoint> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    vec![
        start,
        DataPoint::new(start.x + dx / 3.0, start.y + dy / 3.0),
        DataPoint::new(start.x + 2.0 * dx / 3.0, start.y + 2.0 * dy / 3.0),
        end,
    ]
}

/// Solves `A * P1 = b` for the first handle of every segment (Thomas algorithm).
fn solve_first_handles(anchors: &[DataPoint]) -> Vec<DataPoint> {
    let n = anchors.len() - 1;
    debug_assert!(n >= 2, "tridiagonal fit needs at least two segments");

    let mut lower = vec![1.0; n];
    let mut diag = vec![4.0; n];
    let upper = vec![1.0; n];
    let mut rhs = Vec::with_capacity(n);

    diag[0] = 2.0;
    diag[n - 1] = 7.0;
    lower[n - 1] = 2.0;

    rhs.push(DataPoint::new(
        anchors[0].x + 2.0 * anchors[1].x,
        anchors[0].y + 2.0 * anchors[1].y,
    ));
    for i in 1..n - 1 {
        rhs.push(DataPoint::new(
            4.0 * anchors[i].x + 2.0 * anchors[i + 1].x,
            4.0 * anchors[i].y + 2.0 * anchors[i + 1].y,
        ));
    }
    rhs.push(DataPoint::new(
        8.0 * anchors[n - 1].x + anchors[n].x,
        8.0 * anchors[n - 1].y + anchors[n].y,
    ));

    let mut upper_prime = vec![0.0; n];
    let mut rhs_prime = vec![DataPoint::new(0.0, 0.0); n];
    upper_prime[0] = upper[0] / diag[0];
    rhs_prime[0] = DataPoint::new(rhs[0].x / diag[0], rhs[0].y / diag[0]);
    for i in 1..n {
        let m = diag[i] - lower[i] * upper_prime[i - 1];
        upper_prime[i] = upper[i] / m;
        rhs_prime[i] = DataPoint::new(
            (rhs[i].x - lower[i] * rhs_prime[i - 1].x) / m,
            (rhs[i].y - lower[i] * rhs_prime[i - 1].y) / m,
        );
    }

    let mut solution = rhs_prime.clone();
    for i in (0..n - 1).rev() {
        solution[i] = DataPoint::new(
            rhs_prime[i].x - upper_prime[i] * solution[i + 1].x,
            rhs_prime[i].y - upper_prime[i] * solution[i + 1].y,
        );
    }
    solution
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::fit_cubic_control_points;
    use crate::core::DataPoint;

    #[test]
    fn two_anchors_get_thirds() {
        let out = fit_cubic_control_points(&[DataPoint::new(0.0, 0.0), DataPoint::new(3.0, 6.0)])
            .expect("fit");
        assert_eq!(
            out,
            vec![
                DataPoint::new(0.0, 0.0),
                DataPoint::new(1.0, 2.0),
                DataPoint::new(2.0, 4.0),
                DataPoint::new(3.0, 6.0),
            ]
        );
    }

    #[test]
    fn collinear_anchors_keep_handles_on_the_line() {
        let anchors: Vec<_> = (0..5)
            .map(|i| DataPoint::new(f64::from(i), 2.0 * f64::from(i)))
            .collect();
        let out = fit_cubic_control_points(&anchors).expect("fit");
        assert_eq!(out.len(), 13);
        for point in &out {
            assert_relative_eq!(point.y, 2.0 * point.x, epsilon = 1e-9);
        }
    }

    #[test]
    fn interior_anchors_are_smooth() {
        let anchors = [
            DataPoint::new(0.0, 0.0),
            DataPoint::new(1.0, 3.0),
            DataPoint::new(2.0, -1.0),
            DataPoint::new(4.0, 2.0),
        ];
        let out = fit_cubic_control_points(&anchors).expect("fit");
        for anchor_index in [3usize, 6] {
            let before = out[anchor_index - 1];
            let anchor = out[anchor_index];
            let after = out[anchor_index + 1];
            assert_relative_eq!(anchor.x - before.x, after.x - anchor.x, epsilon = 1e-9);
            assert_relative_eq!(anchor.y - before.y, after.y - anchor.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn single_anchor_is_rejected() {
        assert!(fit_cubic_control_points(&[DataPoint::new(0.0, 0.0)]).is_err());
    }
}
