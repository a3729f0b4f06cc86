use crate::core::{AxisConfig, AxisKind, Coordinate, Point};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::{ChartEngineConfig, ChartKind, InputData};

pub(super) fn validate_config(config: &ChartEngineConfig) -> ChartResult<()> {
    if !config.viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }

    for (axis_name, axis) in [("x", &config.x_axis), ("y", &config.y_axis)] {
        if axis.is_category() && config.chart_kind.is_curve_fit() {
            return Err(ChartError::InvalidConfig(format!(
                "{axis_name} axis: Bezier charts do not support categorical data"
            )));
        }
        // Line charts derive x labels from the data when none are given.
        let labels_from_data = config.chart_kind == ChartKind::Line && axis_name == "x";
        if axis.is_category() && axis.labels.is_empty() && !labels_from_data {
            return Err(ChartError::InvalidConfig(format!(
                "{axis_name} axis: categorical data requires labels"
            )));
        }
    }
    if config.chart_kind == ChartKind::Line && config.y_axis.is_category() {
        return Err(ChartError::InvalidConfig(
            "line charts require a linear y axis".to_owned(),
        ));
    }

    for color in &config.colors {
        Color::from_hex(color)?;
    }
    for (name, style) in &config.series_styles {
        if let Some(color) = &style.color {
            Color::from_hex(color)?;
        }
        if !style.point_radius.is_finite() || style.point_radius < 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "series `{name}`: point radius must be finite and >= 0"
            )));
        }
        if style
            .border_dash
            .iter()
            .any(|value| !value.is_finite() || *value < 0.0)
        {
            return Err(ChartError::InvalidConfig(format!(
                "series `{name}`: border dash entries must be finite and >= 0"
            )));
        }
    }
    if !config.tension.is_finite() {
        return Err(ChartError::InvalidConfig(
            "tension must be finite".to_owned(),
        ));
    }
    Ok(())
}

/// Checks shape, lengths and axis compatibility of host-supplied data.
pub(super) fn validate_input(
    config: &ChartEngineConfig,
    x_axis: &AxisConfig,
    y_axis: &AxisConfig,
    data: &InputData,
) -> ChartResult<()> {
    let expected = config.chart_kind.data_shape();
    if data.shape() != expected {
        return Err(ChartError::InvalidData(format!(
            "{:?} charts expect {expected:?} data, got {:?}",
            config.chart_kind,
            data.shape()
        )));
    }
    if config.chart_kind.is_curve_fit() && (x_axis.is_category() || y_axis.is_category()) {
        return Err(ChartError::InvalidData(
            "Bezier charts do not support categorical data".to_owned(),
        ));
    }
    if let InputData::Labeled(series) = data {
        let reference = data.first_series_labels();
        for (name, values) in series {
            if !values.keys().eq(reference.iter()) {
                return Err(ChartError::InvalidData(format!(
                    "series `{name}`: labeled series must share the same x labels in the same order"
                )));
            }
        }
    }

    for (name, points) in data.to_points()? {
        if points.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "series `{name}` must contain at least one point"
            )));
        }
        for (index, point) in points.iter().enumerate() {
            validate_point(&name, index, point, x_axis, y_axis)?;
        }
    }
    Ok(())
}

fn validate_point(
    series: &str,
    index: usize,
    point: &Point,
    x_axis: &AxisConfig,
    y_axis: &AxisConfig,
) -> ChartResult<()> {
    for (axis_name, coordinate, axis) in [("x", &point.x, x_axis), ("y", &point.y, y_axis)] {
        match (axis.kind, coordinate) {
            (AxisKind::Linear, Coordinate::Number(value)) if value.is_finite() => {}
            (AxisKind::Linear, Coordinate::Number(_)) => {
                return Err(ChartError::InvalidData(format!(
                    "series `{series}` point {index}: {axis_name} must be finite"
                )));
            }
            (AxisKind::Linear, Coordinate::Category(label)) => {
                return Err(ChartError::InvalidData(format!(
                    "series `{series}` point {index}: label `{label}` on linear {axis_name} axis"
                )));
            }
            (AxisKind::Category, Coordinate::Category(label)) => {
                if !axis.labels.iter().any(|candidate| candidate == label) {
                    return Err(ChartError::InvalidData(format!(
                        "series `{series}` point {index}: unknown {axis_name} label `{label}`"
                    )));
                }
            }
            (AxisKind::Category, Coordinate::Number(value)) => {
                return Err(ChartError::InvalidData(format!(
                    "series `{series}` point {index}: number {value} on category {axis_name} axis"
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_config, validate_input};
    use crate::api::{ChartEngineConfig, ChartKind, InputData, XySeries};
    use crate::core::{AxisConfig, Viewport};

    fn config(kind: ChartKind) -> ChartEngineConfig {
        ChartEngineConfig::new(Viewport::new(400, 300), kind)
    }

    #[test]
    fn bezier_rejects_category_axis() {
        let config = config(ChartKind::Bezier).with_x_axis(AxisConfig::category(["a", "b"]));
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn scatter_category_axis_requires_labels() {
        let config = config(ChartKind::Scatter).with_y_axis(AxisConfig::category(Vec::<String>::new()));
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn invalid_palette_color_is_rejected() {
        let config = config(ChartKind::Scatter).with_colors(["blue"]);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn scatter_with_unknown_label_is_rejected() {
        let config = config(ChartKind::Scatter).with_x_axis(AxisConfig::category(["a", "b"]));
        let data = InputData::Xy(
            [(
                "s".to_owned(),
                XySeries::new(vec!["c".into()], vec![1.0.into()]),
            )]
            .into_iter()
            .collect(),
        );
        assert!(validate_input(&config, &config.x_axis, &config.y_axis, &data).is_err());
    }

    #[test]
    fn line_chart_rejects_xy_data() {
        let config = config(ChartKind::Line);
        let data = InputData::Xy(
            [("s".to_owned(), XySeries::from_pairs(&[(0.0, 1.0)]))]
                .into_iter()
                .collect(),
        );
        assert!(validate_input(&config, &config.x_axis, &config.y_axis, &data).is_err());
    }

    #[test]
    fn bezier_rejects_labels_on_an_inferred_category_axis() {
        let config = config(ChartKind::CubicBezier);
        let data = InputData::Xy(
            [(
                "s".to_owned(),
                XySeries::new(vec!["a".into()], vec![1.0.into()]),
            )]
            .into_iter()
            .collect(),
        );
        let inferred = AxisConfig::category(["a"]);
        assert!(validate_input(&config, &inferred, &config.y_axis, &data).is_err());
    }
}
