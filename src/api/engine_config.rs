use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AxisConfig, CurveMode, Viewport};
use crate::error::{ChartError, ChartResult};

use super::DataShape;

/// Upper bound applied to the line-chart smoothing parameter.
pub const MAX_LINE_TENSION: f64 = 0.4;

/// Default round-robin palette for series without an explicit color.
pub const DEFAULT_COLORS: [&str; 20] = [
    "#3366CC", "#DC3912", "#FF9900", "#109618", "#990099", "#3B3EAC", "#0099C6", "#DD4477",
    "#66AA00", "#B82E2E", "#316395", "#994499", "#22AA99", "#AAAA11", "#6633CC", "#E67300",
    "#8B0707", "#329262", "#5574A6", "#651067",
];

/// Chart family. Selects curve mode, data shape and draggable axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Labeled data, only `y` is draggable.
    Line,
    /// Free points on both axes.
    #[default]
    Scatter,
    /// Quadratic Bezier through every third point pair.
    Bezier,
    /// Cubic Bezier spline with tangent constraints.
    CubicBezier,
}

impl ChartKind {
    #[must_use]
    pub fn curve_mode(self) -> CurveMode {
        match self {
            Self::Line | Self::Scatter => CurveMode::None,
            Self::Bezier => CurveMode::Quadratic,
            Self::CubicBezier => CurveMode::Cubic,
        }
    }

    #[must_use]
    pub fn data_shape(self) -> DataShape {
        match self {
            Self::Line => DataShape::Labeled,
            Self::Scatter | Self::Bezier | Self::CubicBezier => DataShape::Xy,
        }
    }

    #[must_use]
    pub fn drags_x(self) -> bool {
        self != Self::Line
    }

    #[must_use]
    pub fn is_curve_fit(self) -> bool {
        self.curve_mode().is_curve_fit()
    }
}

/// Per-series presentation options consumed by the view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default = "default_point_radius")]
    pub point_radius: f64,
    #[serde(default)]
    pub border_dash: Vec<f64>,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            color: None,
            point_radius: default_point_radius(),
            border_dash: Vec::new(),
        }
    }
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can hand over chart setup
/// as JSON without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub chart_kind: ChartKind,
    #[serde(default)]
    pub x_axis: AxisConfig,
    #[serde(default)]
    pub y_axis: AxisConfig,
    #[serde(default)]
    pub fixed_series: Vec<String>,
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,
    #[serde(default)]
    pub series_styles: IndexMap<String, SeriesStyle>,
    #[serde(default = "default_tension")]
    pub tension: f64,
    #[serde(default)]
    pub fit_control_points: bool,
    /// Scatter charts connect their points only when enabled.
    #[serde(default)]
    pub show_line: bool,
}

impl ChartEngineConfig {
    /// Creates a config with linear axes and the default palette.
    #[must_use]
    pub fn new(viewport: Viewport, chart_kind: ChartKind) -> Self {
        Self {
            viewport,
            chart_kind,
            x_axis: AxisConfig::linear(),
            y_axis: AxisConfig::linear(),
            fixed_series: Vec::new(),
            colors: default_colors(),
            series_styles: IndexMap::new(),
            tension: default_tension(),
            fit_control_points: false,
            show_line: false,
        }
    }

    #[must_use]
    pub fn with_x_axis(mut self, axis: AxisConfig) -> Self {
        self.x_axis = axis;
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, axis: AxisConfig) -> Self {
        self.y_axis = axis;
        self
    }

    /// Marks series as display-only.
    #[must_use]
    pub fn with_fixed_series<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fixed_series = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_series_style(mut self, name: impl Into<String>, style: SeriesStyle) -> Self {
        self.series_styles.insert(name.into(), style);
        self
    }

    #[must_use]
    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = tension;
        self
    }

    /// Treats cubic input points as anchors and generates smooth handles.
    #[must_use]
    pub fn with_fit_control_points(mut self, enabled: bool) -> Self {
        self.fit_control_points = enabled;
        self
    }

    #[must_use]
    pub fn with_show_line(mut self, enabled: bool) -> Self {
        self.show_line = enabled;
        self
    }

    /// Whether series are drawn as connected polylines.
    #[must_use]
    pub fn draws_lines(&self) -> bool {
        self.chart_kind != ChartKind::Scatter || self.show_line
    }

    #[must_use]
    pub fn is_fixed(&self, series: &str) -> bool {
        self.fixed_series.iter().any(|name| name == series)
    }

    /// Line smoothing handed to the view, clamped into `[0, MAX_LINE_TENSION]`.
    #[must_use]
    pub fn effective_tension(&self) -> f64 {
        self.tension.clamp(0.0, MAX_LINE_TENSION)
    }

    /// Style for a series, falling back to the palette slot at `position`.
    #[must_use]
    pub fn resolved_style(&self, series: &str, position: usize) -> SeriesStyle {
        let mut style = self.series_styles.get(series).cloned().unwrap_or_default();
        if style.color.is_none() && !self.colors.is_empty() {
            style.color = Some(self.colors[position % self.colors.len()].clone());
        }
        style
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config json: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }
}

fn default_colors() -> Vec<String> {
    DEFAULT_COLORS.iter().map(|color| (*color).to_owned()).collect()
}

fn default_tension() -> f64 {
    0.3
}

fn default_point_radius() -> f64 {
    4.0
}
