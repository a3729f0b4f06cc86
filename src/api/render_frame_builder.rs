use tracing::warn;

use crate::core::{AxisScale, CurveMode, Point, Series};
use crate::error::ChartResult;
use crate::render::{Color, LinePrimitive, LineStrokeStyle, MarkerPrimitive, RenderFrame, Renderer};

use super::{ChartEngine, SeriesStyle};

const CURVE_STROKE_WIDTH: f64 = 2.0;
const CONTROL_STROKE_WIDTH: f64 = 1.2;
const CONTROL_DASH: LineStrokeStyle = LineStrokeStyle::Dashed {
    on_px: 8.0,
    off_px: 5.0,
};
const FALLBACK_COLOR: Color = Color::rgb(0.5, 0.5, 0.5);

/// Materializes the current engine state into a `RenderFrame`.
///
/// The frame is rebuilt from the store and the sampled curves on every call.
pub struct RenderFrameBuilder<'a, R: Renderer> {
    engine: &'a ChartEngine<R>,
}

impl<'a, R: Renderer> RenderFrameBuilder<'a, R> {
    #[must_use]
    pub fn new(engine: &'a ChartEngine<R>) -> Self {
        Self { engine }
    }

    pub fn build(&self) -> ChartResult<RenderFrame> {
        let (x_scale, y_scale) = self.engine.axis_scales()?;
        let mut frame = RenderFrame::new(self.engine.viewport());
        frame.pan_enabled = self.engine.pan_enabled();

        for (position, series) in self.engine.store.iter().enumerate() {
            let style = self
                .engine
                .config
                .resolved_style(series.name(), position);
            let color = match &style.color {
                Some(hex) => Color::from_hex(hex)?,
                None => FALLBACK_COLOR,
            };
            if self.engine.config.draws_lines() {
                let curve = self.engine.curve(series.name())?;
                push_curve(&mut frame, curve, &x_scale, &y_scale, &style, color, series)?;
            }
            if series.curve_mode().is_curve_fit() {
                push_control_polygon(&mut frame, series, &x_scale, &y_scale, color)?;
            }
            push_markers(&mut frame, series, &x_scale, &y_scale, &style, color)?;
        }
        Ok(frame)
    }
}

fn project(point: &Point, x_scale: &AxisScale, y_scale: &AxisScale) -> ChartResult<(f64, f64)> {
    Ok((
        x_scale.coordinate_to_pixel(&point.x)?,
        y_scale.coordinate_to_pixel(&point.y)?,
    ))
}

fn push_curve(
    frame: &mut RenderFrame,
    curve: &[Point],
    x_scale: &AxisScale,
    y_scale: &AxisScale,
    style: &SeriesStyle,
    color: Color,
    series: &Series,
) -> ChartResult<()> {
    let stroke_style = match style.border_dash.as_slice() {
        [on_px, off_px, ..] if *on_px > 0.0 => LineStrokeStyle::Dashed {
            on_px: *on_px,
            off_px: *off_px,
        },
        _ => LineStrokeStyle::Solid,
    };
    let color = if series.curve_mode().is_curve_fit() {
        color.with_alpha(0.6)
    } else {
        color
    };

    let mut previous: Option<(f64, f64)> = None;
    for point in curve {
        let (x, y) = project(point, x_scale, y_scale)?;
        if let Some((px, py)) = previous {
            frame.lines.push(
                LinePrimitive::new(px, py, x, y, CURVE_STROKE_WIDTH, color)
                    .with_stroke_style(stroke_style),
            );
        }
        previous = Some((x, y));
    }
    Ok(())
}

/// Dashed anchor-to-handle guides. Cubic series skip the handle-to-handle leg.
fn push_control_polygon(
    frame: &mut RenderFrame,
    series: &Series,
    x_scale: &AxisScale,
    y_scale: &AxisScale,
    color: Color,
) -> ChartResult<()> {
    let points = series.points();
    for end in 1..points.len() {
        if series.curve_mode() == CurveMode::Cubic && end % 3 == 2 && end + 1 != points.len() {
            continue;
        }
        let (x1, y1) = project(&points[end - 1], x_scale, y_scale)?;
        let (x2, y2) = project(&points[end], x_scale, y_scale)?;
        frame.lines.push(
            LinePrimitive::new(x1, y1, x2, y2, CONTROL_STROKE_WIDTH, color)
                .with_stroke_style(CONTROL_DASH),
        );
    }
    Ok(())
}

fn push_markers(
    frame: &mut RenderFrame,
    series: &Series,
    x_scale: &AxisScale,
    y_scale: &AxisScale,
    style: &SeriesStyle,
    color: Color,
) -> ChartResult<()> {
    let color = color.with_alpha(0.8);
    for (index, point) in series.points().iter().enumerate() {
        let (x, y) = project(point, x_scale, y_scale)?;
        frame.markers.push(MarkerPrimitive {
            series: series.name().to_owned(),
            index,
            x,
            y,
            radius: style.point_radius,
            color,
        });
    }
    Ok(())
}

impl<R: Renderer> ChartEngine<R> {
    /// Renders after a state change, logging instead of failing the caller.
    pub(super) fn render_if_possible(&mut self) {
        if let Err(err) = self.render() {
            warn!(error = %err, "skipping redraw");
        }
    }
}
