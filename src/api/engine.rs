use indexmap::IndexMap;

use crate::core::{
    AxisConfig, AxisOrientation, AxisScale, Coordinate, PlotGeometry, Point, Series, SeriesStore,
    Viewport,
};
use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartPlugin;
use crate::interaction::{ControlPointRef, DragSession, InteractionMode};
use crate::render::Renderer;

use super::{ChartEngineConfig, EditedData, RenderFrameBuilder};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the series store, the drag session and the derived
/// curves of one chart instance, and pushes frames to its renderer. Engines
/// share nothing, so several charts can be edited side by side.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) x_axis: AxisConfig,
    pub(super) y_axis: AxisConfig,
    pub(super) geometry: PlotGeometry,
    pub(super) store: SeriesStore,
    pub(super) curves: IndexMap<String, Vec<Point>>,
    pub(super) session: DragSession,
    pub(super) last_commit: Option<EditedData>,
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    /// Effective x axis, including labels derived from the data.
    #[must_use]
    pub fn x_axis(&self) -> &AxisConfig {
        &self.x_axis
    }

    /// Effective y axis, including a kind inferred from the data.
    #[must_use]
    pub fn y_axis(&self) -> &AxisConfig {
        &self.y_axis
    }

    #[must_use]
    pub fn plot_geometry(&self) -> PlotGeometry {
        self.geometry
    }

    /// Refreshes plot rectangle and axis ranges; the view calls this before moves.
    pub fn set_plot_geometry(&mut self, geometry: PlotGeometry) {
        self.geometry = geometry;
    }

    #[must_use]
    pub fn series_store(&self) -> &SeriesStore {
        &self.store
    }

    pub fn series(&self, name: &str) -> ChartResult<&Series> {
        self.store.get(name)
    }

    /// Currently sampled display polyline of a series.
    pub fn curve(&self, name: &str) -> ChartResult<&[Point]> {
        self.curves
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| ChartError::UnknownSeries(name.to_owned()))
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.session.mode()
    }

    #[must_use]
    pub fn active_drag(&self) -> Option<&ControlPointRef> {
        self.session.active()
    }

    /// Whether the view's independent pan gesture should be enabled.
    #[must_use]
    pub fn pan_enabled(&self) -> bool {
        self.session.pan_enabled()
    }

    /// Last payload delivered to the host by a committed drag.
    #[must_use]
    pub fn last_commit(&self) -> Option<&EditedData> {
        self.last_commit.as_ref()
    }

    pub(super) fn axis_scales(&self) -> ChartResult<(AxisScale, AxisScale)> {
        let x = AxisScale::resolve(
            &self.x_axis,
            self.geometry.x_range,
            self.geometry.area,
            AxisOrientation::Horizontal,
        )?;
        let y = AxisScale::resolve(
            &self.y_axis,
            self.geometry.y_range,
            self.geometry.area,
            AxisOrientation::Vertical,
        )?;
        Ok((x, y))
    }

    /// Maps a pixel position to data coordinates with the current geometry.
    pub fn map_pixel_to_point(&self, x: f64, y: f64) -> ChartResult<Point> {
        let (x_scale, y_scale) = self.axis_scales()?;
        Ok(Point {
            x: x_scale.pixel_to_coordinate(x)?,
            y: y_scale.pixel_to_coordinate(y)?,
        })
    }

    /// Maps data coordinates to a pixel position with the current geometry.
    pub fn map_point_to_pixel(&self, point: &Point) -> ChartResult<(f64, f64)> {
        let (x_scale, y_scale) = self.axis_scales()?;
        Ok((
            x_scale.coordinate_to_pixel(&point.x)?,
            y_scale.coordinate_to_pixel(&point.y)?,
        ))
    }

    pub fn map_coordinate_to_pixel_x(&self, coordinate: &Coordinate) -> ChartResult<f64> {
        self.axis_scales()?.0.coordinate_to_pixel(coordinate)
    }

    pub fn map_coordinate_to_pixel_y(&self, coordinate: &Coordinate) -> ChartResult<f64> {
        self.axis_scales()?.1.coordinate_to_pixel(coordinate)
    }

    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = RenderFrameBuilder::new(self).build()?;
        self.renderer.render(&frame)?;
        self.emit_plugin_event(super::PluginEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
