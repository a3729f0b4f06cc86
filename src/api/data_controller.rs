use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::{
    AxisConfig, AxisKind, CurveMode, DataPoint, Point, Series, SeriesStore,
    fit_cubic_control_points, sample_series,
};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::validation::validate_input;
use super::{AxisSelector, ChartEngine, ChartKind, InputData, PluginEvent, infer_axis_kind};

impl<R: Renderer> ChartEngine<R> {
    /// Replaces all chart data with a fresh copy of `data`.
    ///
    /// The new store and its curves are built before anything else changes,
    /// so rejected data leaves the chart and any drag untouched. Otherwise an
    /// in-flight drag is aborted: its session is discarded, pan is re-enabled
    /// and nothing is delivered to the host. Indices of the old data are
    /// never carried over to the new one.
    pub fn set_data(&mut self, data: InputData) -> ChartResult<()> {
        let x_axis = self.resolve_axis(&self.config.x_axis, &data, AxisSelector::X);
        let y_axis = self.resolve_axis(&self.config.y_axis, &data, AxisSelector::Y);
        validate_input(&self.config, &x_axis, &y_axis, &data)?;

        let store = self.build_store(&data)?;
        let curves = sample_store(&store)?;

        if let Some(target) = self.session.end() {
            warn!(
                series = %target.series,
                index = target.index,
                "input data replaced during drag; aborting drag"
            );
            self.emit_plugin_event(PluginEvent::DragAborted { target });
            self.emit_plugin_event(PluginEvent::PanToggled { enabled: true });
        }

        self.x_axis = x_axis;
        self.y_axis = y_axis;
        self.store = store;
        self.curves = curves;
        debug!(series_count = self.store.len(), "set chart data");
        self.emit_plugin_event(PluginEvent::DataLoaded {
            series_len: self.store.len(),
        });
        self.render_if_possible();
        Ok(())
    }

    fn build_store(&self, data: &InputData) -> ChartResult<SeriesStore> {
        let mut store = SeriesStore::new();
        for (name, points) in data.to_points()? {
            let editable = !self.config.is_fixed(&name);
            let curve_mode = if editable {
                self.config.chart_kind.curve_mode()
            } else {
                CurveMode::None
            };
            let points = if editable && self.should_fit_control_points() {
                fit_points(&name, &points)?
            } else {
                points
            };
            store.insert(Series::new(name, points, editable, curve_mode)?);
        }
        Ok(store)
    }

    fn should_fit_control_points(&self) -> bool {
        self.config.fit_control_points && self.config.chart_kind == ChartKind::CubicBezier
    }

    /// Effective axis for `data`.
    ///
    /// Labeled data brings its own x labels unless the config names them. An
    /// axis left at its default becomes categorical as soon as the data puts
    /// a label on it.
    fn resolve_axis(
        &self,
        configured: &AxisConfig,
        data: &InputData,
        axis: AxisSelector,
    ) -> AxisConfig {
        if self.config.chart_kind == ChartKind::Line && axis == AxisSelector::X {
            if configured.is_category() && !configured.labels.is_empty() {
                return configured.clone();
            }
            return AxisConfig::category(data.first_series_labels());
        }
        let left_at_default = *configured == AxisConfig::default();
        if left_at_default && infer_axis_kind(data, axis) == AxisKind::Category {
            return AxisConfig::category(data.axis_labels(axis));
        }
        configured.clone()
    }

    /// Re-runs the sampler over the whole series; curves are never patched.
    pub(super) fn refresh_curve(&mut self, name: &str) -> ChartResult<()> {
        let samples = sample_series(self.store.get(name)?)?;
        self.curves.insert(name.to_owned(), samples);
        Ok(())
    }
}

fn sample_store(store: &SeriesStore) -> ChartResult<IndexMap<String, Vec<Point>>> {
    store
        .iter()
        .map(|series| Ok((series.name().to_owned(), sample_series(series)?)))
        .collect()
}

fn fit_points(name: &str, points: &[Point]) -> ChartResult<Vec<Point>> {
    let anchors = points
        .iter()
        .map(|point| {
            point.as_data_point().ok_or_else(|| {
                ChartError::InvalidData(format!("series `{name}`: spline anchors must be numeric"))
            })
        })
        .collect::<ChartResult<Vec<DataPoint>>>()?;
    Ok(fit_cubic_control_points(&anchors)?
        .into_iter()
        .map(Point::from)
        .collect())
}
