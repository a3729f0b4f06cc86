use indexmap::IndexMap;
use tracing::debug;

use crate::core::{PlotArea, PlotGeometry, SeriesStore};
use crate::error::ChartResult;
use crate::interaction::DragSession;
use crate::render::Renderer;

use super::validation::validate_config;
use super::{ChartEngine, ChartEngineConfig};

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine with an empty series store.
    ///
    /// The plot area initially spans the whole viewport with unit axis ranges;
    /// hosts refresh it through `set_plot_geometry` once their view is laid out.
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        validate_config(&config)?;
        debug!(
            chart_kind = ?config.chart_kind,
            width = config.viewport.width,
            height = config.viewport.height,
            "create chart engine"
        );

        Ok(Self {
            renderer,
            x_axis: config.x_axis.clone(),
            y_axis: config.y_axis.clone(),
            geometry: PlotGeometry::new(PlotArea::from_viewport(config.viewport)),
            config,
            store: SeriesStore::new(),
            curves: IndexMap::new(),
            session: DragSession::default(),
            last_commit: None,
            plugins: Vec::new(),
        })
    }
}
