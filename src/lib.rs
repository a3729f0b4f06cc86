//! draggable-chart: drag-interaction and curve-reconstruction engine.
//!
//! Hosts feed series data and pointer events; the engine maps pixels to data,
//! keeps cubic Bezier handles tangent-consistent while points are dragged,
//! resamples the display curves and hands edited data back on release.
//! Drawing and hit-testing stay with the host's view.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartKind};
pub use error::{ChartError, ChartResult};
