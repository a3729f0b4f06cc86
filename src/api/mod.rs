mod data_controller;
mod drag_controller;
mod engine;
mod engine_config;
mod engine_init;
mod input_data;
mod json_contract;
mod output_reconciler;
mod plugin_dispatch;
mod plugin_registry;
mod render_frame_builder;
mod validation;

pub use crate::extensions::PluginEvent;
pub use drag_controller::{MoveOutcome, PointerDownOutcome};
pub use engine::ChartEngine;
pub use engine_config::{
    ChartEngineConfig, ChartKind, DEFAULT_COLORS, MAX_LINE_TENSION, SeriesStyle,
};
pub use input_data::{
    AxisSelector, DataShape, EditedData, EditedSeries, InputData, XySeries, infer_axis_kind,
};
pub use json_contract::{COMMIT_PAYLOAD_JSON_SCHEMA_V1, CommitPayloadJsonContractV1};
pub use output_reconciler::dedup_points;
pub use render_frame_builder::RenderFrameBuilder;
