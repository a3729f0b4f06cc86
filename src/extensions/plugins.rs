use serde::{Deserialize, Serialize};

use crate::interaction::{ControlPointRef, InteractionMode};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub series_len: usize,
    pub interaction_mode: InteractionMode,
    pub pan_enabled: bool,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    DataLoaded { series_len: usize },
    DragStarted { target: ControlPointRef },
    PointMoved { target: ControlPointRef, propagated: usize },
    MoveDropped { target: ControlPointRef },
    DragCommitted { target: ControlPointRef },
    DragAborted { target: ControlPointRef },
    PanToggled { enabled: bool },
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins can observe drag lifecycle events and read engine context without
/// mutating the series store directly.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &PluginEvent, context: PluginContext);
}
