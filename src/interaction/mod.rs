use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Dragging,
}

/// Identifies one addressable control point of one series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlPointRef {
    pub series: String,
    pub index: usize,
}

impl ControlPointRef {
    #[must_use]
    pub fn new(series: impl Into<String>, index: usize) -> Self {
        Self {
            series: series.into(),
            index,
        }
    }
}

/// Pointer-to-element hit testing supplied by the view.
///
/// The engine never picks points geometrically; it only acts on what the view
/// reports under the pointer.
pub trait HitResolver {
    fn resolve_hit(&self, x: f64, y: f64) -> Option<ControlPointRef>;
}

impl<F> HitResolver for F
where
    F: Fn(f64, f64) -> Option<ControlPointRef>,
{
    fn resolve_hit(&self, x: f64, y: f64) -> Option<ControlPointRef> {
        self(x, y)
    }
}

/// Per-chart drag state: which control point, if any, is being moved.
///
/// At most one drag is active at a time. The view's own pan gesture is
/// disabled exactly while a drag is active.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    active: Option<ControlPointRef>,
    pan_enabled: bool,
    cursor: Option<(f64, f64)>,
}

impl Default for DragSession {
    fn default() -> Self {
        Self {
            active: None,
            pan_enabled: true,
            cursor: None,
        }
    }
}

impl DragSession {
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        if self.active.is_some() {
            InteractionMode::Dragging
        } else {
            InteractionMode::Idle
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn active(&self) -> Option<&ControlPointRef> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn pan_enabled(&self) -> bool {
        self.pan_enabled
    }

    #[must_use]
    pub fn cursor(&self) -> Option<(f64, f64)> {
        self.cursor
    }

    /// Enters `Dragging`. Returns `false` when a drag is already active.
    pub fn begin(&mut self, target: ControlPointRef) -> bool {
        if self.active.is_some() {
            return false;
        }
        self.active = Some(target);
        self.pan_enabled = false;
        true
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
    }

    /// Leaves `Dragging`, returning the released reference.
    pub fn end(&mut self) -> Option<ControlPointRef> {
        let released = self.active.take();
        if released.is_some() {
            self.pan_enabled = true;
        }
        released
    }
}
