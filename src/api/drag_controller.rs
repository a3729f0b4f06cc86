use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{Coordinate, CurveMode, Delta, Point, propagate_cubic_drag};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{ControlPointRef, HitResolver};
use crate::render::Renderer;

use super::{ChartEngine, EditedData, PluginEvent};

/// Result of a pointer-down event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerDownOutcome {
    /// A drag session started on the referenced point.
    Started,
    /// The view reported no control point under the pointer.
    NoHit,
    /// The referenced series is display-only.
    FixedSeries,
    /// Another drag is already active; it keeps its target.
    AlreadyDragging,
}

/// Result of a pointer-move event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// No drag is active.
    Idle,
    /// The dragged point and `propagated` dependent points were updated.
    Applied { propagated: usize },
    /// Geometry was degenerate; nothing changed and the drag stays active.
    Dropped,
}

impl<R: Renderer> ChartEngine<R> {
    /// Starts a drag on `hit`, the control point the view resolved under the pointer.
    ///
    /// Unknown series and out-of-range indices are collaborator defects and
    /// fail with an error instead of being clamped.
    pub fn pointer_down(&mut self, hit: Option<ControlPointRef>) -> ChartResult<PointerDownOutcome> {
        if let Some(active) = self.session.active() {
            trace!(series = %active.series, index = active.index, "ignore pointer down during drag");
            return Ok(PointerDownOutcome::AlreadyDragging);
        }
        let Some(target) = hit else {
            return Ok(PointerDownOutcome::NoHit);
        };

        let series = self.store.get(&target.series)?;
        if target.index >= series.len() {
            return Err(ChartError::InvalidReference {
                series: target.series,
                index: target.index,
                len: series.len(),
            });
        }
        if !series.is_editable() {
            debug!(series = %target.series, "ignore pointer down on fixed series");
            return Ok(PointerDownOutcome::FixedSeries);
        }

        debug!(series = %target.series, index = target.index, "start drag");
        self.session.begin(target.clone());
        self.emit_plugin_event(PluginEvent::DragStarted { target });
        self.emit_plugin_event(PluginEvent::PanToggled { enabled: false });
        self.render_if_possible();
        Ok(PointerDownOutcome::Started)
    }

    /// Resolves the hit through the view and forwards to [`Self::pointer_down`].
    pub fn pointer_down_at(
        &mut self,
        x: f64,
        y: f64,
        resolver: &impl HitResolver,
    ) -> ChartResult<PointerDownOutcome> {
        let hit = resolver.resolve_hit(x, y);
        self.pointer_down(hit)
    }

    /// Moves the dragged point to the pixel position `(x, y)`.
    ///
    /// Cubic series also move the dependent handles so tangents stay
    /// continuous. Every applied move is followed by a full resample of the
    /// series and a redraw.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<MoveOutcome> {
        self.session.on_pointer_move(x, y);
        let Some(target) = self.session.active().cloned() else {
            return Ok(MoveOutcome::Idle);
        };

        if !x.is_finite() || !y.is_finite() {
            let reason = format!("pointer position ({x}, {y}) is not finite");
            return Ok(self.drop_move(target, &reason));
        }
        let mapped = match self.map_pixel_to_point(x, y) {
            Ok(point) => point,
            Err(ChartError::DegenerateGeometry(reason)) => {
                return Ok(self.drop_move(target, &reason));
            }
            Err(err) => return Err(err),
        };

        let series = self.store.get(&target.series)?;
        let curve_mode = series.curve_mode();
        let len = series.len();
        let current = series.point(target.index)?.clone();
        let next = Point {
            x: if self.config.chart_kind.drags_x() {
                mapped.x
            } else {
                current.x.clone()
            },
            y: mapped.y,
        };
        let delta = numeric_delta(&current, &next);

        self.store
            .set_point(&target.series, target.index, next.clone())?;

        let mut propagated = 0;
        if curve_mode == CurveMode::Cubic {
            let delta = delta.ok_or_else(|| {
                ChartError::InvalidData(format!(
                    "cubic series `{}` requires numeric coordinates",
                    target.series
                ))
            })?;
            for dependent in propagate_cubic_drag(target.index, len, delta) {
                self.store
                    .move_point(&target.series, dependent.index, dependent.delta)?;
                propagated += 1;
            }
        }

        self.refresh_curve(&target.series)?;
        trace!(
            series = %target.series,
            index = target.index,
            x = %next.x,
            y = %next.y,
            propagated,
            "apply drag move"
        );
        self.emit_plugin_event(PluginEvent::PointMoved { target, propagated });
        self.render_if_possible();
        Ok(MoveOutcome::Applied { propagated })
    }

    /// Leaves the store untouched and keeps the drag active.
    fn drop_move(&mut self, target: ControlPointRef, reason: &str) -> MoveOutcome {
        warn!(
            series = %target.series,
            index = target.index,
            %reason,
            "dropping drag move"
        );
        self.emit_plugin_event(PluginEvent::MoveDropped { target });
        MoveOutcome::Dropped
    }

    /// Ends the drag and returns the payload delivered to the host.
    ///
    /// Curve-fit charts deliver the deduplicated sampled curves of their
    /// editable series; other charts deliver the whole store. Returns
    /// `Ok(None)` when no drag was active.
    pub fn pointer_up(&mut self) -> ChartResult<Option<EditedData>> {
        let Some(target) = self.session.end() else {
            return Ok(None);
        };
        self.emit_plugin_event(PluginEvent::PanToggled { enabled: true });

        let payload = self.reconcile_output()?;
        debug!(
            series = %target.series,
            index = target.index,
            series_count = payload.len(),
            "commit drag"
        );
        self.last_commit = Some(payload.clone());
        self.emit_plugin_event(PluginEvent::DragCommitted { target });
        self.render_if_possible();
        Ok(Some(payload))
    }
}

fn numeric_delta(current: &Point, next: &Point) -> Option<Delta> {
    match (&current.x, &current.y, &next.x, &next.y) {
        (
            Coordinate::Number(x0),
            Coordinate::Number(y0),
            Coordinate::Number(x1),
            Coordinate::Number(y1),
        ) => Some(Delta::new(x1 - x0, y1 - y0)),
        _ => None,
    }
}
