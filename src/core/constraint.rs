//! Tangent-continuity constraints for cubic control-point drags.
//!
//! Cubic series are laid out as `A H H A H H A ...`: anchors at every
//! multiple of three plus the final index, two handles between them. When one
//! point moves, its neighbors are nudged so that every anchor keeps its two
//! handles collinear.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Translation in data space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    pub dx: f64,
    pub dy: f64,
}

impl Delta {
    #[must_use]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    #[must_use]
    pub fn negated(self) -> Self {
        Self::new(-self.dx, -self.dy)
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// A dependent point and the translation it must receive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropagatedMove {
    pub index: usize,
    pub delta: Delta,
}

impl PropagatedMove {
    fn new(index: usize, delta: Delta) -> Self {
        Self { index, delta }
    }
}

/// Which constraint fired for a dragged index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintRule {
    /// First anchor: its handle follows rigidly.
    FirstAnchor,
    /// Last anchor: its handle follows rigidly.
    LastAnchor,
    /// Interior anchor: both adjacent handles translate with it.
    InteriorAnchor,
    /// Handle right before an interior anchor: the far handle mirrors it.
    HandleBeforeAnchor,
    /// Handle right after an interior anchor: the far handle mirrors it.
    HandleAfterAnchor,
    /// Handle bound to an endpoint anchor only: nothing else moves.
    Unconstrained,
}

/// Resolves the rule that applies to `index` in a cubic series of `len` points.
#[must_use]
pub fn cubic_constraint_rule(index: usize, len: usize) -> ConstraintRule {
    debug_assert!(index < len, "dragged index {index} out of range for len {len}");
    let last = len.saturating_sub(1);
    if index == 0 {
        ConstraintRule::FirstAnchor
    } else if index == last {
        ConstraintRule::LastAnchor
    } else if index % 3 == 0 {
        ConstraintRule::InteriorAnchor
    } else if (index + 1) % 3 == 0 && index + 1 != last {
        ConstraintRule::HandleBeforeAnchor
    } else if (index - 1) % 3 == 0 && index - 1 != 0 {
        ConstraintRule::HandleAfterAnchor
    } else {
        ConstraintRule::Unconstrained
    }
}

/// Computes the additional moves implied by dragging `index` by `delta`.
///
/// `delta` is the translation already applied to `index` itself; the result
/// never contains `index` and never an out-of-range position.
#[must_use]
pub fn propagate_cubic_drag(index: usize, len: usize, delta: Delta) -> SmallVec<[PropagatedMove; 2]> {
    let mut moves: SmallVec<[PropagatedMove; 2]> = SmallVec::new();
    match cubic_constraint_rule(index, len) {
        ConstraintRule::FirstAnchor => {
            if index + 1 < len {
                moves.push(PropagatedMove::new(index + 1, delta));
            }
        }
        ConstraintRule::LastAnchor => {
            if index > 0 {
                moves.push(PropagatedMove::new(index - 1, delta));
            }
        }
        ConstraintRule::InteriorAnchor => {
            moves.push(PropagatedMove::new(index - 1, delta));
            moves.push(PropagatedMove::new(index + 1, delta));
        }
        ConstraintRule::HandleBeforeAnchor => {
            moves.push(PropagatedMove::new(index + 2, delta.negated()));
        }
        ConstraintRule::HandleAfterAnchor => {
            moves.push(PropagatedMove::new(index - 2, delta.negated()));
        }
        ConstraintRule::Unconstrained => {}
    }

    debug_assert!(
        moves
            .iter()
            .all(|entry| entry.index < len && entry.index != index),
        "constraint produced invalid target for index {index} in len {len}"
    );
    moves
}
