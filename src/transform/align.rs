//! Aligning shapes to a shared edge or center.

#[cfg(test)]
#[path = "align_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::geometry::{Axis, BoxPatch, PositionPatch, ShapeBox};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Right,
    /// Horizontal center of the selection's bounding span.
    Center,
    Top,
    Bottom,
    /// Vertical center of the selection's bounding span.
    Middle,
}

impl Alignment {
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right | Self::Center => Axis::Horizontal,
            Self::Top | Self::Bottom | Self::Middle => Axis::Vertical,
        }
    }
}

/// Compute the patch aligning every box on one axis. Sizes are never patched.
///
/// - Left/Top: every start set to the minimum start.
/// - Right/Bottom: every end set to the maximum end.
/// - Center/Middle: every center set to the midpoint of (min start, max end).
#[must_use]
pub fn align(boxes: &[ShapeBox], alignment: Alignment) -> PositionPatch {
    let axis = alignment.axis();
    let min_start = boxes.iter().map(|b| b.start(axis)).fold(f64::INFINITY, f64::min);
    let max_end = boxes.iter().map(|b| b.end(axis)).fold(f64::NEG_INFINITY, f64::max);

    boxes
        .iter()
        .map(|b| {
            let start = match alignment {
                Alignment::Left | Alignment::Top => min_start,
                Alignment::Right | Alignment::Bottom => max_end - b.extent(axis),
                Alignment::Center | Alignment::Middle => (min_start + max_end) / 2.0 - b.extent(axis) / 2.0,
            };
            (b.id.clone(), BoxPatch::start(axis, start))
        })
        .collect()
}
