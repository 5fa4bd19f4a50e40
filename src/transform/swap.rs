//! Swapping two shapes.
//!
//! Center-based swaps move each shape so its center lands on the other
//! shape's former center, which keeps differently sized shapes visually in
//! place. The corner swap exchanges raw top-left coordinates.

#[cfg(test)]
#[path = "swap_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::geometry::{Axis, BoxPatch, PositionPatch, ShapeBox};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapMode {
    /// Exchange centers on both axes.
    Center,
    /// Exchange centers horizontally; tops unchanged.
    Horizontal,
    /// Exchange centers vertically; lefts unchanged.
    Vertical,
    /// Exchange raw (left, top).
    Corner,
}

impl SwapMode {
    /// Name used in user-facing messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Center => "Swap Position",
            Self::Horizontal => "Swap Horizontal",
            Self::Vertical => "Swap Vertical",
            Self::Corner => "Swap Top-Left",
        }
    }
}

/// Compute the patch that swaps `a` and `b`. Widths and heights are never patched.
#[must_use]
pub fn swap(a: &ShapeBox, b: &ShapeBox, mode: SwapMode) -> PositionPatch {
    let mut patch = PositionPatch::new();
    match mode {
        SwapMode::Corner => {
            patch.insert(a.id.clone(), BoxPatch::position(b.left, b.top));
            patch.insert(b.id.clone(), BoxPatch::position(a.left, a.top));
        }
        SwapMode::Center => {
            for axis in [Axis::Horizontal, Axis::Vertical] {
                insert_center_swap(&mut patch, a, b, axis);
            }
        }
        SwapMode::Horizontal => insert_center_swap(&mut patch, a, b, Axis::Horizontal),
        SwapMode::Vertical => insert_center_swap(&mut patch, a, b, Axis::Vertical),
    }
    patch
}

fn insert_center_swap(patch: &mut PositionPatch, a: &ShapeBox, b: &ShapeBox, axis: Axis) {
    let a_start = b.center(axis) - a.extent(axis) / 2.0;
    let b_start = a.center(axis) - b.extent(axis) / 2.0;
    patch.insert(a.id.clone(), BoxPatch::start(axis, a_start));
    patch.insert(b.id.clone(), BoxPatch::start(axis, b_start));
}
