//! Shape service — swap, align and distribute the current selection.

use tracing::info;

use crate::error::ToolError;
use crate::geometry::{Axis, PositionPatch};
use crate::selection::load_selection;
use crate::state::ToolState;
use crate::transform::{Alignment, SwapMode, align, distribute, swap};

/// Minimum selection for alignment.
pub const ALIGN_MIN_SHAPES: usize = 2;
/// Minimum selection for distribution.
pub const DISTRIBUTE_MIN_SHAPES: usize = 3;

/// Swap the two selected shapes.
///
/// # Errors
///
/// Returns `TooFewShapes` / `WrongShapeCount` unless exactly two shapes are
/// selected, or the host error from the read or commit.
pub async fn swap_shapes(state: &ToolState, mode: SwapMode) -> Result<PositionPatch, ToolError> {
    let _guard = state.begin().await;
    let selection = load_selection(state.host.as_ref(), 2).await?;
    let pair = selection.require_exactly(2, mode.label())?;
    let (a, b) = (&pair[0], &pair[1]);

    let patch = swap(a, b, mode);
    state.committer.commit(state.host.as_ref(), &selection.boxes, &patch).await?;
    info!(?mode, a = %a.id, b = %b.id, "shapes swapped");
    Ok(patch)
}

/// Align the selected shapes.
///
/// # Errors
///
/// Returns `TooFewShapes` with fewer than two shapes selected, or the host error.
pub async fn align_shapes(state: &ToolState, alignment: Alignment) -> Result<PositionPatch, ToolError> {
    let _guard = state.begin().await;
    let selection = load_selection(state.host.as_ref(), ALIGN_MIN_SHAPES).await?;

    let patch = align(&selection.boxes, alignment);
    state.committer.commit(state.host.as_ref(), &selection.boxes, &patch).await?;
    info!(?alignment, count = selection.len(), "shapes aligned");
    Ok(patch)
}

/// Distribute the selected shapes evenly along `axis`.
///
/// # Errors
///
/// Returns `TooFewShapes` with fewer than three shapes selected,
/// `OverlappingSpan` under the `Reject` policy, or the host error.
pub async fn distribute_shapes(state: &ToolState, axis: Axis) -> Result<PositionPatch, ToolError> {
    let _guard = state.begin().await;
    let selection = load_selection(state.host.as_ref(), DISTRIBUTE_MIN_SHAPES).await?;

    let patch = distribute(&selection.boxes, axis, state.config.overlap)?;
    state.committer.commit(state.host.as_ref(), &selection.boxes, &patch).await?;
    info!(?axis, count = selection.len(), "shapes distributed");
    Ok(patch)
}

#[cfg(test)]
#[path = "shapes_test.rs"]
mod tests;
