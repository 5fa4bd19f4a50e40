//! Position service — copy one shape's geometry and paste it onto the selection.

use tracing::info;

use crate::error::ToolError;
use crate::geometry::PositionPatch;
use crate::selection::load_selection;
use crate::state::ToolState;
use crate::transform::{ClipboardSnapshot, PasteMode, PositionClipboard, paste_patch};

/// Capture the single selected shape's position and size into `clipboard`.
///
/// # Errors
///
/// Returns `TooFewShapes` with nothing selected, `CopyNeedsOneShape` with
/// more than one, or the host read error. The clipboard is untouched on error.
pub async fn copy_position(state: &ToolState, clipboard: &mut PositionClipboard) -> Result<ClipboardSnapshot, ToolError> {
    let _guard = state.begin().await;
    let selection = load_selection(state.host.as_ref(), 1).await?;
    if selection.len() != 1 {
        return Err(ToolError::CopyNeedsOneShape { actual: selection.len() });
    }
    let shape = &selection.boxes[0];

    let snapshot = clipboard.copy(shape);
    info!(id = %shape.id, "position copied");
    Ok(snapshot)
}

/// Write the copied fields selected by `mode` onto every selected shape.
///
/// # Errors
///
/// Returns `NoClipboard` before touching the host if nothing was copied,
/// `TooFewShapes` with nothing selected, or the host error.
pub async fn paste_position(
    state: &ToolState,
    clipboard: &PositionClipboard,
    mode: PasteMode,
) -> Result<PositionPatch, ToolError> {
    let snapshot = clipboard.snapshot()?;

    let _guard = state.begin().await;
    let selection = load_selection(state.host.as_ref(), 1).await?;

    let patch = paste_patch(&snapshot, mode, &selection.boxes);
    state.committer.commit(state.host.as_ref(), &selection.boxes, &patch).await?;
    info!(?mode, count = selection.len(), "position pasted");
    Ok(patch)
}

#[cfg(test)]
#[path = "position_test.rs"]
mod tests;
