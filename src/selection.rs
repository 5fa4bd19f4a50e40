//! Selection gateway — reads the current selection and checks shape counts.

#[cfg(test)]
#[path = "selection_test.rs"]
mod tests;

use tracing::debug;

use crate::error::ToolError;
use crate::geometry::ShapeBox;
use crate::host::PresentationHost;

/// Snapshot of the selected shapes, in host selection order.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub boxes: Vec<ShapeBox>,
}

impl Selection {
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Fail unless exactly `expected` shapes are selected.
    ///
    /// # Errors
    ///
    /// Returns `WrongShapeCount` naming `operation` otherwise.
    pub fn require_exactly(&self, expected: usize, operation: &'static str) -> Result<&[ShapeBox], ToolError> {
        if self.boxes.len() == expected {
            Ok(&self.boxes)
        } else {
            Err(ToolError::WrongShapeCount { operation, expected, actual: self.boxes.len() })
        }
    }
}

/// Read the selected shapes' geometry, requiring at least `min_count` of them.
///
/// Read-only: nothing is written to the host.
///
/// # Errors
///
/// Returns `TooFewShapes` when fewer than `min_count` shapes are selected,
/// or the host error if the read fails.
pub async fn load_selection(host: &dyn PresentationHost, min_count: usize) -> Result<Selection, ToolError> {
    let boxes = host.selected_shapes().await?;
    debug!(count = boxes.len(), min_count, "selection loaded");

    if boxes.len() < min_count {
        return Err(ToolError::TooFewShapes { required: min_count, actual: boxes.len() });
    }
    Ok(Selection { boxes })
}
