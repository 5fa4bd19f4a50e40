//! Even distribution of three or more shapes along one axis.
//!
//! Shapes are sorted by their leading edge. The first and last keep their
//! position (anchors); the free space between them is split into equal gaps.
//! When the shapes' combined extent exceeds the span, the gap would be
//! negative and the output would overlap; [`OverlapPolicy`] decides what
//! happens instead.

#[cfg(test)]
#[path = "distribute_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ToolError;
use crate::geometry::{Axis, BoxPatch, PositionPatch, ShapeBox};

/// Behavior when the anchored span is smaller than the shapes' combined extent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapPolicy {
    /// Clamp the gap to zero and pack shapes edge to edge from the first anchor.
    #[default]
    Pack,
    /// Fail with `OverlappingSpan`.
    Reject,
    /// Use the negative gap as computed; shapes overlap evenly.
    Allow,
}

/// Compute the patch distributing `boxes` evenly along `axis`.
///
/// # Errors
///
/// Returns `OverlappingSpan` when the span is too small and `policy` is `Reject`.
pub fn distribute(boxes: &[ShapeBox], axis: Axis, policy: OverlapPolicy) -> Result<PositionPatch, ToolError> {
    let mut sorted: Vec<&ShapeBox> = boxes.iter().collect();
    sorted.sort_by(|a, b| a.start(axis).total_cmp(&b.start(axis)));

    let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
        return Ok(PositionPatch::new());
    };
    if sorted.len() < 2 {
        return Ok(sorted.iter().map(|b| (b.id.clone(), BoxPatch::start(axis, b.start(axis)))).collect());
    }

    let span = last.end(axis) - first.start(axis);
    let occupied: f64 = sorted.iter().map(|b| b.extent(axis)).sum();
    #[allow(clippy::cast_precision_loss)]
    let mut gap = (span - occupied) / (sorted.len() - 1) as f64;

    if gap < 0.0 {
        match policy {
            OverlapPolicy::Reject => return Err(ToolError::OverlappingSpan { span, occupied }),
            OverlapPolicy::Pack => {
                warn!(span, occupied, "distribute span smaller than shapes; packing with zero gap");
                gap = 0.0;
            }
            OverlapPolicy::Allow => {}
        }
    }

    let mut cursor = first.start(axis);
    let mut patch = PositionPatch::new();
    for b in sorted {
        patch.insert(b.id.clone(), BoxPatch::start(axis, cursor));
        cursor += b.extent(axis) + gap;
    }
    Ok(patch)
}
