//! Position clipboard — copy one shape's geometry, paste it onto others.
//!
//! DESIGN
//! ======
//! The snapshot lives in a `PositionClipboard` owned by the caller and
//! passed into copy/paste, rather than in hidden process-wide state. Only
//! copy writes it; pastes read it without clearing. Pasting is a pure
//! overwrite of the stored fields, never an offset.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::error::ToolError;
use crate::geometry::{BoxPatch, PositionPatch, ShapeBox};

/// Geometry captured by the last copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipboardSnapshot {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl From<&ShapeBox> for ClipboardSnapshot {
    fn from(b: &ShapeBox) -> Self {
        Self { left: b.left, top: b.top, width: b.width, height: b.height }
    }
}

/// Which stored fields a paste writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasteMode {
    /// Left and top.
    Position,
    /// Width and height; position unchanged.
    SizeOnly,
    /// Left, top, width and height.
    All,
}

impl PasteMode {
    /// Status text shown after a successful paste.
    #[must_use]
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Position => "Position applied",
            Self::SizeOnly => "Size applied",
            Self::All => "Position + size applied",
        }
    }
}

/// Caller-owned holder for the last copied geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionClipboard {
    snapshot: Option<ClipboardSnapshot>,
}

impl PositionClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `shape`'s geometry, replacing any previous snapshot.
    pub fn copy(&mut self, shape: &ShapeBox) -> ClipboardSnapshot {
        let snapshot = ClipboardSnapshot::from(shape);
        self.snapshot = Some(snapshot);
        snapshot
    }

    /// The stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns `NoClipboard` if nothing has been copied.
    pub fn snapshot(&self) -> Result<ClipboardSnapshot, ToolError> {
        self.snapshot.ok_or(ToolError::NoClipboard)
    }

    #[must_use]
    pub fn has_position(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn clear(&mut self) {
        self.snapshot = None;
    }
}

/// Build the patch writing `snapshot`'s fields (per `mode`) onto every box.
#[must_use]
pub fn paste_patch(snapshot: &ClipboardSnapshot, mode: PasteMode, boxes: &[ShapeBox]) -> PositionPatch {
    let patch = match mode {
        PasteMode::Position => BoxPatch::position(snapshot.left, snapshot.top),
        PasteMode::SizeOnly => BoxPatch::size(snapshot.width, snapshot.height),
        PasteMode::All => {
            let mut p = BoxPatch::position(snapshot.left, snapshot.top);
            p.merge(&BoxPatch::size(snapshot.width, snapshot.height));
            p
        }
    };
    boxes.iter().map(|b| (b.id.clone(), patch)).collect()
}
