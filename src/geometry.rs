//! Geometry model: shape bounding boxes and sparse position patches.
//!
//! DESIGN
//! ======
//! `ShapeBox` is a snapshot of one selected shape, read fresh from the host
//! at the start of every operation. Transforms never mutate boxes; they
//! produce a `PositionPatch` (shape id → `BoxPatch`) that the commit
//! strategy writes back. Only present fields of a `BoxPatch` are applied.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

/// Opaque host-assigned shape identifier, stable within one selection snapshot.
pub type ShapeId = String;

// =============================================================================
// AXIS
// =============================================================================

/// Layout axis used by single-axis swaps, alignment and distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Left/width.
    Horizontal,
    /// Top/height.
    Vertical,
}

// =============================================================================
// SHAPE BOX
// =============================================================================

/// Axis-aligned bounding box of a shape, in host points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeBox {
    pub id: ShapeId,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ShapeBox {
    #[must_use]
    pub fn new(id: impl Into<ShapeId>, left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { id: id.into(), left, top, width, height }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Leading edge on `axis` (left or top).
    #[must_use]
    pub fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Size on `axis` (width or height).
    #[must_use]
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Trailing edge on `axis` (right or bottom).
    #[must_use]
    pub fn end(&self, axis: Axis) -> f64 {
        self.start(axis) + self.extent(axis)
    }

    /// Center on `axis`.
    #[must_use]
    pub fn center(&self, axis: Axis) -> f64 {
        self.start(axis) + self.extent(axis) / 2.0
    }

    /// Apply a patch in place. Used by hosts that keep their own box store.
    pub fn apply(&mut self, patch: &BoxPatch) {
        if let Some(left) = patch.left {
            self.left = left;
        }
        if let Some(top) = patch.top {
            self.top = top;
        }
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(height) = patch.height {
            self.height = height;
        }
    }
}

// =============================================================================
// FIELDS
// =============================================================================

/// One patchable box field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Left,
    Top,
    Width,
    Height,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Left, Field::Top, Field::Width, Field::Height];

    /// Read this field from a box.
    #[must_use]
    pub fn of(self, shape: &ShapeBox) -> f64 {
        match self {
            Self::Left => shape.left,
            Self::Top => shape.top,
            Self::Width => shape.width,
            Self::Height => shape.height,
        }
    }

    /// True for width/height, which the host rejects below zero.
    #[must_use]
    pub fn is_size(self) -> bool {
        matches!(self, Self::Width | Self::Height)
    }
}

// =============================================================================
// PATCHES
// =============================================================================

/// Sparse update for one shape. Only present fields are written to the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl BoxPatch {
    #[must_use]
    pub fn position(left: f64, top: f64) -> Self {
        Self { left: Some(left), top: Some(top), ..Self::default() }
    }

    #[must_use]
    pub fn size(width: f64, height: f64) -> Self {
        Self { width: Some(width), height: Some(height), ..Self::default() }
    }

    /// Patch the leading edge on one axis only.
    #[must_use]
    pub fn start(axis: Axis, value: f64) -> Self {
        match axis {
            Axis::Horizontal => Self { left: Some(value), ..Self::default() },
            Axis::Vertical => Self { top: Some(value), ..Self::default() },
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::Left => self.left,
            Field::Top => self.top,
            Field::Width => self.width,
            Field::Height => self.height,
        }
    }

    pub fn set(&mut self, field: Field, value: f64) {
        let slot = match field {
            Field::Left => &mut self.left,
            Field::Top => &mut self.top,
            Field::Width => &mut self.width,
            Field::Height => &mut self.height,
        };
        *slot = Some(value);
    }

    /// Iterate the fields present in this patch.
    pub fn fields(&self) -> impl Iterator<Item = (Field, f64)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }

    /// Overlay `other` on top of `self`; fields present in `other` win.
    pub fn merge(&mut self, other: &BoxPatch) {
        for (field, value) in other.fields() {
            self.set(field, value);
        }
    }
}

/// Ordered set of per-shape patches produced by one transform.
///
/// Order follows insertion, which is the host's selection order for every
/// transform except distribution (sorted order).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionPatch {
    entries: Vec<(ShapeId, BoxPatch)>,
}

impl PositionPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a patch for `id`, merging with any existing entry for the same id.
    pub fn insert(&mut self, id: impl Into<ShapeId>, patch: BoxPatch) {
        let id = id.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| *k == id) {
            existing.merge(&patch);
        } else {
            self.entries.push((id, patch));
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&BoxPatch> {
        self.entries.iter().find(|(k, _)| k == id).map(|(_, p)| p)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BoxPatch)> {
        self.entries.iter().map(|(id, patch)| (id.as_str(), patch))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return copies of `boxes` with this patch applied. Unpatched boxes are copied unchanged.
    #[must_use]
    pub fn apply_to(&self, boxes: &[ShapeBox]) -> Vec<ShapeBox> {
        boxes
            .iter()
            .map(|b| {
                let mut out = b.clone();
                if let Some(p) = self.get(&b.id) {
                    out.apply(p);
                }
                out
            })
            .collect()
    }
}

impl FromIterator<(ShapeId, BoxPatch)> for PositionPatch {
    fn from_iter<I: IntoIterator<Item = (ShapeId, BoxPatch)>>(iter: I) -> Self {
        let mut patch = Self::new();
        for (id, p) in iter {
            patch.insert(id, p);
        }
        patch
    }
}
