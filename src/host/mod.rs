//! Host seam — the presentation-editing API this crate drives.
//!
//! DESIGN
//! ======
//! The host owns shape storage, rendering and undo. This crate only reads
//! the current selection and writes batched patches. `commit` stages a
//! whole `PositionPatch` and syncs it in one round trip; nothing is applied
//! until it returns. The trait is async so adapters over a remote host
//! (web runtime bridge, IPC) and the in-memory host share one interface.

pub mod memory;

use serde::{Deserialize, Serialize};

use crate::error::HostError;
use crate::geometry::{PositionPatch, ShapeBox, ShapeId};

/// Requirement-set version needed for glyph insertion.
pub const GLYPH_API_VERSION: ApiVersion = ApiVersion::new(1, 8);
/// Requirement-set version needed to export a subset of slides.
pub const SLIDE_EXPORT_API_VERSION: ApiVersion = ApiVersion::new(1, 10);

/// `PowerPointApi` requirement-set version (`major.minor`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ApiVersion {
    pub major: u32,
    pub minor: u32,
}

impl ApiVersion {
    #[must_use]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// A picture-filled shape to insert on a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphShape {
    /// Display name shown in the host's selection pane.
    pub name: String,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// SVG markup used as the shape's fill image.
    pub svg: String,
    /// Whether the shape outline stays visible.
    pub outline_visible: bool,
}

/// Async interface to the presentation host.
#[async_trait::async_trait]
pub trait PresentationHost: Send + Sync {
    /// Read the geometry of the currently selected shapes, in selection order.
    async fn selected_shapes(&self) -> Result<Vec<ShapeBox>, HostError>;

    /// Stage every entry of `patch` and sync it in one batch.
    async fn commit(&self, patch: &PositionPatch) -> Result<(), HostError>;

    /// Whether the host implements the given `PowerPointApi` version.
    fn supports_api(&self, version: ApiVersion) -> bool;

    /// Ids of the selected slides, in selection order.
    async fn selected_slides(&self) -> Result<Vec<String>, HostError>;

    /// Ids of all slides, in deck order.
    async fn slide_ids(&self) -> Result<Vec<String>, HostError>;

    /// Insert a glyph on `slide_id`, or on the first slide when `None`.
    async fn insert_glyph(&self, slide_id: Option<&str>, glyph: &GlyphShape) -> Result<ShapeId, HostError>;

    /// Full document as packaged by the host.
    async fn document_bytes(&self) -> Result<Vec<u8>, HostError>;

    /// Export the given slides as a base64-encoded presentation.
    async fn export_slides_base64(&self, slide_ids: &[String]) -> Result<String, HostError>;

    /// Location of the open document, if known.
    fn document_url(&self) -> Option<String>;
}
