//! In-memory presentation host.
//!
//! Keeps one slide's shapes, a selection, a slide list and an exported
//! document in memory. Every committed patch is recorded so callers can
//! inspect the exact batches a commit strategy produced. Failures can be
//! injected per commit index to exercise partial-write paths.

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;

use std::collections::HashSet;
use std::sync::Mutex;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use uuid::Uuid;

use super::{ApiVersion, GlyphShape, PresentationHost};
use crate::error::HostError;
use crate::geometry::{PositionPatch, ShapeBox, ShapeId};

/// A glyph inserted through [`PresentationHost::insert_glyph`].
#[derive(Debug, Clone, PartialEq)]
pub struct InsertedGlyph {
    pub id: ShapeId,
    pub slide_id: String,
    pub glyph: GlyphShape,
}

#[derive(Default)]
struct Inner {
    shapes: Vec<ShapeBox>,
    selection: Vec<ShapeId>,
    slides: Vec<String>,
    selected_slides: Vec<String>,
    glyphs: Vec<InsertedGlyph>,
    commits: Vec<PositionPatch>,
    failing_commits: HashSet<usize>,
    commit_attempts: usize,
    document: Vec<u8>,
}

/// Slide fixture accepted by [`MemoryHost::from_json`].
#[derive(Debug, Deserialize)]
struct SlideFixture {
    shapes: Vec<ShapeBox>,
    #[serde(default)]
    selection: Option<Vec<ShapeId>>,
}

/// Host that keeps everything in process memory.
pub struct MemoryHost {
    inner: Mutex<Inner>,
    api_version: ApiVersion,
    url: Option<String>,
}

impl MemoryHost {
    /// Create a host holding `shapes`, all of them selected, on a single slide.
    #[must_use]
    pub fn new(shapes: Vec<ShapeBox>) -> Self {
        let selection = shapes.iter().map(|s| s.id.clone()).collect();
        let inner = Inner {
            shapes,
            selection,
            slides: vec!["slide-1".to_owned()],
            ..Inner::default()
        };
        Self { inner: Mutex::new(inner), api_version: ApiVersion::new(1, 10), url: None }
    }

    /// Build a host from a JSON slide fixture: `{"shapes": [...], "selection": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns the deserialization error if the fixture is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let fixture: SlideFixture = serde_json::from_str(json)?;
        let host = Self::new(fixture.shapes);
        if let Some(selection) = fixture.selection {
            host.select(selection);
        }
        Ok(host)
    }

    #[must_use]
    pub fn with_api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = version;
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Replace the slide list and slide selection.
    #[must_use]
    pub fn with_slides(self, slides: &[&str], selected: &[&str]) -> Self {
        {
            let mut inner = self.lock();
            inner.slides = slides.iter().map(|s| (*s).to_owned()).collect();
            inner.selected_slides = selected.iter().map(|s| (*s).to_owned()).collect();
        }
        self
    }

    #[must_use]
    pub fn with_document(self, bytes: Vec<u8>) -> Self {
        self.lock().document = bytes;
        self
    }

    /// Make the `index`-th commit attempt (zero-based) fail with a communication error.
    #[must_use]
    pub fn failing_commit(self, index: usize) -> Self {
        self.lock().failing_commits.insert(index);
        self
    }

    /// Replace the current shape selection.
    pub fn select<I, S>(&self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<ShapeId>,
    {
        self.lock().selection = ids.into_iter().map(Into::into).collect();
    }

    /// Current geometry of one shape.
    #[must_use]
    pub fn shape(&self, id: &str) -> Option<ShapeBox> {
        self.lock().shapes.iter().find(|s| s.id == id).cloned()
    }

    /// Every shape on the slide, in slide order.
    #[must_use]
    pub fn shapes(&self) -> Vec<ShapeBox> {
        self.lock().shapes.clone()
    }

    /// Every successfully committed batch, oldest first.
    #[must_use]
    pub fn commits(&self) -> Vec<PositionPatch> {
        self.lock().commits.clone()
    }

    #[must_use]
    pub fn glyphs(&self) -> Vec<InsertedGlyph> {
        self.lock().glyphs.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock only means a test panicked mid-write; the data is still usable.
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait::async_trait]
impl PresentationHost for MemoryHost {
    async fn selected_shapes(&self) -> Result<Vec<ShapeBox>, HostError> {
        tokio::task::yield_now().await;
        let inner = self.lock();
        Ok(inner
            .selection
            .iter()
            .filter_map(|id| inner.shapes.iter().find(|s| &s.id == id).cloned())
            .collect())
    }

    async fn commit(&self, patch: &PositionPatch) -> Result<(), HostError> {
        tokio::task::yield_now().await;
        let mut inner = self.lock();
        let attempt = inner.commit_attempts;
        inner.commit_attempts += 1;
        if inner.failing_commits.contains(&attempt) {
            return Err(HostError::Communication(format!("sync {attempt} dropped")));
        }

        // Validate the whole batch first so a bad id leaves nothing applied.
        if let Some((missing, _)) = patch.iter().find(|(id, _)| !inner.shapes.iter().any(|s| s.id == *id)) {
            return Err(HostError::Communication(format!("shape not found: {missing}")));
        }
        for (id, p) in patch.iter() {
            if let Some(shape) = inner.shapes.iter_mut().find(|s| s.id == id) {
                shape.apply(p);
            }
        }
        inner.commits.push(patch.clone());
        Ok(())
    }

    fn supports_api(&self, version: ApiVersion) -> bool {
        self.api_version >= version
    }

    async fn selected_slides(&self) -> Result<Vec<String>, HostError> {
        Ok(self.lock().selected_slides.clone())
    }

    async fn slide_ids(&self) -> Result<Vec<String>, HostError> {
        Ok(self.lock().slides.clone())
    }

    async fn insert_glyph(&self, slide_id: Option<&str>, glyph: &GlyphShape) -> Result<ShapeId, HostError> {
        let mut inner = self.lock();
        let slide_id = match slide_id {
            Some(id) if inner.slides.iter().any(|s| s == id) => id.to_owned(),
            Some(id) => return Err(HostError::Communication(format!("slide not found: {id}"))),
            None => inner
                .slides
                .first()
                .cloned()
                .ok_or_else(|| HostError::Communication("presentation has no slides".into()))?,
        };
        let id = Uuid::new_v4().to_string();
        inner.glyphs.push(InsertedGlyph { id: id.clone(), slide_id, glyph: glyph.clone() });
        Ok(id)
    }

    async fn document_bytes(&self) -> Result<Vec<u8>, HostError> {
        Ok(self.lock().document.clone())
    }

    async fn export_slides_base64(&self, slide_ids: &[String]) -> Result<String, HostError> {
        let inner = self.lock();
        if let Some(missing) = slide_ids.iter().find(|id| !inner.slides.contains(*id)) {
            return Err(HostError::Communication(format!("slide not found: {missing}")));
        }
        Ok(STANDARD.encode(slide_ids.join(",")))
    }

    fn document_url(&self) -> Option<String> {
        self.url.clone()
    }
}
