//! Export service — package the deck, or selected slides, for download.
//!
//! DESIGN
//! ======
//! The host does the packaging; this service picks what to export, builds a
//! filesystem-safe file name, and hands back bytes. Triggering the browser
//! download or mail client is left to the embedding UI.

use std::collections::HashSet;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use tracing::info;

use crate::error::{HostError, ToolError};
use crate::host::SLIDE_EXPORT_API_VERSION;
use crate::state::ToolState;

pub const PPTX_MIME: &str = "application/vnd.openxmlformats-officedocument.presentationml.presentation";
const DEFAULT_NAME: &str = "Presentation";
const UNSAFE_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

// =============================================================================
// NAMING
// =============================================================================

/// Presentation name from the document URL: last path segment, decoded, `.pptx` stripped.
#[must_use]
pub fn presentation_name(url: Option<&str>) -> String {
    let Some(url) = url.filter(|u| !u.is_empty()) else {
        return DEFAULT_NAME.to_owned();
    };
    let Ok(decoded) = urlencoding::decode(url) else {
        return DEFAULT_NAME.to_owned();
    };
    let normalized = decoded.replace('\\', "/");
    let last = normalized.rsplit('/').next().unwrap_or_default();

    let stem = strip_pptx(last).trim();
    if stem.is_empty() { DEFAULT_NAME.to_owned() } else { stem.to_owned() }
}

/// Suggested download name for the open document.
#[must_use]
pub fn default_file_name(state: &ToolState) -> String {
    presentation_name(state.host.document_url().as_deref())
}

fn strip_pptx(name: &str) -> &str {
    let split = name.len().saturating_sub(5);
    match name.get(split..) {
        Some(ext) if ext.eq_ignore_ascii_case(".pptx") => &name[..split],
        _ => name,
    }
}

/// Build a safe `.pptx` file name with an optional slide suffix and timestamp.
#[must_use]
pub fn format_file_name(name: &str, stamp: Option<PrimitiveDateTime>, slide_suffix: Option<&str>) -> String {
    let trimmed = name.trim();
    let mut base: String = if trimmed.is_empty() { DEFAULT_NAME } else { trimmed }
        .chars()
        .map(|c| if UNSAFE_CHARS.contains(&c) { '-' } else { c })
        .collect();

    if let Some(suffix) = slide_suffix.filter(|s| !s.is_empty()) {
        base.push(' ');
        base.push_str(suffix);
    }
    if let Some(at) = stamp {
        base.push_str(&format!(
            " {:04}-{:02}-{:02} {:02}-{:02}",
            at.year(),
            u8::from(at.month()),
            at.day(),
            at.hour(),
            at.minute()
        ));
    }
    base + ".pptx"
}

/// Collapse 1-based slide positions into `"Slides 1-3, 5"`. Empty input gives `""`.
#[must_use]
pub fn format_slide_numbers(positions: &[usize]) -> String {
    let mut sorted = positions.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    let Some((&first, rest)) = sorted.split_first() else {
        return String::new();
    };

    let mut parts = Vec::new();
    let (mut start, mut end) = (first, first);
    for &p in rest {
        if p == end + 1 {
            end = p;
        } else {
            parts.push(range_label(start, end));
            start = p;
            end = p;
        }
    }
    parts.push(range_label(start, end));
    format!("Slides {}", parts.join(", "))
}

fn range_label(start: usize, end: usize) -> String {
    if start == end { start.to_string() } else { format!("{start}-{end}") }
}

/// Current local time, or UTC when the local offset is unavailable.
#[must_use]
pub fn local_timestamp() -> PrimitiveDateTime {
    let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
    PrimitiveDateTime::new(now.date(), now.time())
}

// =============================================================================
// SLIDES
// =============================================================================

/// The selected slides and their 1-based positions in the deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSelection {
    pub slide_ids: Vec<String>,
    pub positions: Vec<usize>,
    pub suffix: String,
}

/// Read the selected slides.
///
/// # Errors
///
/// Returns `NoSlidesSelected` when no slide is selected, or the host error.
pub async fn selected_slide_info(state: &ToolState) -> Result<SlideSelection, ToolError> {
    let all = state.host.slide_ids().await?;
    let slide_ids = state.host.selected_slides().await?;
    if slide_ids.is_empty() {
        return Err(ToolError::NoSlidesSelected);
    }

    let selected: HashSet<&str> = slide_ids.iter().map(String::as_str).collect();
    let positions: Vec<usize> = all
        .iter()
        .enumerate()
        .filter(|(_, id)| selected.contains(id.as_str()))
        .map(|(i, _)| i + 1)
        .collect();
    let suffix = format_slide_numbers(&positions);
    Ok(SlideSelection { slide_ids, positions, suffix })
}

/// Full presentation bytes.
///
/// # Errors
///
/// Returns `EmptyExport` if the host hands back no data, or the host error.
pub async fn export_presentation(state: &ToolState) -> Result<Vec<u8>, ToolError> {
    let bytes = state.host.document_bytes().await?;
    if bytes.is_empty() {
        return Err(ToolError::EmptyExport("Presentation file"));
    }
    Ok(bytes)
}

/// A new presentation containing only `slide_ids`.
///
/// # Errors
///
/// Returns `HostError::Unsupported` below `PowerPointApi 1.10`, `EmptyExport`
/// or `InvalidExport` for unusable host output, or the host error.
pub async fn export_selected_slides(state: &ToolState, slide_ids: &[String]) -> Result<Vec<u8>, ToolError> {
    if !state.host.supports_api(SLIDE_EXPORT_API_VERSION) {
        return Err(HostError::Unsupported {
            capability: "Selected slide export".into(),
            version: SLIDE_EXPORT_API_VERSION.to_string(),
            remedy: "Use 'Entire presentation' instead.",
        }
        .into());
    }

    let encoded = state.host.export_slides_base64(slide_ids).await?;
    if encoded.is_empty() {
        return Err(ToolError::EmptyExport("Selected slide export"));
    }
    STANDARD
        .decode(encoded.trim())
        .map_err(|e| ToolError::InvalidExport(e.to_string()))
}

// =============================================================================
// DOWNLOAD
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportScope {
    Entire,
    Selected,
}

/// What the user asked to download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub file_name: String,
    pub include_timestamp: bool,
    pub scope: ExportScope,
}

/// A packaged file ready for the UI to save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Export per `request` and name the file.
///
/// # Errors
///
/// Propagates errors from [`selected_slide_info`], [`export_presentation`]
/// and [`export_selected_slides`].
pub async fn prepare_download(state: &ToolState, request: &DownloadRequest) -> Result<ExportedFile, ToolError> {
    let _guard = state.begin().await;
    let stamp = request.include_timestamp.then(local_timestamp);

    let (file_name, bytes) = match request.scope {
        ExportScope::Selected => {
            let info = selected_slide_info(state).await?;
            let name = format_file_name(&request.file_name, stamp, Some(&info.suffix));
            (name, export_selected_slides(state, &info.slide_ids).await?)
        }
        ExportScope::Entire => {
            (format_file_name(&request.file_name, stamp, None), export_presentation(state).await?)
        }
    };

    info!(file_name = %file_name, size = bytes.len(), scope = ?request.scope, "export prepared");
    Ok(ExportedFile { file_name, mime: PPTX_MIME, bytes })
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
