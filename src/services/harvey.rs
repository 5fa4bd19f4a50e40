//! Harvey-ball service — insert a quarter-filled circle glyph on a slide.
//!
//! The glyph is drawn as SVG on a 100×100 view box: a black-outlined white
//! circle plus a black wedge swept clockwise from twelve o'clock.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{HostError, ToolError};
use crate::geometry::ShapeId;
use crate::host::{GLYPH_API_VERSION, GlyphShape};
use crate::state::ToolState;

/// Edge length of an inserted Harvey ball, in points.
pub const HARVEY_BALL_SIZE: f64 = 22.0;
/// Insertion point (glyph center) on a 960×540 slide.
pub const HARVEY_BALL_CENTER: (f64, f64) = (480.0, 270.0);

const OUTLINE: &str = r#"<circle cx="50" cy="50" r="45" stroke="black" stroke-width="4" fill="white"/>"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HarveyLevel {
    Empty,
    Quarter,
    Half,
    ThreeQuarter,
    Full,
}

impl HarveyLevel {
    pub const ALL: [HarveyLevel; 5] = [Self::Empty, Self::Quarter, Self::Half, Self::ThreeQuarter, Self::Full];

    #[must_use]
    pub fn percent(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Quarter => 25,
            Self::Half => 50,
            Self::ThreeQuarter => 75,
            Self::Full => 100,
        }
    }
}

impl TryFrom<u8> for HarveyLevel {
    type Error = String;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|level| level.percent() == percent)
            .ok_or_else(|| format!("unsupported Harvey ball level: {percent}%"))
    }
}

impl From<HarveyLevel> for u8 {
    fn from(level: HarveyLevel) -> Self {
        level.percent()
    }
}

/// SVG markup for a Harvey ball at `level`.
#[must_use]
pub fn harvey_ball_svg(level: HarveyLevel) -> String {
    let fill = match level {
        HarveyLevel::Empty => "",
        HarveyLevel::Quarter => r#"<path d="M50,50 L50,5 A45,45 0 0,1 95,50 Z" fill="black"/>"#,
        HarveyLevel::Half => r#"<path d="M50,50 L50,5 A45,45 0 1,1 50,95 Z" fill="black"/>"#,
        HarveyLevel::ThreeQuarter => r#"<path d="M50,50 L50,5 A45,45 0 1,1 5,50 Z" fill="black"/>"#,
        HarveyLevel::Full => r#"<circle cx="50" cy="50" r="45" fill="black"/>"#,
    };
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100" width="100" height="100">{OUTLINE}{fill}</svg>"#
    )
}

/// Insert a Harvey ball on the first selected slide, or the first slide.
///
/// # Errors
///
/// Returns `HostError::Unsupported` when the host lacks `PowerPointApi 1.8`,
/// or the host error from the slide read or insertion.
pub async fn insert_harvey_ball(state: &ToolState, level: HarveyLevel) -> Result<ShapeId, ToolError> {
    if !state.host.supports_api(GLYPH_API_VERSION) {
        return Err(HostError::Unsupported {
            capability: "Harvey ball insertion".into(),
            version: GLYPH_API_VERSION.to_string(),
            remedy: "Please update PowerPoint.",
        }
        .into());
    }

    let _guard = state.begin().await;
    let slides = state.host.selected_slides().await?;
    let (cx, cy) = HARVEY_BALL_CENTER;
    let glyph = GlyphShape {
        name: format!("Harvey Ball {}%", level.percent()),
        left: cx - HARVEY_BALL_SIZE / 2.0,
        top: cy - HARVEY_BALL_SIZE / 2.0,
        width: HARVEY_BALL_SIZE,
        height: HARVEY_BALL_SIZE,
        svg: harvey_ball_svg(level),
        outline_visible: false,
    };

    let id = state.host.insert_glyph(slides.first().map(String::as_str), &glyph).await?;
    info!(percent = level.percent(), %id, "harvey ball inserted");
    Ok(id)
}

#[cfg(test)]
#[path = "harvey_test.rs"]
mod tests;
