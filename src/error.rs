//! Error taxonomy and stable error codes.
//!
//! DESIGN
//! ======
//! Precondition failures (wrong shape count, empty clipboard) are raised
//! before any host write, so they never leave partial state behind. Host
//! failures are wrapped in `HostError` and surfaced verbatim. Every error
//! carries a stable `E_*` code via [`ErrorCode`] for the command layer.

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

/// Stable machine-readable code for an error, plus a retry hint.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

// =============================================================================
// HOST ERRORS
// =============================================================================

/// Failures reported by the presentation host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// A round trip to the host failed.
    #[error("host communication failed: {0}")]
    Communication(String),

    /// The host does not support the requested capability at its API version.
    /// `remedy` is the follow-up sentence shown to the user.
    #[error("{capability} requires PowerPointApi {version} or later. {remedy}")]
    Unsupported { capability: String, version: String, remedy: &'static str },
}

impl ErrorCode for HostError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Communication(_) => "E_HOST_COMMUNICATION",
            Self::Unsupported { .. } => "E_HOST_UNSUPPORTED",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Communication(_))
    }
}

// =============================================================================
// TOOL ERRORS
// =============================================================================

/// Errors produced by shape operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ToolError {
    /// Fewer shapes selected than the operation needs.
    #[error("Select at least {required} shape{}. You selected {actual}.", plural(.required))]
    TooFewShapes { required: usize, actual: usize },

    /// The operation needs an exact number of shapes.
    #[error("{operation} requires exactly {expected} selected shape{}. You selected {actual}.", plural(.expected))]
    WrongShapeCount { operation: &'static str, expected: usize, actual: usize },

    /// Copy Position with more than one shape selected.
    #[error("Select exactly 1 shape to copy its position.")]
    CopyNeedsOneShape { actual: usize },

    /// Paste attempted before any copy.
    #[error("No position copied. Select a shape and click Copy Position first.")]
    NoClipboard,

    /// Distribution span is smaller than the combined shape extents.
    #[error("Shapes overlap: span {span:.2} is smaller than their combined size {occupied:.2}.")]
    OverlappingSpan { span: f64, occupied: f64 },

    /// Slide export requested with no slides selected.
    #[error("No slides selected. Select one or more slides in the slide panel first.")]
    NoSlidesSelected,

    /// The host returned an empty document.
    #[error("{0} is empty.")]
    EmptyExport(&'static str),

    /// The host returned export data that could not be decoded.
    #[error("Failed to export selected slides: {0}")]
    InvalidExport(String),

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),

    #[error(transparent)]
    Host(#[from] HostError),
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn plural(n: &usize) -> &'static str {
    if *n == 1 { "" } else { "s" }
}

impl ErrorCode for ToolError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::TooFewShapes { .. } => "E_TOO_FEW_SHAPES",
            Self::WrongShapeCount { .. } | Self::CopyNeedsOneShape { .. } => "E_WRONG_SHAPE_COUNT",
            Self::NoClipboard => "E_NO_CLIPBOARD",
            Self::OverlappingSpan { .. } => "E_OVERLAPPING_SPAN",
            Self::NoSlidesSelected => "E_NO_SLIDES_SELECTED",
            Self::EmptyExport(_) => "E_EMPTY_EXPORT",
            Self::InvalidExport(_) => "E_INVALID_EXPORT",
            Self::Config(_) => "E_CONFIG_PARSE",
            Self::Host(e) => e.error_code(),
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::Host(e) => e.retryable(),
            _ => false,
        }
    }
}

impl ToolError {
    /// True for errors raised before any host write.
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::TooFewShapes { .. }
                | Self::WrongShapeCount { .. }
                | Self::CopyNeedsOneShape { .. }
                | Self::NoClipboard
                | Self::NoSlidesSelected
        )
    }
}
