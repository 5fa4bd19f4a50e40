//! Ribbon commands — parse command ids, run them, and report a status line.
//!
//! DESIGN
//! ======
//! Every command id the add-in registers maps to one [`Command`]. `run`
//! dispatches to the service layer and folds the outcome into a
//! [`StatusMessage`], the same shape for success and failure, so the UI
//! never has to inspect an error type. `run` never panics: host and
//! precondition failures become `Error` statuses carrying their `E_*` code.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{ErrorCode, ToolError};
use crate::geometry::Axis;
use crate::services::export::{DownloadRequest, ExportedFile, prepare_download};
use crate::services::harvey::{HarveyLevel, insert_harvey_ball};
use crate::services::position::{copy_position, paste_position};
use crate::services::shapes::{align_shapes, distribute_shapes, swap_shapes};
use crate::state::ToolState;
use crate::transform::{Alignment, PasteMode, PositionClipboard, SwapMode};

// =============================================================================
// COMMANDS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Swap(SwapMode),
    Align(Alignment),
    Distribute(Axis),
    CopyPosition,
    Paste(PasteMode),
    HarveyBall(HarveyLevel),
}

/// A command id that no ribbon button registers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command: {0}")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        let command = match id {
            "swapPosition" | "swapCenter" => Self::Swap(SwapMode::Center),
            "swapHorizontal" => Self::Swap(SwapMode::Horizontal),
            "swapVertical" => Self::Swap(SwapMode::Vertical),
            "swapTopLeft" => Self::Swap(SwapMode::Corner),
            "alignLeft" => Self::Align(Alignment::Left),
            "alignRight" => Self::Align(Alignment::Right),
            "alignCenter" => Self::Align(Alignment::Center),
            "alignTop" => Self::Align(Alignment::Top),
            "alignBottom" => Self::Align(Alignment::Bottom),
            "alignMiddle" => Self::Align(Alignment::Middle),
            "distributeHorizontal" => Self::Distribute(Axis::Horizontal),
            "distributeVertical" => Self::Distribute(Axis::Vertical),
            "copyPosition" => Self::CopyPosition,
            "pastePosition" => Self::Paste(PasteMode::Position),
            "pasteSizeOnly" => Self::Paste(PasteMode::SizeOnly),
            "pasteAll" | "pasteSize" => Self::Paste(PasteMode::All),
            "harveyBall0" => Self::HarveyBall(HarveyLevel::Empty),
            "harveyBall25" => Self::HarveyBall(HarveyLevel::Quarter),
            "harveyBall50" => Self::HarveyBall(HarveyLevel::Half),
            "harveyBall75" => Self::HarveyBall(HarveyLevel::ThreeQuarter),
            "harveyBall100" => Self::HarveyBall(HarveyLevel::Full),
            other => return Err(UnknownCommand(other.to_owned())),
        };
        Ok(command)
    }
}

impl Command {
    /// Status text shown when the command succeeds.
    #[must_use]
    pub fn success_message(self) -> String {
        let text = match self {
            Self::Swap(SwapMode::Center) => "Positions swapped",
            Self::Swap(SwapMode::Horizontal) => "Swapped horizontally",
            Self::Swap(SwapMode::Vertical) => "Swapped vertically",
            Self::Swap(SwapMode::Corner) => "Swapped top-left",
            Self::Align(Alignment::Left) => "Aligned left",
            Self::Align(Alignment::Right) => "Aligned right",
            Self::Align(Alignment::Center) => "Aligned center",
            Self::Align(Alignment::Top) => "Aligned top",
            Self::Align(Alignment::Bottom) => "Aligned bottom",
            Self::Align(Alignment::Middle) => "Aligned middle",
            Self::Distribute(Axis::Horizontal) => "Distributed horizontally",
            Self::Distribute(Axis::Vertical) => "Distributed vertically",
            Self::CopyPosition => "Position + size copied",
            Self::Paste(mode) => mode.success_message(),
            Self::HarveyBall(level) => return format!("Inserted {}% Harvey ball", level.percent()),
        };
        text.to_owned()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Swap(mode) => write!(f, "swap:{mode:?}"),
            Self::Align(alignment) => write!(f, "align:{alignment:?}"),
            Self::Distribute(axis) => write!(f, "distribute:{axis:?}"),
            Self::CopyPosition => f.write_str("position:copy"),
            Self::Paste(mode) => write!(f, "position:paste:{mode:?}"),
            Self::HarveyBall(level) => write!(f, "harvey:{}", level.percent()),
        }
    }
}

// =============================================================================
// STATUS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
    Info,
}

/// One line for the task pane status bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    pub retryable: bool,
}

impl StatusMessage {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, message: message.into(), code: None, retryable: false }
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: StatusKind::Info, message: message.into(), code: None, retryable: false }
    }

    /// Status for a typed error, carrying its code and retry hint.
    #[must_use]
    pub fn error_from(err: &(impl ErrorCode + ?Sized)) -> Self {
        Self {
            kind: StatusKind::Error,
            message: err.to_string(),
            code: Some(err.error_code()),
            retryable: err.retryable(),
        }
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Run `command` against the current selection.
pub async fn run(state: &ToolState, clipboard: &mut PositionClipboard, command: Command) -> StatusMessage {
    match dispatch(state, clipboard, command).await {
        Ok(()) => {
            info!(%command, "command completed");
            StatusMessage::success(command.success_message())
        }
        Err(e) => {
            warn!(%command, code = e.error_code(), retryable = e.retryable(), error = %e, "command failed");
            StatusMessage::error_from(&e)
        }
    }
}

/// Parse a ribbon command id and run it.
pub async fn run_id(state: &ToolState, clipboard: &mut PositionClipboard, id: &str) -> StatusMessage {
    match id.parse::<Command>() {
        Ok(command) => run(state, clipboard, command).await,
        Err(e) => {
            warn!(id, "unknown command id");
            StatusMessage { kind: StatusKind::Error, message: e.to_string(), code: Some("E_UNKNOWN_COMMAND"), retryable: false }
        }
    }
}

/// What the user does with an exported file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadPurpose {
    Save,
    /// Saved so the user can attach it to an email.
    Email,
}

/// Export per `request` and report the outcome. The file, if any, is for the UI to save.
pub async fn download(
    state: &ToolState,
    request: &DownloadRequest,
    purpose: DownloadPurpose,
) -> (StatusMessage, Option<ExportedFile>) {
    match prepare_download(state, request).await {
        Ok(file) => {
            let status = match purpose {
                DownloadPurpose::Save => StatusMessage::success(format!("Downloaded {}", file.file_name)),
                DownloadPurpose::Email => StatusMessage::info("File downloaded. Attach it to the email."),
            };
            (status, Some(file))
        }
        Err(e) => {
            warn!(?purpose, code = e.error_code(), error = %e, "download failed");
            (StatusMessage::error_from(&e), None)
        }
    }
}

async fn dispatch(state: &ToolState, clipboard: &mut PositionClipboard, command: Command) -> Result<(), ToolError> {
    match command {
        Command::Swap(mode) => swap_shapes(state, mode).await.map(drop),
        Command::Align(alignment) => align_shapes(state, alignment).await.map(drop),
        Command::Distribute(axis) => distribute_shapes(state, axis).await.map(drop),
        Command::CopyPosition => copy_position(state, clipboard).await.map(drop),
        Command::Paste(mode) => paste_position(state, clipboard, mode).await.map(drop),
        Command::HarveyBall(level) => insert_harvey_ball(state, level).await.map(drop),
    }
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
