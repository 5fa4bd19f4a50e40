//! Slide-layout tools for a presentation editor: swap, align, distribute,
//! copy/paste geometry, Harvey balls and deck export.
//!
//! Operations read the current selection from a [`host::PresentationHost`],
//! compute a [`geometry::PositionPatch`] with a pure transform, and write it
//! back through the configured [`refresh::CommitStrategy`].

pub mod commands;
pub mod config;
pub mod error;
pub mod geometry;
pub mod host;
pub mod refresh;
pub mod selection;
pub mod services;
pub mod state;
pub mod transform;

pub use commands::{Command, StatusKind, StatusMessage, run, run_id};
pub use config::ToolsConfig;
pub use error::{ErrorCode, HostError, ToolError};
pub use state::ToolState;

/// Install the default `fmt` subscriber. A no-op if one is already set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().try_init();
}
