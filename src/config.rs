//! Tool configuration parsed from environment variables.

use std::time::Duration;

use crate::error::ToolError;
use crate::transform::OverlapPolicy;

pub const DEFAULT_SMALL_MOVE_THRESHOLD: f64 = 5.0;
pub const DEFAULT_SMALL_MOVE_NUDGE: f64 = 5.0;
pub const DEFAULT_LARGE_MOVE_NUDGE: f64 = 0.5;
pub const DEFAULT_SMALL_MOVE_PAUSE_MS: u64 = 150;
pub const DEFAULT_LARGE_MOVE_PAUSE_MS: u64 = 30;
pub const DEFAULT_SETTLE_ATTEMPTS: u32 = 2;

/// How patches are committed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshMode {
    /// One batch per operation.
    Single,
    /// Nudge-then-settle: an offset batch, a pause, then the exact batch.
    Nudge,
}

/// Tuning for the nudge-then-settle commit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefreshConfig {
    /// A batch whose largest field delta is below this is a small move.
    pub small_move_threshold: f64,
    /// Nudge offset for small-move batches.
    pub small_move_nudge: f64,
    /// Nudge offset for large-move batches.
    pub large_move_nudge: f64,
    pub small_move_pause: Duration,
    pub large_move_pause: Duration,
    /// Total tries for the settle batch on a retryable host error.
    pub settle_attempts: u32,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            small_move_threshold: DEFAULT_SMALL_MOVE_THRESHOLD,
            small_move_nudge: DEFAULT_SMALL_MOVE_NUDGE,
            large_move_nudge: DEFAULT_LARGE_MOVE_NUDGE,
            small_move_pause: Duration::from_millis(DEFAULT_SMALL_MOVE_PAUSE_MS),
            large_move_pause: Duration::from_millis(DEFAULT_LARGE_MOVE_PAUSE_MS),
            settle_attempts: DEFAULT_SETTLE_ATTEMPTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolsConfig {
    pub refresh_mode: RefreshMode,
    pub refresh: RefreshConfig,
    pub overlap: OverlapPolicy,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self { refresh_mode: RefreshMode::Nudge, refresh: RefreshConfig::default(), overlap: OverlapPolicy::Pack }
    }
}

impl ToolsConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `STRATEGY_TOOLS_REFRESH_MODE`: `nudge` (default) or `single`
    /// - `STRATEGY_TOOLS_SMALL_MOVE_THRESHOLD`: default 5.0
    /// - `STRATEGY_TOOLS_SMALL_NUDGE`: default 5.0
    /// - `STRATEGY_TOOLS_LARGE_NUDGE`: default 0.5
    /// - `STRATEGY_TOOLS_SMALL_PAUSE_MS`: default 150
    /// - `STRATEGY_TOOLS_LARGE_PAUSE_MS`: default 30
    /// - `STRATEGY_TOOLS_SETTLE_ATTEMPTS`: default 2
    /// - `STRATEGY_TOOLS_OVERLAP`: `pack` (default), `reject` or `allow`
    ///
    /// # Errors
    ///
    /// Returns `Config` if a mode or policy value is not recognized.
    pub fn from_env() -> Result<Self, ToolError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ToolsConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `Config` if a mode or policy value is not recognized.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ToolError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let refresh_mode = parse_refresh_mode(lookup("STRATEGY_TOOLS_REFRESH_MODE").as_deref())?;
        let overlap = parse_overlap(lookup("STRATEGY_TOOLS_OVERLAP").as_deref())?;
        let refresh = RefreshConfig {
            small_move_threshold: parse_positive(
                &lookup,
                "STRATEGY_TOOLS_SMALL_MOVE_THRESHOLD",
                DEFAULT_SMALL_MOVE_THRESHOLD,
            ),
            small_move_nudge: parse_positive(&lookup, "STRATEGY_TOOLS_SMALL_NUDGE", DEFAULT_SMALL_MOVE_NUDGE),
            large_move_nudge: parse_positive(&lookup, "STRATEGY_TOOLS_LARGE_NUDGE", DEFAULT_LARGE_MOVE_NUDGE),
            small_move_pause: Duration::from_millis(parse_or(
                &lookup,
                "STRATEGY_TOOLS_SMALL_PAUSE_MS",
                DEFAULT_SMALL_MOVE_PAUSE_MS,
            )),
            large_move_pause: Duration::from_millis(parse_or(
                &lookup,
                "STRATEGY_TOOLS_LARGE_PAUSE_MS",
                DEFAULT_LARGE_MOVE_PAUSE_MS,
            )),
            settle_attempts: parse_or(&lookup, "STRATEGY_TOOLS_SETTLE_ATTEMPTS", DEFAULT_SETTLE_ATTEMPTS).max(1),
        };

        Ok(Self { refresh_mode, refresh, overlap })
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Like [`parse_or`], but only finite values above zero are accepted.
fn parse_positive<F>(lookup: &F, key: &str, default: f64) -> f64
where
    F: Fn(&str) -> Option<String>,
{
    let value = parse_or(lookup, key, default);
    if value.is_finite() && value > 0.0 { value } else { default }
}

fn parse_refresh_mode(raw: Option<&str>) -> Result<RefreshMode, ToolError> {
    match raw.unwrap_or("nudge") {
        "nudge" => Ok(RefreshMode::Nudge),
        "single" => Ok(RefreshMode::Single),
        other => Err(ToolError::Config(format!(
            "unknown STRATEGY_TOOLS_REFRESH_MODE '{other}' (expected 'nudge' or 'single')"
        ))),
    }
}

fn parse_overlap(raw: Option<&str>) -> Result<OverlapPolicy, ToolError> {
    match raw.unwrap_or("pack") {
        "pack" => Ok(OverlapPolicy::Pack),
        "reject" => Ok(OverlapPolicy::Reject),
        "allow" => Ok(OverlapPolicy::Allow),
        other => Err(ToolError::Config(format!("unknown STRATEGY_TOOLS_OVERLAP: {other}"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
