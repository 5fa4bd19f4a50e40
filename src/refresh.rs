//! Render-refresh adapter — how a patch is committed to the host.
//!
//! DESIGN
//! ======
//! Some web renderers drop repaints for tiny property deltas. `NudgeSettle`
//! works around this by first committing every patched field offset away
//! from its current value, pausing so the renderer observes the
//! intermediate state, then committing the exact targets. Hosts without the
//! defect use `SingleCommit`. The strategy is picked once, at construction.
//!
//! KNOWN GAP
//! =========
//! There is no rollback. If the nudge batch lands and every settle attempt
//! fails, shapes are left at their nudged positions until the user retries.

#[cfg(test)]
#[path = "refresh_test.rs"]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, warn};

use crate::config::{RefreshConfig, RefreshMode};
use crate::error::{ErrorCode, ToolError};
use crate::geometry::{BoxPatch, Field, PositionPatch, ShapeBox};
use crate::host::PresentationHost;

/// Writes a patch to the host.
#[async_trait::async_trait]
pub trait CommitStrategy: Send + Sync {
    /// Commit `patch`. `current` is the pre-patch snapshot the patch was computed from.
    ///
    /// # Errors
    ///
    /// Returns the host error of the first batch that could not be committed.
    async fn commit(
        &self,
        host: &dyn PresentationHost,
        current: &[ShapeBox],
        patch: &PositionPatch,
    ) -> Result<(), ToolError>;
}

/// Build the strategy for a refresh mode.
#[must_use]
pub fn strategy_for(mode: RefreshMode, config: RefreshConfig) -> Arc<dyn CommitStrategy> {
    match mode {
        RefreshMode::Single => Arc::new(SingleCommit),
        RefreshMode::Nudge => Arc::new(NudgeSettle::new(config)),
    }
}

// =============================================================================
// SINGLE COMMIT
// =============================================================================

/// One batch, no refresh workaround.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleCommit;

#[async_trait::async_trait]
impl CommitStrategy for SingleCommit {
    async fn commit(
        &self,
        host: &dyn PresentationHost,
        _current: &[ShapeBox],
        patch: &PositionPatch,
    ) -> Result<(), ToolError> {
        if patch.is_empty() {
            return Ok(());
        }
        host.commit(patch).await?;
        Ok(())
    }
}

// =============================================================================
// NUDGE THEN SETTLE
// =============================================================================

/// Size class of a batch, by its largest field delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveClass {
    Small,
    Large,
}

impl MoveClass {
    #[must_use]
    pub fn classify(max_delta: f64, config: &RefreshConfig) -> Self {
        if max_delta < config.small_move_threshold { Self::Small } else { Self::Large }
    }

    /// Small moves get the larger nudge so the intermediate frame is visible.
    #[must_use]
    pub fn nudge(self, config: &RefreshConfig) -> f64 {
        match self {
            Self::Small => config.small_move_nudge,
            Self::Large => config.large_move_nudge,
        }
    }

    #[must_use]
    pub fn pause(self, config: &RefreshConfig) -> Duration {
        match self {
            Self::Small => config.small_move_pause,
            Self::Large => config.large_move_pause,
        }
    }
}

/// Two-phase commit: nudged batch, pause, exact batch.
#[derive(Debug, Clone, Copy)]
pub struct NudgeSettle {
    config: RefreshConfig,
}

impl NudgeSettle {
    #[must_use]
    pub fn new(config: RefreshConfig) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait]
impl CommitStrategy for NudgeSettle {
    async fn commit(
        &self,
        host: &dyn PresentationHost,
        current: &[ShapeBox],
        patch: &PositionPatch,
    ) -> Result<(), ToolError> {
        if patch.is_empty() {
            return Ok(());
        }

        let delta = max_delta(current, patch);
        let class = MoveClass::classify(delta, &self.config);
        let nudged = nudge_patch(current, patch, class.nudge(&self.config));
        debug!(max_delta = delta, ?class, shapes = patch.len(), "nudge phase");

        host.commit(&nudged).await?;
        tokio::time::sleep(class.pause(&self.config)).await;

        let attempts = self.config.settle_attempts.max(1);
        let mut attempt = 1;
        loop {
            match host.commit(patch).await {
                Ok(()) => return Ok(()),
                Err(e) if e.retryable() && attempt < attempts => {
                    warn!(error = %e, attempt, "settle batch failed; retrying");
                    attempt += 1;
                }
                Err(e) => {
                    error!(error = %e, shapes = patch.len(), "settle batch failed; nudged values remain applied");
                    return Err(e.into());
                }
            }
        }
    }
}

/// Largest absolute difference between a patched field and its current value.
///
/// Shapes missing from `current` do not contribute.
#[must_use]
pub fn max_delta(current: &[ShapeBox], patch: &PositionPatch) -> f64 {
    patch
        .iter()
        .filter_map(|(id, p)| current.iter().find(|b| b.id == id).map(|b| (b, p)))
        .flat_map(|(b, p)| p.fields().map(move |(field, target)| (target - field.of(b)).abs()))
        .fold(0.0, f64::max)
}

/// Offset every patched field by `magnitude`, away from the shape's current value.
///
/// The offset is positive when the target is at or below the current value
/// and negative otherwise. If that would land exactly on the current value
/// the direction flips. Width and height never go below zero.
#[must_use]
pub fn nudge_patch(current: &[ShapeBox], patch: &PositionPatch, magnitude: f64) -> PositionPatch {
    patch
        .iter()
        .map(|(id, p)| {
            let shape = current.iter().find(|b| b.id == id);
            let mut nudged = BoxPatch::default();
            for (field, target) in p.fields() {
                let value = match shape {
                    Some(b) => nudge_value(field, field.of(b), target, magnitude),
                    None => clamp_size(field, target + magnitude),
                };
                nudged.set(field, value);
            }
            (id.to_owned(), nudged)
        })
        .collect()
}

fn nudge_value(field: Field, current: f64, target: f64, magnitude: f64) -> f64 {
    let sign = if target <= current { 1.0 } else { -1.0 };
    let value = clamp_size(field, target + sign * magnitude);
    if (value - current).abs() < f64::EPSILON {
        clamp_size(field, target - sign * magnitude)
    } else {
        value
    }
}

fn clamp_size(field: Field, value: f64) -> f64 {
    if field.is_size() { value.max(0.0) } else { value }
}
