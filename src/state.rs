//! Shared tool state.
//!
//! DESIGN
//! ======
//! `ToolState` is handed to every service. It holds the host, the commit
//! strategy chosen at construction, and config. Clone is cheap: all inner
//! fields are Arc-wrapped or Copy. The operation gate serializes
//! operations so two commands never interleave their host round trips or
//! the two phases of a nudge-settle commit.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::config::ToolsConfig;
use crate::host::PresentationHost;
use crate::refresh::{CommitStrategy, strategy_for};

#[derive(Clone)]
pub struct ToolState {
    pub host: Arc<dyn PresentationHost>,
    pub committer: Arc<dyn CommitStrategy>,
    pub config: ToolsConfig,
    gate: Arc<Mutex<()>>,
}

impl ToolState {
    /// Build state with the commit strategy named by `config.refresh_mode`.
    #[must_use]
    pub fn new(host: Arc<dyn PresentationHost>, config: ToolsConfig) -> Self {
        let committer = strategy_for(config.refresh_mode, config.refresh);
        Self::with_strategy(host, committer, config)
    }

    /// Build state with an explicit commit strategy.
    #[must_use]
    pub fn with_strategy(host: Arc<dyn PresentationHost>, committer: Arc<dyn CommitStrategy>, config: ToolsConfig) -> Self {
        Self { host, committer, config, gate: Arc::new(Mutex::new(())) }
    }

    /// Wait for exclusive use of the host. Hold the guard for the whole operation.
    pub async fn begin(&self) -> MutexGuard<'_, ()> {
        self.gate.lock().await
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::config::RefreshMode;
    use crate::geometry::ShapeBox;
    use crate::host::memory::MemoryHost;

    /// State over a `MemoryHost` holding `shapes`, committing in one batch.
    #[must_use]
    pub fn single_commit_state(shapes: Vec<ShapeBox>) -> (ToolState, Arc<MemoryHost>) {
        let config = ToolsConfig { refresh_mode: RefreshMode::Single, ..ToolsConfig::default() };
        state_with(MemoryHost::new(shapes), config)
    }

    /// State over an existing `MemoryHost` with the given config.
    #[must_use]
    pub fn state_with(host: MemoryHost, config: ToolsConfig) -> (ToolState, Arc<MemoryHost>) {
        let host = Arc::new(host);
        let state = ToolState::new(host.clone(), config);
        (state, host)
    }
}
