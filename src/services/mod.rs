//! Operation services used by command dispatch.
//!
//! ARCHITECTURE
//! ============
//! Each service is one user operation: take the operation gate, read the
//! selection, run a pure transform, commit through the state's strategy.
//! Preconditions are checked before any host write.

pub mod export;
pub mod harvey;
pub mod position;
pub mod shapes;
