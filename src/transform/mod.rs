//! Transform library — pure functions from shape boxes to position patches.
//!
//! DESIGN
//! ======
//! No transform touches the host or mutates its input. Shape-count
//! preconditions are checked by the services before a transform runs, so
//! every function here accepts whatever slice it is given and degrades to
//! an empty or identity patch on degenerate input.

pub mod align;
pub mod clipboard;
pub mod distribute;
pub mod swap;

pub use align::{Alignment, align};
pub use clipboard::{ClipboardSnapshot, PasteMode, PositionClipboard, paste_patch};
pub use distribute::{OverlapPolicy, distribute};
pub use swap::{SwapMode, swap};
