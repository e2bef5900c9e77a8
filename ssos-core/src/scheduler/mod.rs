//! Scan scheduler
//!
//! Decides, on every timer tick, which unit is addressed, which pattern is
//! asserted on the row lines and whether the column is energized.

pub mod output;
pub mod scan;
pub mod trace;

pub use output::{TickEvent, TickOutput};
pub use scan::ScanScheduler;
pub use trace::{NoTrace, TickTrace, TraceHook, TraceLog};
