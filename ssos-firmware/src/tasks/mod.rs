//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod demo;
pub mod scan;

pub use demo::demo_task;
pub use scan::{scan_task, DisplayLines};
