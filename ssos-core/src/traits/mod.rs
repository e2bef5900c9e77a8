//! Hardware abstraction traits
//!
//! These traits define the interface between the scan logic and the
//! hardware-specific line drivers.

pub mod scan_output;

pub use scan_output::{drive, ScanOutput};
