//! Board-agnostic core logic for multiplexed 7-segment display banks
//!
//! This crate contains the interrupt-time scan logic that does not depend
//! on specific hardware:
//!
//! - Configuration types and their startup invariants
//! - The shared frame buffer (one glyph pattern per unit)
//! - The scan scheduler: unit rotation, brightness slots and blinking
//! - Tick tracing for diagnostics
//! - The output trait implemented by line drivers
//!
//! A display bank shares its segment ("row") lines between all units and
//! energizes one unit's common ("column") line at a time. Calling
//! [`scheduler::ScanScheduler::tick`] from a periodic timer cycles through
//! the units fast enough that the whole bank appears lit.
//!
//! ```
//! use ssos_core::config::ScanConfig;
//! use ssos_core::framebuf::FrameBuffer;
//! use ssos_core::scheduler::ScanScheduler;
//!
//! static FRAME_BUFFER: FrameBuffer<4> = FrameBuffer::new();
//!
//! let config = ScanConfig::new(1, 4, 5);
//! let mut scan = ScanScheduler::new(config, &FRAME_BUFFER).unwrap();
//!
//! FRAME_BUFFER.set(0, 0b0011_1111).unwrap(); // "0"
//! let output = scan.tick();
//! assert_eq!(output.column, Some(0));
//! assert_eq!(output.row_pattern, 0b0011_1111);
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod framebuf;
pub mod scheduler;
pub mod segments;
pub mod traits;
