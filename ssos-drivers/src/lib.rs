//! Line drivers for multiplexed 7-segment display banks
//!
//! Implementations of [`ssos_core::traits::ScanOutput`] that turn a
//! [`TickOutput`](ssos_core::scheduler::TickOutput) into electrical state:
//!
//! - [`pins::PinBank`]: one `embedded-hal` output pin per row and column
//! - [`port::SplitPorts`]: rows and columns packed into two 8-bit ports

#![no_std]
#![deny(unsafe_code)]

pub mod pins;
pub mod port;

use core::fmt;

use embedded_hal::digital::PinState;

pub use pins::PinBank;
pub use port::{Port, PortWriter, SplitPorts};

/// Active level of a line group
///
/// Common-cathode banks drive segments high and sink the unit's common
/// line; common-anode banks are the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Line on = pin high
    #[default]
    ActiveHigh,
    /// Line on = pin low
    ActiveLow,
}

impl Polarity {
    /// Pin level for a logical line state
    pub const fn level(self, on: bool) -> PinState {
        match (self, on) {
            (Self::ActiveHigh, true) | (Self::ActiveLow, false) => PinState::High,
            (Self::ActiveHigh, false) | (Self::ActiveLow, true) => PinState::Low,
        }
    }
}

/// Line driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError<E> {
    /// Underlying pin or port write failed
    Io(E),
    /// Tick addressed a column the driver does not have
    ColumnOutOfRange {
        /// Requested column
        column: u8,
        /// Columns available
        columns: u8,
    },
}

impl<E: fmt::Debug> fmt::Display for LineError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "line write failed: {:?}", err),
            Self::ColumnOutOfRange { column, columns } => {
                write!(f, "column {} outside 0..{}", column, columns)
            }
        }
    }
}
