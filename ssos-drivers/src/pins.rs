//! Pin-per-line driver
//!
//! Eight row pins (segments a..g and the decimal point, in
//! [`ssos_core::segments`] bit order) and one column pin per unit, all
//! driven through `embedded-hal` 1.0 [`OutputPin`]s.

use embedded_hal::digital::OutputPin;
use ssos_core::scheduler::TickOutput;
use ssos_core::segments::{self, ROW_COUNT};
use ssos_core::traits::ScanOutput;

use crate::{LineError, Polarity};

/// Display bank wired with one GPIO per row and per column
pub struct PinBank<P, const N: usize> {
    rows: [P; ROW_COUNT],
    columns: [P; N],
    row_polarity: Polarity,
    column_polarity: Polarity,
    /// Last output written to the pins
    applied: TickOutput,
}

impl<P: OutputPin, const N: usize> PinBank<P, N> {
    /// Create a bank and switch every line off
    pub fn new(
        rows: [P; ROW_COUNT],
        columns: [P; N],
        row_polarity: Polarity,
        column_polarity: Polarity,
    ) -> Result<Self, LineError<P::Error>> {
        let mut bank = Self {
            rows,
            columns,
            row_polarity,
            column_polarity,
            applied: TickOutput::OFF,
        };
        bank.columns_off()?;
        bank.write_rows(segments::OFF)?;
        Ok(bank)
    }

    /// Common-cathode bank: segments sourced high, unit commons sunk low
    pub fn common_cathode(rows: [P; ROW_COUNT], columns: [P; N]) -> Result<Self, LineError<P::Error>> {
        Self::new(rows, columns, Polarity::ActiveHigh, Polarity::ActiveLow)
    }

    /// Common-anode bank: unit commons sourced high, segments sunk low
    pub fn common_anode(rows: [P; ROW_COUNT], columns: [P; N]) -> Result<Self, LineError<P::Error>> {
        Self::new(rows, columns, Polarity::ActiveLow, Polarity::ActiveHigh)
    }

    /// Last output written to the pins
    pub fn applied(&self) -> TickOutput {
        self.applied
    }

    /// Release the pins
    pub fn release(self) -> ([P; ROW_COUNT], [P; N]) {
        (self.rows, self.columns)
    }

    fn columns_off(&mut self) -> Result<(), LineError<P::Error>> {
        let level = self.column_polarity.level(false);
        for pin in self.columns.iter_mut() {
            pin.set_state(level).map_err(LineError::Io)?;
        }
        self.applied.column = None;
        Ok(())
    }

    fn write_rows(&mut self, pattern: u8) -> Result<(), LineError<P::Error>> {
        for (bit, pin) in self.rows.iter_mut().enumerate() {
            let level = self.row_polarity.level(pattern & (1 << bit) != 0);
            pin.set_state(level).map_err(LineError::Io)?;
        }
        self.applied.row_pattern = pattern;
        Ok(())
    }

    fn set_column(&mut self, column: u8, on: bool) -> Result<(), LineError<P::Error>> {
        let level = self.column_polarity.level(on);
        self.columns[usize::from(column)]
            .set_state(level)
            .map_err(LineError::Io)
    }
}

impl<P: OutputPin, const N: usize> ScanOutput for PinBank<P, N> {
    type Error = LineError<P::Error>;

    fn apply(&mut self, output: TickOutput) -> Result<(), Self::Error> {
        if output == self.applied {
            return Ok(());
        }
        if let Some(column) = output.column {
            if usize::from(column) >= N {
                return Err(LineError::ColumnOutOfRange {
                    column,
                    columns: N as u8,
                });
            }
        }

        // Old column off before the rows change, new column on after
        if let Some(old) = self.applied.column {
            self.set_column(old, false)?;
            self.applied.column = None;
        }
        if output.row_pattern != self.applied.row_pattern {
            self.write_rows(output.row_pattern)?;
        }
        if let Some(column) = output.column {
            self.set_column(column, true)?;
            self.applied.column = Some(column);
        }
        Ok(())
    }

    fn blank(&mut self) -> Result<(), Self::Error> {
        self.columns_off()
    }
}
