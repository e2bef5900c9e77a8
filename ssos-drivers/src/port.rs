//! Split-port driver
//!
//! Rows and columns share two 8-bit output ports:
//!
//! ```text
//!   bit      7  6  5  4  3  2  1  0
//!   Port C:  -  -  p  g  f  e  d  c
//!   Port D:  b  a  3  2  1  0  -  -
//! ```
//!
//! Port D carries both the two lowest segments and the four unit commons,
//! so switching the column off also clears segments a and b. That is
//! harmless because no unit is lit at that point.

use ssos_core::scheduler::TickOutput;
use ssos_core::traits::ScanOutput;

use crate::LineError;

/// Number of columns available on port D
pub const PORT_COLUMNS: u8 = 4;

/// Output port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    /// Segments c..p
    C,
    /// Segments a, b and the unit commons
    D,
}

/// Trait for whole-port register writes
pub trait PortWriter {
    /// Write error
    type Error;

    /// Write all 8 bits of `port`
    fn write(&mut self, port: Port, value: u8) -> Result<(), Self::Error>;
}

/// Port C value for a row pattern
pub const fn port_c(rows: u8) -> u8 {
    rows >> 2
}

/// Port D value for a row pattern with `column` (0..4) energized
pub const fn port_d(rows: u8, column: u8) -> u8 {
    ((rows & 0b11) << 6) | ((1 << (column & 0b11)) << 2)
}

/// Display bank on the split C/D port layout (up to four units)
pub struct SplitPorts<W> {
    writer: W,
    /// Column currently energized
    active: Option<u8>,
}

impl<W: PortWriter> SplitPorts<W> {
    /// Create the driver and clear both ports
    pub fn new(mut writer: W) -> Result<Self, LineError<W::Error>> {
        writer.write(Port::C, 0).map_err(LineError::Io)?;
        writer.write(Port::D, 0).map_err(LineError::Io)?;
        Ok(Self {
            writer,
            active: None,
        })
    }

    /// Column currently energized
    pub fn active_column(&self) -> Option<u8> {
        self.active
    }

    /// Release the port writer
    pub fn release(self) -> W {
        self.writer
    }

    fn column_off(&mut self) -> Result<(), LineError<W::Error>> {
        self.writer.write(Port::D, 0).map_err(LineError::Io)?;
        self.active = None;
        Ok(())
    }
}

impl<W: PortWriter> ScanOutput for SplitPorts<W> {
    type Error = LineError<W::Error>;

    fn apply(&mut self, output: TickOutput) -> Result<(), Self::Error> {
        match output.column {
            None => {
                if self.active.is_some() {
                    self.column_off()?;
                }
                Ok(())
            }
            Some(column) if column >= PORT_COLUMNS => Err(LineError::ColumnOutOfRange {
                column,
                columns: PORT_COLUMNS,
            }),
            Some(column) => {
                if self.active.is_some() {
                    self.column_off()?;
                }
                let rows = output.row_pattern;
                self.writer.write(Port::C, port_c(rows)).map_err(LineError::Io)?;
                // Columns on after rows
                self.writer
                    .write(Port::D, port_d(rows, column))
                    .map_err(LineError::Io)?;
                self.active = Some(column);
                Ok(())
            }
        }
    }

    fn blank(&mut self) -> Result<(), Self::Error> {
        self.column_off()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use heapless::Vec;
    use ssos_core::segments::{A, B, C, DP, G};

    /// Mock port writer recording every write
    #[derive(Default)]
    struct MockPorts {
        writes: Vec<(Port, u8), 32>,
        c: u8,
        d: u8,
    }

    impl PortWriter for MockPorts {
        type Error = Infallible;

        fn write(&mut self, port: Port, value: u8) -> Result<(), Infallible> {
            match port {
                Port::C => self.c = value,
                Port::D => self.d = value,
            }
            let _ = self.writes.push((port, value));
            Ok(())
        }
    }

    #[test]
    fn test_layout() {
        assert_eq!(port_c(DP | G | C), 0b0011_0001);
        assert_eq!(port_d(A, 0), 0b0100_0100);
        assert_eq!(port_d(A | B, 3), 0b1110_0000);
        assert_eq!(port_d(0, 1), 0b0000_1000);
    }

    #[test]
    fn test_new_clears_ports() {
        let ports = SplitPorts::new(MockPorts::default()).unwrap();
        assert_eq!(ports.active_column(), None);
        let writer = ports.release();
        assert_eq!(writer.writes.as_slice(), &[(Port::C, 0), (Port::D, 0)]);
    }

    #[test]
    fn test_apply_writes_rows_then_columns() {
        let mut ports = SplitPorts::new(MockPorts::default()).unwrap();
        ports.apply(TickOutput::lit(0xFF, 2)).unwrap();
        assert_eq!(ports.active_column(), Some(2));

        ports.apply(TickOutput::lit(0x06, 3)).unwrap();
        let writer = ports.release();
        assert_eq!(
            &writer.writes[2..],
            &[
                (Port::C, 0b0011_1111),
                (Port::D, 0b1101_0000),
                (Port::D, 0),
                (Port::C, 0b0000_0001),
                (Port::D, 0b1010_0000),
            ]
        );
    }

    #[test]
    fn test_column_off_writes_port_d_once() {
        let mut ports = SplitPorts::new(MockPorts::default()).unwrap();
        ports.apply(TickOutput::lit(0x3F, 0)).unwrap();

        let off = TickOutput {
            row_pattern: 0x3F,
            column: None,
        };
        ports.apply(off).unwrap();
        ports.apply(off).unwrap();

        let writer = ports.release();
        assert_eq!(writer.writes.len(), 5);
        assert_eq!(writer.d, 0);
        assert_eq!(writer.c, 0b0000_1111);
    }

    #[test]
    fn test_fifth_column_rejected() {
        let mut ports = SplitPorts::new(MockPorts::default()).unwrap();
        assert_eq!(
            ports.apply(TickOutput::lit(0x01, 4)),
            Err(LineError::ColumnOutOfRange {
                column: 4,
                columns: 4
            })
        );
    }

    #[test]
    fn test_blank() {
        let mut ports = SplitPorts::new(MockPorts::default()).unwrap();
        ports.apply(TickOutput::lit(0x01, 1)).unwrap();
        ports.blank().unwrap();
        assert_eq!(ports.active_column(), None);
        assert_eq!(ports.release().d, 0);
    }
}
