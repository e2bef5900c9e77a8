//! Tick tracing for tests and diagnostics
//!
//! The scheduler hands a [`TickTrace`] to its [`TraceHook`] at the end of
//! every tick. The default hook, [`NoTrace`], is zero-sized and does
//! nothing, so an untraced scheduler compiles to the bare counter logic.

use core::fmt::{self, Write};

use heapless::Vec;

use super::output::{TickEvent, TickOutput};

/// Scheduler state after one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickTrace {
    /// Slot within the current dwell
    pub slot: u8,
    /// Addressed unit
    pub unit: u8,
    /// Frame within the blink period
    pub frame: u8,
    /// Output after the tick
    pub output: TickOutput,
    /// Boundary crossed by the tick
    pub event: TickEvent,
}

/// Receiver for per-tick trace records
///
/// Called from the tick, so implementations must be short and must not
/// block.
pub trait TraceHook {
    /// Handle one tick
    fn on_tick(&mut self, trace: &TickTrace);
}

/// Hook that discards every record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoTrace;

impl TraceHook for NoTrace {
    #[inline(always)]
    fn on_tick(&mut self, _trace: &TickTrace) {}
}

impl<H: TraceHook> TraceHook for &mut H {
    #[inline]
    fn on_tick(&mut self, trace: &TickTrace) {
        (**self).on_tick(trace);
    }
}

/// Records up to `CAP` ticks; later ticks are counted but dropped
#[derive(Debug, Clone, Default)]
pub struct TraceLog<const CAP: usize> {
    records: Vec<TickTrace, CAP>,
    dropped: u32,
}

impl<const CAP: usize> TraceLog<CAP> {
    /// Create an empty log
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            dropped: 0,
        }
    }

    /// Recorded ticks, oldest first
    pub fn records(&self) -> &[TickTrace] {
        &self.records
    }

    /// Ticks that did not fit
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Forget all records
    pub fn clear(&mut self) {
        self.records.clear();
        self.dropped = 0;
    }

    /// Write the column line of the log
    ///
    /// One character per tick: the energized unit as a base-36 digit, or
    /// `-` when no column is driven. Dwells are separated by a space,
    /// rotations by `|` and blink periods by `][`. No separator precedes
    /// the first record.
    ///
    /// ```text
    /// 0000- 1111- 2222- 3333-|0000- ----- 2222- -----][0000-
    /// ```
    pub fn write_columns<W: Write>(&self, out: &mut W) -> fmt::Result {
        self.write_line(out, |t| match t.output.column {
            Some(unit) => char::from_digit(u32::from(unit), 36).unwrap_or('?'),
            None => '-',
        })
    }

    /// Write the unit line of the log, in the same layout as
    /// [`write_columns`](Self::write_columns)
    pub fn write_units<W: Write>(&self, out: &mut W) -> fmt::Result {
        self.write_line(out, |t| char::from_digit(u32::from(t.unit), 36).unwrap_or('?'))
    }

    /// Write the frame line of the log
    pub fn write_frames<W: Write>(&self, out: &mut W) -> fmt::Result {
        self.write_line(out, |t| char::from_digit(u32::from(t.frame), 36).unwrap_or('?'))
    }

    fn write_line<W, F>(&self, out: &mut W, symbol: F) -> fmt::Result
    where
        W: Write,
        F: Fn(&TickTrace) -> char,
    {
        for (i, trace) in self.records.iter().enumerate() {
            if i > 0 {
                match trace.event {
                    TickEvent::Slot => {}
                    TickEvent::Unit => out.write_char(' ')?,
                    TickEvent::Rotation => out.write_char('|')?,
                    TickEvent::BlinkPeriod => out.write_str("][")?,
                }
            }
            out.write_char(symbol(trace))?;
        }
        Ok(())
    }
}

impl<const CAP: usize> TraceHook for TraceLog<CAP> {
    fn on_tick(&mut self, trace: &TickTrace) {
        if self.records.push(*trace).is_err() {
            self.dropped = self.dropped.saturating_add(1);
        }
    }
}
