//! Line driver trait for the shared row and column lines

use crate::scheduler::{ScanScheduler, TickOutput, TraceHook};

/// Trait for applying tick output to the row and column lines
///
/// Called once per tick, right after [`ScanScheduler::tick`], from the same
/// context. Implementations must not block.
pub trait ScanOutput {
    /// Driver-specific error
    type Error;

    /// Drive the rows and the (at most one) energized column
    fn apply(&mut self, output: TickOutput) -> Result<(), Self::Error>;

    /// De-energize every column
    ///
    /// Used when scanning stops.
    fn blank(&mut self) -> Result<(), Self::Error> {
        self.apply(TickOutput::OFF)
    }
}

/// Tick the scheduler and apply the result to `lines`
///
/// This is the body of the timer interrupt.
#[inline]
pub fn drive<const N: usize, T, O>(
    scheduler: &mut ScanScheduler<'_, N, T>,
    lines: &mut O,
) -> Result<TickOutput, O::Error>
where
    T: TraceHook,
    O: ScanOutput,
{
    let output = scheduler.tick();
    lines.apply(output)?;
    Ok(output)
}
