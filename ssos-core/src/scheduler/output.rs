//! Electrical intent produced by one tick

use crate::segments;

/// Row and column state to apply after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutput {
    /// Segment pattern on the shared row lines
    pub row_pattern: u8,
    /// Energized unit, or `None` when no column is driven
    pub column: Option<u8>,
}

impl TickOutput {
    /// Nothing driven
    pub const OFF: Self = Self {
        row_pattern: segments::OFF,
        column: None,
    };

    /// `unit` lit with `row_pattern`
    pub const fn lit(row_pattern: u8, unit: u8) -> Self {
        Self {
            row_pattern,
            column: Some(unit),
        }
    }

    /// Check if a column is driven this tick
    pub const fn is_energized(&self) -> bool {
        self.column.is_some()
    }

    /// Check if `unit`'s column is driven this tick
    pub fn is_unit_energized(&self, unit: u8) -> bool {
        self.column == Some(unit)
    }
}

impl Default for TickOutput {
    fn default() -> Self {
        Self::OFF
    }
}

/// Counter boundary crossed by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickEvent {
    /// Still dwelling on the same unit
    Slot,
    /// Moved to the next unit
    Unit,
    /// Wrapped back to unit 0 (new frame)
    Rotation,
    /// Wrapped back to frame 0 (new blink period)
    BlinkPeriod,
}

impl TickEvent {
    /// Check if a new unit became addressed
    pub const fn crosses_unit(&self) -> bool {
        !matches!(self, Self::Slot)
    }
}
