//! Scan configuration and its startup invariants
//!
//! Every check lives here so that the tick path never has to branch into
//! an error. A [`ScanConfig`] that passed [`ScanConfig::validate`] keeps all
//! scheduler counters within `u8` range and the refresh period within the
//! flicker bound.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Longest allowed full-bank refresh period (ms). 20 ms is 50 Hz.
pub const MAX_REFRESH_PERIOD_MS: u32 = 20;

/// Maximum number of units in one bank (width of the blink mask word)
pub const MAX_UNITS: u8 = 32;

/// Blink period used by [`ScanConfig::new`] (frames)
pub const DEFAULT_FRAME_COUNT: u8 = 50;

/// Lit frames per blink period used by [`ScanConfig::new`]
pub const DEFAULT_FRAMES_ON: u8 = 25;

/// Configuration errors
///
/// All of these are detected before the first tick, or when settings are
/// changed between ticks. None can occur inside [`tick`].
///
/// [`tick`]: crate::scheduler::ScanScheduler::tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Timer period must be at least 1 ms
    TimerPeriodZero,
    /// At least one unit is required
    UnitCountZero,
    /// More units than bits in the blink mask
    TooManyUnits,
    /// At least one brightness slot is required
    SlotCountZero,
    /// Blink period must be at least one frame
    FrameCountZero,
    /// Full-bank refresh takes longer than [`MAX_REFRESH_PERIOD_MS`]
    RefreshTooSlow {
        /// Computed refresh period (ms)
        period_ms: u32,
    },
    /// Brightness outside `1..=slot_count`
    BrightnessOutOfRange {
        /// Requested level
        brightness: u8,
        /// Number of slots per dwell
        slot_count: u8,
    },
    /// Lit frames outside `1..=frame_count`
    FramesOnOutOfRange {
        /// Requested lit frames
        frames_on: u8,
        /// Blink period (frames)
        frame_count: u8,
    },
    /// Blink on/off timing does not fit a `u8` frame counter
    BlinkTimingOutOfRange,
    /// Mask has bits set at or above `unit_count`
    NoBlinkMaskOutOfRange {
        /// Offending mask
        mask: u32,
    },
    /// Frame buffer length does not match `unit_count`
    FrameBufferLength {
        /// Configured unit count
        expected: u8,
        /// Frame buffer length
        actual: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimerPeriodZero => write!(f, "timer period must be at least 1 ms"),
            Self::UnitCountZero => write!(f, "unit count must be at least 1"),
            Self::TooManyUnits => write!(f, "unit count exceeds {}", MAX_UNITS),
            Self::SlotCountZero => write!(f, "slot count must be at least 1"),
            Self::FrameCountZero => write!(f, "frame count must be at least 1"),
            Self::RefreshTooSlow { period_ms } => write!(
                f,
                "refresh period {} ms exceeds {} ms",
                period_ms, MAX_REFRESH_PERIOD_MS
            ),
            Self::BrightnessOutOfRange {
                brightness,
                slot_count,
            } => write!(f, "brightness {} outside 1..={}", brightness, slot_count),
            Self::FramesOnOutOfRange {
                frames_on,
                frame_count,
            } => write!(f, "frames on {} outside 1..={}", frames_on, frame_count),
            Self::BlinkTimingOutOfRange => write!(f, "blink timing exceeds 255 frames"),
            Self::NoBlinkMaskOutOfRange { mask } => {
                write!(f, "no-blink mask {:#b} addresses missing units", mask)
            }
            Self::FrameBufferLength { expected, actual } => write!(
                f,
                "frame buffer holds {} patterns, expected {}",
                actual, expected
            ),
        }
    }
}

/// Scan configuration
///
/// `timer_period_ms`, `unit_count` and `slot_count` describe the board and
/// timer; the remaining fields are the user-adjustable display settings
/// (see [`DisplaySettings`](super::DisplaySettings)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanConfig {
    /// Timer interrupt period (ms)
    pub timer_period_ms: u16,
    /// Number of units in the bank
    pub unit_count: u8,
    /// Brightness slots per unit dwell
    pub slot_count: u8,
    /// Blink period, in full rotations
    pub frame_count: u8,
    /// Frames per blink period during which blinking units are lit
    pub frames_on: u8,
    /// Units exempt from blinking (bit `i` set => unit `i` always eligible)
    pub no_blink_mask: u32,
    /// Slots per dwell during which the column is energized
    pub brightness: u8,
    /// Blink gating enabled
    pub blinking: bool,
}

impl ScanConfig {
    /// Create a configuration with the power-on display defaults
    ///
    /// Brightness is one level below full, blinking is disabled, and the
    /// blink period is 50 frames with 25 lit.
    pub const fn new(timer_period_ms: u16, unit_count: u8, slot_count: u8) -> Self {
        Self {
            timer_period_ms,
            unit_count,
            slot_count,
            frame_count: DEFAULT_FRAME_COUNT,
            frames_on: DEFAULT_FRAMES_ON,
            no_blink_mask: 0,
            brightness: if slot_count > 1 { slot_count - 1 } else { 1 },
            blinking: false,
        }
    }

    /// Full-bank refresh period (ms)
    pub fn refresh_period_ms(&self) -> u32 {
        u32::from(self.timer_period_ms) * u32::from(self.slot_count) * u32::from(self.unit_count)
    }

    /// Ticks per full rotation over all units
    pub fn ticks_per_rotation(&self) -> u32 {
        u32::from(self.slot_count) * u32::from(self.unit_count)
    }

    /// Ticks per blink period
    pub fn ticks_per_blink_period(&self) -> u32 {
        self.ticks_per_rotation() * u32::from(self.frame_count)
    }

    /// Mask with one bit per configured unit
    pub fn unit_mask(&self) -> u32 {
        unit_mask(self.unit_count)
    }

    /// Check all startup invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timer_period_ms == 0 {
            return Err(ConfigError::TimerPeriodZero);
        }
        if self.unit_count == 0 {
            return Err(ConfigError::UnitCountZero);
        }
        if self.unit_count > MAX_UNITS {
            return Err(ConfigError::TooManyUnits);
        }
        if self.slot_count == 0 {
            return Err(ConfigError::SlotCountZero);
        }
        if self.frame_count == 0 {
            return Err(ConfigError::FrameCountZero);
        }

        let period_ms = self.refresh_period_ms();
        if period_ms > MAX_REFRESH_PERIOD_MS {
            return Err(ConfigError::RefreshTooSlow { period_ms });
        }

        check_brightness(self.brightness, self.slot_count)?;
        check_frames_on(self.frames_on, self.frame_count)?;
        check_no_blink_mask(self.no_blink_mask, self.unit_count)
    }
}

/// Mask with the low `unit_count` bits set
pub(crate) fn unit_mask(unit_count: u8) -> u32 {
    if unit_count >= MAX_UNITS {
        u32::MAX
    } else {
        (1u32 << unit_count) - 1
    }
}

pub(crate) fn check_brightness(brightness: u8, slot_count: u8) -> Result<(), ConfigError> {
    if (1..=slot_count).contains(&brightness) {
        Ok(())
    } else {
        Err(ConfigError::BrightnessOutOfRange {
            brightness,
            slot_count,
        })
    }
}

pub(crate) fn check_frames_on(frames_on: u8, frame_count: u8) -> Result<(), ConfigError> {
    if (1..=frame_count).contains(&frames_on) {
        Ok(())
    } else {
        Err(ConfigError::FramesOnOutOfRange {
            frames_on,
            frame_count,
        })
    }
}

pub(crate) fn check_no_blink_mask(mask: u32, unit_count: u8) -> Result<(), ConfigError> {
    if mask & !unit_mask(unit_count) == 0 {
        Ok(())
    } else {
        Err(ConfigError::NoBlinkMaskOutOfRange { mask })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blink_config() -> ScanConfig {
        ScanConfig {
            timer_period_ms: 1,
            unit_count: 4,
            slot_count: 5,
            frame_count: 5,
            frames_on: 3,
            no_blink_mask: 0b0101,
            brightness: 4,
            blinking: true,
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = ScanConfig::new(1, 4, 5);
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.brightness, 4);
        assert_eq!(config.frame_count, 50);
        assert_eq!(config.frames_on, 25);
        assert!(!config.blinking);
    }

    #[test]
    fn test_single_slot_default_brightness() {
        let config = ScanConfig::new(5, 4, 1);
        assert_eq!(config.brightness, 1);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_blink_config_valid() {
        let config = blink_config();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.refresh_period_ms(), 20);
        assert_eq!(config.ticks_per_rotation(), 20);
        assert_eq!(config.ticks_per_blink_period(), 100);
    }

    #[test]
    fn test_refresh_bound() {
        let config = ScanConfig::new(1, 4, 6);
        assert_eq!(
            config.validate(),
            Err(ConfigError::RefreshTooSlow { period_ms: 24 })
        );

        let config = ScanConfig::new(5, 4, 1);
        assert_eq!(config.validate(), Ok(()));

        let config = ScanConfig::new(u16::MAX, 32, 255);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RefreshTooSlow { .. })
        ));
    }

    #[test]
    fn test_zero_fields_rejected() {
        assert_eq!(
            ScanConfig::new(0, 4, 5).validate(),
            Err(ConfigError::TimerPeriodZero)
        );
        assert_eq!(
            ScanConfig::new(1, 0, 5).validate(),
            Err(ConfigError::UnitCountZero)
        );
        assert_eq!(
            ScanConfig::new(1, 4, 0).validate(),
            Err(ConfigError::SlotCountZero)
        );

        let config = ScanConfig {
            frame_count: 0,
            ..blink_config()
        };
        assert_eq!(config.validate(), Err(ConfigError::FrameCountZero));
    }

    #[test]
    fn test_too_many_units() {
        let config = ScanConfig::new(1, 33, 1);
        assert_eq!(config.validate(), Err(ConfigError::TooManyUnits));
    }

    #[test]
    fn test_brightness_range() {
        for brightness in [0, 6] {
            let config = ScanConfig {
                brightness,
                ..blink_config()
            };
            assert_eq!(
                config.validate(),
                Err(ConfigError::BrightnessOutOfRange {
                    brightness,
                    slot_count: 5
                })
            );
        }

        let config = ScanConfig {
            brightness: 5,
            ..blink_config()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_frames_on_range() {
        for frames_on in [0, 6] {
            let config = ScanConfig {
                frames_on,
                ..blink_config()
            };
            assert_eq!(
                config.validate(),
                Err(ConfigError::FramesOnOutOfRange {
                    frames_on,
                    frame_count: 5
                })
            );
        }
    }

    #[test]
    fn test_no_blink_mask_range() {
        let config = ScanConfig {
            no_blink_mask: 0b1_0000,
            ..blink_config()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NoBlinkMaskOutOfRange { mask: 0b1_0000 })
        );

        let config = ScanConfig {
            no_blink_mask: 0b1111,
            ..blink_config()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_unit_mask_full_width() {
        assert_eq!(unit_mask(1), 0b1);
        assert_eq!(unit_mask(4), 0b1111);
        assert_eq!(unit_mask(32), u32::MAX);
    }
}
