//! Scan scheduler: one call per timer interrupt
//!
//! Three nested counters drive the bank:
//!
//! - `slot`: position within the current unit's dwell. The column is only
//!   energized while `slot < brightness`, giving a `brightness / slot_count`
//!   duty cycle.
//! - `unit`: the addressed unit. Advances when the slots of a dwell are used
//!   up.
//! - `frame`: position within the blink period. Advances once per full
//!   rotation. Blinking units are only lit while `frame < frames_on`.
//!
//! All counters start at the last value of their range, so the first tick
//! rolls over to unit 0, slot 0, frame 0.

use crate::config::types::{check_brightness, check_no_blink_mask};
use crate::config::{ConfigError, DisplaySettings, ScanConfig};
use crate::framebuf::FrameBuffer;

use super::output::{TickEvent, TickOutput};
use super::trace::{NoTrace, TickTrace, TraceHook};

/// Scan scheduler for one display bank of `N` units
///
/// Owns all interrupt-time state. The frame buffer is borrowed and may be
/// rewritten by application code between (or during) ticks.
///
/// [`tick`](Self::tick) is the only method meant for interrupt context. The
/// reconfiguration methods must be called by the same owner between ticks,
/// never concurrently with one.
#[derive(Debug)]
pub struct ScanScheduler<'fb, const N: usize, T: TraceHook = NoTrace> {
    /// Validated configuration
    config: ScanConfig,
    /// Patterns to display
    frame_buffer: &'fb FrameBuffer<N>,
    /// Slot within the current dwell (0..slot_count)
    slot: u8,
    /// Addressed unit (0..unit_count)
    unit: u8,
    /// Frame within the blink period (0..frame_count)
    frame: u8,
    /// Current electrical intent
    output: TickOutput,
    /// Per-tick trace receiver
    trace: T,
}

impl<'fb, const N: usize> ScanScheduler<'fb, N> {
    /// Create an untraced scheduler
    ///
    /// Fails if the configuration violates a startup invariant or the frame
    /// buffer does not hold exactly `unit_count` patterns.
    pub fn new(config: ScanConfig, frame_buffer: &'fb FrameBuffer<N>) -> Result<Self, ConfigError> {
        Self::with_trace(config, frame_buffer, NoTrace)
    }
}

impl<'fb, const N: usize, T: TraceHook> ScanScheduler<'fb, N, T> {
    /// Create a scheduler that reports every tick to `trace`
    pub fn with_trace(
        config: ScanConfig,
        frame_buffer: &'fb FrameBuffer<N>,
        trace: T,
    ) -> Result<Self, ConfigError> {
        if let Err(err) = validate_bank(&config, N) {
            #[cfg(feature = "defmt")]
            defmt::warn!("Scan config rejected: {}", err);
            return Err(err);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Scan: {} units x {} slots, refresh {} ms",
            config.unit_count,
            config.slot_count,
            config.refresh_period_ms()
        );

        let mut scheduler = Self {
            config,
            frame_buffer,
            slot: 0,
            unit: 0,
            frame: 0,
            output: TickOutput::OFF,
            trace,
        };
        scheduler.reset();
        Ok(scheduler)
    }

    /// Advance one timer tick
    ///
    /// Constant time, never fails. Returns the output to apply, which is
    /// also available from [`output`](Self::output) until the next tick.
    #[inline]
    pub fn tick(&mut self) -> TickOutput {
        let event = self.advance();
        self.trace.on_tick(&TickTrace {
            slot: self.slot,
            unit: self.unit,
            frame: self.frame,
            output: self.output,
            event,
        });
        self.output
    }

    fn advance(&mut self) -> TickEvent {
        // Brightness: lit only in the first `brightness` slots of a dwell
        self.slot += 1;
        if self.slot >= self.config.brightness {
            self.output.column = None;
        }

        if self.slot < self.config.slot_count {
            return TickEvent::Slot;
        }
        self.slot = 0;
        let event = self.rotate();

        // New unit under control: switch it on unless blinked off
        self.output = if self.is_eligible(self.unit) {
            TickOutput::lit(self.frame_buffer.get(usize::from(self.unit)), self.unit)
        } else {
            TickOutput::OFF
        };
        event
    }

    fn rotate(&mut self) -> TickEvent {
        self.unit += 1;
        if self.unit < self.config.unit_count {
            return TickEvent::Unit;
        }
        self.unit = 0;

        self.frame += 1;
        if self.frame < self.config.frame_count {
            return TickEvent::Rotation;
        }
        self.frame = 0;
        TickEvent::BlinkPeriod
    }

    /// Check if `unit` may light in the current frame
    ///
    /// Exempt units (mask bit set) light in every frame.
    pub fn is_eligible(&self, unit: u8) -> bool {
        !self.config.blinking
            || self.frame < self.config.frames_on
            || self.config.no_blink_mask & unit_bit(unit) != 0
    }

    /// Output of the last tick
    pub fn output(&self) -> TickOutput {
        self.output
    }

    /// Current slot
    pub fn slot(&self) -> u8 {
        self.slot
    }

    /// Addressed unit
    pub fn unit(&self) -> u8 {
        self.unit
    }

    /// Current frame
    pub fn frame(&self) -> u8 {
        self.frame
    }

    /// Active configuration
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Frame buffer being displayed
    pub fn frame_buffer(&self) -> &'fb FrameBuffer<N> {
        self.frame_buffer
    }

    /// Ticks per full rotation over all units
    pub fn ticks_per_rotation(&self) -> u32 {
        self.config.ticks_per_rotation()
    }

    /// Ticks per blink period
    pub fn ticks_per_blink_period(&self) -> u32 {
        self.config.ticks_per_blink_period()
    }

    /// Full-bank refresh period (ms)
    pub fn refresh_period_ms(&self) -> u32 {
        self.config.refresh_period_ms()
    }

    /// Trace hook
    pub fn trace(&self) -> &T {
        &self.trace
    }

    /// Mutable trace hook
    pub fn trace_mut(&mut self) -> &mut T {
        &mut self.trace
    }

    /// Consume the scheduler, returning its trace hook
    pub fn into_trace(self) -> T {
        self.trace
    }

    /// Return to the initial state
    ///
    /// The next tick addresses unit 0 at the start of a blink period.
    pub fn reset(&mut self) {
        self.slot = self.config.slot_count - 1;
        self.unit = self.config.unit_count - 1;
        self.frame = self.config.frame_count - 1;
        self.output = TickOutput::OFF;
    }

    /// Set the number of lit slots per dwell (`1..=slot_count`)
    pub fn set_brightness(&mut self, brightness: u8) -> Result<(), ConfigError> {
        check_brightness(brightness, self.config.slot_count)?;
        self.config.brightness = brightness;
        #[cfg(feature = "defmt")]
        defmt::debug!("Brightness {}/{}", brightness, self.config.slot_count);
        Ok(())
    }

    /// Enable or disable blink gating
    pub fn set_blinking(&mut self, enabled: bool) {
        self.config.blinking = enabled;
        #[cfg(feature = "defmt")]
        defmt::debug!("Blinking {}", enabled);
    }

    /// Set the blink cycle to `frames_on` lit frames then `frames_off` dark
    /// frames
    pub fn set_blink_timing(&mut self, frames_on: u8, frames_off: u8) -> Result<(), ConfigError> {
        self.apply_settings(DisplaySettings {
            frames_on,
            frames_off,
            ..self.settings()
        })
    }

    /// Set which units ignore blinking (bit set => always eligible)
    pub fn set_no_blink_mask(&mut self, mask: u32) -> Result<(), ConfigError> {
        check_no_blink_mask(mask, self.config.unit_count)?;
        self.config.no_blink_mask = mask;
        Ok(())
    }

    /// Set which units blink (bit set => unit blinks)
    pub fn set_blink_mask(&mut self, mask: u32) -> Result<(), ConfigError> {
        check_no_blink_mask(mask, self.config.unit_count)?;
        self.config.no_blink_mask = !mask & self.config.unit_mask();
        Ok(())
    }

    /// Units that blink (complement of the no-blink mask)
    pub fn blink_mask(&self) -> u32 {
        !self.config.no_blink_mask & self.config.unit_mask()
    }

    /// Current adjustable settings
    pub fn settings(&self) -> DisplaySettings {
        DisplaySettings::from_config(&self.config)
    }

    /// Apply a settings bundle
    ///
    /// Either every field is applied or, on error, nothing changes. A frame
    /// counter beyond a shortened blink period is clamped to its last frame.
    pub fn apply_settings(&mut self, settings: DisplaySettings) -> Result<(), ConfigError> {
        let config = settings.apply_to(&self.config)?;
        self.config = config;
        if self.frame >= config.frame_count {
            self.frame = config.frame_count - 1;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("Display settings applied: {}", settings);
        Ok(())
    }
}

/// Check a configuration against a frame buffer of `len` units
fn validate_bank(config: &ScanConfig, len: usize) -> Result<(), ConfigError> {
    config.validate()?;
    if usize::from(config.unit_count) != len {
        return Err(ConfigError::FrameBufferLength {
            expected: config.unit_count,
            actual: len,
        });
    }
    Ok(())
}

#[inline]
fn unit_bit(unit: u8) -> u32 {
    1u32.checked_shl(u32::from(unit)).unwrap_or(0)
}
