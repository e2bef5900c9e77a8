//! State shared between Embassy tasks
//!
//! The frame buffer is written by the application and read by the scan
//! task; settings changes travel through a signal and are applied by the
//! scan task between ticks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use ssos_core::config::DisplaySettings;
use ssos_core::framebuf::FrameBuffer;

use crate::config::UNIT_COUNT;

/// Patterns shown on the bank, one per unit
pub static FRAME_BUFFER: FrameBuffer<UNIT_COUNT> = FrameBuffer::new();

/// Pending display settings (latest wins)
pub static SETTINGS: Signal<CriticalSectionRawMutex, DisplaySettings> = Signal::new();
