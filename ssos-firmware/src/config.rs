//! Display configuration compiled in from display.toml

use ssos_core::config::ScanConfig;

include!(concat!(env!("OUT_DIR"), "/display_config.rs"));

/// Scan configuration described by display.toml
pub const fn scan_config() -> ScanConfig {
    ScanConfig {
        timer_period_ms: TIMER_PERIOD_MS,
        unit_count: UNIT_COUNT as u8,
        slot_count: SLOT_COUNT,
        frame_count: FRAME_COUNT,
        frames_on: FRAMES_ON,
        no_blink_mask: NO_BLINK_MASK,
        brightness: BRIGHTNESS,
        blinking: BLINKING,
    }
}
