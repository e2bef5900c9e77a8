//! Demo task
//!
//! Counts upwards on the display and steps through the brightness levels.
//! After each full brightness sweep, blinking is toggled with the two
//! rightmost units kept steady.

use core::fmt::Write;

use defmt::*;
use embassy_time::{Duration, Ticker};
use heapless::String;

use ssos_core::config::DisplaySettings;
use ssos_font::Font;

use crate::channels::{FRAME_BUFFER, SETTINGS};
use crate::config::{SLOT_COUNT, UNIT_COUNT};

/// Counter step (ms)
const STEP_MS: u64 = 100;

/// Counter steps between brightness changes
const STEPS_PER_LEVEL: u16 = 20;

/// Largest value that fits the bank
const COUNT_LIMIT: u32 = pow10(UNIT_COUNT);

const fn pow10(digits: usize) -> u32 {
    let mut value = 1u32;
    let mut i = 0;
    while i < digits && i < 9 {
        value *= 10;
        i += 1;
    }
    value
}

#[embassy_executor::task]
pub async fn demo_task(initial: DisplaySettings) {
    info!("Demo task started");

    let mut ticker = Ticker::every(Duration::from_millis(STEP_MS));
    let mut settings = initial;
    let mut count = 0u32;
    let mut steps = 0u16;

    loop {
        ticker.next().await;

        show_count(count);
        count = (count + 1) % COUNT_LIMIT;

        steps += 1;
        if steps >= STEPS_PER_LEVEL {
            steps = 0;
            settings = next_settings(settings);
            SETTINGS.signal(settings);
        }
    }
}

/// Render `count` right-aligned, with a decimal point on the tens unit
fn show_count(count: u32) {
    let mut text: String<16> = String::new();
    if write!(text, "{:>width$}", count, width = UNIT_COUNT).is_err() {
        return;
    }

    let mut patterns = [0u8; UNIT_COUNT];
    ssos_font::encode(Font::LookAlike, text.as_bytes(), &mut patterns);
    if UNIT_COUNT > 1 {
        patterns[UNIT_COUNT - 2] |= ssos_core::segments::DP;
    }
    FRAME_BUFFER.write(&patterns);
}

/// Step to the next brightness level; toggle blinking after the brightest
fn next_settings(current: DisplaySettings) -> DisplaySettings {
    if current.brightness < SLOT_COUNT {
        return DisplaySettings {
            brightness: current.brightness + 1,
            ..current
        };
    }

    let blinking = !current.blinking;
    info!("Demo: blinking {}", blinking);
    DisplaySettings {
        brightness: 1,
        blinking,
        no_blink_mask: steady_mask(),
        ..current
    }
}

/// Mask keeping the two rightmost units lit while the rest blink
fn steady_mask() -> u32 {
    let units = UNIT_COUNT as u32;
    let steady = units.min(2);
    ((1u32 << steady) - 1) << (units - steady)
}
