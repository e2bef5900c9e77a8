//! Scan task
//!
//! Owns the scheduler and the display lines. Runs once per timer period:
//! applies any pending settings, advances the scheduler by one tick and
//! drives the result onto the pins.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Ticker};

use ssos_core::scheduler::ScanScheduler;
use ssos_core::traits::{drive, ScanOutput};
use ssos_drivers::PinBank;

use crate::channels::SETTINGS;
use crate::config::{TIMER_PERIOD_MS, UNIT_COUNT};

/// Row and column pins of the bank
pub type DisplayLines = PinBank<Output<'static>, UNIT_COUNT>;

/// Consecutive line errors tolerated before scanning stops
const MAX_LINE_ERRORS: u8 = 8;

#[embassy_executor::task]
pub async fn scan_task(mut scan: ScanScheduler<'static, UNIT_COUNT>, mut lines: DisplayLines) {
    info!(
        "Scan task started: {} units, refresh {} ms",
        UNIT_COUNT,
        scan.refresh_period_ms()
    );

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(TIMER_PERIOD_MS)));
    let mut errors = 0u8;

    loop {
        ticker.next().await;

        if let Some(settings) = SETTINGS.try_take() {
            match scan.apply_settings(settings) {
                Ok(()) => debug!("Applied {}", settings),
                Err(e) => warn!("Display settings rejected: {}", e),
            }
        }

        match drive(&mut scan, &mut lines) {
            Ok(_) => errors = 0,
            Err(e) => {
                error!("Line write failed: {:?}", Debug2Format(&e));
                errors += 1;
                if errors >= MAX_LINE_ERRORS {
                    break;
                }
            }
        }
    }

    error!("Too many line errors, display stopped");
    if lines.blank().is_err() {
        error!("Failed to blank display");
    }
}
