//! SSoS - Seven-Segment Scan Scheduler firmware
//!
//! Drives a multiplexed 7-segment display bank from an RP2040. One unit is
//! lit at a time; the scan task cycles through them fast enough for the
//! whole bank to appear lit, with brightness slots and blinking layered on
//! the same tick.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use {defmt_rtt as _, panic_probe as _};

use ssos_core::config::DisplaySettings;
use ssos_core::scheduler::ScanScheduler;
use ssos_drivers::PinBank;

mod channels;
mod config;
mod tasks;

use channels::FRAME_BUFFER;
use tasks::DisplayLines;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("SSoS firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let scan_config = config::scan_config();

    // Pin assignments are board-specific
    // Rows: GPIO2..GPIO9 = segments a, b, c, d, e, f, g, p
    let rows = [
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
        Output::new(p.PIN_4, Level::Low),
        Output::new(p.PIN_5, Level::Low),
        Output::new(p.PIN_6, Level::Low),
        Output::new(p.PIN_7, Level::Low),
        Output::new(p.PIN_8, Level::Low),
        Output::new(p.PIN_9, Level::Low),
    ];
    // Columns: GPIO10..GPIO13 = units 0..3
    let columns = [
        Output::new(p.PIN_10, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::Low),
        Output::new(p.PIN_13, Level::Low),
    ];

    let bank: Result<DisplayLines, _> = if config::COMMON_ANODE {
        PinBank::common_anode(rows, columns)
    } else {
        PinBank::common_cathode(rows, columns)
    };
    let lines = match bank {
        Ok(lines) => lines,
        Err(e) => {
            error!("Failed to initialize display lines: {:?}", Debug2Format(&e));
            return;
        }
    };
    info!("Display lines initialized");

    // display.toml is validated by build.rs, so this only fails if the
    // generated constants and the frame buffer disagree
    let scan = match ScanScheduler::new(scan_config, &FRAME_BUFFER) {
        Ok(scan) => scan,
        Err(e) => {
            error!("Invalid scan configuration: {}", e);
            return;
        }
    };
    info!(
        "Scan: {} ms tick, {} slots, brightness {}",
        scan_config.timer_period_ms, scan_config.slot_count, scan_config.brightness
    );

    spawner.spawn(tasks::scan_task(scan, lines)).unwrap();
    spawner
        .spawn(tasks::demo_task(DisplaySettings::from_config(&scan_config)))
        .unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
