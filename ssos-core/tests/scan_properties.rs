//! Property tests for the scan scheduler over arbitrary valid configurations

use proptest::prelude::*;

use ssos_core::config::ScanConfig;
use ssos_core::framebuf::FrameBuffer;
use ssos_core::scheduler::{ScanScheduler, TickOutput};

/// Run `$check::<N>` with `N` equal to the configured unit count
macro_rules! for_bank {
    ($config:expr, $check:ident) => {
        match $config.unit_count {
            1 => $check::<1>($config),
            2 => $check::<2>($config),
            3 => $check::<3>($config),
            4 => $check::<4>($config),
            5 => $check::<5>($config),
            6 => $check::<6>($config),
            n => panic!("no bank for {n} units"),
        }
    };
}

fn valid_config() -> impl Strategy<Value = ScanConfig> {
    (1u8..=6, 1u16..=3)
        .prop_flat_map(|(units, timer)| {
            let max_slots = (20 / (u32::from(timer) * u32::from(units))).max(1) as u8;
            (Just(units), Just(timer), 1..=max_slots, 1u8..=12)
        })
        .prop_flat_map(|(units, timer, slots, frames)| {
            (
                Just(units),
                Just(timer),
                Just(slots),
                Just(frames),
                1..=slots,
                1..=frames,
                0..=((1u32 << units) - 1),
                any::<bool>(),
            )
        })
        .prop_map(
            |(unit_count, timer_period_ms, slot_count, frame_count, brightness, frames_on, no_blink_mask, blinking)| {
                ScanConfig {
                    timer_period_ms,
                    unit_count,
                    slot_count,
                    frame_count,
                    frames_on,
                    no_blink_mask,
                    brightness,
                    blinking,
                }
            },
        )
}

fn patterns<const N: usize>() -> FrameBuffer<N> {
    let fb = FrameBuffer::new();
    for unit in 0..N {
        fb.set(unit, 0x10 + unit as u8).unwrap();
    }
    fb
}

fn eligible(config: &ScanConfig, unit: u8, frame: u8) -> bool {
    !config.blinking || frame < config.frames_on || config.no_blink_mask & (1 << unit) != 0
}

fn check_bounds<const N: usize>(config: ScanConfig) -> Result<(), TestCaseError> {
    let fb = patterns::<N>();
    let mut sched = ScanScheduler::new(config, &fb).unwrap();
    let ticks = 3 * sched.ticks_per_blink_period() + 7;

    for _ in 0..ticks {
        let output = sched.tick();
        prop_assert!(sched.slot() < config.slot_count);
        prop_assert!(sched.unit() < config.unit_count);
        prop_assert!(sched.frame() < config.frame_count);
        if let Some(column) = output.column {
            prop_assert_eq!(column, sched.unit());
        }
    }
    Ok(())
}

fn check_periods<const N: usize>(config: ScanConfig) -> Result<(), TestCaseError> {
    let fb = patterns::<N>();
    let mut sched = ScanScheduler::new(config, &fb).unwrap();
    prop_assert_eq!(
        sched.ticks_per_rotation(),
        u32::from(config.slot_count) * u32::from(config.unit_count)
    );

    sched.tick();
    let start = (sched.slot(), sched.unit(), sched.frame());
    prop_assert_eq!(start, (0, 0, 0));

    for _ in 0..sched.ticks_per_rotation() {
        sched.tick();
    }
    let frames = config.frame_count;
    prop_assert_eq!((sched.slot(), sched.unit()), (0, 0));
    prop_assert_eq!(sched.frame(), 1 % frames);

    for _ in 1..frames {
        for _ in 0..sched.ticks_per_rotation() {
            sched.tick();
        }
    }
    prop_assert_eq!((sched.slot(), sched.unit(), sched.frame()), start);
    Ok(())
}

fn check_duty_and_blink<const N: usize>(config: ScanConfig) -> Result<(), TestCaseError> {
    let fb = patterns::<N>();
    let mut sched = ScanScheduler::new(config, &fb).unwrap();
    let mut lit_rotations = [0u32; N];

    for frame in 0..config.frame_count {
        for unit in 0..config.unit_count {
            let mut energized = 0u8;
            for _ in 0..config.slot_count {
                let output = sched.tick();
                prop_assert_eq!(sched.frame(), frame);
                prop_assert_eq!(sched.unit(), unit);
                if output.is_energized() {
                    prop_assert_eq!(output, TickOutput::lit(fb.get(usize::from(unit)), unit));
                    energized += 1;
                }
            }

            if eligible(&config, unit, frame) {
                prop_assert_eq!(energized, config.brightness.min(config.slot_count));
                lit_rotations[usize::from(unit)] += 1;
            } else {
                prop_assert_eq!(energized, 0);
            }
        }
    }

    for unit in 0..config.unit_count {
        let exempt = !config.blinking || config.no_blink_mask & (1 << unit) != 0;
        let expected = if exempt {
            config.frame_count
        } else {
            config.frames_on
        };
        prop_assert_eq!(lit_rotations[usize::from(unit)], u32::from(expected));
    }
    Ok(())
}

fn check_determinism<const N: usize>(config: ScanConfig) -> Result<(), TestCaseError> {
    let fb = patterns::<N>();
    let mut a = ScanScheduler::new(config, &fb).unwrap();
    let mut b = ScanScheduler::new(config, &fb).unwrap();
    for _ in 0..2 * a.ticks_per_blink_period() {
        prop_assert_eq!(a.tick(), b.tick());
    }

    // A reset replays the same sequence from the start
    let mut first: [Option<TickOutput>; 64] = [None; 64];
    a.reset();
    for slot in first.iter_mut() {
        *slot = Some(a.tick());
    }
    a.reset();
    for expected in first {
        prop_assert_eq!(Some(a.tick()), expected);
    }
    Ok(())
}

proptest! {
    #[test]
    fn counters_stay_in_bounds(config in valid_config()) {
        for_bank!(config, check_bounds)?;
    }

    #[test]
    fn rotation_and_blink_periods(config in valid_config()) {
        for_bank!(config, check_periods)?;
    }

    #[test]
    fn duty_cycle_and_blink_law(config in valid_config()) {
        for_bank!(config, check_duty_and_blink)?;
    }

    #[test]
    fn identical_configs_are_deterministic(config in valid_config()) {
        for_bank!(config, check_determinism)?;
    }

    #[test]
    fn refresh_bound_enforced(timer in 1u16..=20, units in 1u8..=32, slots in 1u8..=20) {
        let config = ScanConfig::new(timer, units, slots);
        let period = u32::from(timer) * u32::from(units) * u32::from(slots);
        prop_assert_eq!(config.validate().is_ok(), period <= 20);
    }
}
