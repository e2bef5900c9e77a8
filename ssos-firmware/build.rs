//! Build script for ssos-firmware
//!
//! - Sets up linker search paths and arguments for memory.x
//! - Validates display.toml at compile time
//! - Generates the display constants in `OUT_DIR/display_config.rs`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use ssos_core::config::{DisplaySettings, ScanConfig};

/// Column pins wired on the board
const BOARD_COLUMNS: i64 = 4;

fn main() {
    setup_linker();
    let display = validate_config();
    generate_constants(&display);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validated display.toml contents
struct Display {
    config: ScanConfig,
    common_anode: bool,
}

/// Validate display.toml at compile time
fn validate_config() -> Display {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: display.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a display.toml configuration file.        ║\n\
            ║  Please create one in the ssos-firmware directory.               ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read display.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let value: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in display.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    let display = read_display(&value, &mut errors);

    if let Some(display) = &display {
        let units = i64::from(display.config.unit_count);
        if units != BOARD_COLUMNS {
            errors.push(format!(
                "[scan] units = {} but the board wires {} columns",
                units, BOARD_COLUMNS
            ));
        }
        if let Err(e) = display.config.validate() {
            errors.push(format!("invalid display configuration: {}", e));
        }
    }

    match display {
        Some(display) if errors.is_empty() => {
            println!("cargo:warning=display.toml validated successfully");
            display
        }
        _ => panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid display configuration                            ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        ),
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Read an integer field, recording an error if missing or out of range
fn integer(
    value: &toml::Value,
    section: &str,
    key: &str,
    range: (i64, i64),
    errors: &mut Vec<String>,
) -> Option<i64> {
    match value.get(section).and_then(|s| s.get(key)) {
        Some(toml::Value::Integer(n)) if (range.0..=range.1).contains(n) => Some(*n),
        Some(toml::Value::Integer(n)) => {
            errors.push(format!(
                "[{}] {} = {} outside {}..={}",
                section, key, n, range.0, range.1
            ));
            None
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            None
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            None
        }
    }
}

fn read_display(value: &toml::Value, errors: &mut Vec<String>) -> Option<Display> {
    for section in ["scan", "display", "blink"] {
        if value.get(section).is_none() {
            errors.push(format!("Missing [{}] section", section));
        }
    }

    let timer = integer(value, "scan", "timer_period_ms", (1, 1000), errors);
    let units = integer(value, "scan", "units", (1, 32), errors);
    let slots = integer(value, "scan", "slots", (1, 255), errors);
    let brightness = integer(value, "display", "brightness", (1, 255), errors);
    let frames_on = integer(value, "blink", "frames_on", (1, 255), errors);
    let frames_off = integer(value, "blink", "frames_off", (0, 255), errors);
    let mask = integer(value, "blink", "no_blink_mask", (0, i64::from(u32::MAX)), errors);

    let blinking = match value.get("blink").and_then(|s| s.get("enabled")) {
        Some(toml::Value::Boolean(b)) => Some(*b),
        Some(_) => {
            errors.push("[blink] enabled must be true or false".to_string());
            None
        }
        None => Some(false),
    };

    let common_anode = match value.get("display").and_then(|s| s.get("wiring")) {
        Some(toml::Value::String(w)) if w == "common_cathode" => Some(false),
        Some(toml::Value::String(w)) if w == "common_anode" => Some(true),
        Some(_) => {
            errors.push("[display] wiring must be \"common_cathode\" or \"common_anode\"".to_string());
            None
        }
        None => Some(false),
    };

    let base = ScanConfig::new(timer? as u16, units? as u8, slots? as u8);
    let settings = DisplaySettings {
        brightness: brightness? as u8,
        blinking: blinking?,
        frames_on: frames_on? as u8,
        frames_off: frames_off? as u8,
        no_blink_mask: mask? as u32,
    };

    match settings.apply_to(&base) {
        Ok(config) => Some(Display {
            config,
            common_anode: common_anode?,
        }),
        Err(e) => {
            errors.push(format!("invalid display settings: {}", e));
            None
        }
    }
}

/// Write the validated values as Rust constants
fn generate_constants(display: &Display) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let c = &display.config;

    let source = format!(
        "// Generated from display.toml by build.rs\n\
         \n\
         /// Timer tick period (ms)\n\
         pub const TIMER_PERIOD_MS: u16 = {};\n\
         /// Units in the bank\n\
         pub const UNIT_COUNT: usize = {};\n\
         /// Brightness slots per dwell\n\
         pub const SLOT_COUNT: u8 = {};\n\
         /// Initial brightness\n\
         pub const BRIGHTNESS: u8 = {};\n\
         /// Blinking enabled at startup\n\
         pub const BLINKING: bool = {};\n\
         /// Blink period (frames)\n\
         pub const FRAME_COUNT: u8 = {};\n\
         /// Lit frames per blink period\n\
         pub const FRAMES_ON: u8 = {};\n\
         /// Units exempt from blinking\n\
         pub const NO_BLINK_MASK: u32 = {:#x};\n\
         /// Common-anode wiring\n\
         pub const COMMON_ANODE: bool = {};\n",
        c.timer_period_ms,
        c.unit_count,
        c.slot_count,
        c.brightness,
        c.blinking,
        c.frame_count,
        c.frames_on,
        c.no_blink_mask,
        display.common_anode,
    );

    fs::write(out_dir.join("display_config.rs"), source).unwrap();
}
