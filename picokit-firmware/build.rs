//! Build script for picokit-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml at compile time
//! - Generates `board_config.rs` with the validated settings

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use picokit_drivers::{ButtonConfig, LidarConfig};
use picokit_hal::PinSpec;
use serde::Deserialize;

/// GPIOs wired to the LiDAR UART (TX, RX)
const LIDAR_UART_PINS: [u8; 2] = [4, 5];

fn main() {
    setup_linker();
    let board = load_config();
    let resolved = validate(board);
    generate(&resolved);
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

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BoardToml {
    button: ButtonSection,
    led: LedSection,
    #[serde(default)]
    lidar: LidarSection,
}

// Sections holding a flattened driver config cannot deny unknown keys
#[derive(Debug, Deserialize)]
struct ButtonSection {
    pin: String,
    #[serde(default = "default_sample_interval_ms")]
    sample_interval_ms: u32,
    #[serde(flatten)]
    timing: ButtonConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LedSection {
    pin: String,
}

#[derive(Debug, Deserialize)]
struct LidarSection {
    #[serde(default = "default_baudrate")]
    baudrate: u32,
    #[serde(default = "default_parity")]
    parity: String,
    #[serde(default = "default_stop_bits")]
    stop_bits: u8,
    #[serde(flatten)]
    timing: LidarConfig,
}

impl Default for LidarSection {
    fn default() -> Self {
        Self {
            baudrate: default_baudrate(),
            parity: default_parity(),
            stop_bits: default_stop_bits(),
            timing: LidarConfig::default(),
        }
    }
}

fn default_sample_interval_ms() -> u32 {
    10
}

fn default_baudrate() -> u32 {
    115_200
}

fn default_parity() -> String {
    "none".into()
}

fn default_stop_bits() -> u8 {
    1
}

/// Settings after validation, ready for code generation
struct Resolved {
    button_pin: PinSpec,
    led_pin: PinSpec,
    board: BoardToml,
}

/// Read and deserialize board.toml
fn load_config() -> BoardToml {
    // Re-run if board.toml changes
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a board.toml configuration file.          ║\n\
            ║  Please create one in the picokit-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read board.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    match toml::from_str(&content) {
        Ok(board) => board,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid board.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check a pin string and where it may be used
fn check_pin(section: &str, raw: &str, errors: &mut Vec<String>) -> Option<PinSpec> {
    let Some(spec) = PinSpec::parse(raw) else {
        errors.push(format!("[{}] pin '{}' is not a valid gpioN string", section, raw));
        return None;
    };
    if LIDAR_UART_PINS.contains(&spec.pin) {
        errors.push(format!(
            "[{}] gpio{} is reserved for the LiDAR UART",
            section, spec.pin
        ));
        return None;
    }
    Some(spec)
}

/// Validate all sections, collecting every error before failing
fn validate(board: BoardToml) -> Resolved {
    let mut errors = Vec::new();

    let button_pin = check_pin("button", &board.button.pin, &mut errors);
    let led_pin = check_pin("led", &board.led.pin, &mut errors);

    if let (Some(button), Some(led)) = (button_pin, led_pin) {
        if button.pin == led.pin {
            errors.push(format!("[button] and [led] both use gpio{}", button.pin));
        }
    }
    if let Some(led) = led_pin {
        if led.pull_up {
            errors.push("[led] pull-up ('^') is only valid on inputs".into());
        }
    }

    let durations = [
        ("button", "debounce_ms", board.button.timing.debounce_ms),
        ("button", "long_press_ms", board.button.timing.long_press_ms),
        ("button", "sample_interval_ms", board.button.sample_interval_ms),
        ("lidar", "poll_interval_ms", board.lidar.timing.poll_interval_ms),
        ("lidar", "blink_interval_ms", board.lidar.timing.blink_interval_ms),
    ];
    for (section, key, value) in durations {
        if value == 0 {
            errors.push(format!("[{}] {} must be greater than 0", section, key));
        }
    }

    if board.button.sample_interval_ms >= board.button.timing.debounce_ms {
        errors.push("[button] sample_interval_ms must be below debounce_ms".into());
    }

    if !(1200..=921_600).contains(&board.lidar.baudrate) {
        errors.push("[lidar] baudrate must be 1200-921600".into());
    }
    if !["none", "even", "odd"].contains(&board.lidar.parity.as_str()) {
        errors.push("[lidar] parity must be 'none', 'even', or 'odd'".into());
    }
    if ![1, 2].contains(&board.lidar.stop_bits) {
        errors.push("[lidar] stop_bits must be 1 or 2".into());
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid board configuration                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=board.toml validated successfully");

    Resolved {
        button_pin: button_pin.unwrap(),
        led_pin: led_pin.unwrap(),
        board,
    }
}

/// Write `board_config.rs` into OUT_DIR for the firmware to include
fn generate(resolved: &Resolved) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let button = &resolved.board.button;
    let lidar = &resolved.board.lidar;

    let parity = match lidar.parity.as_str() {
        "even" => "Parity::Even",
        "odd" => "Parity::Odd",
        _ => "Parity::None",
    };
    let stop_bits = if lidar.stop_bits == 2 {
        "StopBits::Two"
    } else {
        "StopBits::One"
    };

    let code = format!(
        "// Generated by build.rs from board.toml. Do not edit.\n\
         \n\
         pub const BUTTON_PIN: PinSpec = {button_pin};\n\
         pub const BUTTON: ButtonConfig = ButtonConfig {{ debounce_ms: {debounce}, long_press_ms: {long_press} }};\n\
         pub const BUTTON_SAMPLE_INTERVAL_MS: u32 = {sample};\n\
         pub const LED_PIN: PinSpec = {led_pin};\n\
         pub const LIDAR_UART: UartConfig = UartConfig {{ baudrate: {baud}, parity: {parity}, stop_bits: {stop_bits} }};\n\
         pub const LIDAR: LidarConfig = LidarConfig {{ poll_interval_ms: {poll}, blink_interval_ms: {blink} }};\n",
        button_pin = pin_literal(resolved.button_pin),
        debounce = button.timing.debounce_ms,
        long_press = button.timing.long_press_ms,
        sample = button.sample_interval_ms,
        led_pin = pin_literal(resolved.led_pin),
        baud = lidar.baudrate,
        poll = lidar.timing.poll_interval_ms,
        blink = lidar.timing.blink_interval_ms,
    );

    fs::write(out_dir.join("board_config.rs"), code).unwrap();
}

fn pin_literal(spec: PinSpec) -> String {
    format!(
        "PinSpec {{ pin: {}, inverted: {}, pull_up: {} }}",
        spec.pin, spec.inverted, spec.pull_up
    )
}
