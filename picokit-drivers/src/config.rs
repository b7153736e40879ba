//! Driver configuration types
//!
//! Plain values passed into constructors at startup. The firmware fills
//! them from the board configuration generated at build time.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default debounce window (ms)
pub const DEFAULT_DEBOUNCE_MS: u32 = 50;

/// Default minimum hold time for a long press (ms)
pub const DEFAULT_LONG_PRESS_MS: u32 = 500;

/// Default LiDAR poll interval (ms)
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 10;

/// Default liveness LED half-period (ms)
pub const DEFAULT_BLINK_INTERVAL_MS: u32 = 100;

/// Push-button timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ButtonConfig {
    /// Minimum time between two accepted presses
    pub debounce_ms: u32,
    /// Minimum hold time for a release to count as a long press
    pub long_press_ms: u32,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            long_press_ms: DEFAULT_LONG_PRESS_MS,
        }
    }
}

/// LiDAR polling and indicator timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct LidarConfig {
    /// Delay between frame reads
    pub poll_interval_ms: u32,
    /// Time the liveness LED spends in each state
    pub blink_interval_ms: u32,
}

impl Default for LidarConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            blink_interval_ms: DEFAULT_BLINK_INTERVAL_MS,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    extern crate std;

    use super::*;
    use std::string::String;

    #[test]
    fn test_missing_keys_take_defaults() {
        let button: ButtonConfig = toml::from_str("long_press_ms = 800").unwrap();
        assert_eq!(button.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert_eq!(button.long_press_ms, 800);

        let lidar: LidarConfig = toml::from_str("").unwrap();
        assert_eq!(lidar, LidarConfig::default());
    }

    #[test]
    fn test_flattened_into_board_section() {
        #[derive(Deserialize)]
        struct Section {
            pin: String,
            #[serde(flatten)]
            timing: ButtonConfig,
        }

        let section: Section = toml::from_str("pin = \"^gpio14\"\ndebounce_ms = 30").unwrap();
        assert_eq!(section.pin, "^gpio14");
        assert_eq!(section.timing.debounce_ms, 30);
        assert_eq!(section.timing.long_press_ms, DEFAULT_LONG_PRESS_MS);
    }
}
