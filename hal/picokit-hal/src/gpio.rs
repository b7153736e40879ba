//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins that can be implemented
//! by chip-specific HALs, plus parsing for the pin strings used in the
//! board configuration.

/// Digital output pin
///
/// Used for indicator outputs such as the liveness LED.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
///
/// Sampled on demand. Implementations must not block.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Highest GPIO number on the RP2040 (GPIO0..=GPIO29)
pub const MAX_GPIO: u8 = 29;

/// A parsed pin string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinSpec {
    /// GPIO number
    pub pin: u8,
    /// Logic level is inverted (`!` prefix)
    pub inverted: bool,
    /// Internal pull-up requested (`^` prefix)
    pub pull_up: bool,
}

impl PinSpec {
    /// Parse a pin string
    ///
    /// Supports formats:
    /// - "gpio14" -> pin 14
    /// - "^gpio14" -> pin 14 with pull-up
    /// - "!gpio14" -> pin 14, inverted
    /// - "!^gpio14" -> both (prefix order is free)
    pub fn parse(s: &str) -> Option<Self> {
        let mut s = s.trim();
        let mut inverted = false;
        let mut pull_up = false;

        loop {
            if let Some(rest) = s.strip_prefix('!') {
                if inverted {
                    return None;
                }
                inverted = true;
                s = rest;
            } else if let Some(rest) = s.strip_prefix('^') {
                if pull_up {
                    return None;
                }
                pull_up = true;
                s = rest;
            } else {
                break;
            }
        }

        let num_str = s.strip_prefix("gpio")?;
        if num_str.is_empty() || !num_str.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let pin: u8 = num_str.parse().ok()?;
        if pin > MAX_GPIO {
            return None;
        }

        Some(Self {
            pin,
            inverted,
            pull_up,
        })
    }
}
