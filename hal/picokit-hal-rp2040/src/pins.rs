//! Dynamic pin allocation for config-driven hardware setup
//!
//! Provides a way to get GPIO pins by number at runtime, so button and
//! LED pins can come from the board configuration. The LiDAR UART pins
//! need their concrete types for embassy's UART constructor and are
//! handed out separately in [`BoardPeripherals`].

use embassy_rp::gpio::AnyPin;
use embassy_rp::peripherals::{PIN_5, UART1};
use embassy_rp::{Peri, Peripherals};

/// Number of user GPIOs on RP2040
pub const GPIO_COUNT: usize = 30;

/// GPIOs wired to the LiDAR on UART1 (TX, RX)
pub const LIDAR_UART_PINS: [u8; 2] = [4, 5];

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already taken
    AlreadyTaken,
    /// Pin reserved for the LiDAR UART
    Reserved,
}

/// Peripherals used by the LiDAR link, with their concrete types
pub struct BoardPeripherals {
    pub uart1: Peri<'static, UART1>,
    pub lidar_rx: Peri<'static, PIN_5>,
}

/// Pin bank that holds the free GPIO pins and allows taking them by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT],
}

impl PinBank {
    /// Split the embassy peripherals into a pin bank and the LiDAR link
    ///
    /// GPIO4 (LiDAR TX) is kept out of circulation; nothing else may drive it.
    pub fn split(p: Peripherals) -> (Self, BoardPeripherals) {
        let pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT] = [
            Some(p.PIN_0.into()),
            Some(p.PIN_1.into()),
            Some(p.PIN_2.into()),
            Some(p.PIN_3.into()),
            None, // LiDAR TX
            None, // LiDAR RX
            Some(p.PIN_6.into()),
            Some(p.PIN_7.into()),
            Some(p.PIN_8.into()),
            Some(p.PIN_9.into()),
            Some(p.PIN_10.into()),
            Some(p.PIN_11.into()),
            Some(p.PIN_12.into()),
            Some(p.PIN_13.into()),
            Some(p.PIN_14.into()),
            Some(p.PIN_15.into()),
            Some(p.PIN_16.into()),
            Some(p.PIN_17.into()),
            Some(p.PIN_18.into()),
            Some(p.PIN_19.into()),
            Some(p.PIN_20.into()),
            Some(p.PIN_21.into()),
            Some(p.PIN_22.into()),
            Some(p.PIN_23.into()),
            Some(p.PIN_24.into()),
            Some(p.PIN_25.into()),
            Some(p.PIN_26.into()),
            Some(p.PIN_27.into()),
            Some(p.PIN_28.into()),
            Some(p.PIN_29.into()),
        ];

        let board = BoardPeripherals {
            uart1: p.UART1,
            lidar_rx: p.PIN_5,
        };

        (Self { pins }, board)
    }

    /// Take a pin by number
    ///
    /// Returns the pin if available, or an error if:
    /// - Pin number is invalid (>= 30)
    /// - Pin belongs to the LiDAR UART
    /// - Pin was already taken
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        if pin_num as usize >= GPIO_COUNT {
            return Err(PinError::InvalidPin);
        }
        if LIDAR_UART_PINS.contains(&pin_num) {
            return Err(PinError::Reserved);
        }
        self.pins[pin_num as usize]
            .take()
            .ok_or(PinError::AlreadyTaken)
    }
}
