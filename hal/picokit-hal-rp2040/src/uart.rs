//! UART configuration glue

use embassy_rp::uart::{Config, Parity as RpParity, StopBits as RpStopBits};

use picokit_hal::uart::{Parity, StopBits, UartConfig};

/// Translate a board UART config into the embassy-rp one
pub fn to_rp_config(config: &UartConfig) -> Config {
    let mut rp = Config::default();
    rp.baudrate = config.baudrate;
    rp.parity = match config.parity {
        Parity::None => RpParity::ParityNone,
        Parity::Even => RpParity::ParityEven,
        Parity::Odd => RpParity::ParityOdd,
    };
    rp.stop_bits = match config.stop_bits {
        StopBits::One => RpStopBits::STOP1,
        StopBits::Two => RpStopBits::STOP2,
    };
    rp
}
