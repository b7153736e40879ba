//! Board configuration
//!
//! Constants generated by build.rs from board.toml. The build fails on an
//! invalid file, so everything here is already range-checked.

use picokit_drivers::{ButtonConfig, LidarConfig};
use picokit_hal::uart::{Parity, StopBits};
use picokit_hal::{PinSpec, UartConfig};

include!(concat!(env!("OUT_DIR"), "/board_config.rs"));
