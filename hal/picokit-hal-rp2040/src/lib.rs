//! RP2040-specific HAL for picokit boards
//!
//! This crate provides RP2040 implementations of the shared
//! `picokit-hal` traits, plus RP2040-specific functionality:
//!
//! - GPIO input/output adapters honouring pull-up and inversion flags
//! - Dynamic pin allocation for config-driven setup
//! - UART pin mapping and config translation
//! - Millisecond clock over the embassy time driver

#![no_std]

pub mod gpio;
pub mod pins;
pub mod time;
pub mod uart;

pub use gpio::{LevelInput, LevelOutput};
pub use pins::{BoardPeripherals, PinBank, PinError};
pub use time::EmbassyClock;

// Re-export shared traits from picokit-hal for convenience
pub use picokit_hal::{InputPin, MonotonicClock, OutputPin, PinSpec};
