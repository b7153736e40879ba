//! Peripheral drivers for picokit boards
//!
//! This crate implements the board's stateful peripherals on top of the
//! traits in `picokit-hal`:
//!
//! - Push-button debouncing with single and long press detection
//! - LiDAR frame reading with a cooperative poll loop and liveness LED

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod config;
pub mod lidar;

#[cfg(test)]
mod testing;

pub use button::{Button, ButtonEvent};
pub use config::{ButtonConfig, LidarConfig};
pub use lidar::{liveness_blink, poll_loop, LidarReader, LossMonitor, ReaderStats};
