//! Picokit Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the picokit
//! drivers are written against. Chip-specific crates implement them;
//! host tests implement them with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  picokit-firmware (embassy tasks)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  picokit-drivers (button, lidar)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  picokit-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  picokit-hal-rp2040                     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`uart::ByteSource`] - Polled serial receive
//! - [`time::MonotonicClock`] - Millisecond time base

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod time;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin, PinSpec};
pub use time::MonotonicClock;
pub use uart::{ByteSource, StagedByteSource, UartConfig};
