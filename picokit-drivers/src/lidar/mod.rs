//! Single-point LiDAR over UART
//!
//! [`LidarReader`] pulls validated frames out of a [`picokit_hal::ByteSource`];
//! [`poll_loop`] and [`liveness_blink`] are the async task bodies the
//! firmware runs side by side.

pub mod reader;
pub mod tasks;

pub use reader::{LidarReader, LossMonitor, ReaderStats};
pub use tasks::{liveness_blink, poll_loop};
