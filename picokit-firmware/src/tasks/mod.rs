//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod app;
pub mod blink;
pub mod button;
pub mod lidar;

use embassy_rp::uart::BufferedUartRx;
use picokit_drivers::{Button, LidarReader};
use picokit_hal::StagedByteSource;
use picokit_hal_rp2040::{EmbassyClock, LevelInput};

pub use app::app_task;
pub use blink::blink_task;
pub use button::button_task;
pub use lidar::lidar_task;

/// Bytes staged between the UART ring buffer and the frame reader
const LIDAR_STAGING: usize = 64;

/// LiDAR reader over the buffered UART1 receiver
pub type BoardLidar = LidarReader<StagedByteSource<BufferedUartRx, LIDAR_STAGING>>;

/// Push button on a board GPIO
pub type BoardButton = Button<LevelInput<'static>, EmbassyClock>;
