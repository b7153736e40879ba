//! LiDAR polling task
//!
//! Reads at most one frame per poll interval and publishes it on
//! [`LIDAR_FRAME`]. Frames not consumed before the next one arrives are
//! overwritten. Dropped chunks and UART errors are reported by the poll
//! loop as warnings.

use defmt::*;
use embassy_time::Delay;
use picokit_drivers::{poll_loop, LidarConfig};

use super::BoardLidar;
use crate::channels::LIDAR_FRAME;

/// LiDAR task - polls the UART for frames forever
#[embassy_executor::task]
pub async fn lidar_task(mut reader: BoardLidar, config: LidarConfig) {
    info!(
        "LiDAR task started (poll every {}ms)",
        config.poll_interval_ms
    );

    let mut delay = Delay;
    poll_loop(&mut reader, &mut delay, config.poll_interval_ms, |frame| {
        trace!("LiDAR frame: {}", frame);
        LIDAR_FRAME.signal(frame);
    })
    .await;
}
