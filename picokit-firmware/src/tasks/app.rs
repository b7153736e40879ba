//! Application task
//!
//! Consumes button events and LiDAR frames. Without further handlers
//! it reports them over defmt.

use defmt::*;
use embassy_futures::select::{select, Either};
use picokit_drivers::ButtonEvent;

use crate::channels::{BUTTON_EVENTS, LIDAR_FRAME};

/// App task - reacts to button events and LiDAR frames
#[embassy_executor::task]
pub async fn app_task() {
    info!("App task started");

    let mut presses: u32 = 0;
    let mut long_presses: u32 = 0;

    loop {
        match select(BUTTON_EVENTS.receive(), LIDAR_FRAME.wait()).await {
            Either::First(ButtonEvent::Press) => {
                presses = presses.wrapping_add(1);
                info!("Button pressed ({} total)", presses);
            }
            Either::First(ButtonEvent::LongPress) => {
                long_presses = long_presses.wrapping_add(1);
                info!("Button long press ({} total)", long_presses);
            }
            Either::Second(frame) => {
                info!("Dist: {} Strength: {}", frame.distance, frame.strength);
            }
        }
    }
}
