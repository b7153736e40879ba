//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use picokit_drivers::ButtonEvent;
use picokit_protocol::LidarFrame;

/// Channel capacity for button events
const BUTTON_CHANNEL_SIZE: usize = 8;

/// Debounced button events, in the order they were detected
pub static BUTTON_EVENTS: Channel<CriticalSectionRawMutex, ButtonEvent, BUTTON_CHANNEL_SIZE> =
    Channel::new();

/// Latest LiDAR frame (a newer frame overwrites one not yet consumed)
pub static LIDAR_FRAME: Signal<CriticalSectionRawMutex, LidarFrame> = Signal::new();
