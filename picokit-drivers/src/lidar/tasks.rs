//! Cooperative task bodies
//!
//! Both loops run forever and suspend only in their delay. Everything
//! between two delays runs to completion, so on a single-threaded
//! executor the reader needs no locking.

use embedded_hal_async::delay::DelayNs;
use picokit_hal::{ByteSource, OutputPin};
use picokit_protocol::LidarFrame;

use super::{LidarReader, LossMonitor};

/// Poll the reader every `interval_ms`, handing each frame to `on_frame`
///
/// No frames are queued: whatever the byte source does not buffer between
/// two iterations is lost. Dropped chunks and receiver errors are logged
/// as a warning with the running counters, once per iteration that saw them.
pub async fn poll_loop<S, D, F>(
    reader: &mut LidarReader<S>,
    delay: &mut D,
    interval_ms: u32,
    mut on_frame: F,
) where
    S: ByteSource,
    D: DelayNs,
    F: FnMut(LidarFrame),
{
    let mut losses = LossMonitor::new(reader.stats());

    loop {
        reader.poll_once(&mut on_frame);
        if let Some(_stats) = losses.check(reader.stats()) {
            #[cfg(feature = "defmt")]
            defmt::warn!("LiDAR data lost: {}", _stats);
        }
        delay.delay_ms(interval_ms).await;
    }
}

/// Toggle the indicator forever, `interval_ms` in each state
pub async fn liveness_blink<P, D>(led: &mut P, delay: &mut D, interval_ms: u32)
where
    P: OutputPin,
    D: DelayNs,
{
    loop {
        led.set_low();
        delay.delay_ms(interval_ms).await;
        led.set_high();
        delay.delay_ms(interval_ms).await;
    }
}
