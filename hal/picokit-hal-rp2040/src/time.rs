//! Clock adapter over the embassy time driver

use embassy_time::Instant;

use picokit_hal::MonotonicClock;

/// Millisecond clock read from the embassy time driver
///
/// Truncated to `u32`; consumers handle the wrap.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl MonotonicClock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
