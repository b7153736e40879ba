//! Monotonic time source

/// Monotonic millisecond clock
///
/// The counter wraps at `u32::MAX` (about 49.7 days). Consumers must
/// compute elapsed time with `wrapping_sub`.
pub trait MonotonicClock {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> u32;
}

impl<T: MonotonicClock + ?Sized> MonotonicClock for &T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Elapsed milliseconds from `since` to `now`, tolerant of wrap-around
#[inline]
pub fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}
