//! Edge detectors for an active-low push-button
//!
//! Both detectors are pure state machines over `(level, now_ms)` samples.
//! Each keeps its own copy of the previous level, so polling one never
//! hides an edge from the other.
//!
//! ```text
//! RELEASED --(falling edge)--> PRESSED --(rising edge)--> RELEASED
//! ```

use picokit_hal::time::elapsed_ms;

/// Single-press detector
///
/// Reports a press on the falling edge itself, provided more than the
/// debounce window has passed since the last accepted press.
///
/// Time is a wrapping `u32` millisecond count. A press that comes a
/// multiple of 2^32 ms (about 49.7 days) after the previous one, give or
/// take the debounce window, looks like a bounce and is rejected.
#[derive(Debug, Clone)]
pub struct PressDetector {
    last_high: bool,
    /// Time of the last accepted press, `None` until the first one
    last_press_ms: Option<u32>,
    debounce_ms: u32,
}

impl PressDetector {
    /// Create a detector seeded with the current line level
    pub fn new(initial_high: bool, debounce_ms: u32) -> Self {
        Self {
            last_high: initial_high,
            last_press_ms: None,
            debounce_ms,
        }
    }

    /// Feed one sample; returns true if a press is accepted
    pub fn update(&mut self, high: bool, now_ms: u32) -> bool {
        let falling = self.last_high && !high;
        self.last_high = high;

        if !falling {
            return false;
        }

        let outside_window = match self.last_press_ms {
            Some(last) => elapsed_ms(now_ms, last) > self.debounce_ms,
            None => true,
        };

        if outside_window {
            self.last_press_ms = Some(now_ms);
        }
        outside_window
    }
}

/// Long-press detector
///
/// Classifies a press at release time: fires on the rising edge if the
/// line was held for at least the minimum hold time. Never fires while
/// the line is still held.
#[derive(Debug, Clone)]
pub struct HoldDetector {
    last_high: bool,
    press_start_ms: u32,
    long_press_ms: u32,
}

impl HoldDetector {
    /// Create a detector seeded with the current line level
    ///
    /// If the line is already low, the hold is timed from `now_ms`.
    pub fn new(initial_high: bool, now_ms: u32, long_press_ms: u32) -> Self {
        Self {
            last_high: initial_high,
            press_start_ms: now_ms,
            long_press_ms,
        }
    }

    /// Feed one sample; returns true on the release of a long press
    pub fn update(&mut self, high: bool, now_ms: u32) -> bool {
        let fired = match (self.last_high, high) {
            (true, false) => {
                self.press_start_ms = now_ms;
                false
            }
            (false, true) => elapsed_ms(now_ms, self.press_start_ms) >= self.long_press_ms,
            _ => false,
        };

        self.last_high = high;
        fired
    }

    #[cfg(test)]
    fn is_held(&self) -> bool {
        !self.last_high
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DEBOUNCE: u32 = 50;
    const HOLD: u32 = 500;

    #[test]
    fn test_press_fires_on_falling_edge() {
        let mut det = PressDetector::new(true, DEBOUNCE);

        assert!(!det.update(true, 0));
        assert!(det.update(false, 10));
        // Still held: no repeat
        assert!(!det.update(false, 20));
        assert!(!det.update(false, 1000));
    }

    #[test]
    fn test_bounce_inside_window_suppressed() {
        let mut det = PressDetector::new(true, DEBOUNCE);

        assert!(det.update(false, 100));
        // Contact bounce
        assert!(!det.update(true, 102));
        assert!(!det.update(false, 104));
        assert!(!det.update(true, 110));
        assert!(!det.update(false, 150)); // exactly the window: not greater
        assert!(!det.update(true, 160));

        // Next real press
        assert!(det.update(false, 151 + DEBOUNCE));
    }

    #[test]
    fn test_press_window_across_clock_wrap() {
        let mut det = PressDetector::new(true, DEBOUNCE);
        let start = u32::MAX - 20;

        assert!(det.update(false, start));
        assert!(!det.update(true, start + 5));
        assert!(!det.update(false, start.wrapping_add(30)));
        assert!(!det.update(true, start.wrapping_add(35)));
        assert!(det.update(false, start.wrapping_add(80)));
    }

    #[test]
    fn test_press_one_clock_period_later_is_rejected() {
        let mut det = PressDetector::new(true, DEBOUNCE);

        assert!(det.update(false, 1000));
        assert!(!det.update(true, 1100));
        // Idle for a full wrap of the millisecond counter
        assert!(!det.update(false, 1000u32.wrapping_add(u32::MAX).wrapping_add(10)));
        assert!(!det.update(true, 1200));
        // Next press well clear of the window
        assert!(det.update(false, 1200));
    }

    #[test]
    fn test_line_low_at_startup_is_not_a_press() {
        let mut det = PressDetector::new(false, DEBOUNCE);
        assert!(!det.update(false, 0));
        assert!(!det.update(false, 100));
        assert!(!det.update(true, 200));
        assert!(det.update(false, 300));
    }

    #[test]
    fn test_long_press_fires_on_release_only() {
        let mut det = HoldDetector::new(true, 0, HOLD);

        assert!(!det.update(false, 1000));
        assert!(det.is_held());
        // Held well past the threshold: still silent
        assert!(!det.update(false, 1000 + HOLD));
        assert!(!det.update(false, 1000 + 10 * HOLD));
        // Release
        assert!(det.update(true, 1000 + 10 * HOLD + 1));
        assert!(!det.is_held());
        // Nothing further
        assert!(!det.update(true, 1000 + 20 * HOLD));
    }

    #[test]
    fn test_short_press_is_not_long() {
        let mut det = HoldDetector::new(true, 0, HOLD);
        assert!(!det.update(false, 100));
        assert!(!det.update(true, 100 + HOLD - 1));
    }

    #[test]
    fn test_exact_threshold_counts() {
        let mut det = HoldDetector::new(true, 0, HOLD);
        assert!(!det.update(false, 100));
        assert!(det.update(true, 100 + HOLD));
    }

    #[test]
    fn test_never_released_never_fires() {
        let mut det = HoldDetector::new(true, 0, HOLD);
        assert!(!det.update(false, 0));
        for t in (10..100_000).step_by(10) {
            assert!(!det.update(false, t));
        }
    }

    #[test]
    fn test_held_at_startup_timed_from_construction() {
        let mut det = HoldDetector::new(false, 2000, HOLD);
        assert!(!det.update(false, 2100));
        assert!(det.update(true, 2000 + HOLD));
    }

    #[test]
    fn test_detectors_keep_independent_history() {
        let mut press = PressDetector::new(true, DEBOUNCE);
        let mut hold = HoldDetector::new(true, 0, HOLD);

        // Only the hold detector sees the falling edge at t=0
        assert!(!hold.update(false, 0));
        // The press detector still sees its own falling edge later
        assert!(press.update(false, 10));
        assert!(hold.update(true, HOLD));
    }

    proptest! {
        #[test]
        fn prop_edges_within_window_report_once(
            start in any::<u32>(),
            offsets in proptest::collection::vec(1u32..=DEBOUNCE, 1..20),
        ) {
            let mut det = PressDetector::new(true, DEBOUNCE);
            prop_assert!(det.update(false, start));
            prop_assert!(!det.update(true, start));

            let mut offsets = offsets;
            offsets.sort_unstable();
            for offset in offsets {
                let t = start.wrapping_add(offset);
                prop_assert!(!det.update(false, t));
                prop_assert!(!det.update(true, t));
            }
        }

        #[test]
        fn prop_accepted_presses_are_spaced(
            gaps in proptest::collection::vec(1u32..200, 1..50),
        ) {
            let mut det = PressDetector::new(true, DEBOUNCE);
            let mut now = 0u32;
            let mut last_accepted: Option<u32> = None;

            for gap in gaps {
                now += gap;
                if det.update(false, now) {
                    if let Some(last) = last_accepted {
                        prop_assert!(now - last > DEBOUNCE);
                    }
                    last_accepted = Some(now);
                }
                det.update(true, now);
            }
        }

        #[test]
        fn prop_long_press_threshold(
            start in any::<u32>(),
            hold in 0u32..2 * HOLD,
            samples in 0usize..10,
        ) {
            let mut det = HoldDetector::new(true, start, HOLD);
            prop_assert!(!det.update(false, start));

            // Intermediate held samples never fire
            for i in 0..samples {
                let t = start.wrapping_add(hold * i as u32 / 10);
                prop_assert!(!det.update(false, t));
            }

            let released = start.wrapping_add(hold);
            prop_assert_eq!(det.update(true, released), hold >= HOLD);
            // Exactly once
            prop_assert!(!det.update(true, released.wrapping_add(1)));
        }
    }
}
