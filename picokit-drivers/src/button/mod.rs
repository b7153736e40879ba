//! Debounced push-button
//!
//! Wraps an active-low input line (pulled up, shorted to ground when
//! pressed) and turns it into two independent events:
//!
//! - single press: reported at the falling edge, debounced
//! - long press: reported at release, if the hold was long enough
//!
//! Both polls sample the line and the clock themselves. They are meant to
//! be called from one control loop; concurrent callers would need to wrap
//! the button in a mutex.

pub mod detector;

pub use detector::{HoldDetector, PressDetector};

use picokit_hal::{InputPin, MonotonicClock};

use crate::config::ButtonConfig;

/// Events produced by [`Button::poll`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Debounced press (falling edge)
    Press,
    /// Released after being held at least the long-press time
    LongPress,
}

/// Debounced active-low button
pub struct Button<P, C> {
    pin: P,
    clock: C,
    press: PressDetector,
    hold: HoldDetector,
}

impl<P: InputPin, C: MonotonicClock> Button<P, C> {
    /// Create a new button
    ///
    /// The line is sampled once here to seed both detectors.
    pub fn new(pin: P, clock: C, config: ButtonConfig) -> Self {
        let initial_high = pin.is_high();
        let now_ms = clock.now_ms();

        Self {
            press: PressDetector::new(initial_high, config.debounce_ms),
            hold: HoldDetector::new(initial_high, now_ms, config.long_press_ms),
            pin,
            clock,
        }
    }

    /// Check for a debounced single press
    pub fn poll_single_press(&mut self) -> bool {
        let high = self.pin.is_high();
        let now_ms = self.clock.now_ms();

        let pressed = self.press.update(high, now_ms);
        #[cfg(feature = "defmt")]
        if pressed {
            defmt::debug!("Button press at {} ms", now_ms);
        }
        pressed
    }

    /// Check for the release of a long press
    pub fn poll_long_press(&mut self) -> bool {
        let high = self.pin.is_high();
        let now_ms = self.clock.now_ms();

        let long = self.hold.update(high, now_ms);
        #[cfg(feature = "defmt")]
        if long {
            defmt::debug!("Button long press released at {} ms", now_ms);
        }
        long
    }

    /// Sample once and run both detectors
    ///
    /// A press and a long press never share a sample (falling vs rising
    /// edge), so at most one event is returned.
    pub fn poll(&mut self) -> Option<ButtonEvent> {
        let high = self.pin.is_high();
        let now_ms = self.clock.now_ms();

        let pressed = self.press.update(high, now_ms);
        let long = self.hold.update(high, now_ms);

        if long {
            Some(ButtonEvent::LongPress)
        } else if pressed {
            Some(ButtonEvent::Press)
        } else {
            None
        }
    }

    /// Raw line state, not debounced
    pub fn is_pressed(&self) -> bool {
        self.pin.is_low()
    }
}
