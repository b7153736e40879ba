//! GPIO adapters
//!
//! Wraps embassy-rp pins so they implement the `picokit-hal` traits.

use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::Peri;

use picokit_hal::{InputPin, OutputPin, PinSpec};

/// Input pin backed by an embassy-rp [`Input`]
pub struct LevelInput<'d> {
    pin: Input<'d>,
    inverted: bool,
}

impl<'d> LevelInput<'d> {
    /// Configure `pin` as an input according to `spec`
    ///
    /// `^` selects the internal pull-up; otherwise the line floats and
    /// needs an external resistor.
    pub fn new(pin: Peri<'d, AnyPin>, spec: PinSpec) -> Self {
        let pull = if spec.pull_up { Pull::Up } else { Pull::None };
        Self {
            pin: Input::new(pin, pull),
            inverted: spec.inverted,
        }
    }
}

impl InputPin for LevelInput<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high() != self.inverted
    }
}

/// Output pin backed by an embassy-rp [`Output`]
pub struct LevelOutput<'d> {
    pin: Output<'d>,
    inverted: bool,
}

impl<'d> LevelOutput<'d> {
    /// Configure `pin` as an output, initially driven to logic low
    pub fn new(pin: Peri<'d, AnyPin>, spec: PinSpec) -> Self {
        let initial = if spec.inverted { Level::High } else { Level::Low };
        Self {
            pin: Output::new(pin, initial),
            inverted: spec.inverted,
        }
    }
}

impl OutputPin for LevelOutput<'_> {
    fn set_high(&mut self) {
        if self.inverted {
            self.pin.set_low();
        } else {
            self.pin.set_high();
        }
    }

    fn set_low(&mut self) {
        if self.inverted {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high() != self.inverted
    }
}
