//! GPIO bindings for the ranging transducer
//!
//! Wraps embassy-rp pins behind the echometer-core pin traits so the
//! drivers stay chip-agnostic. Echo capture is a blocking busy-wait
//! against the hardware timer; the HC-SR04 echo pulse tops out around
//! 38 ms, well inside what the 1 MHz timebase resolves.

use echometer_core::traits::{OutputPin, PulseInput};
use embassy_rp::gpio::{Input, Output};
use embassy_time::{Duration, Instant};

/// Push-pull output driving the ranger's TRIG pin
pub struct TriggerLine<'d> {
    pin: Output<'d>,
}

impl<'d> TriggerLine<'d> {
    /// Wrap an already-configured output pin
    ///
    /// The pin should be constructed low so the ranger sees a clean
    /// rising edge on the first trigger pulse.
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl OutputPin for TriggerLine<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }
}

/// Input capturing the ranger's ECHO pulse
pub struct EchoLine<'d> {
    pin: Input<'d>,
}

impl<'d> EchoLine<'d> {
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl PulseInput for EchoLine<'_> {
    /// Measure the width of the next high pulse in microseconds
    ///
    /// One deadline covers both waiting for the rising edge and the
    /// high phase itself, so a stuck-high or never-rising line cannot
    /// block past `timeout_us`. Returns 0 if no complete pulse was
    /// seen before the deadline.
    fn measure_high_us(&mut self, timeout_us: u32) -> u32 {
        let deadline = Instant::now() + Duration::from_micros(u64::from(timeout_us));

        while self.pin.is_low() {
            if Instant::now() >= deadline {
                return 0;
            }
        }

        let rise = Instant::now();
        while self.pin.is_high() {
            if Instant::now() >= deadline {
                return 0;
            }
        }

        (Instant::now() - rise).as_micros() as u32
    }
}
