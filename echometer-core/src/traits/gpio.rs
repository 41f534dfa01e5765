//! Trigger and echo pin abstractions
//!
//! An ultrasonic ranger needs two lines: a push-pull trigger output and
//! an echo input whose high time can be measured. Chip-specific HALs
//! implement these over their GPIO peripherals.

/// Digital output pin driving the sensor trigger line
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip. The trigger line is push-pull and infallible.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

/// Echo input whose high pulse can be timed
///
/// The sensor answers a trigger with a single high pulse whose width
/// encodes the round-trip flight time of the ultrasonic burst.
pub trait PulseInput {
    /// Measure the width of the next high pulse, in microseconds
    ///
    /// Waits for the line to go high, then times how long it stays high.
    /// The whole operation, waiting included, is bounded by `timeout_us`.
    ///
    /// Returns 0 when no complete pulse was observed in time. A timeout
    /// is a valid "nothing in range" outcome, not an error.
    fn measure_high_us(&mut self, timeout_us: u32) -> u32;
}
