//! Trigger-and-listen pulse timing
//!
//! One trigger/echo cycle of the HC-SR04 family: shape a 10 µs trigger
//! pulse, then time the echo line's answering high pulse.

use echometer_core::traits::{OutputPin, PulseInput};
use embedded_hal::delay::DelayNs;

/// Settle time with the trigger held low before the pulse (µs)
const TRIGGER_SETTLE_US: u32 = 2;
/// Trigger pulse width demanded by the datasheet (µs)
const TRIGGER_PULSE_US: u32 = 10;

/// Single-shot pulse timer over a trigger/echo pin pair
///
/// Performs exactly one trigger-and-listen cycle per `ping` and
/// remembers the raw duration it saw. No retries happen at this layer;
/// a timeout is reported upward as 0 and the batch sampler decides
/// what to do about it.
pub struct PulseTimer<T, E> {
    trigger: T,
    echo: E,
    last_duration_us: u32,
}

impl<T: OutputPin, E: PulseInput> PulseTimer<T, E> {
    /// Create a pulse timer over the two sensor lines
    pub fn new(trigger: T, echo: E) -> Self {
        Self {
            trigger,
            echo,
            last_duration_us: 0,
        }
    }

    /// Drive the trigger line to its idle (low) state
    ///
    /// Call once after power-up, before the first ping. Pin direction
    /// is fixed at construction by the HAL types; this only settles
    /// the level.
    pub fn init(&mut self) {
        self.trigger.set_low();
    }

    /// One trigger-and-listen cycle
    ///
    /// Shapes the trigger pulse (low, 2 µs settle, 10 µs high, low),
    /// then measures how long the echo line stays high, bounded by
    /// `timeout_us`.
    ///
    /// Returns the echo duration in microseconds, or 0 if no echo
    /// arrived in time. Timing out is a valid "nothing in range"
    /// outcome, not an error.
    pub fn ping<D: DelayNs>(&mut self, delay: &mut D, timeout_us: u32) -> u32 {
        self.trigger.set_low();
        delay.delay_us(TRIGGER_SETTLE_US);
        self.trigger.set_high();
        delay.delay_us(TRIGGER_PULSE_US);
        self.trigger.set_low();

        let duration = self.echo.measure_high_us(timeout_us);
        self.last_duration_us = duration;
        duration
    }

    /// Raw duration of the most recent ping (0 after a timeout)
    pub fn last_duration_us(&self) -> u32 {
        self.last_duration_us
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Trigger pin that records every level it was driven to
    struct RecordingTrigger {
        levels: heapless::Vec<bool, 8>,
    }

    impl OutputPin for RecordingTrigger {
        fn set_high(&mut self) {
            let _ = self.levels.push(true);
        }

        fn set_low(&mut self) {
            let _ = self.levels.push(false);
        }
    }

    /// Echo line that reports a fixed duration
    struct FixedEcho {
        duration_us: u32,
        seen_timeout_us: Option<u32>,
    }

    impl PulseInput for FixedEcho {
        fn measure_high_us(&mut self, timeout_us: u32) -> u32 {
            self.seen_timeout_us = Some(timeout_us);
            self.duration_us
        }
    }

    struct RecordingDelay {
        us_calls: heapless::Vec<u32, 8>,
    }

    impl DelayNs for RecordingDelay {
        fn delay_ns(&mut self, _ns: u32) {}

        fn delay_us(&mut self, us: u32) {
            let _ = self.us_calls.push(us);
        }
    }

    fn timer(duration_us: u32) -> PulseTimer<RecordingTrigger, FixedEcho> {
        PulseTimer::new(
            RecordingTrigger {
                levels: heapless::Vec::new(),
            },
            FixedEcho {
                duration_us,
                seen_timeout_us: None,
            },
        )
    }

    fn delay() -> RecordingDelay {
        RecordingDelay {
            us_calls: heapless::Vec::new(),
        }
    }

    #[test]
    fn test_trigger_pulse_shape() {
        let mut t = timer(580);
        let mut d = delay();

        t.ping(&mut d, 30_000);

        // low (settle), high (pulse), low (listen)
        assert_eq!(&t.trigger.levels[..], &[false, true, false][..]);
        assert_eq!(&d.us_calls[..], &[2, 10][..]);
    }

    #[test]
    fn test_ping_reports_echo_duration() {
        let mut t = timer(580);
        let mut d = delay();

        assert_eq!(t.ping(&mut d, 30_000), 580);
        assert_eq!(t.last_duration_us(), 580);
        assert_eq!(t.echo.seen_timeout_us, Some(30_000));
    }

    #[test]
    fn test_timeout_reports_zero() {
        let mut t = timer(0);
        let mut d = delay();

        assert_eq!(t.ping(&mut d, 30_000), 0);
        assert_eq!(t.last_duration_us(), 0);
    }

    #[test]
    fn test_init_idles_trigger_low() {
        let mut t = timer(0);

        t.init();

        assert_eq!(&t.trigger.levels[..], &[false][..]);
    }

    #[test]
    fn test_last_duration_tracks_most_recent_ping() {
        let mut t = timer(580);
        let mut d = delay();

        t.ping(&mut d, 30_000);
        assert_eq!(t.last_duration_us(), 580);

        // A timed-out ping overwrites the previous duration with 0
        t.echo.duration_us = 0;
        t.ping(&mut d, 30_000);
        assert_eq!(t.last_duration_us(), 0);
    }
}
