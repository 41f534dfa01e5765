//! HC-SR04 median-filtered distance sampler
//!
//! Single pings off an ultrasonic ranger are noisy: specular
//! reflections, cross-talk from the previous burst, and plain misses
//! all show up in the raw echo stream. This sampler runs a batch of
//! pings per measurement, converts the echoes that came back with
//! temperature compensation, and reduces the batch to one clamped
//! median distance. Batches are paced apart by a guard interval so
//! stray echoes from one measurement cannot re-trigger the next.

use echometer_core::sound;
use echometer_core::traits::{DistanceSensor, Monotonic, OutputPin, PulseInput, NO_ECHO_CM};
use embedded_hal::delay::DelayNs;
use heapless::Vec;

use super::pulse::PulseTimer;

/// Most samples a single batch will ever collect
pub const MAX_SAMPLES: usize = 15;
/// Closest distance the sensor resolves reliably (cm)
pub const MIN_RANGE_CM: f32 = 2.0;
/// Farthest distance the sensor resolves reliably (cm)
pub const MAX_RANGE_CM: f32 = 400.0;
/// Quiet time after each ping, letting the burst die out before the
/// next trigger (ms)
const INTER_PING_DELAY_MS: u32 = 12;

/// Sampler configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HcSr04Config {
    /// Longest wait for a single echo before declaring no detection (µs)
    pub timeout_us: u32,
    /// Pings per measurement batch; held odd and within 3..=15
    pub samples: u8,
    /// Minimum spacing between the start of consecutive batches (ms)
    pub guard_ms: u16,
    /// Default temperature for speed-of-sound compensation (°C)
    pub ambient_c: f32,
    /// Batch ceiling margin on top of `timeout_us` (µs)
    ///
    /// A batch never runs longer than `timeout_us + batch_margin_us`,
    /// even with the sensor persistently failing. Widen this when
    /// raising `samples`; the default fits the default batch.
    pub batch_margin_us: u32,
}

impl Default for HcSr04Config {
    fn default() -> Self {
        Self {
            timeout_us: 30_000, // ~5 m round trip
            samples: 7,
            guard_ms: 60,
            ambient_c: 20.0,
            batch_margin_us: 40_000,
        }
    }
}

/// Coerce a requested sample count to the nearest valid value
///
/// Valid counts are odd and within 3..=[`MAX_SAMPLES`]. An odd count
/// keeps the median a real element of the batch, never an average.
fn coerce_samples(n: u8) -> u8 {
    if n < 3 {
        3
    } else {
        (n | 1).min(MAX_SAMPLES as u8)
    }
}

/// Median-filtered HC-SR04 distance sampler
///
/// Generic over the trigger pin, the echo pulse input, a monotonic
/// clock and a blocking delay, so the same driver runs against any
/// chip HAL and against plain mocks on the host.
///
/// `read_cm` blocks for the whole batch. Worst case is bounded by the
/// batch ceiling plus one inter-ping delay, so callers on a schedule
/// must budget several tens of milliseconds per call.
pub struct HcSr04<T, E, C, D> {
    pulse: PulseTimer<T, E>,
    clock: C,
    delay: D,
    config: HcSr04Config,
    last_batch_ms: Option<u64>,
}

impl<T, E, C, D> HcSr04<T, E, C, D>
where
    T: OutputPin,
    E: PulseInput,
    C: Monotonic,
    D: DelayNs,
{
    /// Create a sampler with the default configuration
    pub fn new(trigger: T, echo: E, clock: C, delay: D) -> Self {
        Self::with_config(trigger, echo, clock, delay, HcSr04Config::default())
    }

    /// Create a sampler with an explicit configuration
    ///
    /// The sample count is coerced to a valid value on the way in.
    pub fn with_config(trigger: T, echo: E, clock: C, delay: D, mut config: HcSr04Config) -> Self {
        config.samples = coerce_samples(config.samples);
        Self {
            pulse: PulseTimer::new(trigger, echo),
            clock,
            delay,
            config,
            last_batch_ms: None,
        }
    }

    /// Settle the trigger line; call once before the first read
    pub fn init(&mut self) {
        self.pulse.init();
    }

    /// Current configuration
    pub fn config(&self) -> &HcSr04Config {
        &self.config
    }

    /// Set the single-echo timeout in microseconds
    pub fn set_timeout_us(&mut self, timeout_us: u32) {
        self.config.timeout_us = timeout_us;
    }

    /// Set the pings per batch, coerced to odd and 3..=15
    pub fn set_samples(&mut self, samples: u8) {
        self.config.samples = coerce_samples(samples);
    }

    /// Set the minimum spacing between batch starts in milliseconds
    pub fn set_guard_ms(&mut self, guard_ms: u16) {
        self.config.guard_ms = guard_ms;
    }

    /// Set the default compensation temperature in °C
    pub fn set_ambient_c(&mut self, ambient_c: f32) {
        self.config.ambient_c = ambient_c;
    }

    /// Set the batch ceiling margin in microseconds
    pub fn set_batch_margin_us(&mut self, batch_margin_us: u32) {
        self.config.batch_margin_us = batch_margin_us;
    }

    /// Raw duration of the most recent single ping (0 = timed out)
    pub fn last_echo_us(&self) -> u32 {
        self.pulse.last_duration_us()
    }

    /// Measure using the configured ambient temperature
    ///
    /// Returns the clamped median distance in centimetres, or
    /// [`NO_ECHO_CM`] when not a single echo came back.
    pub fn read_cm(&mut self) -> f32 {
        self.sample_batch(self.config.ambient_c)
    }

    /// Measure with a one-off temperature override in °C
    pub fn read_cm_at(&mut self, temp_c: f32) -> f32 {
        self.sample_batch(temp_c)
    }

    /// Block until the guard interval since the previous batch start
    /// has elapsed, then record the new batch start
    fn pace_batch(&mut self) {
        if let Some(last_ms) = self.last_batch_ms {
            let elapsed_ms = self.clock.now_millis() - last_ms;
            let guard_ms = u64::from(self.config.guard_ms);
            if elapsed_ms < guard_ms {
                self.delay.delay_ms((guard_ms - elapsed_ms) as u32);
            }
        }
        self.last_batch_ms = Some(self.clock.now_millis());
    }

    fn sample_batch(&mut self, temp_c: f32) -> f32 {
        self.pace_batch();

        let wanted = usize::from(self.config.samples);
        let ceiling_us = u64::from(self.config.timeout_us) + u64::from(self.config.batch_margin_us);
        let start_us = self.clock.now_micros();

        let mut samples: Vec<f32, MAX_SAMPLES> = Vec::new();
        while samples.len() < wanted {
            let duration = self.pulse.ping(&mut self.delay, self.config.timeout_us);
            if duration > 0 {
                // cannot overflow: wanted <= MAX_SAMPLES
                let _ = samples.push(sound::echo_duration_to_cm(duration, temp_c));
            }
            self.delay.delay_ms(INTER_PING_DELAY_MS);

            // Safety valve: with the sensor persistently missing, give
            // up once the batch ceiling elapses and work with whatever
            // was gathered
            if self.clock.now_micros() - start_us > ceiling_us {
                break;
            }
        }

        if samples.is_empty() {
            return NO_ECHO_CM;
        }

        samples.sort_unstable_by(f32::total_cmp);
        let median = samples[samples.len() / 2];
        median.clamp(MIN_RANGE_CM, MAX_RANGE_CM)
    }
}

impl<T, E, C, D> DistanceSensor for HcSr04<T, E, C, D>
where
    T: OutputPin,
    E: PulseInput,
    C: Monotonic,
    D: DelayNs,
{
    fn distance_cm(&mut self) -> f32 {
        self.read_cm()
    }
}
