//! Monotonic clock abstraction

/// Monotonic microsecond clock
///
/// Used for batch pacing and the acquisition safety valve. Readings
/// must never go backwards; a 64-bit microsecond counter does not wrap
/// within the lifetime of the hardware.
pub trait Monotonic {
    /// Microseconds elapsed since some fixed epoch (typically boot)
    fn now_micros(&self) -> u64;

    /// Milliseconds elapsed since the same epoch
    fn now_millis(&self) -> u64 {
        self.now_micros() / 1_000
    }
}
