//! Monotonic clock over the embassy time driver
//!
//! The RP2040 timer peripheral ticks at 1 MHz, which lines up exactly
//! with the microsecond resolution the distance sampler paces itself
//! with.

use echometer_core::traits::Monotonic;
use embassy_time::Instant;

/// Monotonic uptime clock backed by the hardware timer
#[derive(Debug, Clone, Copy, Default)]
pub struct UptimeClock;

impl UptimeClock {
    pub fn new() -> Self {
        Self
    }
}

impl Monotonic for UptimeClock {
    fn now_micros(&self) -> u64 {
        Instant::now().as_micros()
    }
}
