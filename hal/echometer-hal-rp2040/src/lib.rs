//! RP2040-specific HAL implementation for Echometer
//!
//! Implements the hardware traits from echometer-core using embassy-rp:
//! - Trigger/echo GPIO bindings with blocking pulse-width capture
//! - Monotonic microsecond clock over the hardware timer

#![no_std]

pub mod clock;
pub mod gpio;

pub use clock::UptimeClock;
pub use gpio::{EchoLine, TriggerLine};
