//! Ultrasonic ranging drivers

pub mod hcsr04;
pub mod monitor;
pub mod pulse;

pub use hcsr04::{HcSr04, HcSr04Config, MAX_RANGE_CM, MAX_SAMPLES, MIN_RANGE_CM};
pub use monitor::{ProximityMonitor, ProximityReading};
pub use pulse::PulseTimer;
