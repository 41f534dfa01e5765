//! Hardware abstraction traits
//!
//! These traits define the interface between the ranging logic
//! and hardware-specific implementations.

pub mod gpio;
pub mod range;
pub mod time;

pub use gpio::{OutputPin, PulseInput};
pub use range::{DistanceSensor, NO_ECHO_CM};
pub use time::Monotonic;
