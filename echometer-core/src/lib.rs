//! Board-agnostic core logic for the ultrasonic ranging firmware
//!
//! This crate contains all ranging logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (trigger pin, echo pulse input, clock)
//! - Speed-of-sound math for flight-time to distance conversion
//! - Proximity toggle state machine with consecutive-read debounce

#![no_std]
#![deny(unsafe_code)]

pub mod proximity;
pub mod sound;
pub mod traits;
