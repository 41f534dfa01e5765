//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use echometer_core::proximity::ToggleEvent;

/// Channel capacity for proximity toggle events
const TOGGLE_CHANNEL_SIZE: usize = 4;

/// Latest distance reading (updated by scan task)
/// Value is the filtered distance in cm, or None when no echo returned
pub static RANGE_READING: Signal<CriticalSectionRawMutex, Option<f32>> = Signal::new();

/// Debounced proximity transitions (sent by scan task)
pub static TOGGLE_EVENTS: Channel<CriticalSectionRawMutex, ToggleEvent, TOGGLE_CHANNEL_SIZE> =
    Channel::new();
