//! Report task
//!
//! Renders distance readings and proximity transitions over defmt.

use defmt::*;
use embassy_futures::select::{select, Either};

use echometer_core::proximity::ToggleEvent;

use crate::channels::{RANGE_READING, TOGGLE_EVENTS};

/// Report task
///
/// Waits on both channels at once so a toggle transition cannot be
/// starved by the steady stream of readings.
#[embassy_executor::task]
pub async fn report_task() {
    info!("Report task started");

    loop {
        match select(RANGE_READING.wait(), TOGGLE_EVENTS.receive()).await {
            Either::First(Some(cm)) => info!("Distance: {} cm", cm),
            Either::First(None) => info!("Out of range"),
            Either::Second(ToggleEvent::Triggered) => info!("Proximity: triggered"),
            Either::Second(ToggleEvent::Rearmed) => info!("Proximity: cleared, re-armed"),
        }
    }
}
