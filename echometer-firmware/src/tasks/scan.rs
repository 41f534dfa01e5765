//! Distance scan task
//!
//! Owns the ultrasonic sensor stack and runs the measurement loop.
//! Readings and debounced proximity transitions are published on the
//! channels for the report task to render.

use defmt::*;
use embassy_time::{Delay, Duration, Ticker};

use echometer_drivers::sonar::{HcSr04, ProximityMonitor};
use echometer_hal_rp2040::{EchoLine, TriggerLine, UptimeClock};

use crate::channels::{RANGE_READING, TOGGLE_EVENTS};

/// The concrete sensor stack wired to this board
pub type BoardSensor = HcSr04<TriggerLine<'static>, EchoLine<'static>, UptimeClock, Delay>;

/// Scan task configuration
#[derive(Clone)]
pub struct ScanConfig {
    /// Pause between measurement batches (ms)
    pub interval_ms: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { interval_ms: 100 }
    }
}

/// Distance scan task
///
/// Each pass runs one full measurement batch. The batch is blocking
/// and stalls the executor while it runs (tens of ms); the ticker
/// keeps the duty cycle low enough for the report task to drain its
/// channels in between.
#[embassy_executor::task]
pub async fn scan_task(mut monitor: ProximityMonitor<BoardSensor>, config: ScanConfig) {
    info!("Scan task started");

    let mut ticker = Ticker::every(Duration::from_millis(config.interval_ms));

    loop {
        let reading = monitor.poll();

        if reading.distance_cm < 0.0 {
            trace!("Scan: no echo");
            RANGE_READING.signal(None);
        } else {
            trace!("Scan: {} cm", reading.distance_cm);
            RANGE_READING.signal(Some(reading.distance_cm));
        }

        if let Some(event) = reading.event {
            debug!("Proximity toggle: {:?}", event);
            TOGGLE_EVENTS.send(event).await;
        }

        ticker.next().await;
    }
}
