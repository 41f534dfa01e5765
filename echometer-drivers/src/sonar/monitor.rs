//! Proximity monitor
//!
//! Couples any distance sensor to the debounced proximity toggle, so
//! a control loop polls one object and gets back both the raw reading
//! and any transition it completed.

use echometer_core::proximity::{ProximityConfig, ProximityState, ProximityToggle, ToggleEvent};
use echometer_core::traits::DistanceSensor;

/// One monitor poll
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProximityReading {
    /// Distance as reported by the sensor (negative = no detection)
    pub distance_cm: f32,
    /// Transition completed by this reading, if any
    pub event: Option<ToggleEvent>,
}

/// Distance sensor plus debounced toggle, polled as one unit
pub struct ProximityMonitor<S> {
    sensor: S,
    toggle: ProximityToggle,
}

impl<S: DistanceSensor> ProximityMonitor<S> {
    /// Create a monitor in the armed state
    pub fn new(sensor: S, config: ProximityConfig) -> Self {
        Self {
            sensor,
            toggle: ProximityToggle::new(config),
        }
    }

    /// Take one measurement and feed it through the toggle
    ///
    /// Blocks for as long as the underlying sensor blocks.
    pub fn poll(&mut self) -> ProximityReading {
        let distance_cm = self.sensor.distance_cm();
        let event = self.toggle.observe(distance_cm);
        ProximityReading { distance_cm, event }
    }

    /// Current toggle state
    pub fn state(&self) -> ProximityState {
        self.toggle.state()
    }

    /// Access to the underlying sensor
    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    /// Mutable access to the underlying sensor, for reconfiguration
    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }
}
