//! Proximity toggle with debounce
//!
//! Turns a stream of noisy distance readings into clean armed/disarmed
//! transitions. A single reading is never trusted: the toggle only
//! fires after a configurable number of consecutive readings agree,
//! which rejects the spurious echoes ultrasonic rangers are prone to.

/// Proximity toggle configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProximityConfig {
    /// Readings at or below this distance count toward triggering (cm)
    pub near_cm: f32,
    /// Readings at or above this distance count toward re-arming (cm)
    pub far_cm: f32,
    /// Consecutive agreeing readings required before a transition fires
    pub confirmations: u8,
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            near_cm: 10.0,
            far_cm: 30.0,
            confirmations: 3,
        }
    }
}

/// Toggle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProximityState {
    /// Watching for an object to come near
    Armed,
    /// Object confirmed near; watching for it to clear
    Disarmed,
}

/// Transitions reported by [`ProximityToggle::observe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToggleEvent {
    /// Armed → Disarmed: an object was confirmed near
    Triggered,
    /// Disarmed → Armed: the object was confirmed gone
    Rearmed,
}

/// Debounced two-state toggle over distance readings
///
/// While armed, `confirmations` consecutive valid readings at or below
/// `near_cm` fire exactly one [`ToggleEvent::Triggered`] and disarm the
/// toggle. While disarmed, the mirror condition against `far_cm` (using
/// ≥) fires [`ToggleEvent::Rearmed`]. A trigger cannot re-fire until a
/// full re-arm cycle completes, so an object held steady at the
/// threshold produces one event, not a flood.
pub struct ProximityToggle {
    config: ProximityConfig,
    state: ProximityState,
    streak: u8,
}

impl ProximityToggle {
    /// Create a toggle in the armed state
    ///
    /// A `confirmations` of 0 is coerced to 1; a toggle that needs no
    /// agreeing readings would otherwise never transition.
    pub fn new(mut config: ProximityConfig) -> Self {
        if config.confirmations == 0 {
            config.confirmations = 1;
        }
        Self {
            config,
            state: ProximityState::Armed,
            streak: 0,
        }
    }

    /// Current state
    pub fn state(&self) -> ProximityState {
        self.state
    }

    /// Consecutive qualifying readings accumulated so far
    pub fn streak(&self) -> u8 {
        self.streak
    }

    /// Feed one distance reading; returns the transition it completed, if any
    ///
    /// Negative readings are no-detection sentinels. They never qualify
    /// and always reset the streak: the confirmation count is not
    /// allowed to survive a gap in the evidence.
    pub fn observe(&mut self, distance_cm: f32) -> Option<ToggleEvent> {
        let qualifies = distance_cm >= 0.0
            && match self.state {
                ProximityState::Armed => distance_cm <= self.config.near_cm,
                ProximityState::Disarmed => distance_cm >= self.config.far_cm,
            };

        if !qualifies {
            self.streak = 0;
            return None;
        }

        self.streak += 1;
        if self.streak < self.config.confirmations {
            return None;
        }

        self.streak = 0;
        match self.state {
            ProximityState::Armed => {
                self.state = ProximityState::Disarmed;
                Some(ToggleEvent::Triggered)
            }
            ProximityState::Disarmed => {
                self.state = ProximityState::Armed;
                Some(ToggleEvent::Rearmed)
            }
        }
    }

    /// Discard any partial streak and return to the armed state
    pub fn reset(&mut self) {
        self.state = ProximityState::Armed;
        self.streak = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle(confirmations: u8) -> ProximityToggle {
        ProximityToggle::new(ProximityConfig {
            near_cm: 10.0,
            far_cm: 30.0,
            confirmations,
        })
    }

    #[test]
    fn test_trigger_needs_full_streak() {
        let mut t = toggle(3);

        assert_eq!(t.observe(5.0), None);
        assert_eq!(t.observe(5.0), None);
        assert_eq!(t.observe(5.0), Some(ToggleEvent::Triggered));
        assert_eq!(t.state(), ProximityState::Disarmed);
    }

    #[test]
    fn test_disqualifying_read_resets_streak() {
        let mut t = toggle(3);

        // Two near reads, then one far read: no event, streak gone
        assert_eq!(t.observe(5.0), None);
        assert_eq!(t.observe(5.0), None);
        assert_eq!(t.observe(50.0), None);
        assert_eq!(t.state(), ProximityState::Armed);
        assert_eq!(t.streak(), 0);

        // The count starts over from scratch
        assert_eq!(t.observe(5.0), None);
        assert_eq!(t.observe(5.0), None);
        assert_eq!(t.observe(5.0), Some(ToggleEvent::Triggered));
    }

    #[test]
    fn test_sentinel_resets_streak() {
        let mut t = toggle(3);

        assert_eq!(t.observe(5.0), None);
        assert_eq!(t.observe(5.0), None);
        // Out-of-range sentinel breaks the run even though it is "not far"
        assert_eq!(t.observe(-1.0), None);
        assert_eq!(t.observe(5.0), None);
        assert_eq!(t.state(), ProximityState::Armed);
    }

    #[test]
    fn test_no_refire_while_disarmed() {
        let mut t = toggle(2);

        assert_eq!(t.observe(5.0), None);
        assert_eq!(t.observe(5.0), Some(ToggleEvent::Triggered));

        // Hand held steady at the near threshold: nothing more fires
        for _ in 0..10 {
            assert_eq!(t.observe(5.0), None);
        }
        assert_eq!(t.state(), ProximityState::Disarmed);
    }

    #[test]
    fn test_full_cycle_rearms() {
        let mut t = toggle(2);

        assert_eq!(t.observe(5.0), None);
        assert_eq!(t.observe(5.0), Some(ToggleEvent::Triggered));

        // Far reads re-arm after the same confirmation count
        assert_eq!(t.observe(80.0), None);
        assert_eq!(t.observe(80.0), Some(ToggleEvent::Rearmed));
        assert_eq!(t.state(), ProximityState::Armed);

        // A second trigger is possible after the full cycle
        assert_eq!(t.observe(5.0), None);
        assert_eq!(t.observe(5.0), Some(ToggleEvent::Triggered));
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        let mut t = toggle(1);

        // Exactly near_cm qualifies for the trigger
        assert_eq!(t.observe(10.0), Some(ToggleEvent::Triggered));
        // Exactly far_cm qualifies for the re-arm
        assert_eq!(t.observe(30.0), Some(ToggleEvent::Rearmed));
    }

    #[test]
    fn test_mid_band_read_qualifies_for_neither() {
        let mut t = toggle(1);

        // 20 cm sits between near (10) and far (30): no trigger
        assert_eq!(t.observe(20.0), None);
        assert_eq!(t.state(), ProximityState::Armed);

        t.observe(5.0);
        assert_eq!(t.state(), ProximityState::Disarmed);

        // ... and no re-arm either
        assert_eq!(t.observe(20.0), None);
        assert_eq!(t.state(), ProximityState::Disarmed);
    }

    #[test]
    fn test_zero_confirmations_coerced_to_one() {
        let mut t = toggle(0);
        assert_eq!(t.observe(5.0), Some(ToggleEvent::Triggered));
    }

    #[test]
    fn test_reset_rearms_and_clears_streak() {
        let mut t = toggle(3);

        t.observe(5.0);
        t.observe(5.0);
        t.observe(5.0);
        assert_eq!(t.state(), ProximityState::Disarmed);

        t.reset();
        assert_eq!(t.state(), ProximityState::Armed);
        assert_eq!(t.streak(), 0);
    }
}
