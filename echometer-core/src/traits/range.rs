//! Distance sensor trait

/// Sentinel distance reported when no echo came back
pub const NO_ECHO_CM: f32 = -1.0;

/// Trait for distance sensors reporting centimetres
///
/// Implementations cover the specific ranging hardware (ultrasonic,
/// IR triangulation, time-of-flight chips, ...).
pub trait DistanceSensor {
    /// Measure the current distance in centimetres
    ///
    /// Returns a negative value ([`NO_ECHO_CM`]) when nothing was
    /// detected in range. Callers must check the sign before using the
    /// result as a distance.
    ///
    /// Takes `&mut self` because a measurement drives the hardware.
    fn distance_cm(&mut self) -> f32;

    /// Measure, mapping the no-detection sentinel to `None`
    fn detection_cm(&mut self) -> Option<f32> {
        let cm = self.distance_cm();
        if cm < 0.0 {
            None
        } else {
            Some(cm)
        }
    }
}
