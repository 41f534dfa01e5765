//! Speed-of-sound math
//!
//! Converts echo flight time into distance. The speed of sound in air
//! shifts by roughly 0.6 m/s per degree Celsius, which is a couple of
//! centimetres over a metre between a cold garage and a warm room, so
//! the conversion takes the ambient temperature as input.

/// Speed of sound in air at `temp_c` degrees Celsius, in m/s
///
/// Linear approximation `331.3 + 0.606 * T`, accurate to well under 1%
/// across the sensor's operating range.
pub fn speed_of_sound_m_s(temp_c: f32) -> f32 {
    331.3 + 0.606 * temp_c
}

/// Convert a round-trip echo duration to a one-way distance in centimetres
///
/// `duration_us` is how long the echo line stayed high. The burst
/// travels out and back, so the one-way distance is half the flight
/// time at the current speed of sound. With microseconds in and
/// centimetres out, the unit conversion and the halving collapse into
/// a single division by 20 000.
pub fn echo_duration_to_cm(duration_us: u32, temp_c: f32) -> f32 {
    duration_us as f32 * speed_of_sound_m_s(temp_c) / 20_000.0
}
