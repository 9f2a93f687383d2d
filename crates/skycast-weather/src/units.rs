//! Display unit conversions.
//!
//! The API is always queried in metric units; these are pure transforms
//! applied at display time.

/// Celsius to Fahrenheit.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Meters per second to miles per hour.
pub fn mps_to_mph(mps: f64) -> f64 {
    mps * 2.237
}
