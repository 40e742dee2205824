//! Presentation-only aggregates over the currently loaded reading set.

use common::model::Reading;

/// Most recent reading. The set is kept sorted newest first, so this is the
/// head of the slice.
pub fn latest(readings: &[Reading]) -> Option<&Reading> {
    readings.first()
}

/// Arithmetic mean rounded to two decimals, 0 for an empty set.
pub fn average(readings: &[Reading]) -> f64 {
    if readings.is_empty() {
        return 0.0;
    }
    let sum: f64 = readings.iter().map(|r| r.value).sum();
    ((sum / readings.len() as f64) * 100.0).round() / 100.0
}

pub fn max_value(readings: &[Reading]) -> f64 {
    if readings.is_empty() {
        return 0.0;
    }
    readings.iter().map(|r| r.value).fold(f64::NEG_INFINITY, f64::max)
}

pub fn min_value(readings: &[Reading]) -> f64 {
    if readings.is_empty() {
        return 0.0;
    }
    readings.iter().map(|r| r.value).fold(f64::INFINITY, f64::min)
}
