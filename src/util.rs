// Geometry helpers and console logging.

use crate::model::ContactSample;

/// Rounds half-way values towards positive infinity, the way pixel values are
/// rounded in the browser (`-2.5` becomes `-2`).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Distance between two contacts, rounded to whole pixels.
pub fn distance(a: &ContactSample, b: &ContactSample) -> f64 {
    round_half_up((b.x - a.x).hypot(b.y - a.y))
}

pub fn midpoint(a: &ContactSample, b: &ContactSample) -> (f64, f64) {
    (a.x - (a.x - b.x) / 2.0, a.y - (a.y - b.y) / 2.0)
}

/// Routes the `log` facade to the browser console.
pub fn init_logging(level: log::Level) {
    wasm_logger::init(wasm_logger::Config::new(level));
}
