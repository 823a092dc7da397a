//! Rounding of candidate positions onto a fixed decimal grid.
//!
//! Some search spaces are only meaningful at limited precision, and rounding
//! candidates before evaluation keeps the swarm from burning iterations on
//! distinctions the caller cannot use. Velocities are never rounded, so a
//! particle can still cross a grid cell over several small steps.

use ndarray::Array1;

/// Rounds one value to the given number of decimal places.
pub fn quantize_value(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Rounds every coordinate of a position in place.
pub fn quantize_position(position: &mut Array1<f64>, decimals: u32) {
    position.mapv_inplace(|value| quantize_value(value, decimals));
}
