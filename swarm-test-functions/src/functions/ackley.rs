//! Ackley test function

use ndarray::Array1;
use std::f64::consts::{E, PI};

/// Ackley function - N-dimensional, multimodal with a deep central well
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-32.768, 32.768]
pub fn ackley(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|&xi| xi * xi).sum();
    let sum_cos: f64 = x.iter().map(|&xi| (2.0 * PI * xi).cos()).sum();
    -20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp() + 20.0 + E
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn minimum_at_origin() {
        let at_origin = ackley(&array![0.0, 0.0]);
        assert!(at_origin.abs() < 1e-12, "f(0, 0) = {}", at_origin);
        assert!(ackley(&array![1.0, 1.0]) > 1.0);
    }
}
