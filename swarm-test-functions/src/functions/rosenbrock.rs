//! Rosenbrock test function

use ndarray::Array1;

/// Rosenbrock function - N-dimensional
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-2.048, 2.048]
pub fn rosenbrock(x: &Array1<f64>) -> f64 {
    let n = x.len();
    let mut sum = 0.0;
    for i in 0..n - 1 {
        sum += 100.0 * (x[i + 1] - x[i] * x[i]).powi(2) + (1.0 - x[i]).powi(2);
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn minimum_at_ones() {
        assert_eq!(rosenbrock(&array![1.0, 1.0]), 0.0);
        assert_eq!(rosenbrock(&array![1.0, 1.0, 1.0, 1.0]), 0.0);
    }

    #[test]
    fn valley_floor_beats_walls() {
        // points on the parabolic valley y = x^2 score better than points off it
        assert!(rosenbrock(&array![0.5, 0.25]) < rosenbrock(&array![0.5, 1.0]));
    }
}
