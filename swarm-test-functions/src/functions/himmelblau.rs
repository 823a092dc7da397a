//! Himmelblau test function

use ndarray::Array1;

/// Himmelblau function - 2D, multimodal
/// Global minima: f(x) = 0 at (3, 2), (-2.805118, 3.131312),
/// (-3.779310, -3.283186) and (3.584428, -1.848126)
/// Bounds: x_i in [-5, 5]
pub fn himmelblau(x: &Array1<f64>) -> f64 {
    (x[0] * x[0] + x[1] - 11.0).powi(2) + (x[0] + x[1] * x[1] - 7.0).powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn four_global_minima() {
        let minima = [
            array![3.0, 2.0],
            array![-2.805118, 3.131312],
            array![-3.779310, -3.283186],
            array![3.584428, -1.848126],
        ];
        for point in &minima {
            assert!(
                himmelblau(point) < 1e-8,
                "f({}, {}) = {}",
                point[0],
                point[1],
                himmelblau(point)
            );
        }
    }
}
