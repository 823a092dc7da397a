//! Cobb-Douglas production score

use ndarray::Array1;

/// First factor level of the sample two-factor economy.
pub const FACTOR_A: f64 = 1.63;

/// Second factor level of the sample two-factor economy.
pub const FACTOR_B: f64 = 0.95;

/// Cobb-Douglas production score - 2D, meant to be maximized
/// Score: FACTOR_A^x0 * FACTOR_B^x1 with the coordinates acting as exponents
/// Maximum over the unit square: FACTOR_A at x = (1, 0)
/// Bounds: x_i in [0, 1]
pub fn cobb_douglas(x: &Array1<f64>) -> f64 {
    FACTOR_A.powf(x[0]) * FACTOR_B.powf(x[1])
}

/// Constant-returns-to-scale residual for the exponents
/// Zero when x0 + x1 = 1, positive otherwise
pub fn cobb_douglas_crs_residual(x: &Array1<f64>) -> f64 {
    (x[0] + x[1] - 1.0).abs()
}

/// Decreasing-returns margin for the exponents
/// Zero when x0 + x1 <= 0.9, the excess above that sum otherwise
pub fn cobb_douglas_drs_margin(x: &Array1<f64>) -> f64 {
    (x[0] + x[1] - 0.9).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn corner_scores() {
        assert_eq!(cobb_douglas(&array![1.0, 0.0]), FACTOR_A);
        assert_eq!(cobb_douglas(&array![0.0, 1.0]), FACTOR_B);
        assert_eq!(cobb_douglas(&array![0.0, 0.0]), 1.0);
    }

    #[test]
    fn returns_to_scale_residuals() {
        assert_eq!(cobb_douglas_crs_residual(&array![0.4, 0.6]), 0.0);
        assert!(cobb_douglas_crs_residual(&array![0.8, 0.8]) > 0.0);
        assert_eq!(cobb_douglas_drs_margin(&array![0.3, 0.3]), 0.0);
        assert!((cobb_douglas_drs_margin(&array![0.6, 0.5]) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn score_grows_with_first_exponent() {
        assert!(cobb_douglas(&array![0.9, 0.1]) > cobb_douglas(&array![0.1, 0.9]));
    }
}
