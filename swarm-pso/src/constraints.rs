//! Ready-made violation callables for common feasibility shapes.
//!
//! Every helper returns a [`ConstraintFn`]: a callable mapping a candidate
//! position to a vector of non-negative violation magnitudes, zero entries
//! meaning satisfied. The swarm sums the entries and compares the total
//! against its feasibility threshold, so the helpers never need to know that
//! threshold themselves.

use crate::ConstraintFn;
use ndarray::Array1;
use std::sync::Arc;

/// Keeps every coordinate inside `[lower + margin, upper - margin]`.
///
/// Produces two entries per coordinate, the distances by which the candidate
/// undershoots the padded lower bound and overshoots the padded upper bound.
pub fn box_margin(lower: Array1<f64>, upper: Array1<f64>, margin: f64) -> ConstraintFn {
    Arc::new(move |x: &Array1<f64>| {
        let n = x.len().min(lower.len()).min(upper.len());
        let mut violations = Array1::zeros(2 * n);
        for i in 0..n {
            violations[2 * i] = (lower[i] + margin - x[i]).max(0.0);
            violations[2 * i + 1] = (x[i] - (upper[i] - margin)).max(0.0);
        }
        violations
    })
}

/// Requires the coordinates to sum to `target`.
///
/// The single entry is the absolute deviation from the target, so the
/// constraint is satisfied only within the swarm's feasibility threshold.
pub fn sum_equals(target: f64) -> ConstraintFn {
    Arc::new(move |x: &Array1<f64>| Array1::from_vec(vec![(x.sum() - target).abs()]))
}

/// Requires the coordinates to sum to at most `limit - margin`.
pub fn sum_below(limit: f64, margin: f64) -> ConstraintFn {
    Arc::new(move |x: &Array1<f64>| {
        Array1::from_vec(vec![(x.sum() - (limit - margin)).max(0.0)])
    })
}

/// Concatenates several constraints into one callable.
pub fn stack(parts: Vec<ConstraintFn>) -> ConstraintFn {
    Arc::new(move |x: &Array1<f64>| {
        let mut entries = Vec::new();
        for part in &parts {
            entries.extend(part(x).into_iter());
        }
        Array1::from_vec(entries)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn box_margin_zero_inside() {
        let constraint = box_margin(array![0.0, 0.0], array![1.0, 1.0], 0.1);
        let violations = constraint(&array![0.5, 0.5]);
        assert_eq!(violations.len(), 4);
        assert_eq!(violations.sum(), 0.0);
    }

    #[test]
    fn box_margin_measures_overshoot() {
        let constraint = box_margin(array![0.0, 0.0], array![1.0, 1.0], 0.1);
        let violations = constraint(&array![-0.2, 1.05]);
        // undershoot below 0.1 on the first coordinate
        assert!((violations[0] - 0.3).abs() < 1e-12);
        assert_eq!(violations[1], 0.0);
        // overshoot above 0.9 on the second
        assert_eq!(violations[2], 0.0);
        assert!((violations[3] - 0.15).abs() < 1e-12);
    }

    #[test]
    fn sum_equals_is_symmetric() {
        let constraint = sum_equals(1.0);
        assert_eq!(constraint(&array![0.4, 0.6]).sum(), 0.0);
        assert!((constraint(&array![0.7, 0.6]).sum() - 0.3).abs() < 1e-12);
        assert!((constraint(&array![0.2, 0.5]).sum() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn sum_below_allows_slack() {
        let constraint = sum_below(1.0, 0.1);
        assert_eq!(constraint(&array![0.3, 0.3]).sum(), 0.0);
        assert_eq!(constraint(&array![0.45, 0.45]).sum(), 0.0);
        assert!((constraint(&array![0.6, 0.5]).sum() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn stack_preserves_order_and_length() {
        let stacked = stack(vec![sum_equals(1.0), sum_below(1.0, 0.0)]);
        let violations = stacked(&array![0.8, 0.8]);
        assert_eq!(violations.len(), 2);
        assert!((violations[0] - 0.6).abs() < 1e-12);
        assert!((violations[1] - 0.6).abs() < 1e-12);
    }
}
