//! Batched evaluation of candidate positions, parallel when it pays off.

use ndarray::Array1;
use rayon::prelude::*;
use std::sync::Arc;

/// Fitness and summed constraint violation for one evaluated position.
pub type Evaluation = (f64, f64);

/// Controls how candidate batches are evaluated.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Evaluate batches on the rayon pool when true.
    pub enabled: bool,
    /// Worker threads for the global pool, `None` for rayon's default.
    pub num_threads: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        ParallelConfig {
            enabled: true,
            num_threads: None,
        }
    }
}

/// Evaluates a batch of positions, returning results in input order.
///
/// Small batches stay sequential since the pool overhead would dominate.
/// The outcome is identical either way, only the wall time differs.
pub fn evaluate_points_parallel<F>(
    points: &[Array1<f64>],
    eval_fn: Arc<F>,
    config: &ParallelConfig,
) -> Vec<Evaluation>
where
    F: Fn(&Array1<f64>) -> Evaluation + Send + Sync,
{
    if !config.enabled || points.len() < 4 {
        return points.iter().map(|point| eval_fn(point)).collect();
    }

    points.par_iter().map(|point| eval_fn(point)).collect()
}
