//! One-shot entry point wrapping [`ParticleSwarm`].

use crate::{ParticleSwarm, Result, SwarmConfig, SwarmReport};
use ndarray::Array1;
use std::sync::Arc;

/// Maximizes `fitness_fn` subject to `constraint_fn` from the given points.
///
/// The constraint returns a vector of non-negative violation magnitudes; an
/// unconstrained problem can return an empty array. Any constraints already
/// present in `config` stay active alongside `constraint_fn`. Attempts are
/// capped at `max_restarts` restarts after the first try.
///
/// # Example
///
/// ```
/// use ndarray::{Array1, array};
/// use swarm_pso::{SwarmConfigBuilder, maximize};
///
/// let points: Vec<Array1<f64>> = (0..20)
///     .map(|i| array![(i % 5) as f64 - 2.0, (i / 5) as f64 - 2.0])
///     .collect();
/// let config = SwarmConfigBuilder::new()
///     .cognitive_rate(0.1)
///     .social_rate(0.1)
///     .epsilon(1e-9)
///     .seed(9)
///     .build()
///     .expect("valid configuration");
/// let report = maximize(
///     &|x: &Array1<f64>| -(x[0] * x[0] + x[1] * x[1]),
///     |_: &Array1<f64>| Array1::zeros(0),
///     &points,
///     config,
///     2,
/// )
/// .expect("search should converge");
/// assert!(report.fun > -1e-3);
/// ```
pub fn maximize<F, C>(
    fitness_fn: &F,
    constraint_fn: C,
    initial_points: &[Array1<f64>],
    config: SwarmConfig,
    max_restarts: usize,
) -> Result<SwarmReport>
where
    F: Fn(&Array1<f64>) -> f64 + Sync,
    C: Fn(&Array1<f64>) -> Array1<f64> + Send + Sync + 'static,
{
    let mut swarm = ParticleSwarm::new(fitness_fn);
    *swarm.config_mut() = config;
    swarm.config_mut().constraints.push(Arc::new(constraint_fn));
    swarm.run(initial_points, max_restarts)
}
