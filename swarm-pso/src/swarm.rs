//! Swarm state: particles, remembered bests and leader selection.
//!
//! Each particle owns its remembered best as a separate allocation. The
//! position array is mutated in place every iteration, so the best must
//! never alias it; acceptance always stores a fresh clone.

use crate::error::{Result, SwarmError};
use crate::parallel_eval::Evaluation;
use crate::quantize::quantize_position;
use ndarray::Array1;
use rand::Rng;

/// One particle: where it is, how it moves and the best it has seen.
#[derive(Debug, Clone)]
pub(crate) struct Particle {
    pub(crate) position: Array1<f64>,
    pub(crate) velocity: Array1<f64>,
    pub(crate) best: Array1<f64>,
    pub(crate) best_fitness: f64,
}

/// The whole population plus the index of the current global best.
#[derive(Debug, Clone)]
pub(crate) struct Swarm {
    pub(crate) particles: Vec<Particle>,
    pub(crate) best_index: usize,
    pub(crate) best_fitness: f64,
}

/// Checks the initial point set and returns the shared dimension.
pub(crate) fn validate_points(points: &[Array1<f64>]) -> Result<usize> {
    let first = points.first().ok_or(SwarmError::EmptySwarm)?;
    let dim = first.len();
    if dim == 0 {
        return Err(SwarmError::ZeroDimension);
    }
    for (index, point) in points.iter().enumerate() {
        if point.len() != dim {
            return Err(SwarmError::DimensionMismatch {
                index,
                expected: dim,
                got: point.len(),
            });
        }
    }
    Ok(dim)
}

impl Swarm {
    /// Builds a fresh swarm from validated points.
    ///
    /// Velocities are drawn uniformly from `[-max_velocity, max_velocity]`
    /// per coordinate. Best fitness starts at negative infinity; it is only
    /// assigned once the initial positions have been evaluated, so a swarm
    /// straight out of this constructor has found nothing yet.
    pub(crate) fn new<R: Rng + ?Sized>(
        points: &[Array1<f64>],
        max_velocity: f64,
        quantize: Option<u32>,
        rng: &mut R,
    ) -> Swarm {
        let mut particles = Vec::with_capacity(points.len());
        for point in points {
            let mut position = point.clone();
            if let Some(decimals) = quantize {
                quantize_position(&mut position, decimals);
            }
            let velocity = Array1::from_shape_fn(position.len(), |_| {
                max_velocity * (2.0 * rng.random::<f64>() - 1.0)
            });
            let best = position.clone();
            particles.push(Particle {
                position,
                velocity,
                best,
                best_fitness: f64::NEG_INFINITY,
            });
        }
        Swarm {
            particles,
            best_index: 0,
            best_fitness: f64::NEG_INFINITY,
        }
    }

    /// Current positions, cloned for batch evaluation.
    pub(crate) fn positions(&self) -> Vec<Array1<f64>> {
        self.particles
            .iter()
            .map(|particle| particle.position.clone())
            .collect()
    }

    /// Assigns initial best fitness from the first evaluation pass.
    ///
    /// Infeasible or NaN starting points keep the placeholder, so they can
    /// never win the global best and a later feasible candidate replaces
    /// them through the normal acceptance test.
    pub(crate) fn seed_bests(&mut self, evaluations: &[Evaluation], thresh: f64) {
        for (particle, &(fitness, violation)) in self.particles.iter_mut().zip(evaluations) {
            if violation < thresh && !fitness.is_nan() {
                particle.best_fitness = fitness;
            }
        }
        self.refresh_global_best();
    }

    /// Recomputes the global best index, lowest index winning ties.
    pub(crate) fn refresh_global_best(&mut self) {
        let mut best_index = 0;
        let mut best_fitness = f64::NEG_INFINITY;
        for (index, particle) in self.particles.iter().enumerate() {
            if particle.best_fitness > best_fitness {
                best_fitness = particle.best_fitness;
                best_index = index;
            }
        }
        self.best_index = best_index;
        self.best_fitness = best_fitness;
    }

    /// Remembered best of the nearest other particle, for every particle.
    ///
    /// Proximity is measured between current positions. Ties go to the
    /// lowest index, and a lone particle leads itself.
    pub(crate) fn nearest_leaders(&self) -> Vec<Array1<f64>> {
        let n = self.particles.len();
        if n == 1 {
            return vec![self.particles[0].best.clone()];
        }
        let mut leaders = Vec::with_capacity(n);
        for i in 0..n {
            let mut nearest = usize::MAX;
            let mut nearest_distance = f64::INFINITY;
            for (j, other) in self.particles.iter().enumerate() {
                if j == i {
                    continue;
                }
                let distance = squared_distance(&self.particles[i].position, &other.position);
                if distance < nearest_distance {
                    nearest_distance = distance;
                    nearest = j;
                }
            }
            leaders.push(self.particles[nearest].best.clone());
        }
        leaders
    }
}

fn squared_distance(a: &Array1<f64>, b: &Array1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&ai, &bi)| (ai - bi) * (ai - bi))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn three_points() -> Vec<Array1<f64>> {
        vec![array![0.0, 0.0], array![1.0, 0.0], array![10.0, 0.0]]
    }

    #[test]
    fn validation_accepts_consistent_points() {
        assert_eq!(validate_points(&three_points()).unwrap(), 2);
    }

    #[test]
    fn validation_rejects_defects() {
        assert!(matches!(
            validate_points(&[]),
            Err(SwarmError::EmptySwarm)
        ));
        assert!(matches!(
            validate_points(&[Array1::zeros(0)]),
            Err(SwarmError::ZeroDimension)
        ));
        let mismatched = vec![array![1.0, 2.0], array![1.0, 2.0, 3.0]];
        assert!(matches!(
            validate_points(&mismatched),
            Err(SwarmError::DimensionMismatch {
                index: 1,
                expected: 2,
                got: 3
            })
        ));
    }

    #[test]
    fn initial_velocities_respect_the_cap() {
        let mut rng = StdRng::seed_from_u64(11);
        let swarm = Swarm::new(&three_points(), 0.25, None, &mut rng);
        for particle in &swarm.particles {
            for &v in particle.velocity.iter() {
                assert!(v.abs() <= 0.25, "initial velocity {} beyond cap", v);
            }
        }
    }

    #[test]
    fn best_is_an_owned_copy() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut swarm = Swarm::new(&three_points(), 1.0, None, &mut rng);
        swarm.particles[0].position[0] += 100.0;
        assert_eq!(swarm.particles[0].best[0], 0.0);
    }

    #[test]
    fn seeding_gates_on_feasibility() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut swarm = Swarm::new(&three_points(), 1.0, None, &mut rng);
        swarm.seed_bests(&[(1.0, 0.0), (99.0, 5.0), (f64::NAN, 0.0)], 1e-6);
        assert_eq!(swarm.particles[0].best_fitness, 1.0);
        assert_eq!(swarm.particles[1].best_fitness, f64::NEG_INFINITY);
        assert_eq!(swarm.particles[2].best_fitness, f64::NEG_INFINITY);
        assert_eq!(swarm.best_index, 0);
        assert_eq!(swarm.best_fitness, 1.0);
    }

    #[test]
    fn global_best_ties_go_to_the_lowest_index() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut swarm = Swarm::new(&three_points(), 1.0, None, &mut rng);
        swarm.seed_bests(&[(1.0, 0.0), (1.0, 0.0), (0.5, 0.0)], 1e-6);
        assert_eq!(swarm.best_index, 0);
    }

    #[test]
    fn quantized_construction_rounds_positions() {
        let mut rng = StdRng::seed_from_u64(13);
        let points = vec![array![0.123456, 0.98765]];
        let swarm = Swarm::new(&points, 1.0, Some(1), &mut rng);
        assert_eq!(swarm.particles[0].position, array![0.1, 1.0]);
        assert_eq!(swarm.particles[0].best, array![0.1, 1.0]);
    }

    #[test]
    fn nearest_leader_geometry() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut swarm = Swarm::new(&three_points(), 1.0, None, &mut rng);
        for (index, particle) in swarm.particles.iter_mut().enumerate() {
            particle.best = array![index as f64, index as f64];
        }
        let leaders = swarm.nearest_leaders();
        // particle 0 is closest to 1, particle 1 to 0, particle 2 to 1
        assert_eq!(leaders[0], array![1.0, 1.0]);
        assert_eq!(leaders[1], array![0.0, 0.0]);
        assert_eq!(leaders[2], array![1.0, 1.0]);
    }

    #[test]
    fn lone_particle_leads_itself() {
        let mut rng = StdRng::seed_from_u64(19);
        let swarm = Swarm::new(&[array![2.0, 3.0]], 1.0, None, &mut rng);
        let leaders = swarm.nearest_leaders();
        assert_eq!(leaders.len(), 1);
        assert_eq!(leaders[0], array![2.0, 3.0]);
    }
}
