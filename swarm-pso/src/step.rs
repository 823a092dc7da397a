//! One swarm iteration: kinematics, then gated acceptance.
//!
//! Leaders are frozen before any particle moves, so every particle steers
//! toward the same snapshot regardless of update order. The two random
//! pulls are scalars drawn per particle, not per coordinate.

use crate::parallel_eval::Evaluation;
use crate::quantize::quantize_position;
use crate::swarm::Swarm;
use crate::{Leader, SwarmConfig};
use ndarray::{Array1, Zip};
use rand::Rng;

/// Moves every particle one step and returns the candidate positions.
///
/// The updated velocity blends the friction-damped previous velocity with
/// random pulls toward the particle's own best and its leader, then each
/// coordinate is clamped to the velocity cap with its sign kept. Candidates
/// are the moved (and optionally quantized) positions, cloned for batch
/// evaluation.
pub(crate) fn move_particles<R: Rng + ?Sized>(
    swarm: &mut Swarm,
    config: &SwarmConfig,
    rng: &mut R,
) -> Vec<Array1<f64>> {
    let global = swarm.particles[swarm.best_index].best.clone();
    let nearest = match config.leader {
        Leader::Nearest => Some(swarm.nearest_leaders()),
        Leader::GlobalBest => None,
    };

    let mut candidates = Vec::with_capacity(swarm.particles.len());
    for (i, particle) in swarm.particles.iter_mut().enumerate() {
        let leader = match &nearest {
            Some(leaders) => &leaders[i],
            None => &global,
        };
        let r1 = rng.random::<f64>();
        let r2 = rng.random::<f64>();

        let mut velocity = Zip::from(&particle.velocity)
            .and(&particle.position)
            .and(&particle.best)
            .and(leader)
            .map_collect(|&v, &x, &own_best, &lead| {
                config.friction * v
                    + config.cognitive_rate * r1 * (own_best - x)
                    + config.social_rate * r2 * (lead - x)
            });
        velocity.mapv_inplace(|v| v.clamp(-config.max_velocity, config.max_velocity));

        particle.position += &velocity;
        particle.velocity = velocity;
        if let Some(decimals) = config.quantize {
            quantize_position(&mut particle.position, decimals);
        }
        candidates.push(particle.position.clone());
    }
    candidates
}

/// Applies the acceptance test to every particle, then refreshes the leader.
///
/// A candidate replaces the remembered best only when it improves strictly
/// on fitness and its summed violation stays under the threshold. NaN
/// fitness loses the comparison and infeasible candidates never land, no
/// matter how good they score.
pub(crate) fn accept_candidates(swarm: &mut Swarm, evaluations: &[Evaluation], thresh: f64) {
    for (particle, &(fitness, violation)) in swarm.particles.iter_mut().zip(evaluations) {
        if fitness > particle.best_fitness && violation < thresh {
            particle.best = particle.position.clone();
            particle.best_fitness = fitness;
        }
    }
    swarm.refresh_global_best();
}
