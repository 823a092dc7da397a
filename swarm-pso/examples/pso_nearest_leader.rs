//! Runs the neighborhood leader policy on a four-peak landscape.

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use swarm_pso::{Leader, ParticleSwarm, SwarmConfigBuilder};
use swarm_test_functions::himmelblau;

fn main() {
    // himmelblau has four equal global minima; negate it to maximize
    let fitness = |x: &Array1<f64>| -himmelblau(x);

    let mut rng = StdRng::seed_from_u64(4);
    let points: Vec<Array1<f64>> = (0..80)
        .map(|_| Array1::from_shape_fn(2, |_| rng.random_range(-5.0..5.0)))
        .collect();

    let config = SwarmConfigBuilder::new()
        .leader(Leader::Nearest)
        .max_velocity(0.5)
        .cognitive_rate(0.5)
        .social_rate(0.5)
        .epsilon(1e-10)
        .stable_iterations(80)
        .max_iterations(5000)
        .seed(4)
        .build()
        .expect("valid configuration");

    let mut swarm = ParticleSwarm::new(&fitness);
    *swarm.config_mut() = config;
    let report = swarm.run(&points, 2).expect("optimization failed");

    println!("{}", report.message);
    println!(
        "best ({:.4}, {:.4}), fitness {:.3e}",
        report.x[0], report.x[1], report.fun
    );
    println!("known peaks: (3, 2), (-2.81, 3.13), (-3.78, -3.28), (3.58, -1.85)");
}
