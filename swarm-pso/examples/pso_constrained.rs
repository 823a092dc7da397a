//! Fits production exponents under constant returns to scale.
//!
//! The score k^a * l^b is monotone in each exponent, so with a + b pinned
//! to 1 and both exponents kept off the box edges, the best feasible point
//! puts the largest allowed weight on the stronger factor.

use ndarray::{Array1, array};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use swarm_pso::constraints::{box_margin, stack, sum_equals};
use swarm_pso::{ParticleSwarm, SwarmConfigBuilder};

fn main() {
    let capital = 1.41_f64;
    let labor = 1.08_f64;
    let score = move |x: &Array1<f64>| capital.powf(x[0]) * labor.powf(x[1]);

    // start on the a + b = 1 line so the swarm begins feasible
    let mut rng = StdRng::seed_from_u64(12);
    let points: Vec<Array1<f64>> = (0..100)
        .map(|_| {
            let a = rng.random_range(0.1..0.9);
            array![a, 1.0 - a]
        })
        .collect();

    let config = SwarmConfigBuilder::new()
        .max_velocity(0.1)
        .feasibility_threshold(0.01)
        .epsilon(1e-6)
        .stable_iterations(50)
        .max_iterations(5000)
        .seed(12)
        .add_constraint(stack(vec![
            sum_equals(1.0),
            box_margin(array![0.0, 0.0], array![1.0, 1.0], 0.1),
        ]))
        .build()
        .expect("valid configuration");

    let mut swarm = ParticleSwarm::new(&score);
    *swarm.config_mut() = config;
    let report = swarm.run(&points, 2).expect("optimization failed");

    println!("{}", report.message);
    println!("exponents a = {:.3}, b = {:.3}", report.x[0], report.x[1]);
    println!(
        "score {:.4}, violation {:.2e}",
        report.fun, report.violation
    );
    println!("the margin keeps a at or below 0.9, so the swarm settles there");
}
