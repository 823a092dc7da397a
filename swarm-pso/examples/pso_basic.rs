//! Maximizes a smooth 2D fitness and prints where the swarm lands.

use ndarray::{Array1, array};
use swarm_pso::{SwarmConfigBuilder, maximize};

fn main() {
    // fitness peaks at (2, 1) with value 0
    let fitness = |x: &Array1<f64>| -(x[0] - 2.0).powi(2) - (x[1] - 1.0).powi(2);

    let points: Vec<Array1<f64>> = (0..40)
        .map(|i| array![(i % 8) as f64 * 1.25 - 4.5, (i / 8) as f64 * 2.0 - 4.0])
        .collect();

    let config = SwarmConfigBuilder::new()
        .cognitive_rate(0.1)
        .social_rate(0.1)
        .epsilon(1e-9)
        .stable_iterations(60)
        .seed(42)
        .build()
        .expect("valid configuration");

    let report = maximize(
        &fitness,
        |_: &Array1<f64>| Array1::zeros(0),
        &points,
        config,
        2,
    )
    .expect("optimization failed");

    println!("{}", report.message);
    println!(
        "peak at ({:.4}, {:.4}) after {} iterations",
        report.x[0], report.x[1], report.iterations
    );
    println!("fitness {:.3e}, {} evaluations", report.fun, report.nfev);
}
