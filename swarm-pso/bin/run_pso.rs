//! Command-line driver running the swarm maximizer on benchmark functions.

use clap::{Parser, ValueEnum};
use ndarray::{Array1, array};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::process;
use std::sync::Arc;
use std::time::Instant;
use swarm_pso::function_registry::FunctionRegistry;
use swarm_pso::{CallbackAction, Leader, ParticleSwarm, SwarmConfigBuilder, SwarmIntermediate};
use swarm_test_functions::{FunctionMetadata, get_function_metadata};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LeaderChoice {
    /// Every particle follows the single global best
    Global,
    /// Each particle follows its nearest neighbor's best
    Nearest,
}

impl From<LeaderChoice> for Leader {
    fn from(choice: LeaderChoice) -> Self {
        match choice {
            LeaderChoice::Global => Leader::GlobalBest,
            LeaderChoice::Nearest => Leader::Nearest,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "run_pso",
    about = "Particle swarm maximizer on benchmark functions"
)]
struct Cli {
    /// Test function to optimize
    #[arg(long, default_value = "sphere")]
    function: String,

    /// Problem dimension (defaults to the function's canonical 2)
    #[arg(long)]
    dim: Option<usize>,

    /// Number of particles
    #[arg(long, default_value_t = 40)]
    particles: usize,

    /// Iteration budget per attempt
    #[arg(long, default_value_t = 1000)]
    maxiter: usize,

    /// Consecutive stable iterations that declare convergence
    #[arg(long, default_value_t = 50)]
    stable: usize,

    /// Largest best-fitness change still counted as stable
    #[arg(long, default_value_t = 1e-4)]
    epsilon: f64,

    /// Largest summed constraint violation accepted as feasible
    #[arg(long, default_value_t = 1e-6)]
    thresh: f64,

    /// Velocity damping factor
    #[arg(long, default_value_t = 0.8)]
    friction: f64,

    /// Pull toward the particle's own best
    #[arg(long, default_value_t = 2.0)]
    cognitive: f64,

    /// Pull toward the leader's best
    #[arg(long, default_value_t = 2.0)]
    social: f64,

    /// Velocity cap (defaults to 10% of the widest bound span)
    #[arg(long)]
    max_velocity: Option<f64>,

    /// Leader policy
    #[arg(long, value_enum, default_value = "global")]
    leader: LeaderChoice,

    /// Round positions to this many decimal places
    #[arg(long)]
    quantize: Option<u32>,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Restarts allowed after the first attempt
    #[arg(long, default_value_t = 2)]
    restarts: usize,

    /// Maximize the raw function instead of minimizing it
    #[arg(long, default_value_t = false)]
    maximize: bool,

    /// Enable the function's bundled constraints
    #[arg(long, default_value_t = false)]
    constrained: bool,

    /// Override the lower bound on every coordinate
    #[arg(long)]
    lower: Option<f64>,

    /// Override the upper bound on every coordinate
    #[arg(long)]
    upper: Option<f64>,

    /// Print solver progress to stderr
    #[arg(long, default_value_t = false)]
    disp: bool,

    /// Print a progress line every N iterations (0 disables)
    #[arg(long, default_value_t = 0)]
    progress_every: usize,

    /// Disable parallel batch evaluation
    #[arg(long, default_value_t = false)]
    no_parallel: bool,

    /// Worker threads (0 = all cores)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// List available functions and exit
    #[arg(long, default_value_t = false)]
    list_functions: bool,

    /// Show the selected function's metadata and exit
    #[arg(long, default_value_t = false)]
    show_metadata: bool,
}

fn main() {
    let args = Cli::parse();
    let registry = FunctionRegistry::new();
    let metadata_map = get_function_metadata();

    if args.list_functions {
        list_available_functions(&registry, &metadata_map);
        return;
    }

    let Some(function) = registry.get(&args.function) else {
        eprintln!(
            "Error: unknown function '{}'. Use --list-functions to see the choices.",
            args.function
        );
        process::exit(2);
    };
    let Some(info) = metadata_map.get(&args.function) else {
        eprintln!("Error: no metadata for function '{}'", args.function);
        process::exit(2);
    };

    if args.show_metadata {
        print_metadata(info);
        return;
    }

    if args.particles == 0 {
        eprintln!("Error: --particles must be at least 1");
        process::exit(2);
    }

    let dim = determine_dimension(&args, info);
    let bounds = determine_bounds(&args, info, dim);
    let widest_span = bounds.iter().map(|&(l, u)| u - l).fold(0.0_f64, f64::max);
    let max_velocity = args.max_velocity.unwrap_or(0.1 * widest_span);

    let mut builder = SwarmConfigBuilder::new()
        .leader(args.leader.into())
        .friction(args.friction)
        .cognitive_rate(args.cognitive)
        .social_rate(args.social)
        .max_velocity(max_velocity)
        .max_iterations(args.maxiter)
        .stable_iterations(args.stable)
        .epsilon(args.epsilon)
        .feasibility_threshold(args.thresh)
        .disp(args.disp)
        .parallel(!args.no_parallel);
    if let Some(decimals) = args.quantize {
        builder = builder.quantize(decimals);
    }
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    if args.threads > 0 {
        builder = builder.num_threads(args.threads);
    }
    if args.progress_every > 0 {
        let every = args.progress_every;
        builder = builder.callback(Box::new(move |intermediate: &SwarmIntermediate| {
            if intermediate.iter % every == 0 {
                let mut x_buffer = String::new();
                for value in intermediate.x.iter() {
                    if !x_buffer.is_empty() {
                        x_buffer.push_str(", ");
                    }
                    let _ = write!(&mut x_buffer, "{value:.6}");
                }
                println!(
                    "attempt {:>2} iter {:>5} | f(x) = {:>12.6e} | stable {:>4} | x = [{}]",
                    intermediate.attempt, intermediate.iter, intermediate.fun, intermediate.stable, x_buffer
                );
            }
            CallbackAction::Continue
        }));
    }

    let mut config = match builder.build() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(2);
        }
    };

    if args.constrained {
        if info.equality_constraints.is_empty() && info.inequality_constraints.is_empty() {
            eprintln!("Error: {} has no constraints to enable", args.function);
            process::exit(2);
        }
        for residual in info.equality_constraints.clone() {
            config
                .constraints
                .push(Arc::new(move |x: &Array1<f64>| array![residual(x).abs()]));
        }
        for residual in info.inequality_constraints.clone() {
            config
                .constraints
                .push(Arc::new(move |x: &Array1<f64>| array![residual(x).max(0.0)]));
        }
    }

    let mut sample_rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            let mut thread_rng = rand::rng();
            StdRng::from_rng(&mut thread_rng)
        }
    };
    let points: Vec<Array1<f64>> = (0..args.particles)
        .map(|_| {
            Array1::from_shape_fn(dim, |d| {
                let (lower, upper) = bounds[d];
                sample_rng.random_range(lower..upper)
            })
        })
        .collect();

    // the engine maximizes, so classical minimization benchmarks get negated
    let sign = if args.maximize { 1.0 } else { -1.0 };
    let objective = move |x: &Array1<f64>| sign * function(x);

    println!(
        "Optimizing {} ({}D, {} particles, {} restarts allowed)",
        args.function, dim, args.particles, args.restarts
    );

    let started = Instant::now();
    let mut swarm = ParticleSwarm::new(&objective);
    *swarm.config_mut() = config;
    match swarm.run(&points, args.restarts) {
        Ok(report) => {
            println!("\nResults:");
            println!("  Status: {}", report.message);
            println!("  Attempts: {}", report.attempts);
            println!("  Iterations: {}", report.iterations);
            println!("  Evaluations: {}", report.nfev);
            if args.maximize {
                println!("  Best score: {:.6e}", report.fun);
            } else {
                println!("  Best objective: {:.6e}", -report.fun);
            }
            if args.constrained {
                println!("  Violation: {:.3e}", report.violation);
            }
            println!("  Elapsed: {:.2?}", started.elapsed());
            println!("  Best parameters:");
            for (i, value) in report.x.iter().enumerate() {
                println!("    x[{}] = {:.8}", i, value);
            }
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            if error.is_convergence_failure() {
                process::exit(1);
            }
            process::exit(2);
        }
    }
}

fn determine_dimension(args: &Cli, info: &FunctionMetadata) -> usize {
    match args.dim {
        None => 2,
        Some(dim) => {
            if dim == 0 || !info.dimensions.contains(&dim) {
                eprintln!(
                    "Error: {} supports dimensions {:?}, not {}",
                    info.name, info.dimensions, dim
                );
                process::exit(2);
            }
            dim
        }
    }
}

fn determine_bounds(args: &Cli, info: &FunctionMetadata, dim: usize) -> Vec<(f64, f64)> {
    match (args.lower, args.upper) {
        (Some(lower), Some(upper)) => {
            if lower >= upper {
                eprintln!("Error: --lower must be below --upper");
                process::exit(2);
            }
            vec![(lower, upper); dim]
        }
        (None, None) => {
            if info.bounds.len() >= dim {
                info.bounds[..dim].to_vec()
            } else {
                vec![info.bounds[0]; dim]
            }
        }
        _ => {
            eprintln!("Error: --lower and --upper must be given together");
            process::exit(2);
        }
    }
}

fn list_available_functions(
    registry: &FunctionRegistry,
    metadata: &HashMap<String, FunctionMetadata>,
) {
    println!("Available functions:");
    for name in registry.list_functions() {
        match metadata.get(&name) {
            Some(info) => {
                let constrained = if info.equality_constraints.is_empty()
                    && info.inequality_constraints.is_empty()
                {
                    ""
                } else {
                    " [constrained]"
                };
                println!("  {:<14} {}{}", name, info.description, constrained);
            }
            None => println!("  {}", name),
        }
    }
}

fn print_metadata(info: &FunctionMetadata) {
    println!("{}", info.name);
    println!("  {}", info.description);
    println!("  Dimensions: {:?}", info.dimensions);
    println!("  Bounds: {:?}", info.bounds);
    println!("  Multimodal: {}", info.multimodal);
    println!("  Known optima:");
    for (point, value) in &info.global_minima {
        println!("    f({:?}) = {}", point, value);
    }
    println!(
        "  Constraints: {} equality, {} inequality",
        info.equality_constraints.len(),
        info.inequality_constraints.len()
    );
}
