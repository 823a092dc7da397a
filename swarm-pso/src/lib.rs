#![doc = include_str!("../README.md")]
#![doc = include_str!("../REFERENCES.md")]
#![warn(missing_docs)]
//!
//! # Example
//!
//! ```
//! use ndarray::{Array1, array};
//! use swarm_pso::{SwarmConfigBuilder, maximize};
//!
//! // peak of f(x, y) = -(x - 2)^2 - (y - 1)^2 is at (2, 1)
//! let points: Vec<Array1<f64>> = (0..30)
//!     .map(|i| array![(i % 6) as f64 - 2.5, (i / 6) as f64 - 2.0])
//!     .collect();
//! let config = SwarmConfigBuilder::new()
//!     .cognitive_rate(0.1)
//!     .social_rate(0.1)
//!     .epsilon(1e-9)
//!     .seed(42)
//!     .build()
//!     .expect("valid configuration");
//! let report = maximize(
//!     &|x: &Array1<f64>| -(x[0] - 2.0).powi(2) - (x[1] - 1.0).powi(2),
//!     |_: &Array1<f64>| Array1::zeros(0),
//!     &points,
//!     config,
//!     2,
//! )
//! .expect("search should converge");
//! assert!((report.x[0] - 2.0).abs() < 0.1);
//! assert!((report.x[1] - 1.0).abs() < 0.1);
//! ```

/// Ready-made violation callables for common feasibility shapes.
pub mod constraints;
/// Stability-window convergence tracking.
pub mod convergence;
/// Error types for construction, configuration and runs.
pub mod error;
/// Registry of benchmark functions for drivers.
pub mod function_registry;
/// Single-call maximization entry point.
pub mod maximize;
/// Batched candidate evaluation.
pub mod parallel_eval;
/// Decimal-grid rounding of candidate positions.
pub mod quantize;

mod step;
mod swarm;


pub use convergence::{ConvergenceDetector, ConvergenceState};
pub use error::{Result, SwarmError};
pub use maximize::maximize;
pub use parallel_eval::{Evaluation, ParallelConfig, evaluate_points_parallel};

use crate::swarm::{Swarm, validate_points};
use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Constraint callable: candidate position in, violation magnitudes out.
///
/// Entries must be non-negative, zero meaning satisfied. The swarm sums
/// them and compares the total against the feasibility threshold.
pub type ConstraintFn = Arc<dyn Fn(&Array1<f64>) -> Array1<f64> + Send + Sync>;

/// Per-iteration callback deciding whether the run goes on.
pub type CallbackFn = Box<dyn FnMut(&SwarmIntermediate) -> CallbackAction>;

/// Which remembered best each particle steers toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leader {
    /// Every particle follows the single global best.
    GlobalBest,
    /// Each particle follows the best of its nearest other particle,
    /// which lets sub-swarms work separate optima.
    Nearest,
}

impl FromStr for Leader {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "global" | "global_best" | "global-best" | "gbest" => Ok(Leader::GlobalBest),
            "nearest" | "neighbor" | "neighbour" => Ok(Leader::Nearest),
            _ => Err(format!("unknown leader policy: {}", s)),
        }
    }
}

/// Action returned by a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    /// Keep iterating.
    Continue,
    /// End the run now and report the current best.
    Stop,
}

/// Snapshot handed to the callback once per iteration.
#[derive(Debug, Clone)]
pub struct SwarmIntermediate {
    /// Best position found so far.
    pub x: Array1<f64>,
    /// Fitness of the best position.
    pub fun: f64,
    /// Iteration number within the current attempt, starting at 1.
    pub iter: usize,
    /// Attempt number, starting at 1.
    pub attempt: usize,
    /// Consecutive stable iterations counted so far.
    pub stable: usize,
}

/// Full configuration of a swarm run.
pub struct SwarmConfig {
    /// Leader policy applied uniformly for the whole run.
    pub leader: Leader,
    /// Damping applied to the previous velocity, in (0, 1].
    pub friction: f64,
    /// Pull toward the particle's own remembered best.
    pub cognitive_rate: f64,
    /// Pull toward the leader's remembered best.
    pub social_rate: f64,
    /// Per-coordinate speed cap, applied with the sign kept.
    pub max_velocity: f64,
    /// Iteration budget per attempt.
    pub max_iterations: usize,
    /// Consecutive stable iterations required to declare convergence.
    pub stable_iterations: usize,
    /// Largest best-fitness change still counted as stable.
    pub epsilon: f64,
    /// Largest summed violation still accepted as feasible.
    pub feasibility_threshold: f64,
    /// Decimal places positions are rounded to, `None` for no rounding.
    pub quantize: Option<u32>,
    /// Seed for all random draws; a random seed is used when `None`.
    pub seed: Option<u64>,
    /// Print progress to stderr.
    pub disp: bool,
    /// How candidate batches are evaluated.
    pub parallel: ParallelConfig,
    /// Constraints summed into the feasibility test.
    pub constraints: Vec<ConstraintFn>,
    /// Called once per iteration with the current best.
    pub callback: Option<CallbackFn>,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        SwarmConfig {
            leader: Leader::GlobalBest,
            friction: 0.8,
            cognitive_rate: 2.0,
            social_rate: 2.0,
            max_velocity: 1.0,
            max_iterations: 10_000,
            stable_iterations: 50,
            epsilon: 1e-4,
            feasibility_threshold: 1e-6,
            quantize: None,
            seed: None,
            disp: false,
            parallel: ParallelConfig::default(),
            constraints: Vec::new(),
            callback: None,
        }
    }
}

/// Builder validating a [`SwarmConfig`] before it can reach a run.
///
/// # Example
///
/// ```
/// use swarm_pso::SwarmConfigBuilder;
///
/// let config = SwarmConfigBuilder::new()
///     .friction(0.6)
///     .max_iterations(500)
///     .seed(7)
///     .build()
///     .expect("valid configuration");
/// assert_eq!(config.max_iterations, 500);
/// ```
#[derive(Default)]
pub struct SwarmConfigBuilder {
    config: SwarmConfig,
}

impl SwarmConfigBuilder {
    /// Starts from the default configuration.
    pub fn new() -> Self {
        SwarmConfigBuilder {
            config: SwarmConfig::default(),
        }
    }

    /// Sets the leader policy.
    pub fn leader(mut self, leader: Leader) -> Self {
        self.config.leader = leader;
        self
    }

    /// Sets the velocity damping factor.
    pub fn friction(mut self, friction: f64) -> Self {
        self.config.friction = friction;
        self
    }

    /// Sets the pull toward the particle's own best.
    pub fn cognitive_rate(mut self, rate: f64) -> Self {
        self.config.cognitive_rate = rate;
        self
    }

    /// Sets the pull toward the leader's best.
    pub fn social_rate(mut self, rate: f64) -> Self {
        self.config.social_rate = rate;
        self
    }

    /// Sets the per-coordinate speed cap.
    pub fn max_velocity(mut self, cap: f64) -> Self {
        self.config.max_velocity = cap;
        self
    }

    /// Sets the iteration budget per attempt.
    pub fn max_iterations(mut self, limit: usize) -> Self {
        self.config.max_iterations = limit;
        self
    }

    /// Sets the stability window length.
    pub fn stable_iterations(mut self, window: usize) -> Self {
        self.config.stable_iterations = window;
        self
    }

    /// Sets the stability tolerance on the best fitness.
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.config.epsilon = epsilon;
        self
    }

    /// Sets the feasibility threshold on summed violations.
    pub fn feasibility_threshold(mut self, thresh: f64) -> Self {
        self.config.feasibility_threshold = thresh;
        self
    }

    /// Rounds positions to this many decimal places before evaluation.
    pub fn quantize(mut self, decimals: u32) -> Self {
        self.config.quantize = Some(decimals);
        self
    }

    /// Seeds every random draw for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Prints progress to stderr.
    pub fn disp(mut self, disp: bool) -> Self {
        self.config.disp = disp;
        self
    }

    /// Switches parallel batch evaluation on or off.
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.config.parallel.enabled = enabled;
        self
    }

    /// Requests a fixed number of worker threads.
    pub fn num_threads(mut self, threads: usize) -> Self {
        self.config.parallel.num_threads = Some(threads);
        self
    }

    /// Adds one constraint to the feasibility test.
    pub fn add_constraint(mut self, constraint: ConstraintFn) -> Self {
        self.config.constraints.push(constraint);
        self
    }

    /// Installs a per-iteration callback.
    pub fn callback(mut self, callback: CallbackFn) -> Self {
        self.config.callback = Some(callback);
        self
    }

    /// Validates every numeric field and hands out the configuration.
    pub fn build(self) -> Result<SwarmConfig> {
        let config = self.config;
        if !config.friction.is_finite() || config.friction <= 0.0 || config.friction > 1.0 {
            return Err(SwarmError::InvalidFriction {
                value: config.friction,
            });
        }
        if !config.cognitive_rate.is_finite() || config.cognitive_rate < 0.0 {
            return Err(SwarmError::InvalidLearningRate {
                name: "cognitive rate",
                value: config.cognitive_rate,
            });
        }
        if !config.social_rate.is_finite() || config.social_rate < 0.0 {
            return Err(SwarmError::InvalidLearningRate {
                name: "social rate",
                value: config.social_rate,
            });
        }
        if !config.max_velocity.is_finite() || config.max_velocity <= 0.0 {
            return Err(SwarmError::InvalidVelocityCap {
                value: config.max_velocity,
            });
        }
        if !config.epsilon.is_finite() || config.epsilon <= 0.0 {
            return Err(SwarmError::InvalidEpsilon {
                value: config.epsilon,
            });
        }
        if !config.feasibility_threshold.is_finite() || config.feasibility_threshold < 0.0 {
            return Err(SwarmError::InvalidFeasibilityThreshold {
                value: config.feasibility_threshold,
            });
        }
        if config.stable_iterations == 0 {
            return Err(SwarmError::InvalidStabilityWindow {
                window: config.stable_iterations,
            });
        }
        if config.max_iterations == 0 {
            return Err(SwarmError::InvalidIterationLimit {
                limit: config.max_iterations,
            });
        }
        Ok(config)
    }
}

/// Outcome of a successful run.
#[derive(Clone)]
pub struct SwarmReport {
    /// Best feasible position found.
    pub x: Array1<f64>,
    /// Fitness at `x`.
    pub fun: f64,
    /// Summed constraint violation at `x`.
    pub violation: f64,
    /// Iterations run in the reporting attempt.
    pub iterations: usize,
    /// Attempts used, restarts included.
    pub attempts: usize,
    /// Fitness evaluations across all attempts.
    pub nfev: usize,
    /// Human-readable stop reason.
    pub message: String,
    /// Best fitness after initialization and after each iteration of the
    /// reporting attempt.
    pub history: Vec<f64>,
}

impl fmt::Debug for SwarmReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwarmReport")
            .field("x", &self.x)
            .field("fun", &self.fun)
            .field("violation", &self.violation)
            .field("iterations", &self.iterations)
            .field("attempts", &self.attempts)
            .field("nfev", &self.nfev)
            .field("message", &self.message)
            .field("history", &format!("len={}", self.history.len()))
            .finish()
    }
}

/// Particle swarm maximizer over a caller-supplied fitness function.
///
/// Construct with [`ParticleSwarm::new`], adjust the configuration through
/// [`ParticleSwarm::config_mut`] and start the search with
/// [`ParticleSwarm::run`]. The one-shot [`maximize`] wrapper covers the
/// common case.
pub struct ParticleSwarm<'a, F>
where
    F: Fn(&Array1<f64>) -> f64 + Sync,
{
    fitness: &'a F,
    config: SwarmConfig,
}

impl<'a, F> ParticleSwarm<'a, F>
where
    F: Fn(&Array1<f64>) -> f64 + Sync,
{
    /// Creates a maximizer with the default configuration.
    pub fn new(fitness: &'a F) -> Self {
        ParticleSwarm {
            fitness,
            config: SwarmConfig::default(),
        }
    }

    /// Read access to the configuration.
    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    /// Mutable access to the configuration.
    pub fn config_mut(&mut self) -> &mut SwarmConfig {
        &mut self.config
    }

    /// Runs the search from the given initial points.
    ///
    /// The points are validated before the fitness function is called even
    /// once. Each attempt rebuilds the swarm from the same points with
    /// fresh random velocities; after `max_restarts` restarts without
    /// convergence the whole run fails with
    /// [`SwarmError::ConvergenceFailure`]. A callback stop reports the
    /// current best as-is, which may still be the starting placeholder on
    /// a fully infeasible swarm.
    pub fn run(
        &mut self,
        initial_points: &[Array1<f64>],
        max_restarts: usize,
    ) -> Result<SwarmReport> {
        let dim = validate_points(initial_points)?;
        let n = initial_points.len();

        if let Some(threads) = self.config.parallel.num_threads {
            let _ = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global();
        }

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => {
                let mut thread_rng = rand::rng();
                StdRng::from_rng(&mut thread_rng)
            }
        };

        if self.config.disp {
            eprintln!(
                "PSO Init: {} particles, {} dimensions, maxiter={}",
                n, dim, self.config.max_iterations
            );
            eprintln!(
                "  Leader: {:?}, friction={}, c1={}, c2={}, v_max={}",
                self.config.leader,
                self.config.friction,
                self.config.cognitive_rate,
                self.config.social_rate,
                self.config.max_velocity
            );
        }

        let fitness = self.fitness;
        let constraints = self.config.constraints.clone();
        let eval_fn = Arc::new(move |x: &Array1<f64>| -> Evaluation {
            let score = fitness(x);
            let mut violation = 0.0;
            for constraint in &constraints {
                violation += constraint(x).sum();
            }
            (score, violation)
        });

        let mut nfev = 0;
        let total_attempts = max_restarts.saturating_add(1);

        for attempt in 1..=total_attempts {
            let mut swarm = Swarm::new(
                initial_points,
                self.config.max_velocity,
                self.config.quantize,
                &mut rng,
            );
            let initial = evaluate_points_parallel(
                &swarm.positions(),
                eval_fn.clone(),
                &self.config.parallel,
            );
            nfev += n;
            swarm.seed_bests(&initial, self.config.feasibility_threshold);

            let mut detector = ConvergenceDetector::new(
                self.config.epsilon,
                self.config.stable_iterations,
                self.config.max_iterations,
            );
            let mut history = Vec::with_capacity(self.config.max_iterations + 1);
            history.push(swarm.best_fitness);
            let mut outcome: Option<String> = None;

            loop {
                let previous_best = swarm.best_fitness;
                let candidates = step::move_particles(&mut swarm, &self.config, &mut rng);
                let evaluations =
                    evaluate_points_parallel(&candidates, eval_fn.clone(), &self.config.parallel);
                nfev += n;
                step::accept_candidates(&mut swarm, &evaluations, self.config.feasibility_threshold);

                let state = detector.observe(previous_best, swarm.best_fitness);
                history.push(swarm.best_fitness);
                let stable = match state {
                    ConvergenceState::Stabilizing(count) => count,
                    ConvergenceState::Converged => self.config.stable_iterations,
                    _ => 0,
                };

                if self.config.disp {
                    eprintln!(
                        "PSO attempt {} iter {:4}  best_f={:.6e}  stable={}",
                        attempt,
                        detector.iterations(),
                        swarm.best_fitness,
                        stable
                    );
                }

                if let Some(callback) = self.config.callback.as_mut() {
                    let intermediate = SwarmIntermediate {
                        x: swarm.particles[swarm.best_index].best.clone(),
                        fun: swarm.best_fitness,
                        iter: detector.iterations(),
                        attempt,
                        stable,
                    };
                    if callback(&intermediate) == CallbackAction::Stop {
                        outcome = Some("Optimization stopped by callback".to_string());
                    }
                }

                if outcome.is_none() {
                    match state {
                        ConvergenceState::Converged => {
                            outcome = Some(format!(
                                "Converged: best fitness stable for {} iterations",
                                self.config.stable_iterations
                            ));
                        }
                        ConvergenceState::Exhausted => break,
                        _ => {}
                    }
                }
                if outcome.is_some() {
                    break;
                }
            }

            if let Some(message) = outcome {
                if self.config.disp {
                    eprintln!("PSO finished: {}", message);
                }
                return Ok(self.finish_report(
                    &swarm,
                    detector.iterations(),
                    attempt,
                    nfev,
                    history,
                    message,
                ));
            }

            if self.config.disp {
                eprintln!(
                    "PSO attempt {}/{} exhausted after {} iterations",
                    attempt, total_attempts, self.config.max_iterations
                );
            }
        }

        Err(SwarmError::ConvergenceFailure {
            attempts: total_attempts,
            iterations: self.config.max_iterations,
        })
    }

    fn finish_report(
        &self,
        swarm: &Swarm,
        iterations: usize,
        attempts: usize,
        nfev: usize,
        history: Vec<f64>,
        message: String,
    ) -> SwarmReport {
        let best = &swarm.particles[swarm.best_index];
        let x = best.best.clone();
        let mut violation = 0.0;
        for constraint in &self.config.constraints {
            violation += constraint(&x).sum();
        }
        SwarmReport {
            x,
            fun: best.best_fitness,
            violation,
            iterations,
            attempts,
            nfev,
            message,
            history,
        }
    }
}
