//! Stability-window convergence tracking.
//!
//! The swarm is considered converged once its global best fitness has moved
//! by less than a tolerance for a whole window of consecutive iterations.
//! A detector observes one fitness transition per iteration and answers with
//! the resulting state; once it reports [`ConvergenceState::Converged`] or
//! [`ConvergenceState::Exhausted`] the state is final and later observations
//! change nothing.

/// Where a run currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvergenceState {
    /// The best fitness is still moving by more than the tolerance.
    Searching,
    /// The best fitness has been stable for this many consecutive iterations.
    Stabilizing(usize),
    /// The stability window was filled.
    Converged,
    /// The iteration limit was reached before the window filled.
    Exhausted,
}

/// Tracks best-fitness stability across the iterations of one attempt.
#[derive(Debug, Clone)]
pub struct ConvergenceDetector {
    epsilon: f64,
    stable_iterations: usize,
    max_iterations: usize,
    iterations: usize,
    state: ConvergenceState,
}

impl ConvergenceDetector {
    /// Creates a detector for one attempt.
    ///
    /// `epsilon` is the largest best-fitness change still counted as stable,
    /// `stable_iterations` the window length that declares convergence and
    /// `max_iterations` the budget after which the attempt is exhausted.
    pub fn new(epsilon: f64, stable_iterations: usize, max_iterations: usize) -> Self {
        ConvergenceDetector {
            epsilon,
            stable_iterations,
            max_iterations,
            iterations: 0,
            state: ConvergenceState::Searching,
        }
    }

    /// Feeds one iteration's best-fitness transition into the detector.
    ///
    /// Non-finite fitness never counts toward the window: a swarm whose best
    /// is still the negative-infinity placeholder is not stable, it has not
    /// found anything yet.
    pub fn observe(&mut self, previous_best: f64, current_best: f64) -> ConvergenceState {
        if self.is_terminal() {
            return self.state;
        }

        self.iterations += 1;
        let stable = previous_best.is_finite()
            && current_best.is_finite()
            && (current_best - previous_best).abs() < self.epsilon;

        self.state = if stable {
            let run = match self.state {
                ConvergenceState::Stabilizing(count) => count + 1,
                _ => 1,
            };
            if run >= self.stable_iterations {
                ConvergenceState::Converged
            } else {
                ConvergenceState::Stabilizing(run)
            }
        } else {
            ConvergenceState::Searching
        };

        if self.state != ConvergenceState::Converged && self.iterations >= self.max_iterations {
            self.state = ConvergenceState::Exhausted;
        }

        self.state
    }

    /// Current state without feeding a new observation.
    pub fn state(&self) -> ConvergenceState {
        self.state
    }

    /// Iterations observed so far.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    fn is_terminal(&self) -> bool {
        matches!(
            self.state,
            ConvergenceState::Converged | ConvergenceState::Exhausted
        )
    }
}
