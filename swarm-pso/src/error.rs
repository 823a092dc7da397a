//! Error types for swarm construction, configuration and runs.

use thiserror::Error;

/// Errors reported by the particle swarm maximizer.
#[derive(Debug, Error)]
pub enum SwarmError {
    /// The initial point set is empty.
    #[error("initial points are empty: a swarm needs at least one particle")]
    EmptySwarm,

    /// The initial points have no coordinates.
    #[error("initial points have zero dimensions")]
    ZeroDimension,

    /// An initial point disagrees with the first point's dimension.
    #[error("dimension mismatch at point {index}: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Index of the offending point.
        index: usize,
        /// Dimension of the first point.
        expected: usize,
        /// Dimension of the offending point.
        got: usize,
    },

    /// Friction must lie in (0, 1].
    #[error("invalid friction {value}: must be in (0, 1]")]
    InvalidFriction {
        /// Rejected value.
        value: f64,
    },

    /// Learning rates must be finite and non-negative.
    #[error("invalid {name} {value}: must be finite and non-negative")]
    InvalidLearningRate {
        /// Which rate was rejected.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// The velocity cap must be finite and positive.
    #[error("invalid velocity cap {value}: must be finite and positive")]
    InvalidVelocityCap {
        /// Rejected value.
        value: f64,
    },

    /// The stability tolerance must be finite and positive.
    #[error("invalid epsilon {value}: must be finite and positive")]
    InvalidEpsilon {
        /// Rejected value.
        value: f64,
    },

    /// The feasibility threshold must be finite and non-negative.
    #[error("invalid feasibility threshold {value}: must be finite and non-negative")]
    InvalidFeasibilityThreshold {
        /// Rejected value.
        value: f64,
    },

    /// The stability window must cover at least one iteration.
    #[error("invalid stability window {window}: must be at least 1")]
    InvalidStabilityWindow {
        /// Rejected window length.
        window: usize,
    },

    /// The iteration limit must allow at least one iteration.
    #[error("invalid iteration limit {limit}: must be at least 1")]
    InvalidIterationLimit {
        /// Rejected limit.
        limit: usize,
    },

    /// Every attempt ran out of iterations before the best stabilized.
    #[error("no convergence after {attempts} attempts of {iterations} iterations each")]
    ConvergenceFailure {
        /// Attempts performed, restarts included.
        attempts: usize,
        /// Iteration limit each attempt ran to.
        iterations: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SwarmError>;

impl SwarmError {
    /// True for defects in the initial point set.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SwarmError::EmptySwarm
                | SwarmError::ZeroDimension
                | SwarmError::DimensionMismatch { .. }
        )
    }

    /// True for rejected configuration values.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SwarmError::InvalidFriction { .. }
                | SwarmError::InvalidLearningRate { .. }
                | SwarmError::InvalidVelocityCap { .. }
                | SwarmError::InvalidEpsilon { .. }
                | SwarmError::InvalidFeasibilityThreshold { .. }
                | SwarmError::InvalidStabilityWindow { .. }
                | SwarmError::InvalidIterationLimit { .. }
        )
    }

    /// True when a run exhausted every attempt without stabilizing.
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, SwarmError::ConvergenceFailure { .. })
    }
}
