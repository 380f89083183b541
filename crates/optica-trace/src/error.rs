//! Error types for ray tracing operations.

use optica_math::MathError;
use thiserror::Error;

/// Errors that can occur while solving ray-surface interactions.
///
/// All failures are local to a single call; the solvers are deterministic
/// root finders, so nothing is retried internally.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TraceError {
    /// Degenerate input vector (coincident points, zero-length direction
    /// or normal).
    #[error(transparent)]
    Degenerate(#[from] MathError),

    /// Both secant seeds evaluate to the same value; the update would
    /// divide by zero.
    #[error("secant seeds evaluate equally, cannot iterate")]
    FlatSecant,

    /// The Newton derivative vanished at the current estimate.
    #[error("newton derivative vanished at t = {0}")]
    ZeroDerivative(f64),

    /// The iteration cap was exceeded without meeting the tolerance.
    ///
    /// For intersection this usually means the ray misses the surface;
    /// for refraction it signals total internal reflection. The last
    /// estimate is carried so callers can reconstruct a best-effort
    /// result when they need one.
    #[error("no convergence after {iterations} iterations")]
    NonConvergence {
        /// Iterations performed before giving up.
        iterations: usize,
        /// The estimate the solver last held.
        last_estimate: f64,
    },
}

/// Result type for tracing operations.
pub type Result<T> = std::result::Result<T, TraceError>;
