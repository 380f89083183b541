//! Iterative root-finding engines: the secant method shared by the
//! intersection solvers and the Newton-Raphson loop used by refraction.
//!
//! Both engines stop when the step between successive estimates drops
//! below the configured tolerance, and both report a deterministic
//! [`TraceError::NonConvergence`] when the iteration cap is exceeded.
//! An optional observer receives every iteration for diagnostics.

use crate::{Result, TraceError};
use serde::{Deserialize, Serialize};

/// Tolerance and iteration budget for one solver call.
///
/// The per-operation defaults are part of the observable contract; use the
/// associated constants unless an override is called for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Convergence threshold on the step between successive estimates.
    pub tolerance: f64,
    /// Iteration cap. Exceeding it terminates deterministically with
    /// [`TraceError::NonConvergence`].
    pub max_iterations: usize,
}

impl SolverConfig {
    /// Sphere intersection defaults.
    pub const SPHERE: Self = Self {
        tolerance: 1e-8,
        max_iterations: 1000,
    };

    /// Plane/triangle intersection defaults.
    pub const PLANE: Self = Self {
        tolerance: 1e-5,
        max_iterations: 100,
    };

    /// Refraction (Snell's law) defaults.
    pub const REFRACTION: Self = Self {
        tolerance: 0.01,
        max_iterations: 5000,
    };
}

/// One step of an iterative solve, as reported to the observer hook.
#[derive(Debug, Clone, Copy)]
pub struct IterationStep {
    /// 1-based iteration index.
    pub iteration: usize,
    /// Estimate after this step.
    pub estimate: f64,
    /// Absolute step from the previous estimate.
    pub step: f64,
    /// Function value driving this step.
    pub residual: f64,
}

/// Observer hook invoked once per solver iteration.
pub type Observer<'a> = &'a mut dyn FnMut(&IterationStep);

/// Secant root finding on `f`, seeded with the estimates 0 and 1.
///
/// Converges when the update step drops below `cfg.tolerance`. If the two
/// current samples of `f` are equal the update would divide by zero; that
/// is surfaced as [`TraceError::FlatSecant`] instead of propagating NaN.
pub fn secant(
    f: impl Fn(f64) -> f64,
    cfg: &SolverConfig,
    mut observer: Option<Observer<'_>>,
) -> Result<f64> {
    let mut t_prev = 0.0;
    let mut t = 1.0;
    let mut f_prev = f(t_prev);

    for iteration in 1..=cfg.max_iterations {
        let f_t = f(t);
        let denom = f_t - f_prev;
        if denom == 0.0 {
            return Err(TraceError::FlatSecant);
        }
        let t_next = t - f_t * (t - t_prev) / denom;
        let step = (t_next - t).abs();

        if let Some(obs) = observer.as_mut() {
            obs(&IterationStep {
                iteration,
                estimate: t_next,
                step,
                residual: f_t,
            });
        }

        t_prev = t;
        f_prev = f_t;
        t = t_next;

        if step < cfg.tolerance {
            return Ok(t);
        }
    }

    Err(TraceError::NonConvergence {
        iterations: cfg.max_iterations,
        last_estimate: t,
    })
}

/// Newton-Raphson root finding on `f` with derivative `df`, from `t0`.
pub fn newton(
    f: impl Fn(f64) -> f64,
    df: impl Fn(f64) -> f64,
    t0: f64,
    cfg: &SolverConfig,
    mut observer: Option<Observer<'_>>,
) -> Result<f64> {
    let mut t = t0;

    for iteration in 1..=cfg.max_iterations {
        let value = f(t);
        let derivative = df(t);
        if derivative == 0.0 {
            return Err(TraceError::ZeroDerivative(t));
        }
        let t_next = t - value / derivative;
        let step = (t_next - t).abs();

        if let Some(obs) = observer.as_mut() {
            obs(&IterationStep {
                iteration,
                estimate: t_next,
                step,
                residual: value,
            });
        }

        t = t_next;

        if step < cfg.tolerance {
            return Ok(t);
        }
    }

    Err(TraceError::NonConvergence {
        iterations: cfg.max_iterations,
        last_estimate: t,
    })
}
