//! Snell's-law refraction via Newton-Raphson.
//!
//! Following Spencer & Murty's general ray-tracing procedure, the
//! refraction direction is `mu * I + t * N` where `t` solves the scalar
//! quadratic `t^2 + 2*a*t + b = 0`. The root is found with Newton-Raphson
//! from the parabola's axis; when no real root exists (total internal
//! reflection) the iteration never meets the tolerance and the cap turns
//! that into an explicit error.

use crate::solve::{newton, Observer, SolverConfig};
use crate::{Ray, Result};
use optica_math::MathError;

/// Refract `ray` through the interface whose normal is `normal`, passing
/// from refractive index `n1` into `n2`.
///
/// The normal's origin is the hit point and becomes the refracted ray's
/// origin. Non-convergence signals total internal reflection; use
/// [`refract_or_incident`] for the legacy behavior of passing the ray
/// through unchanged in that case.
pub fn refract(ray: &Ray, normal: &Ray, n1: f64, n2: f64, cfg: &SolverConfig) -> Result<Ray> {
    refract_traced(ray, normal, n1, n2, cfg, None)
}

/// As [`refract`], reporting each Newton step to `observer`.
pub fn refract_traced(
    ray: &Ray,
    normal: &Ray,
    n1: f64,
    n2: f64,
    cfg: &SolverConfig,
    observer: Option<Observer<'_>>,
) -> Result<Ray> {
    let div = normal.direction.norm_squared();
    if div == 0.0 {
        return Err(MathError::ZeroVector.into());
    }

    let mu = n1 / n2;
    let a = mu * ray.direction.dot(&normal.direction) / div;
    let b = (mu * mu - 1.0) / div;

    // Start at the parabola's axis; at grazing incidence (a == 0) there
    // is no finite axis, so fall back to zero and let Newton report the
    // vanished derivative.
    let t0 = if a == 0.0 { 0.0 } else { -b / (2.0 * a) };
    let t = newton(
        |t| t * t + 2.0 * a * t + b,
        |t| 2.0 * (t + a),
        t0,
        cfg,
        observer,
    )?;

    Ok(Ray {
        origin: normal.origin,
        direction: mu * ray.direction + t * normal.direction,
    })
}

/// Refraction with the legacy fallback: any failure (total internal
/// reflection, non-convergence, degenerate normal) returns the incident
/// ray unchanged.
pub fn refract_or_incident(ray: &Ray, normal: &Ray, n1: f64, n2: f64, cfg: &SolverConfig) -> Ray {
    refract(ray, normal, n1, n2, cfg).unwrap_or(*ray)
}
