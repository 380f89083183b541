//! Ray-plane intersection via secant iteration on the implicit plane
//! equation built from a triangle's corners.

use super::Intersection;
use crate::solve::{secant, Observer, SolverConfig};
use crate::{Ray, Result};
use optica_geom::Triangle;
use optica_math::Point3;

/// Find where `ray` crosses the plane spanned by `triangle`.
///
/// The solver treats the plane as infinite; callers clip the hit point to
/// the patch with [`Triangle::contains`]. The returned normal is the raw
/// corner cross product anchored at the hit point, not normalized.
pub fn intersect_triangle(
    ray: &Ray,
    triangle: &Triangle,
    cfg: &SolverConfig,
) -> Result<Intersection> {
    intersect_triangle_traced(ray, triangle, cfg, None)
}

/// As [`intersect_triangle`], reporting each secant step to `observer`.
pub fn intersect_triangle_traced(
    ray: &Ray,
    triangle: &Triangle,
    cfg: &SolverConfig,
    observer: Option<Observer<'_>>,
) -> Result<Intersection> {
    let [a, b, c, d] = triangle.plane_coefficients();

    let t = secant(
        |t| {
            let p = ray.at(t);
            a * p.x + b * p.y + c * p.z + d
        },
        cfg,
        observer,
    )?;
    let point = ray.at(t);

    Ok(Intersection {
        distance: t,
        point,
        normal: triangle_normal(triangle, point),
    })
}

/// Plane normal anchored at `point`: the triangle's raw corner cross
/// product, not normalized.
pub fn triangle_normal(triangle: &Triangle, point: Point3) -> Ray {
    Ray {
        origin: point,
        direction: triangle.normal(),
    }
}
