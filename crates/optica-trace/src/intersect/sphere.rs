//! Ray-sphere intersection via secant iteration on the implicit surface
//! function.

use super::Intersection;
use crate::solve::{secant, Observer, SolverConfig};
use crate::{Ray, Result};
use optica_geom::Sphere;
use optica_math::Point3;

/// Implicit values this close to zero count as "already on the surface".
const ON_SURFACE_EPSILON: f64 = 0.01;
/// Origin shift applied when the ray starts on the surface, in radii.
const SURFACE_SHIFT_RADII: f64 = 1.5;

/// Find where `ray` crosses the sphere's surface.
///
/// An origin already sitting on the surface is pushed `1.5 * radius`
/// forward along the ray so the secant iteration does not collapse onto
/// the trivial root at `t = 0`; the shift is added back to the reported
/// distance.
///
/// A ray that never crosses the surface exhausts the iteration budget and
/// comes back as [`crate::TraceError::NonConvergence`].
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere, cfg: &SolverConfig) -> Result<Intersection> {
    intersect_sphere_traced(ray, sphere, cfg, None)
}

/// As [`intersect_sphere`], reporting each secant step to `observer`.
pub fn intersect_sphere_traced(
    ray: &Ray,
    sphere: &Sphere,
    cfg: &SolverConfig,
    observer: Option<Observer<'_>>,
) -> Result<Intersection> {
    let mut origin = ray.origin;
    let mut shift = 0.0;
    if sphere.implicit(&origin).abs() < ON_SURFACE_EPSILON {
        shift = SURFACE_SHIFT_RADII * sphere.radius;
        origin += shift * ray.direction;
    }

    let probe = Ray {
        origin,
        direction: ray.direction,
    };
    let t = secant(|t| sphere.implicit(&probe.at(t)), cfg, observer)?;
    let point = probe.at(t);

    Ok(Intersection {
        distance: t + shift,
        point,
        normal: sphere_normal(sphere, point),
    })
}

/// Surface normal at a point on the sphere.
///
/// Convention inherited from the tracer's origins: the direction points
/// from the surface point toward the center, scaled by `1/radius`.
pub fn sphere_normal(sphere: &Sphere, point: Point3) -> Ray {
    Ray {
        origin: point,
        direction: (sphere.center - point) / sphere.radius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use optica_math::Vec3;

    #[test]
    fn test_sphere_head_on() {
        let sphere = Sphere::new(Point3::origin(), 5.0).unwrap();
        let ray = Ray::new(Point3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, 1.0)).unwrap();

        let hit = intersect_sphere(&ray, &sphere, &SolverConfig::SPHERE).unwrap();
        assert!((hit.distance - 5.0).abs() < 1e-6);
        assert!((hit.point - Point3::new(0.0, 0.0, -5.0)).norm() < 1e-6);
        // Normal points from the hit toward the center, scaled by 1/r.
        assert!((hit.normal.direction - Vec3::new(0.0, 0.0, 1.0)).norm() < 1e-6);
        assert_eq!(hit.normal.origin, hit.point);
    }

    #[test]
    fn test_sphere_residual_vanishes_at_hit() {
        let sphere = Sphere::new(Point3::new(2.0, -1.0, 4.0), 3.0).unwrap();
        let ray = Ray::between(Point3::new(-10.0, -1.0, 4.0), sphere.center).unwrap();

        let hit = intersect_sphere(&ray, &sphere, &SolverConfig::SPHERE).unwrap();
        assert!(sphere.implicit(&ray.at(hit.distance)).abs() < 1e-5);
        assert!((hit.distance - 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_sphere_origin_on_surface_shifts_past_trivial_root() {
        let sphere = Sphere::new(Point3::origin(), 5.0).unwrap();
        // Origin exactly on the surface, aimed through the sphere; the
        // crossing of interest is the far side at distance 10.
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0)).unwrap();

        let hit = intersect_sphere(&ray, &sphere, &SolverConfig::SPHERE).unwrap();
        assert!((hit.distance - 10.0).abs() < 1e-6);
        assert!((hit.point - Point3::new(0.0, 0.0, 5.0)).norm() < 1e-6);
    }

    #[test]
    fn test_sphere_miss_fails() {
        let sphere = Sphere::new(Point3::origin(), 5.0).unwrap();
        let ray = Ray::new(Point3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 1.0, 0.0)).unwrap();
        assert!(intersect_sphere(&ray, &sphere, &SolverConfig::SPHERE).is_err());
    }

    #[test]
    fn test_sphere_observer_reports_iterations() {
        let sphere = Sphere::new(Point3::origin(), 5.0).unwrap();
        let ray = Ray::new(Point3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, 1.0)).unwrap();

        let mut count = 0usize;
        let mut observer = |_: &crate::IterationStep| count += 1;
        intersect_sphere_traced(&ray, &sphere, &SolverConfig::SPHERE, Some(&mut observer))
            .unwrap();
        assert!(count > 0);
        assert!(count <= SolverConfig::SPHERE.max_iterations);
    }
}
