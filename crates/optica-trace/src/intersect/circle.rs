//! Ray-circle intersection: a plane solve followed by radius clipping.

use super::{intersect_triangle_traced, Intersection};
use crate::solve::{Observer, SolverConfig};
use crate::{Ray, Result};
use optica_geom::Circle;

/// Find where `ray` crosses a flat circular aperture.
///
/// Returns `Ok(None)` when the ray crosses the carrier plane outside the
/// circle's radius; solver failures (parallel ray, non-convergence) come
/// back as errors.
pub fn intersect_circle(
    ray: &Ray,
    circle: &Circle,
    cfg: &SolverConfig,
) -> Result<Option<Intersection>> {
    intersect_circle_traced(ray, circle, cfg, None)
}

/// As [`intersect_circle`], reporting each secant step to `observer`.
pub fn intersect_circle_traced(
    ray: &Ray,
    circle: &Circle,
    cfg: &SolverConfig,
    observer: Option<Observer<'_>>,
) -> Result<Option<Intersection>> {
    let hit = intersect_triangle_traced(ray, &circle.plane, cfg, observer)?;
    if circle.contains(&hit.point) {
        Ok(Some(hit))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use optica_math::{Point3, Vec3};

    #[test]
    fn test_circle_hit_inside() {
        let circle = Circle::new(Point3::origin(), 4.0, &[0.0, 0.0, 0.0]).unwrap();
        let ray = Ray::new(Point3::new(1.0, 1.0, -5.0), Vec3::new(0.0, 0.0, 1.0)).unwrap();

        let hit = intersect_circle(&ray, &circle, &SolverConfig::PLANE)
            .unwrap()
            .expect("inside the aperture");
        assert!((hit.distance - 5.0).abs() < 1e-5);
        assert!((hit.point - Point3::new(1.0, 1.0, 0.0)).norm() < 1e-5);
    }

    #[test]
    fn test_circle_plane_hit_outside_radius() {
        let circle = Circle::new(Point3::origin(), 4.0, &[0.0, 0.0, 0.0]).unwrap();
        let ray = Ray::new(Point3::new(6.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0)).unwrap();

        let result = intersect_circle(&ray, &circle, &SolverConfig::PLANE).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_circle_parallel_ray_fails() {
        let circle = Circle::new(Point3::origin(), 4.0, &[0.0, 0.0, 0.0]).unwrap();
        let ray = Ray::new(Point3::new(0.0, 0.0, 2.0), Vec3::new(1.0, 0.0, 0.0)).unwrap();
        assert!(intersect_circle(&ray, &circle, &SolverConfig::PLANE).is_err());
    }
}
